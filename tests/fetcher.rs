// tests/fetcher.rs
//
// The real HTTP fetcher against a one-shot local server.

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

use dm_screen::core::{Fetcher, HttpFetcher};
use dm_screen::error::FetchError;

// Straight to 127.0.0.1, whatever proxy the environment sets.
fn fetcher() -> HttpFetcher {
    HttpFetcher::with_client(reqwest::blocking::Client::builder().no_proxy().build().unwrap())
}

/// Serve exactly one canned response; returns the URL to hit.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/page", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);
        let mut line = String::new();
        // request line + headers, up to the blank line
        loop {
            line.clear();
            if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                break;
            }
        }
        let mut stream = reader.into_inner();
        write!(
            stream,
            "HTTP/1.1 {status_line}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .unwrap();
        stream.flush().unwrap();
    });

    (url, handle)
}

#[test]
fn success_returns_the_body() {
    let (url, server) = serve_once("200 OK", "<p>Fireball.</p>");
    let body = fetcher().fetch(&url).unwrap();
    server.join().unwrap();
    assert_eq!(body, "<p>Fireball.</p>");
}

#[test]
fn non_success_status_is_an_http_error() {
    let (url, server) = serve_once("404 Not Found", "missing");
    let err = fetcher().fetch(&url).unwrap_err();
    server.join().unwrap();
    match err {
        FetchError::Http { status, url: got } => {
            assert_eq!(status, 404);
            assert_eq!(got, url);
        }
        other => panic!("expected Http, got {other:?}"),
    }
}

#[test]
fn refused_connection_is_a_network_error() {
    // bind then drop to get a port nobody listens on
    let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let url = format!("http://{addr}/page");
    let err = fetcher().fetch(&url).unwrap_err();
    assert!(matches!(err, FetchError::Network { .. }), "{err:?}");
}

// tests/controller.rs
mod common;

use common::FakeFetcher;
use dm_screen::controller::{Notice, ViewController};
use dm_screen::extract::ExtractionSpec;
use dm_screen::specs::{self, Request};

const URL: &str = "https://example.test/page";

fn req() -> Request {
    Request {
        url: URL.into(),
        spec: ExtractionSpec::anchors("Goblin", None),
    }
}

#[test]
fn success_replaces_output() {
    let f = FakeFetcher::new().body(URL, "<p>Menu. Goblin ambush! Two goblins.</p>");
    let mut vc = ViewController::new();
    vc.submit(&f, req());
    assert_eq!(vc.output(), ["Goblin ambush!", "Two goblins."]);
    assert!(vc.notices().is_empty());
    assert_eq!(vc.text(), "Goblin ambush!\nTwo goblins.");
}

#[test]
fn http_404_keeps_previous_output_and_reports_once() {
    let ok = FakeFetcher::new().body(URL, "<p>Goblin camp.</p>");
    let mut vc = ViewController::new();
    vc.submit(&ok, req());
    let before = vc.output().to_vec();

    let missing = FakeFetcher::new().status(URL, 404);
    vc.submit(&missing, req());

    assert_eq!(vc.output(), before.as_slice());
    assert_eq!(vc.notices(), [Notice::Error("Failed to fetch the webpage (HTTP 404).".into())]);
}

#[test]
fn network_failure_is_one_error() {
    let f = FakeFetcher::new().refused(URL);
    let mut vc = ViewController::new();
    vc.submit(&f, req());
    assert!(vc.output().is_empty());
    assert_eq!(vc.notices().len(), 1);
    assert!(vc.notices()[0].is_error());
    assert!(vc.notices()[0].text().contains("connection refused"));
}

#[test]
fn missing_anchor_is_a_warning_with_best_effort_text() {
    let f = FakeFetcher::new().body(URL, "<p>Orcs only. No small folk.</p>");
    let mut vc = ViewController::new();
    vc.submit(&f, req());
    assert_eq!(vc.output(), ["Orcs only.", "No small folk."]);
    assert!(matches!(vc.notices(), [Notice::Warning(_)]));
}

#[test]
fn next_submit_clears_old_notices() {
    let f = FakeFetcher::new().status(URL, 500);
    let mut vc = ViewController::new();
    vc.submit(&f, req());
    assert_eq!(vc.notices().len(), 1);

    let f = FakeFetcher::new().body(URL, "<p>Goblin.</p>");
    vc.submit(&f, req());
    assert!(vc.notices().is_empty());
}

#[test]
fn spell_request_end_to_end() {
    let req = specs::spells::request("fire bolt").unwrap();
    let page = r#"<html><head><script>gtag('config', 'x');</script></head>
        <body><div class="menu">Spells Monsters</div>
        <h1>Fire Bolt</h1><div>Evocation cantrip. Casting time: 1 action.</div></body></html>"#;
    let f = FakeFetcher::new().body("https://www.aidedd.org/dnd/sorts.php?vo=fire-bolt", page);
    let mut vc = ViewController::new();
    vc.submit(&f, req);

    assert_eq!(f.call_count(), 1);
    assert!(vc.notices().is_empty());
    assert_eq!(vc.output(), ["Fire BoltEvocation cantrip.", "Casting time: 1 action."]);
}

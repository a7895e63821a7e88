// tests/cli.rs
//
// Subcommands end to end through `execute`, with a scripted fetcher and an
// in-memory writer.

#![cfg(feature = "cli")]

mod common;

use clap::Parser;
use common::FakeFetcher;
use dm_screen::cli::{execute, Cli};

fn data() -> String {
    format!("{}/data/d100s.csv", env!("CARGO_MANIFEST_DIR"))
}

fn run(args: &[&str], fetcher: &FakeFetcher) -> color_eyre::Result<String> {
    let mut argv = vec!["dm_screen", "--data"];
    let path = data();
    argv.push(&path);
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    let mut out = Vec::new();
    execute(cli, fetcher, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn spell_prints_extracted_lines() {
    let f = FakeFetcher::new().body(
        "https://www.aidedd.org/dnd/sorts.php?vo=Magic-Missile",
        "<p>Menu</p><h1>Magic Missile</h1>\n<p>Three darts. Each one hits.</p>",
    );
    let out = run(&["spell", "Magic", "Missile"], &f).unwrap();
    assert_eq!(out, "Magic Missile\nThree darts.\nEach one hits.\n");
    assert_eq!(f.call_count(), 1);
}

#[test]
fn blank_spell_fails_without_fetching() {
    let f = FakeFetcher::new();
    assert!(run(&["spell", "  "], &f).is_err());
    assert_eq!(f.call_count(), 0);
}

#[test]
fn encounter_404_exits_with_the_fetch_error() {
    let f = FakeFetcher::new().status("https://randomencountersai.com/dungeon/", 404);
    let err = run(&["encounter", "Dungeon"], &f).unwrap_err();
    assert!(err.chain().any(|c| c.to_string() == "Failed to fetch the webpage (HTTP 404)."));
}

#[test]
fn unknown_condition_fails_without_fetching() {
    let f = FakeFetcher::new();
    assert!(run(&["condition", "Sleepy"], &f).is_err());
    assert_eq!(f.call_count(), 0);
}

#[test]
fn condition_prints_one_block() {
    let f = FakeFetcher::new().body(
        "https://dungeons.fandom.com/wiki/SRD:Knocked_Down",
        r#"<div class="mw-parser-output"><p>Knocked flat.</p><p>Stand up as a move action.</p></div>"#,
    );
    let out = run(&["condition", "knocked", "down"], &f).unwrap();
    assert_eq!(out, "Knocked flat. Stand up as a move action.\n");
}

#[test]
fn treasure_prints_the_row() {
    let out = run(&["treasure", "3"], &FakeFetcher::new()).unwrap();
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("Selected Row Number: 3"));
    assert_eq!(lines.next(), Some("Roll: 3"));
    assert_eq!(lines.count(), 4);
}

#[test]
fn treasure_out_of_range_fails() {
    assert!(run(&["treasure", "101"], &FakeFetcher::new()).is_err());
}

#[test]
fn initiative_sorts_highest_first_and_keeps_ties() {
    let out = run(&["initiative", "A:10:12", "B:10:15", "C:15:11"], &FakeFetcher::new()).unwrap();
    let names: Vec<&str> = out
        .lines()
        .skip(1)
        .filter_map(|l| l.split_whitespace().next())
        .collect();
    assert_eq!(names, ["C", "A", "B"]);
}

#[test]
fn initiative_rejects_malformed_entries() {
    assert!(Cli::try_parse_from(["dm_screen", "initiative", "Goblin:12"]).is_err());
}

#[test]
fn links_lists_every_resource() {
    let out = run(&["links"], &FakeFetcher::new()).unwrap();
    assert_eq!(out.lines().count(), 8);
    assert!(out.contains("Spells Filter: https://www.aidedd.org/dnd-filters/spells-5e.php"));
}

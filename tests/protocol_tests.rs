//! Protocol sessions driven end to end through in-memory input and output.

use morris_rust::position::{Phase, Player};
use morris_rust::protocol::MorrisEngine;

/// Run a script and return the engine plus the response blocks (without the
/// blank separator lines).
fn session(script: &str) -> (MorrisEngine, Vec<String>) {
    let mut engine = MorrisEngine::new();
    let mut out = Vec::new();
    engine.run(script.as_bytes(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let responses = text
        .split("\n\n")
        .map(str::trim_end)
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .collect();
    (engine, responses)
}

/// Eighteen placements that leave points 2, 9, 16, 18, 21 and 23 empty.
const OPENING: &str = "\
click a7\nclick d7\nclick d6\nclick b6\nclick c5\nclick f6\n\
click e5\nclick d5\nclick e4\nclick b4\nclick c3\nclick c4\n\
click e3\nclick f4\nclick d2\nclick g4\nclick d1\nclick f2\n";

#[test]
fn test_ids_are_echoed() {
    let (_, responses) = session("1 name\n2 protocol_version\nversion\n");
    assert_eq!(responses[0], "=1 morris-rust");
    assert_eq!(responses[1], "=2 1");
    assert_eq!(responses[2], format!("= {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_comments_and_blank_lines_are_skipped() {
    let (_, responses) = session("# a comment\n\n   \n7 turn\n");
    assert_eq!(responses, vec!["=7 1".to_string()]);
}

#[test]
fn test_errors_use_question_mark() {
    let (engine, responses) = session("1 click\n2 click h8\n3 genmove red\n4 legal\n");
    assert_eq!(responses[0], "?1 missing argument");
    assert!(responses[1].starts_with("?2 invalid point"));
    assert_eq!(responses[2], "?3 unknown command: genmove");
    assert_eq!(responses[3], "?4 missing argument");
    assert_eq!(engine.position().n, 0);
}

#[test]
fn test_ignored_click_is_not_an_error() {
    let (engine, responses) = session("click a7\nclick a7\nturn\n");
    assert_eq!(responses[0], "= placed");
    assert_eq!(responses[1], "= ignored: point is not empty");
    assert_eq!(responses[2], "= 2");
    assert_eq!(engine.position().to_move, Player::Two);
}

#[test]
fn test_quit_stops_reading() {
    let (engine, responses) = session("click a7\nquit\nclick d7\n");
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[1], "=");
    assert_eq!(engine.position().n, 1);
}

#[test]
fn test_full_opening_and_move() {
    let script = format!(
        "{OPENING}phase\npieces\nclick a7\nselected\nclick g7\nlegal a7\nclick a4\nselected\nturn\n"
    );
    let (engine, responses) = session(&script);
    let tail = &responses[18..];

    assert!(responses[..18].iter().all(|r| r == "= placed"));
    assert_eq!(tail[0], "= moving");
    assert_eq!(tail[1], "= 0 0");
    assert_eq!(tail[2], "= selected");
    assert_eq!(tail[3], "= a7");
    assert_eq!(
        tail[4],
        "= ignored: point is not adjacent to the selected piece"
    );
    assert_eq!(tail[5], "= a4");
    assert_eq!(tail[6], "= moved");
    assert_eq!(tail[7], "= none");
    assert_eq!(tail[8], "= 2");
    assert_eq!(engine.position().phase, Phase::Moving);
}

#[test]
fn test_deselect_and_clear_board() {
    let script = format!("{OPENING}click d6\ndeselect\nselected\nclear_board\nphase\npieces\n");
    let (engine, responses) = session(&script);
    let tail = &responses[18..];
    assert_eq!(tail[0], "= selected");
    assert_eq!(tail[2], "= none");
    assert_eq!(tail[4], "= placing");
    assert_eq!(tail[5], "= 9 9");
    assert_eq!(engine.position().occupied_count(), 0);
}

#[test]
fn test_showboard() {
    let (_, responses) = session("click a7\nshowboard\n");
    let board = &responses[1];
    assert!(board.starts_with("= \n7  R-----------.-----------."));
    assert!(board.ends_with("Player 2 (Blue)'s Turn to Place a Piece"));
}

#[test]
fn test_state_snapshot() {
    let (_, responses) = session("click a7\nclick g1\nstate\n");
    let json = responses[2].strip_prefix("= ").unwrap();
    let state: serde_json::Value = serde_json::from_str(json).unwrap();

    assert_eq!(state["phase"], "placing");
    assert_eq!(state["to_move"], "One");
    assert_eq!(state["cells"][0]["Occupied"], "One");
    assert_eq!(state["cells"][23]["Occupied"], "Two");
    assert_eq!(state["cells"][1], "Empty");
    assert_eq!(state["remaining"]["player_one"], 8);
    assert_eq!(state["selected"], serde_json::Value::Null);
}

#[test]
fn test_list_commands() {
    let (_, responses) = session("list_commands\nknown_command CLICK\n");
    assert!(responses[0].starts_with("= clear_board\nclick\n"));
    assert!(responses[0].ends_with("\nversion"));
    assert_eq!(responses[1], "= true");
}

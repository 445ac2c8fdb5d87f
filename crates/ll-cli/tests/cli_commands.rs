//! Integration tests for the CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn lodge() -> Command {
    let mut cmd = Command::cargo_bin("lodge").unwrap();
    cmd.arg("--no-color");
    cmd
}

/// Feed the given lines, one per prompt.
fn script(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}

#[test]
fn quit_from_the_first_menu() {
    lodge()
        .write_stdin(script(&["1", "Holmes", "q"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to 'Name of Game'"))
        .stdout(predicate::str::contains("Enter your Detective's name:"))
        .stdout(predicate::str::contains("- - Main Menu - -"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn eof_ends_the_game_cleanly() {
    lodge()
        .write_stdin("2\nRex\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Press 'q' to quit or 's' to start:"));
}

#[test]
fn play_subcommand_is_the_default() {
    lodge()
        .arg("play")
        .write_stdin(script(&["3", "2", "Rex", "q"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice."))
        .stdout(predicate::str::contains("Enter your Murderer's name:"));
}

#[test]
fn detective_solves_the_case() {
    lodge()
        .write_stdin(script(&[
            "1", "Holmes", "s", // start
            "m", "2", "e", // porta-potty
            "m", "3", "e", // bar
            "m", "4", "e", // woods
            "m", "6", "e", "e", "yes", "2204", // couple's room and safe
            "a", "1", // arrest John
            "no",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains("You found a Bracelet"))
        .stdout(predicate::str::contains("You opened the safe"))
        .stdout(predicate::str::contains("Great Work!, Case closed!"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn murderer_escapes_by_car() {
    lodge()
        .write_stdin(script(&[
            "2", "Rex", "s", // start
            "e", "f", "e", "f", "e", // knife, flashlight, berry
            "u", "2", "f", // light the woods and reach the bar
            "yes", "1", // stab
            "f", "e", "u", "4", // keys
            "no",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You see Valerie Kiss another guy, You get really angry",
        ))
        .stdout(predicate::str::contains("You stab Valerie Multiple times"))
        .stdout(predicate::str::contains("You have Escaped!"));
}

#[test]
fn murderer_caught_after_too_many_back_moves() {
    lodge()
        .write_stdin(script(&[
            "2", "Rex", "s", "e", "f", "b", "f", "b", "f", "b", "f", "b", "no",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You can move back 0 times before getting caught",
        ))
        .stdout(predicate::str::contains("You have been caught!"));
}

#[test]
fn restart_starts_a_fresh_game() {
    lodge()
        .write_stdin(script(&[
            "1", "Holmes", "s", "a", // not enough clues
            "q", "n", // new game from the menu
            "2", "Rex", "q",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "You need to find more clues before you arrest someone",
        ))
        .stdout(predicate::str::contains("Enter your Murderer's name:"));
}

#[test]
fn recap_text_lists_the_journal() {
    lodge()
        .args(["--recap", "text"])
        .write_stdin(script(&["1", "Holmes", "s", "m", "3", "e", "q", "q"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Lonely Lodge Journal"))
        .stdout(predicate::str::contains("Playthrough 1: Detective Holmes"))
        .stdout(predicate::str::contains("found clue 'Bracelet'"));
}

#[test]
fn recap_json_is_valid() {
    lodge()
        .args(["--recap", "json"])
        .write_stdin(script(&["2", "Rex", "s", "e", "q", "q"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"event\": \"tool_found\""))
        .stdout(predicate::str::contains("\"tool\": \"kitchen_knife\""));
}

#[test]
fn map_lists_rooms() {
    lodge()
        .arg("map")
        .assert()
        .success()
        .stdout(predicate::str::contains("Slippery Slope"))
        .stdout(predicate::str::contains("Bracelet"))
        .stdout(predicate::str::contains("Car keys"))
        .stdout(predicate::str::contains("6 rooms"));
}

#[test]
fn bad_recap_format_fails() {
    lodge()
        .args(["--recap", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

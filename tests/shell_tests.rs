//! Integration tests for the menu loop and the action journal

use std::io::{BufRead, BufReader, Cursor};

use tetris_stack::config::Config;
use tetris_stack::input::MenuReader;
use tetris_stack::journal::{Journal, JournalRecord};
use tetris_stack::shell::{run, RunSummary};
use tetris_stack::term::ConsoleRenderer;
use tetris_stack::types::Level;

fn config(level: Option<Level>) -> Config {
    Config {
        seed: 12345,
        level,
        log_path: None,
        color: false,
        help: false,
    }
}

fn play_script(config: &Config, script: &str, journal: &mut Journal) -> (RunSummary, String) {
    let mut reader = MenuReader::new(Cursor::new(script.to_string()));
    let mut renderer = ConsoleRenderer::new(Vec::new(), config.color);
    let summary = run(config, &mut reader, &mut renderer, journal).unwrap();
    let output = String::from_utf8(renderer.into_inner()).unwrap();
    (summary, output)
}

#[test]
fn test_novice_play_then_quit() {
    let (summary, output) = play_script(&config(Some(Level::Novice)), "1\n0\n", &mut Journal::disabled());

    assert_eq!(
        summary,
        RunSummary {
            applied: 1,
            rejected: 0,
            invalid: 0
        }
    );
    assert!(output.contains("Actions (novice level):"));
    assert!(output.contains("Played [") && output.contains(" 0]; ["));
    assert!(output.contains(" 5] joined the queue."));
    assert!(output.trim_end().ends_with("Leaving the game..."));
    assert!(!output.contains('\u{1b}'), "colour disabled");
}

#[test]
fn test_novice_insert_reports_full_queue() {
    let (summary, output) = play_script(&config(Some(Level::Novice)), "2\n", &mut Journal::disabled());
    assert_eq!(summary.rejected, 1);
    assert!(output.contains("Cannot do that: the queue is full, no piece can be added."));
}

#[test]
fn test_locked_and_garbage_selections_are_invalid() {
    let (summary, output) = play_script(
        &config(Some(Level::Adventurer)),
        "4\nhello\n3\n",
        &mut Journal::disabled(),
    );
    assert_eq!(summary.invalid, 2);
    assert_eq!(summary.rejected, 1, "use reserved on an empty stack");
    assert!(output.contains("Invalid option for the adventurer level, try again."));
}

#[test]
fn test_master_scenario_with_undo() {
    // reserve x3, swap triple, undo, undo again, quit
    let (summary, output) = play_script(
        &config(Some(Level::Master)),
        "2\n2\n2\n5\n7\n7\n0\n",
        &mut Journal::disabled(),
    );
    assert_eq!(summary.applied, 5);
    assert_eq!(summary.rejected, 1);
    assert!(output.contains("Swapped the first 3 queue pieces with the reserve"));
    assert!(output.contains("Last action undone."));
    assert!(output.contains("Cannot do that: there is no action to undo."));
}

#[test]
fn test_level_prompt_retries_until_valid() {
    let (summary, output) = play_script(&config(None), "9\nmaster\n6\n", &mut Journal::disabled());
    assert!(output.contains("Choose a level:"));
    assert!(output.contains("Unknown level: 9"));
    assert!(output.contains("Actions (master level):"));
    assert_eq!(summary.applied, 1);
}

#[test]
fn test_end_of_input_at_level_prompt() {
    let (summary, output) = play_script(&config(None), "", &mut Journal::disabled());
    assert_eq!(summary, RunSummary::default());
    assert!(output.trim_end().ends_with("Leaving the game..."));
}

#[test]
fn test_color_output_uses_escape_sequences() {
    let mut cfg = config(Some(Level::Novice));
    cfg.color = true;
    let (_, output) = play_script(&cfg, "1\n", &mut Journal::disabled());
    assert!(output.contains('\u{1b}'));
}

#[test]
fn test_journal_records_each_applied_action() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.jsonl");

    let mut journal = Journal::open(&path).unwrap();
    assert!(journal.is_enabled());
    play_script(&config(Some(Level::Adventurer)), "2\n3\n3\n9\n0\n", &mut journal);
    assert_eq!(journal.seq(), 3);
    drop(journal);

    let file = std::fs::File::open(&path).unwrap();
    let records: Vec<JournalRecord> = BufReader::new(file)
        .lines()
        .map(|line| serde_json::from_str(&line.unwrap()).unwrap())
        .collect();

    assert_eq!(records.len(), 3);
    assert_eq!(
        records.iter().map(|r| r.seq).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
    assert_eq!(records[0].action, "reserve");
    assert!(records[0].ok);
    assert_eq!(records[0].stack.len(), 1);
    assert_eq!(records[0].stack[0].id, 0);
    assert_eq!(records[1].action, "useReserved");
    assert!(records[1].stack.is_empty());
    assert!(!records[2].ok);
    assert_eq!(records[2].error.as_deref(), Some("empty_stack"));
    assert!(records.iter().all(|r| r.level == "adventurer" && r.queue.len() == 5));
}

#[test]
fn test_journal_open_fails_for_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("journal.jsonl");
    assert!(Journal::open(&path).is_err());
}

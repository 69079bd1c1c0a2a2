//! Session Tests
//!
//! These tests verify:
//! - Greeting and batch termination
//! - Graceful exit vs abrupt disconnect
//! - Dispatch of every command kind through the session loop
//! - Storage and transport fault handling

use std::io::{self, Cursor};
use std::sync::Arc;

use scheduler::network::{Session, SessionEnd, SessionState};
use scheduler::protocol::markup::strip;
use scheduler::protocol::response::{self, NOT_FOUND};
use scheduler::protocol::{BatchEnd, Topic, END_CONNECTION};
use scheduler::MemoryStore;

use crate::support::{
    batches, run_session, sample_store, script, FailingStore, FailingWriter,
};

fn plain(lines: &[String]) -> Vec<String> {
    lines.iter().map(|l| strip(l)).collect()
}

// =============================================================================
// Lifecycle Tests
// =============================================================================

#[test]
fn test_greeting_is_first_batch() {
    let (_, batches) = run_session(sample_store(), &["exit"]);

    assert_eq!(batches[0].lines, response::greeting());
    assert_eq!(batches[0].end, BatchEnd::Transmission);
}

#[test]
fn test_exit_sends_farewell_then_end_connection() {
    let (end, batches) = run_session(sample_store(), &["exit"]);

    assert_eq!(end, SessionEnd::Exited);
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[1].lines, vec![response::farewell()]);
    assert_eq!(batches[1].end, BatchEnd::Connection);
}

#[test]
fn test_nothing_is_read_after_exit() {
    let (end, batches) = run_session(sample_store(), &["exit", "help", "list lecturer"]);

    assert_eq!(end, SessionEnd::Exited);
    assert_eq!(batches.len(), 2);
    assert_eq!(batches.last().map(|b| b.end), Some(BatchEnd::Connection));
}

#[test]
fn test_abrupt_disconnect_sends_no_end_connection() {
    // input ends while the session waits for the next command
    let (end, batches) = run_session(sample_store(), &["help"]);

    assert_eq!(end, SessionEnd::Disconnected);
    assert_eq!(batches.len(), 2);
    assert!(batches.iter().all(|b| b.end == BatchEnd::Transmission));
    assert!(batches
        .iter()
        .all(|b| !b.lines.iter().any(|l| l == END_CONNECTION)));
}

#[test]
fn test_disconnect_mid_frame() {
    let mut input = script(&["list subject"]);
    input.extend_from_slice(&[0x00, 0x10, b'l', b'i']);

    let mut session = Session::new(Cursor::new(input), Vec::new(), sample_store(), "test");
    assert_eq!(session.run().unwrap(), SessionEnd::Disconnected);

    let batches = batches(session.into_writer());
    assert_eq!(batches.len(), 2);
}

#[test]
fn test_state_transitions_to_closed() {
    let mut session = Session::new(
        Cursor::new(script(&["exit"])),
        Vec::new(),
        sample_store(),
        "test",
    );
    assert_eq!(session.state(), SessionState::Open);

    session.run().unwrap();
    assert_eq!(session.state(), SessionState::Closed);

    // closed is terminal: running again does nothing
    assert_eq!(session.run().unwrap(), SessionEnd::Disconnected);
    assert_eq!(batches(session.into_writer()).len(), 2);
}

// =============================================================================
// Batch Tests
// =============================================================================

#[test]
fn test_every_command_gets_exactly_one_batch() {
    let commands = [
        "list lecturer",
        "list subject",
        "search lecturer Vilde Birkenes",
        "search subject java",
        "search lecturer",
        "list",
        "help",
        "help search",
        "help asdf",
        "bogus command",
        "",
    ];
    let (_, batches) = run_session(sample_store(), &commands);

    // greeting + one per command
    assert_eq!(batches.len(), commands.len() + 1);
    assert!(batches.iter().all(|b| b.end == BatchEnd::Transmission));
}

#[test]
fn test_unknown_command_gets_empty_batch() {
    let (_, batches) = run_session(sample_store(), &["dance"]);
    assert!(batches[1].lines.is_empty());
    assert_eq!(batches[1].end, BatchEnd::Transmission);
}

#[test]
fn test_blank_line_gets_empty_batch() {
    let (_, batches) = run_session(sample_store(), &["   "]);
    assert!(batches[1].lines.is_empty());
}

#[test]
fn test_malformed_frame_gets_empty_batch_and_session_continues() {
    let mut input = vec![0x00, 0x01, 0xFF];
    input.extend(script(&["help"]));

    let mut session = Session::new(Cursor::new(input), Vec::new(), sample_store(), "test");
    session.run().unwrap();

    let batches = batches(session.into_writer());
    assert_eq!(batches.len(), 3);
    assert!(batches[1].lines.is_empty());
    assert_eq!(batches[2].lines, response::help_menu());
}

#[test]
fn test_oversized_reply_line_is_dropped_and_session_continues() {
    // fits in one frame, but the echoed reply does not
    let long_help = format!("help {}", "a".repeat(65520));
    let (end, batches) = run_session(sample_store(), &[long_help.as_str(), "help"]);

    assert_eq!(end, SessionEnd::Disconnected);
    assert_eq!(batches.len(), 3);
    assert!(batches[1].lines.is_empty());
    assert_eq!(batches[1].end, BatchEnd::Transmission);
    assert_eq!(batches[2].lines, response::help_menu());
}

// =============================================================================
// Command Tests
// =============================================================================

#[test]
fn test_list_lecturer() {
    let (_, batches) = run_session(sample_store(), &["list lecturer"]);
    let lines = plain(&batches[1].lines);

    assert!(lines[0].starts_with("Name"));
    // Melby teaches two subjects, Birkenes one, Nordahl none
    assert_eq!(lines.len(), 5);
    assert!(lines[1].starts_with("Alexander Melby"));
    assert!(lines[1].ends_with("PG4200"));
    assert_eq!(lines[2].trim(), "PG3300");
    assert!(lines[3].starts_with("Vilde Birkenes"));
    assert!(lines[4].starts_with("Lilly Nordahl"));
    assert!(lines[4].ends_with("None"));
}

#[test]
fn test_list_subject() {
    let (_, batches) = run_session(sample_store(), &["LIST SUBJECT"]);
    let lines = plain(&batches[1].lines);

    assert!(lines[0].starts_with("Subject"));
    let all = lines.join("\n");
    for code in ["PG4200", "PG3300", "PG5100"] {
        assert!(all.contains(code), "missing {}", code);
    }
    assert!(lines.last().unwrap().ends_with("None"));
}

#[test]
fn test_search_lecturer_found() {
    let store = MemoryStore::new();
    let lecturer = store.add_lecturer("ann berg");
    let subject = store.add_subject("pg1000", "intro", 10);
    store.link(&subject, &lecturer).unwrap();

    let (_, batches) = run_session(Arc::new(store), &["search lecturer Ann Berg"]);
    let lines = plain(&batches[1].lines);

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Name"));
    assert!(lines[1].starts_with("ann berg"));
    assert!(lines[1].ends_with("pg1000"));
}

#[test]
fn test_search_subject_partial_found() {
    let store = MemoryStore::new();
    store.add_subject("pg3300", "software design", 94);

    let (_, batches) = run_session(Arc::new(store), &["search subject design"]);
    let lines = plain(&batches[1].lines);

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Subject"));
    assert!(lines[1].starts_with("software design"));
    assert!(lines[1].ends_with("None"));
}

#[test]
fn test_search_term_is_lowercased_before_lookup() {
    // the parser lowercases the line and the store matches case-sensitively
    let (_, batches) = run_session(sample_store(), &["search lecturer Vilde Birkenes"]);
    assert_eq!(batches[1].lines, vec![NOT_FOUND.to_string()]);
}

#[test]
fn test_search_subject_by_code_is_case_sensitive() {
    let (_, batches) = run_session(sample_store(), &["search subject pg3300"]);
    assert_eq!(batches[1].lines, vec![NOT_FOUND.to_string()]);
}

#[test]
fn test_search_subject_not_found() {
    let (_, batches) = run_session(sample_store(), &["search subject java"]);
    assert_eq!(batches[1].lines, vec!["No result was found.".to_string()]);
    assert_eq!(batches[1].end, BatchEnd::Transmission);
}

#[test]
fn test_search_with_two_tokens_is_usage() {
    let (_, batches) = run_session(sample_store(), &["search lecturer"]);
    assert_eq!(batches[1].lines, vec![response::usage(Topic::Search)]);
}

#[test]
fn test_list_usage() {
    let (_, batches) = run_session(sample_store(), &["list asdg"]);
    let lines = plain(&batches[1].lines);
    assert_eq!(lines, vec!["Usage: list lecturer|subject".to_string()]);
}

#[test]
fn test_help_menu() {
    let (_, batches) = run_session(sample_store(), &["help"]);
    let lines = plain(&batches[1].lines).join("\n");
    assert!(lines.contains("Help:"));
    assert!(lines.contains("The following commands are available."));
}

#[test]
fn test_help_topics_contain_usage() {
    let (_, batches) = run_session(sample_store(), &["help list", "help search"]);

    assert!(batches[1].lines.contains(&response::usage(Topic::List)));
    assert!(batches[2].lines.contains(&response::usage(Topic::Search)));
}

#[test]
fn test_help_unknown_word() {
    let (_, batches) = run_session(sample_store(), &["help asdf"]);
    let lines = plain(&batches[1].lines);
    assert_eq!(lines, vec!["The command 'asdf' does not exist.".to_string()]);
}

// =============================================================================
// Fault Tests
// =============================================================================

#[test]
fn test_storage_fault_is_reported_and_session_continues() {
    let (end, batches) = run_session(
        Arc::new(FailingStore),
        &["list lecturer", "list subject", "search lecturer x y", "exit"],
    );

    assert_eq!(end, SessionEnd::Exited);
    assert_eq!(plain(&batches[1].lines), vec!["Failed to retrieve lecturers."]);
    assert_eq!(plain(&batches[2].lines), vec!["Failed to retrieve subjects."]);
    // resolver faults collapse to not found
    assert_eq!(batches[3].lines, vec![NOT_FOUND.to_string()]);
    assert_eq!(batches[4].end, BatchEnd::Connection);
}

#[test]
fn test_write_failure_ends_session_with_error() {
    let mut session = Session::new(
        Cursor::new(script(&["help"])),
        FailingWriter(io::ErrorKind::Other),
        sample_store(),
        "test",
    );

    assert!(session.run().is_err());
    assert_eq!(session.state(), SessionState::Closed);
}

#[test]
fn test_broken_pipe_is_disconnect() {
    let mut session = Session::new(
        Cursor::new(script(&["help"])),
        FailingWriter(io::ErrorKind::BrokenPipe),
        sample_store(),
        "test",
    );

    assert_eq!(session.run().unwrap(), SessionEnd::Disconnected);
}

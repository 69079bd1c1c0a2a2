//! Response definitions
//!
//! Fixed texts sent to clients: greeting, usage, help pages and the
//! one-line outcomes of lookups.

use super::command::Topic;
use super::markup::style;

/// Sent when a search resolves to nothing
pub const NOT_FOUND: &str = "No result was found.";

const RULE: &str = "-------------------------------";

/// Lines sent right after a connection is accepted
pub fn greeting() -> Vec<String> {
    vec![
        style(
            "green",
            "You have been successfully connected to the Scheduler Database.",
        ),
        style(
            "green",
            "To search the database, type \"search (lecturer|subject) <search term>\"",
        ),
    ]
}

/// Line sent in answer to `exit`
pub fn farewell() -> String {
    style("bold,green", "Goodbye! Closing the connection.")
}

/// The one-line usage hint of a verb
pub fn usage(topic: Topic) -> String {
    let synopsis = match topic {
        Topic::List => "list lecturer|subject",
        Topic::Search => "search lecturer|subject <search term>",
    };
    format!("{} {}", style("bold,blue", "Usage:"), style("blue", synopsis))
}

/// Full help page of a verb; always embeds [`usage`] verbatim
pub fn help_topic(topic: Topic) -> Vec<String> {
    let (title, description, examples): (&str, &[&str], &[&str]) = match topic {
        Topic::List => (
            "List:",
            &[
                "The list command is used to list everything about a single item.",
                "You can use it to view all lecturers or subjects.",
            ],
            &["list lecturer", "list subject"],
        ),
        Topic::Search => (
            "Search:",
            &[
                "The search command is used to find information.",
                "You can use search with lecturer name or subject code.",
                "Search terms are lowercased and matched case-sensitively.",
            ],
            &["search subject datastrukturer", "search subject programmering"],
        ),
    };

    let mut lines = vec![style("bold,cyan", title), style("cyan", RULE), usage(topic)];
    lines.extend(description.iter().map(|line| line.to_string()));
    lines.push(style("bold,magenta", "Usage examples:"));
    lines.extend(examples.iter().map(|line| line.to_string()));
    lines.push(style("cyan", RULE));
    lines
}

/// The command menu sent for a bare `help`
pub fn help_menu() -> Vec<String> {
    vec![
        style("bold,cyan", "Help:"),
        style("cyan", RULE),
        style("magenta", "The following commands are available."),
        style("magenta", "For more information, type \"help <cmd>\"."),
        style("red", "search"),
        style("red", "list"),
        style("red", "exit"),
    ]
}

/// Answer to `help <word>` for a word that is not a help topic
pub fn unknown_command(word: &str) -> String {
    style("red", &format!("The command '{}' does not exist.", word))
}

/// Sent when the store failed while fetching `what`
pub fn retrieval_failed(what: &str) -> String {
    style("red", &format!("Failed to retrieve {}.", what))
}

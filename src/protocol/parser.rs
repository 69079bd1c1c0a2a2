//! Command parser
//!
//! Turns one client line into a [`Command`]. Malformed `list`/`search`
//! lines degrade to a usage request instead of failing.

use super::command::{Command, CommandType, HelpTopic, Target, Topic};

/// Parse a raw client line
///
/// Returns `None` for empty input or an unknown verb; the caller answers
/// those with an empty batch.
pub fn parse(line: &str) -> Option<Command> {
    let lowered = line.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    let (verb, rest) = tokens.split_first()?;

    match *verb {
        "list" => Some(parse_list(rest)),
        "search" => Some(parse_search(rest)),
        "help" => Some(parse_help(rest)),
        "exit" => Some(Command::Exit),
        _ => None,
    }
}

/// `list <type>`
fn parse_list(rest: &[&str]) -> Command {
    match rest.first().and_then(|token| target(token)) {
        Some(target) => Command::List { target },
        None => Command::Usage { topic: Topic::List },
    }
}

/// `search <type> <term...>`
fn parse_search(rest: &[&str]) -> Command {
    let usage = Command::Usage {
        topic: Topic::Search,
    };

    let Some((kind, terms)) = rest.split_first() else {
        return usage;
    };
    if terms.is_empty() {
        return usage;
    }

    match target(kind) {
        Some(target) => Command::Search {
            target,
            terms: terms.iter().map(|t| t.to_string()).collect(),
        },
        None => usage,
    }
}

/// `help [topic]`
fn parse_help(rest: &[&str]) -> Command {
    Command::Help(rest.first().map(|word| HelpTopic {
        kind: CommandType::from_token(word),
        word: word.to_string(),
    }))
}

fn target(token: &str) -> Option<Target> {
    CommandType::from_token(token).as_target()
}

//! Command definitions
//!
//! Represents commands parsed from client lines.

/// What a command does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Search,
    SendHelp,
    SendUsage,
    Exit,
}

/// What a command applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    Lecturer,
    Subject,
    List,
    Search,
    None,
}

impl CommandType {
    /// Resolve an (already lowercased) token by exact match
    pub fn from_token(token: &str) -> Self {
        match token {
            "lecturer" => CommandType::Lecturer,
            "subject" => CommandType::Subject,
            "list" => CommandType::List,
            "search" => CommandType::Search,
            _ => CommandType::None,
        }
    }

    /// The record kind this type names, if any
    pub fn as_target(self) -> Option<Target> {
        match self {
            CommandType::Lecturer => Some(Target::Lecturer),
            CommandType::Subject => Some(Target::Subject),
            CommandType::List | CommandType::Search | CommandType::None => None,
        }
    }

    /// The help/usage topic this type names, if any
    pub fn as_topic(self) -> Option<Topic> {
        match self {
            CommandType::List => Some(Topic::List),
            CommandType::Search => Some(Topic::Search),
            CommandType::Lecturer | CommandType::Subject | CommandType::None => None,
        }
    }
}

/// A record kind that can be listed or searched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Lecturer,
    Subject,
}

impl From<Target> for CommandType {
    fn from(target: Target) -> Self {
        match target {
            Target::Lecturer => CommandType::Lecturer,
            Target::Subject => CommandType::Subject,
        }
    }
}

/// A verb with its own usage line and help page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    List,
    Search,
}

impl From<Topic> for CommandType {
    fn from(topic: Topic) -> Self {
        match topic {
            Topic::List => CommandType::List,
            Topic::Search => CommandType::Search,
        }
    }
}

/// The word following `help`, with whatever type it resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpTopic {
    /// Resolved type (`CommandType::None` if the word is unknown)
    pub kind: CommandType,

    /// The word as typed (lowercased), reported back if unknown
    pub word: String,
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every record of a kind
    List { target: Target },

    /// Search for one record; `terms` keep their positional order
    Search { target: Target, terms: Vec<String> },

    /// Answer with the usage line of a verb
    Usage { topic: Topic },

    /// The command menu (`None`) or help on one word
    Help(Option<HelpTopic>),

    /// End the session
    Exit,
}

impl Command {
    /// Get the command action
    pub fn action(&self) -> Action {
        match self {
            Command::List { .. } => Action::List,
            Command::Search { .. } => Action::Search,
            Command::Usage { .. } => Action::SendUsage,
            Command::Help(_) => Action::SendHelp,
            Command::Exit => Action::Exit,
        }
    }

    /// Get the command type
    pub fn command_type(&self) -> CommandType {
        match self {
            Command::List { target } | Command::Search { target, .. } => (*target).into(),
            Command::Usage { topic } => (*topic).into(),
            Command::Help(Some(topic)) => topic.kind,
            Command::Help(None) | Command::Exit => CommandType::None,
        }
    }

    /// Positional arguments; empty when the command takes none
    pub fn args(&self) -> &[String] {
        match self {
            Command::Search { terms, .. } => terms,
            Command::Help(Some(topic)) => std::slice::from_ref(&topic.word),
            Command::List { .. } | Command::Usage { .. } | Command::Help(None) | Command::Exit => {
                &[]
            }
        }
    }

    /// The search term: arguments re-joined with single spaces
    pub fn search_term(&self) -> Option<String> {
        match self {
            Command::Search { terms, .. } => Some(terms.join(" ")),
            _ => None,
        }
    }
}

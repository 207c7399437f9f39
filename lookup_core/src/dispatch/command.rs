//! Console text to commands.

use serde::Serialize;

/// Marker that addresses free text to the assistant on the console.
pub const MENTION_MARKER: &str = "@runeterra";

/// An explicit command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Command {
    /// Free question, classified before resolving.
    Ask(String),
    Champion(String),
    Item(String),
    Region(String),
    Help,
}

impl Command {
    /// Parse `/ask …`, `/champ …`, `/item …`, `/region …` or `/help`.
    ///
    /// Commands that take an argument need a non-empty one.
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        let rest = line.strip_prefix('/')?;
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        let with_arg = |build: fn(String) -> Command| {
            (!arg.is_empty()).then(|| build(arg.to_string()))
        };

        match name.to_lowercase().as_str() {
            "help" => Some(Command::Help),
            "ask" => with_arg(Command::Ask),
            "champ" => with_arg(Command::Champion),
            "item" => with_arg(Command::Item),
            "region" => with_arg(Command::Region),
            _ => None,
        }
    }

    /// Short name for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Command::Ask(_) => "ask",
            Command::Champion(_) => "champ",
            Command::Item(_) => "item",
            Command::Region(_) => "region",
            Command::Help => "help",
        }
    }
}

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    Command(Command),
    /// Text addressed to the assistant, marker removed. May be empty.
    Mention(String),
    Unrecognized,
}

impl Inbound {
    pub fn parse(line: &str) -> Inbound {
        if line.trim_start().starts_with('/') {
            return Command::parse(line).map_or(Inbound::Unrecognized, Inbound::Command);
        }
        strip_mention(line, MENTION_MARKER).map_or(Inbound::Unrecognized, Inbound::Mention)
    }
}

/// Remove every occurrence of `marker` (ASCII case-insensitive).
///
/// `None` when the text does not mention the marker at all.
pub fn strip_mention(text: &str, marker: &str) -> Option<String> {
    if marker.is_empty() {
        return None;
    }
    let lower = text.to_ascii_lowercase();
    let marker = marker.to_ascii_lowercase();
    if !lower.contains(&marker) {
        return None;
    }

    // ASCII lowercasing keeps byte offsets aligned with `text`
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (start, _) in lower.match_indices(&marker) {
        out.push_str(&text[last..start]);
        last = start + marker.len();
    }
    out.push_str(&text[last..]);
    Some(out.split_whitespace().collect::<Vec<_>>().join(" "))
}

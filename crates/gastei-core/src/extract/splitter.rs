//! Multi-transaction messages.

use tracing::{debug, info};

use super::fields::extract;
use super::ParseOutcome;

/// Splits a chat message into segments and extracts each one.
///
/// There is no escaping: a `|` inside a description splits the segment.
#[derive(Debug, Clone)]
pub struct MessageParser {
    delimiter: char,
}

impl MessageParser {
    /// Create a parser using the `|` delimiter.
    pub fn new() -> Self {
        Self { delimiter: '|' }
    }

    /// Set the segment delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// One outcome per delimited segment, in message order. A failing
    /// segment never stops the ones after it, and empty segments are
    /// reported rather than dropped.
    pub fn parse(&self, raw_message: &str, user: &str) -> Vec<ParseOutcome> {
        let outcomes: Vec<ParseOutcome> = raw_message
            .split(self.delimiter)
            .map(|segment| extract(segment.trim(), user))
            .collect();

        let ok = outcomes.iter().filter(|o| o.is_ok()).count();
        info!(
            "Parsed {} segment(s) from {} characters, {} valid",
            outcomes.len(),
            raw_message.len(),
            ok
        );
        for (i, outcome) in outcomes.iter().enumerate() {
            if let Err(e) = outcome {
                debug!("Segment {} rejected: {}", i + 1, e.problem);
            }
        }

        outcomes
    }
}

impl Default for MessageParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Split `raw_message` on `|` and extract every segment.
pub fn split_and_extract(raw_message: &str, user: &str) -> Vec<ParseOutcome> {
    MessageParser::new().parse(raw_message, user)
}

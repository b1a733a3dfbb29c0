//! Key-driven calculator sessions
//!
//! A [`Session`] owns one engine and turns typed keys into [`Frame`]s, the
//! unit the terminal front end renders.

use abacus_calculator::{CalculatorEngine, EngineConfig, map_key};
use abacus_types::{CalculatorState, InputEvent};
use serde::Serialize;
use tracing::debug;

/// Result of one consumed key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Key as typed
    pub key: String,
    /// Event the key was mapped to
    pub event: InputEvent,
    /// Display text after the event
    pub display: String,
    /// User-facing notice, set when the event raised an error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    /// Engine state after the event
    pub state: CalculatorState,
}

/// One calculator and the keys fed to it
#[derive(Debug, Default)]
pub struct Session {
    engine: CalculatorEngine,
    ignored_keys: usize,
}

impl Session {
    /// Start a session on a fresh engine
    pub fn new(config: EngineConfig) -> Self {
        Self { engine: CalculatorEngine::with_config(config), ignored_keys: 0 }
    }

    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Number of keys that had no binding
    pub fn ignored_keys(&self) -> usize {
        self.ignored_keys
    }

    /// Feed one key. Unbound keys produce no frame.
    pub fn feed_key(&mut self, key: &str) -> Option<Frame> {
        let Some(event) = map_key(key) else {
            debug!(key, "Ignoring unbound key");
            self.ignored_keys += 1;
            return None;
        };

        let (display, notice) = match self.engine.apply(event) {
            Ok(display) => (display, None),
            Err(err) => (self.engine.display(), Some(err.notice().to_string())),
        };

        Some(Frame {
            key: key.to_string(),
            event,
            display,
            notice,
            state: self.engine.state().clone(),
        })
    }

    /// Feed every key of `line` in order, see [`split_keys`].
    pub fn feed_line(&mut self, line: &str) -> Vec<Frame> {
        split_keys(line).iter().filter_map(|key| self.feed_key(key)).collect()
    }
}

/// Split typed input into key names.
///
/// Every non-whitespace character is one key; `{Name}` spells a named key
/// such as `{Enter}` or `{Escape}`. An unterminated `{` is an ordinary key.
pub fn split_keys(input: &str) -> Vec<String> {
    let mut keys = Vec::new();
    let mut rest = input;

    while let Some(c) = rest.chars().next() {
        if c == '{' {
            if let Some(end) = rest.find('}') {
                let name = &rest[1..end];
                if !name.is_empty() && !name.contains(char::is_whitespace) {
                    keys.push(name.to_string());
                    rest = &rest[end + 1..];
                    continue;
                }
            }
        }
        if !c.is_whitespace() {
            keys.push(c.to_string());
        }
        rest = &rest[c.len_utf8()..];
    }

    keys
}

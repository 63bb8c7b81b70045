//! Input sources: where player intents come from.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::Intent;

/// A pollable stream of player intents.
pub trait InputSource {
    /// Wait at most `timeout` for input, then append every pending intent to
    /// `out` in arrival order without blocking again.
    ///
    /// Returning with nothing appended is a normal empty poll.
    fn poll(&mut self, timeout: Duration, out: &mut Vec<Intent>) -> Result<()>;
}

/// Reads key events from the terminal via crossterm.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self, timeout: Duration, out: &mut Vec<Intent>) -> Result<()> {
        let mut wait = timeout;
        while event::poll(wait)? {
            // Only the first poll may block.
            wait = Duration::ZERO;

            if let Event::Key(key) = event::read()? {
                // Terminal auto-repeat counts as pressing again; releases are ignored.
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if let Some(intent) = handle_key_event(key) {
                    out.push(intent);
                }
            }
        }
        Ok(())
    }
}

/// Replays a fixed list of intents, one batch per poll.
///
/// Used for headless runs and tests.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    batches: VecDeque<Vec<Intent>>,
}

impl ScriptedInput {
    pub fn new(batches: impl IntoIterator<Item = Vec<Intent>>) -> Self {
        Self {
            batches: batches.into_iter().collect(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.batches.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _timeout: Duration, out: &mut Vec<Intent>) -> Result<()> {
        if let Some(batch) = self.batches.pop_front() {
            out.extend(batch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_input_yields_batches_in_order() {
        let mut input = ScriptedInput::new([
            vec![Intent::Left, Intent::Left],
            vec![],
            vec![Intent::Quit],
        ]);
        let mut out = Vec::new();

        input.poll(Duration::ZERO, &mut out).unwrap();
        assert_eq!(out, vec![Intent::Left, Intent::Left]);

        out.clear();
        input.poll(Duration::ZERO, &mut out).unwrap();
        assert!(out.is_empty());

        out.clear();
        input.poll(Duration::ZERO, &mut out).unwrap();
        assert_eq!(out, vec![Intent::Quit]);
        assert!(input.is_exhausted());

        out.clear();
        input.poll(Duration::ZERO, &mut out).unwrap();
        assert!(out.is_empty());
    }
}

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use std::future::Future;

use super::handler::{InputHandler, KeyAction};

/// Delivers key actions as they happen. `None` means the source is closed
/// and will never produce another key.
pub trait InputSource {
    fn next_key(&mut self) -> impl Future<Output = Option<KeyAction>>;
}

/// Key presses from the terminal
pub struct TerminalInput {
    events: EventStream,
    handler: InputHandler,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            events: EventStream::new(),
            handler: InputHandler::new(),
        }
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    async fn next_key(&mut self) -> Option<KeyAction> {
        loop {
            match self.events.next().await? {
                // Only process key press events, not release
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    return Some(self.handler.handle_key_event(key));
                }
                Ok(_) => {}
                Err(err) => {
                    tracing::warn!(error = %err, "failed to read terminal event");
                }
            }
        }
    }
}

/// Source with no keys at all
pub struct NoInput;

impl InputSource for NoInput {
    async fn next_key(&mut self) -> Option<KeyAction> {
        None
    }
}

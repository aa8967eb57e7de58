use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::event::{Event as CrosstermEvent, KeyEvent, KeyEventKind};
use futures::{FutureExt, StreamExt};
use tokio::{sync::mpsc, time::MissedTickBehavior};

use crate::config::FRAME_RATE;

/// Terminal events.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Event {
    /// Time to advance and draw the next frame.
    Tick,
    Key(KeyEvent),
}

/// Terminal event handler.
#[allow(dead_code)]
#[derive(Debug)]
pub struct EventHandler {
    /// Event sender channel.
    sender: mpsc::UnboundedSender<Event>,
    /// Event receiver channel.
    receiver: mpsc::UnboundedReceiver<Event>,
    /// Event handler task.
    handler: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    /// Constructs a new instance of [`EventHandler`].
    pub fn new() -> Self {
        let tick_delay = Duration::from_secs_f64(1.0 / FRAME_RATE);
        let (sender, receiver) = mpsc::unbounded_channel();
        let _sender = sender.clone();
        let handler = tokio::spawn(async move {
            let mut reader = crossterm::event::EventStream::new();
            let mut tick_interval = tokio::time::interval(tick_delay);
            tick_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                let crossterm_event = reader.next().fuse();
                let event = tokio::select! {
                  _ = _sender.closed() => {
                    break;
                  }
                  _ = tick_interval.tick() => Event::Tick,
                  Some(Ok(event)) = crossterm_event => {
                    match event {
                      CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
                      _ => continue,
                    }
                  }
                };
                if _sender.send(event).is_err() {
                    break;
                }
            }
        });
        Self {
            sender,
            receiver,
            handler,
        }
    }

    /// Receive the next event from the handler task.
    ///
    /// This function will always wait if there is no data available
    /// and it's possible for more data to be sent.
    pub async fn next(&mut self) -> Result<Event> {
        self.receiver
            .recv()
            .await
            .ok_or_else(|| anyhow!("event channel closed"))
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

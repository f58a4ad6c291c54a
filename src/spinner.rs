//! A single-line terminal spinner driven by a background task.
//!
//! The spinner saves the cursor once, then every redraw restores it, clears to the
//! end of the screen and prints `"<frame> <label>"`, so the line animates in place.
//! Only one spinner may be active per terminal: the save slot is shared.

use std::io::Write;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use crate::consts::{DEFAULT_FRAMES, DEFAULT_INTERVAL};
use crate::terminal::Terminal;

/// How a [`Spinner`] looks and behaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinnerOptions {
    /// Animation frames. Empty means [`DEFAULT_FRAMES`].
    pub frames: Vec<String>,
    pub initial_text: String,
    /// Redraw interval. Zero means [`DEFAULT_INTERVAL`].
    pub interval: Duration,
    /// Erase the spinner line once stopped.
    pub clear_on_stop: bool,
}

impl Default for SpinnerOptions {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES.iter().map(|f| f.to_string()).collect(),
            initial_text: String::new(),
            interval: DEFAULT_INTERVAL,
            clear_on_stop: false,
        }
    }
}

impl SpinnerOptions {
    pub fn with_frames<I, S>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.frames = frames.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.initial_text = text.into();
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn clear_on_stop(mut self, clear: bool) -> Self {
        self.clear_on_stop = clear;
        self
    }

    /// Fill in defaults for empty frames and a zero interval.
    fn normalized(mut self) -> Self {
        if self.frames.is_empty() {
            self.frames = DEFAULT_FRAMES.iter().map(|f| f.to_string()).collect();
        }
        if self.interval.is_zero() {
            self.interval = DEFAULT_INTERVAL;
        }
        self
    }
}

/// What the task draws. Owned by exactly one writer at a time.
struct Frames {
    frames: Vec<String>,
    index: usize,
    label: String,
}

impl Frames {
    fn advance(&mut self) {
        self.index = (self.index + 1) % self.frames.len();
    }

    fn draw<W: Write>(&self, term: &mut Terminal<W>) {
        term.restore_position();
        term.clear_after_cursor();
        term.printf(format_args!("{} {}", self.frames[self.index], self.label));
    }
}

/// A running spinner. Call [`Spinner::stop`] to end it and get the terminal back.
///
/// Dropping a spinner without stopping it ends the task without a tick redraw and
/// drops the terminal with it. Labels already accepted are still drawn first.
#[derive(Debug)]
pub struct Spinner<W: Write + Send + 'static> {
    handle: JoinHandle<Terminal<W>>,
    cancel: watch::Sender<bool>,
    updates: mpsc::Sender<String>,
    clear_on_stop: bool,
}

impl<W: Write + Send + 'static> Spinner<W> {
    /// Draw the first frame and start the update task. Must run inside a tokio runtime.
    pub fn start(mut term: Terminal<W>, options: SpinnerOptions) -> Self {
        let SpinnerOptions {
            frames,
            initial_text,
            interval,
            clear_on_stop,
        } = options.normalized();

        let mut state = Frames {
            frames,
            index: 0,
            label: initial_text,
        };

        term.save_position();
        state.draw(&mut term);

        let (cancel_tx, mut cancel_rx) = watch::channel(false);
        let (updates_tx, mut updates_rx) = mpsc::channel::<String>(1);
        let tick = time::sleep(interval);

        tracing::debug!(frames = state.frames.len(), ?interval, "spinner started");

        let handle = tokio::spawn(async move {
            tokio::pin!(tick);
            loop {
                tokio::select! {
                    Some(label) = updates_rx.recv() => {
                        state.label = label;
                        state.draw(&mut term);
                    }
                    () = &mut tick => {
                        state.advance();
                        tick.as_mut().reset(Instant::now() + interval);
                        state.draw(&mut term);
                    }
                    // Fires on stop and when the spinner is dropped.
                    _ = cancel_rx.changed() => break,
                }
            }
            // A label whose send already completed is owed its draw.
            while let Ok(label) = updates_rx.try_recv() {
                state.label = label;
                state.draw(&mut term);
            }
            term
        });

        Self {
            handle,
            cancel: cancel_tx,
            updates: updates_tx,
            clear_on_stop,
        }
    }

    /// A sender for label updates. Each received label is drawn once.
    pub fn updater(&self) -> mpsc::Sender<String> {
        self.updates.clone()
    }

    /// Replace the label. Waits until the task has room for it.
    pub async fn update(&self, text: impl Into<String>) {
        let _ = self.updates.send(text.into()).await;
    }

    /// Stop the task, wait for it to exit, optionally erase the line, and hand the
    /// terminal back. Nothing is written by the task after this returns.
    ///
    /// Labels already accepted by [`Spinner::update`] are drawn before the task exits.
    ///
    /// # Panics
    ///
    /// Re-raises a panic from inside the task (i.e. from the writer). Also panics if
    /// the task was cancelled because its runtime shut down, since the terminal went
    /// down with it.
    pub async fn stop(self) -> Terminal<W> {
        let _ = self.cancel.send(true);
        let mut term = match self.handle.await {
            Ok(term) => term,
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(e) => {
                tracing::warn!(error = %e, "spinner task cancelled before stop");
                std::panic::resume_unwind(Box::new(format!("spinner task cancelled: {e}")))
            }
        };
        if self.clear_on_stop {
            term.restore_position();
            term.clear_after_cursor();
        }
        tracing::debug!(cleared = self.clear_on_stop, "spinner stopped");
        term
    }
}

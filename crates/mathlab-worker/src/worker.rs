//! Single-computation worker threads.
//!
//! A [`Worker`] owns one thread running one [`Computation`]. Requests are
//! read from a channel and processed to completion one at a time; each
//! produces exactly one reply on the reply channel, success or error.
//! Callers sharing a worker are serialized so that replies cannot be
//! matched to the wrong request.

use std::thread::JoinHandle;
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender};
use parking_lot::Mutex;

use mathlab_core::{Computation, GeometryError};

/// Error type for worker interactions.
#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    /// The computation rejected its input.
    #[error(transparent)]
    Computation(#[from] GeometryError),

    /// The worker thread is no longer running.
    #[error("worker {0} is not running")]
    Disconnected(&'static str),

    /// The worker thread could not be started.
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),
}

type Reply<C> = Result<<C as Computation>::Output, GeometryError>;

struct Channels<C: Computation> {
    requests: Option<Sender<C::Input>>,
    replies: Receiver<Reply<C>>,
}

/// A background thread hosting one computation.
pub struct Worker<C: Computation> {
    name: &'static str,
    channels: Mutex<Channels<C>>,
    thread: Option<JoinHandle<()>>,
}

impl<C: Computation> Worker<C> {
    /// Start a worker thread for `computation`.
    pub fn spawn(computation: C) -> Result<Self, WorkerError> {
        let name = computation.name();
        let (request_tx, request_rx) = crossbeam_channel::unbounded::<C::Input>();
        let (reply_tx, reply_rx) = crossbeam_channel::bounded::<Reply<C>>(1);

        let thread = std::thread::Builder::new()
            .name(name.to_string())
            .spawn(move || run(&computation, &request_rx, &reply_tx))?;

        tracing::info!(worker = name, "worker started");

        Ok(Self {
            name,
            channels: Mutex::new(Channels {
                requests: Some(request_tx),
                replies: reply_rx,
            }),
            thread: Some(thread),
        })
    }

    /// Name of the hosted computation.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Send one request and block until its reply arrives.
    pub fn request(&self, input: C::Input) -> Result<C::Output, WorkerError> {
        let channels = self.channels.lock();
        let sender = channels
            .requests
            .as_ref()
            .ok_or(WorkerError::Disconnected(self.name))?;
        sender
            .send(input)
            .map_err(|_| WorkerError::Disconnected(self.name))?;
        let reply = channels
            .replies
            .recv()
            .map_err(|_| WorkerError::Disconnected(self.name))?;
        Ok(reply?)
    }
}

impl<C: Computation> Drop for Worker<C> {
    fn drop(&mut self) {
        // Closing the request channel ends the thread's receive loop.
        self.channels.get_mut().requests.take();
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::error!(worker = self.name, "worker thread panicked");
            }
        }
    }
}

fn run<C: Computation>(computation: &C, requests: &Receiver<C::Input>, replies: &Sender<Reply<C>>) {
    let name = computation.name();
    for (seq, input) in requests.iter().enumerate() {
        let start = Instant::now();
        let reply = computation.compute(&input);
        match &reply {
            Ok(_) => tracing::debug!(worker = name, seq, elapsed = ?start.elapsed(), "request completed"),
            Err(e) => tracing::warn!(worker = name, seq, error = %e, "request rejected"),
        }
        if replies.send(reply).is_err() {
            break;
        }
    }
    tracing::info!(worker = name, "worker stopped");
}

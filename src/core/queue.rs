//! Shared delivery queue for asynchronous sinks
//!
//! The logger side holds a [`QueueHandler`] that only enqueues records. A
//! [`Listener`] owns the receiving end and the real handlers of every
//! asynchronous sink; its worker thread drains the queue and fans each
//! record out to all of them.

use super::{
    error::{LoggerError, Result},
    handler::{dispatch, flush_all, Handler},
    log_record::LogRecord,
    metrics::LoggerMetrics,
};
use crossbeam_channel::{bounded, unbounded, Receiver, SendTimeoutError, Sender, TrySendError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Default time a dropped listener waits for its worker to drain (5 seconds)
///
/// Used when a [`Listener`] is dropped without an explicit stop. Call
/// [`Listener::stop`] or [`Listener::stop_timeout`] for explicit control.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug)]
enum QueueMessage {
    Record(LogRecord),
    Stop,
}

/// Create a shared queue and the two ends attached to it.
///
/// `capacity` of `None` gives an unbounded queue, which never blocks or
/// drops on the producer side.
pub fn delivery_queue(
    capacity: Option<usize>,
    metrics: Arc<LoggerMetrics>,
) -> (QueueHandler, Listener) {
    let (sender, receiver) = match capacity {
        Some(size) => bounded(size),
        None => unbounded(),
    };

    let queue_handler = QueueHandler {
        sender: sender.clone(),
        metrics: Arc::clone(&metrics),
    };
    let listener = Listener {
        sender,
        receiver: Some(receiver),
        handlers: Vec::new(),
        metrics,
        worker: None,
    };

    (queue_handler, listener)
}

/// Logger-side end of the queue
#[derive(Debug)]
pub struct QueueHandler {
    sender: Sender<QueueMessage>,
    metrics: Arc<LoggerMetrics>,
}

impl QueueHandler {
    /// Hand a record to the listener without blocking.
    pub fn enqueue(&self, record: LogRecord) {
        match self.sender.try_send(QueueMessage::Record(record)) {
            Ok(()) => {
                self.metrics.record_enqueued();
            }
            Err(TrySendError::Full(_)) => {
                self.metrics.record_queue_full();
                let dropped = self.metrics.record_dropped();
                if dropped == 0 || (dropped + 1) % 1000 == 0 {
                    eprintln!(
                        "[LOGGER WARNING] Delivery queue full, {} records dropped. \
                         Consider raising logger_queue_capacity.",
                        dropped + 1
                    );
                }
            }
            Err(TrySendError::Disconnected(_)) => {
                // Listener already stopped
            }
        }
    }
}

/// Background worker draining the shared queue into asynchronous sinks.
///
/// Must be stopped by the caller at shutdown; records enqueued before the
/// stop are delivered first.
pub struct Listener {
    sender: Sender<QueueMessage>,
    receiver: Option<Receiver<QueueMessage>>,
    handlers: Vec<Handler>,
    metrics: Arc<LoggerMetrics>,
    worker: Option<thread::JoinHandle<()>>,
}

impl Listener {
    /// Register a handler. Only effective before [`start`](Self::start).
    pub fn add_handler(&mut self, handler: Handler) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_running(&self) -> bool {
        self.worker.as_ref().is_some_and(|w| !w.is_finished())
    }

    /// Spawn the worker thread. Calling it twice is a no-op.
    pub fn start(&mut self) -> Result<()> {
        let Some(receiver) = self.receiver.take() else {
            return Ok(());
        };
        let mut handlers = std::mem::take(&mut self.handlers);
        let metrics = Arc::clone(&self.metrics);

        let worker = thread::Builder::new()
            .name("log-listener".to_string())
            .spawn(move || {
                while let Ok(QueueMessage::Record(record)) = receiver.recv() {
                    dispatch(&mut handlers, &record, &metrics);
                    if receiver.is_empty() {
                        let _ = flush_all(&mut handlers);
                    }
                }
                let _ = flush_all(&mut handlers);
            })
            .map_err(|e| LoggerError::io_operation("starting listener", "spawn failed", e))?;

        self.worker = Some(worker);
        Ok(())
    }

    /// Stop the worker after it has delivered everything queued so far.
    ///
    /// Idempotent: stopping a stopped (or never started) listener is `Ok`.
    pub fn stop(&mut self) -> Result<()> {
        let Some(worker) = self.worker.take() else {
            return Ok(());
        };

        // A dead worker has dropped the receiver; joining still reports its panic
        let _ = self.sender.send(QueueMessage::Stop);

        worker
            .join()
            .map_err(|_| LoggerError::other("Listener worker panicked during shutdown"))
    }

    /// Stop the worker, waiting at most `timeout` for it to drain.
    ///
    /// Returns `true` if the worker finished within the timeout.
    pub fn stop_timeout(&mut self, timeout: Duration) -> bool {
        let Some(worker) = self.worker.take() else {
            return true;
        };

        let start = Instant::now();
        match self.sender.send_timeout(QueueMessage::Stop, timeout) {
            Ok(()) | Err(SendTimeoutError::Disconnected(_)) => {}
            Err(SendTimeoutError::Timeout(_)) => {
                eprintln!("[LOGGER WARNING] Could not signal listener within {:?}", timeout);
                return false;
            }
        }

        loop {
            if worker.is_finished() {
                if let Err(e) = worker.join() {
                    eprintln!("[LOGGER ERROR] Listener worker panicked during shutdown: {:?}", e);
                    return false;
                }
                return true;
            }

            if start.elapsed() >= timeout {
                eprintln!(
                    "[LOGGER WARNING] Listener did not finish within {:?} timeout. \
                     Some records may be lost.",
                    timeout
                );
                return false;
            }

            thread::sleep(Duration::from_millis(10));
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if self.worker.is_some() {
            self.stop_timeout(DEFAULT_SHUTDOWN_TIMEOUT);
        }
    }
}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("handlers", &self.handlers)
            .field("running", &self.is_running())
            .finish()
    }
}

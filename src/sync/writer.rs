//! Background catalog writer.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use crate::cards::{CardCatalogStore, CardDefinition};

/// Outcome of one dispatched save.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyncReport {
    /// Dispatch sequence number, starting at 1.
    pub seq: u64,
    /// Number of definitions written.
    pub cards: usize,
    /// Store error message when the save failed.
    pub error: Option<String>,
}

impl SyncReport {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

enum Command {
    Save { seq: u64, cards: Vec<CardDefinition> },
    Flush(mpsc::Sender<()>),
}

/// Fire-and-forget catalog writer.
///
/// Saves are applied in dispatch order by a single worker thread.
/// `dispatch` never blocks; `flush` waits for everything dispatched so far.
pub struct CatalogSync {
    tx: Option<mpsc::Sender<Command>>,
    handle: Option<JoinHandle<()>>,
    reports: Arc<Mutex<Vec<SyncReport>>>,
    next_seq: u64,
}

impl CatalogSync {
    /// Start the worker thread for `store`.
    pub fn spawn<S>(store: S) -> Self
    where
        S: CardCatalogStore + 'static,
    {
        let (tx, rx) = mpsc::channel::<Command>();
        let reports = Arc::new(Mutex::new(Vec::new()));
        let worker_reports = Arc::clone(&reports);

        let handle = std::thread::spawn(move || {
            for command in rx {
                match command {
                    Command::Save { seq, cards } => {
                        let error = match store.save(&cards) {
                            Ok(()) => {
                                tracing::debug!(seq, cards = cards.len(), "catalog saved");
                                None
                            }
                            Err(err) => {
                                tracing::warn!(seq, %err, "catalog save failed, keeping local edits");
                                Some(err.to_string())
                            }
                        };
                        if let Ok(mut reports) = worker_reports.lock() {
                            reports.push(SyncReport {
                                seq,
                                cards: cards.len(),
                                error,
                            });
                        }
                    }
                    Command::Flush(ack) => {
                        let _ = ack.send(());
                    }
                }
            }
        });

        Self {
            tx: Some(tx),
            handle: Some(handle),
            reports,
            next_seq: 1,
        }
    }

    /// Queue a save of `cards`. Returns its sequence number.
    ///
    /// If the worker is gone the save is recorded as failed on the spot.
    pub fn dispatch(&mut self, cards: Vec<CardDefinition>) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        let count = cards.len();

        let sent = self
            .tx
            .as_ref()
            .map(|tx| tx.send(Command::Save { seq, cards }).is_ok())
            .unwrap_or(false);
        if !sent {
            tracing::warn!(seq, "catalog writer stopped, save dropped");
            self.record(SyncReport {
                seq,
                cards: count,
                error: Some("catalog writer stopped".into()),
            });
        }
        seq
    }

    /// Block until every save dispatched so far has been attempted.
    pub fn flush(&self) {
        let Some(tx) = self.tx.as_ref() else {
            return;
        };
        let (ack_tx, ack_rx) = mpsc::channel();
        if tx.send(Command::Flush(ack_tx)).is_ok() {
            let _ = ack_rx.recv();
        }
    }

    /// Reports for every finished save, in completion order.
    #[must_use]
    pub fn reports(&self) -> Vec<SyncReport> {
        match self.reports.lock() {
            Ok(reports) => reports.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of failed saves so far.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.reports().iter().filter(|r| !r.is_ok()).count()
    }

    /// Stop the worker after it drains the queue, returning all reports.
    pub fn shutdown(mut self) -> Vec<SyncReport> {
        self.stop();
        self.reports()
    }

    fn record(&self, report: SyncReport) {
        if let Ok(mut reports) = self.reports.lock() {
            reports.push(report);
        }
    }

    fn stop(&mut self) {
        self.tx.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("catalog writer thread panicked");
            }
        }
    }
}

impl Drop for CatalogSync {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for CatalogSync {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogSync")
            .field("running", &self.tx.is_some())
            .field("next_seq", &self.next_seq)
            .finish()
    }
}

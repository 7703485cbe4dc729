//! Binding a trigger to a loader.
//!
//! A trigger is the receiving end of an activation channel: every `()` sent
//! starts one load-and-render cycle. Activations are not serialized, so a
//! second activation while a load is in flight starts a second load; the
//! loader's generation check keeps the older response from rendering.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinHandle, JoinSet};

use crate::loader::PassengerTableLoader;

/// A loader registered against a trigger.
pub struct BoundTrigger {
    task: JoinHandle<()>,
    in_flight: Arc<AtomicUsize>,
}

impl BoundTrigger {
    /// Loads started by this trigger that have not finished yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Waits until every sender is dropped and all started loads finish.
    pub async fn join(self) -> Result<(), JoinError> {
        self.task.await
    }
}

/// Registers `loader` against `trigger`.
///
/// With no trigger nothing is registered and `None` is returned. Finished
/// loads are reaped while the trigger stays open, so a long-lived trigger
/// only holds on to loads that are still running.
pub fn bind_trigger(
    trigger: Option<mpsc::Receiver<()>>,
    loader: Arc<PassengerTableLoader>,
) -> Option<BoundTrigger> {
    let Some(mut activations) = trigger else {
        tracing::debug!("No trigger present; loader left unbound");
        return None;
    };

    let in_flight = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&in_flight);
    let task = tokio::spawn(async move {
        let mut loads = JoinSet::new();
        loop {
            tokio::select! {
                activation = activations.recv() => {
                    if activation.is_none() {
                        break;
                    }
                    let loader = Arc::clone(&loader);
                    loads.spawn(async move { loader.load_and_render().await });
                }
                Some(joined) = loads.join_next(), if !loads.is_empty() => {
                    log_join(joined);
                }
            }
            counter.store(loads.len(), Ordering::SeqCst);
        }
        while let Some(joined) = loads.join_next().await {
            log_join(joined);
            counter.store(loads.len(), Ordering::SeqCst);
        }
    });

    Some(BoundTrigger { task, in_flight })
}

fn log_join<T>(joined: Result<T, JoinError>) {
    if let Err(e) = joined {
        tracing::error!("Load task failed: {}", e);
    }
}

//! The fixed-cadence simulation loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use lifecast_grid::step;

use crate::hub::BroadcastHub;

/// Default time between generations.
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Advances the hub's board one generation per tick, forever.
///
/// Each tick reads a snapshot, computes the next generation against that
/// fully-settled board, and commits the diff — or nothing, when the board
/// is stable. A stable board does not pause or reset the cadence; the
/// loop keeps ticking until an external mutation perturbs the board.
pub struct SimulationLoop {
    hub: Arc<BroadcastHub>,
    period: Duration,
}

impl SimulationLoop {
    /// A loop over `hub` at the default 100ms period.
    pub fn new(hub: Arc<BroadcastHub>) -> Self {
        Self::with_period(hub, TICK_PERIOD)
    }

    /// A loop with an explicit period.
    pub fn with_period(hub: Arc<BroadcastHub>, period: Duration) -> Self {
        Self { hub, period }
    }

    /// Spawn the loop as a background task and return its handle.
    ///
    /// The loop has no fatal conditions of its own; it runs until the
    /// handle shuts it down. Dropping the handle also stops the loop.
    pub fn spawn(self) -> SimulationHandle {
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.period);
            info!(period_ms = self.period.as_millis() as u64, "simulation loop started");

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let board = self.hub.snapshot().await;
                        let (_, changes) = step(&board);
                        if changes.is_empty() {
                            continue;
                        }
                        debug!(changed = changes.len(), "generation advanced");
                        if let Err(err) = self.hub.commit(changes).await {
                            // Step output is always in range; log and keep ticking.
                            warn!(%err, "commit failed");
                        }
                    }
                    _ = &mut stop_rx => {
                        debug!("simulation loop stopped");
                        break;
                    }
                }
            }
        });

        SimulationHandle {
            stop: stop_tx,
            task,
        }
    }
}

/// Owns the loop's stop signal. Obtained from [`SimulationLoop::spawn`].
pub struct SimulationHandle {
    stop: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl SimulationHandle {
    /// Signal the loop to stop and wait for it to wind down.
    pub async fn shutdown(self) {
        let _ = self.stop.send(());
        let _ = self.task.await;
    }
}

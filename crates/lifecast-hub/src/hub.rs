//! The broadcast hub: the one owner of the live board and subscriber set.
//!
//! All reads and writes go through a single lock, so a commit and a
//! subscribe are mutually exclusive: a subscriber registered mid-stream
//! sees either the pre-commit or post-commit board as its snapshot, never
//! a torn one, and never misses or double-receives the commit that
//! straddled its registration.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::sync::{Mutex, Notify};
use tracing::debug;

use lifecast_grid::{seed, Board, Cell, CellChange, Result, TOGGLE_PALETTE};

use crate::update::GridUpdate;

/// How long a consumer parks on an idle subscription before re-checking
/// liveness. A timeout is not an error; the consumer just waits again.
pub const IDLE_WAIT: Duration = Duration::from_millis(1000);

/// Identifies one live subscription within a hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// One subscriber's delivery slot. The hub overwrites `pending` on every
/// commit (latest-wins) and the consumer drains it; `closed` marks a
/// cancelled subscription for lazy removal from the hub's map.
struct DeliverySlot {
    pending: Mutex<Option<GridUpdate>>,
    notify: Notify,
    closed: AtomicBool,
}

struct HubState {
    board: Board,
    next_id: u64,
    slots: HashMap<SubscriptionId, Arc<DeliverySlot>>,
}

impl HubState {
    /// Deliver an update to every live slot, pruning cancelled ones.
    /// A stalled consumer never blocks this: its slot is overwritten,
    /// not queued behind.
    async fn fan_out(&mut self, update: GridUpdate) {
        self.slots
            .retain(|_, slot| !slot.closed.load(Ordering::Acquire));
        for slot in self.slots.values() {
            *slot.pending.lock().await = Some(update.clone());
            slot.notify.notify_one();
        }
    }
}

/// Owns the authoritative board and fans commits out to subscribers.
///
/// An explicit instance with no global state: construct one per
/// simulation, share it behind an [`Arc`].
pub struct BroadcastHub {
    state: Mutex<HubState>,
}

impl BroadcastHub {
    /// A hub starting from the given board.
    pub fn new(board: Board) -> Self {
        Self {
            state: Mutex::new(HubState {
                board,
                next_id: 0,
                slots: HashMap::new(),
            }),
        }
    }

    /// A hub starting from the fixed seed pattern.
    pub fn with_seed_pattern() -> Self {
        Self::new(seed())
    }

    /// Deep copy of the current board. No side effects.
    pub async fn snapshot(&self) -> Board {
        self.state.lock().await.board.clone()
    }

    /// Register a subscriber. Its slot is seeded with a full snapshot of
    /// the current board under the same lock commits take, so the first
    /// [`UpdateStream::recv`] always yields `Full` and reflects a settled
    /// board.
    pub async fn subscribe(&self) -> UpdateStream {
        let mut state = self.state.lock().await;
        let id = SubscriptionId(state.next_id);
        state.next_id += 1;

        let slot = Arc::new(DeliverySlot {
            pending: Mutex::new(Some(GridUpdate::Full(state.board.clone()))),
            notify: Notify::new(),
            closed: AtomicBool::new(false),
        });
        state.slots.insert(id, slot.clone());
        debug!(id = id.0, subscribers = state.slots.len(), "subscribed");

        UpdateStream { id, slot }
    }

    /// Apply a change list to the board and deliver it to every
    /// subscriber. Applying is a plain overwrite per cell, so replaying
    /// the same list is harmless.
    pub async fn commit(&self, changes: Vec<CellChange>) -> Result<()> {
        let mut state = self.state.lock().await;
        state.board.apply(&changes)?;
        debug!(changed = changes.len(), "commit");
        state.fan_out(GridUpdate::Changes(changes)).await;
        Ok(())
    }

    /// Replace the whole board and deliver it as a `Full` update.
    pub async fn commit_full(&self, board: Board) {
        let mut state = self.state.lock().await;
        state.board = board.clone();
        debug!("full commit");
        state.fan_out(GridUpdate::Full(board)).await;
    }

    /// Cancel a subscription. Idempotent; the consumer's next `recv`
    /// returns `None` and its slot is released.
    pub async fn unsubscribe(&self, id: SubscriptionId) {
        let mut state = self.state.lock().await;
        if let Some(slot) = state.slots.remove(&id) {
            slot.closed.store(true, Ordering::Release);
            slot.notify.notify_one();
            debug!(id = id.0, subscribers = state.slots.len(), "unsubscribed");
        }
    }

    /// Flip the cell at `(x, y)`: alive becomes dead and colorless, dead
    /// becomes alive with a color drawn from the fixed 4-color palette.
    /// The read and the commit happen under one lock acquisition, so a
    /// concurrent tick cannot slip between them. Returns the
    /// post-mutation board.
    pub async fn toggle_cell(&self, x: usize, y: usize) -> Result<Board> {
        let mut state = self.state.lock().await;
        let current = state.board.get(x, y)?;

        let cell = if current.alive {
            Cell::dead()
        } else {
            let pick = rand::thread_rng().gen_range(0..TOGGLE_PALETTE.len());
            Cell::alive(Some(TOGGLE_PALETTE[pick]))
        };

        state.board.set(x, y, cell)?;
        debug!(x, y, alive = cell.alive, "toggle");
        state
            .fan_out(GridUpdate::Changes(vec![CellChange { x, y, cell }]))
            .await;
        Ok(state.board.clone())
    }

    /// Reseed the board from the fixed pattern and deliver it as a `Full`
    /// update. Returns the new board.
    pub async fn reset(&self) -> Board {
        let board = seed();
        self.commit_full(board.clone()).await;
        board
    }
}

/// The consumer half of a subscription.
///
/// Obtained from [`BroadcastHub::subscribe`]; the hub never closes it
/// unilaterally. Dropping it cancels the subscription.
pub struct UpdateStream {
    id: SubscriptionId,
    slot: Arc<DeliverySlot>,
}

impl UpdateStream {
    /// The handle to pass to [`BroadcastHub::unsubscribe`].
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// The next update: the seeded `Full` on the first call, then each
    /// delivered commit in order, skipping any that were overwritten
    /// while this consumer lagged. Returns `None` once the subscription
    /// is cancelled. Waits are bounded by [`IDLE_WAIT`] internally; an
    /// idle board just makes this park longer, never error.
    pub async fn recv(&mut self) -> Option<GridUpdate> {
        loop {
            if self.slot.closed.load(Ordering::Acquire) {
                return None;
            }
            if let Some(update) = self.slot.pending.lock().await.take() {
                return Some(update);
            }
            let _ = tokio::time::timeout(IDLE_WAIT, self.slot.notify.notified()).await;
        }
    }
}

impl Drop for UpdateStream {
    fn drop(&mut self) {
        // Lazy cancellation: the hub prunes the slot on its next fan-out.
        self.slot.closed.store(true, Ordering::Release);
    }
}

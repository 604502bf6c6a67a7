//! Lifecast Hub
//!
//! The concurrent core of lifecast: a [`BroadcastHub`] owning the live
//! board, fanning every commit out to any number of subscribers, and a
//! [`SimulationLoop`] advancing the board on a fixed tick.
//!
//! # Delivery discipline
//!
//! Subscribers are served latest-wins, not guaranteed-delivery: each
//! subscription holds exactly one pending [`GridUpdate`], and a newer
//! commit overwrites an undrained one. Memory per subscriber is O(1)
//! regardless of how slowly it consumes; what it loses under lag is whole
//! intermediate updates, never ordering and never a partially applied
//! update. The first update any subscriber receives is a full snapshot.
//!
//! # Usage
//!
//! ```ignore
//! let hub = Arc::new(BroadcastHub::with_seed_pattern());
//! let sim = SimulationLoop::new(hub.clone()).spawn();
//!
//! let mut stream = hub.subscribe().await;
//! while let Some(update) = stream.recv().await {
//!     // GridUpdate::Full first, GridUpdate::Changes thereafter
//! }
//! ```

mod hub;
mod sim;
mod update;

pub use hub::{BroadcastHub, SubscriptionId, UpdateStream, IDLE_WAIT};
pub use sim::{SimulationHandle, SimulationLoop, TICK_PERIOD};
pub use update::GridUpdate;

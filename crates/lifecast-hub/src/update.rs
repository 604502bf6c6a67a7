//! The update type fanned out to subscribers.

use serde::{Deserialize, Serialize};

use lifecast_grid::{Board, CellChange};

/// One delivery to a subscriber.
///
/// A subscription's first update is always [`GridUpdate::Full`]; every
/// later one is [`GridUpdate::Changes`], except after a reset, which
/// replays a `Full`. On the wire this is the tagged
/// `{"type": "full" | "changes", "data": ...}` object clients consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum GridUpdate {
    /// A complete board snapshot.
    Full(Board),
    /// The cells that changed in one commit, in row-major order.
    Changes(Vec<CellChange>),
}

//! Cell and color value types.

/// One of the fixed colors a live cell can carry.
///
/// Five colors come from the seed pattern's regions; [`Color::Black`] is the
/// fallback for seed coordinates outside every region. Serialized as the CSS
/// hex strings the wire format uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    #[cfg_attr(feature = "serde", serde(rename = "#0000FF"))]
    Blue,
    #[cfg_attr(feature = "serde", serde(rename = "#00FF00"))]
    Green,
    #[cfg_attr(feature = "serde", serde(rename = "#FFA500"))]
    Orange,
    #[cfg_attr(feature = "serde", serde(rename = "#800080"))]
    Purple,
    #[cfg_attr(feature = "serde", serde(rename = "#FF0000"))]
    Red,
    #[cfg_attr(feature = "serde", serde(rename = "#000000"))]
    Black,
}

/// The palette a toggled-alive cell draws its color from, in draw order.
pub const TOGGLE_PALETTE: [Color; 4] = [Color::Blue, Color::Orange, Color::Green, Color::Purple];

/// A single board cell.
///
/// Invariant: a dead cell carries no color. [`Cell::dead`] and
/// [`Cell::alive`] are the only constructors the rest of the crate uses,
/// so the invariant holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub alive: bool,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub color: Option<Color>,
}

impl Cell {
    /// A dead, colorless cell.
    pub const fn dead() -> Self {
        Self {
            alive: false,
            color: None,
        }
    }

    /// A live cell with an optional color.
    pub const fn alive(color: Option<Color>) -> Self {
        Self { alive: true, color }
    }
}

use serde::{Deserialize, Serialize};

/// One of the non-empty colors a board cell can hold.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Red,
    Yellow,
    Green,
    Blue,
}

impl Color {
    /// Palette drawn from when new rows are generated.
    pub const ALL: [Color; 4] = [Color::Red, Color::Yellow, Color::Green, Color::Blue];
}

/// Contents of a single board cell.
///
/// Generated cells are always `Filled`; sources produce [`Color`] directly so
/// an empty cell can never come out of row generation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Filled(Color),
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn is_filled(self) -> bool {
        !self.is_empty()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        Self::Filled(color)
    }
}

pub use random::*;

mod random;

use crate::Color;

/// Produces the colors used to fill freshly inserted rows.
///
/// Injected at engine construction rather than reached for globally, so a
/// test can supply a scripted sequence and replay a game deterministically.
pub trait ColorSource {
    fn next_color(&mut self) -> Color;
}

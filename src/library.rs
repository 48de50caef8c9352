//! Local music library: track model, display labels and directory scanning.

mod display;
mod model;
mod scan;

pub use model::{Track, TrackId};
pub use scan::scan;

//! Application model: library, playback queue, queue cursor, likes and the
//! now-playing display state shared by the runtime and the UI.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;

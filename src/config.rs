//! Configuration loader and schema types.
//!
//! Settings drive the engine defaults, the bar layout, key steps, library
//! scanning and logging.

mod load;
mod schema;

pub use load::default_log_path;
pub use schema::*;

/// Loading the export from disk
pub mod decoder;
/// Library document and record types
pub mod entities;
/// Error types and result aliases
pub mod errors;

pub use decoder::load;
pub use entities::{Library, Track};
pub use errors::{Error, Result};

use std::path::Path;

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::library::{
    entities::Library,
    errors::{Error, Result},
};

/// Parse a `YourLibrary.json` document held in memory.
///
/// Only the first JSON value is read; anything after it is ignored.
/// Invalid UTF-8 is replaced with U+FFFD rather than rejected, and when
/// an object repeats a key the last occurrence wins.
/// `path` is only used to label errors.
pub fn decode(content: &[u8], path: &Path) -> Result<Library> {
    let text = String::from_utf8_lossy(content);
    let mut deserializer = serde_json::Deserializer::from_str(&text);
    // Going through `Value` collapses duplicate keys before the typed decode
    Value::deserialize(&mut deserializer)
        .and_then(Library::deserialize)
        .map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })
}

/// Read the whole export at `path` and decode it.
pub fn load(path: &Path) -> Result<Library> {
    let content = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    debug!("Read {} bytes from {path:?}", content.len());

    let library = decode(&content, path)?;
    debug!(
        "Decoded {} tracks and {} other records",
        library.tracks.len(),
        library.non_track_count()
    );
    Ok(library)
}

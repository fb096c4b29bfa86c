//! Yourlibrary-html - Render a Spotify library export as an HTML page
//!
//! This library decodes the `YourLibrary.json` file from a Spotify data
//! export and writes its saved tracks into a sortable HTML table.

/// Turning an export file into an HTML page on disk
pub mod converter;
/// Library data model and loading
pub mod library;
/// HTML page rendering
pub mod render;

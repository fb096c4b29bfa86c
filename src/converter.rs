use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::library::{
    self,
    errors::{Error, Result},
};
use crate::render::{HtmlRenderer, output_path};

/// Default export file name, looked up in the working directory.
pub const DEFAULT_LIBRARY_FILE: &str = "YourLibrary.json";

// Configuration for the Converter struct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub escape_html: bool,
}

#[derive(Debug, Default)]
pub struct ConfigBuilder {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    escape_html: Option<bool>,
}

impl ConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: None,
            output: None,
            escape_html: None, // Values are written verbatim unless asked otherwise
        }
    }

    #[must_use]
    pub fn input(mut self, input: impl Into<PathBuf>) -> Self {
        self.input = Some(input.into());
        self
    }

    #[must_use]
    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    #[must_use]
    pub fn escape_html(mut self, escape: bool) -> Self {
        self.escape_html = Some(escape);
        self
    }

    /// Resolve the input to an absolute path that exists on disk and
    /// derive everything else from it.
    pub fn build(self) -> Result<Config> {
        let input = self
            .input
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LIBRARY_FILE));
        let input = std::path::absolute(&input).map_err(|e| {
            debug!("Failed to resolve {input:?}: {e}");
            Error::usage("")
        })?;

        if let Err(e) = std::fs::metadata(&input) {
            debug!("Library file {input:?} is not accessible: {e}");
            return Err(Error::usage(
                "Spotify `YourLibrary.json` file required. Please supply the file\n\n",
            ));
        }

        let output = match self.output {
            Some(o) => o,
            None => output_path(&input),
        };

        Ok(Config {
            input,
            output,
            escape_html: self.escape_html.unwrap_or(false),
        })
    }
}

// Turns one export into one HTML page
pub struct Converter {
    config: Config,
}

impl Converter {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Converter { config }
    }

    pub fn convert(&self) -> Result<()> {
        debug!("Loading library from {:?} ...", self.config.input);
        let library = library::load(&self.config.input)?;

        if library.is_empty() {
            debug!("Library has no records, writing an empty page");
        } else if library.non_track_count() > 0 {
            debug!(
                "Skipping {} records outside of tracks",
                library.non_track_count()
            );
        }

        debug!("Writing {} tracks to {:?}", library.tracks.len(), self.config.output);
        write_page(&self.config.output, |out| {
            HtmlRenderer::new(self.config.escape_html).render(&library, out)
        })?;

        info!("Done!");
        Ok(())
    }
}

// Create (or truncate) `path` and hand a buffered writer to `fill`
fn write_page<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = BufWriter::new(file);
    fill(&mut out).map_err(|e| Error::io(path, e))?;
    out.flush().map_err(|e| Error::io(path, e))
}

//! Retrieval boundary: where the specification HTML comes from.
//!
//! The pipeline itself performs no I/O; it takes the document text through
//! this trait seam. `HttpSource` is the normal path, `FileSource` serves
//! offline runs and tests.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::document::DocKind;

/// Errors that occur while obtaining a specification document.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to fetch {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Supplies the raw markup text of a specification document.
pub trait DocumentSource {
    fn fetch(&self, kind: DocKind) -> Result<String, SourceError>;
}

/// Fetches the published specification over HTTP.
#[derive(Debug, Default)]
pub struct HttpSource;

impl DocumentSource for HttpSource {
    fn fetch(&self, kind: DocKind) -> Result<String, SourceError> {
        let url = kind.url();
        tracing::info!("fetching {url}");
        reqwest::blocking::get(url)
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|source| SourceError::Http {
                url: url.to_string(),
                source,
            })
    }
}

/// Reads previously saved specification HTML from disk.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentSource for FileSource {
    fn fetch(&self, kind: DocKind) -> Result<String, SourceError> {
        tracing::debug!("reading {} document from {}", kind, self.path.display());
        fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_source_reports_the_failing_path() {
        let source = FileSource::new("/nonexistent/uievents-key.html");
        let err = source.fetch(DocKind::Key).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/uievents-key.html"));
    }
}

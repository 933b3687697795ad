use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod backend;
pub mod config;
pub mod scanner;

pub use backend::{BackendError, PageText, TextBackend};
pub use config::{ConfigError, DEFAULT_MAX_PAGES, ScanConfig, ScanConfigBuilder};
pub use scanner::{CandidateMatch, Doi, DoiScanner, SurfacePattern, normalize, scan};

#[derive(Error, Debug)]
pub enum DoiError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("document unreadable: {0}")]
    DocumentUnreadable(#[from] BackendError),
}

/// Find the first DOI in the leading pages of a document.
///
/// Pipeline:
/// 1. Check that `path` exists
/// 2. Collect text from at most `config.max_pages()` pages via `backend`
/// 3. Concatenate the pages in order and scan the result
///
/// `Ok(None)` means the document was read but holds no DOI.
pub fn extract_doi(
    path: &Path,
    backend: &dyn TextBackend,
    config: &ScanConfig,
) -> Result<Option<Doi>, DoiError> {
    if !path.exists() {
        return Err(DoiError::FileNotFound(path.to_path_buf()));
    }

    let pages = backend.extract_pages(path, config.max_pages())?;
    let text = pages.concat_first(config.max_pages());
    tracing::debug!(
        path = %path.display(),
        pages = pages.len().min(config.max_pages()),
        chars = text.len(),
        "collected page text"
    );

    Ok(config.scanner().scan(&text))
}

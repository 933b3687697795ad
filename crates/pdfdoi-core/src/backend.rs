use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open document: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
}

/// Plain text of the scanned pages, one entry per page, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageText {
    pages: Vec<String>,
}

impl PageText {
    pub fn new(pages: Vec<String>) -> Self {
        Self { pages }
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Join the first `limit` pages with no separator of their own.
    pub fn concat_first(&self, limit: usize) -> String {
        self.pages.iter().take(limit).map(String::as_str).collect()
    }
}

impl From<Vec<String>> for PageText {
    fn from(pages: Vec<String>) -> Self {
        Self::new(pages)
    }
}

impl FromIterator<String> for PageText {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Trait for document text extraction backends.
///
/// Implementors open the document, render at most `max_pages` leading pages
/// to plain text, and release the document before returning. Failure to
/// open or render maps to [`BackendError`].
pub trait TextBackend: Send + Sync {
    fn extract_pages(&self, path: &Path, max_pages: usize) -> Result<PageText, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concat_keeps_page_order() {
        let pages = PageText::new(vec!["one\n".into(), "two\n".into(), "three\n".into()]);
        assert_eq!(pages.concat_first(3), "one\ntwo\nthree\n");
    }

    #[test]
    fn test_concat_respects_limit() {
        let pages: PageText = ["a\n", "b\n", "c\n", "d\n"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(pages.len(), 4);
        assert_eq!(pages.concat_first(3), "a\nb\nc\n");
    }

    #[test]
    fn test_empty_document() {
        let pages = PageText::default();
        assert!(pages.is_empty());
        assert_eq!(pages.concat_first(3), "");
    }
}

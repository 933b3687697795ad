use std::path::Path;

use mupdf::{Document, TextPageFlags};

use pdfdoi_core::{BackendError, PageText, TextBackend};

/// MuPDF-based implementation of [`TextBackend`].
///
/// This crate is the sole AGPL island: it isolates the mupdf dependency
/// so that the scanner and its callers do not transitively depend on it.
///
/// Page text is assembled block by block and line by line, one `\n` per
/// line, which matches PyMuPDF's `get_text()` layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl TextBackend for MupdfBackend {
    fn extract_pages(&self, path: &Path, max_pages: usize) -> Result<PageText, BackendError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| BackendError::OpenError("invalid path encoding".into()))?;

        // Dropped on every return path below, which closes the document.
        let document =
            Document::open(path_str).map_err(|e| BackendError::OpenError(e.to_string()))?;

        let mut pages_text = Vec::with_capacity(max_pages);

        for page_result in document
            .pages()
            .map_err(|e| BackendError::ExtractionError(e.to_string()))?
            .take(max_pages)
        {
            let page = page_result.map_err(|e| BackendError::ExtractionError(e.to_string()))?;
            let text_page = page
                .to_text_page(TextPageFlags::empty())
                .map_err(|e| BackendError::ExtractionError(e.to_string()))?;

            let mut page_text = String::new();
            for block in text_page.blocks() {
                for line in block.lines() {
                    let line_text: String = line
                        .chars()
                        .map(|c| c.char().unwrap_or('\u{FFFD}'))
                        .collect();
                    page_text.push_str(&line_text);
                    page_text.push('\n');
                }
            }
            pages_text.push(page_text);
        }

        tracing::debug!(path = %path.display(), pages = pages_text.len(), "extracted page text");
        Ok(PageText::new(pages_text))
    }
}

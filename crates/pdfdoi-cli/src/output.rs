use std::io::Write;
use std::path::Path;

use owo_colors::OwoColorize;
use pdfdoi_core::{Doi, DoiError};

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Confirmation line on stderr; the DOI itself goes to stdout separately.
pub fn print_found(w: &mut dyn Write, doi: &Doi, color: ColorMode) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{} {}", "DOI found:".green(), doi.bold())
    } else {
        writeln!(w, "DOI found: {}", doi)
    }
}

pub fn print_not_found(w: &mut dyn Write, color: ColorMode) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{}", "No DOI found in the PDF.".yellow())
    } else {
        writeln!(w, "No DOI found in the PDF.")
    }
}

pub fn print_file_not_found(
    w: &mut dyn Write,
    path: &Path,
    color: ColorMode,
) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{} File not found: {}", "Error:".red(), path.display())
    } else {
        writeln!(w, "Error: File not found: {}", path.display())
    }
}

/// Report a document that exists but could not be read.
pub fn print_extraction_error(
    w: &mut dyn Write,
    err: &DoiError,
    color: ColorMode,
) -> std::io::Result<()> {
    if color.enabled() {
        writeln!(w, "{} {}", "Error extracting DOI:".red(), err)
    } else {
        writeln!(w, "Error extracting DOI: {}", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: ColorMode = ColorMode(false);

    fn render(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_found() {
        let doi = pdfdoi_core::scan("doi:10.1000/xyz").unwrap();
        assert_eq!(
            render(|w| print_found(w, &doi, PLAIN)),
            "DOI found: 10.1000/xyz\n"
        );
    }

    #[test]
    fn test_not_found() {
        assert_eq!(
            render(|w| print_not_found(w, PLAIN)),
            "No DOI found in the PDF.\n"
        );
    }

    #[test]
    fn test_file_not_found() {
        let out = render(|w| print_file_not_found(w, Path::new("/tmp/nope.pdf"), PLAIN));
        assert_eq!(out, "Error: File not found: /tmp/nope.pdf\n");
    }

    #[test]
    fn test_extraction_error() {
        let err = DoiError::DocumentUnreadable(pdfdoi_core::BackendError::OpenError(
            "broken xref".into(),
        ));
        let out = render(|w| print_extraction_error(w, &err, PLAIN));
        assert_eq!(
            out,
            "Error extracting DOI: document unreadable: failed to open document: broken xref\n"
        );
    }

    #[test]
    fn test_colored_output_keeps_text() {
        let out = render(|w| print_not_found(w, ColorMode(true)));
        assert!(out.contains("No DOI found in the PDF."));
        assert!(out.contains('\u{1b}'));
    }
}

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters stripped from the right end of a matched DOI.
pub const DEFAULT_TRAILING_CHARS: &str = ".,;)]";

static BARE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)\b10\.\d{4,9}/[^\s"<>\])]+"#).unwrap());

static LOWERCASE_PREFIXED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)doi:\s*10\.\d{4,9}/[^\s"<>\])]+"#).unwrap());

static UPPERCASE_LABELED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)DOI:\s*10\.\d{4,9}/[^\s"<>\])]+"#).unwrap());

static PREFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^doi:\s*").unwrap());

static DEFAULT_SCANNER: Lazy<DoiScanner> = Lazy::new(DoiScanner::default);

/// A textual form a DOI may take inside a document.
///
/// Patterns are tried in [`SurfacePattern::PRIORITY`] order and the first
/// one with any match wins. All of them are matched case-insensitively, so
/// the two prefixed forms accept the same inputs; they stay separate to keep
/// the precedence explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfacePattern {
    /// `10.1234/suffix`
    Bare,
    /// `doi:10.1234/suffix`
    LowercasePrefixed,
    /// `DOI: 10.1234/suffix`
    UppercaseLabeled,
}

impl SurfacePattern {
    pub const PRIORITY: [SurfacePattern; 3] = [
        SurfacePattern::Bare,
        SurfacePattern::LowercasePrefixed,
        SurfacePattern::UppercaseLabeled,
    ];

    /// Whether matches of this pattern carry a `doi:` token to remove.
    pub fn has_prefix(self) -> bool {
        !matches!(self, SurfacePattern::Bare)
    }

    pub fn regex(self) -> &'static Regex {
        match self {
            SurfacePattern::Bare => &*BARE_RE,
            SurfacePattern::LowercasePrefixed => &*LOWERCASE_PREFIXED_RE,
            SurfacePattern::UppercaseLabeled => &*UPPERCASE_LABELED_RE,
        }
    }
}

/// The raw substring a pattern matched, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateMatch<'t> {
    pub pattern: SurfacePattern,
    /// Byte offset of the match in the scanned text.
    pub start: usize,
    pub text: &'t str,
}

/// A normalized DOI: `10.<registrant>/<suffix>` with no `doi:` prefix and
/// no trailing punctuation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Doi(String);

impl Doi {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Doi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Doi {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Finds the first DOI in a block of extracted text.
#[derive(Debug, Clone)]
pub struct DoiScanner {
    trailing_chars: String,
}

impl Default for DoiScanner {
    fn default() -> Self {
        Self {
            trailing_chars: DEFAULT_TRAILING_CHARS.to_string(),
        }
    }
}

impl DoiScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different set of characters to strip from the end of a match.
    pub fn with_trailing_chars(chars: impl Into<String>) -> Self {
        Self {
            trailing_chars: chars.into(),
        }
    }

    pub fn trailing_chars(&self) -> &str {
        &self.trailing_chars
    }

    /// Leftmost match of the highest-priority pattern that matches at all.
    pub fn find_candidate<'t>(&self, text: &'t str) -> Option<CandidateMatch<'t>> {
        for pattern in SurfacePattern::PRIORITY {
            if let Some(m) = pattern.regex().find(text) {
                tracing::debug!(?pattern, start = m.start(), raw = m.as_str(), "DOI candidate");
                return Some(CandidateMatch {
                    pattern,
                    start: m.start(),
                    text: m.as_str(),
                });
            }
            tracing::trace!(?pattern, "no match");
        }
        None
    }

    /// Scan `text` and return the first DOI, normalized.
    ///
    /// Total over any input: text without a DOI yields `None`.
    pub fn scan(&self, text: &str) -> Option<Doi> {
        let candidate = self.find_candidate(text)?;
        let body = if candidate.pattern.has_prefix() {
            strip_prefix(candidate.text)
        } else {
            candidate.text
        };
        Some(Doi(self.strip_trailing(body).to_string()))
    }

    /// Remove a leading `doi:` token (any case, plus following whitespace)
    /// and the trailing run of strip characters.
    pub fn normalize(&self, raw: &str) -> String {
        self.strip_trailing(strip_prefix(raw)).to_string()
    }

    fn strip_trailing<'a>(&self, s: &'a str) -> &'a str {
        s.trim_end_matches(|c: char| self.trailing_chars.contains(c))
    }
}

fn strip_prefix(s: &str) -> &str {
    PREFIX_RE.find(s).map_or(s, |m| &s[m.end()..])
}

/// Scan with the default strip set.
pub fn scan(text: &str) -> Option<Doi> {
    DEFAULT_SCANNER.scan(text)
}

/// Normalize with the default strip set.
pub fn normalize(raw: &str) -> String {
    DEFAULT_SCANNER.normalize(raw)
}

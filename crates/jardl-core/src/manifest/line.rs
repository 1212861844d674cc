//! Classification of a single manifest line.

/// Prefixes accepted as download targets.
const URL_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Comment marker; must be the first non-whitespace character.
const COMMENT_PREFIX: char = '#';

/// What a trimmed manifest line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestLine<'a> {
    Blank,
    Comment,
    /// Trimmed URL text, verbatim (query and fragment included).
    Url(&'a str),
    /// Trimmed text of a line that is neither blank, comment nor URL.
    Invalid(&'a str),
}

/// Classifies one raw line. Leading and trailing whitespace (including `\r`) is ignored.
pub fn classify(raw: &str) -> ManifestLine<'_> {
    let line = raw.trim();
    if line.is_empty() {
        ManifestLine::Blank
    } else if line.starts_with(COMMENT_PREFIX) {
        ManifestLine::Comment
    } else if URL_PREFIXES.iter().any(|p| line.starts_with(p)) {
        ManifestLine::Url(line)
    } else {
        ManifestLine::Invalid(line)
    }
}

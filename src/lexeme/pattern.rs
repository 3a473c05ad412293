use once_cell::sync::Lazy;
use regex::bytes::Regex;

static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-+]?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][-+]?[0-9]+)?$")
        .expect("number pattern is a valid regex")
});

static DATE_SHAPE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date shape pattern is a valid regex")
});

/// A compiled shape-matcher for a literal kind whose grammar is easier stated as a regex
/// than walked byte-by-byte (numbers, and the digit/dash shape of a date).
pub struct Pattern(&'static Lazy<Regex>);

impl Pattern {
    pub fn number() -> Self {
        Self(&NUMBER_PATTERN)
    }

    pub fn date_shape() -> Self {
        Self(&DATE_SHAPE_PATTERN)
    }

    /// Whether `token` matches this pattern in full, i.e. the regex consumes every byte.
    pub fn matches(&self, token: &[u8]) -> bool {
        match self.0.find(token) {
            Some(m) => m.start() == 0 && m.end() == token.len(),
            None => false,
        }
    }
}

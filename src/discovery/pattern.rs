//! Glob-style name patterns.
//!
//! Patterns match a single path component (a file or directory name) using
//! shell wildcard rules:
//!
//! - `*` matches any run of characters
//! - `?` matches exactly one character
//! - `[seq]` matches one character in `seq`, `[!seq]` one character not in it
//!
//! Everything else matches literally.

use regex::Regex;

use crate::error::{Result, SnipError};

/// A compiled glob pattern for file and directory names.
#[derive(Debug, Clone)]
pub struct NamePattern {
    glob: String,
    regex: Regex,
}

impl NamePattern {
    /// Compile a glob pattern.
    pub fn new(glob: &str) -> Result<Self> {
        let translated = translate(glob);
        let regex = Regex::new(&translated).map_err(|e| SnipError::InvalidPattern {
            pattern: glob.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            glob: glob.to_string(),
            regex,
        })
    }

    /// Pattern that matches only `name` itself.
    pub fn exact(name: &str) -> Self {
        let regex = Regex::new(&format!("(?s)^{}$", regex::escape(name)))
            .expect("escaped literal must compile");
        Self {
            glob: name.to_string(),
            regex,
        }
    }

    /// The original glob text.
    pub fn as_str(&self) -> &str {
        &self.glob
    }

    /// Check whether a name matches. Matching is case-sensitive.
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

impl std::fmt::Display for NamePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glob)
    }
}

/// Translate a glob into an anchored regex.
fn translate(glob: &str) -> String {
    let chars: Vec<char> = glob.chars().collect();
    let mut out = String::from("(?s)^");
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.push_str(&translate_class(&chars[i..end]));
                    i = end + 1;
                }
                // Unterminated class: treat the bracket literally.
                None => out.push_str(r"\["),
            },
            _ => out.push_str(&regex::escape(&c.to_string())),
        }
    }

    out.push('$');
    out
}

/// Index of the `]` closing a class whose body starts at `start`.
///
/// A `]` directly after `[` or `[!` belongs to the class.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    chars[j.min(chars.len())..]
        .iter()
        .position(|&c| c == ']')
        .map(|offset| j + offset)
}

fn translate_class(body: &[char]) -> String {
    let (negated, body) = match body.first() {
        Some('!') => (true, &body[1..]),
        _ => (false, body),
    };

    let mut out = String::from(if negated { "[^" } else { "[" });
    for (k, &c) in body.iter().enumerate() {
        let is_range = c == '-' && k > 0 && k + 1 < body.len();
        if is_range {
            out.push('-');
        } else {
            out.push_str(&regex::escape(&c.to_string()));
        }
    }
    out.push(']');
    out
}

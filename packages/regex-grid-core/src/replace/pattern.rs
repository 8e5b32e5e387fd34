//! Compiled find/replace patterns.

use std::borrow::Cow;

use regex::Regex;

use crate::error::GridError;

/// A compiled pattern paired with its engine-ready replacement text.
#[derive(Debug, Clone)]
pub struct Substitution {
    regex: Regex,
    replacement: String,
}

impl Substitution {
    /// Compiles `pattern` and translates `$N` group references in
    /// `replacement`.
    ///
    /// A bare `.*` or `^.*$` pattern becomes `(?s)^.*$`: one match covering
    /// the whole cell, line breaks included.
    pub fn compile(pattern: &str, replacement: &str) -> Result<Self, GridError> {
        let source = anchor_bare_wildcard(pattern);
        let regex = Regex::new(source).map_err(|e| GridError::InvalidRegex {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            regex,
            replacement: translate_group_references(replacement),
        })
    }

    /// The compiled pattern source.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Replaces every match in `text`.
    ///
    /// Borrows `text` unchanged when nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.regex.replace_all(text, self.replacement.as_str())
    }
}

const WHOLE_CELL: &str = "(?s)^.*$";

fn anchor_bare_wildcard(pattern: &str) -> &str {
    match pattern.trim() {
        ".*" | "^.*$" => WHOLE_CELL,
        _ => pattern,
    }
}

/// Rewrites `$1`-style group references into the braced `${1}` form and
/// escapes every other `$`, `${name}` included, so it stays literal.
pub(crate) fn translate_group_references(replacement: &str) -> String {
    let mut out = String::with_capacity(replacement.len() + 8);
    let mut chars = replacement.char_indices();

    while let Some((i, c)) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }

        let rest = &replacement[i + 1..];
        let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
        if !digits.is_empty() {
            out.push_str("${");
            out.push_str(&digits);
            out.push('}');
            for _ in 0..digits.len() {
                chars.next();
            }
        } else {
            out.push_str("$$");
        }
    }

    out
}

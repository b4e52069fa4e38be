//! Key casing conversion.
//!
//! Keys are first split into word parts, then rendered in one of six casing
//! conventions. Splitting rules, in priority order:
//!
//! 1. a key containing `_` is split on `_`;
//! 2. otherwise a key containing `-` is split on `-`;
//! 3. otherwise the key is split on case boundaries. A run of uppercase
//!    letters stays fused as one word; when the run is followed by a lowercase
//!    letter, its last capital starts the next word (`HTTPServer` splits into
//!    `HTTP` + `Server`).
//!
//! Empty parts (leading, trailing or doubled separators) are dropped.
//!
//! ```
//! use catena::casing::{KeyCase, convert, tokenize};
//!
//! assert_eq!(tokenize("HTTPServerID"), vec!["HTTP", "Server", "ID"]);
//! assert_eq!(convert("user_id", KeyCase::Camel), "userId");
//! assert_eq!(convert("HTTPServer", KeyCase::Snake), "http_server");
//! assert_eq!(convert("page-count", KeyCase::ScreamSnake), "PAGE_COUNT");
//! ```

use std::fmt;

/// The casing conventions keys can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCase {
    /// `camelCase`
    Camel,
    /// `PascalCase`
    Pascal,
    /// `snake_case`
    Snake,
    /// `kebab-case`
    Kebab,
    /// `SCREAM_SNAKE_CASE`
    ScreamSnake,
    /// `SCREAM-KEBAB-CASE`
    ScreamKebab,
}

impl KeyCase {
    /// Joins word parts in this convention.
    ///
    /// Camel and Pascal normalize every part to a capitalized word (first
    /// letter upper, rest lower), except the first camel part which is fully
    /// lowercased. The separated forms lowercase or uppercase whole parts.
    pub fn render<S: AsRef<str>>(self, parts: &[S]) -> String {
        let parts = parts.iter().map(|part| AsRef::<str>::as_ref(part));
        match self {
            KeyCase::Camel => parts
                .enumerate()
                .map(|(i, part)| {
                    if i == 0 {
                        part.to_lowercase()
                    } else {
                        capitalize(part)
                    }
                })
                .collect(),
            KeyCase::Pascal => parts.map(capitalize).collect(),
            KeyCase::Snake => join_mapped(parts, '_', str::to_lowercase),
            KeyCase::Kebab => join_mapped(parts, '-', str::to_lowercase),
            KeyCase::ScreamSnake => join_mapped(parts, '_', str::to_uppercase),
            KeyCase::ScreamKebab => join_mapped(parts, '-', str::to_uppercase),
        }
    }
}

impl fmt::Display for KeyCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyCase::Camel => "camelCase",
            KeyCase::Pascal => "PascalCase",
            KeyCase::Snake => "snake_case",
            KeyCase::Kebab => "kebab-case",
            KeyCase::ScreamSnake => "SCREAM_SNAKE_CASE",
            KeyCase::ScreamKebab => "SCREAM-KEBAB-CASE",
        };
        f.write_str(name)
    }
}

/// Splits a key into its word parts.
pub fn tokenize(key: &str) -> Vec<String> {
    let parts: Vec<String> = if key.contains('_') {
        key.split('_').map(str::to_string).collect()
    } else if key.contains('-') {
        key.split('-').map(str::to_string).collect()
    } else {
        split_case_boundaries(key)
    };
    parts.into_iter().filter(|part| !part.is_empty()).collect()
}

/// Converts a key to the given casing convention.
pub fn convert(key: &str, case: KeyCase) -> String {
    case.render(&tokenize(key))
}

/// Splits camelCase / PascalCase text, keeping uppercase runs together.
fn split_case_boundaries(key: &str) -> Vec<String> {
    let chars: Vec<char> = key.chars().collect();
    let mut parts = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            // lower -> Upper starts a word; so does the last capital of a run
            // when a lowercase letter follows it
            if !prev.is_uppercase() || next_is_lower {
                parts.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn join_mapped<'a>(
    parts: impl Iterator<Item = &'a str>,
    sep: char,
    map: fn(&str) -> String,
) -> String {
    let mut out = String::new();
    for (i, part) in parts.enumerate() {
        if i > 0 {
            out.push(sep);
        }
        out.push_str(&map(part));
    }
    out
}

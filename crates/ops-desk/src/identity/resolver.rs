use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use super::names::KNOWN_FIRST_NAMES;

/// Separators checked in priority order; the first one present wins.
const SEPARATORS: [char; 3] = ['.', '_', '-'];

/// Best-guess human name derived from an email local part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedName {
    pub first_name: String,
    pub last_name: String,
    pub formal_name: String,
    pub display_name: String,
}

impl ParsedName {
    /// Capitalizes both parts and composes the formal and display renderings.
    pub fn from_parts(first: &str, last: &str) -> Self {
        let first_name = capitalize(first);
        let last_name = capitalize(last);

        let (formal_name, display_name) = if last_name.is_empty() {
            (first_name.clone(), first_name.clone())
        } else {
            (
                format!("Mr. {last_name}"),
                format!("{first_name} {last_name}"),
            )
        };

        Self {
            first_name,
            last_name,
            formal_name,
            display_name,
        }
    }
}

impl fmt::Display for ParsedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}

/// Guesses a first/last name pair from an email address.
///
/// Only the text before the first `@` is considered; without an `@` the
/// whole input is the local part. The function is total: malformed or empty
/// input degrades to a first-name-only (or fully empty) result.
pub fn resolve(email: &str) -> ParsedName {
    let local = local_part(email);
    let lowered = local.to_lowercase();

    let (first, last) = match SEPARATORS.iter().find(|sep| lowered.contains(**sep)) {
        Some(&separator) => {
            let mut segments = lowered.split(separator);
            let first = segments.next().unwrap_or_default();
            let last = segments.next().unwrap_or_default();
            (first.to_string(), strip_trailing_digits(last).to_string())
        }
        None => split_unseparated(local),
    };

    ParsedName::from_parts(&first, &last)
}

fn local_part(email: &str) -> &str {
    match email.split_once('@') {
        Some((local, _)) => local,
        None => email,
    }
}

fn strip_trailing_digits(value: &str) -> &str {
    value.trim_end_matches(|c: char| c.is_ascii_digit())
}

/// Splits a local part with no separator: known-name prefix first, then a
/// camelCase boundary, else everything is the first name.
fn split_unseparated(local: &str) -> (String, String) {
    let cleaned = strip_trailing_digits(local);
    let lowered = cleaned.to_lowercase();

    if let Some((first, rest)) = known_name_prefix(&lowered) {
        return (first.to_string(), rest.to_string());
    }

    if let Some((first, last)) = camel_case_split(cleaned) {
        return (first.to_string(), last.to_lowercase());
    }

    (lowered, String::new())
}

fn known_name_prefix(lowered: &str) -> Option<(&'static str, &str)> {
    KNOWN_FIRST_NAMES.iter().find_map(|name| {
        lowered
            .strip_prefix(*name)
            .filter(|rest| !rest.is_empty())
            .map(|rest| (*name, rest))
    })
}

fn camel_case_split(value: &str) -> Option<(&str, &str)> {
    static CAMEL_CASE: OnceLock<Regex> = OnceLock::new();
    let pattern = CAMEL_CASE.get_or_init(|| {
        Regex::new(r"^([a-z]+)([A-Z][a-z]+)$").expect("camelCase pattern compiles")
    });

    let captures = pattern.captures(value)?;
    Some((captures.get(1)?.as_str(), captures.get(2)?.as_str()))
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

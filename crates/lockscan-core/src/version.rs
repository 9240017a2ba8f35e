//! Lenient composer-style version parsing and comparison.
//!
//! Lock files carry whatever the upstream registry recorded, so parsing is
//! best-effort and never fails: an unrecognized token degrades to a raw
//! text segment instead of aborting the scan. Ordering follows composer
//! conventions:
//! - An optional leading `v` is ignored (`v1.2.3` == `1.2.3`)
//! - Segments split on `.`, `-`, `_` and `+`
//! - Numeric segments compare as numbers (four-part `1.2.3.4` is valid)
//! - Stability qualifiers order `dev < alpha < beta < RC < stable < patch`
//! - A trailing qualifier number is honored (`RC1 < RC2`)

use std::cmp::Ordering;
use std::fmt;

/// A parsed package version with comparable segments.
///
/// `Display` always echoes the original string, so a degraded parse still
/// renders exactly what the lock file said.
#[derive(Debug, Clone)]
pub struct Version {
    pub original: String,
    segments: Vec<Segment>,
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

#[derive(Debug, Clone, Eq, PartialEq)]
enum Segment {
    Numeric(u64),
    Stability(Stability),
    Text(String),
}

/// Composer stability levels with defined ordering.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
enum Stability {
    Dev,
    Alpha,
    Beta,
    Rc,
    Stable,
    Patch,
}

impl Version {
    pub fn parse(version: &str) -> Self {
        let segments = parse_segments(version);
        Self {
            original: version.to_string(),
            segments,
        }
    }

    /// Whether this is a development version (`dev-master`, `2.x-dev`, ...).
    pub fn is_dev(&self) -> bool {
        self.segments
            .iter()
            .any(|s| *s == Segment::Stability(Stability::Dev))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let max_len = self.segments.len().max(other.segments.len());
        for i in 0..max_len {
            let a = self.segments.get(i);
            let b = other.segments.get(i);
            let ord = compare_segments(a, b);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn compare_segments(a: Option<&Segment>, b: Option<&Segment>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (Some(s), None) => compare_segment_to_empty(s),
        (None, Some(s)) => compare_segment_to_empty(s).reverse(),
        (Some(a), Some(b)) => compare_two_segments(a, b),
    }
}

fn compare_segment_to_empty(seg: &Segment) -> Ordering {
    match seg {
        Segment::Numeric(0) => Ordering::Equal,
        Segment::Numeric(_) => Ordering::Greater,
        Segment::Stability(s) => s.cmp(&Stability::Stable),
        Segment::Text(t) if t.is_empty() => Ordering::Equal,
        Segment::Text(_) => Ordering::Less,
    }
}

fn compare_two_segments(a: &Segment, b: &Segment) -> Ordering {
    match (a, b) {
        (Segment::Numeric(a), Segment::Numeric(b)) => a.cmp(b),
        (Segment::Stability(a), Segment::Stability(b)) => a.cmp(b),
        (Segment::Numeric(_), Segment::Stability(_)) => Ordering::Greater,
        (Segment::Stability(_), Segment::Numeric(_)) => Ordering::Less,
        (Segment::Numeric(_), Segment::Text(_)) => Ordering::Greater,
        (Segment::Text(_), Segment::Numeric(_)) => Ordering::Less,
        (Segment::Text(a), Segment::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        (Segment::Stability(s), Segment::Text(_)) => {
            if *s >= Stability::Stable {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        }
        (Segment::Text(_), Segment::Stability(s)) => {
            if *s >= Stability::Stable {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
    }
}

fn parse_segments(version: &str) -> Vec<Segment> {
    // Registry tags commonly carry a `v` prefix; strip it when a digit
    // follows so `v1.2` and `1.2` compare equal.
    let rest = version
        .strip_prefix(['v', 'V'])
        .filter(|r| r.starts_with(|c: char| c.is_ascii_digit()))
        .unwrap_or(version);

    let mut segments = Vec::new();
    let mut current = String::new();

    for ch in rest.chars() {
        if ch == '.' || ch == '-' || ch == '_' || ch == '+' {
            if !current.is_empty() {
                classify(&current, &mut segments);
                current.clear();
            }
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        classify(&current, &mut segments);
    }

    segments
}

fn classify(token: &str, segments: &mut Vec<Segment>) {
    if let Ok(n) = token.parse::<u64>() {
        segments.push(Segment::Numeric(n));
        return;
    }
    // Qualifiers often carry an attached number (`RC1`, `beta2`); peel it
    // off so the qualifier and its ordinal compare independently.
    let split = token
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(token.len());
    let (word, ordinal) = token.split_at(split);
    if let Some(stability) = stability_of(word) {
        segments.push(Segment::Stability(stability));
        if let Ok(n) = ordinal.parse::<u64>() {
            segments.push(Segment::Numeric(n));
        }
        return;
    }
    segments.push(Segment::Text(token.to_string()));
}

fn stability_of(word: &str) -> Option<Stability> {
    match word.to_lowercase().as_str() {
        "dev" => Some(Stability::Dev),
        "alpha" | "a" => Some(Stability::Alpha),
        "beta" | "b" => Some(Stability::Beta),
        "rc" => Some(Stability::Rc),
        "stable" => Some(Stability::Stable),
        "patch" | "pl" | "p" => Some(Stability::Patch),
        _ => None,
    }
}

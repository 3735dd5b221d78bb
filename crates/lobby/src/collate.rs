//! Locale-style string ordering for room and group names.
//!
//! Approximates the root collation a browser applies to `localeCompare`.
//! Names are compared in three passes over their canonical decomposition:
//!
//! 1. base characters, case-insensitively: whitespace, then punctuation,
//!    symbols, digits and letters; punctuation and symbols in the root
//!    collation order (`_` before `-`)
//! 2. accents: an unaccented letter before its accented forms
//! 3. case: lowercase before uppercase
//!
//! Later passes only break ties left by earlier ones.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// ASCII punctuation and symbols in root collation order.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Character classes in primary sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Whitespace,
    Punctuation,
    Symbol,
    Digit,
    Letter,
    Other,
}

fn classify(c: char) -> Class {
    if c.is_whitespace() {
        Class::Whitespace
    } else if c.is_ascii_punctuation() {
        match c {
            '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~' => Class::Symbol,
            _ => Class::Punctuation,
        }
    } else if c.is_numeric() {
        Class::Digit
    } else if c.is_alphabetic() {
        Class::Letter
    } else if c.is_control() {
        Class::Other
    } else {
        Class::Symbol
    }
}

/// Position within a class.
fn weight(class: Class, c: char) -> u32 {
    match class {
        Class::Punctuation | Class::Symbol => match PUNCTUATION_ORDER.find(c) {
            Some(i) => i as u32,
            None => PUNCTUATION_ORDER.len() as u32 + u32::from(c),
        },
        _ => u32::from(c),
    }
}

/// One base character with the marks that decorate it.
#[derive(Debug)]
struct Element {
    primary: (Class, u32),
    accents: Vec<char>,
    upper: bool,
}

fn elements(s: &str) -> Vec<Element> {
    let mut out: Vec<Element> = Vec::new();
    for c in s.nfd() {
        if is_combining_mark(c) {
            if let Some(last) = out.last_mut() {
                last.accents.push(c);
                continue;
            }
        }
        let class = classify(c);
        let upper = c.is_uppercase();
        out.extend(c.to_lowercase().map(|lower| Element {
            primary: (class, weight(class, lower)),
            accents: Vec::new(),
            upper,
        }));
    }
    out
}

/// Compare two names the way the lobby orders them.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let (ea, eb) = (elements(a), elements(b));
    ea.iter()
        .map(|e| e.primary)
        .cmp(eb.iter().map(|e| e.primary))
        .then_with(|| ea.iter().map(|e| &e.accents).cmp(eb.iter().map(|e| &e.accents)))
        .then_with(|| ea.iter().map(|e| e.upper).cmp(eb.iter().map(|e| e.upper)))
        .then_with(|| a.cmp(b))
}

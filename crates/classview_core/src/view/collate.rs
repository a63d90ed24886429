//! Human-oriented ordering for classification codes.
//!
//! # Invariants
//! - Ordering is total and deterministic.
//! - Letters compare case-folded.
//! - Digit runs without a leading zero compare by numeric value, so `01.9`
//!   sorts before `01.10`.
//! - Digit runs with a leading zero compare as text, so `01 < 011 < 02 < 10`.
//! - Ties fall back to raw byte order.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Digits(&'a str),
    Char(char),
}

fn tokens(value: &str) -> Vec<Token<'_>> {
    let mut out = Vec::new();
    let mut rest = value;
    while let Some(first) = rest.chars().next() {
        if first.is_ascii_digit() {
            let end = rest
                .find(|ch: char| !ch.is_ascii_digit())
                .unwrap_or(rest.len());
            out.push(Token::Digits(&rest[..end]));
            rest = &rest[end..];
        } else {
            out.push(Token::Char(first));
            rest = &rest[first.len_utf8()..];
        }
    }
    out
}

fn fold(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    // Zero-led runs stay textual; they all sort ahead of the numeric ones.
    if a.starts_with('0') || b.starts_with('0') {
        return a.cmp(b);
    }
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_tokens(a: Token<'_>, b: Token<'_>) -> Ordering {
    match (a, b) {
        (Token::Digits(a), Token::Digits(b)) => compare_digit_runs(a, b),
        (Token::Char(a), Token::Char(b)) => fold(a).cmp(&fold(b)),
        (Token::Digits(a), Token::Char(b)) => a.chars().next().map_or('0', fold).cmp(&fold(b)),
        (Token::Char(a), Token::Digits(b)) => fold(a).cmp(&b.chars().next().map_or('0', fold)),
    }
}

/// Compares two codes (or labels) for display ordering.
pub fn compare_codes(a: &str, b: &str) -> Ordering {
    let a_tokens = tokens(a);
    let b_tokens = tokens(b);
    for (left, right) in a_tokens.iter().zip(b_tokens.iter()) {
        let ordering = compare_tokens(*left, *right);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    a_tokens
        .len()
        .cmp(&b_tokens.len())
        .then_with(|| a.cmp(b))
}

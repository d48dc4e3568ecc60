//! Maven version ordering
//!
//! Versions are split into tokens at `.` and `-`, and at every transition
//! between digits and letters (`1.0alpha1` -> `1`, `.0`, `-alpha`, `-1`).
//! Trailing "null" tokens (`0` or an empty/release qualifier) are dropped
//! before each `-` group and at the end, so `1.0` == `1` == `1.0.0`.
//!
//! Qualifier ranks: `alpha` < `beta` < `milestone` < `rc` == `cr` <
//! `snapshot` < release (`""`, `ga`, `final`, `release`, `latest`, `sr`) <
//! `sp` < any unknown qualifier (compared lexicographically).
//! A single-letter `a`, `b` or `m` directly followed by a digit is shorthand
//! for alpha, beta and milestone.

use std::cmp::Ordering;

use crate::version::comparator::VersionComparator;

/// Maven/Ivy version comparator
#[derive(Debug, Clone, Copy, Default)]
pub struct MavenComparator;

impl VersionComparator for MavenComparator {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        compare(left, right)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prefix {
    Dot,
    Hyphen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Value {
    /// Digits with leading zeros stripped, compared by length then lexically
    Number(String),
    Qualifier(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    prefix: Prefix,
    value: Value,
    /// Token ends at a letter/digit boundary (`a` in `a1`)
    transition: bool,
}

impl Token {
    fn is_null(&self) -> bool {
        match &self.value {
            Value::Number(n) => n == "0",
            Value::Qualifier(q) => is_release_alias(q),
        }
    }

    /// Neutral token used to pad the shorter version during comparison
    fn null_for(other: &Token) -> Token {
        let value = match other.value {
            Value::Number(_) => Value::Number("0".to_string()),
            Value::Qualifier(_) => Value::Qualifier(String::new()),
        };
        Token {
            prefix: other.prefix,
            value,
            transition: false,
        }
    }

    /// `.qualifier` < `-qualifier` < `-number` < `.number`
    fn common_order(&self) -> u8 {
        match (self.prefix, &self.value) {
            (Prefix::Dot, Value::Qualifier(_)) => 1,
            (Prefix::Hyphen, Value::Qualifier(_)) => 2,
            (Prefix::Hyphen, Value::Number(_)) => 3,
            (Prefix::Dot, Value::Number(_)) => 4,
        }
    }

    fn qualifier_rank(&self) -> Option<u8> {
        let Value::Qualifier(q) = &self.value else {
            return None;
        };
        match q.as_str() {
            "alpha" => Some(1),
            "a" if self.transition => Some(1),
            "beta" => Some(2),
            "b" if self.transition => Some(2),
            "milestone" => Some(3),
            "m" if self.transition => Some(3),
            "rc" | "cr" | "preview" => Some(4),
            "snapshot" => Some(5),
            q if is_release_alias(q) => Some(6),
            "sp" => Some(7),
            _ => None,
        }
    }
}

fn is_release_alias(qualifier: &str) -> bool {
    matches!(qualifier, "" | "final" | "ga" | "release" | "latest" | "sr")
}

fn is_transition(prev: char, next: char) -> bool {
    (prev.is_ascii_digit() && next.is_alphabetic()) || (prev.is_alphabetic() && next.is_ascii_digit())
}

fn make_token(prefix: Prefix, raw: &str, transition: bool) -> Token {
    let raw = if raw.is_empty() { "0" } else { raw };
    let value = if raw.chars().all(|c| c.is_ascii_digit()) {
        let trimmed = raw.trim_start_matches('0');
        Value::Number(if trimmed.is_empty() { "0" } else { trimmed }.to_string())
    } else {
        Value::Qualifier(raw.to_string())
    };
    Token {
        prefix,
        value,
        transition,
    }
}

fn raw_tokens(version: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut prefix = Prefix::Hyphen;
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in version.chars() {
        match c {
            '-' => {
                tokens.push(make_token(prefix, &current, false));
                prefix = Prefix::Hyphen;
                current.clear();
            }
            '.' => {
                tokens.push(make_token(prefix, &current, false));
                prefix = Prefix::Dot;
                current.clear();
            }
            _ if prev.is_some_and(|p| is_transition(p, c)) => {
                tokens.push(make_token(prefix, &current, true));
                prefix = Prefix::Hyphen;
                current.clear();
                current.push(c);
            }
            _ => current.push(c),
        }
        prev = Some(c);
    }
    tokens.push(make_token(prefix, &current, false));

    tokens
}

fn tokenize(version: &str) -> Vec<Token> {
    let lowered = version.to_lowercase();
    let lowered = lowered.strip_prefix('v').unwrap_or(&lowered);

    let mut result = Vec::new();
    let mut pending = Vec::new();
    let mut leading_zero = true;

    for token in raw_tokens(lowered) {
        if token.prefix == Prefix::Hyphen {
            pending.clear();
        }
        let is_null = token.is_null();
        pending.push(token);
        if !is_null || leading_zero {
            if !is_null {
                leading_zero = false;
            }
            result.append(&mut pending);
        }
    }

    if result.is_empty() {
        result.push(make_token(Prefix::Hyphen, "0", false));
    }
    result
}

fn compare_numbers(left: &str, right: &str) -> Ordering {
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}

fn compare_qualifiers(left: &Token, right: &Token) -> Ordering {
    match (left.qualifier_rank(), right.qualifier_rank()) {
        (Some(l), Some(r)) => l.cmp(&r),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => match (&left.value, &right.value) {
            (Value::Qualifier(l), Value::Qualifier(r)) => l.cmp(r),
            _ => Ordering::Equal,
        },
    }
}

fn compare_tokens(left: &Token, right: &Token) -> Ordering {
    let order = left.common_order().cmp(&right.common_order());
    if order != Ordering::Equal {
        return order;
    }
    match (&left.value, &right.value) {
        (Value::Number(l), Value::Number(r)) => compare_numbers(l, r),
        _ => compare_qualifiers(left, right),
    }
}

/// Compare two version strings using Maven ordering
pub fn compare(left: &str, right: &str) -> Ordering {
    let left_tokens = tokenize(left);
    let right_tokens = tokenize(right);
    let length = left_tokens.len().max(right_tokens.len());

    for idx in 0..length {
        let (l, r) = match (left_tokens.get(idx), right_tokens.get(idx)) {
            (Some(l), Some(r)) => (l.clone(), r.clone()),
            (Some(l), None) => (l.clone(), Token::null_for(l)),
            (None, Some(r)) => (Token::null_for(r), r.clone()),
            (None, None) => break,
        };
        let result = compare_tokens(&l, &r);
        if result != Ordering::Equal {
            return result;
        }
    }

    Ordering::Equal
}

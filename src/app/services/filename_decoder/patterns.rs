//! Ordered value-pattern table for filename decoding
//!
//! Each entry pairs a regular expression with the unit label it implies
//! and the parser that turns the captured token into a signed value. The
//! table is evaluated strictly in order and the first entry that both
//! matches and parses wins; a parse failure inside a matched entry falls
//! through to the next entry rather than aborting.
//!
//! The `regex` crate has no lookbehind, so exclusions like "not preceded
//! by the range prefix `R`" are expressed as an explicit
//! `not_preceded_by` byte set checked against the character immediately
//! before the match.

use regex::Regex;
use std::sync::LazyLock;

/// One entry in the ordered value-pattern table
pub struct ValuePattern {
    /// Unit label reported when this pattern wins
    pub unit: &'static str,

    /// Token-matching expression; group 1 captures the value token
    pub regex: &'static LazyLock<Regex>,

    /// Bytes that must not directly precede the match (lookbehind guard)
    pub not_preceded_by: &'static [u8],

    /// Turn the captured token into a signed value
    pub parse: fn(&str) -> Option<f64>,
}

/// Voltage tokens: magnitude digits split by a literal `V` acting as the
/// decimal point, sign encoded by a leading `m` (negative) or `p`
/// (positive), e.g. `m2V5` -> -2.5, `10V` -> 10.0, `p7V5` -> 7.5
static VOLTAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)_([mp]?\d+V\d*)(?:_|$)").unwrap());

/// Milliamp tokens, e.g. `3mA`, `m5mA`, `p10mA`
static MILLIAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)_([mp]?\d+(?:\.\d+)?)\s*mA(?:_|$)").unwrap());

/// Microamp tokens, e.g. `100uA`, `m50uA`
static MICROAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)_([mp]?\d+(?:\.\d+)?)\s*uA(?:_|$)").unwrap());

/// Plain amp tokens, e.g. `1A`, `2A`
static AMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)_([mp]?\d+(?:\.\d+)?)\s*A(?:_|$)").unwrap());

/// Ohm tokens, e.g. `10_ohms`, `100ohm`
static OHMS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)_(\d+(?:\.\d+)?)[_\s]?ohms?(?:_|$)").unwrap());

/// Generic underscore-delimited numeric token of unknown unit
static GENERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_([mp]?\d+(?:\.\d+)?)_").unwrap());

/// The ordered table. Voltage is tried first because its `V`-as-decimal
/// encoding would otherwise be shadowed by the generic pattern; the amp
/// entry excludes `m`/`u` prefixes so it cannot claim the trailing `A`
/// of a milliamp or microamp token.
pub static VALUE_PATTERNS: &[ValuePattern] = &[
    ValuePattern {
        unit: "V",
        regex: &VOLTAGE,
        not_preceded_by: b"Rr",
        parse: parse_voltage_token,
    },
    ValuePattern {
        unit: "mA",
        regex: &MILLIAMP,
        not_preceded_by: b"Rr",
        parse: parse_signed_token,
    },
    ValuePattern {
        unit: "uA",
        regex: &MICROAMP,
        not_preceded_by: b"Rr",
        parse: parse_signed_token,
    },
    ValuePattern {
        unit: "A",
        regex: &AMP,
        not_preceded_by: b"RrMmUu",
        parse: parse_signed_token,
    },
    ValuePattern {
        unit: "Ohm",
        regex: &OHMS,
        not_preceded_by: b"",
        parse: parse_plain_token,
    },
    ValuePattern {
        unit: "unknown",
        regex: &GENERIC,
        not_preceded_by: b"",
        parse: parse_signed_token,
    },
];

impl ValuePattern {
    /// First match of this pattern in `name` that passes the
    /// preceding-character guard, as the captured token
    pub fn first_match<'a>(&self, name: &'a str) -> Option<&'a str> {
        for caps in self.regex.captures_iter(name) {
            let whole = caps.get(0).expect("group 0 always present");
            if let Some(&prev) = whole.start().checked_sub(1).map(|i| &name.as_bytes()[i]) {
                if self.not_preceded_by.contains(&prev) {
                    continue;
                }
            }
            return caps.get(1).map(|m| m.as_str());
        }
        None
    }
}

/// Parse a voltage token: `m2V5` -> -2.5, `10V` -> 10.0, `0V` -> 0.0
fn parse_voltage_token(token: &str) -> Option<f64> {
    let lowered = token.to_lowercase();
    let (sign, digits) = split_sign(&lowered);
    let mut magnitude = digits.replace('v', ".");
    if magnitude.ends_with('.') {
        magnitude.pop();
    }
    magnitude.parse::<f64>().ok().map(|v| sign * v)
}

/// Parse a sign-prefixed decimal token: `m5` -> -5.0, `p2.5` -> 2.5
fn parse_signed_token(token: &str) -> Option<f64> {
    let (sign, digits) = split_sign(token);
    digits.parse::<f64>().ok().map(|v| sign * v)
}

/// Parse a bare decimal token
fn parse_plain_token(token: &str) -> Option<f64> {
    token.parse::<f64>().ok()
}

/// Split the `m`/`p` sign prefix off a token
fn split_sign(token: &str) -> (f64, &str) {
    if let Some(rest) = token.strip_prefix('m') {
        (-1.0, rest)
    } else if let Some(rest) = token.strip_prefix('p') {
        (1.0, rest)
    } else {
        (1.0, token)
    }
}

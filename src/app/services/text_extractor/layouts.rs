//! Line-shape expressions for the known instrument log layouts
//!
//! Each layout gets a structural match type that separates "this line
//! belongs to the layout" from "this line carried a usable sample":
//! layout detection keys off the former, sample accumulation off the
//! latter, so a malformed numeric capture drops one line without
//! changing which layout owns the file.

use regex::Regex;
use std::sync::LazyLock;

/// Hierarchical data line: `|  <Label>_Ch<digits>  <value>  <unit> ...`
static HIERARCHICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|\s+(\w+)_Ch(\d+)\s+(-?\d+\.?\d*)\s+(\w+)").unwrap());

/// Hierarchical label token, used by the scanner: `|  <Label>_Ch<digits>`
static HIERARCHICAL_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|\s+(\w+)_Ch\d+").unwrap());

/// Flat labeled data line: `<time>  <name>_Ch<digits>::<Label>  <value>`
static FLAT_LABELED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[\d.]+\s+\S+_Ch(\d+)::(\w+)\s+(-?\d+\.?\d*)").unwrap());

/// Flat label token, used by the scanner: `_Ch<digits>::<Label>`
static FLAT_LABEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)_Ch\d+::(\w+)").unwrap());

/// Flat label-less data line: `<time>  <name>  <value>`
static FLAT_PLAIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[\d.]+\s+\S+\s+(-?\d+\.?\d*)\s*$").unwrap());

/// Structural match of a hierarchical data line
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchicalLine<'a> {
    pub label: &'a str,
    channel: &'a str,
    value: &'a str,
}

impl HierarchicalLine<'_> {
    /// Channel number and sample value, `None` when a captured token
    /// fails numeric parsing (the line is then not counted)
    pub fn sample(&self) -> Option<(u32, f64)> {
        let channel = self.channel.parse::<u32>().ok()?;
        let value = self.value.parse::<f64>().ok()?;
        Some((channel, value))
    }
}

/// Structural match of a flat labeled data line
#[derive(Debug, Clone, PartialEq)]
pub struct FlatLabeledLine<'a> {
    pub label: &'a str,
    channel: &'a str,
    value: &'a str,
}

impl FlatLabeledLine<'_> {
    /// Channel number and sample value, `None` on a parse failure
    pub fn sample(&self) -> Option<(u32, f64)> {
        let channel = self.channel.parse::<u32>().ok()?;
        let value = self.value.parse::<f64>().ok()?;
        Some((channel, value))
    }
}

/// Match a line against the hierarchical layout
pub fn hierarchical_line(line: &str) -> Option<HierarchicalLine<'_>> {
    let caps = HIERARCHICAL.captures(line)?;
    Some(HierarchicalLine {
        label: caps.get(1).unwrap().as_str(),
        channel: caps.get(2).unwrap().as_str(),
        value: caps.get(3).unwrap().as_str(),
    })
}

/// Label of a hierarchical line, for the scanner
pub fn hierarchical_label(line: &str) -> Option<&str> {
    HIERARCHICAL_LABEL
        .captures(line)
        .map(|caps| caps.get(1).unwrap().as_str())
}

/// Match a line against the flat labeled layout
pub fn flat_labeled_line(line: &str) -> Option<FlatLabeledLine<'_>> {
    let caps = FLAT_LABELED.captures(line)?;
    Some(FlatLabeledLine {
        channel: caps.get(1).unwrap().as_str(),
        label: caps.get(2).unwrap().as_str(),
        value: caps.get(3).unwrap().as_str(),
    })
}

/// Label of a flat labeled line, for the scanner (case-insensitive)
pub fn flat_label(line: &str) -> Option<&str> {
    FLAT_LABEL
        .captures(line)
        .map(|caps| caps.get(1).unwrap().as_str())
}

/// Sample value of a flat label-less line, `None` when the line does not
/// belong to the layout or the value fails to parse
pub fn flat_plain_value(line: &str) -> Option<f64> {
    FLAT_PLAIN
        .captures(line)
        .and_then(|caps| caps.get(1).unwrap().as_str().parse::<f64>().ok())
}

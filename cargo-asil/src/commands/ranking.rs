//! `compare` and `highest` commands

use std::cmp::Ordering;

use anyhow::{
    Context,
    Result,
};
use asil_integrity::{
    highest,
    Integrity,
};
use serde::Serialize;

use crate::helpers::{
    OutputManager,
    Report,
};

/// Result of `compare`
#[derive(Debug, Clone, Serialize)]
pub struct CompareReport {
    /// Canonical left-hand tag
    pub left:     String,
    /// Canonical right-hand tag
    pub right:    String,
    /// One of `<`, `=`, `>`
    pub ordering: &'static str,
}

impl Report for CompareReport {
    fn success(&self) -> bool {
        true
    }

    fn human(&self, _output: &OutputManager) -> Vec<String> {
        vec![format!("{} {} {}", self.left, self.ordering, self.right)]
    }
}

/// Rank `left` against `right`; decomposition suffixes do not count.
pub fn cmd_compare(left: &str, right: &str) -> Result<CompareReport> {
    let left: Integrity = left
        .parse()
        .with_context(|| format!("Invalid integrity '{left}'"))?;
    let right: Integrity = right
        .parse()
        .with_context(|| format!("Invalid integrity '{right}'"))?;

    let ordering = match left.cmp(&right) {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };

    Ok(CompareReport {
        left: left.to_string(),
        right: right.to_string(),
        ordering,
    })
}

/// Result of `highest`
#[derive(Debug, Clone, Serialize)]
pub struct HighestReport {
    /// Canonical highest integrity
    pub highest: Option<String>,
    /// Number of tags ranked
    pub count:   usize,
}

impl Report for HighestReport {
    fn success(&self) -> bool {
        self.highest.is_some()
    }

    fn human(&self, _output: &OutputManager) -> Vec<String> {
        vec![self.highest.clone().unwrap_or_else(|| "no tags given".to_string())]
    }
}

/// Find the highest integrity among `tags`.
pub fn cmd_highest(tags: &[String]) -> Result<HighestReport> {
    let top = highest(tags).context("Cannot rank integrities")?;
    Ok(HighestReport {
        highest: top.map(|integrity| integrity.to_string()),
        count:   tags.len(),
    })
}

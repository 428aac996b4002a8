// src/data.rs
//
// Value types shared by the filter engine, the cascade controller and views.
//
// - Record: one flat employer row, field name -> string value.
// - FilterState: the contiguous prefix of (dimension, value) picks for one
//   cascade. Owned exclusively by the Cascade controller.
// - ResultsView: derived (view) data produced from a dataset by applying the
//   current picks; holds row indices, no duplicated owned rows.
// - EmployerCard: what the final render stage actually shows.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::filter;

/// One employer row. Fields present vary by dataset; a missing field reads
/// as the empty string, same as an explicitly empty one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(BTreeMap<String, String>);

impl Record {
    pub fn new() -> Self { Self(BTreeMap::new()) }

    pub fn field(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: &str, value: &str) -> &mut Self {
        self.0.insert(s!(name), s!(value));
        self
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut r = Self::new();
        for (name, value) in pairs {
            r.set(name, value);
        }
        r
    }

    pub fn employer_name(&self) -> &str { self.field("EmployerName") }
    pub fn employer_link(&self) -> &str { self.field("EmployerLink") }
}

/// Ordered (dimension, value) picks. Invariant: always a contiguous prefix
/// of the owning flow's dimension order; the controller enforces this.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    picks: Vec<(String, String)>,
}

impl FilterState {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.picks.len() }
    pub fn is_empty(&self) -> bool { self.picks.is_empty() }
    pub fn picks(&self) -> &[(String, String)] { &self.picks }

    pub fn value_of(&self, dimension: &str) -> Option<&str> {
        self.picks.iter()
            .find(|(d, _)| d == dimension)
            .map(|(_, v)| v.as_str())
    }

    /// Append the next pick. Callers keep the prefix invariant.
    pub fn push(&mut self, dimension: &str, value: &str) {
        self.picks.push((s!(dimension), s!(value)));
    }

    /// Drop the pick at `depth` and everything after it.
    pub fn truncate(&mut self, depth: usize) {
        self.picks.truncate(depth);
    }

    /// Exact, case-sensitive match on every pick.
    pub fn matches(&self, record: &Record) -> bool {
        self.picks.iter().all(|(d, v)| record.field(d) == v)
    }
}

/// One rendered employer entry. Rows without an employer name never become
/// cards; a blank link renders as plain text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmployerCard {
    pub name: String,
    pub link: Option<String>,
}

impl EmployerCard {
    pub fn from_record(record: &Record) -> Option<Self> {
        let name = record.employer_name();
        if name.is_empty() { return None; }
        let link = record.employer_link();
        Some(Self {
            name: s!(name),
            link: (!link.is_empty()).then(|| s!(link)),
        })
    }
}

/// Zero-copy filtered view for display: positions of kept rows in the
/// backing dataset, in dataset order.
#[derive(Clone, Debug)]
pub struct ResultsView<'a> {
    pub row_ix: Vec<usize>,
    raw: &'a [Record],
}

impl<'a> ResultsView<'a> {
    pub fn from_filter(records: &'a [Record], state: &FilterState) -> Self {
        Self { row_ix: filter::filter_indices(records, state), raw: records }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Borrow a single row by projected index (no cloning).
    pub fn record(&self, i: usize) -> Option<&Record> {
        self.row_ix.get(i).and_then(|&ix| self.raw.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.row_ix.iter().filter_map(|&ix| self.raw.get(ix))
    }

    /// Materialize the cards for the final render stage. Rows with an empty
    /// EmployerName are dropped here, not in the filter engine.
    pub fn cards(&self) -> Vec<EmployerCard> {
        self.iter().filter_map(EmployerCard::from_record).collect()
    }
}

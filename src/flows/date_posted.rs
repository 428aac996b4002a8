// src/flows/date_posted.rs
use crate::config::options::FlowKind::{ self, * };

use super::Flow;

pub struct DatePostedFlow;
pub static FLOW: DatePostedFlow = DatePostedFlow;

const DIMS: &[&str] = &["DatePosted", "Scale", "Type"];
const LABELS: &[&str] = &["Date Posted", "Scale", "Type"];
const PLACEHOLDERS: &[&str] = &[
    "Select Date Range",
    "Select Scale",
    "Select Type",
];
const FAIL_TEXTS: &[&str] = &[
    "Failed to load date ranges.",
    "Failed to load scales.",
    "Failed to load types.",
];

// The date buckets are a product decision, not data
const DATE_RANGES: &[&str] = &["Last 3 Days", "Last 7 Days", "Last 14 Days"];

impl Flow for DatePostedFlow {
    fn kind(&self) -> FlowKind { DatePosted }
    fn title(&self) -> &'static str { "Date Posted" }

    fn dimensions(&self) -> &'static [&'static str] { DIMS }
    fn label(&self, dim_ix: usize) -> &'static str { LABELS[dim_ix] }
    fn placeholder(&self, dim_ix: usize) -> &'static str { PLACEHOLDERS[dim_ix] }
    fn fail_text(&self, dim_ix: usize) -> &'static str { FAIL_TEXTS[dim_ix] }

    fn fixed_options(&self, dim_ix: usize) -> Option<&'static [&'static str]> {
        (dim_ix == 0).then_some(DATE_RANGES)
    }
}

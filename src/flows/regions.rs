// src/flows/regions.rs
use crate::config::options::FlowKind::{ self, * };

use super::Flow;

pub struct RegionsFlow;
pub static FLOW: RegionsFlow = RegionsFlow;

// City_Town_Other is the field name in the source data; the page says "City".
const DIMS: &[&str] = &["State", "City_Town_Other", "Scale", "Type"];
const LABELS: &[&str] = &["State", "City", "Scale", "Type"];
const PLACEHOLDERS: &[&str] = &[
    "Select a State",
    "Select a City",
    "Select Scale",
    "Select Type",
];
const FAIL_TEXTS: &[&str] = &[
    "Failed to load states.",
    "Failed to load cities.",
    "Failed to load scales.",
    "Failed to load types.",
];

impl Flow for RegionsFlow {
    fn kind(&self) -> FlowKind { Regions }
    fn title(&self) -> &'static str { "Regions" }

    fn dimensions(&self) -> &'static [&'static str] { DIMS }
    fn label(&self, dim_ix: usize) -> &'static str { LABELS[dim_ix] }
    fn placeholder(&self, dim_ix: usize) -> &'static str { PLACEHOLDERS[dim_ix] }
    fn fail_text(&self, dim_ix: usize) -> &'static str { FAIL_TEXTS[dim_ix] }
}

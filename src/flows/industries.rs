// src/flows/industries.rs
use crate::config::options::FlowKind::{ self, * };

use super::Flow;

pub struct IndustriesFlow;
pub static FLOW: IndustriesFlow = IndustriesFlow;

const DIMS: &[&str] = &["Industry", "Subindustry", "Scale", "Type"];
const PLACEHOLDERS: &[&str] = &[
    "Select an Industry",
    "Select a Subindustry",
    "Select Scale",
    "Select Type",
];
const FAIL_TEXTS: &[&str] = &[
    "Failed to load industries.",
    "Failed to load subindustries.",
    "Failed to load scales.",
    "Failed to load types.",
];

impl Flow for IndustriesFlow {
    fn kind(&self) -> FlowKind { Industries }
    fn title(&self) -> &'static str { "Industries" }

    fn dimensions(&self) -> &'static [&'static str] { DIMS }
    fn label(&self, dim_ix: usize) -> &'static str { DIMS[dim_ix] }
    fn placeholder(&self, dim_ix: usize) -> &'static str { PLACEHOLDERS[dim_ix] }
    fn fail_text(&self, dim_ix: usize) -> &'static str { FAIL_TEXTS[dim_ix] }
}

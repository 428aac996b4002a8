// src/flows/mod.rs
//
// One Flow per cascade page. A Flow is pure description: the ordered
// dimension list, per-dimension UI text, and (for DatePosted) a fixed
// option list for a dimension whose values are not derived from data.
// The cascade controller and the sinks do the actual work.

use crate::config::options::FlowKind;

pub mod date_posted;
pub mod industries;
pub mod regions;

pub trait Flow: Send + Sync + 'static {
    fn kind(&self) -> FlowKind;
    fn title(&self) -> &'static str;

    /// Record field names, in cascade order.
    fn dimensions(&self) -> &'static [&'static str];

    /// Short UI label for a dimension (field names can be uglier than what
    /// the page shows, e.g. City_Town_Other -> "City").
    fn label(&self, dim_ix: usize) -> &'static str;

    /// Placeholder entry text for a dimension's selector.
    fn placeholder(&self, dim_ix: usize) -> &'static str;

    /// Message shown when the load feeding this dimension fails.
    fn fail_text(&self, dim_ix: usize) -> &'static str;

    /// Options for a dimension that are fixed rather than data-derived.
    fn fixed_options(&self, _dim_ix: usize) -> Option<&'static [&'static str]> {
        None
    }

    /// Failure message for the flow's initial dataset load: the first
    /// dimension whose options actually come from the data.
    fn entry_fail_text(&self) -> &'static str {
        let ix = (0..self.dimensions().len())
            .find(|&i| self.fixed_options(i).is_none())
            .unwrap_or(0);
        self.fail_text(ix)
    }
}

pub static FLOWS: &[&'static dyn Flow] = &[
    &regions::FLOW,
    &industries::FLOW,
    &date_posted::FLOW,
];

pub fn all_flows() -> &'static [&'static dyn Flow] {
    FLOWS
}

pub fn flow_for(kind: FlowKind) -> &'static dyn Flow {
    match kind {
        FlowKind::Regions    => &regions::FLOW,
        FlowKind::Industries => &industries::FLOW,
        FlowKind::DatePosted => &date_posted::FLOW,
    }
}

// src/cascade.rs
//
// The cascade controller: one small state machine per flow, shared by all
// three flows instead of three near-identical copies. It owns the
// FilterState, and talks to the outside world only through CascadeSink, so
// the GUI, the CLI and the tests all drive the exact same transitions.

use crate::core::filter::{distinct_sorted_values, filter_records};
use crate::data::{EmployerCard, FilterState, ResultsView};
use crate::flows::Flow;
use crate::store::DataSet;

/// Where a cascade currently stands. `Partial(i)` means dimensions 0..=i
/// hold values; `Complete` means every dimension does and results are shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Partial(usize),
    Complete,
}

/// Everything the controller can ask a frontend to do. Populating a
/// selector enables it; disabling clears it.
pub trait CascadeSink {
    fn populate_selector(&mut self, dim: &'static str, values: Vec<String>, placeholder: &'static str);
    fn enable_selector(&mut self, dim: &'static str);
    fn disable_selector(&mut self, dim: &'static str);

    fn clear_results(&mut self);
    fn render_results(&mut self, cards: Vec<EmployerCard>);
    fn render_no_results(&mut self);
    fn render_error(&mut self, message: &str);
}

pub struct Cascade {
    flow: &'static dyn Flow,
    state: FilterState,
}

impl Cascade {
    pub fn new(flow: &'static dyn Flow) -> Self {
        Self { flow, state: FilterState::new() }
    }

    pub fn flow(&self) -> &'static dyn Flow { self.flow }
    pub fn filter_state(&self) -> &FilterState { &self.state }

    pub fn stage(&self) -> Stage {
        let depth = self.state.len();
        if depth == 0 {
            Stage::Idle
        } else if depth == self.flow.dimensions().len() {
            Stage::Complete
        } else {
            Stage::Partial(depth - 1)
        }
    }

    /// Dataset is ready: drop any picks, disable everything downstream and
    /// populate the first selector.
    pub fn begin(&mut self, ds: &DataSet, sink: &mut dyn CascadeSink) {
        self.state = FilterState::new();
        let dims = self.flow.dimensions();
        for &d in &dims[1..] {
            sink.disable_selector(d);
        }
        sink.clear_results();
        self.populate(0, ds, sink);
    }

    /// The flow's dataset could not be loaded. Selectors stay disabled;
    /// already-made picks (none, at entry) are untouched.
    pub fn load_failed(&mut self, sink: &mut dyn CascadeSink) {
        self.state = FilterState::new();
        for &d in self.flow.dimensions() {
            sink.disable_selector(d);
        }
        sink.render_error(self.flow.entry_fail_text());
    }

    /// Dimension-change event: dimension `dim_ix` was set to `value`
    /// (None/empty = the placeholder, i.e. deselection). Returns false if the
    /// event is rejected because prerequisites 0..dim_ix are not all set;
    /// those selectors are disabled, but a frontend may still misfire.
    pub fn select(
        &mut self,
        dim_ix: usize,
        value: Option<&str>,
        ds: &DataSet,
        sink: &mut dyn CascadeSink,
    ) -> bool {
        let dims = self.flow.dimensions();
        if dim_ix >= dims.len() || dim_ix > self.state.len() {
            logd!("Cascade: rejected pick for {:?}[{}] at depth {}",
                self.flow.kind(), dim_ix, self.state.len());
            return false;
        }

        // Re-entering dimension i invalidates i and everything after it.
        self.state.truncate(dim_ix);
        for &d in &dims[dim_ix + 1..] {
            sink.disable_selector(d);
        }
        sink.clear_results();

        let Some(value) = value.filter(|v| !v.is_empty()) else {
            // Placeholder pick: back to Partial(dim_ix - 1) / Idle.
            return true;
        };
        self.state.push(dims[dim_ix], value);

        if dim_ix + 1 == dims.len() {
            self.render_final(ds, sink);
        } else {
            self.populate(dim_ix + 1, ds, sink);
        }
        true
    }

    fn populate(&self, dim_ix: usize, ds: &DataSet, sink: &mut dyn CascadeSink) {
        let dim = self.flow.dimensions()[dim_ix];
        let values = match self.flow.fixed_options(dim_ix) {
            Some(fixed) => fixed.iter().map(|v| s!(*v)).collect(),
            None => {
                let subset = filter_records(&ds.records, &self.state);
                distinct_sorted_values(subset, dim)
            }
        };
        sink.enable_selector(dim);
        sink.populate_selector(dim, values, self.flow.placeholder(dim_ix));
    }

    fn render_final(&self, ds: &DataSet, sink: &mut dyn CascadeSink) {
        let view = ResultsView::from_filter(&ds.records, &self.state);
        let cards = view.cards();
        if cards.is_empty() {
            // Covers both zero matches and matches with no employer name.
            sink.render_no_results();
        } else {
            sink.render_results(cards);
        }
    }
}

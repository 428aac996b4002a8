// src/gui/flow_view.rs
//
// Model-level sink for one flow. The cascade controller writes selector and
// results state here; the egui components only read it and report picks
// back. Keeping this egui-free lets the cascade tests run headless.

use crate::cascade::CascadeSink;
use crate::data::EmployerCard;
use crate::flows::Flow;

#[derive(Clone, Debug)]
pub struct SelectorModel {
    pub dim: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub enabled: bool,
    pub options: Vec<String>,
    /// Current pick; empty string = the placeholder row.
    pub selected: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ResultsModel {
    #[default]
    Empty,
    Cards(Vec<EmployerCard>),
    NoResults,
    Error(String),
}

pub struct FlowView {
    pub selectors: Vec<SelectorModel>,
    pub results: ResultsModel,
}

impl FlowView {
    pub fn new(flow: &'static dyn Flow) -> Self {
        let selectors = flow.dimensions().iter().enumerate()
            .map(|(i, &dim)| SelectorModel {
                dim,
                label: flow.label(i),
                placeholder: flow.placeholder(i),
                enabled: false,
                options: Vec::new(),
                selected: s!(),
            })
            .collect();
        Self { selectors, results: ResultsModel::Empty }
    }

    fn selector_mut(&mut self, dim: &str) -> Option<&mut SelectorModel> {
        self.selectors.iter_mut().find(|s| s.dim == dim)
    }
}

impl CascadeSink for FlowView {
    fn populate_selector(&mut self, dim: &'static str, values: Vec<String>, placeholder: &'static str) {
        if let Some(sel) = self.selector_mut(dim) {
            sel.options = values;
            sel.placeholder = placeholder;
            sel.selected.clear();
            sel.enabled = true;
        }
    }

    fn enable_selector(&mut self, dim: &'static str) {
        if let Some(sel) = self.selector_mut(dim) {
            sel.enabled = true;
        }
    }

    fn disable_selector(&mut self, dim: &'static str) {
        if let Some(sel) = self.selector_mut(dim) {
            sel.enabled = false;
            sel.options.clear();
            sel.selected.clear();
        }
    }

    fn clear_results(&mut self) {
        self.results = ResultsModel::Empty;
    }

    fn render_results(&mut self, cards: Vec<EmployerCard>) {
        self.results = ResultsModel::Cards(cards);
    }

    fn render_no_results(&mut self) {
        self.results = ResultsModel::NoResults;
    }

    fn render_error(&mut self, message: &str) {
        self.results = ResultsModel::Error(s!(message));
    }
}

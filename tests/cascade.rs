// tests/cascade.rs
//
// Cascade controller transitions, driven through a recording sink instead
// of the GUI. Covers downstream resets, deselection, rejected out-of-order
// picks, fixed first-dimension options and the final render stage.
//
use jobfinder::cascade::{Cascade, CascadeSink, Stage};
use jobfinder::config::options::FlowKind;
use jobfinder::data::{EmployerCard, Record};
use jobfinder::flows;
use jobfinder::store::DataSet;

#[derive(Default)]
struct RecordingSink {
    populated: Vec<(String, Vec<String>, String)>,
    disabled: Vec<String>,
    results: Option<Vec<EmployerCard>>,
    no_results: bool,
    error: Option<String>,
}

impl CascadeSink for RecordingSink {
    fn populate_selector(&mut self, dim: &'static str, values: Vec<String>, placeholder: &'static str) {
        self.populated.push((dim.to_string(), values, placeholder.to_string()));
    }
    fn enable_selector(&mut self, _dim: &'static str) {}
    fn disable_selector(&mut self, dim: &'static str) {
        self.disabled.push(dim.to_string());
    }
    fn clear_results(&mut self) {
        self.results = None;
        self.no_results = false;
        self.error = None;
    }
    fn render_results(&mut self, cards: Vec<EmployerCard>) {
        self.results = Some(cards);
    }
    fn render_no_results(&mut self) {
        self.no_results = true;
    }
    fn render_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }
}

impl RecordingSink {
    fn last_populated(&self) -> &(String, Vec<String>, String) {
        self.populated.last().expect("nothing populated")
    }
}

fn regions_dataset() -> DataSet {
    DataSet {
        records: vec![
            Record::from_pairs([
                ("State", "NY"), ("City_Town_Other", "Albany"),
                ("Scale", "Small"), ("Type", "Retail"),
                ("EmployerName", "Acme"), ("EmployerLink", "http://a"),
            ]),
            Record::from_pairs([
                ("State", "NY"), ("City_Town_Other", "Albany"),
                ("Scale", "Small"), ("Type", "Retail"),
                ("EmployerName", ""), ("EmployerLink", ""),
            ]),
            Record::from_pairs([
                ("State", "CA"), ("City_Town_Other", "Fresno"),
                ("Scale", "Large"), ("Type", "Food"),
                ("EmployerName", "Bolt"), ("EmployerLink", ""),
            ]),
        ],
    }
}

#[test]
fn begin_populates_first_dimension_only() {
    let ds = regions_dataset();
    let mut sink = RecordingSink::default();
    let mut cascade = Cascade::new(flows::flow_for(FlowKind::Regions));

    cascade.begin(&ds, &mut sink);

    assert_eq!(cascade.stage(), Stage::Idle);
    let (dim, values, placeholder) = sink.last_populated();
    assert_eq!(dim, "State");
    assert_eq!(values, &vec!["CA".to_string(), "NY".to_string()]);
    assert_eq!(placeholder, "Select a State");
    // Downstream selectors are disabled, not merely empty
    for d in ["City_Town_Other", "Scale", "Type"] {
        assert!(sink.disabled.iter().any(|x| x == d), "{d} not disabled");
    }
}

#[test]
fn full_cascade_renders_acme_card_only() {
    let ds = regions_dataset();
    let mut sink = RecordingSink::default();
    let mut cascade = Cascade::new(flows::flow_for(FlowKind::Regions));
    cascade.begin(&ds, &mut sink);

    assert!(cascade.select(0, Some("NY"), &ds, &mut sink));
    assert_eq!(cascade.stage(), Stage::Partial(0));
    assert_eq!(sink.last_populated().0, "City_Town_Other");
    assert_eq!(sink.last_populated().1, vec!["Albany".to_string()]);

    assert!(cascade.select(1, Some("Albany"), &ds, &mut sink));
    assert!(cascade.select(2, Some("Small"), &ds, &mut sink));
    assert_eq!(cascade.stage(), Stage::Partial(2));

    assert!(cascade.select(3, Some("Retail"), &ds, &mut sink));
    assert_eq!(cascade.stage(), Stage::Complete);

    // The empty-name record is excluded; Acme renders linked.
    let cards = sink.results.as_ref().expect("results rendered");
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "Acme");
    assert_eq!(cards[0].link.as_deref(), Some("http://a"));
    assert!(!sink.no_results);
}

#[test]
fn upstream_change_clears_all_downstream_state() {
    let ds = regions_dataset();
    let mut sink = RecordingSink::default();
    let mut cascade = Cascade::new(flows::flow_for(FlowKind::Regions));
    cascade.begin(&ds, &mut sink);
    for (i, v) in [(0, "NY"), (1, "Albany"), (2, "Small"), (3, "Retail")] {
        assert!(cascade.select(i, Some(v), &ds, &mut sink));
    }
    assert_eq!(cascade.stage(), Stage::Complete);

    // Re-enter dimension 0 with a different value.
    sink.disabled.clear();
    assert!(cascade.select(0, Some("CA"), &ds, &mut sink));

    assert_eq!(cascade.stage(), Stage::Partial(0));
    assert_eq!(cascade.filter_state().picks(), &[("State".to_string(), "CA".to_string())]);
    for d in ["City_Town_Other", "Scale", "Type"] {
        assert!(sink.disabled.iter().any(|x| x == d), "{d} not reset");
    }
    // Results cleared, next dimension repopulated from the new prefix.
    assert!(sink.results.is_none());
    assert_eq!(sink.last_populated().1, vec!["Fresno".to_string()]);
}

#[test]
fn placeholder_pick_deselects_dimension_and_downstream() {
    let ds = regions_dataset();
    let mut sink = RecordingSink::default();
    let mut cascade = Cascade::new(flows::flow_for(FlowKind::Regions));
    cascade.begin(&ds, &mut sink);
    assert!(cascade.select(0, Some("NY"), &ds, &mut sink));
    assert!(cascade.select(1, Some("Albany"), &ds, &mut sink));

    // Back to the placeholder on dimension 1.
    assert!(cascade.select(1, None, &ds, &mut sink));
    assert_eq!(cascade.stage(), Stage::Partial(0));
    assert_eq!(cascade.filter_state().len(), 1);

    // And on dimension 0: fully idle again.
    assert!(cascade.select(0, Some(""), &ds, &mut sink));
    assert_eq!(cascade.stage(), Stage::Idle);
}

#[test]
fn out_of_order_pick_is_rejected() {
    let ds = regions_dataset();
    let mut sink = RecordingSink::default();
    let mut cascade = Cascade::new(flows::flow_for(FlowKind::Regions));
    cascade.begin(&ds, &mut sink);

    // Scale before State/City: prerequisites unset.
    assert!(!cascade.select(2, Some("Small"), &ds, &mut sink));
    assert_eq!(cascade.stage(), Stage::Idle);
    assert!(cascade.filter_state().is_empty());
}

#[test]
fn date_posted_first_dimension_uses_fixed_options() {
    let ds = DataSet {
        records: vec![Record::from_pairs([
            ("DatePosted", "Last 3 Days"), ("Scale", "Small"), ("Type", "Retail"),
            ("EmployerName", "Acme"), ("EmployerLink", ""),
        ])],
    };
    let mut sink = RecordingSink::default();
    let mut cascade = Cascade::new(flows::flow_for(FlowKind::DatePosted));
    cascade.begin(&ds, &mut sink);

    let (dim, values, placeholder) = sink.last_populated();
    assert_eq!(dim, "DatePosted");
    // Fixed list, fixed order — not data-derived, not sorted.
    assert_eq!(values, &vec![
        "Last 3 Days".to_string(),
        "Last 7 Days".to_string(),
        "Last 14 Days".to_string(),
    ]);
    assert_eq!(placeholder, "Select Date Range");
}

#[test]
fn empty_dataset_renders_no_results_at_final_stage() {
    let ds = DataSet { records: Vec::new() };
    let mut sink = RecordingSink::default();
    let mut cascade = Cascade::new(flows::flow_for(FlowKind::Regions));
    cascade.begin(&ds, &mut sink);

    for (i, v) in [(0, "NY"), (1, "Albany"), (2, "Small"), (3, "Retail")] {
        assert!(cascade.select(i, Some(v), &ds, &mut sink));
    }
    assert!(sink.no_results);
    assert!(sink.results.is_none());
}

#[test]
fn matches_without_employer_names_render_no_results() {
    let ds = DataSet {
        records: vec![Record::from_pairs([
            ("State", "NY"), ("City_Town_Other", "Albany"),
            ("Scale", "Small"), ("Type", "Retail"),
            ("EmployerName", ""),
        ])],
    };
    let mut sink = RecordingSink::default();
    let mut cascade = Cascade::new(flows::flow_for(FlowKind::Regions));
    cascade.begin(&ds, &mut sink);
    for (i, v) in [(0, "NY"), (1, "Albany"), (2, "Small"), (3, "Retail")] {
        assert!(cascade.select(i, Some(v), &ds, &mut sink));
    }
    assert!(sink.no_results);
}

#[test]
fn load_failure_disables_selectors_and_reports_per_flow_message() {
    let mut sink = RecordingSink::default();
    let mut cascade = Cascade::new(flows::flow_for(FlowKind::Regions));

    cascade.load_failed(&mut sink);

    assert_eq!(sink.error.as_deref(), Some("Failed to load states."));
    assert!(sink.populated.is_empty());
    for d in ["State", "City_Town_Other", "Scale", "Type"] {
        assert!(sink.disabled.iter().any(|x| x == d), "{d} not disabled");
    }

    // DatePosted's first data-derived dimension is Scale.
    let mut sink = RecordingSink::default();
    let mut cascade = Cascade::new(flows::flow_for(FlowKind::DatePosted));
    cascade.load_failed(&mut sink);
    assert_eq!(sink.error.as_deref(), Some("Failed to load scales."));
}

// tests/load_tracker.rs
//
// Stale-load guard: a completion is applied only while its (flow, ticket)
// pair is still the pending load.
//
use jobfinder::config::options::FlowKind;
use jobfinder::fetch::LoadTracker;

#[test]
fn matching_ticket_is_accepted_once() {
    let mut loads = LoadTracker::new();
    let t = loads.begin(FlowKind::Regions);

    assert!(loads.in_flight(FlowKind::Regions));
    assert!(loads.accept(FlowKind::Regions, t));
    // Already consumed
    assert!(!loads.accept(FlowKind::Regions, t));
    assert!(!loads.in_flight(FlowKind::Regions));
}

#[test]
fn superseded_ticket_is_discarded() {
    let mut loads = LoadTracker::new();

    // User kicks off Regions, then navigates to Industries before it lands.
    let stale = loads.begin(FlowKind::Regions);
    let fresh = loads.begin(FlowKind::Industries);

    // The slow Regions completion must not be applied...
    assert!(!loads.accept(FlowKind::Regions, stale));
    // ...and must not eat the fresh one either.
    assert!(loads.accept(FlowKind::Industries, fresh));
}

#[test]
fn wrong_flow_with_right_ticket_is_discarded() {
    let mut loads = LoadTracker::new();
    let t = loads.begin(FlowKind::Regions);
    assert!(!loads.accept(FlowKind::DatePosted, t));
    // Pending load is untouched by the bogus completion
    assert!(loads.accept(FlowKind::Regions, t));
}

use crate::view::flow::{FlowOptions, RenderMode};

/// **VALUE**: Pins the behavioral differences between the two views' flows.
///
/// **BUG THIS CATCHES**: Would catch a preset edit that, for example, adds the probe to
/// the secondary view or drops the loading guard from the primary view.
#[test]
fn given_view_presets_then_primary_probes_and_guards_while_secondary_does_neither() {
    let primary = FlowOptions::PRIMARY;
    let secondary = FlowOptions::SECONDARY;

    assert!(primary.probe_before_send);
    assert!(primary.guard_while_loading);
    assert!(!primary.reject_blank_query);
    assert_eq!(primary.render, RenderMode::ResultsPanel);

    assert!(!secondary.probe_before_send);
    assert!(!secondary.guard_while_loading);
    assert!(secondary.reject_blank_query);
    assert_eq!(secondary.render, RenderMode::InlineResponse);
}

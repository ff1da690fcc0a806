// ZeroDecay - tests/e2e_monitoring.rs
//
// End-to-end tests for the Monitoring pipeline: sample cards -> search
// filter -> preferred sizes -> flow arrangement, through the public library
// API and the same `AppState` the GUI drives. Label sizes are synthesised
// from the name length since font metrics need a live egui context.

use zerodecay::app::state::AppState;
use zerodecay::core::actions::CardAction;
use zerodecay::core::filter::filter_visibility;
use zerodecay::core::flow::{arrange, measure_height, ArrangeMode, FlowBounds, FlowSpacing};
use zerodecay::core::model::{Card, Point, Size};
use zerodecay::core::sizing::{preferred_size, CardMetrics};
use zerodecay::platform::config::AppConfig;

// =============================================================================
// Helpers
// =============================================================================

fn state() -> AppState {
    AppState::new(AppConfig::default(), "config.toml".into(), false)
}

/// Rough label size: 7pt per character, wrapped at the card's wrap width.
fn label_size(name: &str, metrics: &CardMetrics) -> Size {
    let natural = name.chars().count() as f32 * 7.0;
    let wrap = metrics.label_wrap_width();
    let lines = (natural / wrap).ceil().max(1.0);
    Size::new(natural.min(wrap), lines * 16.0)
}

fn sizes(cards: &[Card], metrics: &CardMetrics) -> Vec<Size> {
    cards
        .iter()
        .map(|c| preferred_size(c.copy_count(), label_size(&c.name, metrics), metrics, true))
        .collect()
}

fn bounds(width: f32) -> FlowBounds {
    FlowBounds::new(Point::new(10.0, 10.0), width)
}

// =============================================================================
// Pipeline
// =============================================================================

#[test]
fn e2e_every_sample_card_gets_a_slot_in_bounds() {
    let s = state();
    let metrics = CardMetrics::default();
    let sizes = sizes(&s.cards, &metrics);

    for size in &sizes {
        assert!((metrics.min_width..=metrics.max_width).contains(&size.width));
    }

    let width = 980.0;
    let result = arrange(
        &s.flow_items(&sizes),
        bounds(width),
        FlowSpacing::uniform(10.0),
        ArrangeMode::Place,
    );
    assert_eq!(result.positions.len(), 24);
    for (index, pos) in &result.positions {
        assert!(pos.x >= 10.0);
        assert!(pos.x + sizes[*index].width <= 10.0 + width, "card {index} overflows");
    }
}

#[test]
fn e2e_search_shrinks_layout() {
    let mut s = state();
    let metrics = CardMetrics::default();
    let sizes = sizes(&s.cards, &metrics);
    let spacing = FlowSpacing::uniform(10.0);

    let all = measure_height(&s.flow_items(&sizes), bounds(600.0), spacing);
    s.set_search(r"\.bak$");
    let filtered = arrange(&s.flow_items(&sizes), bounds(600.0), spacing, ArrangeMode::Place);

    assert_eq!(filtered.positions.len(), 3);
    assert!(filtered.total_height < all);
    // The first visible card starts at the content origin, as if the
    // hidden ones were never there.
    assert_eq!(filtered.positions[0].1, Point::new(10.0, 10.0));
}

#[test]
fn e2e_hidden_cards_match_removed_cards() {
    let mut s = state();
    let metrics = CardMetrics::default();
    let sizes = sizes(&s.cards, &metrics);
    let spacing = FlowSpacing::uniform(10.0);

    s.set_search("report|backup");
    let with_hidden = arrange(&s.flow_items(&sizes), bounds(720.0), spacing, ArrangeMode::Place);

    let kept: Vec<_> = s
        .flow_items(&sizes)
        .into_iter()
        .filter(|item| item.visible)
        .collect();
    let compacted = arrange(&kept, bounds(720.0), spacing, ArrangeMode::Place);

    assert_eq!(with_hidden, compacted);
}

#[test]
fn e2e_invalid_pattern_hides_everything_without_error() {
    let cards = vec![
        Card::new("backup_set_alpha.bak", vec![true, true]),
        Card::new("John.json", vec![true; 8]),
    ];
    assert_eq!(filter_visibility("*.bak", &cards), vec![false, false]);

    let mut s = state();
    s.set_search("*.bak");
    assert_eq!(s.visible_count(), 0);
    s.set_search("");
    assert_eq!(s.visible_count(), 24);
}

#[test]
fn e2e_narrow_window_stacks_cards() {
    let s = state();
    let metrics = CardMetrics::default();
    let sizes = sizes(&s.cards, &metrics);

    // Narrower than any card: one card per row, all at the left edge.
    let result = arrange(
        &s.flow_items(&sizes),
        bounds(100.0),
        FlowSpacing::uniform(10.0),
        ArrangeMode::Place,
    );
    let expected_height: f32 = sizes.iter().map(|s| s.height).sum::<f32>() + 23.0 * 10.0;
    assert!(result.positions.iter().all(|(_, p)| p.x == 10.0));
    assert_eq!(result.total_height, expected_height);
}

#[test]
fn e2e_action_reports_file_name() {
    let mut s = state();
    let message = s.handle_action(0, CardAction::Verify);
    assert_eq!(message.as_deref(), Some("Verify clicked for John.json"));
}

// ZeroDecay - app/state.rs
//
// Application state. Holds the card list, per-card visibility, the search
// filter, the Log tab buffer, and the runtime view settings.
// Owned by the eframe::App implementation; mutated only on the UI thread.

use std::collections::VecDeque;
use std::path::PathBuf;

use crate::core::actions::CardAction;
use crate::core::filter::CardFilter;
use crate::core::flow::FlowItem;
use crate::core::model::{Card, Size};
use crate::core::sample;
use crate::platform::config::AppConfig;

/// Top-level tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Monitoring,
    Settings,
    Log,
    ImportAbout,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Self::Monitoring, Self::Settings, Self::Log, Self::ImportAbout];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Monitoring => "Monitoring",
            Self::Settings => "Settings",
            Self::Log => "Log",
            Self::ImportAbout => "Import / About",
        }
    }
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Cards in display order.
    pub cards: Vec<Card>,

    /// Visibility of each card, index-aligned with `cards`.
    pub visible: Vec<bool>,

    /// Search box contents.
    pub search_text: String,

    /// Filter compiled from `search_text`.
    pub filter: CardFilter,

    /// Currently selected tab.
    pub active_tab: Tab,

    /// Effective configuration. The Settings tab edits it in memory only.
    pub config: AppConfig,

    /// Where config.toml is (or would be) read from.
    pub config_path: PathBuf,

    /// Lines shown on the Log tab, oldest first.
    pub log_lines: VecDeque<String>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state with the sample cards loaded and all visible.
    pub fn new(config: AppConfig, config_path: PathBuf, debug_mode: bool) -> Self {
        let mut state = Self {
            cards: Vec::new(),
            visible: Vec::new(),
            search_text: String::new(),
            filter: CardFilter::default(),
            active_tab: Tab::default(),
            config,
            config_path,
            log_lines: VecDeque::new(),
            status_message: "Ready.".to_string(),
            debug_mode,
        };
        state.reload_cards();
        state
    }

    /// Replace the card list with a fresh copy of the sample data and
    /// re-apply the current search.
    pub fn reload_cards(&mut self) {
        self.cards = sample::sample_cards();
        self.apply_filter();
        tracing::info!(cards = self.cards.len(), "Card list loaded");
    }

    /// Set the search text and refilter.
    pub fn set_search(&mut self, text: &str) {
        self.search_text = text.to_string();
        self.apply_filter();
    }

    /// Recompile `search_text` and recompute every card's visibility.
    pub fn apply_filter(&mut self) {
        self.filter = CardFilter::new(&self.search_text);
        self.visible = self.filter.visibility(&self.cards);
        tracing::debug!(
            pattern = self.filter.pattern(),
            literal = self.filter.is_literal(),
            visible = self.visible_count(),
            "Filter applied"
        );
    }

    /// Number of cards currently visible.
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    /// Pair each card with its preferred size and visibility for arrangement.
    ///
    /// `sizes` must be index-aligned with `cards`.
    pub fn flow_items(&self, sizes: &[Size]) -> Vec<FlowItem<usize>> {
        sizes
            .iter()
            .zip(&self.visible)
            .enumerate()
            .map(|(index, (size, visible))| FlowItem {
                id: index,
                size: *size,
                visible: *visible,
            })
            .collect()
    }

    /// Run `action` on card `index`.
    ///
    /// Actions are placeholders: the only effect is a log line and a status
    /// message. Returns the message, or None for an unknown index.
    pub fn handle_action(&mut self, index: usize, action: CardAction) -> Option<String> {
        let card = self.cards.get(index)?;
        let message = action.message(&card.name);
        tracing::info!("{}", message);
        self.status_message = message.clone();
        Some(message)
    }

    /// Append one line to the Log tab, dropping the oldest past the limit.
    pub fn append_line(&mut self, line: impl Into<String>) {
        self.log_lines.push_back(line.into());
        while self.log_lines.len() > self.config.log_max_lines {
            self.log_lines.pop_front();
        }
    }

    /// Empty the Log tab.
    pub fn clear_log(&mut self) {
        self.log_lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(AppConfig::default(), PathBuf::from("config.toml"), false)
    }

    #[test]
    fn test_new_loads_all_cards_visible() {
        let s = state();
        assert_eq!(s.cards.len(), 24);
        assert_eq!(s.visible_count(), 24);
        assert_eq!(s.active_tab, Tab::Monitoring);
    }

    #[test]
    fn test_search_hides_non_matching() {
        let mut s = state();
        s.set_search(r"\.bak$");
        assert_eq!(s.visible_count(), 3);
        for (card, visible) in s.cards.iter().zip(&s.visible) {
            assert_eq!(*visible, card.name.ends_with(".bak"), "{}", card.name);
        }
    }

    #[test]
    fn test_clearing_search_restores_all() {
        let mut s = state();
        s.set_search("*.bak");
        assert!(s.filter.is_literal());
        assert_eq!(s.visible_count(), 0);
        s.set_search("");
        assert_eq!(s.visible_count(), 24);
    }

    #[test]
    fn test_reload_keeps_search() {
        let mut s = state();
        s.set_search("backup");
        let before = s.visible.clone();
        s.cards.truncate(3);
        s.reload_cards();
        assert_eq!(s.cards.len(), 24);
        assert_eq!(s.visible, before);
    }

    #[test]
    fn test_flow_items_carry_visibility() {
        let mut s = state();
        s.set_search("^cat");
        let sizes = vec![Size::new(180.0, 100.0); s.cards.len()];
        let items = s.flow_items(&sizes);
        assert_eq!(items.len(), 24);
        assert_eq!(items.iter().filter(|i| i.visible).count(), 1);
        assert!(items[1].visible);
        assert_eq!(items[1].id, 1);
    }

    #[test]
    fn test_handle_action_sets_status() {
        let mut s = state();
        let msg = s.handle_action(1, CardAction::Export);
        assert_eq!(msg.as_deref(), Some("Export clicked for cat.jpg"));
        assert_eq!(s.status_message, "Export clicked for cat.jpg");
        assert_eq!(s.handle_action(999, CardAction::Delete), None);
    }

    #[test]
    fn test_append_line_is_bounded() {
        let mut s = state();
        s.config.log_max_lines = 3;
        for i in 0..5 {
            s.append_line(format!("line {i}"));
        }
        assert_eq!(
            s.log_lines.iter().cloned().collect::<Vec<_>>(),
            vec!["line 2", "line 3", "line 4"]
        );
        s.clear_log();
        assert!(s.log_lines.is_empty());
    }

    #[test]
    fn test_tab_order() {
        let labels: Vec<_> = Tab::ALL.iter().map(Tab::label).collect();
        assert_eq!(labels, vec!["Monitoring", "Settings", "Log", "Import / About"]);
    }
}

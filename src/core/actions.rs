// ZeroDecay - core/actions.rs
//
// Per-card actions. None of them touch the file system yet; invoking one
// only produces a message naming the action and the file.

/// An action offered on every card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardAction {
    Delete,
    Export,
    Scale,
    Verify,
}

impl CardAction {
    /// Button order, left to right.
    pub const ALL: [CardAction; 4] = [Self::Delete, Self::Export, Self::Scale, Self::Verify];

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Delete => "Delete",
            Self::Export => "Export",
            Self::Scale => "Scale",
            Self::Verify => "Verify",
        }
    }

    /// Single-glyph button caption.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Delete => "X",
            Self::Export => "\u{2193}",
            Self::Scale => "S",
            Self::Verify => "V",
        }
    }

    /// Message emitted when the action is invoked on `file_name`.
    pub fn message(&self, file_name: &str) -> String {
        format!("{} clicked for {file_name}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_action_and_file() {
        assert_eq!(
            CardAction::Verify.message("cat.jpg"),
            "Verify clicked for cat.jpg"
        );
        assert_eq!(
            CardAction::Delete.message("John.json"),
            "Delete clicked for John.json"
        );
    }

    #[test]
    fn test_all_in_button_order() {
        let glyphs: Vec<_> = CardAction::ALL.iter().map(CardAction::glyph).collect();
        assert_eq!(glyphs, vec!["X", "\u{2193}", "S", "V"]);
    }
}

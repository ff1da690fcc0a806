// ZeroDecay - core/model.rs
//
// Core data types shared by the sizing, flow, and filter modules.

/// A width/height pair in UI points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A position in UI points, relative to whatever origin the caller chose.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One monitored file and the health of each of its redundant copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// File name shown as the card label; also what the search box matches.
    pub name: String,

    /// One flag per redundant copy, in copy order. `true` = healthy.
    pub copies: Vec<bool>,
}

impl Card {
    pub fn new(name: impl Into<String>, copies: impl Into<Vec<bool>>) -> Self {
        Self {
            name: name.into(),
            copies: copies.into(),
        }
    }

    /// Number of redundant copies tracked for this file.
    pub fn copy_count(&self) -> usize {
        self.copies.len()
    }

    /// Number of copies currently flagged unhealthy.
    pub fn unhealthy_count(&self) -> usize {
        self.copies.iter().filter(|healthy| !**healthy).count()
    }

    /// True when every copy is healthy (vacuously true with no copies).
    pub fn is_fully_healthy(&self) -> bool {
        self.unhealthy_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_counts() {
        let card = Card::new("cat.jpg", [true, true, false, false, true]);
        assert_eq!(card.copy_count(), 5);
        assert_eq!(card.unhealthy_count(), 2);
        assert!(!card.is_fully_healthy());
    }

    #[test]
    fn test_card_without_copies_is_healthy() {
        let card = Card::new("empty.bin", Vec::new());
        assert_eq!(card.copy_count(), 0);
        assert!(card.is_fully_healthy());
    }
}

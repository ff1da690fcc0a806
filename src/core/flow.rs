// ZeroDecay - core/flow.rs
//
// Flow arrangement: places variable-sized items left to right and wraps to a
// new row when the next item would cross the right edge.
//
// Single greedy pass, input order preserved. A row always takes at least one
// item, so an item wider than the container sits alone on its own row.
// Pure function of its inputs; the UI calls it whenever geometry may have
// changed.

use crate::core::model::{Point, Size};

/// One item to arrange.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowItem<K> {
    pub id: K,
    pub size: Size,
    /// Hidden items occupy no space.
    pub visible: bool,
}

impl<K> FlowItem<K> {
    pub fn new(id: K, size: Size) -> Self {
        Self {
            id,
            size,
            visible: true,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// Content area the items flow into. Height is unbounded (scrolling).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowBounds {
    pub origin: Point,
    pub width: f32,
}

impl FlowBounds {
    pub fn new(origin: Point, width: f32) -> Self {
        Self { origin, width }
    }

    fn right(&self) -> f32 {
        self.origin.x + self.width
    }
}

/// Gaps between neighbouring items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowSpacing {
    pub horizontal: f32,
    pub vertical: f32,
}

impl FlowSpacing {
    pub fn uniform(gap: f32) -> Self {
        Self {
            horizontal: gap,
            vertical: gap,
        }
    }
}

/// Whether a pass records positions or only measures the height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrangeMode {
    Place,
    Measure,
}

/// Result of one arrangement pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrangement<K> {
    /// Top-left corner of every visible item, in input order.
    /// Empty in `ArrangeMode::Measure`.
    pub positions: Vec<(K, Point)>,

    /// Height consumed from `origin.y` to the bottom of the last row.
    pub total_height: f32,
}

impl<K: PartialEq> Arrangement<K> {
    /// Position assigned to `id`, if it was placed.
    pub fn position_of(&self, id: &K) -> Option<Point> {
        self.positions
            .iter()
            .find(|(k, _)| k == id)
            .map(|(_, p)| *p)
    }
}

/// Arrange `items` into rows inside `bounds`.
pub fn arrange<K: Copy>(
    items: &[FlowItem<K>],
    bounds: FlowBounds,
    spacing: FlowSpacing,
    mode: ArrangeMode,
) -> Arrangement<K> {
    let mut positions = Vec::new();
    let mut x = bounds.origin.x;
    let mut y = bounds.origin.y;
    let mut line_height: f32 = 0.0;

    for item in items.iter().filter(|item| item.visible) {
        let mut next_x = x + item.size.width + spacing.horizontal;
        if next_x - spacing.horizontal > bounds.right() && line_height > 0.0 {
            x = bounds.origin.x;
            y += line_height + spacing.vertical;
            next_x = x + item.size.width + spacing.horizontal;
            line_height = 0.0;
        }

        if mode == ArrangeMode::Place {
            positions.push((item.id, Point::new(x, y)));
        }

        x = next_x;
        line_height = line_height.max(item.size.height);
    }

    Arrangement {
        positions,
        total_height: y + line_height - bounds.origin.y,
    }
}

/// Height the items would need at the given width, without placing them.
pub fn measure_height<K: Copy>(items: &[FlowItem<K>], bounds: FlowBounds, spacing: FlowSpacing) -> f32 {
    arrange(items, bounds, spacing, ArrangeMode::Measure).total_height
}

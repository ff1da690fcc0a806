// ZeroDecay - core/sizing.rs
//
// Preferred card size. A card stacks, top to bottom: the wrapped file name,
// a grid of health squares (at most five per row), and optionally a row of
// action buttons, all inside a uniform margin.
//
// The label is measured by the caller (font metrics live in the UI layer);
// everything else is derived from `CardMetrics`.

use crate::core::model::Size;
use crate::util::constants;

/// Fixed geometry of a card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardMetrics {
    pub square_size: f32,
    pub square_spacing: f32,
    pub squares_per_row: usize,
    pub margin: f32,
    pub item_spacing: f32,
    pub button_size: f32,
    pub button_spacing: f32,
    pub button_count: usize,
    pub min_width: f32,
    pub max_width: f32,
}

impl Default for CardMetrics {
    fn default() -> Self {
        Self {
            square_size: constants::SQUARE_SIZE,
            square_spacing: constants::SQUARE_SPACING,
            squares_per_row: constants::MAX_SQUARES_PER_ROW,
            margin: constants::CARD_MARGIN,
            item_spacing: constants::CARD_ITEM_SPACING,
            button_size: constants::BUTTON_SIZE,
            button_spacing: constants::BUTTON_SPACING,
            button_count: crate::core::actions::CardAction::ALL.len(),
            min_width: constants::CARD_MIN_WIDTH,
            max_width: constants::CARD_MAX_WIDTH,
        }
    }
}

impl CardMetrics {
    /// Rows needed for `count` squares.
    pub fn square_rows(&self, count: usize) -> usize {
        count.div_ceil(self.squares_per_row)
    }

    /// Size of the squares grid for `count` squares (zero when empty).
    pub fn squares_area(&self, count: usize) -> Size {
        if count == 0 {
            return Size::ZERO;
        }
        let cols = count.min(self.squares_per_row);
        let rows = self.square_rows(count);
        Size::new(
            span(cols, self.square_size, self.square_spacing),
            span(rows, self.square_size, self.square_spacing),
        )
    }

    /// Size of the action button row.
    pub fn buttons_area(&self) -> Size {
        Size::new(
            span(self.button_count, self.button_size, self.button_spacing),
            self.button_size,
        )
    }

    /// Narrowest card that still fits one full row of squares.
    pub fn min_width_for_squares(&self) -> f32 {
        span(self.squares_per_row, self.square_size, self.square_spacing) + 2.0 * self.margin
    }

    /// Width at which the UI should wrap card labels.
    pub fn label_wrap_width(&self) -> f32 {
        self.max_width - 2.0 * self.margin
    }

    /// Top-left offset of square `index` within the squares grid.
    pub fn square_offset(&self, index: usize) -> (f32, f32) {
        let (row, col) = square_cell(index, self.squares_per_row);
        let step = self.square_size + self.square_spacing;
        (col as f32 * step, row as f32 * step)
    }
}

/// `n` equal cells of `cell` separated by `gap`.
fn span(n: usize, cell: f32, gap: f32) -> f32 {
    if n == 0 {
        0.0
    } else {
        n as f32 * (cell + gap) - gap
    }
}

/// Grid cell `(row, col)` of square `index`, filling rows left to right.
pub fn square_cell(index: usize, per_row: usize) -> (usize, usize) {
    (index / per_row, index % per_row)
}

/// Preferred size of a card with `copy_count` squares and a measured label.
pub fn preferred_size(
    copy_count: usize,
    label: Size,
    metrics: &CardMetrics,
    with_buttons: bool,
) -> Size {
    let squares = metrics.squares_area(copy_count);

    let mut width = label.width.max(squares.width);
    let mut height = label.height + metrics.item_spacing + squares.height;

    if with_buttons {
        let buttons = metrics.buttons_area();
        width = width.max(buttons.width);
        height += buttons.height + metrics.item_spacing;
    }

    width += 2.0 * metrics.margin;
    height += 2.0 * metrics.margin;

    let width = width
        .min(metrics.max_width)
        .max(metrics.min_width)
        .max(metrics.min_width_for_squares());

    Size::new(width, height)
}

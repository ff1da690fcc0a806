// ZeroDecay - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ZeroDecay";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "ZeroDecay";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Window
// =============================================================================

/// Initial inner window size.
pub const WINDOW_SIZE: [f32; 2] = [1000.0, 750.0];

/// Smallest inner window size the viewport may be resized to.
pub const WINDOW_MIN_SIZE: [f32; 2] = [600.0, 400.0];

// =============================================================================
// Card metrics
// =============================================================================

/// Edge length of one health square.
pub const SQUARE_SIZE: f32 = 25.0;

/// Gap between neighbouring health squares (both axes).
pub const SQUARE_SPACING: f32 = 4.0;

/// Maximum number of health squares in one row of a card.
pub const MAX_SQUARES_PER_ROW: usize = 5;

/// Inner margin of a card, applied on every side.
pub const CARD_MARGIN: f32 = 8.0;

/// Vertical gap between the label, squares grid, and button row of a card.
pub const CARD_ITEM_SPACING: f32 = 6.0;

/// Edge length of one action button.
pub const BUTTON_SIZE: f32 = 25.0;

/// Gap between neighbouring action buttons.
pub const BUTTON_SPACING: f32 = 5.0;

/// Narrowest preferred card width.
pub const CARD_MIN_WIDTH: f32 = 180.0;

/// Widest preferred card width (labels wrap beyond this).
pub const CARD_MAX_WIDTH: f32 = 350.0;

// =============================================================================
// Monitoring panel
// =============================================================================

/// Default gap between cards, both horizontally and vertically.
pub const DEFAULT_CARD_SPACING: f32 = 10.0;

/// Default margin between the scroll area edge and the card flow.
pub const DEFAULT_PANEL_MARGIN: f32 = 10.0;

/// Upper bound for configured card spacing and panel margin.
pub const MAX_LAYOUT_GAP: f32 = 64.0;

/// Placeholder text of the search box.
pub const SEARCH_HINT: &str = "Search files (regex supported)...";

// =============================================================================
// Log panel
// =============================================================================

/// Default number of lines retained by the log tab.
pub const DEFAULT_LOG_MAX_LINES: usize = 5_000;

/// Smallest accepted `[log] max_lines`.
pub const MIN_LOG_MAX_LINES: usize = 100;

/// Largest accepted `[log] max_lines`.
pub const ABSOLUTE_MAX_LOG_LINES: usize = 100_000;

/// Interval between log channel polls while the window is idle.
pub const LOG_POLL_INTERVAL_MS: u64 = 250;

/// Timestamp format of lines shown in the log tab.
pub const LOG_LINE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

// =============================================================================
// Logging
// =============================================================================

/// Console log level when nothing else is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

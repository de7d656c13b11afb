// ipscmon - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "ipscmon";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "ipscmon";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Loader limits
// =============================================================================

/// Preamble lines skipped before the header row. The inventory exports
/// carry a three-line title block above the column headers.
pub const DEFAULT_SKIP_ROWS: usize = 3;

/// Hard upper bound on configurable preamble skipping.
pub const MAX_SKIP_ROWS: usize = 100;

/// Default maximum number of inventory rows accepted per load.
pub const DEFAULT_MAX_ROWS: usize = 10_000;

/// Hard upper bound on the row cap (prevents configuration mistakes).
pub const ABSOLUTE_MAX_ROWS: usize = 1_000_000;

/// Required column headers in the inventory source.
pub const COLUMN_ID: &str = "ID";
pub const COLUMN_SITE: &str = "Cerro";
pub const COLUMN_ALIAS: &str = "Alias";
pub const COLUMN_IP: &str = "IP Ethernet";
pub const COLUMN_LINK_TYPE: &str = "Tipo Vinculo";

/// Optional pass-through column headers.
pub const COLUMN_RX: &str = "RX (MHz)";
pub const COLUMN_TX: &str = "TX (MHz)";
pub const COLUMN_UDP: &str = "Puerto UDP";

// =============================================================================
// Filter limits
// =============================================================================

/// Maximum regex pattern length to prevent ReDoS.
pub const MAX_REGEX_PATTERN_LENGTH: usize = 4_096;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Default IPSC gateway address shown on the KPI strip. Overridable via
/// the `[ui] gateway` config key; purely informational.
pub const DEFAULT_GATEWAY: &str = "10.70.140.1";

/// Number of records above which an export warning is displayed.
pub const DEFAULT_LARGE_EXPORT_THRESHOLD: usize = 5_000;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Session persistence file name (stored in the platform data directory).
pub const SESSION_FILE_NAME: &str = "session.json";

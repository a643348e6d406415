//! Client-wide tunables.

/// Text search waits for this much input inactivity before filtering.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// "today" reports are re-queried on this interval.
pub const AUTO_REFRESH_INTERVAL_MS: u32 = 5 * 60 * 1000;

/// Notifications disappear after this delay.
pub const NOTIFICATION_TIMEOUT_MS: u32 = 3000;

/// Product search queries shorter than this are not sent.
pub const MIN_PRODUCT_QUERY_LEN: usize = 2;

/// localStorage key for the profit analysis preferences.
pub const PREFERENCES_STORAGE_KEY: &str = "profitAnalysisPrefs";

/// Prefix used for every money value on screen.
pub const CURRENCY_LABEL: &str = "Rs.";

pub const APP_NAME: &str = "ShopCloud";

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Shortest period the daily base is divided across, in days
pub const MIN_PERIOD_DAYS: i64 = 1;


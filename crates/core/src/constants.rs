use std::time::Duration;

/// Time-to-live for cached symbol quotes (one day).
pub const QUOTE_CACHE_TTL: Duration = Duration::from_secs(86_400);

/// Time-to-live for cached conversion-rate tables (one hour).
pub const RATES_CACHE_TTL: Duration = Duration::from_secs(3_600);

/// Base currency assumed when a caller does not name one.
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

/// Decimal places for allocation percentages.
pub const ALLOCATION_PRECISION: u32 = 2;

use std::collections::HashMap;

use rust_decimal::Decimal;

/// Conversion rates for one base currency.
///
/// Maps target-currency codes (upstream casing preserved) to the rate from
/// the base currency. The table is cached wholesale per base and returned
/// verbatim on a cache hit.
pub type RateTable = HashMap<String, Decimal>;

use crate::error::{Result, SupplysightError};

/// Canonical input column names, as written by the template.
pub const COL_SUPPLIER_COUNT: &str = "Supplier_Count";
pub const COL_GEO_SPREAD: &str = "Geo_Spread";
pub const COL_COST_VOLATILITY: &str = "Cost_Volatility";
pub const COL_LEAD_TIME: &str = "Lead_Time";
pub const COL_ALT_SUPPLIER_OPTIONS: &str = "Alt_Supplier_Options";

pub const CANONICAL_COLUMNS: [&str; 5] = [
    COL_SUPPLIER_COUNT,
    COL_GEO_SPREAD,
    COL_COST_VOLATILITY,
    COL_LEAD_TIME,
    COL_ALT_SUPPLIER_OPTIONS,
];

/// All factors share one ordinal scale.
pub const SCALE_MIN: i64 = 1;
pub const SCALE_MAX: i64 = 5;

/// One set of resilience factors, validated on construction.
///
/// Every field is on the 1-5 scale. `supplier_count`, `geo_spread` and
/// `alt_supplier_options` are better when high; `cost_volatility` and
/// `lead_time` are worse when high.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResilienceFactors {
    pub supplier_count: i64,
    pub geo_spread: i64,
    pub cost_volatility: i64,
    pub lead_time: i64,
    pub alt_supplier_options: i64,
}

impl ResilienceFactors {
    /// Builds a factor set, rejecting any value outside the 1-5 scale.
    /// Out-of-range input is an error here, never clamped downstream.
    pub fn new(
        supplier_count: i64,
        geo_spread: i64,
        cost_volatility: i64,
        lead_time: i64,
        alt_supplier_options: i64,
    ) -> Result<Self> {
        for (column, value) in [
            (COL_SUPPLIER_COUNT, supplier_count),
            (COL_GEO_SPREAD, geo_spread),
            (COL_COST_VOLATILITY, cost_volatility),
            (COL_LEAD_TIME, lead_time),
            (COL_ALT_SUPPLIER_OPTIONS, alt_supplier_options),
        ] {
            if !(SCALE_MIN..=SCALE_MAX).contains(&value) {
                return Err(SupplysightError::OutOfRange {
                    column: column.to_string(),
                    value,
                });
            }
        }

        Ok(Self {
            supplier_count,
            geo_spread,
            cost_volatility,
            lead_time,
            alt_supplier_options,
        })
    }
}

//! Currency formatting for the es-MX locale.

use fixed_decimal::FixedDecimal;
use icu::decimal::options::{FixedDecimalFormatterOptions, GroupingStrategy};
use icu::decimal::FixedDecimalFormatter;
use icu::locid::locale;
use tracing::warn;
use writeable::Writeable;

use crate::money::Money;

/// Format an amount the way `es-MX` renders `MXN`: `$1,234.50`.
///
/// Always two fraction digits, comma-grouped thousands, no space after the sign.
pub fn format_mxn(amount: Money) -> String {
    let plain = amount.to_decimal_string();
    let number = group_es_mx(&plain).unwrap_or(plain);
    format!("${}", number)
}

/// Apply es-MX grouping and decimal separators to a plain decimal string.
fn group_es_mx(plain: &str) -> Option<String> {
    let mut options = FixedDecimalFormatterOptions::default();
    // Four-digit amounts are grouped too: `$1,000.00`
    options.grouping_strategy = GroupingStrategy::Always;

    let formatter = match FixedDecimalFormatter::try_new(&locale!("es-MX").into(), options) {
        Ok(formatter) => formatter,
        Err(e) => {
            warn!(error = %e, "es-MX number format unavailable, amounts shown ungrouped");
            return None;
        }
    };
    let decimal: FixedDecimal = plain.parse().ok()?;
    Some(formatter.format(&decimal).write_to_string().into_owned())
}

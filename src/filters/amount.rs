use crate::format_amount;

/// `{{ 1.5 | amount }}`: show a number in cooking notation, `1 1/2` here.
pub fn amount_filter(value: f64) -> String {
    format_amount(value)
}

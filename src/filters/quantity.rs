use crate::parse_quantity;

/// `{{ "1 1/2" | quantity }}`: read a quantity the same way typed amounts are read.
pub fn quantity_filter(value: &str) -> f64 {
    parse_quantity(value)
}

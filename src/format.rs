//! Formatting of scaled amounts in cooking notation.

/// Fractions cooks actually measure with, in the order they are tried.
///
/// Matching takes the first entry within [`FRACTION_TOLERANCE`], not the closest one,
/// so `0.36` becomes `1/3` even though `3/8` is nearer.
const CULINARY_FRACTIONS: [(f64, &str); 9] = [
    (0.125, "1/8"),
    (0.25, "1/4"),
    (0.333, "1/3"),
    (0.375, "3/8"),
    (0.5, "1/2"),
    (0.625, "5/8"),
    (0.666, "2/3"),
    (0.75, "3/4"),
    (0.875, "7/8"),
];

const FRACTION_TOLERANCE: f64 = 0.05;

/// Format an amount for a recipe, snapping to a culinary fraction where one is close.
///
/// Zero is `"0"`. Otherwise the fractional part is compared against `1/8`, `1/4`,
/// `1/3`, `3/8`, `1/2`, `5/8`, `2/3`, `3/4` and `7/8` in that order, and the first one
/// within `0.05` is used, giving `"1/2"` or `"1 1/2"`. Amounts with no nearby
/// fraction are rounded to two decimal places and printed without trailing zeros.
///
/// The value should be finite; callers are expected to check that first.
///
/// # Examples
///
/// ```
/// use ingredient_upscaler::format_amount;
///
/// assert_eq!(format_amount(0.5), "1/2");
/// assert_eq!(format_amount(2.333), "2 1/3");
/// assert_eq!(format_amount(1.04), "1.04");
/// ```
#[must_use]
pub fn format_amount(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let whole = value.floor();
    let decimal = value - whole;

    if let Some(label) = culinary_fraction(decimal) {
        return if whole == 0.0 {
            label.to_string()
        } else {
            format!("{whole} {label}")
        };
    }

    let rounded = (value * 100.0).round() / 100.0;
    rounded.to_string()
}

fn culinary_fraction(decimal: f64) -> Option<&'static str> {
    CULINARY_FRACTIONS
        .iter()
        .find(|(fraction, _)| (decimal - fraction).abs() < FRACTION_TOLERANCE)
        .map(|(_, label)| *label)
}

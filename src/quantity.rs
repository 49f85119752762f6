//! Parsing of free-text quantities such as `2`, `0.75`, `1/2` or `1 1/2`.
//!
//! Parsing never fails. Anything that isn't a recognizable amount comes back as
//! `0.0`. Signed and out-of-range numbers are passed through as read, and callers
//! decide what is worth showing.

use tracing::trace;

const FRACTION_DELIMITER: char = '/';

/// Parse a quantity string into a number.
///
/// Leading and trailing whitespace is ignored. The grammars are tried in this
/// order and the first one that matches wins:
///
/// 1. a mixed number, `1 1/2`
/// 2. a simple fraction, `3/4`
/// 3. a decimal number, `2`, `0.5`, `1e2`; trailing text is ignored so `2 cups` is `2`
///
/// Fractions with a zero denominator parse to `0.0`. A decimal keeps its sign and
/// may overflow to infinity, so `-2` is `-2.0` and `1e999` is `f64::INFINITY`.
///
/// # Examples
///
/// ```
/// use ingredient_upscaler::parse_quantity;
///
/// assert_eq!(parse_quantity("1 1/2"), 1.5);
/// assert_eq!(parse_quantity("  3/4  "), 0.75);
/// assert_eq!(parse_quantity("a pinch"), 0.0);
/// ```
#[must_use]
pub fn parse_quantity(text: &str) -> f64 {
    let trimmed = text.trim();

    let value = parse_mixed_number(trimmed)
        .or_else(|| parse_fraction(trimmed))
        .or_else(|| parse_decimal_prefix(trimmed));

    match value {
        Some(value) if value.is_nan() => {
            trace!(input = text, "zero denominator, using 0");
            0.0
        }
        Some(value) => value,
        None => {
            trace!(input = text, "unrecognized quantity, using 0");
            0.0
        }
    }
}

/// `whole a/b`, with any amount of whitespace between the two parts.
fn parse_mixed_number(value: &str) -> Option<f64> {
    let (whole, fraction) = value.split_once(char::is_whitespace)?;
    let whole = parse_digits(whole)?;
    let fraction = parse_fraction(fraction.trim_start())?;
    Some(whole + fraction)
}

/// `a/b` where both sides are plain digits.
///
/// A zero denominator still counts as a match: the result is NaN, which
/// [`parse_quantity`] turns into zero instead of trying the next grammar.
fn parse_fraction(value: &str) -> Option<f64> {
    let (numerator, denominator) = value.split_once(FRACTION_DELIMITER)?;
    let numerator = parse_digits(numerator)?;
    let denominator = parse_digits(denominator)?;
    if denominator == 0.0 {
        return Some(f64::NAN);
    }
    Some(numerator / denominator)
}

/// A non-empty run of ASCII digits and nothing else.
fn parse_digits(value: &str) -> Option<f64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse::<f64>().ok()
}

/// Parse the longest leading decimal literal, ignoring whatever follows it.
fn parse_decimal_prefix(value: &str) -> Option<f64> {
    let bytes = value.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let integer_digits = count_digits(&bytes[end..]);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[end + 1..]);
        end += 1 + fraction_digits;
    }

    if integer_digits == 0 && fraction_digits == 0 {
        return None;
    }

    // An exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = count_digits(&bytes[exponent_end..]);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    value[..end].trim_end_matches('.').parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use test_case::test_case;

    fn test<F: Into<f64>>(expected: F, actual: &str) {
        assert_approx_eq!(f64, expected.into(), parse_quantity(actual));
    }

    #[test_case("2", 2.0; "integer")]
    #[test_case("0.75", 0.75; "decimal")]
    #[test_case(".5", 0.5; "leading point")]
    #[test_case("3.", 3.0; "trailing point")]
    #[test_case("1e2", 100.0; "exponent")]
    #[test_case("+4", 4.0; "explicit sign")]
    fn decimal(input: &str, expected: f64) {
        test(expected, input);
    }

    #[test]
    fn fraction() {
        test(0.5, "1/2");
        test(0.75, "3/4");
        test(2.5, "5/2");
    }

    #[test]
    fn mixed_number() {
        test(1.5, "1 1/2");
        test(2.25, "2   1/4");
        test(2.25, "2\t1/4");
    }

    #[test]
    fn improper_mixed_number() {
        test(4.5, "3 3/2");
    }

    #[test]
    fn surrounding_whitespace() {
        test(0.75, "  3/4  ");
        test(1.5, "\t1 1/2\n");
        test(2, " 2 ");
    }

    #[test]
    fn trailing_text_after_number() {
        test(2, "2 cups");
        test(42.54, "42.54oz");
        test(1, "1/2 cup");
        test(1, "1 1/2 tsp");
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "blank")]
    #[test_case("abc"; "text")]
    #[test_case("pinch, 2"; "text before number")]
    #[test_case("."; "lone point")]
    #[test_case("inf"; "infinity spelling")]
    #[test_case("NaN"; "nan spelling")]
    #[test_case("½"; "vulgar fraction glyph")]
    fn unparseable_is_zero(input: &str) {
        test(0, input);
    }

    #[test]
    fn divide_by_zero() {
        test(0, "1/0");
        test(0, "0/0");
        test(0, "2 3/0");
    }

    #[test]
    fn negative_keeps_sign() {
        test(-2, "-2");
        test(-0.5, "-0.5");
    }

    #[test]
    fn negative_fraction_reads_leading_number() {
        // only unsigned digits form a fraction, so this falls through to the decimal
        test(-1, "-1/2");
    }

    #[test]
    fn overflow_is_infinite() {
        let value = parse_quantity("1e999");
        assert!(value.is_infinite() && value > 0.0, "got {value}");
    }

    #[test]
    fn zero_denominator_does_not_fall_through() {
        // would read as the decimal 10 if the fraction grammar gave up
        test(0, "10/0");
        test(0, " 3/0 ");
    }

    #[test]
    fn exponent_without_digits_is_ignored() {
        test(3, "3e");
        test(3, "3e+");
    }

    #[test]
    fn thousands_separator_stops_the_number() {
        test(1, "1,000");
    }
}

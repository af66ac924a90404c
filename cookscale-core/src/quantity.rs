//! Amount parsing.
//!
//! Turns quantity text from a recipe ("2", "2.5", "3/4", "1 1/2") into a
//! number. Anything that does not parse ("some", "to taste", "") is treated
//! as non-numeric by the rest of the crate and passed through untouched.

/// Parse an amount string into a decimal value.
///
/// Handles:
/// - Integers: "8" → 8.0
/// - Decimals: "2.5" → 2.5
/// - Fractions: "1/2" → 0.5
/// - Mixed numbers: "1 1/2" → 1.5
///
/// Returns `None` for empty text, zero denominators and non-finite results
/// (so "inf" and "NaN" are not quantities).
pub fn parse_amount(amount: &str) -> Option<f64> {
    let amount = amount.trim();

    if amount.is_empty() {
        return None;
    }

    let value = match amount.split_whitespace().collect::<Vec<_>>().as_slice() {
        [whole, fraction] => {
            let whole: f64 = whole.parse().ok()?;
            let fraction = parse_fraction(fraction)?;
            if whole < 0.0 {
                whole - fraction
            } else {
                whole + fraction
            }
        }
        [single] if single.contains('/') => parse_fraction(single)?,
        [single] => single.parse().ok()?,
        _ => return None,
    };

    value.is_finite().then_some(value)
}

/// Whether the text is written as a fraction or mixed number that parses.
pub fn is_fraction_text(amount: &str) -> bool {
    amount.contains('/') && parse_amount(amount).is_some()
}

/// Parse a fraction string like "1/2" or "3/4".
fn parse_fraction(s: &str) -> Option<f64> {
    let (num, denom) = s.split_once('/')?;
    let num: f64 = num.trim().parse().ok()?;
    let denom: f64 = denom.trim().parse().ok()?;
    if denom == 0.0 {
        return None;
    }
    Some(num / denom)
}

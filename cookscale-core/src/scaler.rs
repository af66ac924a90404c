//! Applies the scale factor to an ingredient's base quantity.

use crate::fraction::format_quantity;
use crate::quantity::parse_amount;

/// Scale a base quantity and format it for display.
///
/// Non-numeric quantities ("pinch", "to taste", "") come back unchanged and
/// the scale factor is ignored for them.
pub fn scale_quantity(base_quantity: &str, scale_factor: f64, as_fraction: bool) -> String {
    match parse_amount(base_quantity) {
        Some(amount) => format_quantity(amount * scale_factor, as_fraction),
        None => base_quantity.to_string(),
    }
}

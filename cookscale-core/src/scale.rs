//! The shared scale factor and the drag gesture that drives it.
//!
//! Dragging one ingredient's quantity rescales the whole recipe: every
//! displayed quantity is its own base quantity times the single factor held
//! here.

use crate::config::DragConfig;
use crate::error::ScaleError;
use crate::quantity::parse_amount;
use crate::scaler::scale_quantity;

/// Owns the scale factor for one view. Always strictly positive.
#[derive(Debug, Clone)]
pub struct ScaleController {
    scale: f64,
    config: DragConfig,
}

impl Default for ScaleController {
    fn default() -> Self {
        Self::new(DragConfig::default())
    }
}

/// An in-progress drag on one ingredient's quantity.
///
/// Holds everything needed to turn an absolute pointer position into a new
/// scale, so dropped or reordered move events cannot cause drift.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    start_position: f64,
    /// Quantity on screen when the drag began
    start_scaled_quantity: f64,
    /// Unscaled base quantity of the dragged ingredient
    original_quantity: f64,
    sensitivity: f64,
    floor_ratio: f64,
}

impl DragSession {
    /// Scale factor for the pointer at `position`.
    pub fn scale_at(&self, position: f64) -> f64 {
        let delta = (position - self.start_position) * self.sensitivity;
        let floor = self.floor_ratio * self.start_scaled_quantity;
        let quantity = (self.start_scaled_quantity + delta).max(floor);
        quantity / self.original_quantity
    }

    pub fn start_scaled_quantity(&self) -> f64 {
        self.start_scaled_quantity
    }

    pub fn original_quantity(&self) -> f64 {
        self.original_quantity
    }
}

impl ScaleController {
    pub fn new(config: DragConfig) -> Self {
        Self { scale: 1.0, config }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f64) -> Result<(), ScaleError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(ScaleError::NotPositive(scale));
        }
        self.scale = scale;
        Ok(())
    }

    /// Start dragging an ingredient's displayed quantity.
    ///
    /// Returns `None` for quantities that cannot be scaled: non-numeric text,
    /// zero and negative amounts.
    pub fn begin_drag(
        &self,
        quantity: &str,
        as_fraction: bool,
        pointer_position: f64,
    ) -> Option<DragSession> {
        let original_quantity = parse_amount(quantity).filter(|q| *q > 0.0)?;
        let exact = original_quantity * self.scale;

        // Start from what the user sees. A rounded display of "0" would pin
        // the floor at zero, so fall back to the exact product.
        let start_scaled_quantity = parse_amount(&scale_quantity(quantity, self.scale, as_fraction))
            .filter(|shown| *shown > 0.0)
            .unwrap_or(exact);

        tracing::debug!(
            quantity,
            start_scaled_quantity,
            pointer_position,
            "drag started"
        );

        Some(DragSession {
            start_position: pointer_position,
            start_scaled_quantity,
            original_quantity,
            sensitivity: self.config.sensitivity,
            floor_ratio: self.config.floor_ratio,
        })
    }

    /// Recompute the scale from the pointer's current absolute position.
    pub fn on_drag_move(&mut self, session: &DragSession, pointer_position: f64) {
        self.scale = session.scale_at(pointer_position);
    }

    /// Finish the drag. The scale keeps its last value.
    pub fn end_drag(&mut self, session: DragSession) {
        tracing::debug!(
            scale = self.scale,
            start_scaled_quantity = session.start_scaled_quantity,
            "drag ended"
        );
    }
}

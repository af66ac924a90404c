//! A recipe opened for cooking: the parsed model plus the scale and
//! completion state that live as long as the view.

use crate::aggregate::{all_ingredient_occurrences, IngredientOccurrence};
use crate::completion::CompletionTracker;
use crate::config::DragConfig;
use crate::error::ScaleError;
use crate::model::{Ingredient, Recipe};
use crate::scale::{DragSession, ScaleController};
use crate::scaler::scale_quantity;

/// An ingredient occurrence ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientLine {
    pub step_index: usize,
    pub name: String,
    pub quantity: String,
    pub units: String,
    pub complete: bool,
}

#[derive(Debug, Clone)]
pub struct RecipeView {
    recipe: Recipe,
    scale: ScaleController,
    completion: CompletionTracker,
}

impl RecipeView {
    pub fn new(recipe: Recipe) -> Self {
        Self::with_config(recipe, DragConfig::default())
    }

    pub fn with_config(recipe: Recipe, config: DragConfig) -> Self {
        Self {
            recipe,
            scale: ScaleController::new(config),
            completion: CompletionTracker::new(),
        }
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn scale(&self) -> f64 {
        self.scale.scale()
    }

    pub fn set_scale(&mut self, scale: f64) -> Result<(), ScaleError> {
        self.scale.set_scale(scale)
    }

    pub fn completion(&self) -> &CompletionTracker {
        &self.completion
    }

    pub fn toggle_step(&mut self, step_index: usize) -> bool {
        self.completion.toggle(step_index)
    }

    pub fn is_step_complete(&self, step_index: usize) -> bool {
        self.completion.is_complete(step_index)
    }

    /// The ingredient's quantity at the current scale.
    pub fn displayed_quantity(&self, ingredient: &Ingredient) -> String {
        scale_quantity(
            &ingredient.quantity,
            self.scale.scale(),
            ingredient.quantity_is_fraction,
        )
    }

    pub fn occurrences(&self) -> Vec<IngredientOccurrence<'_>> {
        all_ingredient_occurrences(&self.recipe, &self.completion)
    }

    pub fn ingredient_lines(&self) -> Vec<IngredientLine> {
        self.occurrences()
            .into_iter()
            .map(|occurrence| IngredientLine {
                step_index: occurrence.step_index,
                name: occurrence.ingredient.name.clone(),
                quantity: self.displayed_quantity(occurrence.ingredient),
                units: occurrence.ingredient.units.clone(),
                complete: occurrence.complete,
            })
            .collect()
    }

    /// Start dragging the quantity of the `occurrence_index`-th ingredient
    /// occurrence. `None` if there is no such occurrence or its quantity
    /// cannot be scaled.
    pub fn begin_drag(&self, occurrence_index: usize, pointer_position: f64) -> Option<DragSession> {
        let occurrences = self.occurrences();
        let ingredient = occurrences.get(occurrence_index)?.ingredient;
        self.scale.begin_drag(
            &ingredient.quantity,
            ingredient.quantity_is_fraction,
            pointer_position,
        )
    }

    pub fn drag_move(&mut self, session: &DragSession, pointer_position: f64) {
        self.scale.on_drag_move(session, pointer_position);
    }

    pub fn end_drag(&mut self, session: DragSession) {
        self.scale.end_drag(session);
    }
}

//! Flattened ingredient list across all steps.

use crate::completion::CompletionTracker;
use crate::model::{Ingredient, Part, Recipe};

/// One appearance of an ingredient in a specific step.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientOccurrence<'a> {
    pub step_index: usize,
    pub ingredient: &'a Ingredient,
    /// Whether the owning step is marked done
    pub complete: bool,
}

/// Every ingredient part in recipe order, one entry per occurrence.
///
/// Built fresh on each call since completion changes between redraws.
pub fn all_ingredient_occurrences<'a>(
    recipe: &'a Recipe,
    completion: &CompletionTracker,
) -> Vec<IngredientOccurrence<'a>> {
    let mut occurrences = Vec::new();

    for (step_index, step) in recipe.steps.iter().enumerate() {
        let complete = completion.is_complete(step_index);
        for part in &step.parts {
            match part {
                Part::Ingredient(ingredient) => occurrences.push(IngredientOccurrence {
                    step_index,
                    ingredient,
                    complete,
                }),
                Part::Cookware(_) | Part::Timer(_) | Part::Text(_) => {}
            }
        }
    }

    occurrences
}

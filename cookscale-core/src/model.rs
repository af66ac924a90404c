//! Structured recipe model produced by the parser.
//!
//! A recipe is read-only once parsed. Steps are identified by their position
//! in [`Recipe::steps`] for the lifetime of a view.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// `>> key: value` lines, e.g. "title"
    pub metadata: BTreeMap<String, String>,
    pub steps: Vec<Step>,
}

impl Recipe {
    pub fn title(&self) -> Option<&str> {
        self.metadata.get("title").map(String::as_str)
    }

    /// Total number of ingredient parts across all steps.
    pub fn ingredient_count(&self) -> usize {
        self.steps.iter().map(|s| s.ingredients().count()).sum()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Step {
    pub parts: Vec<Part>,
}

impl Step {
    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.parts.iter().filter_map(|part| match part {
            Part::Ingredient(ingredient) => Some(ingredient),
            Part::Cookware(_) | Part::Timer(_) | Part::Text(_) => None,
        })
    }
}

/// One token within a step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Part {
    Ingredient(Ingredient),
    Cookware(Cookware),
    Timer(Timer),
    Text(Text),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    pub name: String,
    /// Numeric text ("2", "0.5") or free text ("some"); empty when omitted
    pub quantity: String,
    pub units: String,
    /// The source wrote the quantity as a fraction ("1/2")
    pub quantity_is_fraction: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cookware {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Timer {
    pub name: String,
    /// "<quantity> <units>", e.g. "25 minutes"
    pub duration: String,
}

impl Timer {
    pub fn display_text(&self) -> String {
        match (self.name.is_empty(), self.duration.is_empty()) {
            (true, _) => self.duration.clone(),
            (false, true) => self.name.clone(),
            (false, false) => format!("{} ({})", self.name, self.duration),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Text {
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(name: &str) -> Part {
        Part::Ingredient(Ingredient {
            name: name.to_string(),
            quantity: "1".to_string(),
            units: String::new(),
            quantity_is_fraction: false,
        })
    }

    #[test]
    fn test_ingredient_count_skips_other_parts() {
        let recipe = Recipe {
            metadata: BTreeMap::new(),
            steps: vec![
                Step {
                    parts: vec![
                        ingredient("eggs"),
                        Part::Text(Text {
                            value: " into a ".to_string(),
                        }),
                        Part::Cookware(Cookware {
                            name: "bowl".to_string(),
                        }),
                    ],
                },
                Step {
                    parts: vec![ingredient("milk"), ingredient("flour")],
                },
            ],
        };
        assert_eq!(recipe.ingredient_count(), 3);
        assert_eq!(recipe.title(), None);
    }

    #[test]
    fn test_timer_display_text() {
        let timer = |name: &str, duration: &str| Timer {
            name: name.to_string(),
            duration: duration.to_string(),
        };
        assert_eq!(timer("", "25 minutes").display_text(), "25 minutes");
        assert_eq!(timer("rest", "").display_text(), "rest");
        assert_eq!(timer("rest", "5 minutes").display_text(), "rest (5 minutes)");
    }

    #[test]
    fn test_part_serializes_with_type_tag() {
        let json = serde_json::to_value(Part::Cookware(Cookware {
            name: "pan".to_string(),
        }))
        .unwrap();
        assert_eq!(json, serde_json::json!({"type": "cookware", "name": "pan"}));
    }
}

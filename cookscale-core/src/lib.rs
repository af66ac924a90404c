pub mod aggregate;
pub mod completion;
pub mod config;
pub mod error;
pub mod fraction;
pub mod model;
pub mod parser;
pub mod quantity;
pub mod scale;
pub mod scaler;
pub mod view;

pub use aggregate::{all_ingredient_occurrences, IngredientOccurrence};
pub use completion::CompletionTracker;
pub use config::DragConfig;
pub use error::{ConfigError, ParseError, ScaleError};
pub use fraction::format_quantity;
pub use model::{Cookware, Ingredient, Part, Recipe, Step, Text, Timer};
pub use parser::parse;
pub use quantity::parse_amount;
pub use scale::{DragSession, ScaleController};
pub use scaler::scale_quantity;
pub use view::{IngredientLine, RecipeView};

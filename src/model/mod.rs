//! Data types shared by the scaler, the recipe card and templates.
mod ingredient;
mod scaled;
mod unit;

pub use ingredient::{Ingredient, IngredientField, IngredientId};
pub use scaled::{ScaledIngredient, ScaledView};
pub use unit::Unit;

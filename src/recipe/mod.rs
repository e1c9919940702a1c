// src/recipe/mod.rs

//! Shaped crafting recipes
//!
//! A recipe starts life as a compact text file:
//!
//! ```text
//! my_mod:stone_sword
//! A--
//! A--
//! B--
//! A = minecraft:iron_ingot
//! B = minecraft:stick
//! 1
//! ```
//!
//! Line 1 names the crafted item, lines 2-4 are the 3x3 grid pattern
//! (`-` marks an empty cell), the middle lines map each pattern symbol to
//! an item identifier, and the last line is the yield count.
//!
//! `parser` validates that text into a [`RecipeDescription`]; `format`
//! holds the description itself and its conversion into the Bedrock
//! `format_version 1.20.0` JSON document.

mod format;
pub mod parser;

pub use format::{
    EMPTY_CELL, FORMAT_VERSION, KeyIngredient, RecipeDescription, RecipeDocument, RecipeIdentity,
    RecipeResult, ShapedRecipe,
};
pub use parser::{parse_recipe, parse_recipe_file};

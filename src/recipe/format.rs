// src/recipe/format.rs

//! Recipe data model and the Bedrock document it serializes to
//!
//! [`RecipeDescription`] is the validated in-memory form of a recipe text
//! file; it is only ever constructed by the parser and never mutated
//! afterwards. [`RecipeDocument`] mirrors the target JSON schema with
//! serde structs, so field order is fixed and repeated serialization of
//! the same recipe is byte-identical.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Schema version tag written into every generated document
pub const FORMAT_VERSION: &str = "1.20.0";

/// Crafting surface tag attached to every generated recipe
pub const CRAFTING_TABLE_TAG: &str = "crafting_table";

/// Placeholder for an empty grid cell in recipe text
pub const EMPTY_CELL: char = '-';

/// A validated shaped-recipe description
///
/// Invariant: every non-`-` character in `pattern` has an entry in
/// `substitutions`. Symbols declared but unused in the pattern are
/// allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDescription {
    /// Identifier of the crafted item, `namespace:item` form
    pub result_identifier: String,
    /// Three rows of three characters each
    pub pattern: [String; 3],
    /// Pattern symbol to item identifier; ordered so output is stable
    pub substitutions: BTreeMap<char, String>,
    /// Yield quantity, always positive
    pub count: u32,
}

impl RecipeDescription {
    /// Build the Bedrock JSON document for this recipe
    ///
    /// Pure and total: a validated description always produces a
    /// document. `-` placeholders become literal spaces, which is how the
    /// schema encodes empty cells; row length stays 3.
    pub fn to_document(&self) -> RecipeDocument {
        let pattern = self
            .pattern
            .iter()
            .map(|row| row.replace(EMPTY_CELL, " "))
            .collect();

        let key = self
            .substitutions
            .iter()
            .map(|(symbol, item)| (*symbol, KeyIngredient { item: item.clone() }))
            .collect();

        RecipeDocument {
            format_version: FORMAT_VERSION.to_string(),
            recipe: ShapedRecipe {
                description: RecipeIdentity {
                    identifier: self.result_identifier.clone(),
                },
                tags: vec![CRAFTING_TABLE_TAG.to_string()],
                pattern,
                key,
                result: RecipeResult {
                    item: self.result_identifier.clone(),
                    count: self.count,
                },
            },
        }
    }
}

/// Root of the generated JSON document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeDocument {
    pub format_version: String,

    #[serde(rename = "minecraft:recipe_shaped")]
    pub recipe: ShapedRecipe,
}

/// The `minecraft:recipe_shaped` payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShapedRecipe {
    pub description: RecipeIdentity,

    /// Crafting surfaces this recipe is available on
    pub tags: Vec<String>,

    /// Grid rows with spaces marking empty cells
    pub pattern: Vec<String>,

    /// Symbol to ingredient mapping
    pub key: BTreeMap<char, KeyIngredient>,

    pub result: RecipeResult,
}

/// The `description` object naming a recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeIdentity {
    pub identifier: String,
}

/// One ingredient in the key map
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyIngredient {
    pub item: String,
}

/// The crafted output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeResult {
    pub item: String,
    pub count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_description() -> RecipeDescription {
        let mut substitutions = BTreeMap::new();
        substitutions.insert('A', "minecraft:iron_ingot".to_string());
        substitutions.insert('B', "minecraft:stick".to_string());

        RecipeDescription {
            result_identifier: "my_mod:stone_sword".to_string(),
            pattern: ["A--".to_string(), "A--".to_string(), "B--".to_string()],
            substitutions,
            count: 1,
        }
    }

    #[test]
    fn test_document_matches_schema() {
        let document = sample_description().to_document();

        assert_eq!(document.format_version, "1.20.0");
        assert_eq!(document.recipe.description.identifier, "my_mod:stone_sword");
        assert_eq!(document.recipe.tags, vec!["crafting_table".to_string()]);
        assert_eq!(document.recipe.pattern, vec!["A  ", "A  ", "B  "]);
        assert_eq!(document.recipe.result.item, "my_mod:stone_sword");
        assert_eq!(document.recipe.result.count, 1);

        let key = &document.recipe.key;
        assert_eq!(key.len(), 2);
        assert_eq!(key[&'A'].item, "minecraft:iron_ingot");
        assert_eq!(key[&'B'].item, "minecraft:stick");
    }

    #[test]
    fn test_placeholders_become_spaces() {
        let mut description = sample_description();
        description.pattern = ["---".to_string(), "-A-".to_string(), "---".to_string()];

        let document = description.to_document();
        assert_eq!(document.recipe.pattern, vec!["   ", " A ", "   "]);
        for row in &document.recipe.pattern {
            assert_eq!(row.chars().count(), 3);
        }
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let description = sample_description();
        let first = serde_json::to_string_pretty(&description.to_document()).unwrap();
        let second = serde_json::to_string_pretty(&description.to_document()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_wire_field_names() {
        let document = sample_description().to_document();
        let value = serde_json::to_value(&document).unwrap();

        assert!(value.get("minecraft:recipe_shaped").is_some());
        let recipe = &value["minecraft:recipe_shaped"];
        assert_eq!(recipe["description"]["identifier"], "my_mod:stone_sword");
        assert_eq!(recipe["key"]["A"]["item"], "minecraft:iron_ingot");
        assert_eq!(recipe["result"]["count"], 1);
    }

    #[test]
    fn test_document_round_trips() {
        let document = sample_description().to_document();
        let json = serde_json::to_string(&document).unwrap();
        let parsed: RecipeDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, document);
    }
}

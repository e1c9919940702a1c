// src/recipe/parser.rs

//! Recipe text parsing and validation

use crate::error::{Error, Result};
use crate::recipe::format::{EMPTY_CELL, RecipeDescription};
use std::collections::BTreeMap;
use std::path::Path;

/// Parse a recipe from its text content
///
/// The grammar is line-oriented: line 1 is the result identifier, lines
/// 2-4 are the pattern rows, then symbol substitutions (blank lines
/// allowed), and the last line is the yield count. Trailing whitespace on
/// each line is ignored; leading and trailing blank lines of the whole
/// input are trimmed. Every violation is an [`Error::Format`] whose
/// message references the offending line.
pub fn parse_recipe(content: &str) -> Result<RecipeDescription> {
    let lines: Vec<&str> = content.trim().split('\n').map(str::trim_end).collect();

    if lines.len() < 5 {
        return Err(Error::Format(format!(
            "recipe must have at least 5 lines (found {})",
            lines.len()
        )));
    }

    let result_identifier = lines[0].trim();
    if !is_valid_identifier(result_identifier) {
        return Err(Error::Format(format!(
            "invalid result identifier '{result_identifier}' (expected namespace:item)"
        )));
    }

    for (offset, row) in lines[1..4].iter().enumerate() {
        let length = row.chars().count();
        if length != 3 {
            return Err(Error::Format(format!(
                "line {}: pattern row must be exactly 3 characters (found {length})",
                offset + 2
            )));
        }
    }
    let pattern = [
        lines[1].to_string(),
        lines[2].to_string(),
        lines[3].to_string(),
    ];

    let tail = &lines[4..];
    let count = parse_count(tail[tail.len() - 1].trim())?;
    let substitutions = parse_substitutions(&tail[..tail.len() - 1])?;

    validate_pattern_symbols(&pattern, &substitutions)?;

    Ok(RecipeDescription {
        result_identifier: result_identifier.to_string(),
        pattern,
        substitutions,
        count,
    })
}

/// Parse a recipe from a file
pub fn parse_recipe_file(path: &Path) -> Result<RecipeDescription> {
    let content = std::fs::read_to_string(path)?;
    parse_recipe(&content)
}

/// Validate `namespace:item` form: exactly one `:` separating two parts
/// that are non-empty after trimming
fn is_valid_identifier(identifier: &str) -> bool {
    let parts: Vec<&str> = identifier.split(':').collect();
    parts.len() == 2 && parts.iter().all(|part| !part.trim().is_empty())
}

/// Parse the count line, distinguishing non-numeric input from a parsed
/// but non-positive value
fn parse_count(line: &str) -> Result<u32> {
    match line.parse::<i64>() {
        Err(_) => Err(Error::Format(format!(
            "last line must be an integer count (found '{line}')"
        ))),
        Ok(count) if count <= 0 => Err(Error::Format(format!(
            "count must be positive (found {count})"
        ))),
        Ok(count) => u32::try_from(count)
            .map_err(|_| Error::Format(format!("count is out of range (found {count})"))),
    }
}

/// Parse the substitution declarations between the pattern and the count
fn parse_substitutions(lines: &[&str]) -> Result<BTreeMap<char, String>> {
    let mut substitutions = BTreeMap::new();

    for (offset, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        // Substitutions start on line 5 of the file
        let line_number = offset + 5;

        let Some((symbol_part, item_part)) = line.split_once('=') else {
            return Err(Error::Format(format!(
                "line {line_number}: invalid substitution (expected 'SYMBOL = namespace:item')"
            )));
        };

        let symbol_part = symbol_part.trim();
        let mut symbol_chars = symbol_part.chars();
        let symbol = match (symbol_chars.next(), symbol_chars.next()) {
            (Some(symbol), None) => symbol,
            _ => {
                return Err(Error::Format(format!(
                    "line {line_number}: symbol must be a single character (found '{symbol_part}')"
                )));
            }
        };

        let item = item_part.trim();
        if !is_valid_identifier(item) {
            return Err(Error::Format(format!(
                "line {line_number}: invalid item identifier '{item}'"
            )));
        }

        if substitutions.contains_key(&symbol) {
            return Err(Error::Format(format!(
                "line {line_number}: duplicate symbol '{symbol}'"
            )));
        }

        substitutions.insert(symbol, item.to_string());
    }

    Ok(substitutions)
}

/// Every non-placeholder pattern character must be a declared symbol;
/// missing ones are reported together, sorted
fn validate_pattern_symbols(
    pattern: &[String; 3],
    substitutions: &BTreeMap<char, String>,
) -> Result<()> {
    let mut missing: Vec<char> = pattern
        .iter()
        .flat_map(|row| row.chars())
        .filter(|symbol| *symbol != EMPTY_CELL && !substitutions.contains_key(symbol))
        .collect();
    missing.sort_unstable();
    missing.dedup();

    if missing.is_empty() {
        return Ok(());
    }

    let joined = missing
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Err(Error::Format(format!(
        "pattern symbols without substitutions: {joined}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "my_mod:stone_sword\nA--\nA--\nB--\nA = minecraft:iron_ingot\nB = minecraft:stick\n1\n";

    #[test]
    fn test_parse_valid_recipe() {
        let recipe = parse_recipe(VALID).unwrap();

        assert_eq!(recipe.result_identifier, "my_mod:stone_sword");
        assert_eq!(recipe.pattern, ["A--", "A--", "B--"]);
        assert_eq!(recipe.substitutions[&'A'], "minecraft:iron_ingot");
        assert_eq!(recipe.substitutions[&'B'], "minecraft:stick");
        assert_eq!(recipe.count, 1);
    }

    #[test]
    fn test_too_few_lines() {
        let err = parse_recipe("my_mod:thing\nA--\nA--\n1").unwrap_err();
        assert!(err.to_string().contains("at least 5 lines"));
    }

    #[test]
    fn test_invalid_result_identifier() {
        for bad in ["stone_sword", "a:b:c", ":sword", "my_mod:", "  :  "] {
            let input = format!("{bad}\nA--\nA--\nA--\nA = minecraft:stick\n1");
            let err = parse_recipe(&input).unwrap_err();
            assert!(
                err.to_string().contains("invalid result identifier"),
                "expected identifier error for '{bad}', got: {err}"
            );
        }
    }

    #[test]
    fn test_pattern_row_wrong_length() {
        let err = parse_recipe("m:s\nA-\nA--\nB--\nA = m:i\nB = m:j\n1").unwrap_err();
        assert!(err.to_string().contains("line 2"));
        assert!(err.to_string().contains("exactly 3 characters"));

        let err = parse_recipe("m:s\nA--\nA---\nB--\nA = m:i\nB = m:j\n1").unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_trailing_whitespace_ignored_on_rows() {
        // Rows are measured after the trailing-whitespace strip
        let recipe = parse_recipe("m:s\nA--   \nA--\t\nB--\nA = m:i\nB = m:j\n1").unwrap();
        assert_eq!(recipe.pattern, ["A--", "A--", "B--"]);
    }

    #[test]
    fn test_count_non_numeric() {
        let err = parse_recipe("m:s\n---\n---\n---\nabc").unwrap_err();
        assert!(err.to_string().contains("must be an integer count"));
    }

    #[test]
    fn test_count_zero_and_negative() {
        for bad in ["0", "-3"] {
            let input = format!("m:s\n---\n---\n---\n{bad}");
            let err = parse_recipe(&input).unwrap_err();
            assert!(
                err.to_string().contains("count must be positive"),
                "expected positivity error for '{bad}', got: {err}"
            );
        }
    }

    #[test]
    fn test_malformed_substitution_line() {
        let err = parse_recipe("m:s\nA--\nA--\nA--\nA minecraft:stick\n1").unwrap_err();
        assert!(err.to_string().contains("line 5"));
        assert!(err.to_string().contains("invalid substitution"));
    }

    #[test]
    fn test_symbol_must_be_single_character() {
        let err = parse_recipe("m:s\nA--\nA--\nA--\nAB = minecraft:stick\n1").unwrap_err();
        assert!(err.to_string().contains("single character"));
    }

    #[test]
    fn test_invalid_substitution_item() {
        let err = parse_recipe("m:s\nA--\nA--\nA--\nA = stick\n1").unwrap_err();
        assert!(err.to_string().contains("invalid item identifier"));
    }

    #[test]
    fn test_duplicate_symbol_rejected() {
        // Duplicates are an error even when the values are identical
        let input = "m:s\nA--\nA--\nA--\nA = minecraft:stick\nA = minecraft:stick\n1";
        let err = parse_recipe(input).unwrap_err();
        assert!(err.to_string().contains("line 6"));
        assert!(err.to_string().contains("duplicate symbol 'A'"));
    }

    #[test]
    fn test_blank_substitution_lines_skipped() {
        let input = "m:s\nA--\nA--\nB--\n\nA = m:i\n\nB = m:j\n\n1";
        let recipe = parse_recipe(input).unwrap();
        assert_eq!(recipe.substitutions.len(), 2);
        assert_eq!(recipe.count, 1);
    }

    #[test]
    fn test_missing_symbols_reported_together_sorted() {
        let input = "m:s\nCA-\nB--\n---\nB = m:i\n1";
        let err = parse_recipe(input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "pattern symbols without substitutions: A, C"
        );
    }

    #[test]
    fn test_unused_symbols_allowed() {
        let input = "m:s\nA--\n---\n---\nA = m:i\nZ = m:unused\n1";
        let recipe = parse_recipe(input).unwrap();
        assert_eq!(recipe.substitutions.len(), 2);
    }

    #[test]
    fn test_all_empty_pattern_needs_no_substitutions() {
        let recipe = parse_recipe("m:s\n---\n---\n---\n4").unwrap();
        assert!(recipe.substitutions.is_empty());
        assert_eq!(recipe.count, 4);
    }

    #[test]
    fn test_surrounding_blank_lines_trimmed() {
        let input = format!("\n\n{VALID}\n\n");
        let recipe = parse_recipe(&input).unwrap();
        assert_eq!(recipe.count, 1);
    }

    #[test]
    fn test_spaces_in_equals_split() {
        // Both sides of the first '=' are trimmed
        let recipe = parse_recipe("m:s\nA--\n---\n---\n  A   =   m:i  \n2").unwrap();
        assert_eq!(recipe.substitutions[&'A'], "m:i");
    }
}

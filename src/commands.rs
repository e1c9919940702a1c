// src/commands.rs

//! Command handlers for the addonsmith CLI

use addonsmith::{Addon, Error, addon, recipe};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Convert a recipe text file to Bedrock JSON
///
/// On success the JSON document lands next to the input with a `.json`
/// extension, written only after parsing has fully succeeded. With a
/// template addon, a new serial-numbered archive containing the recipe
/// is also produced in the input file's directory. With `check`, the
/// recipe is validated and nothing is written.
pub fn cmd_convert(input: &Path, template: Option<&Path>, check: bool) -> Result<()> {
    if !input.exists() {
        return Err(Error::NotFound(input.to_path_buf()).into());
    }
    if let Some(template) = template {
        if !template.exists() {
            return Err(Error::NotFound(template.to_path_buf()).into());
        }
    }

    let description = recipe::parse_recipe_file(input)?;
    info!("Parsed recipe for {}", description.result_identifier);

    if check {
        println!("Recipe is valid: {}", description.result_identifier);
        return Ok(());
    }

    let document = description.to_document();

    let output_file = input.with_extension("json");
    let mut json = serde_json::to_string_pretty(&document).map_err(Error::Json)?;
    json.push('\n');
    fs::write(&output_file, json)
        .with_context(|| format!("Failed to write {}", output_file.display()))?;
    println!("Successfully created: {}", output_file.display());

    if let Some(template) = template {
        let recipe_stem = file_stem(input)?;
        let base_name = file_stem(template)?;
        // Tolerate doubled extensions like base.mcaddon.mcaddon
        let base_name = base_name.strip_suffix(".mcaddon").unwrap_or(&base_name);
        let output_dir = parent_dir(input);

        let output_path = addon::inject(template, &document, &recipe_stem, base_name, output_dir)?;
        println!("Successfully created: {}", output_path.display());
    }

    Ok(())
}

/// Show the packs and content of an addon archive
pub fn cmd_inspect(path: &Path) -> Result<()> {
    let mut addon = Addon::open(path)?;

    println!("Addon: {}", path.display());

    match addon.behavior_pack().map(str::to_string) {
        Some(pack) => {
            let manifest = addon.pack_manifest(&pack)?;
            match manifest.name() {
                Some(name) => println!("Behavior pack: {pack} ({name})"),
                None => println!("Behavior pack: {pack}"),
            }
        }
        None => println!("Behavior pack: none"),
    }
    match addon.resource_pack().map(str::to_string) {
        Some(pack) => {
            let manifest = addon.pack_manifest(&pack)?;
            match manifest.name() {
                Some(name) => println!("Resource pack: {pack} ({name})"),
                None => println!("Resource pack: {pack}"),
            }
        }
        None => println!("Resource pack: none"),
    }

    let recipes = addon.recipes()?;
    println!();
    println!("Recipes ({}):", recipes.len());
    for entry in &recipes {
        println!("  {} - {}", entry.identifier, entry.path);
    }

    let items = addon.items()?;
    if !items.is_empty() {
        println!();
        println!("Items ({}):", items.len());
        for entry in &items {
            println!("  {} - {}", entry.identifier, entry.path);
        }
    }

    let blocks = addon.blocks()?;
    if !blocks.is_empty() {
        println!();
        println!("Blocks ({}):", blocks.len());
        for entry in &blocks {
            println!("  {} - {}", entry.identifier, entry.path);
        }
    }

    Ok(())
}

/// File stem as an owned string, failing on pathological paths
fn file_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow::anyhow!("No file name in path: {}", path.display()))
}

/// Parent directory, with the current directory standing in for bare
/// file names
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

// src/lib.rs

//! Addonsmith
//!
//! Converts compact text descriptions of shaped crafting recipes into
//! the Minecraft Bedrock `format_version 1.20.0` JSON schema, and
//! injects the result into copies of existing `.mcaddon` archives.
//!
//! # Architecture
//!
//! - Parse-then-write: recipe text is fully validated into a
//!   [`RecipeDescription`] before any output file is produced
//! - Typed documents: the Bedrock wire schema is modeled with serde
//!   structs, so generated JSON is deterministic
//! - Scoped workspaces: archive composition extracts into a temp
//!   directory that is cleaned up on every exit path, success or failure
//! - Templates are read-only: injection always produces a new
//!   serial-numbered archive, never mutating its input

pub mod addon;
mod error;
pub mod recipe;

pub use addon::{ADDON_EXTENSION, Addon, ContentEntry, PackManifest, inject, next_serial};
pub use error::{Error, Result};
pub use recipe::{RecipeDescription, RecipeDocument, parse_recipe, parse_recipe_file};

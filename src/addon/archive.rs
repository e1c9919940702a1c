// src/addon/archive.rs

//! Read-side access to addon archives
//!
//! [`Addon`] answers pack and content queries directly against the zip
//! container, without extracting it. Entries that are not valid JSON or
//! do not carry the expected identifier are skipped, matching how the
//! game tolerates stray files inside packs.

use crate::addon::manifest::{ModuleKind, PackManifest};
use crate::error::{Error, Result};
use serde_json::Value;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::ZipArchive;

/// A content entry inside an addon, addressed by archive path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEntry {
    /// Path of the JSON file within the archive
    pub path: String,
    /// Identifier the entry declares (`namespace:name`)
    pub identifier: String,
}

/// An opened addon archive
///
/// Packs are located once at open time: the first top-level directory
/// whose manifest declares a `data` module is the behavior pack, the
/// first declaring `resources` is the resource pack.
#[derive(Debug)]
pub struct Addon {
    path: PathBuf,
    archive: ZipArchive<File>,
    names: Vec<String>,
    behavior_pack: Option<String>,
    resource_pack: Option<String>,
}

impl Addon {
    /// Open an addon archive and locate its packs
    pub fn open(path: &Path) -> Result<Self> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(Error::NotFound(path.to_path_buf()));
            }
            Err(err) => return Err(err.into()),
        };
        let archive = ZipArchive::new(file)?;
        let names: Vec<String> = archive.file_names().map(str::to_string).collect();

        let mut addon = Addon {
            path: path.to_path_buf(),
            archive,
            names,
            behavior_pack: None,
            resource_pack: None,
        };
        addon.locate_packs();
        Ok(addon)
    }

    /// Path this addon was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Top-level directory of the pack declaring a `data` module
    pub fn behavior_pack(&self) -> Option<&str> {
        self.behavior_pack.as_deref()
    }

    /// Top-level directory of the pack declaring a `resources` module
    pub fn resource_pack(&self) -> Option<&str> {
        self.resource_pack.as_deref()
    }

    /// Parse the manifest of a pack directory
    pub fn pack_manifest(&mut self, pack: &str) -> Result<PackManifest> {
        self.read_manifest(&format!("{pack}/manifest.json"))
    }

    /// Recipes in the behavior pack
    pub fn recipes(&mut self) -> Result<Vec<ContentEntry>> {
        self.collect_entries("recipes", recipe_identifier)
    }

    /// Items in the behavior pack
    pub fn items(&mut self) -> Result<Vec<ContentEntry>> {
        self.collect_entries("items", |value| typed_identifier(value, "minecraft:item"))
    }

    /// Blocks in the behavior pack
    pub fn blocks(&mut self) -> Result<Vec<ContentEntry>> {
        self.collect_entries("blocks", |value| typed_identifier(value, "minecraft:block"))
    }

    fn locate_packs(&mut self) {
        for name in self.names.clone() {
            let Some(dir) = name.strip_suffix("/manifest.json") else {
                continue;
            };
            // Top-level packs only
            if dir.is_empty() || dir.contains('/') {
                continue;
            }
            let manifest = match self.read_manifest(&name) {
                Ok(manifest) => manifest,
                Err(err) => {
                    debug!("Skipping manifest {name}: {err}");
                    continue;
                }
            };
            if self.behavior_pack.is_none() && manifest.has_module(ModuleKind::Data) {
                self.behavior_pack = Some(dir.to_string());
            }
            if self.resource_pack.is_none() && manifest.has_module(ModuleKind::Resources) {
                self.resource_pack = Some(dir.to_string());
            }
        }
    }

    fn read_manifest(&mut self, name: &str) -> Result<PackManifest> {
        let mut content = String::new();
        self.archive.by_name(name)?.read_to_string(&mut content)?;
        PackManifest::parse(&content)
    }

    /// Collect JSON entries under the behavior pack's `subtree` whose
    /// content yields an identifier
    fn collect_entries(
        &mut self,
        subtree: &str,
        identify: impl Fn(&Value) -> Option<String>,
    ) -> Result<Vec<ContentEntry>> {
        let Some(pack) = self.behavior_pack.clone() else {
            return Ok(Vec::new());
        };
        let prefix = format!("{pack}/");
        let marker = format!("/{subtree}/");

        let mut entries = Vec::new();
        for name in self.names.clone() {
            if !name.starts_with(&prefix) {
                continue;
            }
            let lower = name.to_lowercase();
            if !lower.contains(&marker) || !lower.ends_with(".json") {
                continue;
            }

            let mut content = String::new();
            if self
                .archive
                .by_name(&name)?
                .read_to_string(&mut content)
                .is_err()
            {
                continue;
            }
            let Ok(value) = serde_json::from_str::<Value>(&content) else {
                continue;
            };
            if let Some(identifier) = identify(&value) {
                entries.push(ContentEntry {
                    path: name,
                    identifier,
                });
            }
        }
        Ok(entries)
    }
}

/// Identifier of a shaped or shapeless recipe document
fn recipe_identifier(value: &Value) -> Option<String> {
    ["minecraft:recipe_shaped", "minecraft:recipe_shapeless"]
        .iter()
        .find_map(|kind| typed_identifier(value, kind))
}

/// Identifier nested under `<kind>.description.identifier`
fn typed_identifier(value: &Value, kind: &str) -> Option<String> {
    value
        .get(kind)?
        .get("description")?
        .get("identifier")?
        .as_str()
        .map(str::to_string)
}

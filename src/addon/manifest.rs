// src/addon/manifest.rs

//! Pack manifest (manifest.json) parsing

use crate::error::Result;
use serde::Deserialize;

/// A pack's manifest.json
///
/// Only the fields the tool needs are modeled; everything else in the
/// manifest is ignored on deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct PackManifest {
    #[serde(default)]
    pub header: Option<PackHeader>,

    #[serde(default)]
    pub modules: Vec<PackModule>,
}

/// Pack metadata from the manifest header
#[derive(Debug, Clone, Deserialize)]
pub struct PackHeader {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub uuid: Option<String>,
}

/// One entry of the manifest's module list
#[derive(Debug, Clone, Deserialize)]
pub struct PackModule {
    #[serde(rename = "type")]
    pub kind: ModuleKind,

    #[serde(default)]
    pub uuid: Option<String>,
}

/// Module types a pack can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleKind {
    /// Behavior pack content; recipes live in packs declaring this
    Data,
    /// Resource pack content
    Resources,
    /// Any other module type (scripts, client_data, ...)
    #[serde(other)]
    Other,
}

impl PackManifest {
    /// Parse a manifest from its JSON content
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Whether any declared module has the given kind
    pub fn has_module(&self, kind: ModuleKind) -> bool {
        self.modules.iter().any(|module| module.kind == kind)
    }

    /// Display name from the header, if present
    pub fn name(&self) -> Option<&str> {
        self.header.as_ref().and_then(|header| header.name.as_deref())
    }
}

// src/addon/compose.rs

//! Addon archive composition
//!
//! Builds a new `.mcaddon` archive from a template plus a generated
//! recipe document. The template is read-only; extraction happens in a
//! scoped temp directory that is removed on every exit path, and the
//! output archive name carries a serial number so repeated runs never
//! collide. The serial scan is a read-then-write sequence with no
//! locking, so concurrent invocations against the same output directory
//! can race; single-invocation use is the supported mode.

use crate::addon::manifest::{ModuleKind, PackManifest};
use crate::error::{Error, Result};
use crate::recipe::RecipeDocument;
use regex::Regex;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// File extension of addon archives
pub const ADDON_EXTENSION: &str = "mcaddon";

/// Clone `template` into a new archive with `document` injected
///
/// The document is written as `<recipe_stem>.json` into the `recipes/`
/// directory of the template's behavior pack (the directory is created
/// if absent; an existing file of that name is overwritten, so re-runs
/// for the same input are idempotent). The new archive lands in
/// `output_dir` as `<base_name>_<NNN>.mcaddon` with NNN one past the
/// highest serial already present. Returns the new archive's path.
pub fn inject(
    template: &Path,
    document: &RecipeDocument,
    recipe_stem: &str,
    base_name: &str,
    output_dir: &Path,
) -> Result<PathBuf> {
    let workspace = tempfile::tempdir()?;

    debug!(
        "Extracting {} into workspace {}",
        template.display(),
        workspace.path().display()
    );
    let file = match File::open(template) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(Error::NotFound(template.to_path_buf()));
        }
        Err(err) => return Err(err.into()),
    };
    let mut archive = ZipArchive::new(file)?;
    archive.extract(workspace.path())?;

    let pack_dir = find_data_pack(workspace.path())?
        .ok_or_else(|| Error::PackNotFound(template.to_path_buf()))?;
    debug!("Selected behavior pack at {}", pack_dir.display());

    let recipes_dir = pack_dir.join("recipes");
    fs::create_dir_all(&recipes_dir)?;

    let recipe_path = recipes_dir.join(format!("{recipe_stem}.json"));
    let mut json = serde_json::to_string_pretty(document)?;
    json.push('\n');
    fs::write(&recipe_path, json)?;

    let serial = next_serial(output_dir, base_name)?;
    let output_path = output_dir.join(format!("{base_name}_{serial:03}.{ADDON_EXTENSION}"));

    write_archive(workspace.path(), &output_path)?;
    debug!("Wrote {}", output_path.display());
    Ok(output_path)
}

/// First top-level directory whose manifest declares a `data` module
///
/// First-match in directory iteration order, not best-match; manifests
/// that fail to parse are skipped.
fn find_data_pack(root: &Path) -> Result<Option<PathBuf>> {
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }
        let manifest_path = path.join("manifest.json");
        if !manifest_path.exists() {
            continue;
        }
        let content = fs::read_to_string(&manifest_path)?;
        let manifest = match PackManifest::parse(&content) {
            Ok(manifest) => manifest,
            Err(err) => {
                debug!("Skipping {}: {err}", manifest_path.display());
                continue;
            }
        };
        if manifest.has_module(ModuleKind::Data) {
            return Ok(Some(path));
        }
    }
    Ok(None)
}

/// Next free serial for `<base_name>_<NNN>.mcaddon` files in `dir`
///
/// One past the highest serial found, so gaps are never reused; 1 when
/// no numbered file exists yet.
pub fn next_serial(dir: &Path, base_name: &str) -> Result<u32> {
    let pattern = Regex::new(&format!(
        r"^{}_(\d{{3}})\.{}$",
        regex::escape(base_name),
        ADDON_EXTENSION
    ))
    .unwrap();

    let mut max_serial = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if let Some(captures) = pattern.captures(name) {
            let serial: u32 = captures[1].parse().unwrap_or(0);
            max_serial = max_serial.max(serial);
        }
    }
    Ok(max_serial + 1)
}

/// Package the workspace tree into a new archive at `output_path`
///
/// Entries are stored uncompressed and written in sorted traversal
/// order, so identical trees produce identical archives. Only files are
/// written; directory structure is implied by entry paths.
fn write_archive(root: &Path, output_path: &Path) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(io::Error::other)?;
        let name = relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        writer.start_file(name, options)?;
        let mut source = File::open(entry.path())?;
        io::copy(&mut source, &mut writer)?;
    }

    writer.finish()?;
    Ok(())
}

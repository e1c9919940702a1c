// tests/common/mod.rs

//! Shared test utilities for integration tests.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

pub const BEHAVIOR_MANIFEST: &str = r#"{
    "format_version": 2,
    "header": {
        "name": "Test Behavior Pack",
        "description": "Fixture",
        "uuid": "11111111-1111-1111-1111-111111111111",
        "version": [1, 0, 0]
    },
    "modules": [
        {
            "type": "data",
            "uuid": "22222222-2222-2222-2222-222222222222",
            "version": [1, 0, 0]
        }
    ]
}"#;

pub const RESOURCE_MANIFEST: &str = r#"{
    "format_version": 2,
    "header": {
        "name": "Test Resource Pack",
        "uuid": "33333333-3333-3333-3333-333333333333",
        "version": [1, 0, 0]
    },
    "modules": [
        {
            "type": "resources",
            "uuid": "44444444-4444-4444-4444-444444444444",
            "version": [1, 0, 0]
        }
    ]
}"#;

/// Write a template addon archive with the given entries.
///
/// Entries are (archive path, content) pairs; parent directories are
/// implied by the paths.
pub fn write_addon(path: &Path, entries: &[(&str, &str)]) {
    let file = File::create(path).unwrap();
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    for (name, content) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
}

/// Write a typical two-pack template: behavior pack plus resource pack.
pub fn write_template_addon(path: &Path) {
    write_addon(
        path,
        &[
            ("bp/manifest.json", BEHAVIOR_MANIFEST),
            ("rp/manifest.json", RESOURCE_MANIFEST),
            ("rp/textures/terrain_texture.json", "{}"),
        ],
    );
}

/// All entry names in an archive, in stored order.
pub fn archive_names(path: &Path) -> Vec<String> {
    let archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
    archive.file_names().map(str::to_string).collect()
}

/// Content of one entry in an archive.
pub fn archive_entry(path: &Path, name: &str) -> String {
    let mut archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    content
}

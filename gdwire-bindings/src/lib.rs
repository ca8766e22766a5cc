/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Locates the engine's class database (`extension_api.json`) for the code generator, plus small build-script helpers.

mod watch;

use std::borrow::Cow;
use std::path::Path;

use nanoserde::DeJson;

pub use watch::StopWatch;

/// Environment variable naming the JSON file, with the `api-custom-json` feature.
pub const API_JSON_ENV: &str = "GDWIRE_API_JSON";

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Loading

#[cfg(not(feature = "api-custom-json"))]
mod source {
    use super::*;

    const BUNDLED: &str = include_str!("../res/extension_api.json");

    pub fn load_extension_api_json(watch: &mut StopWatch) -> Cow<'static, str> {
        watch.record("load_json_bundled");
        Cow::Borrowed(BUNDLED)
    }

    pub fn emit_rerun_hints() {}
}

#[cfg(feature = "api-custom-json")]
mod source {
    use super::*;

    pub fn load_extension_api_json(watch: &mut StopWatch) -> Cow<'static, str> {
        let path = std::env::var(API_JSON_ENV).unwrap_or_else(|_| {
            panic!("feature `api-custom-json` requires the environment variable {API_JSON_ENV} to point to extension_api.json")
        });

        let json = std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read extension API from `{path}`: {e}"));
        watch.record("load_json_custom");

        Cow::Owned(json)
    }

    pub fn emit_rerun_hints() {
        println!("cargo:rerun-if-env-changed={API_JSON_ENV}");
        if let Ok(path) = std::env::var(API_JSON_ENV) {
            println!("cargo:rerun-if-changed={path}");
        }
    }
}

pub use source::{emit_rerun_hints, load_extension_api_json};

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Version

/// Engine version an API file was dumped from.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct GodotVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
    pub full_string: String,
}

#[derive(DeJson)]
struct HeaderOnly {
    header: JsonHeaderVersion,
}

#[derive(DeJson)]
struct JsonHeaderVersion {
    version_major: u8,
    version_minor: u8,
    version_patch: u8,
    version_full_name: String,
}

/// Reads the header of an `extension_api.json` document.
pub fn api_version(json: &str) -> GodotVersion {
    let parsed: HeaderOnly =
        DeJson::deserialize_json(json).unwrap_or_else(|e| panic!("malformed extension API header: {e}"));

    let h = parsed.header;
    GodotVersion {
        major: h.version_major,
        minor: h.version_minor,
        patch: h.version_patch,
        full_string: h.version_full_name,
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Filesystem

pub fn clear_dir(dir: &Path, watch: &mut StopWatch) {
    if dir.exists() {
        remove_dir_all_reliable(dir);
        watch.record("delete_gen_dir");
    }
    std::fs::create_dir_all(dir).unwrap_or_else(|e| panic!("failed to create dir: {e}"));
}

/// Removes a directory, retrying a few times; virus scanners and IDE indexers occasionally hold files briefly.
pub fn remove_dir_all_reliable(path: &Path) {
    let mut retry_count = 0;

    while path.exists() {
        match std::fs::remove_dir_all(path) {
            Ok(_) => break,
            Err(err) => {
                assert_ne!(
                    retry_count,
                    5,
                    "cannot remove directory: {path_display} after 5 tries with error: {err}",
                    path_display = path.display()
                );
                retry_count += 1;
                std::thread::sleep(std::time::Duration::from_millis(10));
            }
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_version_is_parsed() {
        let json = r#"{
            "header": {
                "version_major": 4, "version_minor": 2, "version_patch": 1,
                "version_status": "stable", "version_build": "official",
                "version_full_name": "Godot Engine v4.2.1.stable.official"
            },
            "classes": []
        }"#;

        let version = api_version(json);
        assert_eq!((version.major, version.minor, version.patch), (4, 2, 1));
        assert_eq!(version.full_string, "Godot Engine v4.2.1.stable.official");
    }

    #[cfg(not(feature = "api-custom-json"))]
    #[test]
    fn bundled_json_is_godot_4() {
        let mut watch = StopWatch::start();
        let json = load_extension_api_json(&mut watch);

        assert_eq!(api_version(&json).major, 4);
    }
}

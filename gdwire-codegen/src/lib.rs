/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Code generator for the engine class API.
//!
//! Pipeline: JSON models (`extension_api.json`) -> [`Context`] lookup tables -> domain models -> token streams per file. Run
//! from the build script of `gdwire-core`.

mod context;
mod conv;
mod generator;
mod models;
mod special_cases;
mod util;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use proc_macro2::TokenStream;

use crate::context::Context;
use crate::generator::classes;
use crate::models::domain::ExtensionApi;
use crate::models::json::load_extension_api;

pub type SubmitFn = dyn FnMut(PathBuf, TokenStream);

fn submit_fn(path: PathBuf, tokens: TokenStream) {
    write_file(&path, tokens.to_string());
}

fn write_file(path: &Path, contents: String) {
    let dir = path.parent().expect("generated file has a parent directory");
    let _ = std::fs::create_dir_all(dir);

    std::fs::write(path, contents)
        .unwrap_or_else(|e| panic!("failed to write code file to {};\n\t{}", path.display(), e));
}

/// Generates all files under `core_gen_path`, which is cleared first.
pub fn generate_core_files(core_gen_path: &Path) {
    let mut watch = gdwire_bindings::StopWatch::start();
    gdwire_bindings::clear_dir(core_gen_path, &mut watch);

    let json_api = load_extension_api(&mut watch);
    let ctx = Context::build_from_api(&json_api);
    watch.record("build_context");

    let api = ExtensionApi::from_json(&json_api, &ctx);
    watch.record("map_domain_models");

    generator::generate_core_mod_file(core_gen_path, &mut submit_fn);
    generator::generate_core_central_file(&api, core_gen_path, &mut submit_fn);
    watch.record("generate_central_files");

    generator::generate_global_enums_file(&api, core_gen_path, &mut submit_fn);
    watch.record("generate_global_enums");

    let classes_path = core_gen_path.join("classes");
    let modules = classes::generate_class_files(&api, &classes_path, &mut submit_fn);
    generator::generate_classes_mod_file(&modules, &classes_path, &mut submit_fn);
    watch.record("generate_class_files");

    rustfmt_if_needed(core_gen_path);
    watch.record("rustfmt");

    watch.write_stats_to(&core_gen_path.join("codegen-stats.txt"));
    gdwire_bindings::emit_rerun_hints();
}

#[cfg(feature = "codegen-rustfmt")]
fn rustfmt_if_needed(gen_path: &Path) {
    let mut files = vec![];
    collect_rust_files(gen_path, &mut files);
    println!("Format {} generated files...", files.len());

    // rustfmt accepts several files at once; chunk to stay below command line limits.
    for chunk in files.chunks(50) {
        let mut process = std::process::Command::new("rustfmt");
        process.arg("--edition").arg("2021");
        process.args(chunk);

        match process.output() {
            Ok(output) if output.status.success() => {}
            Ok(output) => panic!(
                "rustfmt failed on generated code:\n{}",
                String::from_utf8_lossy(&output.stderr)
            ),
            Err(e) => panic!("failed to run rustfmt: {e}"),
        }
    }
}

#[cfg(feature = "codegen-rustfmt")]
fn collect_rust_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let entries = std::fs::read_dir(dir).unwrap_or_else(|e| panic!("failed to read {}: {e}", dir.display()));
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rust_files(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

#[cfg(not(feature = "codegen-rustfmt"))]
fn rustfmt_if_needed(_gen_path: &Path) {}

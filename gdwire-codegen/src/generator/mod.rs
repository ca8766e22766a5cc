/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::Path;

use crate::models::domain::ExtensionApi;
use crate::SubmitFn;

pub mod central_files;
pub mod classes;
pub mod docs;
pub mod enums;
pub mod functions_common;
pub mod method_tables;
pub mod signals;
pub mod virtual_traits;

// ----------------------------------------------------------------------------------------------------------------------------------------------

// Class files are generated in `classes`.

pub fn generate_core_mod_file(gen_path: &Path, submit_fn: &mut SubmitFn) {
    submit_fn(gen_path.join("mod.rs"), central_files::make_core_mod_file());
}

pub fn generate_core_central_file(api: &ExtensionApi, gen_path: &Path, submit_fn: &mut SubmitFn) {
    submit_fn(gen_path.join("central.rs"), central_files::make_core_central_file(api));
}

pub fn generate_global_enums_file(api: &ExtensionApi, gen_path: &Path, submit_fn: &mut SubmitFn) {
    submit_fn(
        gen_path.join("global_enums.rs"),
        central_files::make_global_enums_file(api),
    );
}

pub fn generate_classes_mod_file(
    modules: &[classes::GeneratedClassModule],
    classes_path: &Path,
    submit_fn: &mut SubmitFn,
) {
    submit_fn(
        classes_path.join("mod.rs"),
        classes::make_class_module_file(modules),
    );
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::Path;

fn main() {
    // Generated next to the sources, so that IDEs pick up the symbols. The generator clears the directory first.
    let gen_path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/src/gen"));

    gdwire_codegen::generate_core_files(gen_path);
    println!("cargo:rerun-if-changed=build.rs");
}

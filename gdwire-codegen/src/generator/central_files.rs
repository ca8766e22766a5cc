/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use proc_macro2::{Literal, TokenStream};
use quote::quote;

use crate::generator::enums;
use crate::models::domain::ExtensionApi;

/// `gen/mod.rs`; mirrors the file structure.
pub fn make_core_mod_file() -> TokenStream {
    quote! {
        pub mod central;
        pub mod classes;
        pub mod global_enums;
    }
}

/// `gen/central.rs`: version of the API the code was generated from.
pub fn make_core_central_file(api: &ExtensionApi) -> TokenStream {
    let version = &api.godot_version;
    let major = Literal::u8_unsuffixed(version.major);
    let minor = Literal::u8_unsuffixed(version.minor);
    let patch = Literal::u8_unsuffixed(version.patch);
    let version_string = &version.version_string;
    let class_count = api.classes.len();

    quote! {
        /// Engine version of the class database used for code generation, as `(major, minor, patch)`.
        pub const GENERATED_API_VERSION: (u8, u8, u8) = (#major, #minor, #patch);

        /// Full version string of the class database used for code generation.
        pub const GENERATED_API_VERSION_STRING: &str = #version_string;

        /// Number of engine classes with generated bindings.
        pub const GENERATED_CLASS_COUNT: usize = #class_count;
    }
}

/// `gen/global_enums.rs`: enums that do not belong to a class, such as `Error`.
pub fn make_global_enums_file(api: &ExtensionApi) -> TokenStream {
    let enums = enums::make_enums(&api.global_enums);

    quote! {
        #enums
    }
}

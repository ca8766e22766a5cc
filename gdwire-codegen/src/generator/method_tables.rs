/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Per-class tables of method binds, loaded from the class database on first use.

use proc_macro2::TokenStream;
use quote::quote;

use crate::models::domain::Class;

/// `MethodTable` struct, its loader and the `method_table()` accessor of a class module.
///
/// Empty if the class has no bindable methods.
pub fn make_method_table(class: &Class) -> TokenStream {
    if class.methods.is_empty() {
        return TokenStream::new();
    }

    let godot_class_name = &class.name.godot_ty;
    let fields = class.methods.iter().map(|m| &m.rust_name);
    let inits = class.methods.iter().map(|m| {
        let field = &m.rust_name;
        let godot_name = &m.godot_name;
        let hash = m.hash;
        quote! {
            #field: crate::meta::load_method_bind(&class_name, #godot_name, #hash),
        }
    });

    quote! {
        struct MethodTable {
            #( #fields: sys::GDExtensionMethodBindPtr, )*
        }

        // SAFETY: method binds are immutable engine handles, valid for the lifetime of the engine.
        unsafe impl Sync for MethodTable {}
        unsafe impl Send for MethodTable {}

        impl MethodTable {
            fn load() -> Self {
                sys::out!("Load method table of {}", #godot_class_name);
                let class_name = crate::builtin::StringName::from(#godot_class_name);

                Self {
                    #( #inits )*
                }
            }
        }

        fn method_table() -> &'static MethodTable {
            static TABLE: std::sync::OnceLock<MethodTable> = std::sync::OnceLock::new();
            TABLE.get_or_init(MethodTable::load)
        }
    }
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Meta-information about engine types: class names, method binds, conversion errors, registered signatures.

mod class_name;
mod godot_type;
mod property_info;

pub mod error;

pub use class_name::ClassName;
pub use godot_type::GodotType;
pub use property_info::PropertyInfo;

use crate::builtin::StringName;
use crate::sys;

/// Fetches the method bind of `class_name::method_name` from the class database.
///
/// Called once per method when a class's method table is first used.
///
/// # Panics
/// If the engine has no method with this name and hash, i.e. the running engine is incompatible with the generated API.
#[doc(hidden)]
pub fn load_method_bind(class_name: &StringName, method_name: &str, hash: i64) -> sys::GDExtensionMethodBindPtr {
    let method = StringName::from(method_name);

    // SAFETY: both names are valid StringNames for the duration of the call.
    let method_bind = unsafe {
        sys::interface_fn!(classdb_get_method_bind)(class_name.string_sys(), method.string_sys(), hash)
    };

    assert!(
        !method_bind.is_null(),
        "failed to load method {class_name}::{method_name} (hash {hash}); engine may be incompatible with the generated API"
    );
    method_bind
}

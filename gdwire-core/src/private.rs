/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Symbols used by generated code and proc-macros. Not part of the public API.

use std::panic::{catch_unwind, AssertUnwindSafe};

pub use crate::gen::classes::class_macros;
pub use crate::registry::callbacks;
pub use crate::registry::method::{register_signal, reject_varcall, ClassMethodInfo};
pub use crate::registry::plugin::{ClassPlugin, PluginItem};
pub use crate::storage::as_storage;

use crate::obj::GodotClass;
use crate::sys;

// If someone forgets #[godot_api], this causes a compile error, rather than virtual functions not being called at runtime.
#[allow(non_camel_case_types)]
#[diagnostic::on_unimplemented(
    message = "`impl` blocks for engine virtual traits must be annotated with #[godot_api]",
    label = "missing #[godot_api] before `impl`",
    note = "without it, the engine would never call the overridden methods"
)]
pub trait You_forgot_the_attribute__godot_api {}

/// Implemented by `#[godot_api] impl I<Class> for T`; lists the virtual methods `T` overrides.
pub trait ImplementsVirtuals: GodotClass {
    /// Rust names of overridden virtual methods, e.g. `"estimate_cost"`.
    const OVERRIDDEN: &'static [&'static str];

    /// Trampoline for the engine virtual `name`, or `None` if not overridden.
    fn __virtual_call(name: &str) -> sys::GDExtensionClassCallVirtual;
}

/// Implemented by `#[godot_api] impl T`; registers the `#[func]` methods and `#[signal]` declarations of `T`.
pub trait ImplementsGodotApi: GodotClass {
    fn __register_methods();
}

sys::plugin_registry!(pub __GODOT_PLUGIN_REGISTRY: ClassPlugin);

pub(crate) fn iterate_plugins(mut visitor: impl FnMut(&ClassPlugin)) {
    sys::plugin_foreach!(__GODOT_PLUGIN_REGISTRY; visitor);
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Panic handling

/// Executes `code`. If it panics, the panic is caught and reported to the engine.
///
/// Used at every boundary where the engine calls into Rust, since unwinding across `extern "C"` aborts the process.
/// Returns the panic message as error.
pub fn handle_panic<E, F, R, S>(error_context: E, code: F) -> Result<R, String>
where
    E: FnOnce() -> S,
    F: FnOnce() -> R,
    S: std::fmt::Display,
{
    match catch_unwind(AssertUnwindSafe(code)) {
        Ok(result) => Ok(result),
        Err(err) => {
            let msg = extract_panic_message(err.as_ref());
            crate::godot_error!("Rust function panicked: {}\n  Context: {}", msg, error_context());
            Err(msg)
        }
    }
}

fn extract_panic_message(err: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = err.downcast_ref::<&'static str>() {
        s.to_string()
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else {
        format!("(panic of type ID {:?})", err.type_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_panic_passes_result() {
        let result = handle_panic(|| "no panic", || 7);
        assert_eq!(result, Ok(7));
    }

    #[test]
    fn handle_panic_catches_message() {
        let value = String::from("user code");
        let result: Result<(), String> = handle_panic(|| "test", || panic!("failed in {value}"));
        assert_eq!(result, Err("failed in user code".to_string()));
    }

    #[test]
    fn panic_message_of_unknown_payload() {
        let payload: Box<dyn std::any::Any + Send> = Box::new(42_u8);
        assert!(extract_panic_message(payload.as_ref()).starts_with("(panic of type ID"));
    }
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Low level bindings to the GDExtension C-ABI.
//!
//! This crate holds the hand-written plumbing every generated class funnels through: the interface table loaded at startup,
//! [`CallFrame`] argument/return marshalling, and [`PointerTag`] ownership conventions. Higher-level types live in
//! `gdwire-core`.

#![cfg_attr(test, allow(clippy::undocumented_unsafe_blocks))]

mod binding;
mod global;
mod interface;
mod opaque;
mod plugins;
mod toolbox;
mod variant_type;

pub mod callframe;
pub mod pointers;

pub use binding::{BuiltinLifecycleTable, GodotVersion, PtrConstructor, PtrDestructor};
pub use callframe::CallFrame;
pub use global::{Global, GlobalGuard};
pub use interface::*;
pub use opaque::Opaque;
pub use pointers::{PointerTag, Tagged};
pub use toolbox::*;
pub use variant_type::VariantType;

use binding::GodotBinding;

/// How an engine-to-extension call passes its arguments.
///
/// Regular ptrcalls (`object_method_bind_ptrcall`) and virtual calls agree on all types except `RefCounted` objects: ptrcalls
/// pass `Object**`, whereas virtual calls pass `Ref<T>*`, which must be unwrapped with `ref_get_object`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PtrcallType {
    Standard,
    Virtual,
}

/// Loads the interface table and builtin lifecycle functions.
///
/// # Safety
/// - `get_proc_address` must be the function handed to the extension entry point.
/// - Must be called once, before any other function of this crate, from the main thread.
pub unsafe fn initialize(
    get_proc_address: GDExtensionInterfaceGetProcAddress,
    library: GDExtensionClassLibraryPtr,
) {
    out!("Initialize gdwire...");

    let get_proc_address = unwrap_interface_fn(get_proc_address, "get_proc_address");
    let interface = GDExtensionInterface::load(get_proc_address);
    let binding = GodotBinding::new(interface, library);

    out!("Loaded interface, engine version {}", binding.version());
    GodotBinding::install(binding);
}

/// Whether [`initialize()`] has run.
pub fn is_initialized() -> bool {
    GodotBinding::is_installed()
}

/// The interface table.
///
/// # Panics
/// If the binding is not initialized.
#[inline]
pub fn get_interface() -> &'static GDExtensionInterface {
    GodotBinding::get().interface()
}

/// Class library pointer passed to the entry point; identifies this extension in registration calls.
#[inline]
pub fn get_library() -> GDExtensionClassLibraryPtr {
    GodotBinding::get().library()
}

#[inline]
pub fn builtin_lifecycle_api() -> &'static BuiltinLifecycleTable {
    GodotBinding::get().lifecycle()
}

pub fn godot_version() -> &'static GodotVersion {
    GodotBinding::get().version()
}

/// Converts a Rust bool to the C-ABI representation.
#[inline]
pub const fn conv_bool(value: bool) -> GDExtensionBool {
    value as GDExtensionBool
}

pub const SYS_TRUE: GDExtensionBool = 1;
pub const SYS_FALSE: GDExtensionBool = 0;

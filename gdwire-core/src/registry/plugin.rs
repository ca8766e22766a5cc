/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ffi::c_void;

use crate::init::InitLevel;
use crate::meta::ClassName;
use crate::sys;

pub type CreateFn = unsafe extern "C" fn(class_userdata: *mut c_void) -> sys::GDExtensionObjectPtr;

pub type FreeFn = unsafe extern "C" fn(class_userdata: *mut c_void, instance: sys::GDExtensionClassInstancePtr);

pub type GetVirtualFn = unsafe extern "C" fn(
    class_userdata: *mut c_void,
    name: sys::GDExtensionConstStringNamePtr,
) -> sys::GDExtensionClassCallVirtual;

/// Piece of information about a user class, emitted by a proc-macro.
///
/// A class is described by several plugins (one per macro invocation); registration merges those sharing a class name.
#[derive(Clone, Debug)]
pub struct ClassPlugin {
    pub class_name: ClassName,
    pub init_level: InitLevel,
    pub item: PluginItem,
}

/// Type-specific part of a [`ClassPlugin`].
#[derive(Clone, Debug)]
pub enum PluginItem {
    /// From `#[derive(GodotClass)]`.
    Struct {
        /// Engine class the user class extends.
        base_class_name: ClassName,

        /// Engine constructor, present with `#[class(init)]`.
        generated_create_fn: Option<CreateFn>,

        /// Destroys the Rust instance along with its engine object.
        free_fn: FreeFn,
    },

    /// From `#[godot_api] impl I<Class> for T`.
    ITraitImpl {
        /// Engine constructor, present if the impl overrides `init()`.
        user_create_fn: Option<CreateFn>,

        /// Looks up the trampoline of an overridden virtual method by engine name.
        get_virtual_fn: GetVirtualFn,
    },

    /// From `#[godot_api] impl T`.
    InherentImpl {
        /// Registers the `#[func]` methods and `#[signal]` declarations of the impl, once the class itself is registered.
        register_methods_fn: fn(),
    },
}

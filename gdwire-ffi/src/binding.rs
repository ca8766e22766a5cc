/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Process-wide binding storage.
//!
//! Holds the interface table, the class library pointer and builtin lifecycle functions. Initialized exactly once when the
//! extension is loaded; every later access is a plain read.

use std::ffi::{c_char, CStr};
use std::fmt;
use std::sync::OnceLock;

use crate as sys;
use crate::{GDExtensionInterface, VariantType};

pub(crate) struct GodotBinding {
    interface: GDExtensionInterface,
    library: sys::GDExtensionClassLibraryPtr,
    lifecycle: BuiltinLifecycleTable,
    version: GodotVersion,
}

// SAFETY: the binding is written once during load and only read afterwards. The raw pointers it holds are handles owned by
// the engine and are never dereferenced on the Rust side.
unsafe impl Sync for GodotBinding {}
unsafe impl Send for GodotBinding {}

static BINDING: OnceLock<GodotBinding> = OnceLock::new();

impl GodotBinding {
    pub(crate) unsafe fn new(
        interface: GDExtensionInterface,
        library: sys::GDExtensionClassLibraryPtr,
    ) -> Self {
        let lifecycle = BuiltinLifecycleTable::load(&interface);
        let version = GodotVersion::query(&interface);

        Self {
            interface,
            library,
            lifecycle,
            version,
        }
    }

    /// Stores the binding. Panics on a second call.
    pub(crate) fn install(binding: GodotBinding) {
        if BINDING.set(binding).is_err() {
            panic!("initialize must only be called once");
        }
    }

    #[inline]
    pub(crate) fn get() -> &'static GodotBinding {
        match BINDING.get() {
            Some(binding) => binding,
            None => panic!(
                "Godot engine not available; make sure the extension was loaded before calling into the engine"
            ),
        }
    }

    pub(crate) fn is_installed() -> bool {
        BINDING.get().is_some()
    }

    pub(crate) fn interface(&self) -> &GDExtensionInterface {
        &self.interface
    }

    pub(crate) fn library(&self) -> sys::GDExtensionClassLibraryPtr {
        self.library
    }

    pub(crate) fn lifecycle(&self) -> &BuiltinLifecycleTable {
        &self.lifecycle
    }

    pub(crate) fn version(&self) -> &GodotVersion {
        &self.version
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

pub type PtrConstructor = unsafe extern "C" fn(sys::GDExtensionUninitializedTypePtr, *const sys::GDExtensionConstTypePtr);
pub type PtrDestructor = unsafe extern "C" fn(sys::GDExtensionTypePtr);

/// Constructors and destructors of the engine-managed builtin types that cross the wire.
///
/// Constructor indices follow `extension_api.json`: 0 is the default constructor, 1 the copy constructor, higher indices
/// convert from other builtins.
pub struct BuiltinLifecycleTable {
    pub string_construct_default: PtrConstructor,
    pub string_construct_copy: PtrConstructor,
    pub string_from_string_name: PtrConstructor,
    pub string_destroy: PtrDestructor,
    pub string_name_construct_default: PtrConstructor,
    pub string_name_construct_copy: PtrConstructor,
    pub string_name_from_string: PtrConstructor,
    pub string_name_destroy: PtrDestructor,
    pub callable_construct_default: PtrConstructor,
    pub callable_construct_copy: PtrConstructor,
    pub callable_destroy: PtrDestructor,
}

impl BuiltinLifecycleTable {
    unsafe fn load(interface: &GDExtensionInterface) -> Self {
        let get_ctor = sys::unwrap_interface_fn(interface.variant_get_ptr_constructor, "variant_get_ptr_constructor");
        let get_dtor = sys::unwrap_interface_fn(interface.variant_get_ptr_destructor, "variant_get_ptr_destructor");

        let ctor = |ty: VariantType, index: i32| -> PtrConstructor {
            match get_ctor(ty.sys(), index) {
                Some(f) => f,
                None => panic!("failed to load constructor {index} of builtin type {ty:?}"),
            }
        };
        let dtor = |ty: VariantType| -> PtrDestructor {
            match get_dtor(ty.sys()) {
                Some(f) => f,
                None => panic!("failed to load destructor of builtin type {ty:?}"),
            }
        };

        Self {
            string_construct_default: ctor(VariantType::STRING, 0),
            string_construct_copy: ctor(VariantType::STRING, 1),
            string_from_string_name: ctor(VariantType::STRING, 2),
            string_destroy: dtor(VariantType::STRING),
            string_name_construct_default: ctor(VariantType::STRING_NAME, 0),
            string_name_construct_copy: ctor(VariantType::STRING_NAME, 1),
            string_name_from_string: ctor(VariantType::STRING_NAME, 2),
            string_name_destroy: dtor(VariantType::STRING_NAME),
            callable_construct_default: ctor(VariantType::CALLABLE, 0),
            callable_construct_copy: ctor(VariantType::CALLABLE, 1),
            callable_destroy: dtor(VariantType::CALLABLE),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Version of the running engine, as reported by `get_godot_version`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct GodotVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub full_string: String,
}

impl GodotVersion {
    unsafe fn query(interface: &GDExtensionInterface) -> Self {
        let get_version = sys::unwrap_interface_fn(interface.get_godot_version, "get_godot_version");

        let mut raw = sys::GDExtensionGodotVersion {
            major: 0,
            minor: 0,
            patch: 0,
            string: std::ptr::null(),
        };
        get_version(&mut raw);

        let full_string = if raw.string.is_null() {
            format!("{}.{}.{}", raw.major, raw.minor, raw.patch)
        } else {
            CStr::from_ptr(raw.string as *const c_char)
                .to_string_lossy()
                .into_owned()
        };

        Self {
            major: raw.major,
            minor: raw.minor,
            patch: raw.patch,
            full_string,
        }
    }

    /// Whether this runtime can serve an API generated for `major.minor`.
    pub fn supports_api(&self, major: u32, minor: u32) -> bool {
        self.major == major && self.minor >= minor
    }
}

impl fmt::Display for GodotVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_string)
    }
}

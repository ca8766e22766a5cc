/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::sys;

pub use crate::registry::class::registered_classes;

#[doc(hidden)]
pub unsafe fn __gdwire_load_library<E: ExtensionLibrary>(
    get_proc_address: sys::GDExtensionInterfaceGetProcAddress,
    library: sys::GDExtensionClassLibraryPtr,
    init: *mut sys::GDExtensionInitialization,
) -> sys::GDExtensionBool {
    let init_code = || {
        // SAFETY: called once, from the entry point the engine invokes on the main thread.
        unsafe { sys::initialize(get_proc_address, library) };
        check_api_version();

        let init_params = sys::GDExtensionInitialization {
            minimum_initialization_level: E::min_level().to_sys(),
            userdata: std::ptr::null_mut(),
            initialize: Some(ffi_initialize_layer::<E>),
            deinitialize: Some(ffi_deinitialize_layer::<E>),
        };

        // SAFETY: the engine passes a valid output parameter.
        unsafe { *init = init_params };
        sys::SYS_TRUE
    };

    let ctx = || "error when loading GDExtension library";
    crate::private::handle_panic(ctx, init_code).unwrap_or(sys::SYS_FALSE)
}

/// Warns if the running engine cannot serve the API that the bindings were generated for.
fn check_api_version() {
    let (major, minor, _) = crate::GENERATED_API_VERSION;
    let runtime = sys::godot_version();

    if !runtime.supports_api(major.into(), minor.into()) {
        crate::godot_warn!(
            "bindings were generated for engine {}, but runtime is {runtime}; method binds may be missing",
            crate::GENERATED_API_VERSION_STRING
        );
    }
}

unsafe extern "C" fn ffi_initialize_layer<E: ExtensionLibrary>(
    _userdata: *mut std::ffi::c_void,
    init_level: sys::GDExtensionInitializationLevel,
) {
    let Some(level) = InitLevel::try_from_sys(init_level) else {
        crate::godot_error!("unknown initialization level {init_level}");
        return;
    };
    let ctx = || format!("failed to initialize GDExtension level `{level:?}`");

    // Swallow panics; the engine has no way to react to them.
    let _ = crate::private::handle_panic(ctx, || {
        crate::registry::class::auto_register_classes(level, E::min_level());
        E::on_level_init(level);
    });
}

unsafe extern "C" fn ffi_deinitialize_layer<E: ExtensionLibrary>(
    _userdata: *mut std::ffi::c_void,
    init_level: sys::GDExtensionInitializationLevel,
) {
    let Some(level) = InitLevel::try_from_sys(init_level) else {
        return;
    };
    let ctx = || format!("failed to deinitialize GDExtension level `{level:?}`");

    let _ = crate::private::handle_panic(ctx, || {
        E::on_level_deinit(level);
        crate::registry::class::unregister_classes(level);
    });
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Defines the entry point for a GDExtension Rust library.
///
/// Every library should have exactly one implementation of this trait, annotated with the `#[gdextension]` attribute. User
/// classes marked with `#[derive(GodotClass)]` are registered automatically, at the level of their engine base class. Classes
/// whose base belongs to a level below [`min_level()`][Self::min_level] are registered at `min_level()` instead.
///
/// ```ignore
/// struct MyExtension;
///
/// #[gdextension]
/// unsafe impl ExtensionLibrary for MyExtension {}
/// ```
///
/// # Safety
/// The library is loaded into the engine process, and its code runs on the engine's main thread. No other library in the
/// process may export the same entry symbol.
pub unsafe trait ExtensionLibrary {
    /// Lowest initialization level the engine runs for this library.
    fn min_level() -> InitLevel {
        InitLevel::Scene
    }

    /// Custom logic when a level is initialized, after this level's classes are registered.
    fn on_level_init(level: InitLevel) {
        let _ = level;
    }

    /// Custom logic when a level is deinitialized, before this level's classes are unregistered.
    fn on_level_deinit(level: InitLevel) {
        let _ = level;
    }
}

/// Stage of the engine's startup (and in reverse order, shutdown) in which classes become available.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum InitLevel {
    /// Core engine types; the first level to load.
    Core,

    /// Servers such as rendering, physics or text.
    Servers,

    /// Scene-related classes, e.g. `Node`. Default for extensions.
    Scene,

    /// Editor-only classes; not loaded when the game runs standalone.
    Editor,
}

impl InitLevel {
    /// # Panics
    /// If `level` is not a known level.
    #[doc(hidden)]
    pub fn from_sys(level: sys::GDExtensionInitializationLevel) -> Self {
        match Self::try_from_sys(level) {
            Some(level) => level,
            None => panic!("invalid initialization level {level}"),
        }
    }

    #[doc(hidden)]
    pub fn try_from_sys(level: sys::GDExtensionInitializationLevel) -> Option<Self> {
        let level = match level {
            sys::GDEXTENSION_INITIALIZATION_CORE => Self::Core,
            sys::GDEXTENSION_INITIALIZATION_SERVERS => Self::Servers,
            sys::GDEXTENSION_INITIALIZATION_SCENE => Self::Scene,
            sys::GDEXTENSION_INITIALIZATION_EDITOR => Self::Editor,
            _ => return None,
        };
        Some(level)
    }

    #[doc(hidden)]
    pub fn to_sys(self) -> sys::GDExtensionInitializationLevel {
        match self {
            Self::Core => sys::GDEXTENSION_INITIALIZATION_CORE,
            Self::Servers => sys::GDEXTENSION_INITIALIZATION_SERVERS,
            Self::Scene => sys::GDEXTENSION_INITIALIZATION_SCENE,
            Self::Editor => sys::GDEXTENSION_INITIALIZATION_EDITOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_to_engine_values() {
        for level in [InitLevel::Core, InitLevel::Servers, InitLevel::Scene, InitLevel::Editor] {
            assert_eq!(InitLevel::from_sys(level.to_sys()), level);
        }

        assert_eq!(InitLevel::Scene.to_sys(), 2);
        assert_eq!(InitLevel::try_from_sys(4), None);
        assert!(InitLevel::Core < InitLevel::Editor);
    }
}

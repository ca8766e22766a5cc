/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::cell::RefCell;
use std::ffi::c_void;
use std::fmt;

use crate::sys;

/// Engine callable: a target the engine can invoke, e.g. a signal handler.
///
/// Only Rust closures without arguments are supported as targets.
#[repr(transparent)]
pub struct Callable {
    opaque: sys::Opaque<16>,
}

impl_builtin_lifecycle!(Callable; default: callable_construct_default, copy: callable_construct_copy, destroy: callable_destroy);

impl Callable {
    /// Callable that targets nothing; calling it fails.
    pub fn invalid() -> Self {
        Self::construct_default()
    }

    /// Wraps a Rust closure.
    ///
    /// `name` only shows up in diagnostics. The closure is owned by the engine-side callable and dropped together with its
    /// last copy. Calls with arguments are rejected with `GDEXTENSION_CALL_ERROR_TOO_MANY_ARGUMENTS`. A panicking closure,
    /// or a call re-entering the closure while it runs, reports `GDEXTENSION_CALL_ERROR_INVALID_METHOD`.
    pub fn from_fn<F>(name: &str, handler: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let userdata = Box::new(FnUserdata {
            name: name.to_string(),
            handler: RefCell::new(Box::new(handler)),
        });

        let mut info = sys::GDExtensionCallableCustomInfo {
            callable_userdata: Box::into_raw(userdata) as *mut c_void,
            token: sys::get_library(),
            object_id: 0,
            call_func: Some(rust_callable_call),
            is_valid_func: None,
            free_func: Some(rust_callable_free),
            hash_func: None,
            equal_func: None,
            less_than_func: None,
            to_string_func: None,
        };

        let create = sys::interface_fn!(callable_custom_create);

        // SAFETY: create takes ownership of the userdata box, releasing it through `free_func`.
        unsafe { Self::construct_with(|ptr| create(ptr, &mut info)) }
    }
}

impl Default for Callable {
    fn default() -> Self {
        Self::invalid()
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callable({:p})", self.sys())
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

struct FnUserdata {
    name: String,
    handler: RefCell<Box<dyn FnMut()>>,
}

unsafe extern "C" fn rust_callable_call(
    callable_userdata: *mut c_void,
    _args: *const sys::GDExtensionConstVariantPtr,
    arg_count: sys::GDExtensionInt,
    _ret: sys::GDExtensionVariantPtr,
    error: *mut sys::GDExtensionCallError,
) {
    // Shared access only: the handler may re-enter this callable.
    let userdata = &*(callable_userdata as *const FnUserdata);
    let name = &userdata.name;

    let status = if arg_count > 0 {
        (*error).argument = arg_count as i32;
        (*error).expected = 0;
        sys::GDEXTENSION_CALL_ERROR_TOO_MANY_ARGUMENTS
    } else if let Ok(mut handler) = userdata.handler.try_borrow_mut() {
        match crate::private::handle_panic(|| format!("callable `{name}`"), || handler()) {
            Ok(()) => sys::GDEXTENSION_CALL_OK,
            Err(_) => sys::GDEXTENSION_CALL_ERROR_INVALID_METHOD,
        }
    } else {
        crate::godot_error!("callable `{name}` called again while it is running");
        sys::GDEXTENSION_CALL_ERROR_INVALID_METHOD
    };

    (*error).error = status;
}

unsafe extern "C" fn rust_callable_free(callable_userdata: *mut c_void) {
    drop(Box::from_raw(callable_userdata as *mut FnUserdata));
}

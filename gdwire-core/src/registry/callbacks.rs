/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Callbacks that are passed as function pointers to the engine upon class registration.
//!
//! Re-exported to `crate::private`.
#![allow(clippy::missing_safety_doc)]

use std::ffi::c_void;

use crate::builtin::StringName;
use crate::obj::{cap, Base, GodotClass, InstanceId};
use crate::private::{handle_panic, ImplementsVirtuals};
use crate::storage::{self, InstanceStorage};
use crate::sys;

/// Engine-side default constructor.
///
/// If the `init()` constructor panics, null is returned.
pub unsafe extern "C" fn create<T: cap::GodotDefault>(_class_userdata: *mut c_void) -> sys::GDExtensionObjectPtr {
    create_custom(T::__godot_user_init).unwrap_or(std::ptr::null_mut())
}

/// Constructs the engine base object, then the Rust instance on top of it.
///
/// On panic in `make_user_instance`, the base object is destroyed and the panic message returned.
pub(crate) fn create_custom<T, F>(make_user_instance: F) -> Result<sys::GDExtensionObjectPtr, String>
where
    T: GodotClass,
    F: FnOnce(Base<T::Base>) -> T,
{
    let base_class_name = <T::Base as GodotClass>::class_name();
    let base_name = base_class_name.to_string_name();

    // SAFETY: the class name is a valid StringName for the duration of the call.
    let base_ptr = unsafe { sys::interface_fn!(classdb_construct_object)(base_name.string_sys()) };
    if base_ptr.is_null() {
        return Err(format!("engine could not construct base class {base_class_name}"));
    }

    // SAFETY: base_ptr was just constructed.
    let Some(instance_id) = (unsafe { InstanceId::of_object(base_ptr) }) else {
        return Err(format!("{base_class_name} object has no instance ID"));
    };

    // SAFETY: base_ptr is alive and will own the user instance.
    let base = unsafe { Base::from_sys(base_ptr) };
    let context = || format!("{}::init", T::class_name());
    let user_instance = match handle_panic(context, move || make_user_instance(base)) {
        Ok(instance) => instance,
        Err(msg) => {
            // SAFETY: no handle to the object has been given out.
            unsafe { sys::interface_fn!(object_destroy)(base_ptr) };
            return Err(msg);
        }
    };

    let storage = InstanceStorage::new(user_instance, base_ptr, instance_id);
    let instance_ptr = storage::into_instance_ptr(storage);
    let class_name = T::class_name().to_string_name();

    // SAFETY: the engine takes over the instance pointer, handing it back in `free()`.
    unsafe { sys::interface_fn!(object_set_instance)(base_ptr, class_name.string_sys(), instance_ptr) };
    storage::register_instance::<T>(instance_id, instance_ptr);

    sys::out!("Created {} as {instance_id}", T::class_name());
    Ok(base_ptr)
}

/// Engine-side destructor of the Rust instance, invoked while the engine object is destroyed.
pub unsafe extern "C" fn free<T: GodotClass>(_class_userdata: *mut c_void, instance: sys::GDExtensionClassInstancePtr) {
    {
        let storage = storage::as_storage::<T>(instance);
        sys::out!("Free {} at {:?}", T::class_name(), storage.base_ptr());
        storage::unregister_instance(storage.instance_id());

        // Guards still reference the storage; destroying it would leave them dangling.
        if storage.is_bound() {
            crate::godot_error!(
                "{} object {} destroyed while its Rust instance is bound; the instance is leaked",
                T::class_name(),
                storage.instance_id()
            );
            return;
        }
    }

    let _ = handle_panic(
        || format!("{}::drop", T::class_name()),
        || unsafe { storage::destroy_storage::<T>(instance) },
    );
}

/// Engine-side lookup of a virtual method, by engine name (e.g. `_ready`).
///
/// Returns null for methods that `T` does not override.
pub unsafe extern "C" fn get_virtual<T: ImplementsVirtuals>(
    _class_userdata: *mut c_void,
    name: sys::GDExtensionConstStringNamePtr,
) -> sys::GDExtensionClassCallVirtual {
    let name = StringName::clone_from_string_sys(name).to_string();

    handle_panic(
        || format!("{}::get_virtual({name})", T::class_name()),
        || T::__virtual_call(&name),
    )
    .unwrap_or(None)
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Rust-side instances of user classes.
//!
//! Each engine object of a user class owns one boxed [`InstanceStorage`], handed to the engine as class instance pointer.
//! The engine passes that pointer back on virtual calls. Lookups from a `Gd` go through the instance map, keyed by ID.

use std::any::TypeId;
use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashMap;
use std::ffi::c_void;

use crate::obj::{GodotClass, InstanceId};
use crate::sys;

/// Holds the user struct of one object, guarding borrows at runtime.
pub struct InstanceStorage<T: GodotClass> {
    user_instance: RefCell<T>,
    base_ptr: sys::GDExtensionObjectPtr,
    instance_id: InstanceId,
}

impl<T: GodotClass> InstanceStorage<T> {
    pub(crate) fn new(user_instance: T, base_ptr: sys::GDExtensionObjectPtr, instance_id: InstanceId) -> Self {
        sys::out!("    Storage::new  <{}> for {instance_id}", T::class_name());

        Self {
            user_instance: RefCell::new(user_instance),
            base_ptr,
            instance_id,
        }
    }

    /// # Panics
    /// If the instance is currently bound mutably.
    pub fn get(&self) -> Ref<'_, T> {
        match self.user_instance.try_borrow() {
            Ok(guard) => guard,
            Err(_) => panic!(
                "{} instance {} is already bound mutably; cannot bind it shared",
                T::class_name(),
                self.instance_id
            ),
        }
    }

    /// # Panics
    /// If the instance is currently bound, shared or mutably.
    pub fn get_mut(&self) -> RefMut<'_, T> {
        match self.user_instance.try_borrow_mut() {
            Ok(guard) => guard,
            Err(_) => panic!(
                "{} instance {} is already bound; cannot bind it mutably",
                T::class_name(),
                self.instance_id
            ),
        }
    }

    /// Whether a guard from [`get()`][Self::get] or [`get_mut()`][Self::get_mut] is alive.
    pub(crate) fn is_bound(&self) -> bool {
        self.user_instance.try_borrow_mut().is_err()
    }

    pub(crate) fn base_ptr(&self) -> sys::GDExtensionObjectPtr {
        self.base_ptr
    }

    pub(crate) fn instance_id(&self) -> InstanceId {
        self.instance_id
    }
}

impl<T: GodotClass> Drop for InstanceStorage<T> {
    fn drop(&mut self) {
        sys::out!("    Storage::drop <{}> for {}", T::class_name(), self.instance_id);
    }
}

/// Interprets the class instance pointer the engine passes to callbacks.
///
/// # Safety
/// `instance_ptr` must have been created by [`into_instance_ptr()`] for the same `T`, and not yet been destroyed.
pub unsafe fn as_storage<'a, T: GodotClass>(instance_ptr: sys::GDExtensionClassInstancePtr) -> &'a InstanceStorage<T> {
    &*(instance_ptr as *const InstanceStorage<T>)
}

/// Moves the storage to the heap, returning the class instance pointer handed to the engine.
pub(crate) fn into_instance_ptr<T: GodotClass>(storage: InstanceStorage<T>) -> sys::GDExtensionClassInstancePtr {
    Box::into_raw(Box::new(storage)) as sys::GDExtensionClassInstancePtr
}

/// Destroys a storage created by [`into_instance_ptr()`], dropping the user struct.
///
/// # Safety
/// `instance_ptr` must have been created by [`into_instance_ptr()`] for the same `T`; it must not be used afterward.
pub(crate) unsafe fn destroy_storage<T: GodotClass>(instance_ptr: sys::GDExtensionClassInstancePtr) {
    drop(Box::from_raw(instance_ptr as *mut InstanceStorage<T>));
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Instance map

struct MapEntry {
    instance_ptr: sys::SyncPtr<c_void>,
    type_id: TypeId,
    is_bound: unsafe fn(sys::GDExtensionClassInstancePtr) -> bool,
}

unsafe fn storage_is_bound<T: GodotClass>(instance_ptr: sys::GDExtensionClassInstancePtr) -> bool {
    as_storage::<T>(instance_ptr).is_bound()
}

static INSTANCE_MAP: sys::Global<HashMap<InstanceId, MapEntry>> = sys::Global::default();

pub(crate) fn register_instance<T: GodotClass>(instance_id: InstanceId, instance_ptr: sys::GDExtensionClassInstancePtr) {
    let entry = MapEntry {
        instance_ptr: sys::SyncPtr::new(instance_ptr),
        type_id: TypeId::of::<T>(),
        is_bound: storage_is_bound::<T>,
    };

    INSTANCE_MAP.lock().insert(instance_id, entry);
}

pub(crate) fn unregister_instance(instance_id: InstanceId) {
    INSTANCE_MAP.lock().remove(&instance_id);
}

/// Whether the user instance attached to object `instance_id` (of any class) is currently bound.
///
/// Objects without a user instance are never bound.
pub(crate) fn is_instance_bound(instance_id: InstanceId) -> bool {
    let (instance_ptr, is_bound) = {
        let map = INSTANCE_MAP.lock();
        match map.get(&instance_id) {
            Some(entry) => (entry.instance_ptr.get(), entry.is_bound),
            None => return false,
        }
    };

    // SAFETY: registered instances stay valid until unregistered in the free callback.
    unsafe { is_bound(instance_ptr) }
}

/// Storage of the user instance with the given ID, if one of type `T` exists.
///
/// # Safety
/// The returned reference must not outlive the object.
pub(crate) unsafe fn find_storage<'a, T: GodotClass>(instance_id: InstanceId) -> Option<&'a InstanceStorage<T>> {
    let instance_ptr = {
        let map = INSTANCE_MAP.lock();
        let entry = map.get(&instance_id)?;
        if entry.type_id != TypeId::of::<T>() {
            return None;
        }
        entry.instance_ptr.get()
    };

    Some(as_storage::<T>(instance_ptr))
}


/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::marker::PhantomData;
use std::mem::ManuallyDrop;

use sys::PointerTag;

use crate::classes::ref_counted;
use crate::obj::bounds::DynMemory;
use crate::obj::{GodotClass, InstanceId};
use crate::sys;

/// Untyped object handle with the ownership rules of `Gd<T>`.
///
/// The layout is shared with all generated class structs, so that `Gd<T>` can dereference to them:
/// * `cached_id == None`: the handle holds one reference of a reference-counted object, released on drop.
/// * `cached_id == Some(id)`: the handle does not control the lifetime; every access first checks that `id` is alive.
#[repr(C)]
pub struct RawGd<T: GodotClass> {
    obj: sys::GDExtensionObjectPtr,
    cached_id: Option<InstanceId>,
    _marker: PhantomData<*const T>,
}

impl<T: GodotClass> RawGd<T> {
    /// Adopts an object pointer according to its ownership tag.
    ///
    /// # Safety
    /// `tagged` must be null, or point to a live object of class `T` (or a subclass) obtained under the given convention.
    pub(crate) unsafe fn from_tagged(tagged: sys::Tagged) -> Option<Self> {
        let (obj, tag) = tagged.non_null()?;
        sys::out!("RawGd::from_tagged({obj:?}, {tag}) for {}", T::class_name());

        let is_ref_counted = <T::DynMemory as DynMemory>::is_ref_counted(obj);
        match tag {
            PointerTag::TransferredToEngine => {
                panic!("{} object was handed to the engine; the host cannot adopt it", T::class_name())
            }

            // The reference was counted on the engine side already.
            PointerTag::TransferredToHost => {}

            PointerTag::Borrowed | PointerTag::MustAssertInstanceId => {
                if is_ref_counted {
                    ref_counted_api(obj).reference();
                }
            }
        }

        Some(Self::with_strategy(obj, is_ref_counted))
    }

    /// Adopts a freshly constructed object; reference-counted objects receive their initial reference.
    ///
    /// # Safety
    /// `obj` must point to a live object of class `T` that no other handle refers to yet.
    pub(crate) unsafe fn from_new_object(obj: sys::GDExtensionObjectPtr) -> Self {
        let is_ref_counted = <T::DynMemory as DynMemory>::is_ref_counted(obj);
        if is_ref_counted {
            ref_counted_api(obj).init_ref();
        }

        Self::with_strategy(obj, is_ref_counted)
    }

    /// Handle that neither holds a reference nor releases anything, validating its instance ID on access.
    ///
    /// # Safety
    /// `obj` must point to a live object of class `T`.
    pub(crate) unsafe fn new_weak(obj: sys::GDExtensionObjectPtr) -> Self {
        let cached_id = match InstanceId::of_object(obj) {
            Some(id) => id,
            None => panic!("{} object at {obj:?} has no instance ID", T::class_name()),
        };

        Self {
            obj,
            cached_id: Some(cached_id),
            _marker: PhantomData,
        }
    }

    unsafe fn with_strategy(obj: sys::GDExtensionObjectPtr, is_ref_counted: bool) -> Self {
        if is_ref_counted {
            Self {
                obj,
                cached_id: None,
                _marker: PhantomData,
            }
        } else {
            Self::new_weak(obj)
        }
    }

    /// Object pointer without liveness check.
    pub(crate) fn obj_sys(&self) -> sys::GDExtensionObjectPtr {
        self.obj
    }

    /// Object pointer, panicking if the object has been freed.
    pub(crate) fn checked_obj_sys(&self) -> sys::GDExtensionObjectPtr {
        assert!(
            self.is_alive(),
            "{} object with {:?} has been freed; the handle is dead",
            T::class_name(),
            self.cached_id
        );
        self.obj
    }

    pub(crate) fn is_alive(&self) -> bool {
        match self.cached_id {
            Some(id) => id.lookup_validated(),
            None => true,
        }
    }

    /// Whether dropping this handle releases a reference.
    pub(crate) fn holds_reference(&self) -> bool {
        self.cached_id.is_none()
    }

    pub(crate) fn instance_id(&self) -> InstanceId {
        if let Some(id) = self.cached_id {
            return id;
        }

        // SAFETY: the held reference keeps the object alive.
        match unsafe { InstanceId::of_object(self.obj) } {
            Some(id) => id,
            None => panic!("{} object has no instance ID", T::class_name()),
        }
    }

    /// Reinterprets the handle as another class, transferring its reference (if any).
    ///
    /// # Safety
    /// The object must be an instance of `U`; `obj` is the object pointer as returned by a cast.
    pub(crate) unsafe fn transmute_class<U: GodotClass>(self, obj: sys::GDExtensionObjectPtr) -> RawGd<U> {
        let this = ManuallyDrop::new(self);
        RawGd {
            obj,
            cached_id: this.cached_id,
            _marker: PhantomData,
        }
    }

    /// Gives up the handle without releasing its reference.
    pub(crate) fn forget(self) -> sys::GDExtensionObjectPtr {
        let this = ManuallyDrop::new(self);
        this.obj
    }
}

impl<T: GodotClass> Clone for RawGd<T> {
    fn clone(&self) -> Self {
        let obj = self.checked_obj_sys();

        let cached_id = match self.cached_id {
            // A weak handle to a reference-counted object (e.g. a base field); clones are strong.
            Some(id) if id.is_ref_counted() => {
                // SAFETY: object checked alive above.
                unsafe { ref_counted_api(obj).reference() };
                None
            }
            Some(id) => Some(id),
            None => {
                // SAFETY: the held reference keeps the object alive.
                unsafe { ref_counted_api(obj).reference() };
                None
            }
        };

        Self {
            obj,
            cached_id,
            _marker: PhantomData,
        }
    }
}

impl<T: GodotClass> Drop for RawGd<T> {
    fn drop(&mut self) {
        if !self.holds_reference() {
            return;
        }

        // SAFETY: the held reference keeps the object alive until released here.
        let is_last = unsafe { ref_counted_api(self.obj).unreference() };
        if is_last {
            sys::out!("Destroy last reference of {} at {:?}", T::class_name(), self.obj);
            // SAFETY: no references remain.
            unsafe { sys::interface_fn!(object_destroy)(self.obj) };
        }
    }
}

/// Low-level `RefCounted` API of any reference-counted object.
///
/// # Safety
/// `obj` must point to a live `RefCounted` instance.
unsafe fn ref_counted_api<'a>(obj: sys::GDExtensionObjectPtr) -> ref_counted::Advanced<'a> {
    ref_counted::Advanced::from_object_ptr(obj)
}

/// Tags an object argument of an incoming virtual call.
///
/// Virtual calls pass `Object**` for manually managed objects, but `Ref<T>*` for reference-counted ones, which must be unwrapped
/// first. In both cases the engine keeps ownership.
///
/// # Safety
/// `arg` must point to an argument of the respective kind.
#[doc(hidden)]
pub unsafe fn virtual_arg_tagged(arg: sys::GDExtensionConstTypePtr, is_ref_counted: bool) -> sys::Tagged {
    if is_ref_counted {
        let obj = sys::interface_fn!(ref_get_object)(arg);
        sys::Tagged::new(obj, PointerTag::Borrowed)
    } else {
        let obj = *(arg as *const sys::GDExtensionObjectPtr);
        sys::Tagged::new(obj, PointerTag::MustAssertInstanceId)
    }
}


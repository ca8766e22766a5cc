/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::ops::{Deref, DerefMut};

use sys::PointerTag;

use crate::meta::error::ConvertError;
use crate::obj::bounds::{DeclUser, Declarer, MemRefCounted};
use crate::obj::cap::GodotDefault;
use crate::obj::raw_gd::RawGd;
use crate::obj::{Base, Bounds, GdMut, GdRef, GodotClass, Inherits, InstanceId};
use crate::registry::callbacks;
use crate::{storage, sys};

/// Smart pointer to objects owned by the engine.
///
/// The memory strategy depends on the class:
/// * Reference-counted classes (`RefCounted` and derived): each `Gd` holds one reference; the object is destroyed when the last
///   handle is dropped.
/// * Manually managed classes: the handle remembers the instance ID and checks it before each access, since the engine may
///   free the object at any time. Call [`free()`][Self::free] to destroy it explicitly.
///
/// `Gd<T>` dereferences to `T` for engine classes. For user classes, it dereferences to the engine base, while the Rust
/// struct is accessed through [`bind()`][Self::bind] and [`bind_mut()`][Self::bind_mut].
#[repr(C)]
pub struct Gd<T: GodotClass> {
    raw: RawGd<T>,
}

impl<T: GodotClass> Gd<T> {
    /// Adopts an object pointer received from the engine, according to its ownership tag. `None` if null.
    ///
    /// # Safety
    /// See [`RawGd::from_tagged()`]: the pointer must be null or refer to a live object of class `T`.
    #[doc(hidden)]
    pub unsafe fn from_tagged(tagged: sys::Tagged) -> Option<Self> {
        RawGd::from_tagged(tagged).map(|raw| Self { raw })
    }

    /// # Safety
    /// `obj` must point to a freshly constructed object of class `T`.
    pub(crate) unsafe fn from_obj_sys_init(obj: sys::GDExtensionObjectPtr) -> Self {
        Self {
            raw: RawGd::from_new_object(obj),
        }
    }

    /// # Safety
    /// `obj` must point to a live object of class `T`.
    pub(crate) unsafe fn from_obj_sys_weak(obj: sys::GDExtensionObjectPtr) -> Self {
        Self {
            raw: RawGd::new_weak(obj),
        }
    }

    /// Instance ID of the object.
    ///
    /// # Panics
    /// If the object has been freed.
    pub fn instance_id(&self) -> InstanceId {
        self.raw.checked_obj_sys();
        self.raw.instance_id()
    }

    /// Whether the object is still alive. Always true for reference-counted objects.
    pub fn is_instance_valid(&self) -> bool {
        self.raw.is_alive()
    }

    /// **Upcast:** converts into a smart pointer to a base class. Always succeeds.
    pub fn upcast<Base>(self) -> Gd<Base>
    where
        Base: GodotClass,
        T: Inherits<Base>,
    {
        let obj = self.raw.obj_sys();
        // SAFETY: T inherits Base, so the object is also a Base instance.
        Gd {
            raw: unsafe { self.raw.transmute_class(obj) },
        }
    }

    /// **Downcast:** tries to convert into a smart pointer to a derived class.
    ///
    /// If the object is not an instance of `Derived`, the original handle is returned as error.
    pub fn try_cast<Derived>(self) -> Result<Gd<Derived>, Self>
    where
        Derived: GodotClass + Inherits<T>,
    {
        let obj = self.raw.checked_obj_sys();
        let class_name = Derived::class_name().to_string_name();

        // SAFETY: the object is alive, the class name valid for the duration of the calls.
        let cast_obj = unsafe {
            let class_tag = sys::interface_fn!(classdb_get_class_tag)(class_name.string_sys());
            sys::interface_fn!(object_cast_to)(obj, class_tag)
        };

        if cast_obj.is_null() {
            Err(self)
        } else {
            // SAFETY: the engine confirmed that the object is a Derived instance.
            Ok(Gd {
                raw: unsafe { self.raw.transmute_class(cast_obj) },
            })
        }
    }

    /// ⚠️ **Downcast:** converts into a smart pointer to a derived class.
    ///
    /// # Panics
    /// If the object is not an instance of `Derived`.
    pub fn cast<Derived>(self) -> Gd<Derived>
    where
        Derived: GodotClass + Inherits<T>,
    {
        self.try_cast().unwrap_or_else(|gd| {
            panic!(
                "downcast from {from} to {to} failed; instance {gd:?}",
                from = T::class_name(),
                to = Derived::class_name(),
            )
        })
    }

    /// Destroys the object.
    ///
    /// # Panics
    /// If the object is reference-counted (it is destroyed with its last reference), already dead, or its Rust instance is
    /// currently bound through [`bind()`][Self::bind]/[`bind_mut()`][Self::bind_mut] or a running virtual method.
    pub fn free(self) {
        assert!(
            !self.raw.holds_reference() && !self.raw.instance_id().is_ref_counted(),
            "called free() on reference-counted {} object; it is destroyed with its last reference",
            T::class_name()
        );

        let obj = self.raw.checked_obj_sys();
        let instance_id = self.raw.instance_id();
        assert!(
            !storage::is_instance_bound(instance_id),
            "called free() on {} object {instance_id} while its Rust instance is bound; drop the guard first",
            T::class_name()
        );
        self.raw.forget();

        // SAFETY: the object is alive and manually managed.
        unsafe { sys::interface_fn!(object_destroy)(obj) };
    }

    /// Argument for engine methods that only inspect the object.
    #[doc(hidden)]
    pub fn to_borrowed_arg(&self) -> sys::Tagged {
        sys::Tagged::new(self.raw.checked_obj_sys(), PointerTag::Borrowed)
    }

    /// Argument for engine methods that take ownership of the object (e.g. `Node::add_child()`).
    ///
    /// The handle is consumed; a held reference passes to the engine.
    #[doc(hidden)]
    pub fn into_engine_arg(self) -> sys::Tagged {
        let obj = self.raw.checked_obj_sys();
        self.raw.forget();
        sys::Tagged::new(obj, PointerTag::TransferredToEngine)
    }

    #[doc(hidden)]
    pub fn obj_sys(&self) -> sys::GDExtensionObjectPtr {
        self.raw.obj_sys()
    }

    fn dynamic_class_string(&self) -> String {
        // Only Object's class is queried here; all classes expose get_class().
        // SAFETY: the handle is alive for the duration of the call.
        let object = unsafe { crate::classes::object::Advanced::from_object_ptr(self.raw.checked_obj_sys()) };
        object.get_class().to_string()
    }
}

impl<T> Gd<T>
where
    T: GodotClass + Inherits<crate::classes::Object>,
{
    /// Looks up an object by instance ID.
    ///
    /// Fails if the object is dead, or not an instance of `T`.
    pub fn try_from_instance_id(instance_id: InstanceId) -> Result<Self, ConvertError> {
        let obj = instance_id.lookup_object_ptr();
        if obj.is_null() {
            return Err(ConvertError::dead_instance(instance_id));
        }

        // SAFETY: the engine just confirmed that the object is alive; ownership stays with the engine.
        let object = unsafe { Gd::<crate::classes::Object>::from_tagged(sys::Tagged::new(obj, PointerTag::MustAssertInstanceId)) };
        let object = object.ok_or_else(ConvertError::null_object)?;

        object
            .try_cast::<T>()
            .map_err(|object| ConvertError::cast_failed(object.dynamic_class_string(), T::class_name()))
    }

    /// ⚠️ Looks up an object by instance ID.
    ///
    /// # Panics
    /// If the object is dead or not an instance of `T`.
    pub fn from_instance_id(instance_id: InstanceId) -> Self {
        match Self::try_from_instance_id(instance_id) {
            Ok(gd) => gd,
            Err(err) => panic!("Gd::from_instance_id({instance_id}): {err}"),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// User classes

impl<T> Gd<T>
where
    T: GodotClass + Bounds<Declarer = DeclUser>,
{
    /// Creates a user object, initializing the Rust struct with `init`.
    ///
    /// `init` receives the base object, which must be stored in the struct's `Base<T::Base>` field.
    pub fn from_init_fn<F>(init: F) -> Self
    where
        F: FnOnce(Base<T::Base>) -> T,
    {
        let obj = match callbacks::create_custom::<T, F>(init) {
            Ok(obj) => obj,
            Err(msg) => panic!("failed to construct {}: {msg}", T::class_name()),
        };

        // SAFETY: freshly constructed object.
        unsafe { Gd::from_obj_sys_init(obj) }
    }

    /// Shared access to the Rust struct.
    ///
    /// # Panics
    /// If the struct is currently bound mutably.
    pub fn bind(&self) -> GdRef<'_, T> {
        GdRef::from_guard(self.storage().get())
    }

    /// Exclusive access to the Rust struct.
    ///
    /// # Panics
    /// If the struct is currently bound, shared or mutably.
    pub fn bind_mut(&mut self) -> GdMut<'_, T> {
        GdMut::from_guard(self.storage().get_mut())
    }

    fn storage(&self) -> &storage::InstanceStorage<T> {
        let instance_id = self.instance_id();

        // SAFETY: storage lives as long as the object, which this handle keeps alive (or just checked to be alive).
        match unsafe { storage::find_storage::<T>(instance_id) } {
            Some(storage) => storage,
            None => panic!("{} object {instance_id} has no Rust instance", T::class_name()),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Trait impls

impl<T: GodotClass> Deref for Gd<T> {
    type Target = <T::Declarer as Declarer>::DerefTarget<T>;

    fn deref(&self) -> &Self::Target {
        // SAFETY: RawGd shares the #[repr(C)] layout of all class structs. For user classes, the object pointer refers to the
        // engine base object.
        unsafe { &*(&self.raw as *const RawGd<T> as *const Self::Target) }
    }
}

impl<T: GodotClass> DerefMut for Gd<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: see Deref.
        unsafe { &mut *(&mut self.raw as *mut RawGd<T> as *mut Self::Target) }
    }
}

impl<T: GodotClass> Clone for Gd<T> {
    fn clone(&self) -> Self {
        Self { raw: self.raw.clone() }
    }
}

impl<T> Default for Gd<T>
where
    T: GodotDefault + Bounds<Memory = MemRefCounted>,
{
    /// Creates a default-constructed instance.
    fn default() -> Self {
        T::__godot_default()
    }
}

impl<T: GodotClass> PartialEq for Gd<T> {
    /// Identity comparison: two handles are equal if they point to the same object.
    fn eq(&self, other: &Self) -> bool {
        self.raw.obj_sys() == other.raw.obj_sys()
    }
}

impl<T: GodotClass> Eq for Gd<T> {}

impl<T: GodotClass> fmt::Debug for Gd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.raw.is_alive() {
            write!(f, "Gd<{}> {{ id: {} }}", T::class_name(), self.raw.instance_id())
        } else {
            write!(f, "Gd<{}> {{ freed }}", T::class_name())
        }
    }
}

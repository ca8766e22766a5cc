/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::init::InitLevel;
use crate::meta::ClassName;
use crate::obj::bounds::{MemManual, MemRefCounted};
use crate::obj::{bounds, Bounds, Gd, InstanceId};
use crate::sys;

/// Makes `T` eligible to be managed by the engine and stored in [`Gd<T>`][crate::obj::Gd] pointers.
///
/// Implemented for all engine classes, and for user classes through `#[derive(GodotClass)]`.
pub trait GodotClass: Bounds + 'static
where
    Self: Sized,
{
    /// The immediate superclass of `T`. This is always an engine class, or [`NoBase`] for `Object`.
    type Base: GodotClass;

    /// The name of the class, under which it is registered in the engine.
    fn class_name() -> ClassName;

    /// Initialization level, during which this class is available.
    const INIT_LEVEL: InitLevel;
}

/// Base of `Object`, the root of the class hierarchy.
///
/// Uninhabited; only exists to close the `GodotClass::Base` chain.
pub enum NoBase {}

impl GodotClass for NoBase {
    type Base = NoBase;

    fn class_name() -> ClassName {
        unreachable!("NoBase has no class name")
    }

    const INIT_LEVEL: InitLevel = InitLevel::Core;
}

unsafe impl Bounds for NoBase {
    type Memory = MemManual;
    type DynMemory = MemManual;
    type Declarer = bounds::DeclEngine;
}

/// Non-strict inheritance relationship in the class hierarchy.
///
/// `Derived: Inherits<Base>` means that `Derived` is a subclass of `Base` or `Base` itself. Implemented by generated code for
/// all ancestors, and by `#[derive(GodotClass)]` for the engine base of a user class and its ancestors.
pub trait Inherits<Base: GodotClass>: GodotClass {}

impl<T: GodotClass> Inherits<T> for T {}

/// Implemented for all engine classes; access to the raw object behind the class struct.
pub trait EngineClass: GodotClass {
    fn as_object_ptr(&self) -> sys::GDExtensionObjectPtr;

    /// `Some` if the handle refers to an object whose lifetime it does not control.
    fn cached_instance_id(&self) -> Option<InstanceId>;

    /// Object pointer, after verifying that the object is still alive.
    ///
    /// # Panics
    /// If the handle tracks its instance ID and the engine has freed the object.
    #[doc(hidden)]
    fn __checked_object_ptr(&self) -> sys::GDExtensionObjectPtr {
        if let Some(id) = self.cached_instance_id() {
            assert!(
                id.lookup_validated(),
                "{} object with {id:?} has been freed; the handle is dead",
                Self::class_name()
            );
        }
        self.as_object_ptr()
    }
}

/// Auto-implemented for all engine-provided enums.
pub trait EngineEnum: Copy {
    /// Value from ordinal; unknown ordinals are kept as-is.
    fn from_ord(ord: i32) -> Self;

    /// Value from ordinal, or `None` if no enumerator has this ordinal.
    fn try_from_ord(ord: i32) -> Option<Self>;

    fn ord(self) -> i32;

    /// Name of the enumerator, or `""` for unknown ordinals.
    fn as_str(&self) -> &'static str;
}

/// Auto-implemented for all engine-provided bitfields.
pub trait EngineBitfield: Copy {
    fn from_ord(ord: u64) -> Self;

    fn ord(self) -> u64;

    /// Whether all bits of `flag` are set in `self`.
    fn is_set(self, flag: Self) -> bool {
        self.ord() & flag.ord() == flag.ord()
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Construction

/// Capability traits, providing dedicated functionalities for classes.
pub mod cap {
    use super::*;
    use crate::obj::Base;

    /// Trait for all classes that are default-constructible from the engine's point of view.
    ///
    /// Engine classes get this if they are instantiable (and not singletons). User classes get it through `#[class(init)]` or
    /// by overriding `init()` in their `I*` trait impl.
    pub trait GodotDefault: GodotClass {
        /// Provides a default smart pointer instance.
        #[doc(hidden)]
        fn __godot_default() -> Gd<Self> {
            super::construct_engine_object::<Self>()
        }

        /// Constructor of the Rust instance of a user class.
        #[doc(hidden)]
        fn __godot_user_init(base: Base<Self::Base>) -> Self {
            let _ = base;
            unreachable!("{} is constructed by the engine", Self::class_name())
        }
    }
}

/// Instantiates a class through the class database. Works for engine and registered user classes alike.
///
/// # Panics
/// If the engine fails to construct the object, e.g. because the class is not registered yet.
pub(crate) fn construct_engine_object<T: GodotClass>() -> Gd<T> {
    let class_name = T::class_name().to_string_name();

    // SAFETY: the class name is a valid StringName for the duration of the call.
    let object_ptr = unsafe { sys::interface_fn!(classdb_construct_object)(class_name.string_sys()) };
    assert!(
        !object_ptr.is_null(),
        "engine failed to construct object of class {}",
        T::class_name()
    );

    // SAFETY: freshly constructed object, not yet referenced by anyone.
    unsafe { Gd::from_obj_sys_init(object_ptr) }
}

/// Constructs reference-counted objects: `T::new_gd()`.
pub trait NewGd: GodotClass {
    /// Default-constructs an instance; it is freed once the last `Gd` to it is dropped.
    fn new_gd() -> Gd<Self>;
}

impl<T> NewGd for T
where
    T: cap::GodotDefault + Bounds<Memory = MemRefCounted>,
{
    fn new_gd() -> Gd<Self> {
        T::__godot_default()
    }
}

/// Constructs manually managed objects: `T::new_alloc()`.
pub trait NewAlloc: GodotClass {
    /// Default-constructs an instance; it must be freed with [`Gd::free()`] or handed to an owner such as the scene tree.
    #[must_use]
    fn new_alloc() -> Gd<Self>;
}

impl<T> NewAlloc for T
where
    T: cap::GodotDefault + Bounds<Memory = MemManual>,
{
    fn new_alloc() -> Gd<Self> {
        T::__godot_default()
    }
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::{Color, GString, Rect2, StringName, Vector2, Vector2i, Vector3, Vector3i};
use crate::meta::PropertyInfo;
use crate::sys;
use crate::sys::callframe::{read_arg, write_return};
use crate::sys::VariantType;

/// Types that registered methods (`#[func]`), signals (`#[signal]`) and properties (`#[var]`) exchange with the engine.
///
/// Values travel in the engine's ptrcall layout: every `int` as `i64`, every `float` as `f64`, builtins by pointer.
pub trait GodotType: Sized + 'static {
    /// Engine type of the value.
    const VARIANT_TYPE: VariantType;

    /// Width hint for `int` and `float` values; tells the engine e.g. that an `int` fits in 32 bits.
    const METADATA: sys::GDExtensionClassMethodArgumentMetadata = sys::GDEXTENSION_METHOD_ARGUMENT_METADATA_NONE;

    /// Reads argument `index` of an incoming ptrcall.
    ///
    /// # Safety
    /// `args` must hold at least `index + 1` pointers to values laid out as the engine passes `VARIANT_TYPE`.
    unsafe fn from_arg(args: *const sys::GDExtensionConstTypePtr, index: usize) -> Self;

    /// Moves `self` into the return slot of an incoming ptrcall.
    ///
    /// # Safety
    /// `ret` must point to storage of `VARIANT_TYPE`; engine-managed types must be initialized there.
    unsafe fn write_return(self, ret: sys::GDExtensionTypePtr);

    /// Describes a parameter, return value or property named `name` of this type.
    fn property_info(name: &str) -> PropertyInfo {
        PropertyInfo::new(Self::VARIANT_TYPE, name)
    }
}

impl GodotType for bool {
    const VARIANT_TYPE: VariantType = VariantType::BOOL;

    unsafe fn from_arg(args: *const sys::GDExtensionConstTypePtr, index: usize) -> Self {
        read_arg::<bool>(args, index)
    }

    unsafe fn write_return(self, ret: sys::GDExtensionTypePtr) {
        write_return(ret, self);
    }
}

macro_rules! impl_godot_type_int {
    ($($Int:ty => $metadata:ident),* $(,)?) => {
        $(
            impl GodotType for $Int {
                const VARIANT_TYPE: VariantType = VariantType::INT;
                const METADATA: sys::GDExtensionClassMethodArgumentMetadata = sys::$metadata;

                unsafe fn from_arg(args: *const sys::GDExtensionConstTypePtr, index: usize) -> Self {
                    read_arg::<i64>(args, index) as $Int
                }

                unsafe fn write_return(self, ret: sys::GDExtensionTypePtr) {
                    write_return(ret, self as i64);
                }
            }
        )*
    };
}

impl_godot_type_int!(
    i8 => GDEXTENSION_METHOD_ARGUMENT_METADATA_INT_IS_INT8,
    i16 => GDEXTENSION_METHOD_ARGUMENT_METADATA_INT_IS_INT16,
    i32 => GDEXTENSION_METHOD_ARGUMENT_METADATA_INT_IS_INT32,
    i64 => GDEXTENSION_METHOD_ARGUMENT_METADATA_INT_IS_INT64,
    u8 => GDEXTENSION_METHOD_ARGUMENT_METADATA_INT_IS_UINT8,
    u16 => GDEXTENSION_METHOD_ARGUMENT_METADATA_INT_IS_UINT16,
    u32 => GDEXTENSION_METHOD_ARGUMENT_METADATA_INT_IS_UINT32,
);

impl GodotType for f32 {
    const VARIANT_TYPE: VariantType = VariantType::FLOAT;
    const METADATA: sys::GDExtensionClassMethodArgumentMetadata = sys::GDEXTENSION_METHOD_ARGUMENT_METADATA_REAL_IS_FLOAT;

    unsafe fn from_arg(args: *const sys::GDExtensionConstTypePtr, index: usize) -> Self {
        read_arg::<f64>(args, index) as f32
    }

    unsafe fn write_return(self, ret: sys::GDExtensionTypePtr) {
        write_return(ret, self as f64);
    }
}

impl GodotType for f64 {
    const VARIANT_TYPE: VariantType = VariantType::FLOAT;
    const METADATA: sys::GDExtensionClassMethodArgumentMetadata = sys::GDEXTENSION_METHOD_ARGUMENT_METADATA_REAL_IS_DOUBLE;

    unsafe fn from_arg(args: *const sys::GDExtensionConstTypePtr, index: usize) -> Self {
        read_arg::<f64>(args, index)
    }

    unsafe fn write_return(self, ret: sys::GDExtensionTypePtr) {
        write_return(ret, self);
    }
}

macro_rules! impl_godot_type_pod {
    ($($Type:ty => $variant:ident),* $(,)?) => {
        $(
            impl GodotType for $Type {
                const VARIANT_TYPE: VariantType = VariantType::$variant;

                unsafe fn from_arg(args: *const sys::GDExtensionConstTypePtr, index: usize) -> Self {
                    read_arg::<$Type>(args, index)
                }

                unsafe fn write_return(self, ret: sys::GDExtensionTypePtr) {
                    write_return(ret, self);
                }
            }
        )*
    };
}

impl_godot_type_pod!(
    Vector2 => VECTOR2,
    Vector2i => VECTOR2I,
    Vector3 => VECTOR3,
    Vector3i => VECTOR3I,
    Color => COLOR,
    Rect2 => RECT2,
);

macro_rules! impl_godot_type_opaque {
    ($($Type:ty => $variant:ident),* $(,)?) => {
        $(
            impl GodotType for $Type {
                const VARIANT_TYPE: VariantType = VariantType::$variant;

                unsafe fn from_arg(args: *const sys::GDExtensionConstTypePtr, index: usize) -> Self {
                    <$Type>::clone_from_arg(*args.add(index))
                }

                unsafe fn write_return(self, ret: sys::GDExtensionTypePtr) {
                    // The slot holds a constructed value; assignment destroys it.
                    *(ret as *mut $Type) = self;
                }
            }
        )*
    };
}

impl_godot_type_opaque!(
    GString => STRING,
    StringName => STRING_NAME,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ints_carry_width_metadata() {
        assert_eq!(<i32 as GodotType>::METADATA, sys::GDEXTENSION_METHOD_ARGUMENT_METADATA_INT_IS_INT32);
        assert_eq!(<u8 as GodotType>::METADATA, sys::GDEXTENSION_METHOD_ARGUMENT_METADATA_INT_IS_UINT8);
        assert_eq!(<f32 as GodotType>::METADATA, sys::GDEXTENSION_METHOD_ARGUMENT_METADATA_REAL_IS_FLOAT);
        assert_eq!(<bool as GodotType>::METADATA, sys::GDEXTENSION_METHOD_ARGUMENT_METADATA_NONE);
        assert_eq!(<Vector2 as GodotType>::VARIANT_TYPE, VariantType::VECTOR2);
    }

    #[test]
    fn narrow_values_use_wide_wire_types() {
        let wide = -5_i64;
        let args = [&wide as *const i64 as sys::GDExtensionConstTypePtr];
        assert_eq!(unsafe { <i16 as GodotType>::from_arg(args.as_ptr(), 0) }, -5);

        let mut out = 0.0_f64;
        unsafe { 1.5_f32.write_return(&mut out as *mut f64 as sys::GDExtensionTypePtr) };
        assert_eq!(out, 1.5);

        let mut out = 0_i64;
        unsafe { 200_u8.write_return(&mut out as *mut i64 as sys::GDExtensionTypePtr) };
        assert_eq!(out, 200);
    }
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Construction, copy and destruction of an engine-managed builtin with an `opaque: sys::Opaque<N>` field, through the
/// lifecycle functions of [`sys::BuiltinLifecycleTable`].
macro_rules! impl_builtin_lifecycle {
    ($Type:ident; default: $default:ident, copy: $copy:ident, destroy: $destroy:ident) => {
        impl $Type {
            /// Runs an engine constructor on zeroed storage.
            ///
            /// # Safety
            /// `construct` must fully initialize the storage it receives.
            pub(crate) unsafe fn construct_with(construct: impl FnOnce(sys::GDExtensionUninitializedTypePtr)) -> Self {
                let mut opaque = sys::Opaque::zeroed();
                construct(opaque.as_mut_ptr());
                Self { opaque }
            }

            pub(crate) fn construct_default() -> Self {
                // SAFETY: default constructors take no arguments.
                unsafe {
                    Self::construct_with(|ptr| (sys::builtin_lifecycle_api().$default)(ptr, std::ptr::null()))
                }
            }

            /// Default-constructs a value, then lets `init` overwrite it, e.g. as return slot of a ptrcall.
            ///
            /// # Safety
            /// `init` may only write a valid value of this type into the pointer.
            #[doc(hidden)]
            pub unsafe fn new_with_init(init: impl FnOnce(sys::GDExtensionTypePtr)) -> Self {
                let mut value = Self::construct_default();
                init(value.sys_mut());
                value
            }

            /// Copies a value the engine passed by pointer.
            ///
            /// # Safety
            /// `arg` must point to a live value of this type.
            #[doc(hidden)]
            pub unsafe fn clone_from_arg(arg: sys::GDExtensionConstTypePtr) -> Self {
                Self::construct_with(|ptr| {
                    let args = [arg];
                    (sys::builtin_lifecycle_api().$copy)(ptr, args.as_ptr())
                })
            }

            #[doc(hidden)]
            pub fn sys(&self) -> sys::GDExtensionConstTypePtr {
                self.opaque.as_ptr()
            }

            #[doc(hidden)]
            pub fn sys_mut(&mut self) -> sys::GDExtensionTypePtr {
                self.opaque.as_mut_ptr()
            }
        }

        impl Clone for $Type {
            fn clone(&self) -> Self {
                // SAFETY: self is a live value.
                unsafe { Self::clone_from_arg(self.sys()) }
            }
        }

        impl Drop for $Type {
            fn drop(&mut self) {
                // SAFETY: the value was constructed by the engine and is destroyed exactly once.
                unsafe { (sys::builtin_lifecycle_api().$destroy)(self.sys_mut()) }
            }
        }
    };
}

/// Component-wise arithmetic operators for vector types.
macro_rules! impl_vector_operators {
    ($Vector:ident, $Scalar:ty, ($($field:ident),+)) => {
        impl std::ops::Add for $Vector {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self { $( $field: self.$field + rhs.$field ),+ }
            }
        }

        impl std::ops::Sub for $Vector {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self { $( $field: self.$field - rhs.$field ),+ }
            }
        }

        impl std::ops::Mul<$Scalar> for $Vector {
            type Output = Self;

            fn mul(self, rhs: $Scalar) -> Self {
                Self { $( $field: self.$field * rhs ),+ }
            }
        }

        impl std::ops::Neg for $Vector {
            type Output = Self;

            fn neg(self) -> Self {
                Self { $( $field: -self.$field ),+ }
            }
        }

        impl std::ops::AddAssign for $Vector {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl std::ops::SubAssign for $Vector {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }
    };
}

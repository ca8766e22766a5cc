/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::num::NonZeroU64;

use crate::sys;

/// Represents a non-zero instance ID.
///
/// The engine hands out IDs as `u64`, scripts see them as `i64`; both conversions are available. IDs are never reused while
/// the engine runs, which makes them suitable to detect that an object has been freed.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct InstanceId {
    value: NonZeroU64,
}

impl InstanceId {
    /// Constructs an instance ID from an integer, or `None` if the integer is zero.
    ///
    /// This does *not* check if the instance is valid.
    pub fn try_from_i64(id: i64) -> Option<Self> {
        Self::try_from_u64(id as u64)
    }

    pub fn try_from_u64(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(|value| Self { value })
    }

    pub fn to_i64(self) -> i64 {
        self.to_u64() as i64
    }

    pub fn to_u64(self) -> u64 {
        self.value.get()
    }

    /// Returns if the object being referred-to is inheriting `RefCounted`.
    ///
    /// No engine round-trip: the engine encodes this in the highest bit of the ID.
    pub fn is_ref_counted(self) -> bool {
        self.to_u64() & (1u64 << 63) != 0
    }

    /// Whether an object with this ID is still alive.
    pub fn lookup_validated(self) -> bool {
        !self.lookup_object_ptr().is_null()
    }

    pub(crate) fn lookup_object_ptr(self) -> sys::GDExtensionObjectPtr {
        // SAFETY: lookup by ID is valid for any ID, dead or alive.
        unsafe { sys::interface_fn!(object_get_instance_from_id)(self.to_u64()) }
    }

    /// ID of a live object, or `None` for null or an object without an ID.
    ///
    /// # Safety
    /// `object_ptr` must be null or point to a live object.
    pub(crate) unsafe fn of_object(object_ptr: sys::GDExtensionObjectPtr) -> Option<Self> {
        if object_ptr.is_null() {
            return None;
        }
        let id = sys::interface_fn!(object_get_instance_id)(object_ptr);
        Self::try_from_u64(id)
    }
}

impl Display for InstanceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_i64())
    }
}

impl Debug for InstanceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "InstanceId({})", self.to_i64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_no_id() {
        assert_eq!(InstanceId::try_from_i64(0), None);
        assert_eq!(InstanceId::try_from_u64(0), None);
    }

    #[test]
    fn ref_counted_bit() {
        let manual = InstanceId::try_from_u64(42).expect("non-zero");
        let refcounted = InstanceId::try_from_u64(42 | (1 << 63)).expect("non-zero");

        assert!(!manual.is_ref_counted());
        assert!(refcounted.is_ref_counted());
        assert!(refcounted.to_i64() < 0);
        assert_eq!(InstanceId::try_from_i64(refcounted.to_i64()), Some(refcounted));
    }

    #[test]
    fn formatting() {
        let id = InstanceId::try_from_i64(1234).expect("non-zero");
        assert_eq!(id.to_string(), "1234");
        assert_eq!(format!("{id:?}"), "InstanceId(1234)");
    }
}

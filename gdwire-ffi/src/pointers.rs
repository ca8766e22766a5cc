/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Ownership conventions for object pointers crossing the wire.
//!
//! Every object-typed argument and return value of a generated method carries one [`PointerTag`]. The tag is chosen by the
//! code generator from the class database (is the class reference-counted, is the method listed as transferring ownership),
//! it is never inspected at runtime to decide *whether* a handle is released, only *how*.

use std::fmt;

use crate as sys;

/// How the receiving side must treat an object pointer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PointerTag {
    /// The engine keeps ownership; the host may alias the pointer but never releases it.
    ///
    /// Used for singletons and for object arguments that the engine only inspects.
    Borrowed,

    /// The engine hands one reference over to the host, which must release it exactly once.
    ///
    /// Used for returned `RefCounted` objects: the engine has already counted the reference for the caller.
    TransferredToHost,

    /// The host hands ownership over to the engine and must not release the handle afterwards.
    ///
    /// Used for arguments such as the child of `Node::add_child()`, which becomes owned by the scene tree.
    TransferredToEngine,

    /// Manually managed object whose lifetime the host does not control.
    ///
    /// The instance ID must be recorded on acquisition and checked before every later use, since the engine may have freed
    /// the object in the meantime.
    MustAssertInstanceId,
}

impl PointerTag {
    /// Whether the receiver is responsible for one release of the handle.
    pub fn releases_on_drop(self) -> bool {
        matches!(self, PointerTag::TransferredToHost)
    }

    /// Whether the receiver must validate the instance ID before using the handle.
    pub fn tracks_instance_id(self) -> bool {
        matches!(self, PointerTag::MustAssertInstanceId)
    }
}

impl fmt::Display for PointerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PointerTag::Borrowed => "borrowed",
            PointerTag::TransferredToHost => "owned (transferred to host)",
            PointerTag::TransferredToEngine => "owned (transferred to engine)",
            PointerTag::MustAssertInstanceId => "must assert instance id",
        };
        f.write_str(s)
    }
}

/// Object pointer together with the ownership convention under which it was obtained.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Tagged {
    ptr: sys::GDExtensionObjectPtr,
    tag: PointerTag,
}

impl Tagged {
    pub fn new(ptr: sys::GDExtensionObjectPtr, tag: PointerTag) -> Self {
        Self { ptr, tag }
    }

    pub fn null(tag: PointerTag) -> Self {
        Self::new(std::ptr::null_mut(), tag)
    }

    pub fn ptr(self) -> sys::GDExtensionObjectPtr {
        self.ptr
    }

    pub fn tag(self) -> PointerTag {
        self.tag
    }

    pub fn is_null(self) -> bool {
        self.ptr.is_null()
    }

    /// `None` if null, otherwise the pointer and its tag.
    pub fn non_null(self) -> Option<(sys::GDExtensionObjectPtr, PointerTag)> {
        sys::ptr_then(self.ptr, |ptr| (ptr, self.tag))
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_host_transfer_releases() {
        let released: Vec<PointerTag> = [
            PointerTag::Borrowed,
            PointerTag::TransferredToHost,
            PointerTag::TransferredToEngine,
            PointerTag::MustAssertInstanceId,
        ]
        .into_iter()
        .filter(|tag| tag.releases_on_drop())
        .collect();

        assert_eq!(released, vec![PointerTag::TransferredToHost]);
    }

    #[test]
    fn null_tagged_pointer() {
        let tagged = Tagged::null(PointerTag::MustAssertInstanceId);
        assert!(tagged.is_null());
        assert_eq!(tagged.non_null(), None);
        assert!(tagged.tag().tracks_instance_id());
    }

    #[test]
    fn non_null_keeps_tag() {
        let mut storage = 0u64;
        let ptr = &mut storage as *mut u64 as sys::GDExtensionObjectPtr;
        let tagged = Tagged::new(ptr, PointerTag::Borrowed);

        assert_eq!(tagged.non_null(), Some((ptr, PointerTag::Borrowed)));
    }
}

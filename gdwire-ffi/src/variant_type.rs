/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate as sys;

/// Ordinal of a builtin type, as used by `variant_get_ptr_constructor` and friends.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct VariantType {
    ord: sys::GDExtensionVariantType,
}

impl VariantType {
    pub const NIL: Self = Self { ord: 0 };
    pub const BOOL: Self = Self { ord: 1 };
    pub const INT: Self = Self { ord: 2 };
    pub const FLOAT: Self = Self { ord: 3 };
    pub const STRING: Self = Self { ord: 4 };
    pub const VECTOR2: Self = Self { ord: 5 };
    pub const VECTOR2I: Self = Self { ord: 6 };
    pub const RECT2: Self = Self { ord: 7 };
    pub const VECTOR3: Self = Self { ord: 9 };
    pub const VECTOR3I: Self = Self { ord: 10 };
    pub const COLOR: Self = Self { ord: 20 };
    pub const STRING_NAME: Self = Self { ord: 21 };
    pub const OBJECT: Self = Self { ord: 24 };
    pub const CALLABLE: Self = Self { ord: 25 };

    pub const fn from_sys(ord: sys::GDExtensionVariantType) -> Self {
        Self { ord }
    }

    pub const fn sys(self) -> sys::GDExtensionVariantType {
        self.ord
    }

    fn name(self) -> Option<&'static str> {
        let name = match self.ord {
            0 => "NIL",
            1 => "BOOL",
            2 => "INT",
            3 => "FLOAT",
            4 => "STRING",
            5 => "VECTOR2",
            6 => "VECTOR2I",
            7 => "RECT2",
            9 => "VECTOR3",
            10 => "VECTOR3I",
            20 => "COLOR",
            21 => "STRING_NAME",
            24 => "OBJECT",
            25 => "CALLABLE",
            _ => return None,
        };
        Some(name)
    }
}

impl std::fmt::Debug for VariantType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "VariantType::{name}"),
            None => write!(f, "VariantType({})", self.ord),
        }
    }
}

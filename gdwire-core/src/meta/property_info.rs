/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::{GString, StringName};
use crate::sys;
use crate::sys::VariantType;

/// Describes a method parameter, return value, signal parameter or property to the engine.
#[derive(Debug)]
pub struct PropertyInfo {
    pub variant_type: VariantType,
    pub class_name: StringName,
    pub property_name: StringName,
    pub hint_string: GString,
    pub usage: u32,
}

impl PropertyInfo {
    pub fn new(variant_type: VariantType, property_name: &str) -> Self {
        Self {
            variant_type,
            class_name: StringName::new(),
            property_name: StringName::from(property_name),
            hint_string: GString::new(),
            usage: sys::GDEXTENSION_PROPERTY_USAGE_DEFAULT,
        }
    }

    /// Engine view of this info. Borrows the names, so `self` must outlive every use of the result.
    pub fn property_sys(&self) -> sys::GDExtensionPropertyInfo {
        sys::GDExtensionPropertyInfo {
            type_: self.variant_type.sys(),
            name: self.property_name.string_sys() as sys::GDExtensionStringNamePtr,
            class_name: self.class_name.string_sys() as sys::GDExtensionStringNamePtr,
            hint: 0,
            hint_string: self.hint_string.string_sys() as sys::GDExtensionStringPtr,
            usage: self.usage,
        }
    }
}

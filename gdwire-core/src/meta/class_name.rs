/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::builtin::StringName;

/// Name of a class, as registered in the engine.
///
/// Cheap to copy and compare; conversion to an engine `StringName` happens on demand.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ClassName {
    name: &'static str,
}

impl ClassName {
    #[doc(hidden)]
    pub const fn new_static(name: &'static str) -> Self {
        Self { name }
    }

    pub fn as_str(&self) -> &'static str {
        self.name
    }

    /// Engine representation, as required by class database calls.
    pub fn to_string_name(&self) -> StringName {
        StringName::from(self.name)
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Debug for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassName({:?})", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_name_formatting() {
        let name = ClassName::new_static("AStar2D");
        assert_eq!(name.as_str(), "AStar2D");
        assert_eq!(name.to_string(), "AStar2D");
        assert_eq!(format!("{name:?}"), "ClassName(\"AStar2D\")");
    }
}

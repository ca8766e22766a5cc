/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::{HashMap, HashSet};

use crate::models::json::JsonExtensionApi;

/// Lookup tables over the whole API, needed while mapping individual classes.
#[derive(Default)]
pub struct Context<'a> {
    engine_classes: HashMap<&'a str, ClassInfo>,
    singletons: HashSet<&'a str>,
    /// Keys are `Enum` for global enums, `Class.Enum` for class enums.
    enums: HashMap<String, EnumInfo>,
    inheritance_tree: InheritanceTree,
}

#[derive(Copy, Clone, Debug)]
pub struct ClassInfo {
    pub is_refcounted: bool,
}

#[derive(Copy, Clone, Debug)]
pub struct EnumInfo {
    pub is_bitfield: bool,
}

impl<'a> Context<'a> {
    pub fn build_from_api(api: &'a JsonExtensionApi) -> Self {
        let mut ctx = Context::default();

        for singleton in api.singletons.iter() {
            ctx.singletons.insert(singleton.name.as_str());
        }

        for enum_ in api.global_enums.iter() {
            ctx.enums.insert(
                enum_.name.clone(),
                EnumInfo {
                    is_bitfield: enum_.is_bitfield,
                },
            );
        }

        for class in api.classes.iter() {
            let class_name = class.name.as_str();

            ctx.engine_classes.insert(
                class_name,
                ClassInfo {
                    is_refcounted: class.is_refcounted,
                },
            );

            if let Some(base) = class.inherits.as_ref() {
                ctx.inheritance_tree.insert(class_name.to_string(), base.clone());
            }

            for enum_ in class.enums.iter().flatten() {
                ctx.enums.insert(
                    format!("{class_name}.{}", enum_.name),
                    EnumInfo {
                        is_bitfield: enum_.is_bitfield,
                    },
                );
            }
        }

        ctx
    }

    pub fn is_engine_class(&self, class_name: &str) -> bool {
        self.engine_classes.contains_key(class_name)
    }

    pub fn class_info(&self, class_name: &str) -> Option<ClassInfo> {
        self.engine_classes.get(class_name).copied()
    }

    pub fn is_singleton(&self, class_name: &str) -> bool {
        self.singletons.contains(class_name)
    }

    /// `qualified_name` is `Enum` or `Class.Enum`.
    pub fn enum_info(&self, qualified_name: &str) -> Option<EnumInfo> {
        self.enums.get(qualified_name).copied()
    }

    pub fn inheritance_tree(&self) -> &InheritanceTree {
        &self.inheritance_tree
    }
}

#[derive(Default)]
pub struct InheritanceTree {
    derived_to_base: HashMap<String, String>,
}

impl InheritanceTree {
    pub fn insert(&mut self, derived: String, base: String) {
        let existing = self.derived_to_base.insert(derived, base);
        assert!(existing.is_none(), "duplicate inheritance insert");
    }

    /// Applies `apply` to the direct base, then its base, and so on.
    pub fn map_all_bases<T>(&self, derived: &str, apply: impl Fn(&str) -> T) -> Vec<T> {
        let mut current = derived;
        let mut result = vec![];
        while let Some(base) = self.derived_to_base.get(current).map(String::as_str) {
            result.push(apply(base));
            current = base;
        }
        result
    }
}

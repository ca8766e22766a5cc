/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Conversion of JSON models to domain models.

use crate::context::Context;
use crate::conv;
use crate::generator::docs;
use crate::models::domain::*;
use crate::models::json::*;
use crate::special_cases;
use crate::util::{ident, safe_ident};

impl ExtensionApi {
    pub fn from_json(json: &JsonExtensionApi, ctx: &Context) -> Self {
        let mut classes: Vec<Class> = json
            .classes
            .iter()
            .filter(|class| !special_cases::is_class_deleted(&class.name))
            .map(|class| Class::from_json(class, json, ctx))
            .collect();

        // Deterministic output regardless of JSON order.
        classes.sort_by(|a, b| a.name.godot_ty.cmp(&b.name.godot_ty));

        Self {
            godot_version: GodotApiVersion::from_json(&json.header),
            classes,
            global_enums: json.global_enums.iter().map(Enum::from_json).collect(),
        }
    }

    pub fn find_class(&self, godot_name: &str) -> Option<&Class> {
        self.classes.iter().find(|c| c.name.godot_ty == godot_name)
    }
}

impl GodotApiVersion {
    pub fn from_json(header: &JsonHeader) -> Self {
        Self {
            major: header.version_major,
            minor: header.version_minor,
            patch: header.version_patch,
            version_string: header.version_full_name.clone(),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Classes

impl Class {
    fn from_json(json: &JsonClass, api: &JsonExtensionApi, ctx: &Context) -> Self {
        let class_name = json.name.as_str();
        let ty_name = TyName::from_godot(class_name);

        let mut methods = vec![];
        let mut skipped_methods = vec![];
        for method in json.methods.iter().flatten().filter(|m| !m.is_virtual) {
            if special_cases::is_method_deleted(class_name, &method.name) {
                continue;
            }

            match ClassMethod::from_json(method, class_name, ctx) {
                Some(mapped) => methods.push(mapped),
                None => skipped_methods.push(method.name.clone()),
            }
        }

        // Virtuals of all ancestors, base-most first, then own.
        let mut lineage: Vec<String> = ctx
            .inheritance_tree()
            .map_all_bases(class_name, |base| base.to_string());
        lineage.reverse();
        lineage.push(class_name.to_string());

        let virtuals = lineage
            .iter()
            .filter_map(|declaring| api.classes.iter().find(|c| &c.name == declaring))
            .flat_map(|declaring| {
                declaring
                    .methods
                    .iter()
                    .flatten()
                    .filter(|m| m.is_virtual)
                    .filter_map(move |m| VirtualMethod::from_json(m, &declaring.name, ctx))
            })
            .collect();

        let is_known_class = |name: &str| ctx.is_engine_class(name);

        Self {
            name: ty_name,
            mod_name: ModName::from_godot(class_name),
            base_class: json.inherits.as_deref().map(TyName::from_godot),
            ancestors: ctx
                .inheritance_tree()
                .map_all_bases(class_name, TyName::from_godot),
            is_refcounted: json.is_refcounted,
            is_instantiable: json.is_instantiable,
            is_singleton: ctx.is_singleton(class_name),
            init_level: ClassInitLevel::from_json(&json.api_type, class_name),
            constants: json
                .constants
                .iter()
                .flatten()
                .map(|c| ClassConstant {
                    name: ident(&c.name),
                    value: c.value,
                })
                .collect(),
            enums: json.enums.iter().flatten().map(Enum::from_json).collect(),
            methods,
            virtuals,
            signals: json.signals.iter().flatten().map(ClassSignal::from_json).collect(),
            brief_doc: non_empty(json.brief_description.as_deref())
                .map(|d| docs::bbcode_to_markdown(d, &is_known_class)),
            doc: non_empty(json.description.as_deref()).map(|d| docs::bbcode_to_markdown(d, &is_known_class)),
            skipped_methods,
        }
    }
}

impl ClassSignal {
    fn from_json(json: &JsonSignal) -> Self {
        Self {
            godot_name: json.name.clone(),
            params: json
                .arguments
                .iter()
                .flatten()
                .map(|arg| SignalParam {
                    name: arg.name.clone(),
                    godot_ty: arg.type_.clone(),
                })
                .collect(),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Methods

impl ClassMethod {
    /// `None` if the method cannot be expressed (varargs, unsupported types, missing hash).
    fn from_json(json: &JsonClassMethod, class_name: &str, ctx: &Context) -> Option<Self> {
        if json.is_vararg {
            return None;
        }
        let hash = json.hash?;

        let params = FnParam::list_from_json(json.arguments.as_deref(), class_name, &json.name, ctx)?;
        let return_value = FnReturn::from_json(json.return_value.as_ref(), ctx)?;

        let qualifier = if json.is_static {
            FnQualifier::Static
        } else if json.is_const {
            FnQualifier::Const
        } else {
            FnQualifier::Mut
        };

        let rust_name = special_cases::maybe_renamed(class_name, &json.name);

        Some(Self {
            godot_name: json.name.clone(),
            rust_name: safe_ident(rust_name),
            hash,
            qualifier,
            params,
            return_value,
            doc: non_empty(json.description.as_deref())
                .map(|d| docs::bbcode_to_markdown(d, &|name| ctx.is_engine_class(name))),
            is_private: special_cases::is_method_private(class_name, &json.name),
        })
    }
}

impl VirtualMethod {
    /// `None` if the virtual's signature is outside what trampolines support.
    fn from_json(json: &JsonClassMethod, declaring_class: &str, ctx: &Context) -> Option<Self> {
        let params = FnParam::list_from_json(json.arguments.as_deref(), declaring_class, &json.name, ctx)?;
        let return_value = FnReturn::from_json(json.return_value.as_ref(), ctx)?;

        // Returns are written in place into engine storage; only plain wire values are supported.
        let returns_plain = match &return_value.type_ {
            None => true,
            Some(ty) => matches!(
                ty,
                RustTy::Bool | RustTy::Int { .. } | RustTy::Float { .. } | RustTy::EngineEnum { .. } | RustTy::Pod { .. }
            ),
        };
        if !returns_plain {
            return None;
        }

        Some(Self {
            godot_name: json.name.clone(),
            rust_name: safe_ident(conv::virtual_method_rust_name(&json.name)),
            declaring_class: TyName::from_godot(declaring_class),
            is_const: json.is_const,
            params,
            return_value,
            doc: non_empty(json.description.as_deref())
                .map(|d| docs::bbcode_to_markdown(d, &|name| ctx.is_engine_class(name))),
        })
    }
}

impl FnParam {
    fn list_from_json(
        args: Option<&[JsonMethodArg]>,
        class_name: &str,
        method_name: &str,
        ctx: &Context,
    ) -> Option<Vec<Self>> {
        args.unwrap_or_default()
            .iter()
            .map(|arg| {
                let type_ = conv::to_rust_type(&arg.type_, arg.meta.as_deref(), ctx)?;
                Some(Self {
                    name: safe_ident(&arg.name),
                    transfers_ownership: type_.is_engine_class()
                        && special_cases::is_arg_transferred_to_engine(class_name, method_name, &arg.name),
                    type_,
                    default_value: arg.default_value.clone(),
                })
            })
            .collect()
    }
}

impl FnReturn {
    /// Outer `None`: unsupported type. Inner `type_: None`: void.
    fn from_json(json: Option<&JsonMethodReturn>, ctx: &Context) -> Option<Self> {
        match json {
            None => Some(FnReturn::void()),
            Some(ret) => {
                let type_ = conv::to_rust_type(&ret.type_, ret.meta.as_deref(), ctx)?;
                Some(FnReturn { type_: Some(type_) })
            }
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Enums

impl Enum {
    pub fn from_json(json: &JsonEnum) -> Self {
        let godot_names: Vec<&str> = json.values.iter().map(|v| v.name.as_str()).collect();
        let rust_names = conv::strip_enumerator_prefixes(&godot_names);

        let enumerators = json
            .values
            .iter()
            .zip(rust_names)
            .map(|(value, rust_name)| Enumerator {
                name: ident(rust_name),
                godot_name: value.name.clone(),
                value: value.value,
            })
            .collect();

        Self {
            name: ident(&conv::to_pascal_case(&json.name)),
            godot_name: json.name.clone(),
            is_bitfield: json.is_bitfield,
            enumerators,
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Maps schema types (`int` + `meta`, `enum::Node.ProcessMode`, class names...) to [`RustTy`].

use crate::context::Context;
use crate::conv;
use crate::models::domain::{ModName, RustTy, TyName};
use crate::util::ident;

/// Builtins that are passed by value and have a `#[repr(C)]` Rust counterpart.
const POD_BUILTINS: &[&str] = &["Vector2", "Vector2i", "Vector3", "Vector3i", "Color", "Rect2"];

/// Resolves a schema type, or `None` if it cannot cross the wire in this binding.
pub fn to_rust_type(ty: &str, meta: Option<&str>, ctx: &Context) -> Option<RustTy> {
    // The declaration decides enum vs. bitfield; some signatures use `enum::` for bitfield types.
    if let Some(qualified) = ty.strip_prefix("enum::").or_else(|| ty.strip_prefix("bitfield::")) {
        return to_enum_type(qualified, ctx);
    }

    let rust_ty = match ty {
        "bool" => RustTy::Bool,
        "int" => RustTy::Int {
            rust_ty: ident(to_int_type(meta)),
        },
        "float" => RustTy::Float {
            is_f32: meta == Some("float"),
        },
        "String" => RustTy::GString,
        "StringName" => RustTy::StringName,
        "Callable" => RustTy::Callable,
        pod if POD_BUILTINS.contains(&pod) => RustTy::Pod { rust_ty: ident(pod) },
        class => {
            let info = ctx.class_info(class)?;
            RustTy::EngineClass {
                class: TyName::from_godot(class),
                is_refcounted: info.is_refcounted,
            }
        }
    };

    Some(rust_ty)
}

/// Width of an `int`, as declared through `meta`. Without meta, Godot's `int` is 64 bit.
pub fn to_int_type(meta: Option<&str>) -> &'static str {
    match meta {
        Some("int8") => "i8",
        Some("int16") => "i16",
        Some("int32") => "i32",
        Some("uint8") => "u8",
        Some("uint16") => "u16",
        Some("uint32") | Some("char32") => "u32",
        Some("uint64") => "u64",
        _ => "i64",
    }
}

fn to_enum_type(qualified: &str, ctx: &Context) -> Option<RustTy> {
    let is_bitfield = ctx.enum_info(qualified)?.is_bitfield;

    let rust_ty = match qualified.split_once('.') {
        Some((class, enum_name)) => RustTy::EngineEnum {
            surrounding_class: Some(ModName::from_godot(class)),
            enum_name: ident(&conv::to_pascal_case(enum_name)),
            is_bitfield,
        },
        None => RustTy::EngineEnum {
            surrounding_class: None,
            enum_name: ident(&conv::to_pascal_case(qualified)),
            is_bitfield,
        },
    };

    Some(rust_ty)
}

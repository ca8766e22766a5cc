/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Domain models, mapped from JSON and consumed by the generators.
//!
//! Unlike the JSON models, these carry Rust identifiers and resolved types. Anything the generator cannot express (varargs,
//! `Variant`, arrays) has already been filtered out during mapping.

use proc_macro2::{Ident, TokenStream};
use quote::{quote, ToTokens};

use crate::conv;
use crate::util::ident;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// API

pub struct ExtensionApi {
    pub godot_version: GodotApiVersion,
    pub classes: Vec<Class>,
    pub global_enums: Vec<Enum>,
}

pub struct GodotApiVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
    pub version_string: String,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Names

/// Type name in Godot and its Rust counterpart.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TyName {
    pub godot_ty: String,
    pub rust_ty: Ident,
}

impl TyName {
    pub fn from_godot(godot_ty: &str) -> Self {
        Self {
            godot_ty: godot_ty.to_owned(),
            rust_ty: ident(&conv::to_pascal_case(godot_ty)),
        }
    }

    pub fn virtual_trait_name(&self) -> String {
        format!("I{}", self.rust_ty)
    }
}

impl ToTokens for TyName {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.rust_ty.to_tokens(tokens)
    }
}

/// Module name of a class file, e.g. `a_star_2d`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ModName {
    pub rust_mod: Ident,
}

impl ModName {
    pub fn from_godot(godot_ty: &str) -> Self {
        Self {
            rust_mod: ident(&conv::to_snake_case(godot_ty)),
        }
    }
}

impl ToTokens for ModName {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.rust_mod.to_tokens(tokens)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Classes

pub struct Class {
    pub name: TyName,
    pub mod_name: ModName,
    pub base_class: Option<TyName>,
    /// Base, its base, ... up to `Object`.
    pub ancestors: Vec<TyName>,
    pub is_refcounted: bool,
    pub is_instantiable: bool,
    pub is_singleton: bool,
    pub init_level: ClassInitLevel,
    pub constants: Vec<ClassConstant>,
    pub enums: Vec<Enum>,
    pub methods: Vec<ClassMethod>,
    /// Virtual methods declared by this class and all ancestors, base-most first.
    pub virtuals: Vec<VirtualMethod>,
    pub signals: Vec<ClassSignal>,
    pub brief_doc: Option<String>,
    pub doc: Option<String>,
    /// Godot names of methods left out because their signature cannot be expressed.
    pub skipped_methods: Vec<String>,
}

impl Class {
    pub fn is_object(&self) -> bool {
        self.base_class.is_none()
    }
}

/// Initialization level at which a class becomes available.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ClassInitLevel {
    Servers,
    Scene,
    Editor,
}

impl ClassInitLevel {
    pub fn from_json(api_type: &str, class_name: &str) -> Self {
        match api_type {
            "editor" => Self::Editor,
            _ if class_name.ends_with("Server") || class_name.ends_with("ServerManager") => Self::Servers,
            _ => Self::Scene,
        }
    }
}

impl ToTokens for ClassInitLevel {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let level = match self {
            Self::Servers => quote! { Servers },
            Self::Scene => quote! { Scene },
            Self::Editor => quote! { Editor },
        };
        tokens.extend(quote! { crate::init::InitLevel::#level });
    }
}

pub struct ClassConstant {
    pub name: Ident,
    pub value: i64,
}

pub struct ClassSignal {
    pub godot_name: String,
    pub params: Vec<SignalParam>,
}

pub struct SignalParam {
    pub name: String,
    pub godot_ty: String,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Methods

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum FnQualifier {
    /// `&self`
    Const,
    /// `&mut self`
    Mut,
    /// No receiver.
    Static,
}

pub struct ClassMethod {
    pub godot_name: String,
    pub rust_name: Ident,
    pub hash: i64,
    pub qualifier: FnQualifier,
    pub params: Vec<FnParam>,
    pub return_value: FnReturn,
    pub doc: Option<String>,
    /// Only exposed on the low-level `Advanced` API (e.g. reference counting primitives).
    pub is_private: bool,
}

pub struct VirtualMethod {
    pub godot_name: String,
    pub rust_name: Ident,
    pub declaring_class: TyName,
    pub is_const: bool,
    pub params: Vec<FnParam>,
    pub return_value: FnReturn,
    pub doc: Option<String>,
}

pub struct FnParam {
    pub name: Ident,
    pub type_: RustTy,
    pub default_value: Option<String>,
    /// For object parameters: whether ownership passes to the engine.
    pub transfers_ownership: bool,
}

pub struct FnReturn {
    pub type_: Option<RustTy>,
}

impl FnReturn {
    pub fn void() -> Self {
        Self { type_: None }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Types

/// A type that can cross the wire.
#[derive(Clone, Debug)]
pub enum RustTy {
    Bool,

    /// Any `int`; the wire type is always `i64`, `rust_ty` is the width declared through `meta`.
    Int { rust_ty: Ident },

    /// Any `float`; the wire type is always `f64`.
    Float { is_f32: bool },

    /// `enum::X`, `enum::Class.X`, `bitfield::...`; wire type `i64`.
    EngineEnum {
        surrounding_class: Option<ModName>,
        enum_name: Ident,
        is_bitfield: bool,
    },

    /// `String`.
    GString,

    /// `StringName`.
    StringName,

    /// `Callable`.
    Callable,

    /// Plain-old-data builtin such as `Vector2`, passed by value.
    Pod { rust_ty: Ident },

    /// Object of an engine class.
    EngineClass { class: TyName, is_refcounted: bool },
}

impl RustTy {
    /// Path of the high-level type, as seen from a generated class module.
    pub fn type_path(&self) -> TokenStream {
        match self {
            RustTy::Bool => quote! { bool },
            RustTy::Int { rust_ty } => quote! { #rust_ty },
            RustTy::Float { is_f32: true } => quote! { f32 },
            RustTy::Float { is_f32: false } => quote! { f64 },
            RustTy::EngineEnum {
                surrounding_class,
                enum_name,
                ..
            } => match surrounding_class {
                Some(module) => quote! { crate::classes::#module::#enum_name },
                None => quote! { crate::global::#enum_name },
            },
            RustTy::GString => quote! { crate::builtin::GString },
            RustTy::StringName => quote! { crate::builtin::StringName },
            RustTy::Callable => quote! { crate::builtin::Callable },
            RustTy::Pod { rust_ty } => quote! { crate::builtin::#rust_ty },
            RustTy::EngineClass { class, .. } => {
                let rust_ty = &class.rust_ty;
                quote! { crate::classes::#rust_ty }
            }
        }
    }

    pub fn is_engine_class(&self) -> bool {
        matches!(self, RustTy::EngineClass { .. })
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Enums

pub struct Enum {
    pub name: Ident,
    pub godot_name: String,
    pub is_bitfield: bool,
    pub enumerators: Vec<Enumerator>,
}

pub struct Enumerator {
    pub name: Ident,
    pub godot_name: String,
    pub value: i64,
}

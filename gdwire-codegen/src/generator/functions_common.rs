/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Per-type marshalling snippets, shared by class methods and virtual trampolines.
//!
//! Three representations exist for each [`RustTy`]:
//! * **high-level**: what users of the class struct see (`i32`, `&str`, `ProcessMode`, `&Gd<impl Inherits<Node>>`),
//! * **wire**: what the `Advanced` API takes and returns (`i64`, `f64`, `&GString`, `sys::Tagged`),
//! * **virtual**: what an `I<Class>` trait method receives (owned values, `Option<Gd<T>>`).

use proc_macro2::{Ident, TokenStream};
use quote::quote;

use crate::models::domain::{FnParam, RustTy};

// ----------------------------------------------------------------------------------------------------------------------------------------------
// High-level API

/// Parameter type in the high-level API.
pub fn high_param_type(param: &FnParam) -> TokenStream {
    match &param.type_ {
        RustTy::GString | RustTy::StringName => quote! { &str },
        RustTy::Callable => quote! { &crate::builtin::Callable },
        RustTy::EngineClass { class, .. } => {
            let class = &class.rust_ty;
            if param.transfers_ownership {
                quote! { crate::obj::Gd<impl crate::obj::Inherits<crate::classes::#class>> }
            } else {
                quote! { &crate::obj::Gd<impl crate::obj::Inherits<crate::classes::#class>> }
            }
        }
        other => other.type_path(),
    }
}

/// Statement preparing a high-level argument (e.g. converting `&str` to an engine string), and the expression then passed to
/// the `Advanced` method.
pub fn high_to_wire_arg(param: &FnParam) -> (TokenStream, TokenStream) {
    let name = &param.name;

    match &param.type_ {
        RustTy::Bool | RustTy::Pod { .. } => (TokenStream::new(), quote! { #name }),
        RustTy::Int { rust_ty } if *rust_ty == "i64" => (TokenStream::new(), quote! { #name }),
        RustTy::Int { .. } => (TokenStream::new(), quote! { #name as i64 }),
        RustTy::Float { is_f32: false } => (TokenStream::new(), quote! { #name }),
        RustTy::Float { is_f32: true } => (TokenStream::new(), quote! { #name as f64 }),
        RustTy::EngineEnum { is_bitfield: false, .. } => {
            (TokenStream::new(), quote! { crate::obj::EngineEnum::ord(#name) as i64 })
        }
        RustTy::EngineEnum { is_bitfield: true, .. } => {
            (TokenStream::new(), quote! { crate::obj::EngineBitfield::ord(#name) as i64 })
        }
        RustTy::GString => (
            quote! { let #name = crate::builtin::GString::from(#name); },
            quote! { &#name },
        ),
        RustTy::StringName => (
            quote! { let #name = crate::builtin::StringName::from(#name); },
            quote! { &#name },
        ),
        RustTy::Callable => (TokenStream::new(), quote! { #name }),
        RustTy::EngineClass { .. } => {
            if param.transfers_ownership {
                (TokenStream::new(), quote! { #name.into_engine_arg() })
            } else {
                (TokenStream::new(), quote! { #name.to_borrowed_arg() })
            }
        }
    }
}

/// Return type in the high-level API.
pub fn high_return_type(ty: &RustTy) -> TokenStream {
    match ty {
        RustTy::EngineClass { class, .. } => {
            let class = &class.rust_ty;
            quote! { Option<crate::obj::Gd<crate::classes::#class>> }
        }
        other => other.type_path(),
    }
}

/// Whether the `Advanced` return value is already the high-level one.
pub fn is_identity_return(ty: &RustTy) -> bool {
    match ty {
        RustTy::Bool | RustTy::Pod { .. } | RustTy::GString | RustTy::StringName | RustTy::Callable => true,
        RustTy::Int { rust_ty } => *rust_ty == "i64",
        RustTy::Float { is_f32 } => !is_f32,
        RustTy::EngineEnum { .. } | RustTy::EngineClass { .. } => false,
    }
}

/// Converts the `Advanced` return value `ret` to the high-level return type.
pub fn wire_to_high_return(ty: &RustTy, ret: &Ident) -> TokenStream {
    match ty {
        RustTy::Bool | RustTy::Pod { .. } | RustTy::GString | RustTy::StringName | RustTy::Callable => quote! { #ret },
        RustTy::Int { rust_ty } if *rust_ty == "i64" => quote! { #ret },
        RustTy::Int { rust_ty } => quote! { #ret as #rust_ty },
        RustTy::Float { is_f32: true } => quote! { #ret as f32 },
        RustTy::Float { is_f32: false } => quote! { #ret },
        RustTy::EngineEnum { is_bitfield, .. } => {
            let path = ty.type_path();
            if *is_bitfield {
                quote! { <#path as crate::obj::EngineBitfield>::from_ord(#ret as u64) }
            } else {
                quote! { <#path as crate::obj::EngineEnum>::from_ord(#ret as i32) }
            }
        }
        RustTy::EngineClass { .. } => {
            // SAFETY: the pointer was just returned by the engine, tagged according to the class database.
            quote! { unsafe { crate::obj::Gd::from_tagged(#ret) } }
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Wire API

/// Parameter and return type in the `Advanced` API.
pub fn wire_type(ty: &RustTy) -> TokenStream {
    match ty {
        RustTy::Bool => quote! { bool },
        RustTy::Int { .. } | RustTy::EngineEnum { .. } => quote! { i64 },
        RustTy::Float { .. } => quote! { f64 },
        RustTy::Pod { .. } => ty.type_path(),
        RustTy::GString | RustTy::StringName | RustTy::Callable => ty.type_path(),
        RustTy::EngineClass { .. } => quote! { sys::Tagged },
    }
}

pub fn wire_param_type(ty: &RustTy) -> TokenStream {
    match ty {
        RustTy::GString | RustTy::StringName | RustTy::Callable => {
            let path = ty.type_path();
            quote! { &#path }
        }
        other => wire_type(other),
    }
}

/// Statement that pushes parameter `name` onto `frame`.
pub fn push_wire_arg(ty: &RustTy, name: &Ident) -> TokenStream {
    match ty {
        RustTy::GString | RustTy::StringName | RustTy::Callable => quote! {
            // SAFETY: the borrowed builtin outlives the call.
            unsafe { frame.arg_ptr(#name.sys()) };
        },
        RustTy::EngineClass { .. } => quote! {
            frame.arg(#name.ptr());
        },
        _ => {
            let wire = wire_type(ty);
            quote! {
                frame.arg::<#wire>(#name);
            }
        }
    }
}

/// Expression performing the call on `frame` and producing the wire return value.
///
/// `table_entry` is the method bind, `object` the receiver (null for static methods).
pub fn call_with_wire_return(ret: Option<&RustTy>, table_entry: &TokenStream, object: &TokenStream) -> TokenStream {
    let Some(ty) = ret else {
        return quote! {
            // SAFETY: the frame was packed according to the method's signature in the class database.
            unsafe { frame.call_void(#table_entry, #object) }
        };
    };

    match ty {
        RustTy::GString | RustTy::StringName | RustTy::Callable => {
            let path = ty.type_path();
            quote! {
                // SAFETY: the engine writes the return value into the default-constructed builtin.
                unsafe { #path::new_with_init(|ret| frame.call_into(#table_entry, #object, ret)) }
            }
        }
        RustTy::EngineClass { is_refcounted, .. } => {
            // A returned RefCounted carries one reference for the caller; other objects belong to the engine.
            let tag = if *is_refcounted {
                quote! { sys::PointerTag::TransferredToHost }
            } else {
                quote! { sys::PointerTag::MustAssertInstanceId }
            };
            quote! {
                // SAFETY: the frame was packed according to the method's signature; objects are returned as pointers.
                let ptr = unsafe { frame.call::<sys::GDExtensionObjectPtr>(#table_entry, #object) };
                sys::Tagged::new(ptr, #tag)
            }
        }
        _ => {
            let wire = wire_type(ty);
            quote! {
                // SAFETY: the frame was packed according to the method's signature in the class database.
                unsafe { frame.call::<#wire>(#table_entry, #object) }
            }
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Virtual API

/// Parameter type of an `I<Class>` trait method.
pub fn virtual_param_type(ty: &RustTy) -> TokenStream {
    match ty {
        RustTy::EngineClass { class, .. } => {
            let class = &class.rust_ty;
            quote! { Option<crate::obj::Gd<crate::classes::#class>> }
        }
        other => other.type_path(),
    }
}

/// Expression reading argument `index` of an incoming virtual call from `args`.
pub fn read_virtual_arg(ty: &RustTy, index: usize) -> TokenStream {
    match ty {
        RustTy::Bool => quote! { sys::callframe::read_arg::<bool>(args, #index) },
        RustTy::Int { rust_ty } if *rust_ty == "i64" => quote! { sys::callframe::read_arg::<i64>(args, #index) },
        RustTy::Int { rust_ty } => quote! { sys::callframe::read_arg::<i64>(args, #index) as #rust_ty },
        RustTy::Float { is_f32: true } => quote! { sys::callframe::read_arg::<f64>(args, #index) as f32 },
        RustTy::Float { is_f32: false } => quote! { sys::callframe::read_arg::<f64>(args, #index) },
        RustTy::EngineEnum { is_bitfield, .. } => {
            let path = ty.type_path();
            if *is_bitfield {
                quote! { <#path as crate::obj::EngineBitfield>::from_ord(sys::callframe::read_arg::<i64>(args, #index) as u64) }
            } else {
                quote! { <#path as crate::obj::EngineEnum>::from_ord(sys::callframe::read_arg::<i64>(args, #index) as i32) }
            }
        }
        RustTy::Pod { .. } => {
            let path = ty.type_path();
            quote! { sys::callframe::read_arg::<#path>(args, #index) }
        }
        RustTy::GString | RustTy::StringName | RustTy::Callable => {
            let path = ty.type_path();
            quote! { #path::clone_from_arg(*args.add(#index)) }
        }
        RustTy::EngineClass { is_refcounted, .. } => quote! {
            crate::obj::Gd::from_tagged(crate::obj::virtual_arg_tagged(*args.add(#index), #is_refcounted))
        },
    }
}

/// Statement writing `result` into the return slot `ret` of a virtual call.
pub fn write_virtual_return(ty: Option<&RustTy>) -> TokenStream {
    let Some(ty) = ty else {
        return quote! { let () = result; };
    };

    let value = match ty {
        RustTy::Bool => quote! { result },
        RustTy::Int { rust_ty } if *rust_ty == "i64" => quote! { result },
        RustTy::Int { .. } => quote! { result as i64 },
        RustTy::Float { is_f32: false } => quote! { result },
        RustTy::Float { is_f32: true } => quote! { result as f64 },
        RustTy::EngineEnum { is_bitfield: false, .. } => quote! { crate::obj::EngineEnum::ord(result) as i64 },
        RustTy::EngineEnum { is_bitfield: true, .. } => quote! { crate::obj::EngineBitfield::ord(result) as i64 },
        RustTy::Pod { .. } => quote! { result },

        // Filtered out during mapping; such virtuals are not generated.
        RustTy::GString | RustTy::StringName | RustTy::Callable | RustTy::EngineClass { .. } => {
            unreachable!("virtual method returning {ty:?} is not supported")
        }
    };

    let wire = wire_type(ty);
    quote! { sys::callframe::write_return::<#wire>(ret, #value); }
}

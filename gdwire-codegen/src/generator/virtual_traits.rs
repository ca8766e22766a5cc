/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! `I<Class>` traits and the trampolines through which the engine calls into overridden virtuals.
//!
//! Dispatch is keyed by the engine's exact virtual name (`_estimate_cost`). The engine asks for a callback once per name
//! (`get_virtual`); only methods the user overrode produce a trampoline, all other names yield null so the engine falls
//! back to its own behavior.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use crate::generator::{docs, functions_common};
use crate::models::domain::{Class, VirtualMethod};
use crate::util;

pub fn make_virtual_trait(class: &Class) -> TokenStream {
    let trait_name = format_ident!("{}", class.name.virtual_trait_name());
    let trait_doc = docs::make_virtual_trait_doc(&class.name);

    let methods = class.virtuals.iter().map(make_virtual_method);
    let dispatch_arms = class.virtuals.iter().map(make_dispatch_arm);

    quote! {
        #[doc = #trait_doc]
        #[allow(unused_variables)]
        pub trait #trait_name: crate::obj::GodotClass + crate::private::You_forgot_the_attribute__godot_api {
            /// Constructor of the user struct, invoked by the engine whenever an instance is created.
            ///
            /// Overriding it is an alternative to `#[class(init)]`.
            fn init(base: crate::obj::Base<Self::Base>) -> Self
            where
                Self: Sized,
            {
                unimplemented!()
            }

            #( #methods )*

            /// Trampoline for the engine virtual `name`, if `Self` overrides it.
            #[doc(hidden)]
            fn __godot_virtual_call(name: &str) -> sys::GDExtensionClassCallVirtual
            where
                Self: Sized + crate::private::ImplementsVirtuals,
            {
                let overridden = <Self as crate::private::ImplementsVirtuals>::OVERRIDDEN;
                match name {
                    #( #dispatch_arms )*
                    _ => None,
                }
            }
        }
    }
}

/// Module `virtuals` with one `extern "C"` trampoline per virtual method of the trait.
pub fn make_trampolines(class: &Class) -> TokenStream {
    let trait_name = format_ident!("{}", class.name.virtual_trait_name());
    let trampolines = class
        .virtuals
        .iter()
        .map(|method| make_trampoline(&trait_name, method));

    quote! {
        mod virtuals {
            use super::re_export::#trait_name;
            use crate::sys;

            #( #trampolines )*
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Implementation

fn make_virtual_method(method: &VirtualMethod) -> TokenStream {
    let name = &method.rust_name;
    let receiver = if method.is_const {
        quote! { &self }
    } else {
        quote! { &mut self }
    };

    let params = method.params.iter().map(|p| {
        let name = &p.name;
        let ty = functions_common::virtual_param_type(&p.type_);
        quote! { #name: #ty }
    });

    let return_decl = match &method.return_value.type_ {
        Some(ty) => {
            let ty = functions_common::virtual_param_type(ty);
            quote! { -> #ty }
        }
        None => TokenStream::new(),
    };

    let mut doc = method.doc.clone().unwrap_or_default();
    if !doc.is_empty() {
        doc.push_str("\n\n");
    }
    doc.push_str(&format!(
        "Engine virtual `{}`, declared by `{}`.",
        method.godot_name, method.declaring_class.godot_ty
    ));
    let doc_attrs = util::make_doc_attrs(&doc);

    quote! {
        #doc_attrs
        fn #name(#receiver, #( #params ),*) #return_decl {
            unimplemented!()
        }
    }
}

fn make_dispatch_arm(method: &VirtualMethod) -> TokenStream {
    let godot_name = &method.godot_name;
    let rust_name = &method.rust_name;
    let rust_name_str = rust_name.to_string();

    quote! {
        #godot_name if overridden.contains(&#rust_name_str) => Some(super::virtuals::#rust_name::<Self>),
    }
}

fn make_trampoline(trait_name: &Ident, method: &VirtualMethod) -> TokenStream {
    let name = &method.rust_name;
    let context = format!("{trait_name}::{name}");

    let arg_names: Vec<Ident> = (0..method.params.len()).map(|i| format_ident!("arg{i}")).collect();
    let arg_reads = method.params.iter().zip(&arg_names).enumerate().map(|(index, (param, arg))| {
        let read = functions_common::read_virtual_arg(&param.type_, index);
        quote! { let #arg = #read; }
    });

    let call = if method.is_const {
        quote! {
            let guard = storage.get();
            let result = <T as #trait_name>::#name(&*guard, #( #arg_names ),*);
        }
    } else {
        quote! {
            let mut guard = storage.get_mut();
            let result = <T as #trait_name>::#name(&mut *guard, #( #arg_names ),*);
        }
    };

    let write_return = functions_common::write_virtual_return(method.return_value.type_.as_ref());

    quote! {
        pub(super) unsafe extern "C" fn #name<T: #trait_name>(
            instance: sys::GDExtensionClassInstancePtr,
            args: *const sys::GDExtensionConstTypePtr,
            ret: sys::GDExtensionTypePtr,
        ) {
            // Panics are reported to the engine, which continues with a default return value.
            let _ = crate::private::handle_panic(
                || #context,
                || {
                    // SAFETY: the engine passes the instance pointer handed out at creation, arguments and return slot
                    // laid out according to the virtual's signature.
                    unsafe {
                        let storage = crate::storage::as_storage::<T>(instance);
                        #( #arg_reads )*
                        #call
                        drop(guard);
                        #write_return
                    }
                },
            );
        }
    }
}

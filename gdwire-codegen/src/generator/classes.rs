/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! One module per engine class: the class struct, its `Advanced` low-level API, enums, method table and virtual trait.

use std::path::Path;

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use crate::generator::{docs, enums, functions_common, method_tables, signals, virtual_traits};
use crate::models::domain::{Class, ClassMethod, ExtensionApi, FnQualifier, ModName, TyName};
use crate::util;
use crate::SubmitFn;

/// Output of one class, needed by the central `classes/mod.rs`.
pub struct GeneratedClassModule {
    pub class_name: TyName,
    pub module_name: ModName,
    pub inherits_macro: Ident,
}

pub fn generate_class_files(api: &ExtensionApi, gen_path: &Path, submit_fn: &mut SubmitFn) -> Vec<GeneratedClassModule> {
    let can_connect = api
        .find_class("Object")
        .is_some_and(|object| object.methods.iter().any(|m| m.godot_name == "connect"));

    let mut modules = vec![];
    for class in api.classes.iter() {
        let code = make_class(class, can_connect);
        let file_name = format!("{}.rs", class.mod_name.rust_mod);
        submit_fn(gen_path.join(file_name), code);

        modules.push(GeneratedClassModule {
            class_name: class.name.clone(),
            module_name: class.mod_name.clone(),
            inherits_macro: inherits_macro_name(&class.name),
        });
    }

    modules
}

pub fn make_class_module_file(modules: &[GeneratedClassModule]) -> TokenStream {
    let decls = modules.iter().map(|m| {
        let GeneratedClassModule {
            class_name,
            module_name,
            ..
        } = m;
        let trait_name = format_ident!("{}", class_name.virtual_trait_name());

        quote! {
            pub mod #module_name;
            pub use #module_name::re_export::{#class_name, #trait_name};
        }
    });
    // #[macro_export] places the macros in the crate root; the glob brings them into scope, so they are re-exported by
    // plain name. Absolute `crate::` paths to them are rejected by the compiler.
    let macros = modules.iter().map(|m| &m.inherits_macro);

    quote! {
        #( #decls )*

        #[doc(hidden)]
        pub mod class_macros {
            pub use crate::*;
            #( pub use #macros; )*
        }
    }
}

pub fn inherits_macro_name(class_name: &TyName) -> Ident {
    format_ident!("inherits_transitive_{}", class_name.rust_ty)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Implementation

pub(crate) fn make_class(class: &Class, can_connect: bool) -> TokenStream {
    let class_name = &class.name;
    let godot_class_str = &class.name.godot_ty;
    let module_doc = docs::make_module_doc(class_name);
    let class_doc = docs::make_class_doc(class);

    let base_ty = match &class.base_class {
        Some(base) => quote! { crate::classes::#base },
        None => quote! { crate::obj::NoBase },
    };
    let init_level = class.init_level;
    let (memory, dyn_memory) = make_bounds(class);

    let all_bases = class.ancestors.iter().map(|a| &a.rust_ty).collect::<Vec<_>>();
    let inherits_macro = inherits_macro_name(class_name);

    let virtual_trait = virtual_traits::make_virtual_trait(class);
    let trampolines = virtual_traits::make_trampolines(class);
    let singleton = make_singleton(class);
    let constants = make_constants(class);
    let high_level_methods = class
        .methods
        .iter()
        .filter(|m| !m.is_private)
        .map(make_high_level_method);
    let signals = signals::make_signals(class, can_connect);
    let virtual_names = class.virtuals.iter().map(|v| v.godot_name.as_str());
    let deref_impl = make_deref_impl(class_name, class.base_class.as_ref());
    let godot_default_impl = make_godot_default_impl(class);

    let enums = enums::make_enums(&class.enums);
    let advanced = make_advanced(class);
    let method_table = method_tables::make_method_table(class);

    quote! {
        #![doc = #module_doc]

        use crate::sys;

        pub(super) mod re_export {
            use super::*;

            #[doc = #class_doc]
            #[derive(Debug)]
            #[repr(C)]
            pub struct #class_name {
                object_ptr: sys::GDExtensionObjectPtr,

                // Same layout as RawGd<T>, so that Gd<T> can deref to this struct. Some(id) if every access must first verify
                // that the object is still alive.
                instance_id: Option<crate::obj::InstanceId>,
            }

            #virtual_trait

            impl #class_name {
                #singleton
                #constants
                #( #high_level_methods )*
                #signals

                /// Engine names of all virtual methods that a user class extending this one can override.
                pub const VIRTUAL_METHODS: &'static [&'static str] = &[ #( #virtual_names ),* ];

                /// Low-level API with wire-level signatures.
                pub fn advanced(&self) -> Advanced<'_> {
                    Advanced::from_instance(self)
                }
            }

            impl crate::obj::GodotClass for #class_name {
                type Base = #base_ty;

                fn class_name() -> crate::meta::ClassName {
                    crate::meta::ClassName::new_static(#godot_class_str)
                }

                const INIT_LEVEL: crate::init::InitLevel = #init_level;
            }

            unsafe impl crate::obj::Bounds for #class_name {
                type Memory = crate::obj::bounds::#memory;
                type DynMemory = crate::obj::bounds::#dyn_memory;
                type Declarer = crate::obj::bounds::DeclEngine;
            }

            impl crate::obj::EngineClass for #class_name {
                fn as_object_ptr(&self) -> sys::GDExtensionObjectPtr {
                    self.object_ptr
                }

                fn cached_instance_id(&self) -> Option<crate::obj::InstanceId> {
                    self.instance_id
                }
            }

            #(
                impl crate::obj::Inherits<crate::classes::#all_bases> for #class_name {}
            )*

            #deref_impl
            #godot_default_impl

            #[macro_export]
            #[doc(hidden)]
            #[allow(non_snake_case)]
            macro_rules! #inherits_macro {
                ($Class:ident) => {
                    impl $crate::obj::Inherits<$crate::classes::#class_name> for $Class {}
                    #(
                        impl $crate::obj::Inherits<$crate::classes::#all_bases> for $Class {}
                    )*
                }
            }
        }

        #enums
        #advanced
        #method_table
        #trampolines
    }
}

fn make_bounds(class: &Class) -> (Ident, Ident) {
    let memory = if class.is_refcounted {
        util::ident("MemRefCounted")
    } else {
        util::ident("MemManual")
    };

    // Object handles may point to reference-counted instances; decided per instance.
    let dyn_memory = if class.is_object() {
        util::ident("MemDynamic")
    } else {
        memory.clone()
    };

    (memory, dyn_memory)
}

fn make_deref_impl(class_name: &TyName, base: Option<&TyName>) -> TokenStream {
    let Some(base) = base else {
        return TokenStream::new();
    };

    quote! {
        impl std::ops::Deref for #class_name {
            type Target = crate::classes::#base;

            fn deref(&self) -> &Self::Target {
                // SAFETY: all class structs share one #[repr(C)] layout.
                unsafe { std::mem::transmute::<&Self, &Self::Target>(self) }
            }
        }

        impl std::ops::DerefMut for #class_name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                // SAFETY: see Deref.
                unsafe { std::mem::transmute::<&mut Self, &mut Self::Target>(self) }
            }
        }
    }
}

fn make_godot_default_impl(class: &Class) -> TokenStream {
    if !class.is_instantiable || class.is_singleton {
        return TokenStream::new();
    }

    let class_name = &class.name;
    quote! {
        impl crate::obj::cap::GodotDefault for #class_name {}
    }
}

fn make_singleton(class: &Class) -> TokenStream {
    if !class.is_singleton {
        return TokenStream::new();
    }

    quote! {
        /// The engine-wide instance of this class.
        ///
        /// Looked up once; later calls return a handle to the same object.
        pub fn singleton() -> crate::obj::Gd<Self> {
            static CACHE: crate::obj::SingletonCache = crate::obj::SingletonCache::new();
            CACHE.get::<Self>()
        }
    }
}

fn make_constants(class: &Class) -> TokenStream {
    let constants = class.constants.iter().map(|c| {
        let name = &c.name;
        let value = util::unsuffixed_lit(c.value);
        if util::fits_i32(c.value) {
            quote! { pub const #name: i32 = #value; }
        } else {
            quote! { pub const #name: i64 = #value; }
        }
    });

    quote! { #( #constants )* }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Methods

fn method_doc(method: &ClassMethod) -> TokenStream {
    let mut doc = method.doc.clone().unwrap_or_default();
    let defaults: Vec<(String, String)> = method
        .params
        .iter()
        .filter_map(|p| Some((p.name.to_string(), p.default_value.clone()?)))
        .collect();
    docs::append_defaults(&mut doc, &defaults);

    util::make_doc_attrs(&doc)
}

fn make_high_level_method(method: &ClassMethod) -> TokenStream {
    let name = &method.rust_name;
    let doc = method_doc(method);

    let receiver = match method.qualifier {
        FnQualifier::Const => quote! { &self, },
        FnQualifier::Mut => quote! { &mut self, },
        FnQualifier::Static => TokenStream::new(),
    };
    let target = match method.qualifier {
        FnQualifier::Static => quote! { Advanced:: },
        _ => quote! { self.advanced(). },
    };

    let params = method.params.iter().map(|p| {
        let name = &p.name;
        let ty = functions_common::high_param_type(p);
        quote! { #name: #ty }
    });
    let (preludes, args): (Vec<_>, Vec<_>) = method.params.iter().map(functions_common::high_to_wire_arg).unzip();

    let (return_decl, body) = match &method.return_value.type_ {
        None => (
            TokenStream::new(),
            quote! {
                #target #name(#( #args ),*);
            },
        ),
        Some(ty) => {
            let return_ty = functions_common::high_return_type(ty);
            let body = if functions_common::is_identity_return(ty) {
                quote! { #target #name(#( #args ),*) }
            } else {
                let ret = util::ident("ret");
                let conversion = functions_common::wire_to_high_return(ty, &ret);
                quote! {
                    let #ret = #target #name(#( #args ),*);
                    #conversion
                }
            };
            (quote! { -> #return_ty }, body)
        }
    };

    quote! {
        #doc
        pub fn #name(#receiver #( #params ),*) #return_decl {
            #( #preludes )*
            #body
        }
    }
}

fn make_advanced(class: &Class) -> TokenStream {
    let class_name = &class.name;
    let doc = docs::make_advanced_doc(class_name);
    let methods = class.methods.iter().map(make_advanced_method);

    quote! {
        #[doc = #doc]
        #[derive(Copy, Clone)]
        pub struct Advanced<'a> {
            object_ptr: sys::GDExtensionObjectPtr,
            _instance: std::marker::PhantomData<&'a re_export::#class_name>,
        }

        impl<'a> Advanced<'a> {
            /// Low-level API of `instance`.
            ///
            /// # Panics
            /// If `instance` tracks its instance ID and the object has been freed.
            pub fn from_instance(instance: &'a re_export::#class_name) -> Self {
                let object_ptr = crate::obj::EngineClass::__checked_object_ptr(instance);
                Self {
                    object_ptr,
                    _instance: std::marker::PhantomData,
                }
            }

            /// Low-level API of a raw object.
            ///
            /// # Safety
            /// `object_ptr` must point to a live object of this class (or a subclass) for `'a`.
            pub unsafe fn from_object_ptr(object_ptr: sys::GDExtensionObjectPtr) -> Self {
                Self {
                    object_ptr,
                    _instance: std::marker::PhantomData,
                }
            }

            pub fn object_ptr(self) -> sys::GDExtensionObjectPtr {
                self.object_ptr
            }

            #( #methods )*
        }
    }
}

fn make_advanced_method(method: &ClassMethod) -> TokenStream {
    let name = &method.rust_name;
    let godot_name = &method.godot_name;
    let doc = format!("Wire-level `{godot_name}`.");

    let (receiver, object) = match method.qualifier {
        FnQualifier::Static => (TokenStream::new(), quote! { std::ptr::null_mut() }),
        _ => (quote! { self, }, quote! { self.object_ptr }),
    };

    let params = method.params.iter().map(|p| {
        let name = &p.name;
        let ty = functions_common::wire_param_type(&p.type_);
        quote! { #name: #ty }
    });
    let pushes = method
        .params
        .iter()
        .map(|p| functions_common::push_wire_arg(&p.type_, &p.name));

    let return_ty = method.return_value.type_.as_ref();
    let return_decl = match return_ty {
        Some(ty) => {
            let ty = functions_common::wire_type(ty);
            quote! { -> #ty }
        }
        None => TokenStream::new(),
    };
    let table_entry = quote! { method_table().#name };
    let call = functions_common::call_with_wire_return(return_ty, &table_entry, &object);

    let frame_decl = if method.params.is_empty() {
        quote! { let frame = sys::CallFrame::new(); }
    } else {
        quote! { let mut frame = sys::CallFrame::new(); }
    };

    quote! {
        #[doc = #doc]
        pub fn #name(#receiver #( #params ),*) #return_decl {
            #frame_decl
            #( #pushes )*
            #call
        }
    }
}

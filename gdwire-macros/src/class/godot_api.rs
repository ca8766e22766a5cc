/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use proc_macro2::TokenStream;
use quote::quote;

use crate::class::inherent_impl::transform_inherent_impl;
use crate::util::{bail, last_ident};
use crate::ParseResult;

pub fn attribute_godot_api(meta: TokenStream, item: venial::Item) -> ParseResult<TokenStream> {
    let venial::Item::Impl(decl) = item else {
        return bail!(item, "#[godot_api] can only be applied on impl blocks");
    };

    if !meta.is_empty() {
        return bail!(meta, "#[godot_api] does not take any parameters");
    }

    if decl.impl_generic_params.is_some() {
        return bail!(&decl, "#[godot_api] does not support lifetimes or generic parameters");
    }

    if decl.trait_ty.is_none() {
        transform_inherent_impl(decl)
    } else {
        transform_trait_impl(decl)
    }
}

/// Codegen for `#[godot_api] impl ISomething for MyType`.
fn transform_trait_impl(original_impl: venial::Impl) -> ParseResult<TokenStream> {
    let Some(trait_ty) = original_impl.trait_ty.as_ref() else {
        return bail!(&original_impl, "expected trait impl");
    };

    let is_virtual_trait = last_ident(&trait_ty.tokens).is_some_and(|name| {
        let name = name.to_string();
        name.len() > 1 && name.starts_with('I') && name[1..].starts_with(char::is_uppercase)
    });
    if !is_virtual_trait {
        return bail!(
            trait_ty,
            "#[godot_api] for trait impls requires a virtual method trait (e.g. `INode`)"
        );
    }

    let class_name = &original_impl.self_ty;
    let prv = quote! { ::gdwire::private };

    let mut overridden = vec![];
    let mut has_init = false;
    for member in original_impl.body_items.iter() {
        let venial::ImplMember::AssocFunction(method) = member else {
            continue;
        };

        match method.name.to_string().as_str() {
            "init" => has_init = true,
            name => overridden.push(name.to_string()),
        }
    }

    let (godot_init_impl, create_fn) = if has_init {
        (
            quote! {
                impl ::gdwire::obj::cap::GodotDefault for #class_name {
                    fn __godot_user_init(base: ::gdwire::obj::Base<<Self as ::gdwire::obj::GodotClass>::Base>) -> Self {
                        <Self as #trait_ty>::init(base)
                    }
                }
            },
            quote! { Some(#prv::callbacks::create::<#class_name>) },
        )
    } else {
        (TokenStream::new(), quote! { None })
    };

    Ok(quote! {
        #original_impl

        impl #prv::You_forgot_the_attribute__godot_api for #class_name {}

        impl #prv::ImplementsVirtuals for #class_name {
            const OVERRIDDEN: &'static [&'static str] = &[ #( #overridden ),* ];

            fn __virtual_call(name: &str) -> ::gdwire::sys::GDExtensionClassCallVirtual {
                <Self as #trait_ty>::__godot_virtual_call(name)
            }
        }

        #godot_init_impl

        ::gdwire::sys::plugin_add!(#prv::__GODOT_PLUGIN_REGISTRY; #prv::ClassPlugin {
            class_name: <#class_name as ::gdwire::obj::GodotClass>::class_name(),
            init_level: <#class_name as ::gdwire::obj::GodotClass>::INIT_LEVEL,
            item: #prv::PluginItem::ITraitImpl {
                user_create_fn: #create_fn,
                get_virtual_fn: #prv::callbacks::get_virtual::<#class_name>,
            },
        });
    })
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(tokens: TokenStream) -> ParseResult<String> {
        let item = venial::parse_item(tokens)?;
        attribute_godot_api(TokenStream::new(), item).map(|out| out.to_string())
    }

    #[test]
    fn records_overridden_virtuals() {
        let out = expand(quote! {
            impl INode for Player {
                fn ready(&mut self) {}
                fn process(&mut self, delta: f64) {}
            }
        })
        .unwrap();

        assert!(out.contains(r#"["ready" , "process"]"#));
        assert!(out.contains("user_create_fn : None"));
        assert!(out.contains("get_virtual :: < Player >"));
    }

    #[test]
    fn init_override_makes_class_constructible() {
        let out = expand(quote! {
            impl IRefCounted for Counter {
                fn init(base: Base<RefCounted>) -> Self {
                    Self { base }
                }
            }
        })
        .unwrap();

        assert!(out.contains("GodotDefault for Counter"));
        assert!(out.contains("user_create_fn : Some"));
        assert!(out.contains("OVERRIDDEN"));
        assert!(!out.contains(r#""init""#));
    }

    #[test]
    fn rejects_foreign_trait_impls() {
        assert!(expand(quote! { impl Clone for Player { fn clone(&self) -> Self { todo!() } } }).is_err());
    }

    #[test]
    fn registers_funcs_by_receiver() {
        let out = expand(quote! {
            impl Player {
                #[func]
                fn health(&self) -> i32 { self.health }

                #[func(rename = heal_by)]
                fn heal(&mut self, amount: i32) {}

                #[func]
                fn make_default() -> Vector2 { Vector2::ZERO }

                fn helper(&self) {}
            }
        })
        .unwrap();

        assert!(!out.contains("# [func"), "attribute is consumed: {out}");
        assert!(out.contains("fn helper"));
        assert!(out.contains(r#"ClassMethodInfo :: new (class_name , "health""#));
        assert!(out.contains(r#""heal_by""#));
        assert!(!out.contains(r#""heal""#));
        assert!(out.contains("GDEXTENSION_METHOD_FLAG_CONST"));
        assert!(out.contains("GDEXTENSION_METHOD_FLAG_STATIC"));
        assert!(out.contains(r#". arg :: < i32 > ("amount")"#));
        assert!(out.contains(". returns :: < Vector2 > ()"));
        assert!(out.contains("storage . get_mut ()"));
        assert!(out.contains("PluginItem :: InherentImpl"));
    }

    #[test]
    fn signals_are_declarations() {
        let out = expand(quote! {
            impl Player {
                #[signal]
                fn hit(damage: i64, from: Vector2);
            }
        })
        .unwrap();

        assert!(out.contains(r#"register_signal (class_name , "hit""#));
        assert!(out.contains(r#"< i64 as :: gdwire :: meta :: GodotType > :: property_info ("damage")"#));
        assert!(!out.contains("fn hit"));

        assert!(expand(quote! { impl Player { #[signal] fn hit(damage: i64) {} } }).is_err());
        assert!(expand(quote! { impl Player { #[signal] fn hit(&self); } }).is_err());
    }

    #[test]
    fn rejects_unsupported_func_signatures() {
        assert!(expand(quote! { impl Player { #[func] fn take(self) {} } }).is_err());
        assert!(expand(quote! { impl Player { #[func] fn generic<T>(&self, t: T) {} } }).is_err());
        assert!(expand(quote! { impl Player { #[func(virtual)] fn f(&self) {} } }).is_err());
    }

    #[test]
    fn self_in_signatures_names_the_class() {
        let out = expand(quote! {
            impl Player {
                #[func]
                fn same(&self, other: Option<Gd<Self>>) {}
            }
        })
        .unwrap();

        assert!(out.contains(". arg :: < Option < Gd < Player >"));
    }
}

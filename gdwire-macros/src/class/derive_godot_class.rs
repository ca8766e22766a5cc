/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use crate::util::{bail, ident, is_base_type, KvParser};
use crate::ParseResult;

pub fn derive_godot_class(item: venial::Item) -> ParseResult<TokenStream> {
    let venial::Item::Struct(class) = item else {
        return bail!(item, "#[derive(GodotClass)] can only be applied to structs");
    };

    if class.generic_params.is_some() {
        return bail!(&class.generic_params, "#[derive(GodotClass)] does not support lifetimes or generic parameters");
    }

    let struct_cfg = parse_struct_attributes(&class)?;
    let fields = parse_fields(&class)?;

    let class_name = &class.name;
    let class_name_str = class_name.to_string();
    let base_ty = &struct_cfg.base_ty;
    let base_class = quote! { ::gdwire::classes::#base_ty };
    let inherits_macro = format_ident!("inherits_transitive_{}", base_ty);
    let prv = quote! { ::gdwire::private };

    let (godot_init_impl, create_fn) = if struct_cfg.has_generated_init {
        (
            make_godot_init_impl(class_name, &fields),
            quote! { Some(#prv::callbacks::create::<#class_name>) },
        )
    } else {
        (TokenStream::new(), quote! { None })
    };

    Ok(quote! {
        impl ::gdwire::obj::GodotClass for #class_name {
            type Base = #base_class;

            fn class_name() -> ::gdwire::meta::ClassName {
                ::gdwire::meta::ClassName::new_static(#class_name_str)
            }

            const INIT_LEVEL: ::gdwire::init::InitLevel = <#base_class as ::gdwire::obj::GodotClass>::INIT_LEVEL;
        }

        unsafe impl ::gdwire::obj::Bounds for #class_name {
            type Memory = <<Self as ::gdwire::obj::GodotClass>::Base as ::gdwire::obj::Bounds>::Memory;
            type DynMemory = <<Self as ::gdwire::obj::GodotClass>::Base as ::gdwire::obj::Bounds>::DynMemory;
            type Declarer = ::gdwire::obj::bounds::DeclUser;
        }

        #godot_init_impl

        #prv::class_macros::#inherits_macro!(#class_name);

        ::gdwire::sys::plugin_add!(#prv::__GODOT_PLUGIN_REGISTRY; #prv::ClassPlugin {
            class_name: <#class_name as ::gdwire::obj::GodotClass>::class_name(),
            init_level: <#class_name as ::gdwire::obj::GodotClass>::INIT_LEVEL,
            item: #prv::PluginItem::Struct {
                base_class_name: <#base_class as ::gdwire::obj::GodotClass>::class_name(),
                generated_create_fn: #create_fn,
                free_fn: #prv::callbacks::free::<#class_name>,
            },
        });
    })
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Parsing

struct ClassAttributes {
    base_ty: Ident,
    has_generated_init: bool,
}

struct Field {
    name: Ident,
    default_val: Option<TokenStream>,
}

struct Fields {
    all_fields: Vec<Field>,
    base_field: Option<Ident>,
}

fn parse_struct_attributes(class: &venial::Struct) -> ParseResult<ClassAttributes> {
    let mut base_ty = ident("RefCounted");
    let mut has_generated_init = false;

    if let Some(mut parser) = KvParser::parse(&class.attributes, "class")? {
        if let Some(base) = parser.handle_ident("base")? {
            base_ty = base;
        }

        has_generated_init = parser.handle_alone("init")?;
        parser.finish()?;
    }

    Ok(ClassAttributes {
        base_ty,
        has_generated_init,
    })
}

fn parse_fields(class: &venial::Struct) -> ParseResult<Fields> {
    let named_fields = match &class.fields {
        venial::Fields::Unit => vec![],
        venial::Fields::Tuple(_) => {
            return bail!(&class.fields, "#[derive(GodotClass)] is not supported for tuple structs");
        }
        venial::Fields::Named(fields) => fields.fields.inner.clone(),
    };

    let mut all_fields = vec![];
    let mut base_field = Option::<Ident>::None;

    for (named_field, _punct) in named_fields {
        let mut is_base = is_base_type(&named_field.ty.tokens);

        // #[base]
        if let Some(parser) = KvParser::parse(&named_field.attributes, "base")? {
            is_base = true;
            parser.finish()?;
        }

        if is_base {
            if let Some(prev) = &base_field {
                return bail!(
                    &named_field.name,
                    "at most one base field allowed, already found `{prev}`"
                );
            }
            base_field = Some(named_field.name.clone());
            continue;
        }

        // #[init(val = expr)]
        let mut default_val = None;
        if let Some(mut parser) = KvParser::parse(&named_field.attributes, "init")? {
            default_val = Some(parser.handle_expr("val")?.ok_or_else(|| {
                crate::util::error("#[init] requires `val = expression`", &named_field.name)
            })?);
            parser.finish()?;
        }

        all_fields.push(Field {
            name: named_field.name.clone(),
            default_val,
        });
    }

    Ok(Fields {
        all_fields,
        base_field,
    })
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Code generation

fn make_godot_init_impl(class_name: &Ident, fields: &Fields) -> TokenStream {
    let base_init = match &fields.base_field {
        Some(name) => quote! { #name: base, },
        None => TokenStream::new(),
    };
    let discard_base = if fields.base_field.is_none() {
        quote! { let _ = base; }
    } else {
        TokenStream::new()
    };

    let rest_init = fields.all_fields.iter().map(|field| {
        let name = &field.name;
        let value = match &field.default_val {
            Some(value) => value.clone(),
            None => quote! { ::std::default::Default::default() },
        };
        quote! { #name: #value, }
    });

    quote! {
        impl ::gdwire::obj::cap::GodotDefault for #class_name {
            fn __godot_user_init(base: ::gdwire::obj::Base<<Self as ::gdwire::obj::GodotClass>::Base>) -> Self {
                #discard_base
                Self {
                    #( #rest_init )*
                    #base_init
                }
            }
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(tokens: TokenStream) -> ParseResult<String> {
        let item = venial::parse_item(tokens)?;
        derive_godot_class(item).map(|out| out.to_string())
    }

    #[test]
    fn generates_registration_for_base_class() {
        let out = derive(quote! {
            #[class(base = Node, init)]
            struct Player {
                speed: f64,
                base: Base<Node>,
            }
        })
        .unwrap();

        assert!(out.contains("type Base = :: gdwire :: classes :: Node"));
        assert!(out.contains("inherits_transitive_Node"));
        assert!(out.contains("callbacks :: create :: < Player >"));
        assert!(out.contains("base : base"));
    }

    #[test]
    fn defaults_to_ref_counted_without_init() {
        let out = derive(quote! {
            struct Counter {
                count: i32,
            }
        })
        .unwrap();

        assert!(out.contains("classes :: RefCounted"));
        assert!(!out.contains("GodotDefault"));
        assert!(out.contains("generated_create_fn : None"));
    }

    #[test]
    fn custom_field_initializer() {
        let out = derive(quote! {
            #[class(init)]
            struct Lives {
                #[init(val = 3)]
                lives: i32,
            }
        })
        .unwrap();

        assert!(out.contains("lives : 3"));
        assert!(out.contains("let _ = base"));
    }

    #[test]
    fn rejects_two_base_fields() {
        let result = derive(quote! {
            #[class(base = Node)]
            struct Twice {
                a: Base<Node>,
                #[base]
                b: Gd<Node>,
            }
        });

        assert!(result.is_err());
    }

    #[test]
    fn rejects_tuple_structs() {
        assert!(derive(quote! { struct Tuple(i32); }).is_err());
    }
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use proc_macro2::{Group, Ident, TokenStream, TokenTree};
use quote::{format_ident, quote, ToTokens};

use crate::util::{bail, path_is_single, KvParser};
use crate::ParseResult;

enum ReceiverType {
    Ref,
    Mut,
    Static,
}

struct FuncDefinition {
    rust_name: Ident,
    godot_name: String,
    receiver: ReceiverType,
    params: Vec<(Ident, TokenStream)>,
    return_ty: Option<TokenStream>,
}

struct SignalDefinition {
    name: Ident,
    params: Vec<(Ident, TokenStream)>,
}

/// Codegen for `#[godot_api] impl MyType`.
pub fn transform_inherent_impl(mut original_impl: venial::Impl) -> ParseResult<TokenStream> {
    let class_name = original_impl.self_ty.to_token_stream();
    let prv = quote! { ::gdwire::private };

    let mut funcs = vec![];
    let mut signals = vec![];
    let mut kept_items = vec![];

    for member in std::mem::take(&mut original_impl.body_items) {
        let venial::ImplMember::AssocFunction(mut method) = member else {
            kept_items.push(member);
            continue;
        };

        let is_func = has_attribute(&method.attributes, "func");
        let is_signal = has_attribute(&method.attributes, "signal");

        if is_func && is_signal {
            return bail!(&method.name, "#[func] and #[signal] are mutually exclusive");
        } else if is_func {
            funcs.push(parse_func(&method, &class_name)?);
            method.attributes.retain(|attr| !path_is_single(&attr.path, "func"));
            kept_items.push(venial::ImplMember::AssocFunction(method));
        } else if is_signal {
            // Signals have no Rust body; the declaration is consumed.
            signals.push(parse_signal(&method, &class_name)?);
        } else {
            kept_items.push(venial::ImplMember::AssocFunction(method));
        }
    }
    original_impl.body_items = kept_items;

    let class_name_str = original_impl.self_ty.to_token_stream().to_string();
    let func_registrations = funcs
        .iter()
        .map(|func| make_method_registration(&class_name, &class_name_str, func));
    let signal_registrations = signals.iter().map(make_signal_registration);

    Ok(quote! {
        #original_impl

        impl #prv::ImplementsGodotApi for #class_name {
            fn __register_methods() {
                #[allow(unused_variables)]
                let class_name = <#class_name as ::gdwire::obj::GodotClass>::class_name();
                #( #func_registrations )*
                #( #signal_registrations )*
            }
        }

        ::gdwire::sys::plugin_add!(#prv::__GODOT_PLUGIN_REGISTRY; #prv::ClassPlugin {
            class_name: <#class_name as ::gdwire::obj::GodotClass>::class_name(),
            init_level: <#class_name as ::gdwire::obj::GodotClass>::INIT_LEVEL,
            item: #prv::PluginItem::InherentImpl {
                register_methods_fn: <#class_name as #prv::ImplementsGodotApi>::__register_methods,
            },
        });
    })
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Parsing

fn has_attribute(attributes: &[venial::Attribute], name: &str) -> bool {
    attributes.iter().any(|attr| path_is_single(&attr.path, name))
}

fn parse_func(method: &venial::Function, class_name: &TokenStream) -> ParseResult<FuncDefinition> {
    let mut parser = KvParser::parse_required(&method.attributes, "func", &method.name)?;
    let rename = parser.handle_ident("rename")?;
    parser.finish()?;

    if method.generic_params.is_some() {
        return bail!(&method.generic_params, "#[func] does not support lifetimes or generic parameters");
    }

    let mut receiver = ReceiverType::Static;
    let mut params = vec![];
    for (param, _) in method.params.inner.iter() {
        match param {
            venial::FnParam::Receiver(recv) => {
                receiver = match (&recv.tk_ref, &recv.tk_mut) {
                    (Some(_), None) => ReceiverType::Ref,
                    (Some(_), Some(_)) => ReceiverType::Mut,
                    (None, _) => return bail!(&recv.tk_self, "#[func] takes `&self` or `&mut self`, not `self` by value"),
                };
            }
            venial::FnParam::Typed(typed) => {
                params.push((typed.name.clone(), replace_self(&typed.ty.tokens, class_name)));
            }
        }
    }

    let return_ty = method
        .return_ty
        .as_ref()
        .filter(|ty| !is_unit(&ty.tokens))
        .map(|ty| replace_self(&ty.tokens, class_name));

    let godot_name = rename.as_ref().unwrap_or(&method.name).to_string();

    Ok(FuncDefinition {
        rust_name: method.name.clone(),
        godot_name,
        receiver,
        params,
        return_ty,
    })
}

fn parse_signal(method: &venial::Function, class_name: &TokenStream) -> ParseResult<SignalDefinition> {
    let parser = KvParser::parse_required(&method.attributes, "signal", &method.name)?;
    parser.finish()?;

    if let Some(body) = &method.body {
        return bail!(body, "#[signal] is a declaration; use `fn {}(...);` without body", method.name);
    }
    if method.return_ty.is_some() {
        return bail!(&method.return_ty, "#[signal] cannot have a return type");
    }

    let mut params = vec![];
    for (param, _) in method.params.inner.iter() {
        match param {
            venial::FnParam::Receiver(recv) => {
                return bail!(&recv.tk_self, "#[signal] has no receiver");
            }
            venial::FnParam::Typed(typed) => {
                params.push((typed.name.clone(), replace_self(&typed.ty.tokens, class_name)));
            }
        }
    }

    Ok(SignalDefinition {
        name: method.name.clone(),
        params,
    })
}

fn is_unit(tokens: &[TokenTree]) -> bool {
    matches!(tokens, [TokenTree::Group(group)] if group.stream().is_empty())
}

/// Replaces `Self` in a type, since the generated `extern "C"` functions are nested items without access to it.
fn replace_self(tokens: &[TokenTree], class_name: &TokenStream) -> TokenStream {
    let mut out = TokenStream::new();
    for tt in tokens {
        match tt {
            TokenTree::Ident(ident) if ident == "Self" => out.extend(class_name.clone()),
            TokenTree::Group(group) => {
                let inner: Vec<TokenTree> = group.stream().into_iter().collect();
                let mut replaced = Group::new(group.delimiter(), replace_self(&inner, class_name));
                replaced.set_span(group.span());
                out.extend([TokenTree::Group(replaced)]);
            }
            other => out.extend([other.clone()]),
        }
    }
    out
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Codegen

fn make_method_registration(class_name: &TokenStream, class_name_str: &str, func: &FuncDefinition) -> TokenStream {
    let prv = quote! { ::gdwire::private };
    let sys = quote! { ::gdwire::sys };
    let rust_name = &func.rust_name;
    let godot_name = &func.godot_name;
    let context = format!("{class_name_str}::{godot_name}");

    let arg_names: Vec<Ident> = (0..func.params.len()).map(|i| format_ident!("arg{i}")).collect();
    let mut arg_reads: Vec<TokenStream> = func
        .params
        .iter()
        .zip(&arg_names)
        .enumerate()
        .map(|(index, ((_, ty), arg))| {
            quote! { let #arg = <#ty as ::gdwire::meta::GodotType>::from_arg(args, #index); }
        })
        .collect();
    if arg_reads.is_empty() {
        arg_reads.push(quote! { let _ = args; });
    }

    let (call, flags) = match func.receiver {
        ReceiverType::Ref => (
            quote! {
                let storage = #prv::as_storage::<#class_name>(instance);
                let guard = storage.get();
                let result = <#class_name>::#rust_name(&*guard, #( #arg_names ),*);
                drop(guard);
            },
            quote! { #sys::GDEXTENSION_METHOD_FLAG_NORMAL | #sys::GDEXTENSION_METHOD_FLAG_CONST },
        ),
        ReceiverType::Mut => (
            quote! {
                let storage = #prv::as_storage::<#class_name>(instance);
                let mut guard = storage.get_mut();
                let result = <#class_name>::#rust_name(&mut *guard, #( #arg_names ),*);
                drop(guard);
            },
            quote! { #sys::GDEXTENSION_METHOD_FLAG_NORMAL },
        ),
        ReceiverType::Static => (
            quote! {
                let _ = instance;
                let result = <#class_name>::#rust_name(#( #arg_names ),*);
            },
            quote! { #sys::GDEXTENSION_METHOD_FLAG_NORMAL | #sys::GDEXTENSION_METHOD_FLAG_STATIC },
        ),
    };

    let (write_return, declare_return) = match &func.return_ty {
        Some(ty) => (
            quote! { <#ty as ::gdwire::meta::GodotType>::write_return(result, ret); },
            quote! { .returns::<#ty>() },
        ),
        None => (quote! { let () = result; let _ = ret; }, TokenStream::new()),
    };

    let declare_args = func.params.iter().map(|(name, ty)| {
        let name = name.to_string();
        quote! { .arg::<#ty>(#name) }
    });

    quote! {
        {
            unsafe extern "C" fn ptrcall(
                _method_userdata: *mut ::std::ffi::c_void,
                instance: #sys::GDExtensionClassInstancePtr,
                args: *const #sys::GDExtensionConstTypePtr,
                ret: #sys::GDExtensionTypePtr,
            ) {
                let _ = #prv::handle_panic(
                    || #context,
                    || {
                        // SAFETY: the engine passes the instance of this class, arguments and return slot laid out as
                        // registered below.
                        unsafe {
                            #( #arg_reads )*
                            #call
                            #write_return
                        }
                    },
                );
            }

            unsafe extern "C" fn varcall(
                _method_userdata: *mut ::std::ffi::c_void,
                _instance: #sys::GDExtensionClassInstancePtr,
                _args: *const #sys::GDExtensionConstVariantPtr,
                _arg_count: #sys::GDExtensionInt,
                _ret: #sys::GDExtensionVariantPtr,
                error: *mut #sys::GDExtensionCallError,
            ) {
                #prv::reject_varcall(#context, error);
            }

            // SAFETY: ptrcall reads the arguments and writes the return value declared here, in this order.
            let method_info = unsafe {
                #prv::ClassMethodInfo::new(class_name, #godot_name, Some(varcall), Some(ptrcall), #flags)
            }
            #( #declare_args )*
            #declare_return;

            method_info.register_extension_class_method();
        }
    }
}

fn make_signal_registration(signal: &SignalDefinition) -> TokenStream {
    let signal_name = signal.name.to_string();
    let param_infos = signal.params.iter().map(|(name, ty)| {
        let name = name.to_string();
        quote! { <#ty as ::gdwire::meta::GodotType>::property_info(#name) }
    });

    quote! {
        ::gdwire::private::register_signal(class_name, #signal_name, &[ #( #param_infos ),* ]);
    }
}

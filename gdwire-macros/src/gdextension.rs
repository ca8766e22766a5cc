/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use proc_macro2::TokenStream;
use quote::quote;

use crate::util::{bail, ident, last_ident, KvParser};
use crate::ParseResult;

pub fn attribute_gdextension(item: venial::Item) -> ParseResult<TokenStream> {
    let venial::Item::Impl(mut impl_decl) = item else {
        return bail!(item, "#[gdextension] can only be applied to trait impls");
    };

    let implements_library = impl_decl
        .trait_ty
        .as_ref()
        .and_then(|ty| last_ident(&ty.tokens))
        .is_some_and(|name| name == "ExtensionLibrary");
    if !implements_library {
        return bail!(&impl_decl, "#[gdextension] can only be applied to `unsafe impl ExtensionLibrary for T`");
    }

    if impl_decl.tk_unsafe.is_none() {
        return bail!(
            impl_decl.tk_impl,
            "`impl ExtensionLibrary` must be marked unsafe, to confirm the library upholds the engine's threading and safety rules"
        );
    }

    let drained_attributes = std::mem::take(&mut impl_decl.attributes);
    let mut parser = KvParser::parse_required(&drained_attributes, "gdextension", &impl_decl)?;
    let entry_symbol = parser.handle_ident("entry_symbol")?;
    parser.finish()?;

    let entry_symbol = entry_symbol.unwrap_or_else(|| ident("gdext_rust_init"));
    let impl_ty = &impl_decl.self_ty;

    Ok(quote! {
        #impl_decl

        #[no_mangle]
        unsafe extern "C" fn #entry_symbol(
            get_proc_address: ::gdwire::sys::GDExtensionInterfaceGetProcAddress,
            library: ::gdwire::sys::GDExtensionClassLibraryPtr,
            init: *mut ::gdwire::sys::GDExtensionInitialization,
        ) -> ::gdwire::sys::GDExtensionBool {
            ::gdwire::init::__gdwire_load_library::<#impl_ty>(get_proc_address, library, init)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(tokens: TokenStream) -> ParseResult<String> {
        let item = venial::parse_item(tokens)?;
        attribute_gdextension(item).map(|out| out.to_string())
    }

    #[test]
    fn exports_default_entry_symbol() {
        let out = expand(quote! {
            #[gdextension()]
            unsafe impl ExtensionLibrary for MyExtension {}
        })
        .unwrap();

        assert!(out.contains("fn gdext_rust_init"));
        assert!(out.contains("__gdwire_load_library :: < MyExtension >"));
    }

    #[test]
    fn custom_entry_symbol() {
        let out = expand(quote! {
            #[gdextension(entry_symbol = my_init)]
            unsafe impl ExtensionLibrary for MyExtension {}
        })
        .unwrap();

        assert!(out.contains("fn my_init"));
        assert!(!out.contains("gdext_rust_init"));
    }

    #[test]
    fn requires_unsafe_impl() {
        let result = expand(quote! {
            #[gdextension()]
            impl ExtensionLibrary for MyExtension {}
        });
        assert!(result.is_err());
    }
}

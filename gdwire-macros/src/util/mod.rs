/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod kv_parser;

use proc_macro2::{Ident, TokenTree};
use quote::{format_ident, ToTokens};

use crate::ParseResult;

pub(crate) use kv_parser::KvParser;

pub fn ident(s: &str) -> Ident {
    format_ident!("{}", s)
}

/// Returns an error at `tokens`, formatting the message like `format!`.
macro_rules! bail {
    ($tokens:expr, $format_string:literal $($rest:tt)*) => {
        $crate::util::bail_fn(format!($format_string $($rest)*), $tokens)
    };
}

pub(crate) use bail;

pub fn bail_fn<R>(msg: impl AsRef<str>, tokens: impl ToTokens) -> ParseResult<R> {
    Err(error(msg, tokens))
}

pub fn error(msg: impl AsRef<str>, tokens: impl ToTokens) -> venial::Error {
    venial::Error::new_at_tokens(tokens, msg.as_ref())
}

pub(crate) fn path_is_single(path: &[TokenTree], expected: &str) -> bool {
    path.len() == 1 && path[0].to_string() == expected
}

pub(crate) fn is_punct(tt: &TokenTree, c: char) -> bool {
    matches!(tt, TokenTree::Punct(punct) if punct.as_char() == c)
}

/// Last identifier of a type or path, e.g. `INode` for `gdwire::classes::INode`.
pub(crate) fn last_ident(tokens: &[TokenTree]) -> Option<&Ident> {
    tokens.iter().rev().find_map(|tt| match tt {
        TokenTree::Ident(ident) => Some(ident),
        _ => None,
    })
}

/// Whether a field type is `Base<...>`, possibly qualified.
pub(crate) fn is_base_type(tokens: &[TokenTree]) -> bool {
    tokens.windows(2).any(|pair| match pair {
        [TokenTree::Ident(ident), next] => ident == "Base" && is_punct(next, '<'),
        _ => false,
    })
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    fn tokens(stream: proc_macro2::TokenStream) -> Vec<TokenTree> {
        stream.into_iter().collect()
    }

    #[test]
    fn detects_base_field_types() {
        assert!(is_base_type(&tokens(quote! { Base<Node> })));
        assert!(is_base_type(&tokens(quote! { gdwire::obj::Base<RefCounted> })));
        assert!(!is_base_type(&tokens(quote! { BaseNode })));
        assert!(!is_base_type(&tokens(quote! { Option<Gd<Node>> })));
    }

    #[test]
    fn finds_last_ident() {
        let path = tokens(quote! { gdwire::classes::INode });
        assert_eq!(last_ident(&path).map(ToString::to_string), Some("INode".to_string()));
    }
}

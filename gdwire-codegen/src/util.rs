/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use proc_macro2::{Ident, Literal, TokenStream};
use quote::{format_ident, quote};

pub fn ident(s: &str) -> Ident {
    format_ident!("{}", s)
}

#[rustfmt::skip]
pub fn safe_ident(s: &str) -> Ident {
    // See also: https://doc.rust-lang.org/reference/keywords.html
    match s {
        // Lexer
        | "as" | "break" | "const" | "continue" | "crate" | "else" | "enum" | "extern" | "false" | "fn" | "for" | "if"
        | "impl" | "in" | "let" | "loop" | "match" | "mod" | "move" | "mut" | "pub" | "ref" | "return" | "self" | "Self"
        | "static" | "struct" | "super" | "trait" | "true" | "type" | "unsafe" | "use" | "where" | "while"

        // Lexer 2018+
        | "async" | "await" | "dyn"

        // Reserved
        | "abstract" | "become" | "box" | "do" | "final" | "macro" | "override" | "priv" | "typeof" | "unsized" | "virtual" | "yield"

        // Reserved 2018+
        | "try" | "gen"
           => format_ident!("{}_", s),

         _ => ident(s)
    }
}

/// Integer literal without type suffix, e.g. `-1` instead of `-1i64`.
pub fn unsuffixed_lit(value: i64) -> TokenStream {
    if value < 0 {
        let abs = Literal::u64_unsuffixed(value.unsigned_abs());
        quote! { -#abs }
    } else {
        let lit = Literal::i64_unsuffixed(value);
        quote! { #lit }
    }
}

/// `true` if `value` can be stored in `i32` without loss.
pub fn fits_i32(value: i64) -> bool {
    i32::try_from(value).is_ok()
}

/// Doc attribute from a string; one attribute per line, so that rustdoc keeps the line structure.
pub fn make_doc_attrs(doc: &str) -> TokenStream {
    let lines = doc.lines().map(|line| {
        // Leading space, as in `/// text`.
        let line = if line.is_empty() { String::new() } else { format!(" {line}") };
        quote! { #[doc = #line] }
    });

    quote! { #( #lines )* }
}

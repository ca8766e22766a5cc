/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Proc-macros of `gdwire`. Generated code refers to the facade crate as `::gdwire`.

mod class;
mod gdextension;
mod util;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

use crate::util::ident;

/// Derive macro for user classes, structs whose instances are attached to engine objects.
///
/// ```ignore
/// #[derive(GodotClass)]
/// #[class(base = Node, init)]
/// struct Player {
///     speed: f64,
///     #[init(val = 3)]
///     lives: i32,
///     base: Base<Node>,
/// }
/// ```
///
/// # Class attribute
/// `#[class(...)]` accepts these keys:
/// * `base = Class`: engine class to extend. Defaults to `RefCounted`.
/// * `init`: generates the constructor the engine uses to instantiate the class. Fields are default-initialized, unless they
///   carry `#[init(val = expr)]`. Alternatively, override `init()` in the `I<Base>` trait impl.
///
/// # Base field
/// A field of type `Base<T>` (or one marked `#[base]`) receives the engine base object. At most one is allowed.
#[proc_macro_derive(GodotClass, attributes(class, base, init))]
pub fn derive_godot_class(input: TokenStream) -> TokenStream {
    translate(input, class::derive_godot_class)
}

/// Attribute for the `impl` blocks of a user class.
///
/// On `impl I<Base> for MyClass`, records which virtual methods the impl overrides, so the engine calls them. Methods not
/// overridden keep the engine's default behavior. Overriding `init()` makes the class constructible by the engine.
///
/// On an inherent `impl MyClass`, registers methods and signals with the class database:
///
/// ```ignore
/// #[godot_api]
/// impl Player {
///     #[func]
///     fn take_damage(&mut self, amount: i32) -> bool { ... }
///
///     #[func(rename = spawn_point)]
///     fn default_position() -> Vector2 { ... }
///
///     #[signal]
///     fn died(position: Vector2);
/// }
/// ```
///
/// `#[func]` methods take `&self`, `&mut self` or no receiver. Parameter and return types implement `meta::GodotType`.
/// They are callable with typed arguments (ptrcall); Variant calls are rejected. `#[signal]` declarations have no body.
#[proc_macro_attribute]
pub fn godot_api(meta: TokenStream, input: TokenStream) -> TokenStream {
    translate(input, |item| class::attribute_godot_api(TokenStream2::from(meta), item))
}

/// Declares the entry point of the extension library, on an `unsafe impl ExtensionLibrary` block.
///
/// The exported symbol is `gdext_rust_init`, unless overridden with `#[gdextension(entry_symbol = name)]`. It must match the
/// `entry_symbol` of the `.gdextension` file.
#[proc_macro_attribute]
pub fn gdextension(meta: TokenStream, input: TokenStream) -> TokenStream {
    translate_meta("gdextension", meta, input, gdextension::attribute_gdextension)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

type ParseResult<T> = Result<T, venial::Error>;

fn translate<F>(input: TokenStream, transform: F) -> TokenStream
where
    F: FnOnce(venial::Item) -> ParseResult<TokenStream2>,
{
    let input2 = TokenStream2::from(input);

    let result2 = venial::parse_item(input2)
        .and_then(transform)
        .unwrap_or_else(|e| e.to_compile_error());

    TokenStream::from(result2)
}

/// For attribute macros whose arguments are parsed with [`util::KvParser`]: re-attaches `#[name(meta)]` to the item.
fn translate_meta<F>(self_name: &str, meta: TokenStream, input: TokenStream, transform: F) -> TokenStream
where
    F: FnOnce(venial::Item) -> ParseResult<TokenStream2>,
{
    let self_name = ident(self_name);
    let meta2 = TokenStream2::from(meta);
    let input2 = TokenStream2::from(input);

    let result2 = venial::parse_item(quote::quote! { #[#self_name(#meta2)] #input2 })
        .and_then(transform)
        .unwrap_or_else(|e| e.to_compile_error());

    TokenStream::from(result2)
}

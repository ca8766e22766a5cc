/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Signal tables and typed `connect_*` helpers.
//!
//! Signals are not symbols of their own in the class database; subscribing goes through `Object::connect()` with the
//! signal name. Helpers are generated for parameterless signals, whose handler is a plain `FnMut()`.

use proc_macro2::TokenStream;
use quote::quote;

use crate::conv;
use crate::models::domain::{Class, ClassSignal};
use crate::util::{self, ident};

/// `SIGNALS` constant and `connect_*` methods for the class's `impl` block.
///
/// `can_connect` is false if `Object::connect` has no binding, in which case no helpers are emitted.
pub fn make_signals(class: &Class, can_connect: bool) -> TokenStream {
    let names = class.signals.iter().map(|s| s.godot_name.as_str());
    let mut table_doc = format!("Signals declared by `{}` itself (not inherited ones):\n", class.name.godot_ty);
    for signal in &class.signals {
        let params: Vec<String> = signal.params.iter().map(|p| format!("{}: {}", p.name, p.godot_ty)).collect();
        table_doc.push_str(&format!("\n* `{}({})`", signal.godot_name, params.join(", ")));
    }
    let table_doc = util::make_doc_attrs(&table_doc);

    let connects = class
        .signals
        .iter()
        .filter(|_| can_connect)
        .filter(|s| s.params.is_empty())
        .filter(|s| !clashes_with_method(class, s))
        .map(make_connect_fn);

    quote! {
        #table_doc
        pub const SIGNALS: &'static [&'static str] = &[ #( #names ),* ];

        #( #connects )*
    }
}

fn make_connect_fn(signal: &ClassSignal) -> TokenStream {
    let fn_name = ident(&conv::signal_connect_fn_name(&signal.godot_name));
    let signal_name = &signal.godot_name;
    let doc = format!("Connects `handler` to signal `{signal_name}`; it runs each time the signal is emitted.");

    quote! {
        #[doc = #doc]
        pub fn #fn_name(&mut self, handler: impl FnMut() + 'static) -> crate::global::Error {
            let callable = crate::builtin::Callable::from_fn(#signal_name, handler);
            self.connect(#signal_name, &callable, 0)
        }
    }
}

fn clashes_with_method(class: &Class, signal: &ClassSignal) -> bool {
    let fn_name = conv::signal_connect_fn_name(&signal.godot_name);
    class.methods.iter().any(|m| m.rust_name == fn_name)
}

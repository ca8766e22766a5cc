/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Engine-provided enums and bitfields.
//!
//! All enums are non-exhaustive newtypes with associated constants: the engine may pass ordinals the generated code does
//! not know, and those must survive a round trip unchanged.

use std::collections::HashSet;

use proc_macro2::{Literal, TokenStream};
use quote::quote;

use crate::models::domain::{Enum, Enumerator};
use crate::util;

pub fn make_enums(enums: &[Enum]) -> TokenStream {
    let definitions = enums.iter().map(make_enum_definition);

    quote! {
        #( #definitions )*
    }
}

pub fn make_enum_definition(enum_: &Enum) -> TokenStream {
    let name = &enum_.name;
    let godot_name = &enum_.godot_name;
    let doc = if enum_.is_bitfield {
        format!("Godot bitfield `{godot_name}`.")
    } else {
        format!("Godot enum `{godot_name}`.")
    };

    let ord_type = if enum_.is_bitfield {
        quote! { u64 }
    } else {
        quote! { i32 }
    };

    let enumerators = enum_.enumerators.iter().map(|e| make_enumerator_definition(e, enum_.is_bitfield));
    let engine_trait_impl = make_engine_trait_impl(enum_);
    let debug_impl = make_debug_impl(enum_);
    let bitwise_impls = make_bitwise_operators(enum_);

    quote! {
        #[doc = #doc]
        #[derive(Copy, Clone, Eq, PartialEq, Hash)]
        #[repr(transparent)]
        pub struct #name {
            ord: #ord_type
        }

        impl #name {
            #( #enumerators )*
        }

        #engine_trait_impl
        #debug_impl
        #bitwise_impls
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Implementation

fn make_enumerator_definition(enumerator: &Enumerator, is_bitfield: bool) -> TokenStream {
    let Enumerator {
        name,
        godot_name,
        value,
    } = enumerator;

    let docs = if name != godot_name {
        let doc = format!("Godot enumerator name: `{godot_name}`");
        quote! {
            #[doc(alias = #godot_name)]
            #[doc = #doc]
        }
    } else {
        TokenStream::new()
    };

    let ord = make_ord_literal(*value, is_bitfield);
    quote! {
        #docs
        pub const #name: Self = Self { ord: #ord };
    }
}

fn make_engine_trait_impl(enum_: &Enum) -> TokenStream {
    let name = &enum_.name;

    if enum_.is_bitfield {
        return quote! {
            impl crate::obj::EngineBitfield for #name {
                fn from_ord(ord: u64) -> Self {
                    Self { ord }
                }

                fn ord(self) -> u64 {
                    self.ord
                }
            }
        };
    }

    // Aliases share an ordinal; the first enumerator names it.
    let unique = unique_enumerators(enum_);
    let ords = unique.iter().map(|e| make_ord_literal(e.value, false));
    let names = unique.iter().map(|e| e.name.to_string());
    let ords_again = unique.iter().map(|e| make_ord_literal(e.value, false));
    let known_ords = if unique.is_empty() {
        TokenStream::new()
    } else {
        quote! { #( #ords )|* => Some(Self { ord }), }
    };

    quote! {
        impl crate::obj::EngineEnum for #name {
            fn from_ord(ord: i32) -> Self {
                Self { ord }
            }

            fn try_from_ord(ord: i32) -> Option<Self> {
                match ord {
                    #known_ords
                    _ => None,
                }
            }

            fn ord(self) -> i32 {
                self.ord
            }

            fn as_str(&self) -> &'static str {
                match self.ord {
                    #( #ords_again => #names, )*
                    _ => "",
                }
            }
        }
    }
}

fn make_debug_impl(enum_: &Enum) -> TokenStream {
    let name = &enum_.name;
    let name_str = name.to_string();

    if enum_.is_bitfield {
        // Single-bit flags are printed by name, remaining bits numerically.
        let flags: Vec<&Enumerator> = unique_enumerators(enum_)
            .into_iter()
            .filter(|e| e.value > 0 && (e.value as u64).is_power_of_two())
            .collect();
        let flag_ords = flags.iter().map(|e| make_ord_literal(e.value, true));
        let flag_names = flags.iter().map(|e| e.name.to_string());

        return quote! {
            impl std::fmt::Debug for #name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    let flags: &[(u64, &str)] = &[ #( (#flag_ords, #flag_names) ),* ];
                    let mut remaining = self.ord;
                    let mut parts: Vec<String> = Vec::new();
                    for &(bit, flag_name) in flags {
                        if remaining & bit != 0 {
                            parts.push(flag_name.to_string());
                            remaining &= !bit;
                        }
                    }
                    if remaining != 0 || parts.is_empty() {
                        parts.push(format!("{remaining:#x}"));
                    }

                    write!(f, "{}({})", #name_str, parts.join(" | "))
                }
            }
        };
    }

    quote! {
        impl std::fmt::Debug for #name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let enumerator = crate::obj::EngineEnum::as_str(self);
                if enumerator.is_empty() {
                    f.debug_struct(#name_str).field("ord", &self.ord).finish()
                } else {
                    f.write_str(enumerator)
                }
            }
        }
    }
}

fn make_bitwise_operators(enum_: &Enum) -> TokenStream {
    if !enum_.is_bitfield {
        return TokenStream::new();
    }

    let name = &enum_.name;
    quote! {
        impl std::ops::BitOr for #name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self::Output {
                Self { ord: self.ord | rhs.ord }
            }
        }

        impl std::ops::BitOrAssign for #name {
            fn bitor_assign(&mut self, rhs: Self) {
                *self = *self | rhs;
            }
        }
    }
}

fn unique_enumerators(enum_: &Enum) -> Vec<&Enumerator> {
    let mut seen = HashSet::new();
    enum_
        .enumerators
        .iter()
        .filter(|e| seen.insert(e.value))
        .collect()
}

fn make_ord_literal(value: i64, is_bitfield: bool) -> TokenStream {
    if is_bitfield {
        let lit = Literal::u64_unsuffixed(value as u64);
        quote! { #lit }
    } else {
        assert!(util::fits_i32(value), "enum ordinal {value} exceeds i32");
        util::unsuffixed_lit(value)
    }
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashMap;

use proc_macro2::{Ident, TokenStream, TokenTree};
use quote::ToTokens;

use crate::util::{bail, error, ident, is_punct, path_is_single};
use crate::ParseResult;

type KvMap = HashMap<Ident, Option<KvValue>>;

/// Tokens after `key =`; never empty.
#[derive(Clone, Debug)]
pub(crate) struct KvValue {
    tokens: Vec<TokenTree>,
}

impl KvValue {
    fn ident(self) -> ParseResult<Ident> {
        match self.tokens.as_slice() {
            [TokenTree::Ident(ident)] => Ok(ident.clone()),
            [TokenTree::Ident(_), extra, ..] => bail!(extra, "expected a single identifier, not an expression"),
            [other, ..] => bail!(other, "expected identifier"),
            [] => unreachable!("KvValue is never empty"),
        }
    }

    fn expr(self) -> TokenStream {
        self.tokens.into_iter().collect()
    }
}

/// Parses attributes like `#[attr(key, key2 = value, key3 = 1 + 2)]`.
///
/// Each `handle_*` call consumes a key; [`finish()`][Self::finish] then reports keys nobody asked for.
pub(crate) struct KvParser {
    map: KvMap,
}

impl KvParser {
    /// Parser for the `#[expected]` attribute among `attributes`, or `None` if absent.
    pub fn parse(attributes: &[venial::Attribute], expected: &str) -> ParseResult<Option<Self>> {
        let mut found: Option<Self> = None;

        for attr in attributes {
            if !path_is_single(&attr.path, expected) {
                continue;
            }

            if found.is_some() {
                return bail!(attr, "only a single #[{expected}] attribute allowed");
            }

            found = Some(Self {
                map: parse_map(expected, &attr.value)?,
            });
        }

        Ok(found)
    }

    /// Like [`parse()`][Self::parse], but an absent attribute is an error at `context`.
    pub fn parse_required(
        attributes: &[venial::Attribute],
        expected: &str,
        context: impl ToTokens,
    ) -> ParseResult<Self> {
        match Self::parse(attributes, expected)? {
            Some(parser) => Ok(parser),
            None => bail!(context, "expected attribute #[{expected}], but not present"),
        }
    }

    /// Key without value, e.g. `init` in `#[class(init)]`. Returns whether it is present.
    pub fn handle_alone(&mut self, key: &str) -> ParseResult<bool> {
        match self.map.remove_entry(&ident(key)) {
            None => Ok(false),
            Some((_, None)) => Ok(true),
            Some((key, Some(_))) => bail!(key, "key `{key}` should not have a value"),
        }
    }

    /// Optional key whose value is a single identifier.
    pub fn handle_ident(&mut self, key: &str) -> ParseResult<Option<Ident>> {
        match self.map.remove_entry(&ident(key)) {
            None => Ok(None),
            Some((key, None)) => bail!(key, "expected `{key}` to be followed by `= identifier`"),
            Some((_, Some(value))) => value.ident().map(Some),
        }
    }

    /// Optional key whose value is an arbitrary expression.
    pub fn handle_expr(&mut self, key: &str) -> ParseResult<Option<TokenStream>> {
        match self.map.remove_entry(&ident(key)) {
            None => Ok(None),
            Some((key, None)) => bail!(key, "expected `{key}` to be followed by `= expression`"),
            Some((_, Some(value))) => Ok(Some(value.expr())),
        }
    }

    /// Fails on any key that was not handled.
    pub fn finish(self) -> ParseResult<()> {
        let mut keys: Vec<Ident> = self.map.into_keys().collect();
        keys.sort_by_key(ToString::to_string);

        let mut errors = keys.iter().map(|key| error(format!("unrecognized key `{key}`"), key));
        match errors.next() {
            None => Ok(()),
            Some(first) => Err(errors.fold(first, |mut acc, e| {
                acc.combine(e);
                acc
            })),
        }
    }
}

fn parse_map(attr_name: &str, value: &venial::AttributeValue) -> ParseResult<KvMap> {
    if let venial::AttributeValue::Equals(punct, _) = value {
        return bail!(punct, "expected `(` or `]` after #[{attr_name}");
    }

    let mut map = KvMap::new();

    // Arguments are separated by top-level commas; commas inside groups belong to the value.
    for segment in value.get_value_tokens().split(|tt| is_punct(tt, ',')) {
        let Some((first, rest)) = segment.split_first() else {
            continue;
        };

        let TokenTree::Ident(key) = first else {
            return bail!(first, "expected identifier as key of #[{attr_name}]");
        };

        let value = match rest.split_first() {
            None => None,
            Some((eq, value_tokens)) if is_punct(eq, '=') => {
                if value_tokens.is_empty() {
                    return bail!(eq, "expected value after `=`");
                }
                Some(KvValue {
                    tokens: value_tokens.to_vec(),
                })
            }
            Some((other, _)) => {
                return bail!(other, "expected `,` or `= value` after `{key}`");
            }
        };

        if map.insert(key.clone(), value).is_some() {
            return bail!(key, "duplicate key `{key}`");
        }
    }

    Ok(map)
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

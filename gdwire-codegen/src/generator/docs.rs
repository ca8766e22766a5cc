/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Rustdoc for generated symbols.
//!
//! Single module for documentation, rather than having it in each symbol-specific file, so docs stay consistent. Engine
//! descriptions come as BBCode and are converted to Markdown here.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::models::domain::{Class, TyName};

/// Class descriptions have already been converted to Markdown during mapping.
pub fn make_class_doc(class: &Class) -> String {
    let TyName { rust_ty, godot_ty } = &class.name;

    let inherits_line = match &class.base_class {
        Some(base) => format!("Inherits [`{base}`][crate::classes::{base}].", base = base.rust_ty),
        None => "This is the base class for all other classes at the root of the hierarchy. \
            Every instance of `Object` can be stored in a [`Gd`][crate::obj::Gd] smart pointer."
            .to_string(),
    };

    let module = &class.mod_name.rust_mod;
    let mut related = format!(
        "* [`{module}`][crate::classes::{module}]: sidecar module with enums and the low-level `Advanced` API\n"
    );
    let trait_name = class.name.virtual_trait_name();
    related.push_str(&format!("* [`{trait_name}`][crate::classes::{trait_name}]: virtual methods\n"));

    let mut doc = format!("Godot class `{godot_ty}`.\n\n");
    if let Some(brief) = &class.brief_doc {
        doc.push_str(brief);
        doc.push_str("\n\n");
    }
    doc.push_str(&format!("{inherits_line}\n\nRelated symbols:\n\n{related}"));

    if class.is_singleton {
        doc.push_str(&format!(
            "\nThis class is a singleton; access it through [`{rust_ty}::singleton()`].\n"
        ));
    }
    if let Some(description) = &class.doc {
        doc.push_str("\n# Description\n\n");
        doc.push_str(description);
        doc.push('\n');
    }
    if !class.skipped_methods.is_empty() {
        let skipped: Vec<String> = class.skipped_methods.iter().map(|m| format!("`{m}`")).collect();
        doc.push_str(&format!(
            "\nMethods without a binding, since their signatures use unsupported types: {}.\n",
            skipped.join(", ")
        ));
    }

    doc
}

pub fn make_virtual_trait_doc(class_name: &TyName) -> String {
    let TyName { rust_ty, .. } = class_name;

    format!(
        "Virtual methods for class [`{rust_ty}`][crate::classes::{rust_ty}].\
        \n\n\
        These methods represent constructors (`init`) or callbacks invoked by the engine. Only methods that an \
        implementation overrides are reported to the engine; for all others, the engine's default behavior applies."
    )
}

pub fn make_module_doc(class_name: &TyName) -> String {
    let TyName { rust_ty, .. } = class_name;

    format!(
        "Sidecar module for class [`{rust_ty}`][crate::classes::{rust_ty}].\
        \n\n\
        Defines related flag and enum types, and the low-level [`Advanced`] API with wire-level signatures."
    )
}

pub fn make_advanced_doc(class_name: &TyName) -> String {
    let TyName { rust_ty, .. } = class_name;

    format!(
        "Low-level methods of [`{rust_ty}`][crate::classes::{rust_ty}], with wire-level signatures.\
        \n\n\
        Integers are `i64`, floats `f64`, enums their ordinal as `i64`, objects tagged raw pointers. Returned objects carry \
        the ownership tag the caller must honor."
    )
}

/// Appends the default values of parameters to a method doc.
pub fn append_defaults(doc: &mut String, defaults: &[(String, String)]) {
    if defaults.is_empty() {
        return;
    }

    if !doc.is_empty() {
        doc.push_str("\n\n");
    }
    doc.push_str("Default values in Godot:");
    for (param, value) in defaults {
        doc.push_str(&format!("\n* `{param}`: `{value}`"));
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// BBCode

struct BbcodeRegexes {
    url: Regex,
    codeblock: Regex,
    code: Regex,
    reference: Regex,
    method: Regex,
    class_link: Regex,
}

fn regexes() -> &'static BbcodeRegexes {
    static REGEXES: OnceLock<BbcodeRegexes> = OnceLock::new();

    // Patterns are literals; a failure here is a bug in this file.
    REGEXES.get_or_init(|| BbcodeRegexes {
        url: Regex::new(r"\[url=([^\]]+)\]([^\[]*)\[/url\]").expect("url regex"),
        codeblock: Regex::new(r"(?s)\[codeblock\](.*?)\[/codeblock\]").expect("codeblock regex"),
        code: Regex::new(r"\[code\](.*?)\[/code\]").expect("code regex"),
        reference: Regex::new(r"\[(?:param|member|signal|constant|enum|annotation) ([A-Za-z0-9_.@]+)\]").expect("reference regex"),
        method: Regex::new(r"\[method ([A-Za-z0-9_.]+)\]").expect("method regex"),
        class_link: Regex::new(r"\[([A-Z][A-Za-z0-9_]*)\]").expect("class regex"),
    })
}

/// Converts Godot's BBCode doc markup to Markdown.
///
/// `is_known_class` decides whether `[ClassName]` becomes an intra-doc link or plain code.
pub fn bbcode_to_markdown(bbcode: &str, is_known_class: &dyn Fn(&str) -> bool) -> String {
    let re = regexes();

    let md = re.codeblock.replace_all(bbcode, |caps: &Captures| {
        format!("\n```text\n{}\n```\n", caps[1].trim_matches('\n'))
    });
    let md = re.class_link.replace_all(&md, |caps: &Captures| {
        let class = &caps[1];
        if is_known_class(class) {
            format!("[`{class}`][crate::classes::{class}]")
        } else {
            format!("`{class}`")
        }
    });
    let md = re.url.replace_all(&md, "[$2]($1)");
    let md = re.code.replace_all(&md, "`$1`");
    let md = re.method.replace_all(&md, "`$1()`");
    let md = re.reference.replace_all(&md, "`$1`");

    md.replace("[b]", "**")
        .replace("[/b]", "**")
        .replace("[i]", "_")
        .replace("[/i]", "_")
        .replace("[br]", "\n")
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::context::Context;
use crate::conv;
use crate::generator::classes::{self, GeneratedClassModule};
use crate::generator::{docs, functions_common};
use crate::models::domain::{ClassInitLevel, ExtensionApi, FnQualifier, RustTy};
use crate::models::json::{load_extension_api, JsonExtensionApi};
use crate::util;

fn bundled_api() -> JsonExtensionApi {
    let mut watch = gdwire_bindings::StopWatch::start();
    load_extension_api(&mut watch)
}

#[test]
fn test_pascal_conversion() {
    #[rustfmt::skip]
    let mappings = [
                      ("AStar2D", "AStar2D"),
                   ("CanvasItem", "CanvasItem"),
                   ("FileAccess", "FileAccess"),
                       ("Node2D", "Node2D"),
            ("TextServerManager", "TextServerManager"),
                      ("JSONRPC", "JsonRpc"),
         ("TimerProcessCallback", "TimerProcessCallback"),
    ];

    for (class_name, expected) in mappings {
        let actual = conv::to_pascal_case(class_name);
        assert_eq!(actual, expected, "PascalCase: ident `{class_name}`");
    }
}

#[test]
fn test_snake_conversion() {
    #[rustfmt::skip]
    let mappings = [
                      ("AStar2D", "a_star_2d"),
                   ("CanvasItem", "canvas_item"),
                   ("FileAccess", "file_access"),
                       ("Node2D", "node_2d"),
                   ("RefCounted", "ref_counted"),
            ("TextServerManager", "text_server_manager"),
                      ("JSONRPC", "json_rpc"),
                    ("VSyncMode", "vsync_mode"),
    ];

    for (class_name, expected) in mappings {
        let actual = conv::to_snake_case(class_name);
        assert_eq!(actual, expected, "snake_case: ident `{class_name}`");
    }
}

#[test]
fn test_virtual_and_signal_names() {
    assert_eq!(conv::virtual_method_rust_name("_estimate_cost"), "estimate_cost");
    assert_eq!(conv::virtual_method_rust_name("_process"), "process");
    assert_eq!(conv::virtual_method_rust_name("no_underscore"), "no_underscore");

    assert_eq!(conv::signal_connect_fn_name("timeout"), "connect_timeout");
    assert_eq!(conv::signal_connect_fn_name("tree_exiting"), "connect_tree_exiting");
}

#[test]
fn test_enumerator_prefixes() {
    #[rustfmt::skip]
    let cases: &[(&[&str], &[&str])] = &[
        (&["PROCESS_MODE_INHERIT", "PROCESS_MODE_PAUSABLE", "PROCESS_MODE_ALWAYS"],
         &["INHERIT", "PAUSABLE", "ALWAYS"]),
        (&["TIMER_PROCESS_PHYSICS", "TIMER_PROCESS_IDLE"],
         &["PHYSICS", "IDLE"]),
        (&["SIDE_LEFT", "SIDE_TOP", "SIDE_RIGHT", "SIDE_BOTTOM"],
         &["LEFT", "TOP", "RIGHT", "BOTTOM"]),
        // At least one word must remain.
        (&["METHOD_FLAG_NORMAL", "METHOD_FLAG_EDITOR", "METHOD_FLAGS_DEFAULT"],
         &["FLAG_NORMAL", "FLAG_EDITOR", "FLAGS_DEFAULT"]),
        // Nothing in common.
        (&["OK", "FAILED", "ERR_UNAVAILABLE"],
         &["OK", "FAILED", "ERR_UNAVAILABLE"]),
        (&["READ", "WRITE", "READ_WRITE", "WRITE_READ"],
         &["READ", "WRITE", "READ_WRITE", "WRITE_READ"]),
        // Stripping would leave identifiers starting with digits.
        (&["ANCHOR_2D_TOP", "ANCHOR_3D_TOP"],
         &["ANCHOR_2D_TOP", "ANCHOR_3D_TOP"]),
        // Single enumerator.
        (&["ONLY_VALUE"],
         &["ONLY_VALUE"]),
    ];

    for (input, expected) in cases {
        let actual = conv::strip_enumerator_prefixes(input);
        assert_eq!(&actual, expected, "enumerators {input:?}");
    }
}

#[test]
fn test_int_meta_widths() {
    #[rustfmt::skip]
    let mappings = [
        (None,           "i64"),
        (Some("int8"),   "i8"),
        (Some("int32"),  "i32"),
        (Some("int64"),  "i64"),
        (Some("uint8"),  "u8"),
        (Some("uint32"), "u32"),
        (Some("uint64"), "u64"),
        (Some("char32"), "u32"),
    ];

    for (meta, expected) in mappings {
        assert_eq!(conv::to_int_type(meta), expected, "meta {meta:?}");
    }
}

#[test]
fn test_wire_types() {
    let json = bundled_api();
    let ctx = Context::build_from_api(&json);

    // Every schema type crosses the wire in its ptrcall representation, regardless of the high-level width.
    #[rustfmt::skip]
    let mappings = [
        ("bool",                    None,           "bool"),
        ("int",                     Some("int32"),  "i64"),
        ("int",                     Some("uint8"),  "i64"),
        ("float",                   Some("float"),  "f64"),
        ("float",                   Some("double"), "f64"),
        ("enum::Node.ProcessMode",  None,           "i64"),
        ("enum::Error",             None,           "i64"),
        ("Node",                    None,           "sys :: Tagged"),
        ("AStar2D",                 None,           "sys :: Tagged"),
        ("Vector2",                 None,           "crate :: builtin :: Vector2"),
    ];

    for (ty, meta, expected) in mappings {
        let rust_ty = conv::to_rust_type(ty, meta, &ctx).unwrap_or_else(|| panic!("type {ty} is supported"));
        let wire = functions_common::wire_type(&rust_ty).to_string();
        assert_eq!(wire, expected, "wire type of {ty} ({meta:?})");
    }
}

#[test]
fn test_unsupported_types() {
    let json = bundled_api();
    let ctx = Context::build_from_api(&json);

    for ty in ["Variant", "PackedStringArray", "Dictionary", "MainLoop", "enum::Unknown.Enum"] {
        assert!(conv::to_rust_type(ty, None, &ctx).is_none(), "type {ty} has no binding");
    }
}

#[test]
fn test_bitfield_declared_as_enum() {
    let json = bundled_api();
    let ctx = Context::build_from_api(&json);

    let ty = conv::to_rust_type("enum::TextServer.Feature", None, &ctx).expect("known enum");
    assert!(matches!(ty, RustTy::EngineEnum { is_bitfield: true, .. }));
}

#[test]
fn test_class_mapping() {
    let json = bundled_api();
    let ctx = Context::build_from_api(&json);
    let api = ExtensionApi::from_json(&json, &ctx);

    let timer = api.find_class("Timer").expect("Timer");
    let ancestors: Vec<&str> = timer.ancestors.iter().map(|a| a.godot_ty.as_str()).collect();
    assert_eq!(ancestors, ["Node", "Object"]);
    assert_eq!(timer.mod_name.rust_mod.to_string(), "timer");
    assert!(!timer.is_refcounted);
    assert_eq!(timer.init_level, ClassInitLevel::Scene);

    let get_wait_time = timer.methods.iter().find(|m| m.godot_name == "get_wait_time").expect("get_wait_time");
    assert_eq!(get_wait_time.qualifier, FnQualifier::Const);
    assert!(matches!(get_wait_time.return_value.type_, Some(RustTy::Float { is_f32: false })));

    let text_server_manager = api.find_class("TextServerManager").expect("TextServerManager");
    assert!(text_server_manager.is_singleton);
    assert_eq!(text_server_manager.init_level, ClassInitLevel::Servers);

    let file_access = api.find_class("FileAccess").expect("FileAccess");
    let open = file_access.methods.iter().find(|m| m.godot_name == "open").expect("open");
    assert_eq!(open.qualifier, FnQualifier::Static);
}

#[test]
fn test_unsupported_methods_are_skipped() {
    let json = bundled_api();
    let ctx = Context::build_from_api(&json);
    let api = ExtensionApi::from_json(&json, &ctx);

    let object = api.find_class("Object").expect("Object");
    assert!(object.skipped_methods.contains(&"emit_signal".to_string()), "varargs");
    assert!(object.skipped_methods.contains(&"get_meta".to_string()), "Variant");
    assert!(object.methods.iter().any(|m| m.godot_name == "connect"));

    let ref_counted = api.find_class("RefCounted").expect("RefCounted");
    let private: Vec<&str> = ref_counted
        .methods
        .iter()
        .filter(|m| m.is_private)
        .map(|m| m.godot_name.as_str())
        .collect();
    assert_eq!(private, ["init_ref", "reference", "unreference"]);
}

#[test]
fn test_virtuals_are_flattened() {
    let json = bundled_api();
    let ctx = Context::build_from_api(&json);
    let api = ExtensionApi::from_json(&json, &ctx);

    let astar = api.find_class("AStar2D").expect("AStar2D");
    let names: Vec<(&str, String)> = astar
        .virtuals
        .iter()
        .map(|v| (v.godot_name.as_str(), v.rust_name.to_string()))
        .collect();
    assert_eq!(
        names,
        [
            ("_estimate_cost", "estimate_cost".to_string()),
            ("_compute_cost", "compute_cost".to_string()),
        ]
    );

    // Inherited from Node; `_get_configuration_warnings` returns a packed array and is left out.
    let timer = api.find_class("Timer").expect("Timer");
    let timer_virtuals: Vec<&str> = timer.virtuals.iter().map(|v| v.godot_name.as_str()).collect();
    assert_eq!(
        timer_virtuals,
        ["_process", "_physics_process", "_enter_tree", "_exit_tree", "_ready", "_input"]
    );

    // Object parameters are supported; the argument kind follows the class's memory management.
    let input = timer.virtuals.iter().find(|v| v.godot_name == "_input").expect("_input");
    assert!(matches!(
        &input.params[0].type_,
        RustTy::EngineClass { is_refcounted: true, .. }
    ));

    let node_2d = api.find_class("Node2D").expect("Node2D");
    assert_eq!(node_2d.virtuals.last().map(|v| v.godot_name.as_str()), Some("_draw"));
}

#[test]
fn test_ownership_transfer() {
    let json = bundled_api();
    let ctx = Context::build_from_api(&json);
    let api = ExtensionApi::from_json(&json, &ctx);

    let node = api.find_class("Node").expect("Node");
    let add_child = node.methods.iter().find(|m| m.godot_name == "add_child").expect("add_child");
    let node_param = &add_child.params[0];
    assert!(node_param.transfers_ownership);

    let remove_child = node.methods.iter().find(|m| m.godot_name == "remove_child").expect("remove_child");
    assert!(!remove_child.params[0].transfers_ownership);
}

#[test]
fn test_global_enum_ordinals() {
    let json = bundled_api();
    let ctx = Context::build_from_api(&json);
    let api = ExtensionApi::from_json(&json, &ctx);

    let error = api.global_enums.iter().find(|e| e.godot_name == "Error").expect("Error");
    let ordinal = |name: &str| {
        error
            .enumerators
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.value)
            .unwrap_or_else(|| panic!("enumerator {name}"))
    };

    assert_eq!(ordinal("OK"), 0);
    assert_eq!(ordinal("FAILED"), 1);
    assert_eq!(ordinal("ERR_OUT_OF_MEMORY"), 6);
    assert_eq!(ordinal("ERR_PRINTER_ON_FIRE"), 48);
}

#[test]
fn test_bbcode_to_markdown() {
    let is_known = |name: &str| matches!(name, "Node" | "Timer");

    #[rustfmt::skip]
    let cases = [
        ("Starts the [Timer].",                  "Starts the [`Timer`][crate::classes::Timer]."),
        ("Returns a [Texture2D].",               "Returns a `Texture2D`."),
        ("Set [param time_sec] seconds.",        "Set `time_sec` seconds."),
        ("Calls [method Node.queue_free].",      "Calls `Node.queue_free()`."),
        ("See [member wait_time].",              "See `wait_time`."),
        ("Use [code]null[/code] here.",          "Use `null` here."),
        ("[b]Note:[/b] fast.",                   "**Note:** fast."),
        ("See [url=https://godotengine.org]the docs[/url].", "See [the docs](https://godotengine.org)."),
    ];

    for (bbcode, expected) in cases {
        assert_eq!(docs::bbcode_to_markdown(bbcode, &is_known), expected, "bbcode `{bbcode}`");
    }
}

#[test]
fn test_literals() {
    assert_eq!(util::unsuffixed_lit(-1).to_string(), "- 1");
    assert_eq!(util::unsuffixed_lit(48).to_string(), "48");
    assert!(util::fits_i32(i32::MAX as i64));
    assert!(!util::fits_i32(i32::MAX as i64 + 1));

    assert_eq!(util::safe_ident("type").to_string(), "type_");
    assert_eq!(util::safe_ident("gen").to_string(), "gen_");
    assert_eq!(util::safe_ident("delta").to_string(), "delta");
}

fn compact(tokens: proc_macro2::TokenStream) -> String {
    tokens.to_string().chars().filter(|c| !c.is_whitespace()).collect()
}

#[test]
fn test_class_macros_reexported_by_name() {
    let json = bundled_api();
    let ctx = Context::build_from_api(&json);
    let api = ExtensionApi::from_json(&json, &ctx);

    let modules: Vec<GeneratedClassModule> = api
        .classes
        .iter()
        .map(|class| GeneratedClassModule {
            class_name: class.name.clone(),
            module_name: class.mod_name.clone(),
            inherits_macro: classes::inherits_macro_name(&class.name),
        })
        .collect();

    let code = compact(classes::make_class_module_file(&modules));
    assert!(code.contains("pubmodclass_macros{pubusecrate::*;"));
    assert!(code.contains("pubuseinherits_transitive_Node;"));
    assert!(code.contains("pubuseinherits_transitive_Timer;"));
    assert!(!code.contains("crate::inherits_transitive"));
}

#[test]
fn test_shims_skip_identity_conversions() {
    let json = bundled_api();
    let ctx = Context::build_from_api(&json);
    let api = ExtensionApi::from_json(&json, &ctx);

    let timer = api.find_class("Timer").expect("Timer");
    let code = compact(classes::make_class(timer, true));

    // High-level: wire value returned as-is, `f64` parameters passed without a cast.
    assert!(code.contains("pubfnget_wait_time(&self,)->f64{self.advanced().get_wait_time()}"));
    assert!(code.contains("pubfnis_stopped(&self,)->bool{self.advanced().is_stopped()}"));
    assert!(code.contains("self.advanced().start(time_sec)"));
    assert!(!code.contains("time_secasf64"));

    // Enums still convert from their ordinal.
    assert!(code.contains("letret=self.advanced().get_timer_process_callback();"));

    // Advanced: only frames that receive arguments are mutable.
    assert!(code.contains("pubfnget_wait_time(self,)->f64{letframe=sys::CallFrame::new();"));
    assert!(code.contains("letmutframe=sys::CallFrame::new();frame.arg::<f64>(time_sec);"));
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// All cases in the Godot class API where generated code deviates from the schema.
// Identifiers here are the GODOT names (e.g. AStar2D, not a_star_2d).

#[rustfmt::skip]
pub fn is_class_deleted(godot_class_name: &str) -> bool {
    match godot_class_name {
        // Thread APIs; their semantics do not map onto Rust ownership.
        | "Thread"
        | "Mutex"
        | "Semaphore"

        => true, _ => false
    }
}

#[rustfmt::skip]
pub fn is_method_deleted(godot_class_name: &str, godot_method_name: &str) -> bool {
    match (godot_class_name, godot_method_name) {
        // Thread APIs
        | ("ResourceLoader", "load_threaded_get")
        | ("ResourceLoader", "load_threaded_request")

        => true, _ => false
    }
}

/// Methods that are only generated on the low-level `Advanced` API, as `Gd<T>` performs them itself.
#[rustfmt::skip]
pub fn is_method_private(godot_class_name: &str, godot_method_name: &str) -> bool {
    match (godot_class_name, godot_method_name) {
        | ("RefCounted", "init_ref")
        | ("RefCounted", "reference")
        | ("RefCounted", "unreference")

        => true, _ => false
    }
}

/// Object arguments whose ownership passes to the engine; the host gives up its handle.
#[rustfmt::skip]
pub fn is_arg_transferred_to_engine(godot_class_name: &str, godot_method_name: &str, arg_name: &str) -> bool {
    match (godot_class_name, godot_method_name, arg_name) {
        // The scene tree owns its nodes.
        | ("Node", "add_child", "node")
        | ("Node", "add_sibling", "sibling")

        => true, _ => false
    }
}

/// Renames of methods that would clash with generated or hand-written items.
pub fn maybe_renamed<'m>(_godot_class_name: &str, godot_method_name: &'m str) -> &'m str {
    match godot_method_name {
        // Generated helpers on every class.
        "advanced" => "advanced_",
        "singleton" => "singleton_",
        _ => godot_method_name,
    }
}

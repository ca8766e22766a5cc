/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Identifier renamings (Godot -> Rust).

use heck::{ToPascalCase, ToSnakeCase};

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Case conversions

/// Class names whose generic conversion would be unreadable.
fn to_snake_special_case(class_name: &str) -> Option<&'static str> {
    match class_name {
        "JSONRPC" => Some("json_rpc"),
        "OpenXRAPIExtension" => Some("open_xr_api_extension"),
        "VSyncMode" => Some("vsync_mode"),
        _ => None,
    }
}

/// `AStar2D` -> `a_star_2d`, `TextServerManager` -> `text_server_manager`.
pub fn to_snake_case(class_name: &str) -> String {
    if let Some(special_case) = to_snake_special_case(class_name) {
        return special_case.to_string();
    }

    // Dimension suffixes stay attached to their digit: node_2d, not node2_d.
    class_name
        .replace("1D", "_1d")
        .replace("2D", "_2d")
        .replace("3D", "_3d")
        .to_snake_case()
}

/// Keeps Godot's spelling for class names that are already Pascal case, only normalizing separators.
pub fn to_pascal_case(class_name: &str) -> String {
    if let Some(snake_special) = to_snake_special_case(class_name) {
        return snake_special.to_pascal_case();
    }

    // heck would turn AStar2D into AStar2d; class names are kept as-is when they have no separators.
    if class_name.contains('_') {
        class_name.to_pascal_case()
    } else {
        class_name.to_string()
    }
}

/// Virtual method names drop their leading underscore: `_estimate_cost` -> `estimate_cost`.
pub fn virtual_method_rust_name(godot_name: &str) -> &str {
    godot_name.strip_prefix('_').unwrap_or(godot_name)
}

/// Name of the typed connect helper of a signal: `timeout` -> `connect_timeout`.
pub fn signal_connect_fn_name(signal_name: &str) -> String {
    format!("connect_{}", signal_name.to_snake_case())
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Enum conversions

/// Strips the word-wise prefix shared by all enumerators.
///
/// `PROCESS_MODE_INHERIT, PROCESS_MODE_ALWAYS` become `INHERIT, ALWAYS`. Nothing is stripped if the enum has a single
/// enumerator, if any result would start with a digit, or if an enumerator would become empty.
pub fn strip_enumerator_prefixes<'a>(enumerators: &[&'a str]) -> Vec<&'a str> {
    if enumerators.len() < 2 {
        return enumerators.to_vec();
    }

    let split: Vec<Vec<&str>> = enumerators.iter().map(|name| name.split('_').collect()).collect();

    // Number of leading words shared by all enumerators, leaving at least one word each.
    let shortest = split.iter().map(Vec::len).min().unwrap_or(0);
    let mut common = 0;
    while common < shortest {
        let word = split[0][common];
        if split.iter().all(|words| words[common] == word) {
            common += 1;
        } else {
            break;
        }
    }
    if common == shortest {
        common -= 1;
    }

    if common == 0 {
        return enumerators.to_vec();
    }

    let stripped: Vec<&'a str> = enumerators
        .iter()
        .map(|name| {
            let prefix_len: usize = name.split('_').take(common).map(|word| word.len() + 1).sum();
            &name[prefix_len..]
        })
        .collect();

    let starts_with_digit = stripped
        .iter()
        .any(|name| name.chars().next().is_some_and(|c| c.is_ascii_digit()));

    if starts_with_digit || stripped.iter().any(|name| name.is_empty()) {
        enumerators.to_vec()
    } else {
        stripped
    }
}

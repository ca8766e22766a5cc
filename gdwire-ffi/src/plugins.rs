/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Distributed self-registration of "plugins" without a central list.
//!
//! Each `plugin_add!` emits a static constructor placed in the platform's init section, which pushes one entry into the
//! registry before `main` (or before the library's entry symbol runs).

// Note: link_section attributes count as unsafe code from the compiler's point of view, even though no unsafe block appears.

/// Declares a global registry for plugins of a given type.
#[doc(hidden)]
#[macro_export]
macro_rules! plugin_registry {
    ($vis:vis $registry:ident: $Type:ty) => {
        #[used]
        #[allow(non_upper_case_globals)]
        #[doc(hidden)]
        $vis static $registry: std::sync::Mutex<Vec<$Type>> = std::sync::Mutex::new(Vec::new());
    };
}

/// Registers a plugin with a registry, given the registry's path.
#[doc(hidden)]
#[macro_export]
macro_rules! plugin_add {
    ($registry:path; $plugin:expr) => {
        const _: () = {
            #[allow(non_upper_case_globals)]
            #[used]
            // Windows:
            #[cfg_attr(target_os = "windows", link_section = ".CRT$XCU")]
            // MacOS + iOS:
            #[cfg_attr(target_os = "ios", link_section = "__DATA,__mod_init_func")]
            #[cfg_attr(target_os = "macos", link_section = "__DATA,__mod_init_func")]
            // Linux, Android, BSD:
            #[cfg_attr(target_os = "android", link_section = ".init_array")]
            #[cfg_attr(target_os = "freebsd", link_section = ".init_array")]
            #[cfg_attr(target_os = "linux", link_section = ".init_array")]
            #[cfg_attr(target_os = "netbsd", link_section = ".init_array")]
            #[cfg_attr(target_os = "openbsd", link_section = ".init_array")]
            static __init: extern "C" fn() = {
                #[cfg_attr(target_os = "android", link_section = ".text.startup")]
                #[cfg_attr(target_os = "linux", link_section = ".text.startup")]
                extern "C" fn __inner_init() {
                    let mut guard = $registry
                        .lock()
                        .unwrap_or_else(std::sync::PoisonError::into_inner);
                    guard.push($plugin);
                }
                __inner_init
            };
        };
    };
}

/// Visits all plugins of a registry, in unspecified order.
#[doc(hidden)]
#[macro_export]
macro_rules! plugin_foreach {
    ($registry:path; $closure:expr) => {
        let guard = $registry
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        for e in guard.iter() {
            #[allow(clippy::redundant_closure_call)]
            $closure(e);
        }
    };
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    plugin_registry!(CLASSES: &'static str);

    plugin_add!(CLASSES; "Timer");
    plugin_add!(CLASSES; "AStar2D");
    plugin_add!(self::CLASSES; "Node");

    #[test]
    fn plugins_collected_before_main() {
        let expected = HashSet::from(["Timer", "AStar2D", "Node"]);
        let mut actual = HashSet::new();

        plugin_foreach!(CLASSES; |e: &&'static str| {
            actual.insert(*e);
        });

        assert_eq!(actual, expected);
    }
}

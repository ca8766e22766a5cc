/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashMap;

use crate::init::InitLevel;
use crate::meta::ClassName;
use crate::private::{handle_panic, iterate_plugins};
use crate::registry::plugin::{ClassPlugin, CreateFn, FreeFn, GetVirtualFn, PluginItem};
use crate::{godot_error, sys};

/// Everything known about one user class, merged from its plugins.
#[derive(Debug)]
struct ClassRegistrationInfo {
    class_name: ClassName,
    parent_class_name: Option<ClassName>,
    generated_create_fn: Option<CreateFn>,
    user_create_fn: Option<CreateFn>,
    free_fn: Option<FreeFn>,
    get_virtual_fn: Option<GetVirtualFn>,
    register_methods_fn: Option<fn()>,
}

impl ClassRegistrationInfo {
    fn new(class_name: ClassName) -> Self {
        Self {
            class_name,
            parent_class_name: None,
            generated_create_fn: None,
            user_create_fn: None,
            free_fn: None,
            get_virtual_fn: None,
            register_methods_fn: None,
        }
    }

    fn fill(&mut self, item: &PluginItem) {
        match item {
            PluginItem::Struct {
                base_class_name,
                generated_create_fn,
                free_fn,
            } => {
                self.parent_class_name = Some(*base_class_name);
                self.generated_create_fn = *generated_create_fn;
                self.free_fn = Some(*free_fn);
            }

            PluginItem::ITraitImpl {
                user_create_fn,
                get_virtual_fn,
            } => {
                self.user_create_fn = *user_create_fn;
                self.get_virtual_fn = Some(*get_virtual_fn);
            }

            PluginItem::InherentImpl { register_methods_fn } => {
                self.register_methods_fn = Some(*register_methods_fn);
            }
        }
    }
}

/// Classes registered per level, in registration order.
static LOADED_CLASSES: sys::Global<HashMap<InitLevel, Vec<ClassName>>> = sys::Global::default();

/// Level at which a class declared for `class_level` is registered.
///
/// The engine never runs levels below the library's `min_level`; classes of those levels are registered with the first level
/// that does run.
fn effective_level(class_level: InitLevel, min_level: InitLevel) -> InitLevel {
    class_level.max(min_level)
}

/// Registers all user classes of the given level, given the lowest level the engine runs for this library.
pub fn auto_register_classes(init_level: InitLevel, min_level: InitLevel) {
    sys::out!("Auto-register classes at level `{init_level:?}`...");

    let mut map = HashMap::<ClassName, ClassRegistrationInfo>::new();
    iterate_plugins(|plugin: &ClassPlugin| {
        if effective_level(plugin.init_level, min_level) != init_level {
            return;
        }

        map.entry(plugin.class_name)
            .or_insert_with(|| ClassRegistrationInfo::new(plugin.class_name))
            .fill(&plugin.item);
    });

    // Plugin order depends on the linker; sort for reproducible registration.
    let mut infos: Vec<_> = map.into_values().collect();
    infos.sort_by_key(|info| info.class_name);

    let mut registered = Vec::with_capacity(infos.len());
    for info in infos {
        let class_name = info.class_name;
        if register_class_raw(info) {
            registered.push(class_name);
        }
    }

    LOADED_CLASSES.lock().entry(init_level).or_default().extend(registered);
}

/// Unregisters the user classes of the given level, in reverse registration order.
pub fn unregister_classes(init_level: InitLevel) {
    let loaded = LOADED_CLASSES.lock().remove(&init_level).unwrap_or_default();
    sys::out!("Unregistering {} classes of level {init_level:?}...", loaded.len());

    for class_name in loaded.into_iter().rev() {
        let name = class_name.to_string_name();

        // SAFETY: the class was registered by this library.
        unsafe { sys::interface_fn!(classdb_unregister_extension_class)(sys::get_library(), name.string_sys()) };
    }
}

/// Names of the classes registered at `init_level`.
pub fn registered_classes(init_level: InitLevel) -> Vec<ClassName> {
    LOADED_CLASSES.lock().get(&init_level).cloned().unwrap_or_default()
}

/// Returns whether the engine accepted the class.
fn register_class_raw(info: ClassRegistrationInfo) -> bool {
    let class_name = info.class_name;
    let Some(parent_class_name) = info.parent_class_name else {
        godot_error!("class `{class_name}` has a #[godot_api] impl, but no #[derive(GodotClass)]");
        return false;
    };

    let mut params = sys::GDExtensionClassCreationInfo2::empty();

    // Without constructor, the engine refuses to instantiate the class; Rust can still do so with Gd::from_init_fn().
    let create_fn = info.user_create_fn.or(info.generated_create_fn);
    params.is_abstract = sys::conv_bool(create_fn.is_none());
    params.create_instance_func = create_fn;
    params.free_instance_func = info.free_fn;
    params.get_virtual_func = info.get_virtual_fn;
    let register_methods_fn = info.register_methods_fn;

    let name = class_name.to_string_name();
    let parent_name = parent_class_name.to_string_name();
    sys::out!("Register class:   {class_name} extends {parent_class_name}");

    let registration_failed = unsafe {
        sys::interface_fn!(classdb_register_extension_class2)(
            sys::get_library(),
            name.string_sys(),
            parent_name.string_sys(),
            std::ptr::addr_of!(params),
        );

        // Registration does not report errors, except on the engine's console. A missing class tag means it failed.
        let tag = sys::interface_fn!(classdb_get_class_tag)(name.string_sys());
        tag.is_null()
    };

    if registration_failed {
        godot_error!("Failed to register class `{class_name}`; check preceding engine messages");
        return false;
    }

    // Methods and signals attach to the registered class; a panic leaves the class usable without them.
    if let Some(register_methods_fn) = register_methods_fn {
        let _ = handle_panic(|| format!("{class_name}::register_methods"), register_methods_fn);
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_levels_move_up_to_min_level() {
        assert_eq!(effective_level(InitLevel::Core, InitLevel::Scene), InitLevel::Scene);
        assert_eq!(effective_level(InitLevel::Servers, InitLevel::Scene), InitLevel::Scene);
        assert_eq!(effective_level(InitLevel::Servers, InitLevel::Core), InitLevel::Servers);
        assert_eq!(effective_level(InitLevel::Editor, InitLevel::Scene), InitLevel::Editor);
    }
}

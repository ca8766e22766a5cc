/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Registration of `#[func]` methods and `#[signal]` declarations of user classes.

use crate::builtin::StringName;
use crate::meta::{ClassName, GodotType, PropertyInfo};
use crate::sys;

/// Argument or return value of a registered method.
pub struct MethodParamOrReturnInfo {
    info: PropertyInfo,
    metadata: sys::GDExtensionClassMethodArgumentMetadata,
}

impl MethodParamOrReturnInfo {
    pub fn of<T: GodotType>(name: &str) -> Self {
        Self {
            info: T::property_info(name),
            metadata: T::METADATA,
        }
    }
}

/// Everything the engine needs to call one method of a user class.
pub struct ClassMethodInfo {
    class_name: ClassName,
    method_name: StringName,
    call_func: sys::GDExtensionClassMethodCall,
    ptrcall_func: sys::GDExtensionClassMethodPtrCall,
    method_flags: sys::GDExtensionClassMethodFlags,
    return_value: Option<MethodParamOrReturnInfo>,
    arguments: Vec<MethodParamOrReturnInfo>,
}

impl ClassMethodInfo {
    /// # Safety
    /// `ptrcall_func` must read the arguments and write the return value declared through [`arg()`][Self::arg] and
    /// [`returns()`][Self::returns], in the same order. With `GDEXTENSION_METHOD_FLAG_STATIC`, it must ignore the instance.
    pub unsafe fn new(
        class_name: ClassName,
        method_name: &str,
        call_func: sys::GDExtensionClassMethodCall,
        ptrcall_func: sys::GDExtensionClassMethodPtrCall,
        method_flags: sys::GDExtensionClassMethodFlags,
    ) -> Self {
        Self {
            class_name,
            method_name: StringName::from(method_name),
            call_func,
            ptrcall_func,
            method_flags,
            return_value: None,
            arguments: Vec::new(),
        }
    }

    pub fn arg<T: GodotType>(mut self, name: &str) -> Self {
        self.arguments.push(MethodParamOrReturnInfo::of::<T>(name));
        self
    }

    pub fn returns<T: GodotType>(mut self) -> Self {
        self.return_value = Some(MethodParamOrReturnInfo::of::<T>(""));
        self
    }

    pub fn register_extension_class_method(&self) {
        let (mut return_value_sys, return_value_metadata) = match &self.return_value {
            Some(ret) => (Some(ret.info.property_sys()), ret.metadata),
            None => (None, sys::GDEXTENSION_METHOD_ARGUMENT_METADATA_NONE),
        };

        let mut arguments_info_sys: Vec<sys::GDExtensionPropertyInfo> =
            self.arguments.iter().map(|arg| arg.info.property_sys()).collect();
        let mut arguments_metadata: Vec<sys::GDExtensionClassMethodArgumentMetadata> =
            self.arguments.iter().map(|arg| arg.metadata).collect();

        let method_info_sys = sys::GDExtensionClassMethodInfo {
            name: self.method_name.string_sys() as sys::GDExtensionStringNamePtr,
            method_userdata: std::ptr::null_mut(),
            call_func: self.call_func,
            ptrcall_func: self.ptrcall_func,
            method_flags: self.method_flags,
            has_return_value: sys::conv_bool(self.return_value.is_some()),
            return_value_info: return_value_sys
                .as_mut()
                .map_or(std::ptr::null_mut(), |info| info as *mut _),
            return_value_metadata,
            argument_count: self.arguments.len() as u32,
            arguments_info: arguments_info_sys.as_mut_ptr(),
            arguments_metadata: arguments_metadata.as_mut_ptr(),
            default_argument_count: 0,
            default_arguments: std::ptr::null_mut(),
        };

        let class_name = self.class_name.to_string_name();
        sys::out!("Register method:  {}::{}", self.class_name, self.method_name);

        // SAFETY: all pointers in method_info_sys stay valid until the end of this function, which is all the engine requires.
        unsafe {
            sys::interface_fn!(classdb_register_extension_class_method)(
                sys::get_library(),
                class_name.string_sys(),
                std::ptr::addr_of!(method_info_sys),
            )
        }
    }
}

/// Declares signal `signal_name` with the given parameters on a user class.
pub fn register_signal(class_name: ClassName, signal_name: &str, parameters: &[PropertyInfo]) {
    let class_name_sys = class_name.to_string_name();
    let signal_name_sys = StringName::from(signal_name);
    let parameters_sys: Vec<sys::GDExtensionPropertyInfo> = parameters.iter().map(PropertyInfo::property_sys).collect();

    sys::out!("Register signal:  {class_name}::{signal_name}");

    // SAFETY: names and parameter infos outlive the call.
    unsafe {
        sys::interface_fn!(classdb_register_extension_class_signal)(
            sys::get_library(),
            class_name_sys.string_sys(),
            signal_name_sys.string_sys(),
            parameters_sys.as_ptr(),
            parameters_sys.len() as sys::GDExtensionInt,
        )
    }
}

/// Body of the Variant-call entry of registered methods, which only accept ptrcalls.
///
/// # Safety
/// `error` must point to a writable call error.
pub unsafe fn reject_varcall(context: &str, error: *mut sys::GDExtensionCallError) {
    crate::godot_error!("{context}: method can only be called with typed arguments (ptrcall), not through Variant");
    (*error).error = sys::GDEXTENSION_CALL_ERROR_INVALID_METHOD;
    (*error).argument = 0;
    (*error).expected = 0;
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! C declarations of the GDExtension interface, restricted to the entry points this crate uses.
//!
//! Layouts follow `gdextension_interface.h` of Godot 4.2.

#![allow(non_camel_case_types)]

use std::ffi::{c_char, c_void};

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Scalar and pointer aliases

pub type GDExtensionBool = u8;
pub type GDExtensionInt = i64;
pub type GDObjectInstanceID = u64;
pub type GDExtensionVariantType = u32;
pub type GDExtensionInitializationLevel = u32;
pub type GDExtensionCallErrorType = u32;

pub type GDExtensionObjectPtr = *mut c_void;
pub type GDExtensionConstObjectPtr = *const c_void;
pub type GDExtensionTypePtr = *mut c_void;
pub type GDExtensionConstTypePtr = *const c_void;
pub type GDExtensionUninitializedTypePtr = *mut c_void;
pub type GDExtensionVariantPtr = *mut c_void;
pub type GDExtensionConstVariantPtr = *const c_void;
pub type GDExtensionStringPtr = *mut c_void;
pub type GDExtensionConstStringPtr = *const c_void;
pub type GDExtensionUninitializedStringPtr = *mut c_void;
pub type GDExtensionStringNamePtr = *mut c_void;
pub type GDExtensionConstStringNamePtr = *const c_void;
pub type GDExtensionUninitializedStringNamePtr = *mut c_void;
pub type GDExtensionRefPtr = *mut c_void;
pub type GDExtensionConstRefPtr = *const c_void;
pub type GDExtensionMethodBindPtr = *const c_void;
pub type GDExtensionClassLibraryPtr = *mut c_void;
pub type GDExtensionClassInstancePtr = *mut c_void;

pub const GDEXTENSION_INITIALIZATION_CORE: GDExtensionInitializationLevel = 0;
pub const GDEXTENSION_INITIALIZATION_SERVERS: GDExtensionInitializationLevel = 1;
pub const GDEXTENSION_INITIALIZATION_SCENE: GDExtensionInitializationLevel = 2;
pub const GDEXTENSION_INITIALIZATION_EDITOR: GDExtensionInitializationLevel = 3;

pub const GDEXTENSION_CALL_OK: GDExtensionCallErrorType = 0;
pub const GDEXTENSION_CALL_ERROR_INVALID_METHOD: GDExtensionCallErrorType = 1;
pub const GDEXTENSION_CALL_ERROR_TOO_MANY_ARGUMENTS: GDExtensionCallErrorType = 3;

pub type GDExtensionClassMethodFlags = u32;
pub type GDExtensionClassMethodArgumentMetadata = u32;

pub const GDEXTENSION_METHOD_FLAG_NORMAL: GDExtensionClassMethodFlags = 1;
pub const GDEXTENSION_METHOD_FLAG_CONST: GDExtensionClassMethodFlags = 4;
pub const GDEXTENSION_METHOD_FLAG_STATIC: GDExtensionClassMethodFlags = 32;

pub const GDEXTENSION_METHOD_ARGUMENT_METADATA_NONE: GDExtensionClassMethodArgumentMetadata = 0;
pub const GDEXTENSION_METHOD_ARGUMENT_METADATA_INT_IS_INT8: GDExtensionClassMethodArgumentMetadata = 1;
pub const GDEXTENSION_METHOD_ARGUMENT_METADATA_INT_IS_INT16: GDExtensionClassMethodArgumentMetadata = 2;
pub const GDEXTENSION_METHOD_ARGUMENT_METADATA_INT_IS_INT32: GDExtensionClassMethodArgumentMetadata = 3;
pub const GDEXTENSION_METHOD_ARGUMENT_METADATA_INT_IS_INT64: GDExtensionClassMethodArgumentMetadata = 4;
pub const GDEXTENSION_METHOD_ARGUMENT_METADATA_INT_IS_UINT8: GDExtensionClassMethodArgumentMetadata = 5;
pub const GDEXTENSION_METHOD_ARGUMENT_METADATA_INT_IS_UINT16: GDExtensionClassMethodArgumentMetadata = 6;
pub const GDEXTENSION_METHOD_ARGUMENT_METADATA_INT_IS_UINT32: GDExtensionClassMethodArgumentMetadata = 7;
pub const GDEXTENSION_METHOD_ARGUMENT_METADATA_REAL_IS_FLOAT: GDExtensionClassMethodArgumentMetadata = 9;
pub const GDEXTENSION_METHOD_ARGUMENT_METADATA_REAL_IS_DOUBLE: GDExtensionClassMethodArgumentMetadata = 10;

/// `PROPERTY_USAGE_DEFAULT`: stored and shown in the editor.
pub const GDEXTENSION_PROPERTY_USAGE_DEFAULT: u32 = 6;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Function pointer types

pub type GDExtensionInterfaceFunctionPtr = Option<unsafe extern "C" fn()>;
pub type GDExtensionInterfaceGetProcAddress =
    Option<unsafe extern "C" fn(p_function_name: *const c_char) -> GDExtensionInterfaceFunctionPtr>;

pub type GDExtensionPtrConstructor = Option<
    unsafe extern "C" fn(p_base: GDExtensionUninitializedTypePtr, p_args: *const GDExtensionConstTypePtr),
>;
pub type GDExtensionPtrDestructor = Option<unsafe extern "C" fn(p_base: GDExtensionTypePtr)>;

pub type GDExtensionClassCallVirtual = Option<
    unsafe extern "C" fn(
        p_instance: GDExtensionClassInstancePtr,
        p_args: *const GDExtensionConstTypePtr,
        r_ret: GDExtensionTypePtr,
    ),
>;

pub type GDExtensionClassMethodCall = Option<
    unsafe extern "C" fn(
        method_userdata: *mut c_void,
        p_instance: GDExtensionClassInstancePtr,
        p_args: *const GDExtensionConstVariantPtr,
        p_argument_count: GDExtensionInt,
        r_return: GDExtensionVariantPtr,
        r_error: *mut GDExtensionCallError,
    ),
>;
pub type GDExtensionClassMethodPtrCall = Option<
    unsafe extern "C" fn(
        method_userdata: *mut c_void,
        p_instance: GDExtensionClassInstancePtr,
        p_args: *const GDExtensionConstTypePtr,
        r_ret: GDExtensionTypePtr,
    ),
>;

pub type GDExtensionCallableCustomCall = Option<
    unsafe extern "C" fn(
        callable_userdata: *mut c_void,
        p_args: *const GDExtensionConstVariantPtr,
        p_argument_count: GDExtensionInt,
        r_return: GDExtensionVariantPtr,
        r_error: *mut GDExtensionCallError,
    ),
>;

pub type GDExtensionInterfaceGetGodotVersion =
    Option<unsafe extern "C" fn(r_godot_version: *mut GDExtensionGodotVersion)>;
pub type GDExtensionInterfacePrintError = Option<
    unsafe extern "C" fn(
        p_description: *const c_char,
        p_function: *const c_char,
        p_file: *const c_char,
        p_line: i32,
        p_editor_notify: GDExtensionBool,
    ),
>;
pub type GDExtensionInterfacePrintWarning = GDExtensionInterfacePrintError;
pub type GDExtensionInterfaceVariantGetPtrConstructor = Option<
    unsafe extern "C" fn(p_type: GDExtensionVariantType, p_constructor: i32) -> GDExtensionPtrConstructor,
>;
pub type GDExtensionInterfaceVariantGetPtrDestructor =
    Option<unsafe extern "C" fn(p_type: GDExtensionVariantType) -> GDExtensionPtrDestructor>;
pub type GDExtensionInterfaceStringNewWithUtf8CharsAndLen = Option<
    unsafe extern "C" fn(
        r_dest: GDExtensionUninitializedStringPtr,
        p_contents: *const c_char,
        p_size: GDExtensionInt,
    ),
>;
pub type GDExtensionInterfaceStringToUtf8Chars = Option<
    unsafe extern "C" fn(
        p_self: GDExtensionConstStringPtr,
        r_text: *mut c_char,
        p_max_write_length: GDExtensionInt,
    ) -> GDExtensionInt,
>;
pub type GDExtensionInterfaceStringNameNewWithUtf8CharsAndLen = Option<
    unsafe extern "C" fn(
        r_dest: GDExtensionUninitializedStringNamePtr,
        p_contents: *const c_char,
        p_size: GDExtensionInt,
    ),
>;
pub type GDExtensionInterfaceGlobalGetSingleton =
    Option<unsafe extern "C" fn(p_name: GDExtensionConstStringNamePtr) -> GDExtensionObjectPtr>;
pub type GDExtensionInterfaceClassdbConstructObject =
    Option<unsafe extern "C" fn(p_classname: GDExtensionConstStringNamePtr) -> GDExtensionObjectPtr>;
pub type GDExtensionInterfaceClassdbGetMethodBind = Option<
    unsafe extern "C" fn(
        p_classname: GDExtensionConstStringNamePtr,
        p_methodname: GDExtensionConstStringNamePtr,
        p_hash: GDExtensionInt,
    ) -> GDExtensionMethodBindPtr,
>;
pub type GDExtensionInterfaceClassdbGetClassTag =
    Option<unsafe extern "C" fn(p_classname: GDExtensionConstStringNamePtr) -> *mut c_void>;
pub type GDExtensionInterfaceClassdbRegisterExtensionClass2 = Option<
    unsafe extern "C" fn(
        p_library: GDExtensionClassLibraryPtr,
        p_class_name: GDExtensionConstStringNamePtr,
        p_parent_class_name: GDExtensionConstStringNamePtr,
        p_extension_funcs: *const GDExtensionClassCreationInfo2,
    ),
>;
pub type GDExtensionInterfaceClassdbRegisterExtensionClassMethod = Option<
    unsafe extern "C" fn(
        p_library: GDExtensionClassLibraryPtr,
        p_class_name: GDExtensionConstStringNamePtr,
        p_method_info: *const GDExtensionClassMethodInfo,
    ),
>;
pub type GDExtensionInterfaceClassdbRegisterExtensionClassProperty = Option<
    unsafe extern "C" fn(
        p_library: GDExtensionClassLibraryPtr,
        p_class_name: GDExtensionConstStringNamePtr,
        p_info: *const GDExtensionPropertyInfo,
        p_setter: GDExtensionConstStringNamePtr,
        p_getter: GDExtensionConstStringNamePtr,
    ),
>;
pub type GDExtensionInterfaceClassdbRegisterExtensionClassSignal = Option<
    unsafe extern "C" fn(
        p_library: GDExtensionClassLibraryPtr,
        p_class_name: GDExtensionConstStringNamePtr,
        p_signal_name: GDExtensionConstStringNamePtr,
        p_argument_info: *const GDExtensionPropertyInfo,
        p_argument_count: GDExtensionInt,
    ),
>;
pub type GDExtensionInterfaceClassdbUnregisterExtensionClass = Option<
    unsafe extern "C" fn(p_library: GDExtensionClassLibraryPtr, p_class_name: GDExtensionConstStringNamePtr),
>;
pub type GDExtensionInterfaceObjectMethodBindPtrcall = Option<
    unsafe extern "C" fn(
        p_method_bind: GDExtensionMethodBindPtr,
        p_instance: GDExtensionObjectPtr,
        p_args: *const GDExtensionConstTypePtr,
        r_ret: GDExtensionTypePtr,
    ),
>;
pub type GDExtensionInterfaceObjectDestroy = Option<unsafe extern "C" fn(p_o: GDExtensionObjectPtr)>;
pub type GDExtensionInterfaceObjectGetInstanceId =
    Option<unsafe extern "C" fn(p_object: GDExtensionConstObjectPtr) -> GDObjectInstanceID>;
pub type GDExtensionInterfaceObjectGetInstanceFromId =
    Option<unsafe extern "C" fn(p_instance_id: GDObjectInstanceID) -> GDExtensionObjectPtr>;
pub type GDExtensionInterfaceObjectCastTo = Option<
    unsafe extern "C" fn(p_object: GDExtensionConstObjectPtr, p_class_tag: *mut c_void) -> GDExtensionObjectPtr,
>;
pub type GDExtensionInterfaceObjectSetInstance = Option<
    unsafe extern "C" fn(
        p_o: GDExtensionObjectPtr,
        p_classname: GDExtensionConstStringNamePtr,
        p_instance: GDExtensionClassInstancePtr,
    ),
>;
pub type GDExtensionInterfaceRefGetObject =
    Option<unsafe extern "C" fn(p_ref: GDExtensionConstRefPtr) -> GDExtensionObjectPtr>;
pub type GDExtensionInterfaceCallableCustomCreate = Option<
    unsafe extern "C" fn(
        r_callable: GDExtensionUninitializedTypePtr,
        p_callable_custom_info: *mut GDExtensionCallableCustomInfo,
    ),
>;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Structs

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct GDExtensionGodotVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub string: *const c_char,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct GDExtensionInitialization {
    pub minimum_initialization_level: GDExtensionInitializationLevel,
    pub userdata: *mut c_void,
    pub initialize: Option<unsafe extern "C" fn(userdata: *mut c_void, p_level: GDExtensionInitializationLevel)>,
    pub deinitialize: Option<unsafe extern "C" fn(userdata: *mut c_void, p_level: GDExtensionInitializationLevel)>,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct GDExtensionCallError {
    pub error: GDExtensionCallErrorType,
    pub argument: i32,
    pub expected: i32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct GDExtensionPropertyInfo {
    pub type_: GDExtensionVariantType,
    pub name: GDExtensionStringNamePtr,
    pub class_name: GDExtensionStringNamePtr,
    pub hint: u32,
    pub hint_string: GDExtensionStringPtr,
    pub usage: u32,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct GDExtensionClassMethodInfo {
    pub name: GDExtensionStringNamePtr,
    pub method_userdata: *mut c_void,
    pub call_func: GDExtensionClassMethodCall,
    pub ptrcall_func: GDExtensionClassMethodPtrCall,
    pub method_flags: GDExtensionClassMethodFlags,
    pub has_return_value: GDExtensionBool,
    pub return_value_info: *mut GDExtensionPropertyInfo,
    pub return_value_metadata: GDExtensionClassMethodArgumentMetadata,
    pub argument_count: u32,
    pub arguments_info: *mut GDExtensionPropertyInfo,
    pub arguments_metadata: *mut GDExtensionClassMethodArgumentMetadata,
    pub default_argument_count: u32,
    pub default_arguments: *mut GDExtensionVariantPtr,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct GDExtensionCallableCustomInfo {
    pub callable_userdata: *mut c_void,
    pub token: *mut c_void,
    pub object_id: GDObjectInstanceID,
    pub call_func: GDExtensionCallableCustomCall,
    pub is_valid_func: Option<unsafe extern "C" fn(callable_userdata: *mut c_void) -> GDExtensionBool>,
    pub free_func: Option<unsafe extern "C" fn(callable_userdata: *mut c_void)>,
    pub hash_func: Option<unsafe extern "C" fn(callable_userdata: *mut c_void) -> u32>,
    pub equal_func:
        Option<unsafe extern "C" fn(callable_userdata_a: *mut c_void, callable_userdata_b: *mut c_void) -> GDExtensionBool>,
    pub less_than_func:
        Option<unsafe extern "C" fn(callable_userdata_a: *mut c_void, callable_userdata_b: *mut c_void) -> GDExtensionBool>,
    pub to_string_func: Option<
        unsafe extern "C" fn(callable_userdata: *mut c_void, r_is_valid: *mut GDExtensionBool, r_out: GDExtensionStringPtr),
    >,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct GDExtensionClassCreationInfo2 {
    pub is_virtual: GDExtensionBool,
    pub is_abstract: GDExtensionBool,
    pub is_exposed: GDExtensionBool,
    pub set_func: Option<
        unsafe extern "C" fn(
            p_instance: GDExtensionClassInstancePtr,
            p_name: GDExtensionConstStringNamePtr,
            p_value: GDExtensionConstVariantPtr,
        ) -> GDExtensionBool,
    >,
    pub get_func: Option<
        unsafe extern "C" fn(
            p_instance: GDExtensionClassInstancePtr,
            p_name: GDExtensionConstStringNamePtr,
            r_ret: GDExtensionVariantPtr,
        ) -> GDExtensionBool,
    >,
    pub get_property_list_func: Option<
        unsafe extern "C" fn(p_instance: GDExtensionClassInstancePtr, r_count: *mut u32) -> *const GDExtensionPropertyInfo,
    >,
    pub free_property_list_func:
        Option<unsafe extern "C" fn(p_instance: GDExtensionClassInstancePtr, p_list: *const GDExtensionPropertyInfo)>,
    pub property_can_revert_func: Option<
        unsafe extern "C" fn(p_instance: GDExtensionClassInstancePtr, p_name: GDExtensionConstStringNamePtr) -> GDExtensionBool,
    >,
    pub property_get_revert_func: Option<
        unsafe extern "C" fn(
            p_instance: GDExtensionClassInstancePtr,
            p_name: GDExtensionConstStringNamePtr,
            r_ret: GDExtensionVariantPtr,
        ) -> GDExtensionBool,
    >,
    pub validate_property_func: Option<
        unsafe extern "C" fn(p_instance: GDExtensionClassInstancePtr, p_property: *mut GDExtensionPropertyInfo) -> GDExtensionBool,
    >,
    pub notification_func:
        Option<unsafe extern "C" fn(p_instance: GDExtensionClassInstancePtr, p_what: i32, p_reversed: GDExtensionBool)>,
    pub to_string_func: Option<
        unsafe extern "C" fn(
            p_instance: GDExtensionClassInstancePtr,
            r_is_valid: *mut GDExtensionBool,
            p_out: GDExtensionStringPtr,
        ),
    >,
    pub reference_func: Option<unsafe extern "C" fn(p_instance: GDExtensionClassInstancePtr)>,
    pub unreference_func: Option<unsafe extern "C" fn(p_instance: GDExtensionClassInstancePtr)>,
    pub create_instance_func: Option<unsafe extern "C" fn(p_class_userdata: *mut c_void) -> GDExtensionObjectPtr>,
    pub free_instance_func:
        Option<unsafe extern "C" fn(p_class_userdata: *mut c_void, p_instance: GDExtensionClassInstancePtr)>,
    pub recreate_instance_func: Option<
        unsafe extern "C" fn(p_class_userdata: *mut c_void, p_object: GDExtensionObjectPtr) -> GDExtensionClassInstancePtr,
    >,
    pub get_virtual_func: Option<
        unsafe extern "C" fn(
            p_class_userdata: *mut c_void,
            p_name: GDExtensionConstStringNamePtr,
        ) -> GDExtensionClassCallVirtual,
    >,
    pub get_virtual_call_data_func:
        Option<unsafe extern "C" fn(p_class_userdata: *mut c_void, p_name: GDExtensionConstStringNamePtr) -> *mut c_void>,
    pub call_virtual_with_data_func: Option<
        unsafe extern "C" fn(
            p_instance: GDExtensionClassInstancePtr,
            p_name: GDExtensionConstStringNamePtr,
            p_virtual_call_userdata: *mut c_void,
            p_args: *const GDExtensionConstTypePtr,
            r_ret: GDExtensionTypePtr,
        ),
    >,
    pub get_rid_func: Option<unsafe extern "C" fn(p_instance: GDExtensionClassInstancePtr) -> u64>,
    pub class_userdata: *mut c_void,
}

impl GDExtensionClassCreationInfo2 {
    /// All callbacks unset; the caller fills in what the class supports.
    pub fn empty() -> Self {
        Self {
            is_virtual: 0,
            is_abstract: 0,
            is_exposed: 1,
            set_func: None,
            get_func: None,
            get_property_list_func: None,
            free_property_list_func: None,
            property_can_revert_func: None,
            property_get_revert_func: None,
            validate_property_func: None,
            notification_func: None,
            to_string_func: None,
            reference_func: None,
            unreference_func: None,
            create_instance_func: None,
            free_instance_func: None,
            recreate_instance_func: None,
            get_virtual_func: None,
            get_virtual_call_data_func: None,
            call_virtual_with_data_func: None,
            get_rid_func: None,
            class_userdata: std::ptr::null_mut(),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Interface table

/// Function table loaded once through `get_proc_address`.
///
/// Entries are `None` if the engine does not provide the function; calling them through [`interface_fn!`][crate::interface_fn]
/// panics in that case.
#[derive(Copy, Clone)]
pub struct GDExtensionInterface {
    pub get_godot_version: GDExtensionInterfaceGetGodotVersion,
    pub print_error: GDExtensionInterfacePrintError,
    pub print_warning: GDExtensionInterfacePrintWarning,
    pub variant_get_ptr_constructor: GDExtensionInterfaceVariantGetPtrConstructor,
    pub variant_get_ptr_destructor: GDExtensionInterfaceVariantGetPtrDestructor,
    pub string_new_with_utf8_chars_and_len: GDExtensionInterfaceStringNewWithUtf8CharsAndLen,
    pub string_to_utf8_chars: GDExtensionInterfaceStringToUtf8Chars,
    pub string_name_new_with_utf8_chars_and_len: GDExtensionInterfaceStringNameNewWithUtf8CharsAndLen,
    pub global_get_singleton: GDExtensionInterfaceGlobalGetSingleton,
    pub classdb_construct_object: GDExtensionInterfaceClassdbConstructObject,
    pub classdb_get_method_bind: GDExtensionInterfaceClassdbGetMethodBind,
    pub classdb_get_class_tag: GDExtensionInterfaceClassdbGetClassTag,
    pub classdb_register_extension_class2: GDExtensionInterfaceClassdbRegisterExtensionClass2,
    pub classdb_register_extension_class_method: GDExtensionInterfaceClassdbRegisterExtensionClassMethod,
    pub classdb_register_extension_class_property: GDExtensionInterfaceClassdbRegisterExtensionClassProperty,
    pub classdb_register_extension_class_signal: GDExtensionInterfaceClassdbRegisterExtensionClassSignal,
    pub classdb_unregister_extension_class: GDExtensionInterfaceClassdbUnregisterExtensionClass,
    pub object_method_bind_ptrcall: GDExtensionInterfaceObjectMethodBindPtrcall,
    pub object_destroy: GDExtensionInterfaceObjectDestroy,
    pub object_get_instance_id: GDExtensionInterfaceObjectGetInstanceId,
    pub object_get_instance_from_id: GDExtensionInterfaceObjectGetInstanceFromId,
    pub object_cast_to: GDExtensionInterfaceObjectCastTo,
    pub object_set_instance: GDExtensionInterfaceObjectSetInstance,
    pub ref_get_object: GDExtensionInterfaceRefGetObject,
    pub callable_custom_create: GDExtensionInterfaceCallableCustomCreate,
}

macro_rules! load_interface {
    ($get_proc_address:ident; $( $field:ident ),* $(,)?) => {
        GDExtensionInterface {
            $(
                $field: {
                    let name = concat!(stringify!($field), "\0");
                    let fptr = $get_proc_address(name.as_ptr() as *const c_char);
                    std::mem::transmute::<GDExtensionInterfaceFunctionPtr, _>(fptr)
                },
            )*
        }
    };
}

impl GDExtensionInterface {
    /// Looks up every entry by name.
    ///
    /// # Safety
    /// `get_proc_address` must return pointers whose signatures match the declared field types.
    pub(crate) unsafe fn load(
        get_proc_address: unsafe extern "C" fn(*const c_char) -> GDExtensionInterfaceFunctionPtr,
    ) -> Self {
        load_interface!(get_proc_address;
            get_godot_version,
            print_error,
            print_warning,
            variant_get_ptr_constructor,
            variant_get_ptr_destructor,
            string_new_with_utf8_chars_and_len,
            string_to_utf8_chars,
            string_name_new_with_utf8_chars_and_len,
            global_get_singleton,
            classdb_construct_object,
            classdb_get_method_bind,
            classdb_get_class_tag,
            classdb_register_extension_class2,
            classdb_register_extension_class_method,
            classdb_register_extension_class_property,
            classdb_register_extension_class_signal,
            classdb_unregister_extension_class,
            object_method_bind_ptrcall,
            object_destroy,
            object_get_instance_id,
            object_get_instance_from_id,
            object_cast_to,
            object_set_instance,
            ref_get_object,
            callable_custom_create,
        )
    }
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! In-process stand-in for the engine side of the GDExtension interface.
//!
//! Implements the interface functions the bindings load, a small class database mirroring the bundled
//! `extension_api.json`, and enough method behavior for the integration tests. Engine strings are stored as `*mut String`
//! in their opaque slot, callables as an ID into a table.
//!
//! The state mutex is never held while calling back into the extension (instance creation, virtuals, callables), since
//! those callbacks re-enter the interface.

#![allow(dead_code)] // Each test binary uses a different subset.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::ffi::{c_char, c_void, CStr};
use std::mem::MaybeUninit;
use std::sync::{Mutex, MutexGuard, Once, PoisonError};

use gdwire::sys;

type Args = *const sys::GDExtensionConstTypePtr;
type Ret = sys::GDExtensionTypePtr;

type CreateFn = unsafe extern "C" fn(*mut c_void) -> sys::GDExtensionObjectPtr;
type FreeFn = unsafe extern "C" fn(*mut c_void, sys::GDExtensionClassInstancePtr);
type GetVirtualFn =
    unsafe extern "C" fn(*mut c_void, sys::GDExtensionConstStringNamePtr) -> sys::GDExtensionClassCallVirtual;
type CallableCallFn = unsafe extern "C" fn(
    *mut c_void,
    *const sys::GDExtensionConstVariantPtr,
    sys::GDExtensionInt,
    sys::GDExtensionVariantPtr,
    *mut sys::GDExtensionCallError,
);
type CallableFreeFn = unsafe extern "C" fn(*mut c_void);
type MethodPtrcallFn = unsafe extern "C" fn(*mut c_void, sys::GDExtensionClassInstancePtr, Args, Ret);
type MethodVarcallFn = unsafe extern "C" fn(
    *mut c_void,
    sys::GDExtensionClassInstancePtr,
    *const sys::GDExtensionConstVariantPtr,
    sys::GDExtensionInt,
    sys::GDExtensionVariantPtr,
    *mut sys::GDExtensionCallError,
);

/// Entry symbol as exported by `#[gdextension]`.
pub type EntryFn = unsafe extern "C" fn(
    sys::GDExtensionInterfaceGetProcAddress,
    sys::GDExtensionClassLibraryPtr,
    *mut sys::GDExtensionInitialization,
) -> sys::GDExtensionBool;

const LIBRARY: usize = 0x11b_0000;
const REFCOUNTED_ID_BIT: u64 = 1 << 63;

const ERR_FILE_NOT_FOUND: i64 = 7;
const ERR_INVALID_PARAMETER: i64 = 31;

const CONNECT_ONE_SHOT: i64 = 4;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Public API for tests

/// Loads the extension through its entry symbol and runs all initialization levels up to `Scene`. Idempotent.
pub fn start(entry: EntryFn) {
    static START: Once = Once::new();

    START.call_once(|| unsafe {
        let mut init = MaybeUninit::<sys::GDExtensionInitialization>::zeroed();
        let loaded = entry(Some(get_proc_address), LIBRARY as *mut c_void, init.as_mut_ptr());
        assert_eq!(loaded, sys::SYS_TRUE, "extension failed to load");

        let init = init.assume_init();
        let initialize = init.initialize.expect("extension provides no initialize callback");
        for level in sys::GDEXTENSION_INITIALIZATION_CORE..=sys::GDEXTENSION_INITIALIZATION_SCENE {
            if level >= init.minimum_initialization_level {
                initialize(init.userdata, level);
            }
        }
    });
}

/// Engine-side instantiation, as when loading a scene. Returns the new object's ID, or `None` if the class cannot be
/// instantiated.
pub fn construct(class_name: &str) -> Option<u64> {
    let obj = unsafe { construct_object(class_name) };
    with_engine(|e| e.objects.get(&obj).map(|o| o.id))
}

/// Engine-side destruction, as when the scene tree frees a node.
pub fn destroy(id: u64) {
    if let Some(addr) = with_engine(|e| e.ids.get(&id).copied()) {
        destroy_object(addr);
    }
}

pub fn is_alive(id: u64) -> bool {
    with_engine(|e| e.ids.contains_key(&id))
}

pub fn refcount(id: u64) -> Option<i64> {
    with_engine(|e| e.object_by_id(id).map(|o| o.refcount))
}

/// Dynamic class of the object; the extension class for user instances.
pub fn class_of(id: u64) -> Option<String> {
    with_engine(|e| e.object_by_id(id).map(|o| o.class.clone()))
}

pub fn has_instance(id: u64) -> bool {
    with_engine(|e| e.object_by_id(id).is_some_and(|o| o.instance.is_some()))
}

pub fn is_class_registered(class_name: &str) -> bool {
    with_engine(|e| e.find_class(class_name).is_some())
}

pub fn is_class_abstract(class_name: &str) -> bool {
    with_engine(|e| {
        e.find_class(class_name)
            .and_then(|c| c.extension.as_ref())
            .is_some_and(|ext| ext.create.is_none())
    })
}

pub fn parent_of_class(class_name: &str) -> Option<String> {
    with_engine(|e| e.find_class(class_name).and_then(|c| c.parent.clone()))
}

/// How often the extension looked up the singleton `name`.
pub fn singleton_lookups(name: &str) -> usize {
    with_engine(|e| e.singleton_lookups.get(name).copied().unwrap_or(0))
}

/// Error and warning messages pushed by the extension, prefixed with `ERROR: ` or `WARNING: `.
pub fn messages() -> Vec<String> {
    with_engine(|e| e.messages.clone())
}

pub fn has_message(needle: &str) -> bool {
    messages().iter().any(|m| m.contains(needle))
}

/// Number of live engine-side callables.
pub fn callable_is_alive(callable_id: u64) -> bool {
    with_engine(|e| e.callables.contains_key(&callable_id))
}

/// ID of the callable connected as `index`-th handler of `signal`.
pub fn connected_callable(id: u64, signal: &str, index: usize) -> Option<u64> {
    with_engine(|e| {
        e.object_by_id(id)?
            .connections
            .iter()
            .filter(|c| c.signal == signal)
            .nth(index)
            .map(|c| c.callable)
    })
}

pub fn connection_count(id: u64, signal: &str) -> usize {
    with_engine(|e| {
        e.object_by_id(id)
            .map(|o| o.connections.iter().filter(|c| c.signal == signal).count())
            .unwrap_or(0)
    })
}

/// Emits `signal` on the object, calling connected handlers. Returns the call status of each handler.
pub fn emit_signal(id: u64, signal: &str) -> Vec<sys::GDExtensionCallErrorType> {
    match with_engine(|e| e.ids.get(&id).copied()) {
        Some(addr) => emit_signal_raw(addr, signal),
        None => vec![],
    }
}

/// Calls handlers of a custom callable with `arg_count` dummy arguments; returns the call error.
pub fn call_callable_with_args(callable_id: u64, arg_count: i64) -> sys::GDExtensionCallError {
    let Some((call, userdata)) = with_engine(|e| e.acquire_callable(callable_id)) else {
        panic!("no callable {callable_id}");
    };

    let dummy = [0u64; 3];
    let args: Vec<sys::GDExtensionConstVariantPtr> = (0..arg_count)
        .map(|_| dummy.as_ptr() as sys::GDExtensionConstVariantPtr)
        .collect();
    let error = unsafe { invoke_callable(call, userdata, args.as_ptr(), arg_count) };

    release_callable(callable_id);
    error
}

/// Advances a timer by `delta` seconds, emitting `timeout` when it elapses.
pub fn advance_timer(id: u64, delta: f64) -> Vec<sys::GDExtensionCallErrorType> {
    let fired = with_engine(|e| {
        let obj = e.object_by_id_mut(id)?;
        if obj.boolean("stopped", true) || obj.boolean("paused", false) {
            return None;
        }

        let left = obj.float("time_left", 0.0) - delta;
        if left > 0.0 {
            obj.set("time_left", Value::Float(left));
            return None;
        }

        if obj.boolean("one_shot", false) {
            obj.set("stopped", Value::Bool(true));
            obj.set("time_left", Value::Float(0.0));
        } else {
            let wait = obj.float("wait_time", 1.0);
            obj.set("time_left", Value::Float(left + wait));
        }
        e.ids.get(&id).copied()
    });

    match fired {
        Some(addr) => emit_signal_raw(addr, "timeout"),
        None => vec![],
    }
}

/// Whether the extension class provides a callback for the engine virtual `name`.
pub fn has_virtual(class_name: &str, name: &str) -> bool {
    unsafe { lookup_virtual(class_name, name).is_some() }
}

/// Invokes the virtual `name` on a user instance, like the engine does during its main loop. Returns false if the class
/// does not override it.
///
/// # Safety
/// `args` and `ret` must match the virtual's signature.
pub unsafe fn call_virtual(id: u64, name: &str, args: &[sys::GDExtensionConstTypePtr], ret: Ret) -> bool {
    let Some((class_name, instance)) = with_engine(|e| {
        let obj = e.object_by_id(id)?;
        Some((obj.class.clone(), obj.instance?))
    }) else {
        return false;
    };

    match lookup_virtual(&class_name, name) {
        Some(call) => {
            call(instance as sys::GDExtensionClassInstancePtr, args.as_ptr(), ret);
            true
        }
        None => false,
    }
}

/// Signature of the method `name` registered on extension class `class_name` (or an ancestor).
pub fn method_desc(class_name: &str, name: &str) -> Option<MethodDesc> {
    with_engine(|e| e.find_method(class_name, name).map(|m| m.desc.clone()))
}

/// Parameters of a signal registered by the extension on `class_name`.
pub fn signal_params(class_name: &str, signal: &str) -> Option<Vec<ParamDesc>> {
    with_engine(|e| {
        let ext = e.find_class(class_name)?.extension.as_ref()?;
        ext.signals.iter().find(|(name, _)| name == signal).map(|(_, params)| params.clone())
    })
}

/// Calls a registered method on object `id` through ptrcall, like GDScript does for typed calls. Returns false if the
/// object or method does not exist.
///
/// # Safety
/// `args` and `ret` must match the method's registered signature.
pub unsafe fn call_method(id: u64, name: &str, args: &[sys::GDExtensionConstTypePtr], ret: Ret) -> bool {
    let Some((ptrcall, instance)) = with_engine(|e| {
        let obj = e.object_by_id(id)?;
        let method = e.find_method(&obj.class, name)?;
        Some((method.ptrcall?, obj.instance?))
    }) else {
        return false;
    };

    ptrcall(std::ptr::null_mut(), instance as sys::GDExtensionClassInstancePtr, args.as_ptr(), ret);
    true
}

/// Calls a registered static method of `class_name` through ptrcall, without instance.
///
/// # Safety
/// `args` and `ret` must match the method's registered signature.
pub unsafe fn call_static_method(class_name: &str, name: &str, args: &[sys::GDExtensionConstTypePtr], ret: Ret) -> bool {
    let Some(ptrcall) = with_engine(|e| {
        let method = e.find_method(class_name, name)?;
        if method.desc.flags & sys::GDEXTENSION_METHOD_FLAG_STATIC == 0 {
            return None;
        }
        method.ptrcall
    }) else {
        return false;
    };

    ptrcall(std::ptr::null_mut(), std::ptr::null_mut(), args.as_ptr(), ret);
    true
}

/// Calls a registered method on object `id` through the Variant entry, with no arguments.
pub fn varcall_method(id: u64, name: &str) -> sys::GDExtensionCallError {
    let mut error = sys::GDExtensionCallError {
        error: sys::GDEXTENSION_CALL_OK,
        argument: 0,
        expected: 0,
    };

    let found = with_engine(|e| {
        let obj = e.object_by_id(id)?;
        let method = e.find_method(&obj.class, name)?;
        Some((method.varcall?, obj.instance?))
    });

    match found {
        Some((varcall, instance)) => unsafe {
            varcall(
                std::ptr::null_mut(),
                instance as sys::GDExtensionClassInstancePtr,
                std::ptr::null(),
                0,
                std::ptr::null_mut(),
                &mut error,
            );
        },
        None => error.error = sys::GDEXTENSION_CALL_ERROR_INVALID_METHOD,
    }
    error
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// State

static STATE: Mutex<Option<Engine>> = Mutex::new(None);

fn with_engine<R>(f: impl FnOnce(&mut Engine) -> R) -> R {
    let mut guard: MutexGuard<'_, Option<Engine>> = STATE.lock().unwrap_or_else(PoisonError::into_inner);
    let engine = guard.get_or_insert_with(Engine::new);
    f(engine)
}

struct ClassInfo {
    name: String,
    parent: Option<String>,
    is_refcounted: bool,
    is_instantiable: bool,
    signals: &'static [&'static str],
    extension: Option<ExtensionClass>,
}

struct ExtensionClass {
    create: Option<CreateFn>,
    free: Option<FreeFn>,
    get_virtual: Option<GetVirtualFn>,
    userdata: usize,
    methods: Vec<RegisteredMethod>,
    signals: Vec<(String, Vec<ParamDesc>)>,
}

struct RegisteredMethod {
    name: String,
    ptrcall: Option<MethodPtrcallFn>,
    varcall: Option<MethodVarcallFn>,
    desc: MethodDesc,
}

/// Parameter or return value of a registered method or signal, as the engine sees it.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamDesc {
    pub name: String,
    pub variant_type: sys::GDExtensionVariantType,
    pub metadata: sys::GDExtensionClassMethodArgumentMetadata,
}

/// Signature of a registered method.
#[derive(Clone, Debug, PartialEq)]
pub struct MethodDesc {
    pub flags: sys::GDExtensionClassMethodFlags,
    pub args: Vec<ParamDesc>,
    pub ret: Option<ParamDesc>,
}

#[derive(Clone)]
enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Vec2([f32; 2]),
    Color([f32; 4]),
}

#[derive(Clone)]
struct Connection {
    signal: String,
    callable: u64,
    one_shot: bool,
}

#[derive(Clone)]
struct Point {
    position: [f32; 2],
    weight: f64,
    disabled: bool,
}

struct Object {
    id: u64,
    class: String,
    refcount: i64,
    instance: Option<usize>,
    props: HashMap<&'static str, Value>,
    connections: Vec<Connection>,
    block_signals: bool,
    parent: Option<usize>,
    children: Vec<usize>,
    points: BTreeMap<i64, Point>,
    point_links: BTreeSet<(i64, i64)>,
}

impl Object {
    fn set(&mut self, key: &'static str, value: Value) {
        self.props.insert(key, value);
    }

    fn boolean(&self, key: &str, default: bool) -> bool {
        match self.props.get(key) {
            Some(Value::Bool(b)) => *b,
            _ => default,
        }
    }

    fn int(&self, key: &str, default: i64) -> i64 {
        match self.props.get(key) {
            Some(Value::Int(i)) => *i,
            _ => default,
        }
    }

    fn float(&self, key: &str, default: f64) -> f64 {
        match self.props.get(key) {
            Some(Value::Float(f)) => *f,
            _ => default,
        }
    }

    fn string(&self, key: &str) -> String {
        match self.props.get(key) {
            Some(Value::Str(s)) => s.clone(),
            _ => String::new(),
        }
    }

    fn vec2(&self, key: &str, default: [f32; 2]) -> [f32; 2] {
        match self.props.get(key) {
            Some(Value::Vec2(v)) => *v,
            _ => default,
        }
    }

    fn color(&self, key: &str, default: [f32; 4]) -> [f32; 4] {
        match self.props.get(key) {
            Some(Value::Color(c)) => *c,
            _ => default,
        }
    }
}

struct CallableEntry {
    call: Option<CallableCallFn>,
    free: Option<CallableFreeFn>,
    userdata: usize,
    refcount: usize,
}

/// Work that calls back into the extension, done after the state lock is released.
enum Deferred {
    Emit(usize, &'static str),
    Destroy(usize),
    ReleaseCallable(u64),
}

struct Engine {
    classes: Vec<ClassInfo>,
    objects: HashMap<usize, Object>,
    ids: HashMap<u64, usize>,
    next_id: u64,
    next_addr: usize,
    method_binds: Vec<(String, String)>,
    callables: HashMap<u64, CallableEntry>,
    next_callable: u64,
    singletons: HashMap<String, usize>,
    singleton_lookups: HashMap<String, usize>,
    virtual_cache: HashMap<(String, String), sys::GDExtensionClassCallVirtual>,
    messages: Vec<String>,
    last_open_error: i64,
}

impl Engine {
    fn new() -> Self {
        #[rustfmt::skip]
        let engine_classes: &[(&str, Option<&str>, bool, bool, &'static [&'static str])] = &[
            ("Object", None, false, true, &["script_changed", "property_list_changed"]),
            ("RefCounted", Some("Object"), true, true, &[]),
            ("Resource", Some("RefCounted"), true, true, &["changed", "setup_local_to_scene_requested"]),
            // Abstract in the engine; concrete events are built here directly.
            ("InputEvent", Some("Resource"), true, true, &[]),
            ("Node", Some("Object"), false, true, &["ready", "renamed", "tree_entered", "tree_exiting", "child_entered_tree"]),
            ("CanvasItem", Some("Node"), false, false, &["draw", "visibility_changed", "hidden"]),
            ("Node2D", Some("CanvasItem"), false, true, &[]),
            ("Timer", Some("Node"), false, true, &["timeout"]),
            ("AStar2D", Some("RefCounted"), true, true, &[]),
            ("FileAccess", Some("RefCounted"), true, false, &[]),
            ("TextServer", Some("RefCounted"), true, false, &[]),
            ("Engine", Some("Object"), false, false, &[]),
            ("TextServerManager", Some("Object"), false, false, &["interface_added", "interface_removed"]),
        ];

        let classes = engine_classes
            .iter()
            .map(|&(name, parent, is_refcounted, is_instantiable, signals)| ClassInfo {
                name: name.to_string(),
                parent: parent.map(str::to_string),
                is_refcounted,
                is_instantiable,
                signals,
                extension: None,
            })
            .collect();

        Self {
            classes,
            objects: HashMap::new(),
            ids: HashMap::new(),
            next_id: 1,
            next_addr: 0x1000_0000,
            method_binds: Vec::new(),
            callables: HashMap::new(),
            next_callable: 1,
            singletons: HashMap::new(),
            singleton_lookups: HashMap::new(),
            virtual_cache: HashMap::new(),
            messages: Vec::new(),
            last_open_error: 0,
        }
    }

    fn error(&mut self, msg: impl Into<String>) {
        self.messages.push(format!("ERROR: {}", msg.into()));
    }

    fn find_class(&self, name: &str) -> Option<&ClassInfo> {
        self.classes.iter().find(|c| c.name == name)
    }

    fn extension_class_mut(&mut self, name: &str) -> Option<&mut ExtensionClass> {
        self.classes.iter_mut().find(|c| c.name == name)?.extension.as_mut()
    }

    /// Registered method `name` of `class` or its nearest extension ancestor.
    fn find_method(&self, class: &str, name: &str) -> Option<&RegisteredMethod> {
        let mut current = Some(class.to_string());
        while let Some(class_name) = current {
            let info = self.find_class(&class_name)?;
            if let Some(method) = info.extension.as_ref().and_then(|ext| ext.methods.iter().find(|m| m.name == name)) {
                return Some(method);
            }
            current = info.parent.clone();
        }
        None
    }

    fn class_tag(&self, name: &str) -> usize {
        match self.classes.iter().position(|c| c.name == name) {
            Some(index) => (index + 1) * 0x10,
            None => 0,
        }
    }

    fn inherits(&self, class: &str, ancestor: &str) -> bool {
        let mut current = Some(class.to_string());
        while let Some(name) = current {
            if name == ancestor {
                return true;
            }
            current = self.find_class(&name).and_then(|c| c.parent.clone());
        }
        false
    }

    fn is_refcounted_class(&self, class: &str) -> bool {
        self.inherits(class, "RefCounted")
    }

    fn has_signal(&self, class: &str, signal: &str) -> bool {
        let mut current = Some(class.to_string());
        while let Some(name) = current {
            let Some(info) = self.find_class(&name) else {
                return false;
            };
            if info.signals.contains(&signal) {
                return true;
            }
            if let Some(ext) = &info.extension {
                if ext.signals.iter().any(|(name, _)| name == signal) {
                    return true;
                }
            }
            current = info.parent.clone();
        }
        false
    }

    fn object_by_id(&self, id: u64) -> Option<&Object> {
        self.ids.get(&id).and_then(|addr| self.objects.get(addr))
    }

    fn object_by_id_mut(&mut self, id: u64) -> Option<&mut Object> {
        let addr = *self.ids.get(&id)?;
        self.objects.get_mut(&addr)
    }

    fn alloc_object(&mut self, class: &str) -> usize {
        let addr = self.next_addr;
        self.next_addr += 0x100;

        let mut id = self.next_id;
        self.next_id += 1;
        if self.is_refcounted_class(class) {
            id |= REFCOUNTED_ID_BIT;
        }

        let object = Object {
            id,
            class: class.to_string(),
            refcount: 0,
            instance: None,
            props: HashMap::new(),
            connections: Vec::new(),
            block_signals: false,
            parent: None,
            children: Vec::new(),
            points: BTreeMap::new(),
            point_links: BTreeSet::new(),
        };
        self.objects.insert(addr, object);
        self.ids.insert(id, addr);
        addr
    }

    fn singleton(&mut self, name: &str) -> usize {
        if let Some(&addr) = self.singletons.get(name) {
            return addr;
        }
        let addr = self.alloc_object(name);
        self.singletons.insert(name.to_string(), addr);
        addr
    }

    fn acquire_callable(&mut self, id: u64) -> Option<(CallableCallFn, usize)> {
        let entry = self.callables.get_mut(&id)?;
        entry.refcount += 1;
        Some((entry.call?, entry.userdata))
    }

    /// Decrements the callable's refcount; returns its free function once unreferenced.
    fn unref_callable(&mut self, id: u64) -> Option<(CallableFreeFn, usize)> {
        let entry = self.callables.get_mut(&id)?;
        entry.refcount -= 1;
        if entry.refcount > 0 {
            return None;
        }

        let entry = self.callables.remove(&id)?;
        Some((entry.free?, entry.userdata))
    }

    /// The object and all its descendants, parents first.
    fn subtree(&self, addr: usize) -> Vec<usize> {
        let mut result = vec![addr];
        let mut index = 0;
        while index < result.len() {
            if let Some(obj) = self.objects.get(&result[index]) {
                result.extend(obj.children.iter().copied());
            }
            index += 1;
        }
        result
    }

    fn detach(&mut self, child: usize) {
        let Some(parent) = self.objects.get_mut(&child).and_then(|c| c.parent.take()) else {
            return;
        };
        if let Some(parent) = self.objects.get_mut(&parent) {
            parent.children.retain(|&c| c != child);
        }
    }

    fn attach(&mut self, parent: usize, child: usize) -> bool {
        if !self.objects.contains_key(&child) {
            self.error("add_child: child is not a valid object");
            return false;
        }
        if self.objects.get(&child).is_some_and(|c| c.parent.is_some()) {
            self.error("add_child: child already has a parent");
            return false;
        }

        if let Some(c) = self.objects.get_mut(&child) {
            c.parent = Some(parent);
        }
        if let Some(p) = self.objects.get_mut(&parent) {
            p.children.push(child);
        }
        true
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Interface table

unsafe extern "C" fn get_proc_address(name: *const c_char) -> sys::GDExtensionInterfaceFunctionPtr {
    let name = CStr::from_ptr(name).to_str().unwrap_or_default();

    let f: *const () = match name {
        "get_godot_version" => get_godot_version as *const (),
        "print_error" => print_error as *const (),
        "print_warning" => print_warning as *const (),
        "variant_get_ptr_constructor" => variant_get_ptr_constructor as *const (),
        "variant_get_ptr_destructor" => variant_get_ptr_destructor as *const (),
        "string_new_with_utf8_chars_and_len" => string_new_with_utf8_chars_and_len as *const (),
        "string_to_utf8_chars" => string_to_utf8_chars as *const (),
        "string_name_new_with_utf8_chars_and_len" => string_new_with_utf8_chars_and_len as *const (),
        "global_get_singleton" => global_get_singleton as *const (),
        "classdb_construct_object" => classdb_construct_object as *const (),
        "classdb_get_method_bind" => classdb_get_method_bind as *const (),
        "classdb_get_class_tag" => classdb_get_class_tag as *const (),
        "classdb_register_extension_class2" => classdb_register_extension_class2 as *const (),
        "classdb_unregister_extension_class" => classdb_unregister_extension_class as *const (),
        "classdb_register_extension_class_method" => classdb_register_extension_class_method as *const (),
        "classdb_register_extension_class_signal" => classdb_register_extension_class_signal as *const (),
        "object_method_bind_ptrcall" => object_method_bind_ptrcall as *const (),
        "object_destroy" => object_destroy as *const (),
        "object_get_instance_id" => object_get_instance_id as *const (),
        "object_get_instance_from_id" => object_get_instance_from_id as *const (),
        "object_cast_to" => object_cast_to as *const (),
        "object_set_instance" => object_set_instance as *const (),
        "ref_get_object" => ref_get_object as *const (),
        "callable_custom_create" => callable_custom_create as *const (),
        _ => return None,
    };

    Some(std::mem::transmute::<*const (), unsafe extern "C" fn()>(f))
}

unsafe extern "C" fn get_godot_version(r_version: *mut sys::GDExtensionGodotVersion) {
    *r_version = sys::GDExtensionGodotVersion {
        major: 4,
        minor: 2,
        patch: 1,
        string: c"Godot Engine v4.2.1.mock".as_ptr(),
    };
}

unsafe fn c_string(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    CStr::from_ptr(ptr).to_string_lossy().into_owned()
}

unsafe extern "C" fn print_error(
    description: *const c_char,
    _function: *const c_char,
    _file: *const c_char,
    _line: i32,
    _editor_notify: sys::GDExtensionBool,
) {
    let msg = c_string(description);
    with_engine(|e| e.messages.push(format!("ERROR: {msg}")));
}

unsafe extern "C" fn print_warning(
    description: *const c_char,
    _function: *const c_char,
    _file: *const c_char,
    _line: i32,
    _editor_notify: sys::GDExtensionBool,
) {
    let msg = c_string(description);
    with_engine(|e| e.messages.push(format!("WARNING: {msg}")));
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Builtins: String and StringName share one representation, a boxed Rust string.

unsafe fn read_string(ptr: sys::GDExtensionConstTypePtr) -> String {
    let inner = *(ptr as *const *mut String);
    if inner.is_null() {
        String::new()
    } else {
        (*inner).clone()
    }
}

unsafe fn write_new_string(dest: sys::GDExtensionUninitializedTypePtr, value: String) {
    *(dest as *mut *mut String) = Box::into_raw(Box::new(value));
}

/// Overwrites an initialized string, e.g. a ptrcall return slot.
unsafe fn overwrite_string(dest: sys::GDExtensionTypePtr, value: String) {
    let inner = *(dest as *mut *mut String);
    if inner.is_null() {
        write_new_string(dest, value);
    } else {
        *inner = value;
    }
}

unsafe extern "C" fn string_construct_default(
    dest: sys::GDExtensionUninitializedTypePtr,
    _args: *const sys::GDExtensionConstTypePtr,
) {
    write_new_string(dest, String::new());
}

unsafe extern "C" fn string_construct_copy(
    dest: sys::GDExtensionUninitializedTypePtr,
    args: *const sys::GDExtensionConstTypePtr,
) {
    write_new_string(dest, read_string(*args));
}

unsafe extern "C" fn string_destroy(ptr: sys::GDExtensionTypePtr) {
    let inner = *(ptr as *mut *mut String);
    if !inner.is_null() {
        drop(Box::from_raw(inner));
    }
    *(ptr as *mut *mut String) = std::ptr::null_mut();
}

unsafe extern "C" fn string_new_with_utf8_chars_and_len(
    dest: sys::GDExtensionUninitializedStringPtr,
    contents: *const c_char,
    size: sys::GDExtensionInt,
) {
    let bytes = std::slice::from_raw_parts(contents as *const u8, size.max(0) as usize);
    write_new_string(dest, String::from_utf8_lossy(bytes).into_owned());
}

unsafe extern "C" fn string_to_utf8_chars(
    string: sys::GDExtensionConstStringPtr,
    r_text: *mut c_char,
    max_write_length: sys::GDExtensionInt,
) -> sys::GDExtensionInt {
    let value = read_string(string);
    let bytes = value.as_bytes();
    if r_text.is_null() {
        return bytes.len() as i64;
    }

    let written = bytes.len().min(max_write_length.max(0) as usize);
    std::ptr::copy_nonoverlapping(bytes.as_ptr(), r_text as *mut u8, written);
    written as i64
}

// Callables: 16 bytes, the first 8 hold the ID (0 = invalid).

unsafe fn read_callable_id(ptr: sys::GDExtensionConstTypePtr) -> u64 {
    *(ptr as *const u64)
}

unsafe fn write_callable_id(dest: sys::GDExtensionUninitializedTypePtr, id: u64) {
    *(dest as *mut [u64; 2]) = [id, 0];
}

unsafe extern "C" fn callable_construct_default(
    dest: sys::GDExtensionUninitializedTypePtr,
    _args: *const sys::GDExtensionConstTypePtr,
) {
    write_callable_id(dest, 0);
}

unsafe extern "C" fn callable_construct_copy(
    dest: sys::GDExtensionUninitializedTypePtr,
    args: *const sys::GDExtensionConstTypePtr,
) {
    let id = read_callable_id(*args);
    if id != 0 {
        with_engine(|e| {
            if let Some(entry) = e.callables.get_mut(&id) {
                entry.refcount += 1;
            }
        });
    }
    write_callable_id(dest, id);
}

unsafe extern "C" fn callable_destroy(ptr: sys::GDExtensionTypePtr) {
    let id = read_callable_id(ptr);
    if id != 0 {
        release_callable(id);
    }
    write_callable_id(ptr, 0);
}

unsafe extern "C" fn callable_custom_create(
    r_callable: sys::GDExtensionUninitializedTypePtr,
    info: *mut sys::GDExtensionCallableCustomInfo,
) {
    let info = &*info;
    let id = with_engine(|e| {
        if info.token as usize != LIBRARY {
            e.error("callable_custom_create: token is not the library pointer");
        }

        let id = e.next_callable;
        e.next_callable += 1;
        e.callables.insert(
            id,
            CallableEntry {
                call: info.call_func,
                free: info.free_func,
                userdata: info.callable_userdata as usize,
                refcount: 1,
            },
        );
        id
    });

    write_callable_id(r_callable, id);
}

fn release_callable(id: u64) {
    if let Some((free, userdata)) = with_engine(|e| e.unref_callable(id)) {
        unsafe { free(userdata as *mut c_void) };
    }
}

unsafe fn invoke_callable(
    call: CallableCallFn,
    userdata: usize,
    args: *const sys::GDExtensionConstVariantPtr,
    arg_count: i64,
) -> sys::GDExtensionCallError {
    let mut ret = [0u64; 3];
    let mut error = sys::GDExtensionCallError {
        error: u32::MAX,
        argument: 0,
        expected: 0,
    };
    call(
        userdata as *mut c_void,
        args,
        arg_count,
        ret.as_mut_ptr() as sys::GDExtensionVariantPtr,
        &mut error,
    );
    error
}

unsafe extern "C" fn variant_get_ptr_constructor(
    ty: sys::GDExtensionVariantType,
    index: i32,
) -> sys::GDExtensionPtrConstructor {
    let string = sys::VariantType::STRING.sys();
    let string_name = sys::VariantType::STRING_NAME.sys();
    let callable = sys::VariantType::CALLABLE.sys();

    match (ty, index) {
        (t, 0) if t == string || t == string_name => Some(string_construct_default),
        // Index 2 converts between String and StringName, which share a representation here.
        (t, 1 | 2) if t == string || t == string_name => Some(string_construct_copy),
        (t, 0) if t == callable => Some(callable_construct_default),
        (t, 1) if t == callable => Some(callable_construct_copy),
        _ => None,
    }
}

unsafe extern "C" fn variant_get_ptr_destructor(ty: sys::GDExtensionVariantType) -> sys::GDExtensionPtrDestructor {
    if ty == sys::VariantType::STRING.sys() || ty == sys::VariantType::STRING_NAME.sys() {
        Some(string_destroy)
    } else if ty == sys::VariantType::CALLABLE.sys() {
        Some(callable_destroy)
    } else {
        None
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Class database

unsafe extern "C" fn global_get_singleton(name: sys::GDExtensionConstStringNamePtr) -> sys::GDExtensionObjectPtr {
    let name = read_string(name);
    with_engine(|e| {
        *e.singleton_lookups.entry(name.clone()).or_default() += 1;
        match name.as_str() {
            "Engine" | "TextServerManager" => e.singleton(&name) as sys::GDExtensionObjectPtr,
            _ => std::ptr::null_mut(),
        }
    })
}

unsafe extern "C" fn classdb_construct_object(class_name: sys::GDExtensionConstStringNamePtr) -> sys::GDExtensionObjectPtr {
    let class_name = read_string(class_name);
    construct_object(&class_name) as sys::GDExtensionObjectPtr
}

/// Returns the object address, or 0.
unsafe fn construct_object(class_name: &str) -> usize {
    enum Plan {
        Engine,
        Extension(CreateFn, usize),
        Fail(String),
    }

    let plan = with_engine(|e| match e.find_class(class_name) {
        None => Plan::Fail(format!("cannot construct unknown class {class_name}")),
        Some(info) => match &info.extension {
            Some(ExtensionClass {
                create: Some(create),
                userdata,
                ..
            }) => Plan::Extension(*create, *userdata),
            Some(_) => Plan::Fail(format!("class {class_name} is abstract")),
            None if info.is_instantiable => Plan::Engine,
            None => Plan::Fail(format!("class {class_name} is not instantiable")),
        },
    });

    match plan {
        Plan::Engine => with_engine(|e| e.alloc_object(class_name)),
        Plan::Extension(create, userdata) => create(userdata as *mut c_void) as usize,
        Plan::Fail(msg) => {
            with_engine(|e| e.error(msg));
            0
        }
    }
}

unsafe extern "C" fn classdb_get_method_bind(
    class_name: sys::GDExtensionConstStringNamePtr,
    method_name: sys::GDExtensionConstStringNamePtr,
    _hash: sys::GDExtensionInt,
) -> sys::GDExtensionMethodBindPtr {
    let class_name = read_string(class_name);
    let method_name = read_string(method_name);

    with_engine(|e| {
        if e.find_class(&class_name).is_none() {
            e.error(format!("method bind of unknown class {class_name}"));
            return std::ptr::null();
        }

        let key = (class_name, method_name);
        let index = match e.method_binds.iter().position(|b| *b == key) {
            Some(index) => index,
            None => {
                e.method_binds.push(key);
                e.method_binds.len() - 1
            }
        };
        (index + 1) as sys::GDExtensionMethodBindPtr
    })
}

unsafe extern "C" fn classdb_get_class_tag(class_name: sys::GDExtensionConstStringNamePtr) -> *mut c_void {
    let class_name = read_string(class_name);
    with_engine(|e| e.class_tag(&class_name) as *mut c_void)
}

unsafe extern "C" fn classdb_register_extension_class2(
    library: sys::GDExtensionClassLibraryPtr,
    class_name: sys::GDExtensionConstStringNamePtr,
    parent_class_name: sys::GDExtensionConstStringNamePtr,
    info: *const sys::GDExtensionClassCreationInfo2,
) {
    let class_name = read_string(class_name);
    let parent_class_name = read_string(parent_class_name);
    let info = &*info;

    with_engine(|e| {
        if library as usize != LIBRARY {
            e.error(format!("class {class_name} registered with foreign library pointer"));
            return;
        }
        if e.find_class(&class_name).is_some() {
            e.error(format!("class {class_name} is already registered"));
            return;
        }
        let Some(parent) = e.find_class(&parent_class_name) else {
            e.error(format!("parent class {parent_class_name} of {class_name} does not exist"));
            return;
        };

        let is_refcounted = parent.is_refcounted;
        let create = if info.is_abstract != 0 { None } else { info.create_instance_func };
        e.classes.push(ClassInfo {
            name: class_name,
            parent: Some(parent_class_name),
            is_refcounted,
            is_instantiable: create.is_some(),
            signals: &[],
            extension: Some(ExtensionClass {
                create,
                free: info.free_instance_func,
                get_virtual: info.get_virtual_func,
                userdata: info.class_userdata as usize,
                methods: vec![],
                signals: vec![],
            }),
        });
    });
}

unsafe extern "C" fn classdb_unregister_extension_class(
    _library: sys::GDExtensionClassLibraryPtr,
    class_name: sys::GDExtensionConstStringNamePtr,
) {
    let class_name = read_string(class_name);
    with_engine(|e| {
        // Tags are positions; keep the slot but make the class unreachable.
        if let Some(info) = e.classes.iter_mut().find(|c| c.name == class_name && c.extension.is_some()) {
            info.name = format!("<unregistered {class_name}>");
        }
    });
}

unsafe fn read_param(info: &sys::GDExtensionPropertyInfo, metadata: sys::GDExtensionClassMethodArgumentMetadata) -> ParamDesc {
    ParamDesc {
        name: read_string(info.name as sys::GDExtensionConstTypePtr),
        variant_type: info.type_,
        metadata,
    }
}

unsafe extern "C" fn classdb_register_extension_class_method(
    _library: sys::GDExtensionClassLibraryPtr,
    class_name: sys::GDExtensionConstStringNamePtr,
    method_info: *const sys::GDExtensionClassMethodInfo,
) {
    let class_name = read_string(class_name);
    let info = &*method_info;
    let name = read_string(info.name as sys::GDExtensionConstTypePtr);

    let args = (0..info.argument_count as usize)
        .map(|i| read_param(&*info.arguments_info.add(i), *info.arguments_metadata.add(i)))
        .collect();
    let ret = (info.has_return_value != 0).then(|| read_param(&*info.return_value_info, info.return_value_metadata));

    with_engine(|e| {
        let error = match e.extension_class_mut(&class_name) {
            None => Some(format!("method {name} registered on unknown extension class {class_name}")),
            Some(ext) if ext.methods.iter().any(|m| m.name == name) => {
                Some(format!("method {class_name}::{name} is already registered"))
            }
            Some(ext) => {
                ext.methods.push(RegisteredMethod {
                    name,
                    ptrcall: info.ptrcall_func,
                    varcall: info.call_func,
                    desc: MethodDesc {
                        flags: info.method_flags,
                        args,
                        ret,
                    },
                });
                None
            }
        };
        if let Some(msg) = error {
            e.error(msg);
        }
    });
}

unsafe extern "C" fn classdb_register_extension_class_signal(
    _library: sys::GDExtensionClassLibraryPtr,
    class_name: sys::GDExtensionConstStringNamePtr,
    signal_name: sys::GDExtensionConstStringNamePtr,
    argument_info: *const sys::GDExtensionPropertyInfo,
    argument_count: sys::GDExtensionInt,
) {
    let class_name = read_string(class_name);
    let signal_name = read_string(signal_name);
    let params = (0..argument_count as usize)
        .map(|i| read_param(&*argument_info.add(i), sys::GDEXTENSION_METHOD_ARGUMENT_METADATA_NONE))
        .collect();

    with_engine(|e| match e.extension_class_mut(&class_name) {
        Some(ext) => ext.signals.push((signal_name, params)),
        None => e.error(format!("signal {signal_name} registered on unknown extension class {class_name}")),
    });
}

unsafe fn lookup_virtual(class_name: &str, name: &str) -> sys::GDExtensionClassCallVirtual {
    let key = (class_name.to_string(), name.to_string());
    if let Some(cached) = with_engine(|e| e.virtual_cache.get(&key).copied()) {
        return cached;
    }

    let Some((get_virtual, userdata)) = with_engine(|e| {
        let ext = e.find_class(class_name)?.extension.as_ref()?;
        Some((ext.get_virtual?, ext.userdata))
    }) else {
        return None;
    };

    let mut name_slot = MaybeUninit::<*mut String>::uninit();
    write_new_string(name_slot.as_mut_ptr() as sys::GDExtensionUninitializedTypePtr, name.to_string());
    let result = get_virtual(
        userdata as *mut c_void,
        name_slot.as_ptr() as sys::GDExtensionConstStringNamePtr,
    );
    string_destroy(name_slot.as_mut_ptr() as sys::GDExtensionTypePtr);

    with_engine(|e| e.virtual_cache.insert(key, result));
    result
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Objects

unsafe extern "C" fn object_get_instance_id(object: sys::GDExtensionConstObjectPtr) -> sys::GDObjectInstanceID {
    with_engine(|e| e.objects.get(&(object as usize)).map(|o| o.id).unwrap_or(0))
}

unsafe extern "C" fn object_get_instance_from_id(id: sys::GDObjectInstanceID) -> sys::GDExtensionObjectPtr {
    with_engine(|e| e.ids.get(&id).copied().unwrap_or(0) as sys::GDExtensionObjectPtr)
}

unsafe extern "C" fn object_cast_to(object: sys::GDExtensionConstObjectPtr, class_tag: *mut c_void) -> sys::GDExtensionObjectPtr {
    with_engine(|e| {
        let Some(obj) = e.objects.get(&(object as usize)) else {
            return std::ptr::null_mut();
        };
        let target = (class_tag as usize / 0x10).checked_sub(1).and_then(|i| e.classes.get(i));
        match target {
            Some(target) if e.inherits(&obj.class, &target.name) => object as sys::GDExtensionObjectPtr,
            _ => std::ptr::null_mut(),
        }
    })
}

unsafe extern "C" fn object_set_instance(
    object: sys::GDExtensionObjectPtr,
    class_name: sys::GDExtensionConstStringNamePtr,
    instance: sys::GDExtensionClassInstancePtr,
) {
    let class_name = read_string(class_name);
    with_engine(|e| {
        let extends = e.objects.get(&(object as usize)).map(|o| o.class.clone());
        let Some(base_class) = extends else {
            e.error("object_set_instance on dead object");
            return;
        };
        if !e.inherits(&class_name, &base_class) {
            e.error(format!("{class_name} does not extend {base_class}"));
            return;
        }

        if let Some(obj) = e.objects.get_mut(&(object as usize)) {
            obj.class = class_name;
            obj.instance = Some(instance as usize);
        }
    });
}

unsafe extern "C" fn ref_get_object(reference: sys::GDExtensionConstRefPtr) -> sys::GDExtensionObjectPtr {
    *(reference as *const sys::GDExtensionObjectPtr)
}

unsafe extern "C" fn object_destroy(object: sys::GDExtensionObjectPtr) {
    destroy_object(object as usize);
}

fn destroy_object(addr: usize) {
    let frees = with_engine(|e| {
        if !e.objects.contains_key(&addr) {
            e.error(format!("object_destroy on dead object {addr:#x}"));
            return None;
        }

        let subtree = e.subtree(addr);
        let frees: Vec<(FreeFn, usize, usize)> = subtree
            .iter()
            .filter_map(|a| {
                let obj = e.objects.get(a)?;
                let instance = obj.instance?;
                let ext = e.find_class(&obj.class)?.extension.as_ref()?;
                Some((ext.free?, ext.userdata, instance))
            })
            .collect();
        Some((subtree, frees))
    });
    let Some((subtree, frees)) = frees else {
        return;
    };

    // Instances are freed while their objects are still alive.
    for (free, userdata, instance) in frees {
        unsafe { free(userdata as *mut c_void, instance as sys::GDExtensionClassInstancePtr) };
    }

    let released = with_engine(|e| {
        e.detach(addr);
        let mut released = vec![];
        for a in subtree {
            if let Some(obj) = e.objects.remove(&a) {
                e.ids.remove(&obj.id);
                released.extend(obj.connections.iter().map(|c| c.callable));
            }
        }
        released
    });

    for callable in released {
        release_callable(callable);
    }
}

fn emit_signal_raw(addr: usize, signal: &str) -> Vec<sys::GDExtensionCallErrorType> {
    let targets = with_engine(|e| {
        let obj = e.objects.get_mut(&addr)?;
        if obj.block_signals {
            return None;
        }

        let matching: Vec<Connection> = obj.connections.iter().filter(|c| c.signal == signal).cloned().collect();
        obj.connections.retain(|c| !(c.signal == signal && c.one_shot));

        let mut targets = vec![];
        for conn in matching {
            if let Some((call, userdata)) = e.acquire_callable(conn.callable) {
                targets.push((conn, call, userdata));
            }
        }
        Some(targets)
    });

    let mut statuses = vec![];
    for (conn, call, userdata) in targets.unwrap_or_default() {
        let error = unsafe { invoke_callable(call, userdata, std::ptr::null(), 0) };
        statuses.push(error.error);

        release_callable(conn.callable);
        if conn.one_shot {
            release_callable(conn.callable);
        }
    }
    statuses
}

fn run_deferred(deferred: Vec<Deferred>) {
    for work in deferred {
        match work {
            Deferred::Emit(addr, signal) => {
                emit_signal_raw(addr, signal);
            }
            Deferred::Destroy(addr) => destroy_object(addr),
            Deferred::ReleaseCallable(id) => release_callable(id),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Method calls

unsafe fn arg<T: Copy>(args: Args, index: usize) -> T {
    *(*args.add(index) as *const T)
}

unsafe fn arg_bool(args: Args, index: usize) -> bool {
    *(*args.add(index) as *const u8) != 0
}

unsafe fn arg_string(args: Args, index: usize) -> String {
    read_string(*args.add(index))
}

unsafe fn arg_object(args: Args, index: usize) -> usize {
    *(*args.add(index) as *const sys::GDExtensionObjectPtr) as usize
}

unsafe fn ret<T: Copy>(ret: Ret, value: T) {
    if !ret.is_null() {
        *(ret as *mut T) = value;
    }
}

unsafe fn ret_object(r: Ret, addr: usize) {
    ret::<sys::GDExtensionObjectPtr>(r, addr as sys::GDExtensionObjectPtr);
}

unsafe extern "C" fn object_method_bind_ptrcall(
    method_bind: sys::GDExtensionMethodBindPtr,
    instance: sys::GDExtensionObjectPtr,
    args: Args,
    r: Ret,
) {
    let deferred = with_engine(|e| unsafe { e.ptrcall(method_bind as usize, instance as usize, args, r) });
    run_deferred(deferred);
}

impl Engine {
    unsafe fn ptrcall(&mut self, bind: usize, addr: usize, args: Args, r: Ret) -> Vec<Deferred> {
        let Some((class, method)) = bind.checked_sub(1).and_then(|i| self.method_binds.get(i)).cloned() else {
            self.error(format!("invalid method bind {bind:#x}"));
            return vec![];
        };

        if class == "FileAccess" && addr == 0 {
            self.file_access_static(&method, args, r);
            return vec![];
        }
        if !self.objects.contains_key(&addr) {
            self.error(format!("{class}::{method} called on dead object {addr:#x}"));
            return vec![];
        }

        let mut deferred = vec![];
        let handled = match class.as_str() {
            "Object" => self.object_method(addr, &method, args, r, &mut deferred),
            "RefCounted" => self.ref_counted_method(addr, &method, r),
            "Resource" => self.resource_method(addr, &method, args, r, &mut deferred),
            "InputEvent" => self.input_event_method(addr, &method, args, r),
            "Node" => self.node_method(addr, &method, args, r, &mut deferred),
            "CanvasItem" => self.canvas_item_method(addr, &method, args, r, &mut deferred),
            "Node2D" => self.node_2d_method(addr, &method, args, r),
            "Timer" => self.timer_method(addr, &method, args, r),
            "AStar2D" => self.astar_method(addr, &method, args, r),
            "Engine" => self.engine_method(addr, &method, args, r),
            "TextServerManager" => self.text_server_manager_method(&method, r),
            _ => false,
        };

        if !handled {
            self.error(format!("mock engine does not implement {class}::{method}"));
        }
        deferred
    }

    fn obj(&mut self, addr: usize) -> &mut Object {
        match self.objects.get_mut(&addr) {
            Some(obj) => obj,
            None => panic!("object {addr:#x} vanished during call"),
        }
    }

    unsafe fn object_method(&mut self, addr: usize, method: &str, args: Args, r: Ret, deferred: &mut Vec<Deferred>) -> bool {
        match method {
            "get_class" => overwrite_string(r, self.obj(addr).class.clone()),
            "is_class" => {
                let class = self.obj(addr).class.clone();
                let is = self.inherits(&class, &arg_string(args, 0));
                ret(r, is);
            }
            "get_instance_id" => ret(r, self.obj(addr).id as i64),
            "set_block_signals" => self.obj(addr).block_signals = arg_bool(args, 0),
            "is_blocking_signals" => ret(r, self.obj(addr).block_signals),
            "notification" => {}
            "has_signal" => {
                let class = self.obj(addr).class.clone();
                let has = self.has_signal(&class, &arg_string(args, 0));
                ret(r, has);
            }
            "connect" => {
                let code = self.connect(addr, arg_string(args, 0), read_callable_id(*args.add(1)), arg::<i64>(args, 2));
                ret(r, code);
            }
            "disconnect" => {
                let signal = arg_string(args, 0);
                let callable = read_callable_id(*args.add(1));
                let obj = self.obj(addr);
                let before = obj.connections.len();
                obj.connections.retain(|c| !(c.signal == signal && c.callable == callable));
                if obj.connections.len() < before {
                    deferred.push(Deferred::ReleaseCallable(callable));
                } else {
                    self.error(format!("disconnect: {signal} is not connected to callable {callable}"));
                }
            }
            "is_connected" => {
                let signal = arg_string(args, 0);
                let callable = read_callable_id(*args.add(1));
                let connected = self
                    .obj(addr)
                    .connections
                    .iter()
                    .any(|c| c.signal == signal && c.callable == callable);
                ret(r, connected);
            }
            _ => return false,
        }
        true
    }

    fn connect(&mut self, addr: usize, signal: String, callable: u64, flags: i64) -> i64 {
        let class = self.obj(addr).class.clone();
        if !self.has_signal(&class, &signal) {
            self.error(format!("connect: signal '{signal}' does not exist in {class}"));
            return ERR_INVALID_PARAMETER;
        }
        if callable == 0 || !self.callables.contains_key(&callable) {
            self.error("connect: invalid callable");
            return ERR_INVALID_PARAMETER;
        }
        if self
            .obj(addr)
            .connections
            .iter()
            .any(|c| c.signal == signal && c.callable == callable)
        {
            self.error(format!("connect: signal '{signal}' is already connected to this callable"));
            return ERR_INVALID_PARAMETER;
        }

        if let Some(entry) = self.callables.get_mut(&callable) {
            entry.refcount += 1;
        }
        self.obj(addr).connections.push(Connection {
            signal,
            callable,
            one_shot: flags & CONNECT_ONE_SHOT != 0,
        });
        0
    }

    unsafe fn ref_counted_method(&mut self, addr: usize, method: &str, r: Ret) -> bool {
        let obj = self.obj(addr);
        match method {
            "init_ref" => {
                obj.refcount = 1;
                ret(r, true);
            }
            "reference" => {
                obj.refcount += 1;
                ret(r, true);
            }
            "unreference" => {
                obj.refcount -= 1;
                ret(r, obj.refcount == 0);
            }
            "get_reference_count" => ret(r, obj.refcount),
            _ => return false,
        }
        true
    }

    unsafe fn resource_method(&mut self, addr: usize, method: &str, args: Args, r: Ret, deferred: &mut Vec<Deferred>) -> bool {
        match method {
            "set_name" => self.obj(addr).set("name", Value::Str(arg_string(args, 0))),
            "get_name" => overwrite_string(r, self.obj(addr).string("name")),
            "set_path" => self.obj(addr).set("path", Value::Str(arg_string(args, 0))),
            "get_path" => overwrite_string(r, self.obj(addr).string("path")),
            "set_local_to_scene" => self.obj(addr).set("local_to_scene", Value::Bool(arg_bool(args, 0))),
            "is_local_to_scene" => ret(r, self.obj(addr).boolean("local_to_scene", false)),
            "emit_changed" => deferred.push(Deferred::Emit(addr, "changed")),
            "duplicate" => {
                let source = self.obj(addr);
                if source.instance.is_some() {
                    self.error("duplicate of extension resources is not supported");
                    ret_object(r, 0);
                    return true;
                }

                let class = source.class.clone();
                let mut props = source.props.clone();
                props.remove("path");

                let copy = self.alloc_object(&class);
                let obj = self.obj(copy);
                obj.props = props;
                // The caller receives the copy with its reference already counted.
                obj.refcount = 1;
                ret_object(r, copy);
            }
            _ => return false,
        }
        true
    }

    unsafe fn node_method(&mut self, addr: usize, method: &str, args: Args, r: Ret, deferred: &mut Vec<Deferred>) -> bool {
        match method {
            "set_name" => {
                self.obj(addr).set("name", Value::Str(arg_string(args, 0)));
                deferred.push(Deferred::Emit(addr, "renamed"));
            }
            "get_name" => overwrite_string(r, self.obj(addr).string("name")),
            "add_child" => {
                let child = arg_object(args, 0);
                if self.attach(addr, child) {
                    deferred.push(Deferred::Emit(addr, "child_entered_tree"));
                }
            }
            "add_sibling" => {
                let sibling = arg_object(args, 0);
                match self.obj(addr).parent {
                    Some(parent) => {
                        self.attach(parent, sibling);
                    }
                    None => self.error("add_sibling: node has no parent"),
                }
            }
            "remove_child" => {
                let child = arg_object(args, 0);
                if self.objects.get(&child).and_then(|c| c.parent) == Some(addr) {
                    self.detach(child);
                } else {
                    self.error("remove_child: not a child of this node");
                }
            }
            "get_child_count" => ret(r, self.obj(addr).children.len() as i64),
            "get_child" => {
                let children = &self.obj(addr).children;
                let idx = arg::<i64>(args, 0);
                let idx = if idx < 0 { children.len() as i64 + idx } else { idx };
                match usize::try_from(idx).ok().and_then(|i| children.get(i)).copied() {
                    Some(child) => ret_object(r, child),
                    None => {
                        ret_object(r, 0);
                        self.error(format!("get_child: index {idx} out of bounds"));
                    }
                }
            }
            "get_parent" => {
                let parent = self.obj(addr).parent.unwrap_or(0);
                ret_object(r, parent);
            }
            "is_inside_tree" => ret(r, false),
            "set_process" => self.obj(addr).set("processing", Value::Bool(arg_bool(args, 0))),
            "is_processing" => ret(r, self.obj(addr).boolean("processing", false)),
            "set_process_mode" => self.obj(addr).set("process_mode", Value::Int(arg::<i64>(args, 0))),
            "get_process_mode" => ret(r, self.obj(addr).int("process_mode", 0)),
            "queue_free" => deferred.push(Deferred::Destroy(addr)),
            _ => return false,
        }
        true
    }

    unsafe fn canvas_item_method(
        &mut self,
        addr: usize,
        method: &str,
        args: Args,
        r: Ret,
        deferred: &mut Vec<Deferred>,
    ) -> bool {
        let mut set_visible = |engine: &mut Self, visible: bool| {
            let obj = engine.obj(addr);
            if obj.boolean("visible", true) != visible {
                obj.set("visible", Value::Bool(visible));
                deferred.push(Deferred::Emit(addr, "visibility_changed"));
                if !visible {
                    deferred.push(Deferred::Emit(addr, "hidden"));
                }
            }
        };

        match method {
            "set_visible" => set_visible(self, arg_bool(args, 0)),
            "show" => set_visible(self, true),
            "hide" => set_visible(self, false),
            "is_visible" => ret(r, self.obj(addr).boolean("visible", true)),
            "queue_redraw" => {}
            "set_modulate" => self.obj(addr).set("modulate", Value::Color(arg::<[f32; 4]>(args, 0))),
            "get_modulate" => ret(r, self.obj(addr).color("modulate", [1.0; 4])),
            _ => return false,
        }
        true
    }

    unsafe fn node_2d_method(&mut self, addr: usize, method: &str, args: Args, r: Ret) -> bool {
        let obj = self.obj(addr);
        match method {
            "set_position" => obj.set("position", Value::Vec2(arg::<[f32; 2]>(args, 0))),
            "get_position" => ret(r, obj.vec2("position", [0.0; 2])),
            "set_rotation" => obj.set("rotation", Value::Float(arg::<f64>(args, 0))),
            "get_rotation" => ret(r, obj.float("rotation", 0.0)),
            "set_scale" => obj.set("scale", Value::Vec2(arg::<[f32; 2]>(args, 0))),
            "get_scale" => ret(r, obj.vec2("scale", [1.0; 2])),
            "rotate" => {
                let rotation = obj.float("rotation", 0.0) + arg::<f64>(args, 0);
                obj.set("rotation", Value::Float(rotation));
            }
            "translate" => {
                let [x, y] = obj.vec2("position", [0.0; 2]);
                let [dx, dy] = arg::<[f32; 2]>(args, 0);
                obj.set("position", Value::Vec2([x + dx, y + dy]));
            }
            "look_at" => {
                let [x, y] = obj.vec2("position", [0.0; 2]);
                let [px, py] = arg::<[f32; 2]>(args, 0);
                obj.set("rotation", Value::Float(f64::from(py - y).atan2(f64::from(px - x))));
            }
            _ => return false,
        }
        true
    }

    unsafe fn input_event_method(&mut self, addr: usize, method: &str, args: Args, r: Ret) -> bool {
        let obj = self.obj(addr);
        match method {
            "set_device" => obj.set("device", Value::Int(arg::<i64>(args, 0))),
            "get_device" => ret(r, obj.int("device", 0)),
            _ => return false,
        }
        true
    }

    unsafe fn timer_method(&mut self, addr: usize, method: &str, args: Args, r: Ret) -> bool {
        let obj = self.obj(addr);
        match method {
            "set_wait_time" => obj.set("wait_time", Value::Float(arg::<f64>(args, 0))),
            "get_wait_time" => ret(r, obj.float("wait_time", 1.0)),
            "set_one_shot" => obj.set("one_shot", Value::Bool(arg_bool(args, 0))),
            "is_one_shot" => ret(r, obj.boolean("one_shot", false)),
            "set_autostart" => obj.set("autostart", Value::Bool(arg_bool(args, 0))),
            "has_autostart" => ret(r, obj.boolean("autostart", false)),
            "start" => {
                let time_sec = arg::<f64>(args, 0);
                if time_sec > 0.0 {
                    obj.set("wait_time", Value::Float(time_sec));
                }
                let wait = obj.float("wait_time", 1.0);
                obj.set("time_left", Value::Float(wait));
                obj.set("stopped", Value::Bool(false));
            }
            "stop" => {
                obj.set("stopped", Value::Bool(true));
                obj.set("time_left", Value::Float(0.0));
            }
            "set_paused" => obj.set("paused", Value::Bool(arg_bool(args, 0))),
            "is_paused" => ret(r, obj.boolean("paused", false)),
            "is_stopped" => ret(r, obj.boolean("stopped", true)),
            "get_time_left" => ret(r, obj.float("time_left", 0.0)),
            "set_timer_process_callback" => obj.set("process_callback", Value::Int(arg::<i64>(args, 0))),
            "get_timer_process_callback" => ret(r, obj.int("process_callback", 1)),
            _ => return false,
        }
        true
    }

    unsafe fn astar_method(&mut self, addr: usize, method: &str, args: Args, r: Ret) -> bool {
        let obj = self.obj(addr);
        let link = |a: i64, b: i64| (a.min(b), a.max(b));

        match method {
            "get_available_point_id" => {
                let id = (0..).find(|id| !obj.points.contains_key(id)).unwrap_or(0);
                ret(r, id);
            }
            "add_point" => {
                let point = Point {
                    position: arg::<[f32; 2]>(args, 1),
                    weight: arg::<f64>(args, 2),
                    disabled: false,
                };
                obj.points.insert(arg::<i64>(args, 0), point);
            }
            "get_point_position" => {
                let position = obj.points.get(&arg::<i64>(args, 0)).map(|p| p.position).unwrap_or_default();
                ret(r, position);
            }
            "set_point_position" => {
                if let Some(p) = obj.points.get_mut(&arg::<i64>(args, 0)) {
                    p.position = arg::<[f32; 2]>(args, 1);
                }
            }
            "get_point_weight_scale" => {
                let weight = obj.points.get(&arg::<i64>(args, 0)).map(|p| p.weight).unwrap_or(0.0);
                ret(r, weight);
            }
            "set_point_weight_scale" => {
                if let Some(p) = obj.points.get_mut(&arg::<i64>(args, 0)) {
                    p.weight = arg::<f64>(args, 1);
                }
            }
            "remove_point" => {
                let id = arg::<i64>(args, 0);
                obj.points.remove(&id);
                obj.point_links.retain(|&(a, b)| a != id && b != id);
            }
            "has_point" => ret(r, obj.points.contains_key(&arg::<i64>(args, 0))),
            "set_point_disabled" => {
                if let Some(p) = obj.points.get_mut(&arg::<i64>(args, 0)) {
                    p.disabled = arg_bool(args, 1);
                }
            }
            "is_point_disabled" => {
                let disabled = obj.points.get(&arg::<i64>(args, 0)).is_some_and(|p| p.disabled);
                ret(r, disabled);
            }
            "connect_points" => {
                let (a, b) = (arg::<i64>(args, 0), arg::<i64>(args, 1));
                if obj.points.contains_key(&a) && obj.points.contains_key(&b) {
                    obj.point_links.insert(link(a, b));
                }
            }
            "disconnect_points" => {
                let (a, b) = (arg::<i64>(args, 0), arg::<i64>(args, 1));
                obj.point_links.remove(&link(a, b));
            }
            "are_points_connected" => {
                let (a, b) = (arg::<i64>(args, 0), arg::<i64>(args, 1));
                ret(r, obj.point_links.contains(&link(a, b)));
            }
            "get_point_count" => ret(r, obj.points.len() as i64),
            "clear" => {
                obj.points.clear();
                obj.point_links.clear();
            }
            "get_closest_point" => {
                let [x, y] = arg::<[f32; 2]>(args, 0);
                let include_disabled = arg_bool(args, 1);
                let closest = obj
                    .points
                    .iter()
                    .filter(|(_, p)| include_disabled || !p.disabled)
                    .map(|(&id, p)| {
                        let (dx, dy) = (p.position[0] - x, p.position[1] - y);
                        (id, dx * dx + dy * dy)
                    })
                    .min_by(|a, b| a.1.total_cmp(&b.1))
                    .map(|(id, _)| id)
                    .unwrap_or(-1);
                ret(r, closest);
            }
            _ => return false,
        }
        true
    }

    unsafe fn engine_method(&mut self, addr: usize, method: &str, args: Args, r: Ret) -> bool {
        match method {
            "set_physics_ticks_per_second" => self.obj(addr).set("physics_ticks", Value::Int(arg::<i64>(args, 0))),
            "get_physics_ticks_per_second" => ret(r, self.obj(addr).int("physics_ticks", 60)),
            "set_max_fps" => self.obj(addr).set("max_fps", Value::Int(arg::<i64>(args, 0))),
            "get_max_fps" => ret(r, self.obj(addr).int("max_fps", 0)),
            "set_time_scale" => self.obj(addr).set("time_scale", Value::Float(arg::<f64>(args, 0))),
            "get_time_scale" => ret(r, self.obj(addr).float("time_scale", 1.0)),
            "get_frames_drawn" | "get_process_frames" => ret(r, 0i64),
            "get_frames_per_second" => ret(r, 0.0f64),
            "is_editor_hint" => ret(r, false),
            "has_singleton" => {
                let name = arg_string(args, 0);
                ret(r, matches!(name.as_str(), "Engine" | "TextServerManager"));
            }
            "get_singleton" => {
                let name = arg_string(args, 0);
                let singleton = match name.as_str() {
                    "Engine" | "TextServerManager" => self.singleton(&name),
                    _ => 0,
                };
                ret_object(r, singleton);
            }
            _ => return false,
        }
        true
    }

    unsafe fn text_server_manager_method(&mut self, method: &str, r: Ret) -> bool {
        match method {
            "get_interface_count" => ret(r, 0i64),
            "get_interface" | "find_interface" | "get_primary_interface" => ret_object(r, 0),
            _ => return false,
        }
        true
    }

    unsafe fn file_access_static(&mut self, method: &str, args: Args, r: Ret) {
        match method {
            "file_exists" => {
                let _path = arg_string(args, 0);
                ret(r, false);
            }
            "open" | "open_compressed" => {
                self.last_open_error = ERR_FILE_NOT_FOUND;
                ret_object(r, 0);
            }
            "get_open_error" => ret(r, self.last_open_error),
            _ => self.error(format!("mock engine does not implement FileAccess::{method}")),
        }
    }
}

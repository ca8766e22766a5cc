/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Methods and signals that user classes register with the class database.

mod mock;

use std::cell::Cell;
use std::rc::Rc;

use gdwire::prelude::*;
use gdwire::sys;
use gdwire::sys::VariantType;

struct RegisteredApiTests;

#[gdextension]
unsafe impl ExtensionLibrary for RegisteredApiTests {}

fn start() {
    mock::start(gdext_rust_init);
}

#[derive(GodotClass)]
#[class(base = Node, init)]
struct Inventory {
    #[init(val = 2)]
    capacity: i32,
    items: Vec<String>,
    base: Base<Node>,
}

#[godot_api]
impl Inventory {
    #[func]
    fn add_item(&mut self, name: GString) -> bool {
        if self.items.len() >= self.capacity() {
            return false;
        }
        self.items.push(String::from(&name));
        true
    }

    #[func]
    fn item_count(&self) -> i32 {
        self.items.len() as i32
    }

    #[func]
    fn first_item(&self) -> GString {
        self.items.first().map(String::as_str).unwrap_or_default().into()
    }

    #[func(rename = slot_position)]
    fn position_of(&self, slot: u8) -> Vector2 {
        Vector2::new(slot as f32 * 2.0, 1.0)
    }

    #[func]
    fn capacity_for(level: i64) -> i64 {
        level * 5
    }

    #[func]
    fn clear(&mut self) {
        self.items.clear();
    }

    #[func]
    fn explode(&self) {
        panic!("inventory exploded");
    }

    #[signal]
    fn item_added(name: GString, count: i32);

    #[signal]
    fn emptied();

    fn capacity(&self) -> usize {
        self.capacity as usize
    }
}

fn arg<T>(value: &T) -> sys::GDExtensionConstTypePtr {
    value as *const T as sys::GDExtensionConstTypePtr
}

fn param(name: &str, variant_type: VariantType, metadata: u32) -> mock::ParamDesc {
    mock::ParamDesc {
        name: name.to_string(),
        variant_type: variant_type.sys(),
        metadata,
    }
}

#[test]
fn funcs_register_their_signatures() {
    start();

    let add_item = mock::method_desc("Inventory", "add_item").expect("add_item is registered");
    assert_eq!(add_item.flags, sys::GDEXTENSION_METHOD_FLAG_NORMAL);
    assert_eq!(add_item.args, vec![param("name", VariantType::STRING, 0)]);
    assert_eq!(add_item.ret, Some(param("", VariantType::BOOL, 0)));

    let item_count = mock::method_desc("Inventory", "item_count").expect("item_count is registered");
    assert_eq!(
        item_count.flags,
        sys::GDEXTENSION_METHOD_FLAG_NORMAL | sys::GDEXTENSION_METHOD_FLAG_CONST
    );
    assert!(item_count.args.is_empty());
    assert_eq!(
        item_count.ret,
        Some(param("", VariantType::INT, sys::GDEXTENSION_METHOD_ARGUMENT_METADATA_INT_IS_INT32))
    );

    let capacity_for = mock::method_desc("Inventory", "capacity_for").expect("capacity_for is registered");
    assert_eq!(
        capacity_for.flags,
        sys::GDEXTENSION_METHOD_FLAG_NORMAL | sys::GDEXTENSION_METHOD_FLAG_STATIC
    );

    let clear = mock::method_desc("Inventory", "clear").expect("clear is registered");
    assert_eq!(clear.ret, None);

    // Renamed, and plain Rust methods stay unregistered.
    assert!(mock::method_desc("Inventory", "position_of").is_none());
    let slot_position = mock::method_desc("Inventory", "slot_position").expect("registered under its new name");
    assert_eq!(
        slot_position.args,
        vec![param("slot", VariantType::INT, sys::GDEXTENSION_METHOD_ARGUMENT_METADATA_INT_IS_UINT8)]
    );
    assert!(mock::method_desc("Inventory", "capacity").is_none());
}

#[test]
fn ptrcall_reaches_the_instance() {
    start();

    let inventory = Inventory::new_alloc();
    let id = inventory.instance_id().to_u64();

    let mut added = false;
    for name in ["sword", "shield", "lamp"] {
        let name = GString::from(name);
        let called = unsafe {
            mock::call_method(id, "add_item", &[name.sys()], &mut added as *mut bool as sys::GDExtensionTypePtr)
        };
        assert!(called);
    }
    assert!(!added, "capacity is exceeded by the third item");
    assert_eq!(inventory.bind().items, ["sword", "shield"]);

    let mut count = 0i64;
    unsafe { mock::call_method(id, "item_count", &[], &mut count as *mut i64 as sys::GDExtensionTypePtr) };
    assert_eq!(count, 2);

    let mut first = GString::new();
    unsafe { mock::call_method(id, "first_item", &[], first.sys_mut()) };
    assert_eq!(first, "sword");

    let slot = 3i64;
    let mut position = Vector2::ZERO;
    unsafe {
        mock::call_method(
            id,
            "slot_position",
            &[arg(&slot)],
            &mut position as *mut Vector2 as sys::GDExtensionTypePtr,
        )
    };
    assert_eq!(position, Vector2::new(6.0, 1.0));

    unsafe { mock::call_method(id, "clear", &[], std::ptr::null_mut()) };
    assert!(inventory.bind().items.is_empty());

    inventory.free();
}

#[test]
fn static_func_needs_no_instance() {
    start();

    let level = 4i64;
    let mut capacity = 0i64;
    let called = unsafe {
        mock::call_static_method(
            "Inventory",
            "capacity_for",
            &[arg(&level)],
            &mut capacity as *mut i64 as sys::GDExtensionTypePtr,
        )
    };
    assert!(called);
    assert_eq!(capacity, 20);

    // Instance methods are not callable this way.
    assert!(!unsafe { mock::call_static_method("Inventory", "item_count", &[], std::ptr::null_mut()) });
}

#[test]
fn const_func_runs_during_shared_bind() {
    start();

    let inventory = Inventory::new_alloc();
    let id = inventory.instance_id().to_u64();

    let guard = inventory.bind();
    let mut count = -1i64;
    unsafe { mock::call_method(id, "item_count", &[], &mut count as *mut i64 as sys::GDExtensionTypePtr) };
    assert_eq!(count, 0);

    // A mutating func panics on the double bind; the panic is reported, not propagated.
    let name = GString::from("potion");
    let mut added = true;
    unsafe { mock::call_method(id, "add_item", &[name.sys()], &mut added as *mut bool as sys::GDExtensionTypePtr) };
    assert!(mock::has_message("Inventory::add_item"));
    assert!(mock::has_message("already bound"));
    drop(guard);

    assert!(inventory.bind().items.is_empty());
    inventory.free();
}

#[test]
fn panicking_func_is_reported() {
    start();

    let inventory = Inventory::new_alloc();
    let id = inventory.instance_id().to_u64();

    assert!(unsafe { mock::call_method(id, "explode", &[], std::ptr::null_mut()) });
    assert!(mock::has_message("inventory exploded"));
    assert!(mock::has_message("Context: Inventory::explode"));

    // The instance is still usable.
    let mut count = -1i64;
    unsafe { mock::call_method(id, "item_count", &[], &mut count as *mut i64 as sys::GDExtensionTypePtr) };
    assert_eq!(count, 0);

    inventory.free();
}

#[test]
fn variant_calls_are_rejected() {
    start();

    let inventory = Inventory::new_alloc();
    let id = inventory.instance_id().to_u64();

    let error = mock::varcall_method(id, "item_count");
    assert_eq!(error.error, sys::GDEXTENSION_CALL_ERROR_INVALID_METHOD);
    assert!(mock::has_message("Inventory::item_count: method can only be called with typed arguments"));

    inventory.free();
}

#[test]
fn signals_are_declared_with_parameters() {
    start();

    let params = mock::signal_params("Inventory", "item_added").expect("item_added is registered");
    assert_eq!(
        params,
        vec![
            param("name", VariantType::STRING, 0),
            param("count", VariantType::INT, 0),
        ]
    );
    assert_eq!(mock::signal_params("Inventory", "emptied"), Some(vec![]));
    assert_eq!(mock::signal_params("Inventory", "ready"), None);
}

#[test]
fn declared_signal_accepts_connections() {
    start();

    let inventory = Inventory::new_alloc();
    let id = inventory.instance_id().to_u64();
    let mut node = inventory.clone().upcast::<Node>();

    let count = Rc::new(Cell::new(0));
    let handler_count = count.clone();
    let callable = Callable::from_fn("on_emptied", move || handler_count.set(handler_count.get() + 1));

    assert!(node.has_signal("emptied"));
    assert_eq!(node.connect("emptied", &callable, 0), Error::OK);
    assert_eq!(mock::emit_signal(id, "emptied"), vec![sys::GDEXTENSION_CALL_OK]);
    assert_eq!(count.get(), 1);

    // Declared on Inventory only.
    let mut plain = Node::new_alloc();
    assert!(!plain.has_signal("emptied"));
    assert_eq!(plain.connect("emptied", &callable, 0), Error::ERR_INVALID_PARAMETER);

    plain.free();
    inventory.free();
}

/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! User classes: registration, engine-side construction, virtual dispatch and instance lifetime.

mod mock;

use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

use gdwire::classes::{InputEvent, TextServer};
use gdwire::init::registered_classes;
use gdwire::prelude::*;
use gdwire::sys;

struct UserClassTests;

#[gdextension]
unsafe impl ExtensionLibrary for UserClassTests {}

fn start() {
    mock::start(gdext_rust_init);
}

#[derive(GodotClass)]
#[class(base = Node, init)]
struct Player {
    #[init(val = 3)]
    lives: i32,
    speed: f64,
    ready_calls: u32,
    travelled: f64,
    base: Base<Node>,
}

#[godot_api]
impl INode for Player {
    fn ready(&mut self) {
        self.ready_calls += 1;
        self.base.set_name("Player");
    }

    fn process(&mut self, delta: f64) {
        self.travelled += self.speed * delta;
    }
}

#[derive(GodotClass)]
#[class(base = AStar2D, init)]
struct GridAStar {
    #[init(val = 2.0)]
    step_cost: f64,
    base: Base<AStar2D>,
}

#[godot_api]
impl IAStar2D for GridAStar {
    fn estimate_cost(&self, from_id: i64, to_id: i64) -> f64 {
        (to_id - from_id).abs() as f64 * self.step_cost
    }
}

#[derive(GodotClass)]
#[class(base = Timer)]
struct Countdown {
    started_with: f64,
    base: Base<Timer>,
}

#[godot_api]
impl ITimer for Countdown {
    fn init(mut base: Base<Timer>) -> Self {
        base.set_wait_time(10.0);
        base.set_one_shot(true);
        Self {
            started_with: 10.0,
            base,
        }
    }
}

/// Neither `#[class(init)]` nor an `init()` override: only Rust can construct it.
#[derive(GodotClass)]
#[class(base = Node)]
struct Spawned {
    label: String,
    dropped: Option<Rc<Cell<bool>>>,
    base: Base<Node>,
}

impl Drop for Spawned {
    fn drop(&mut self) {
        if let Some(flag) = &self.dropped {
            flag.set(true);
        }
    }
}

#[derive(GodotClass)]
#[class(base = RefCounted)]
struct Tracked {
    dropped: Rc<Cell<bool>>,
    base: Base<RefCounted>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.dropped.set(true);
    }
}

#[derive(GodotClass)]
#[class(base = Node, init)]
struct Faulty {
    base: Base<Node>,
}

#[godot_api]
impl INode for Faulty {
    fn enter_tree(&mut self) {
        panic!("Faulty refuses to enter the tree");
    }
}

/// Records the reference count of each event while handling it.
#[derive(GodotClass)]
#[class(base = Node, init)]
struct InputRecorder {
    seen: Vec<(i32, i32)>,
    base: Base<Node>,
}

#[godot_api]
impl INode for InputRecorder {
    fn input(&mut self, event: Option<Gd<InputEvent>>) {
        let event = event.expect("engine passes an event");
        self.seen.push((event.get_device(), event.get_reference_count()));
    }
}

/// Base class of the `Servers` level, below the library's minimum level.
#[derive(GodotClass)]
#[class(base = TextServer)]
struct ServerBacked {
    base: Base<TextServer>,
}

/// Tries to free its own object from within a virtual call.
#[derive(GodotClass)]
#[class(base = Node, init)]
struct SelfFreeing {
    base: Base<Node>,
}

#[godot_api]
impl INode for SelfFreeing {
    fn ready(&mut self) {
        self.base.to_gd().free();
    }
}

fn id_of(id: u64) -> InstanceId {
    InstanceId::try_from_u64(id).expect("engine returned a non-zero ID")
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Registration

#[test]
fn classes_register_at_base_level() {
    start();

    let names: Vec<String> = registered_classes(InitLevel::Scene)
        .iter()
        .map(|name| name.to_string())
        .collect();
    for class in ["Countdown", "Faulty", "GridAStar", "InputRecorder", "Player", "SelfFreeing", "Spawned", "Tracked"] {
        assert!(names.iter().any(|name| name == class), "{class} missing in {names:?}");
    }

    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted, "registration order is by name");

    assert!(registered_classes(InitLevel::Servers).is_empty());
    assert_eq!(mock::parent_of_class("GridAStar").as_deref(), Some("AStar2D"));
    assert_eq!(Player::INIT_LEVEL, InitLevel::Scene);
}

#[test]
fn classes_below_min_level_register_at_min_level() {
    start();

    assert_eq!(ServerBacked::INIT_LEVEL, InitLevel::Servers);
    assert!(UserClassTests::min_level() > InitLevel::Servers);

    let scene: Vec<String> = registered_classes(InitLevel::Scene)
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert!(scene.iter().any(|name| name == "ServerBacked"), "{scene:?}");
    assert!(registered_classes(InitLevel::Servers).is_empty());

    assert!(mock::is_class_registered("ServerBacked"));
    assert_eq!(mock::parent_of_class("ServerBacked").as_deref(), Some("TextServer"));
    assert!(mock::is_class_abstract("ServerBacked"));
}

#[test]
fn constructibility_follows_init() {
    start();

    assert!(!mock::is_class_abstract("Player"));
    assert!(!mock::is_class_abstract("Countdown"));
    assert!(mock::is_class_abstract("Spawned"));
    assert!(mock::construct("Spawned").is_none());
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Virtual dispatch

#[test]
fn only_overridden_virtuals_are_exposed() {
    start();

    assert!(mock::has_virtual("Player", "_ready"));
    assert!(mock::has_virtual("Player", "_process"));
    assert!(!mock::has_virtual("Player", "_physics_process"));
    assert!(!mock::has_virtual("Player", "_exit_tree"));

    // Lookup is by engine name; Rust names do not match.
    assert!(!mock::has_virtual("Player", "ready"));
    assert!(!mock::has_virtual("Player", "_no_such_virtual"));

    assert!(Node::VIRTUAL_METHODS.contains(&"_ready"));
    assert!(AStar2D::VIRTUAL_METHODS.contains(&"_estimate_cost"));
}

#[test]
fn engine_constructs_and_calls_virtuals() {
    start();

    let id = mock::construct("Player").expect("Player is instantiable");
    assert_eq!(mock::class_of(id).as_deref(), Some("Player"));
    assert!(mock::has_instance(id));

    let player = Gd::<Player>::from_instance_id(id_of(id));
    assert_eq!(player.bind().lives, 3);
    assert_eq!(player.bind().ready_calls, 0);

    let called = unsafe { mock::call_virtual(id, "_ready", &[], std::ptr::null_mut()) };
    assert!(called);
    assert_eq!(player.bind().ready_calls, 1);
    assert_eq!(player.get_name(), "Player");

    let delta = 0.5f64;
    let args = [&delta as *const f64 as sys::GDExtensionConstTypePtr];
    {
        let mut player = player.clone();
        player.bind_mut().speed = 4.0;
    }
    let called = unsafe { mock::call_virtual(id, "_process", &args, std::ptr::null_mut()) };
    assert!(called);
    assert_eq!(player.bind().travelled, 2.0);

    let called = unsafe { mock::call_virtual(id, "_physics_process", &args, std::ptr::null_mut()) };
    assert!(!called);

    player.free();
    assert!(!mock::is_alive(id));
}

#[test]
fn const_virtual_with_return_value() {
    start();

    let mut astar = GridAStar::new_gd();
    astar.add_point(1, Vector2::ZERO, 1.0);
    assert_eq!(astar.get_point_count(), 1);

    let id = astar.instance_id().to_u64();
    let (from, to) = (1i64, 4i64);
    let args = [
        &from as *const i64 as sys::GDExtensionConstTypePtr,
        &to as *const i64 as sys::GDExtensionConstTypePtr,
    ];
    let mut cost = 0.0f64;

    let called = unsafe { mock::call_virtual(id, "_estimate_cost", &args, &mut cost as *mut f64 as sys::GDExtensionTypePtr) };
    assert!(called);
    assert_eq!(cost, 6.0);

    // A shared bind does not block const virtuals.
    let guard = astar.bind();
    let called = unsafe { mock::call_virtual(id, "_estimate_cost", &args, &mut cost as *mut f64 as sys::GDExtensionTypePtr) };
    assert!(called);
    assert_eq!(guard.step_cost, 2.0);
    drop(guard);

    assert!(!mock::has_virtual("GridAStar", "_compute_cost"));
}

#[test]
fn object_argument_of_virtual_is_balanced() {
    start();

    let recorder = InputRecorder::new_alloc();
    let recorder_id = recorder.instance_id().to_u64();

    // The test's handle stands in for the reference the engine holds while dispatching.
    let event_id = mock::construct("InputEvent").expect("InputEvent is instantiable in the engine");
    let mut event = Gd::<InputEvent>::from_instance_id(id_of(event_id));
    event.set_device(3);
    let before = mock::refcount(event_id).expect("event is alive");
    assert_eq!(before, 1);

    // Reference-counted arguments arrive as `Ref<T>*`.
    let event_ptr = event.advanced().object_ptr();
    let args = [&event_ptr as *const sys::GDExtensionObjectPtr as sys::GDExtensionConstTypePtr];
    let called = unsafe { mock::call_virtual(recorder_id, "_input", &args, std::ptr::null_mut()) };
    assert!(called);

    assert_eq!(recorder.bind().seen, [(3, 2)], "one extra reference during the call");
    assert_eq!(mock::refcount(event_id), Some(before), "released after the call");

    drop(event);
    assert!(!mock::is_alive(event_id));
    recorder.free();
}

#[test]
fn panicking_virtual_is_reported() {
    start();

    let faulty = Faulty::new_alloc();
    let id = faulty.instance_id().to_u64();

    let called = unsafe { mock::call_virtual(id, "_enter_tree", &[], std::ptr::null_mut()) };
    assert!(called);
    assert!(mock::has_message("Faulty refuses to enter the tree"), "{:?}", mock::messages());

    // The instance stays usable.
    assert!(faulty.is_instance_valid());
    faulty.free();
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Construction and lifetime

#[test]
fn init_override_sets_up_base() {
    start();

    let countdown = Countdown::new_alloc();
    assert_eq!(countdown.bind().started_with, 10.0);
    assert_eq!(countdown.get_wait_time(), 10.0);
    assert!(countdown.is_one_shot());
    assert_eq!(countdown.get_class(), "Countdown");

    countdown.free();
}

#[test]
fn rust_side_construction_of_abstract_class() {
    start();

    let dropped = Rc::new(Cell::new(false));
    let spawned = Gd::<Spawned>::from_init_fn(|base| Spawned {
        label: "made in Rust".to_string(),
        dropped: Some(dropped.clone()),
        base,
    });

    assert_eq!(spawned.bind().label, "made in Rust");
    assert!(spawned.is_class("Node"));

    let id = spawned.instance_id();
    spawned.free();
    assert!(dropped.get(), "freeing the object drops the Rust instance");
    assert!(!mock::is_alive(id.to_u64()));
}

#[test]
fn ref_counted_instance_dropped_with_last_handle() {
    start();

    let dropped = Rc::new(Cell::new(false));
    let tracked = Gd::<Tracked>::from_init_fn(|base| Tracked {
        dropped: dropped.clone(),
        base,
    });
    assert_eq!(tracked.get_reference_count(), 1);

    let copy = tracked.clone();
    drop(tracked);
    assert!(!dropped.get());

    let upcast: Gd<RefCounted> = copy.upcast();
    assert_eq!(upcast.get_reference_count(), 1);
    let copy = upcast.cast::<Tracked>();

    drop(copy);
    assert!(dropped.get());
}

#[test]
fn engine_destroy_frees_instance() {
    start();

    let dropped = Rc::new(Cell::new(false));
    let spawned = Gd::<Spawned>::from_init_fn(|base| Spawned {
        label: String::new(),
        dropped: Some(dropped.clone()),
        base,
    });
    let id = spawned.instance_id();

    mock::destroy(id.to_u64());
    assert!(dropped.get());
    assert!(!spawned.is_instance_valid());
    assert!(Gd::<Spawned>::try_from_instance_id(id).is_err());
}

#[test]
#[should_panic(expected = "already bound")]
fn double_mutable_bind_panics() {
    start();

    let mut player = Player::new_alloc();
    let mut alias = player.clone();

    let _guard = player.bind_mut();
    let _second = alias.bind_mut();
}

#[test]
fn base_to_gd_is_a_strong_handle() {
    start();

    let mut astar = GridAStar::new_gd();
    let base = astar.bind().base.to_gd();
    assert_eq!(astar.get_reference_count(), 2);

    let mut base = base;
    base.add_point(7, Vector2::new(1.0, 2.0), 1.0);
    drop(base);

    assert_eq!(astar.get_reference_count(), 1);
    assert!(astar.has_point(7));
    astar.clear();
}

#[test]
fn free_while_bound_panics() {
    start();

    let dropped = Rc::new(Cell::new(false));
    let spawned = Gd::<Spawned>::from_init_fn(|base| Spawned {
        label: "bound".to_string(),
        dropped: Some(dropped.clone()),
        base,
    });
    let alias = spawned.clone();

    let guard = spawned.bind();
    let result = catch_unwind(AssertUnwindSafe(move || alias.free()));
    assert!(result.is_err());

    // Object and instance are untouched.
    assert_eq!(guard.label, "bound");
    assert!(!dropped.get());
    drop(guard);

    spawned.free();
    assert!(dropped.get());
}

#[test]
fn free_from_own_virtual_is_rejected() {
    start();

    let id = mock::construct("SelfFreeing").expect("SelfFreeing is instantiable");

    let called = unsafe { mock::call_virtual(id, "_ready", &[], std::ptr::null_mut()) };
    assert!(called);
    assert!(mock::is_alive(id));
    assert!(mock::has_message("while its Rust instance is bound"), "{:?}", mock::messages());

    Gd::<SelfFreeing>::from_instance_id(id_of(id)).free();
    assert!(!mock::is_alive(id));
}

#[test]
fn engine_destroy_while_bound_leaks_instance() {
    start();

    let dropped = Rc::new(Cell::new(false));
    let spawned = Gd::<Spawned>::from_init_fn(|base| Spawned {
        label: "leaked".to_string(),
        dropped: Some(dropped.clone()),
        base,
    });
    let id = spawned.instance_id().to_u64();

    let guard = spawned.bind();
    mock::destroy(id);
    assert!(!mock::is_alive(id));
    assert!(mock::has_message("destroyed while its Rust instance is bound"), "{:?}", mock::messages());

    // The guard still refers to a live instance.
    assert_eq!(guard.label, "leaked");
    drop(guard);
    assert!(!dropped.get());
}

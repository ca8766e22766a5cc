# ! [doc = "Sidecar module for class [`Timer`][crate::classes::Timer].\n\nDefines related flag and enum types, and the low-level [`Advanced`] API with wire-level signatures."] use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Timer`.\n\nA countdown timer.\n\nInherits [`Node`][crate::classes::Node].\n\nRelated symbols:\n\n* [`timer`][crate::classes::timer]: sidecar module with enums and the low-level `Advanced` API\n* [`ITimer`][crate::classes::ITimer]: virtual methods\n"] # [derive (Debug)] # [repr (C)] pub struct Timer { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } # [doc = "Virtual methods for class [`Timer`][crate::classes::Timer].\n\nThese methods represent constructors (`init`) or callbacks invoked by the engine. Only methods that an implementation overrides are reported to the engine; for all others, the engine's default behavior applies."] # [allow (unused_variables)] pub trait ITimer : crate :: obj :: GodotClass + crate :: private :: You_forgot_the_attribute__godot_api { # [doc = r" Constructor of the user struct, invoked by the engine whenever an instance is created."] # [doc = r""] # [doc = r" Overriding it is an alternative to `#[class(init)]`."] fn init (base : crate :: obj :: Base < Self :: Base >) -> Self where Self : Sized , { unimplemented ! () } # [doc = " Called during the processing step of the main loop."] # [doc = ""] # [doc = " Engine virtual `_process`, declared by `Node`."] fn process (& mut self , delta : f64) { unimplemented ! () } # [doc = " Engine virtual `_physics_process`, declared by `Node`."] fn physics_process (& mut self , delta : f64) { unimplemented ! () } # [doc = " Engine virtual `_enter_tree`, declared by `Node`."] fn enter_tree (& mut self ,) { unimplemented ! () } # [doc = " Engine virtual `_exit_tree`, declared by `Node`."] fn exit_tree (& mut self ,) { unimplemented ! () } # [doc = " Called when the node is \"ready\", i.e. when both the node and its children have entered the scene tree."] # [doc = ""] # [doc = " Engine virtual `_ready`, declared by `Node`."] fn ready (& mut self ,) { unimplemented ! () } # [doc = " Called when there is an input event. The input event propagates up through the node tree until a node consumes it."] # [doc = ""] # [doc = " Engine virtual `_input`, declared by `Node`."] fn input (& mut self , event : Option < crate :: obj :: Gd < crate :: classes :: InputEvent >>) { unimplemented ! () } # [doc = r" Trampoline for the engine virtual `name`, if `Self` overrides it."] # [doc (hidden)] fn __godot_virtual_call (name : & str) -> sys :: GDExtensionClassCallVirtual where Self : Sized + crate :: private :: ImplementsVirtuals , { let overridden = < Self as crate :: private :: ImplementsVirtuals > :: OVERRIDDEN ; match name { "_process" if overridden . contains (& "process") => Some (super :: virtuals :: process :: < Self >) , "_physics_process" if overridden . contains (& "physics_process") => Some (super :: virtuals :: physics_process :: < Self >) , "_enter_tree" if overridden . contains (& "enter_tree") => Some (super :: virtuals :: enter_tree :: < Self >) , "_exit_tree" if overridden . contains (& "exit_tree") => Some (super :: virtuals :: exit_tree :: < Self >) , "_ready" if overridden . contains (& "ready") => Some (super :: virtuals :: ready :: < Self >) , "_input" if overridden . contains (& "input") => Some (super :: virtuals :: input :: < Self >) , _ => None , } } } impl Timer { pub fn set_wait_time (& mut self , time_sec : f64) { self . advanced () . set_wait_time (time_sec) ; } pub fn get_wait_time (& self ,) -> f64 { self . advanced () . get_wait_time () } pub fn set_one_shot (& mut self , enable : bool) { self . advanced () . set_one_shot (enable) ; } pub fn is_one_shot (& self ,) -> bool { self . advanced () . is_one_shot () } pub fn set_autostart (& mut self , enable : bool) { self . advanced () . set_autostart (enable) ; } pub fn has_autostart (& self ,) -> bool { self . advanced () . has_autostart () } # [doc = " Starts the timer. Sets `wait_time` to `time_sec` if `time_sec > 0`."] # [doc = ""] # [doc = " Default values in Godot:"] # [doc = " * `time_sec`: `-1`"] pub fn start (& mut self , time_sec : f64) { self . advanced () . start (time_sec) ; } pub fn stop (& mut self ,) { self . advanced () . stop () ; } pub fn set_paused (& mut self , paused : bool) { self . advanced () . set_paused (paused) ; } pub fn is_paused (& self ,) -> bool { self . advanced () . is_paused () } pub fn is_stopped (& self ,) -> bool { self . advanced () . is_stopped () } pub fn get_time_left (& self ,) -> f64 { self . advanced () . get_time_left () } pub fn set_timer_process_callback (& mut self , callback : crate :: classes :: timer :: TimerProcessCallback) { self . advanced () . set_timer_process_callback (crate :: obj :: EngineEnum :: ord (callback) as i64) ; } pub fn get_timer_process_callback (& self ,) -> crate :: classes :: timer :: TimerProcessCallback { let ret = self . advanced () . get_timer_process_callback () ; < crate :: classes :: timer :: TimerProcessCallback as crate :: obj :: EngineEnum > :: from_ord (ret as i32) } # [doc = " Signals declared by `Timer` itself (not inherited ones):"] # [doc = ""] # [doc = " * `timeout()`"] pub const SIGNALS : & 'static [& 'static str] = & ["timeout"] ; # [doc = "Connects `handler` to signal `timeout`; it runs each time the signal is emitted."] pub fn connect_timeout (& mut self , handler : impl FnMut () + 'static) -> crate :: global :: Error { let callable = crate :: builtin :: Callable :: from_fn ("timeout" , handler) ; self . connect ("timeout" , & callable , 0) } # [doc = r" Engine names of all virtual methods that a user class extending this one can override."] pub const VIRTUAL_METHODS : & 'static [& 'static str] = & ["_process" , "_physics_process" , "_enter_tree" , "_exit_tree" , "_ready" , "_input"] ; # [doc = r" Low-level API with wire-level signatures."] pub fn advanced (& self) -> Advanced < '_ > { Advanced :: from_instance (self) } } impl crate :: obj :: GodotClass for Timer { type Base = crate :: classes :: Node ; fn class_name () -> crate :: meta :: ClassName { crate :: meta :: ClassName :: new_static ("Timer") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for Timer { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; type Declarer = crate :: obj :: bounds :: DeclEngine ; } impl crate :: obj :: EngineClass for Timer { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } fn cached_instance_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: Inherits < crate :: classes :: Node > for Timer { } impl crate :: obj :: Inherits < crate :: classes :: Object > for Timer { } impl std :: ops :: Deref for Timer { type Target = crate :: classes :: Node ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Timer { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } impl crate :: obj :: cap :: GodotDefault for Timer { } # [macro_export] # [doc (hidden)] # [allow (non_snake_case)] macro_rules ! inherits_transitive_Timer { ($ Class : ident) => { impl $ crate :: obj :: Inherits < $ crate :: classes :: Timer > for $ Class { } impl $ crate :: obj :: Inherits < $ crate :: classes :: Node > for $ Class { } impl $ crate :: obj :: Inherits < $ crate :: classes :: Object > for $ Class { } } } } # [doc = "Godot enum `TimerProcessCallback`."] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [repr (transparent)] pub struct TimerProcessCallback { ord : i32 } impl TimerProcessCallback { # [doc (alias = "TIMER_PROCESS_PHYSICS")] # [doc = "Godot enumerator name: `TIMER_PROCESS_PHYSICS`"] pub const PHYSICS : Self = Self { ord : 0 } ; # [doc (alias = "TIMER_PROCESS_IDLE")] # [doc = "Godot enumerator name: `TIMER_PROCESS_IDLE`"] pub const IDLE : Self = Self { ord : 1 } ; } impl crate :: obj :: EngineEnum for TimerProcessCallback { fn from_ord (ord : i32) -> Self { Self { ord } } fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "PHYSICS" , 1 => "IDLE" , _ => "" , } } } impl std :: fmt :: Debug for TimerProcessCallback { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = crate :: obj :: EngineEnum :: as_str (self) ; if enumerator . is_empty () { f . debug_struct ("TimerProcessCallback") . field ("ord" , & self . ord) . finish () } else { f . write_str (enumerator) } } } # [doc = "Low-level methods of [`Timer`][crate::classes::Timer], with wire-level signatures.\n\nIntegers are `i64`, floats `f64`, enums their ordinal as `i64`, objects tagged raw pointers. Returned objects carry the ownership tag the caller must honor."] # [derive (Copy , Clone)] pub struct Advanced < 'a > { object_ptr : sys :: GDExtensionObjectPtr , _instance : std :: marker :: PhantomData < & 'a re_export :: Timer > , } impl < 'a > Advanced < 'a > { # [doc = r" Low-level API of `instance`."] # [doc = r""] # [doc = r" # Panics"] # [doc = r" If `instance` tracks its instance ID and the object has been freed."] pub fn from_instance (instance : & 'a re_export :: Timer) -> Self { let object_ptr = crate :: obj :: EngineClass :: __checked_object_ptr (instance) ; Self { object_ptr , _instance : std :: marker :: PhantomData , } } # [doc = r" Low-level API of a raw object."] # [doc = r""] # [doc = r" # Safety"] # [doc = r" `object_ptr` must point to a live object of this class (or a subclass) for `'a`."] pub unsafe fn from_object_ptr (object_ptr : sys :: GDExtensionObjectPtr) -> Self { Self { object_ptr , _instance : std :: marker :: PhantomData , } } pub fn object_ptr (self) -> sys :: GDExtensionObjectPtr { self . object_ptr } # [doc = "Wire-level `set_wait_time`."] pub fn set_wait_time (self , time_sec : f64) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < f64 > (time_sec) ; unsafe { frame . call_void (method_table () . set_wait_time , self . object_ptr) } } # [doc = "Wire-level `get_wait_time`."] pub fn get_wait_time (self ,) -> f64 { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < f64 > (method_table () . get_wait_time , self . object_ptr) } } # [doc = "Wire-level `set_one_shot`."] pub fn set_one_shot (self , enable : bool) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < bool > (enable) ; unsafe { frame . call_void (method_table () . set_one_shot , self . object_ptr) } } # [doc = "Wire-level `is_one_shot`."] pub fn is_one_shot (self ,) -> bool { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < bool > (method_table () . is_one_shot , self . object_ptr) } } # [doc = "Wire-level `set_autostart`."] pub fn set_autostart (self , enable : bool) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < bool > (enable) ; unsafe { frame . call_void (method_table () . set_autostart , self . object_ptr) } } # [doc = "Wire-level `has_autostart`."] pub fn has_autostart (self ,) -> bool { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < bool > (method_table () . has_autostart , self . object_ptr) } } # [doc = "Wire-level `start`."] pub fn start (self , time_sec : f64) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < f64 > (time_sec) ; unsafe { frame . call_void (method_table () . start , self . object_ptr) } } # [doc = "Wire-level `stop`."] pub fn stop (self ,) { let frame = sys :: CallFrame :: new () ; unsafe { frame . call_void (method_table () . stop , self . object_ptr) } } # [doc = "Wire-level `set_paused`."] pub fn set_paused (self , paused : bool) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < bool > (paused) ; unsafe { frame . call_void (method_table () . set_paused , self . object_ptr) } } # [doc = "Wire-level `is_paused`."] pub fn is_paused (self ,) -> bool { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < bool > (method_table () . is_paused , self . object_ptr) } } # [doc = "Wire-level `is_stopped`."] pub fn is_stopped (self ,) -> bool { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < bool > (method_table () . is_stopped , self . object_ptr) } } # [doc = "Wire-level `get_time_left`."] pub fn get_time_left (self ,) -> f64 { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < f64 > (method_table () . get_time_left , self . object_ptr) } } # [doc = "Wire-level `set_timer_process_callback`."] pub fn set_timer_process_callback (self , callback : i64) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < i64 > (callback) ; unsafe { frame . call_void (method_table () . set_timer_process_callback , self . object_ptr) } } # [doc = "Wire-level `get_timer_process_callback`."] pub fn get_timer_process_callback (self ,) -> i64 { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < i64 > (method_table () . get_timer_process_callback , self . object_ptr) } } } struct MethodTable { set_wait_time : sys :: GDExtensionMethodBindPtr , get_wait_time : sys :: GDExtensionMethodBindPtr , set_one_shot : sys :: GDExtensionMethodBindPtr , is_one_shot : sys :: GDExtensionMethodBindPtr , set_autostart : sys :: GDExtensionMethodBindPtr , has_autostart : sys :: GDExtensionMethodBindPtr , start : sys :: GDExtensionMethodBindPtr , stop : sys :: GDExtensionMethodBindPtr , set_paused : sys :: GDExtensionMethodBindPtr , is_paused : sys :: GDExtensionMethodBindPtr , is_stopped : sys :: GDExtensionMethodBindPtr , get_time_left : sys :: GDExtensionMethodBindPtr , set_timer_process_callback : sys :: GDExtensionMethodBindPtr , get_timer_process_callback : sys :: GDExtensionMethodBindPtr , } unsafe impl Sync for MethodTable { } unsafe impl Send for MethodTable { } impl MethodTable { fn load () -> Self { sys :: out ! ("Load method table of {}" , "Timer") ; let class_name = crate :: builtin :: StringName :: from ("Timer") ; Self { set_wait_time : crate :: meta :: load_method_bind (& class_name , "set_wait_time" , 373806689i64) , get_wait_time : crate :: meta :: load_method_bind (& class_name , "get_wait_time" , 1740695150i64) , set_one_shot : crate :: meta :: load_method_bind (& class_name , "set_one_shot" , 2586408642i64) , is_one_shot : crate :: meta :: load_method_bind (& class_name , "is_one_shot" , 36873697i64) , set_autostart : crate :: meta :: load_method_bind (& class_name , "set_autostart" , 2586408642i64) , has_autostart : crate :: meta :: load_method_bind (& class_name , "has_autostart" , 36873697i64) , start : crate :: meta :: load_method_bind (& class_name , "start" , 1958752504i64) , stop : crate :: meta :: load_method_bind (& class_name , "stop" , 3218959716i64) , set_paused : crate :: meta :: load_method_bind (& class_name , "set_paused" , 2586408642i64) , is_paused : crate :: meta :: load_method_bind (& class_name , "is_paused" , 36873697i64) , is_stopped : crate :: meta :: load_method_bind (& class_name , "is_stopped" , 36873697i64) , get_time_left : crate :: meta :: load_method_bind (& class_name , "get_time_left" , 1740695150i64) , set_timer_process_callback : crate :: meta :: load_method_bind (& class_name , "set_timer_process_callback" , 3469495063i64) , get_timer_process_callback : crate :: meta :: load_method_bind (& class_name , "get_timer_process_callback" , 2672570227i64) , } } } fn method_table () -> & 'static MethodTable { static TABLE : std :: sync :: OnceLock < MethodTable > = std :: sync :: OnceLock :: new () ; TABLE . get_or_init (MethodTable :: load) } mod virtuals { use super :: re_export :: ITimer ; use crate :: sys ; pub (super) unsafe extern "C" fn process < T : ITimer > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "ITimer::process" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let arg0 = sys :: callframe :: read_arg :: < f64 > (args , 0usize) ; let mut guard = storage . get_mut () ; let result = < T as ITimer > :: process (& mut * guard , arg0) ; drop (guard) ; let () = result ; } } ,) ; } pub (super) unsafe extern "C" fn physics_process < T : ITimer > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "ITimer::physics_process" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let arg0 = sys :: callframe :: read_arg :: < f64 > (args , 0usize) ; let mut guard = storage . get_mut () ; let result = < T as ITimer > :: physics_process (& mut * guard , arg0) ; drop (guard) ; let () = result ; } } ,) ; } pub (super) unsafe extern "C" fn enter_tree < T : ITimer > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "ITimer::enter_tree" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let mut guard = storage . get_mut () ; let result = < T as ITimer > :: enter_tree (& mut * guard ,) ; drop (guard) ; let () = result ; } } ,) ; } pub (super) unsafe extern "C" fn exit_tree < T : ITimer > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "ITimer::exit_tree" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let mut guard = storage . get_mut () ; let result = < T as ITimer > :: exit_tree (& mut * guard ,) ; drop (guard) ; let () = result ; } } ,) ; } pub (super) unsafe extern "C" fn ready < T : ITimer > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "ITimer::ready" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let mut guard = storage . get_mut () ; let result = < T as ITimer > :: ready (& mut * guard ,) ; drop (guard) ; let () = result ; } } ,) ; } pub (super) unsafe extern "C" fn input < T : ITimer > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "ITimer::input" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let arg0 = crate :: obj :: Gd :: from_tagged (crate :: obj :: virtual_arg_tagged (* args . add (0usize) , true)) ; let mut guard = storage . get_mut () ; let result = < T as ITimer > :: input (& mut * guard , arg0) ; drop (guard) ; let () = result ; } } ,) ; } }
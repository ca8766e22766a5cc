# ! [doc = "Sidecar module for class [`Node`][crate::classes::Node].\n\nDefines related flag and enum types, and the low-level [`Advanced`] API with wire-level signatures."] use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Node`.\n\nBase class for all scene objects.\n\nInherits [`Object`][crate::classes::Object].\n\nRelated symbols:\n\n* [`node`][crate::classes::node]: sidecar module with enums and the low-level `Advanced` API\n* [`INode`][crate::classes::INode]: virtual methods\n\n# Description\n\nNodes are Godot's building blocks. Children are added with `add_child()`; see also `Node.name`.\n"] # [derive (Debug)] # [repr (C)] pub struct Node { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } # [doc = "Virtual methods for class [`Node`][crate::classes::Node].\n\nThese methods represent constructors (`init`) or callbacks invoked by the engine. Only methods that an implementation overrides are reported to the engine; for all others, the engine's default behavior applies."] # [allow (unused_variables)] pub trait INode : crate :: obj :: GodotClass + crate :: private :: You_forgot_the_attribute__godot_api { # [doc = r" Constructor of the user struct, invoked by the engine whenever an instance is created."] # [doc = r""] # [doc = r" Overriding it is an alternative to `#[class(init)]`."] fn init (base : crate :: obj :: Base < Self :: Base >) -> Self where Self : Sized , { unimplemented ! () } # [doc = " Called during the processing step of the main loop."] # [doc = ""] # [doc = " Engine virtual `_process`, declared by `Node`."] fn process (& mut self , delta : f64) { unimplemented ! () } # [doc = " Engine virtual `_physics_process`, declared by `Node`."] fn physics_process (& mut self , delta : f64) { unimplemented ! () } # [doc = " Engine virtual `_enter_tree`, declared by `Node`."] fn enter_tree (& mut self ,) { unimplemented ! () } # [doc = " Engine virtual `_exit_tree`, declared by `Node`."] fn exit_tree (& mut self ,) { unimplemented ! () } # [doc = " Called when the node is \"ready\", i.e. when both the node and its children have entered the scene tree."] # [doc = ""] # [doc = " Engine virtual `_ready`, declared by `Node`."] fn ready (& mut self ,) { unimplemented ! () } # [doc = " Called when there is an input event. The input event propagates up through the node tree until a node consumes it."] # [doc = ""] # [doc = " Engine virtual `_input`, declared by `Node`."] fn input (& mut self , event : Option < crate :: obj :: Gd < crate :: classes :: InputEvent >>) { unimplemented ! () } # [doc = r" Trampoline for the engine virtual `name`, if `Self` overrides it."] # [doc (hidden)] fn __godot_virtual_call (name : & str) -> sys :: GDExtensionClassCallVirtual where Self : Sized + crate :: private :: ImplementsVirtuals , { let overridden = < Self as crate :: private :: ImplementsVirtuals > :: OVERRIDDEN ; match name { "_process" if overridden . contains (& "process") => Some (super :: virtuals :: process :: < Self >) , "_physics_process" if overridden . contains (& "physics_process") => Some (super :: virtuals :: physics_process :: < Self >) , "_enter_tree" if overridden . contains (& "enter_tree") => Some (super :: virtuals :: enter_tree :: < Self >) , "_exit_tree" if overridden . contains (& "exit_tree") => Some (super :: virtuals :: exit_tree :: < Self >) , "_ready" if overridden . contains (& "ready") => Some (super :: virtuals :: ready :: < Self >) , "_input" if overridden . contains (& "input") => Some (super :: virtuals :: input :: < Self >) , _ => None , } } } impl Node { pub const NOTIFICATION_ENTER_TREE : i32 = 10 ; pub const NOTIFICATION_EXIT_TREE : i32 = 11 ; pub const NOTIFICATION_READY : i32 = 13 ; pub const NOTIFICATION_PROCESS : i32 = 17 ; # [doc = " Default values in Godot:"] # [doc = " * `force_readable_name`: `false`"] pub fn add_sibling (& mut self , sibling : crate :: obj :: Gd < impl crate :: obj :: Inherits < crate :: classes :: Node >> , force_readable_name : bool) { self . advanced () . add_sibling (sibling . into_engine_arg () , force_readable_name) ; } pub fn set_name (& mut self , name : & str) { let name = crate :: builtin :: GString :: from (name) ; self . advanced () . set_name (& name) ; } pub fn get_name (& self ,) -> crate :: builtin :: StringName { self . advanced () . get_name () } # [doc = " Adds a child `node`. Nodes can have any number of children."] # [doc = ""] # [doc = " Default values in Godot:"] # [doc = " * `force_readable_name`: `false`"] # [doc = " * `internal`: `0`"] pub fn add_child (& mut self , node : crate :: obj :: Gd < impl crate :: obj :: Inherits < crate :: classes :: Node >> , force_readable_name : bool , internal : crate :: classes :: node :: InternalMode) { self . advanced () . add_child (node . into_engine_arg () , force_readable_name , crate :: obj :: EngineEnum :: ord (internal) as i64) ; } pub fn remove_child (& mut self , node : & crate :: obj :: Gd < impl crate :: obj :: Inherits < crate :: classes :: Node >>) { self . advanced () . remove_child (node . to_borrowed_arg ()) ; } # [doc = " Default values in Godot:"] # [doc = " * `include_internal`: `false`"] pub fn get_child_count (& self , include_internal : bool) -> i32 { let ret = self . advanced () . get_child_count (include_internal) ; ret as i32 } # [doc = " Default values in Godot:"] # [doc = " * `include_internal`: `false`"] pub fn get_child (& self , idx : i32 , include_internal : bool) -> Option < crate :: obj :: Gd < crate :: classes :: Node >> { let ret = self . advanced () . get_child (idx as i64 , include_internal) ; unsafe { crate :: obj :: Gd :: from_tagged (ret) } } pub fn get_parent (& self ,) -> Option < crate :: obj :: Gd < crate :: classes :: Node >> { let ret = self . advanced () . get_parent () ; unsafe { crate :: obj :: Gd :: from_tagged (ret) } } pub fn is_inside_tree (& self ,) -> bool { self . advanced () . is_inside_tree () } pub fn set_process (& mut self , enable : bool) { self . advanced () . set_process (enable) ; } pub fn is_processing (& self ,) -> bool { self . advanced () . is_processing () } pub fn set_process_mode (& mut self , mode : crate :: classes :: node :: ProcessMode) { self . advanced () . set_process_mode (crate :: obj :: EngineEnum :: ord (mode) as i64) ; } pub fn get_process_mode (& self ,) -> crate :: classes :: node :: ProcessMode { let ret = self . advanced () . get_process_mode () ; < crate :: classes :: node :: ProcessMode as crate :: obj :: EngineEnum > :: from_ord (ret as i32) } pub fn queue_free (& mut self ,) { self . advanced () . queue_free () ; } # [doc = " Signals declared by `Node` itself (not inherited ones):"] # [doc = ""] # [doc = " * `ready()`"] # [doc = " * `renamed()`"] # [doc = " * `tree_entered()`"] # [doc = " * `tree_exiting()`"] # [doc = " * `child_entered_tree(node: Node)`"] pub const SIGNALS : & 'static [& 'static str] = & ["ready" , "renamed" , "tree_entered" , "tree_exiting" , "child_entered_tree"] ; # [doc = "Connects `handler` to signal `ready`; it runs each time the signal is emitted."] pub fn connect_ready (& mut self , handler : impl FnMut () + 'static) -> crate :: global :: Error { let callable = crate :: builtin :: Callable :: from_fn ("ready" , handler) ; self . connect ("ready" , & callable , 0) } # [doc = "Connects `handler` to signal `renamed`; it runs each time the signal is emitted."] pub fn connect_renamed (& mut self , handler : impl FnMut () + 'static) -> crate :: global :: Error { let callable = crate :: builtin :: Callable :: from_fn ("renamed" , handler) ; self . connect ("renamed" , & callable , 0) } # [doc = "Connects `handler` to signal `tree_entered`; it runs each time the signal is emitted."] pub fn connect_tree_entered (& mut self , handler : impl FnMut () + 'static) -> crate :: global :: Error { let callable = crate :: builtin :: Callable :: from_fn ("tree_entered" , handler) ; self . connect ("tree_entered" , & callable , 0) } # [doc = "Connects `handler` to signal `tree_exiting`; it runs each time the signal is emitted."] pub fn connect_tree_exiting (& mut self , handler : impl FnMut () + 'static) -> crate :: global :: Error { let callable = crate :: builtin :: Callable :: from_fn ("tree_exiting" , handler) ; self . connect ("tree_exiting" , & callable , 0) } # [doc = r" Engine names of all virtual methods that a user class extending this one can override."] pub const VIRTUAL_METHODS : & 'static [& 'static str] = & ["_process" , "_physics_process" , "_enter_tree" , "_exit_tree" , "_ready" , "_input"] ; # [doc = r" Low-level API with wire-level signatures."] pub fn advanced (& self) -> Advanced < '_ > { Advanced :: from_instance (self) } } impl crate :: obj :: GodotClass for Node { type Base = crate :: classes :: Object ; fn class_name () -> crate :: meta :: ClassName { crate :: meta :: ClassName :: new_static ("Node") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for Node { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; type Declarer = crate :: obj :: bounds :: DeclEngine ; } impl crate :: obj :: EngineClass for Node { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } fn cached_instance_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: Inherits < crate :: classes :: Object > for Node { } impl std :: ops :: Deref for Node { type Target = crate :: classes :: Object ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Node { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } impl crate :: obj :: cap :: GodotDefault for Node { } # [macro_export] # [doc (hidden)] # [allow (non_snake_case)] macro_rules ! inherits_transitive_Node { ($ Class : ident) => { impl $ crate :: obj :: Inherits < $ crate :: classes :: Node > for $ Class { } impl $ crate :: obj :: Inherits < $ crate :: classes :: Object > for $ Class { } } } } # [doc = "Godot enum `ProcessMode`."] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [repr (transparent)] pub struct ProcessMode { ord : i32 } impl ProcessMode { # [doc (alias = "PROCESS_MODE_INHERIT")] # [doc = "Godot enumerator name: `PROCESS_MODE_INHERIT`"] pub const INHERIT : Self = Self { ord : 0 } ; # [doc (alias = "PROCESS_MODE_PAUSABLE")] # [doc = "Godot enumerator name: `PROCESS_MODE_PAUSABLE`"] pub const PAUSABLE : Self = Self { ord : 1 } ; # [doc (alias = "PROCESS_MODE_WHEN_PAUSED")] # [doc = "Godot enumerator name: `PROCESS_MODE_WHEN_PAUSED`"] pub const WHEN_PAUSED : Self = Self { ord : 2 } ; # [doc (alias = "PROCESS_MODE_ALWAYS")] # [doc = "Godot enumerator name: `PROCESS_MODE_ALWAYS`"] pub const ALWAYS : Self = Self { ord : 3 } ; # [doc (alias = "PROCESS_MODE_DISABLED")] # [doc = "Godot enumerator name: `PROCESS_MODE_DISABLED`"] pub const DISABLED : Self = Self { ord : 4 } ; } impl crate :: obj :: EngineEnum for ProcessMode { fn from_ord (ord : i32) -> Self { Self { ord } } fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "INHERIT" , 1 => "PAUSABLE" , 2 => "WHEN_PAUSED" , 3 => "ALWAYS" , 4 => "DISABLED" , _ => "" , } } } impl std :: fmt :: Debug for ProcessMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = crate :: obj :: EngineEnum :: as_str (self) ; if enumerator . is_empty () { f . debug_struct ("ProcessMode") . field ("ord" , & self . ord) . finish () } else { f . write_str (enumerator) } } } # [doc = "Godot enum `InternalMode`."] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [repr (transparent)] pub struct InternalMode { ord : i32 } impl InternalMode { # [doc (alias = "INTERNAL_MODE_DISABLED")] # [doc = "Godot enumerator name: `INTERNAL_MODE_DISABLED`"] pub const DISABLED : Self = Self { ord : 0 } ; # [doc (alias = "INTERNAL_MODE_FRONT")] # [doc = "Godot enumerator name: `INTERNAL_MODE_FRONT`"] pub const FRONT : Self = Self { ord : 1 } ; # [doc (alias = "INTERNAL_MODE_BACK")] # [doc = "Godot enumerator name: `INTERNAL_MODE_BACK`"] pub const BACK : Self = Self { ord : 2 } ; } impl crate :: obj :: EngineEnum for InternalMode { fn from_ord (ord : i32) -> Self { Self { ord } } fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "DISABLED" , 1 => "FRONT" , 2 => "BACK" , _ => "" , } } } impl std :: fmt :: Debug for InternalMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = crate :: obj :: EngineEnum :: as_str (self) ; if enumerator . is_empty () { f . debug_struct ("InternalMode") . field ("ord" , & self . ord) . finish () } else { f . write_str (enumerator) } } } # [doc = "Low-level methods of [`Node`][crate::classes::Node], with wire-level signatures.\n\nIntegers are `i64`, floats `f64`, enums their ordinal as `i64`, objects tagged raw pointers. Returned objects carry the ownership tag the caller must honor."] # [derive (Copy , Clone)] pub struct Advanced < 'a > { object_ptr : sys :: GDExtensionObjectPtr , _instance : std :: marker :: PhantomData < & 'a re_export :: Node > , } impl < 'a > Advanced < 'a > { # [doc = r" Low-level API of `instance`."] # [doc = r""] # [doc = r" # Panics"] # [doc = r" If `instance` tracks its instance ID and the object has been freed."] pub fn from_instance (instance : & 'a re_export :: Node) -> Self { let object_ptr = crate :: obj :: EngineClass :: __checked_object_ptr (instance) ; Self { object_ptr , _instance : std :: marker :: PhantomData , } } # [doc = r" Low-level API of a raw object."] # [doc = r""] # [doc = r" # Safety"] # [doc = r" `object_ptr` must point to a live object of this class (or a subclass) for `'a`."] pub unsafe fn from_object_ptr (object_ptr : sys :: GDExtensionObjectPtr) -> Self { Self { object_ptr , _instance : std :: marker :: PhantomData , } } pub fn object_ptr (self) -> sys :: GDExtensionObjectPtr { self . object_ptr } # [doc = "Wire-level `add_sibling`."] pub fn add_sibling (self , sibling : sys :: Tagged , force_readable_name : bool) { let mut frame = sys :: CallFrame :: new () ; frame . arg (sibling . ptr ()) ; frame . arg :: < bool > (force_readable_name) ; unsafe { frame . call_void (method_table () . add_sibling , self . object_ptr) } } # [doc = "Wire-level `set_name`."] pub fn set_name (self , name : & crate :: builtin :: GString) { let mut frame = sys :: CallFrame :: new () ; unsafe { frame . arg_ptr (name . sys ()) } ; unsafe { frame . call_void (method_table () . set_name , self . object_ptr) } } # [doc = "Wire-level `get_name`."] pub fn get_name (self ,) -> crate :: builtin :: StringName { let frame = sys :: CallFrame :: new () ; unsafe { crate :: builtin :: StringName :: new_with_init (| ret | frame . call_into (method_table () . get_name , self . object_ptr , ret)) } } # [doc = "Wire-level `add_child`."] pub fn add_child (self , node : sys :: Tagged , force_readable_name : bool , internal : i64) { let mut frame = sys :: CallFrame :: new () ; frame . arg (node . ptr ()) ; frame . arg :: < bool > (force_readable_name) ; frame . arg :: < i64 > (internal) ; unsafe { frame . call_void (method_table () . add_child , self . object_ptr) } } # [doc = "Wire-level `remove_child`."] pub fn remove_child (self , node : sys :: Tagged) { let mut frame = sys :: CallFrame :: new () ; frame . arg (node . ptr ()) ; unsafe { frame . call_void (method_table () . remove_child , self . object_ptr) } } # [doc = "Wire-level `get_child_count`."] pub fn get_child_count (self , include_internal : bool) -> i64 { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < bool > (include_internal) ; unsafe { frame . call :: < i64 > (method_table () . get_child_count , self . object_ptr) } } # [doc = "Wire-level `get_child`."] pub fn get_child (self , idx : i64 , include_internal : bool) -> sys :: Tagged { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < i64 > (idx) ; frame . arg :: < bool > (include_internal) ; let ptr = unsafe { frame . call :: < sys :: GDExtensionObjectPtr > (method_table () . get_child , self . object_ptr) } ; sys :: Tagged :: new (ptr , sys :: PointerTag :: MustAssertInstanceId) } # [doc = "Wire-level `get_parent`."] pub fn get_parent (self ,) -> sys :: Tagged { let frame = sys :: CallFrame :: new () ; let ptr = unsafe { frame . call :: < sys :: GDExtensionObjectPtr > (method_table () . get_parent , self . object_ptr) } ; sys :: Tagged :: new (ptr , sys :: PointerTag :: MustAssertInstanceId) } # [doc = "Wire-level `is_inside_tree`."] pub fn is_inside_tree (self ,) -> bool { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < bool > (method_table () . is_inside_tree , self . object_ptr) } } # [doc = "Wire-level `set_process`."] pub fn set_process (self , enable : bool) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < bool > (enable) ; unsafe { frame . call_void (method_table () . set_process , self . object_ptr) } } # [doc = "Wire-level `is_processing`."] pub fn is_processing (self ,) -> bool { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < bool > (method_table () . is_processing , self . object_ptr) } } # [doc = "Wire-level `set_process_mode`."] pub fn set_process_mode (self , mode : i64) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < i64 > (mode) ; unsafe { frame . call_void (method_table () . set_process_mode , self . object_ptr) } } # [doc = "Wire-level `get_process_mode`."] pub fn get_process_mode (self ,) -> i64 { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < i64 > (method_table () . get_process_mode , self . object_ptr) } } # [doc = "Wire-level `queue_free`."] pub fn queue_free (self ,) { let frame = sys :: CallFrame :: new () ; unsafe { frame . call_void (method_table () . queue_free , self . object_ptr) } } } struct MethodTable { add_sibling : sys :: GDExtensionMethodBindPtr , set_name : sys :: GDExtensionMethodBindPtr , get_name : sys :: GDExtensionMethodBindPtr , add_child : sys :: GDExtensionMethodBindPtr , remove_child : sys :: GDExtensionMethodBindPtr , get_child_count : sys :: GDExtensionMethodBindPtr , get_child : sys :: GDExtensionMethodBindPtr , get_parent : sys :: GDExtensionMethodBindPtr , is_inside_tree : sys :: GDExtensionMethodBindPtr , set_process : sys :: GDExtensionMethodBindPtr , is_processing : sys :: GDExtensionMethodBindPtr , set_process_mode : sys :: GDExtensionMethodBindPtr , get_process_mode : sys :: GDExtensionMethodBindPtr , queue_free : sys :: GDExtensionMethodBindPtr , } unsafe impl Sync for MethodTable { } unsafe impl Send for MethodTable { } impl MethodTable { fn load () -> Self { sys :: out ! ("Load method table of {}" , "Node") ; let class_name = crate :: builtin :: StringName :: from ("Node") ; Self { add_sibling : crate :: meta :: load_method_bind (& class_name , "add_sibling" , 2570952461i64) , set_name : crate :: meta :: load_method_bind (& class_name , "set_name" , 83702148i64) , get_name : crate :: meta :: load_method_bind (& class_name , "get_name" , 2002593661i64) , add_child : crate :: meta :: load_method_bind (& class_name , "add_child" , 3863233950i64) , remove_child : crate :: meta :: load_method_bind (& class_name , "remove_child" , 1078189570i64) , get_child_count : crate :: meta :: load_method_bind (& class_name , "get_child_count" , 894402480i64) , get_child : crate :: meta :: load_method_bind (& class_name , "get_child" , 541253412i64) , get_parent : crate :: meta :: load_method_bind (& class_name , "get_parent" , 3160264692i64) , is_inside_tree : crate :: meta :: load_method_bind (& class_name , "is_inside_tree" , 36873697i64) , set_process : crate :: meta :: load_method_bind (& class_name , "set_process" , 2586408642i64) , is_processing : crate :: meta :: load_method_bind (& class_name , "is_processing" , 36873697i64) , set_process_mode : crate :: meta :: load_method_bind (& class_name , "set_process_mode" , 1841290486i64) , get_process_mode : crate :: meta :: load_method_bind (& class_name , "get_process_mode" , 739966102i64) , queue_free : crate :: meta :: load_method_bind (& class_name , "queue_free" , 3218959716i64) , } } } fn method_table () -> & 'static MethodTable { static TABLE : std :: sync :: OnceLock < MethodTable > = std :: sync :: OnceLock :: new () ; TABLE . get_or_init (MethodTable :: load) } mod virtuals { use super :: re_export :: INode ; use crate :: sys ; pub (super) unsafe extern "C" fn process < T : INode > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "INode::process" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let arg0 = sys :: callframe :: read_arg :: < f64 > (args , 0usize) ; let mut guard = storage . get_mut () ; let result = < T as INode > :: process (& mut * guard , arg0) ; drop (guard) ; let () = result ; } } ,) ; } pub (super) unsafe extern "C" fn physics_process < T : INode > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "INode::physics_process" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let arg0 = sys :: callframe :: read_arg :: < f64 > (args , 0usize) ; let mut guard = storage . get_mut () ; let result = < T as INode > :: physics_process (& mut * guard , arg0) ; drop (guard) ; let () = result ; } } ,) ; } pub (super) unsafe extern "C" fn enter_tree < T : INode > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "INode::enter_tree" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let mut guard = storage . get_mut () ; let result = < T as INode > :: enter_tree (& mut * guard ,) ; drop (guard) ; let () = result ; } } ,) ; } pub (super) unsafe extern "C" fn exit_tree < T : INode > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "INode::exit_tree" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let mut guard = storage . get_mut () ; let result = < T as INode > :: exit_tree (& mut * guard ,) ; drop (guard) ; let () = result ; } } ,) ; } pub (super) unsafe extern "C" fn ready < T : INode > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "INode::ready" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let mut guard = storage . get_mut () ; let result = < T as INode > :: ready (& mut * guard ,) ; drop (guard) ; let () = result ; } } ,) ; } pub (super) unsafe extern "C" fn input < T : INode > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "INode::input" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let arg0 = crate :: obj :: Gd :: from_tagged (crate :: obj :: virtual_arg_tagged (* args . add (0usize) , true)) ; let mut guard = storage . get_mut () ; let result = < T as INode > :: input (& mut * guard , arg0) ; drop (guard) ; let () = result ; } } ,) ; } }
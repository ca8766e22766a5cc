# ! [doc = "Sidecar module for class [`Node2D`][crate::classes::Node2D].\n\nDefines related flag and enum types, and the low-level [`Advanced`] API with wire-level signatures."] use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Node2D`.\n\nA 2D game object, inherited by all 2D-related nodes.\n\nInherits [`CanvasItem`][crate::classes::CanvasItem].\n\nRelated symbols:\n\n* [`node_2d`][crate::classes::node_2d]: sidecar module with enums and the low-level `Advanced` API\n* [`INode2D`][crate::classes::INode2D]: virtual methods\n"] # [derive (Debug)] # [repr (C)] pub struct Node2D { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } # [doc = "Virtual methods for class [`Node2D`][crate::classes::Node2D].\n\nThese methods represent constructors (`init`) or callbacks invoked by the engine. Only methods that an implementation overrides are reported to the engine; for all others, the engine's default behavior applies."] # [allow (unused_variables)] pub trait INode2D : crate :: obj :: GodotClass + crate :: private :: You_forgot_the_attribute__godot_api { # [doc = r" Constructor of the user struct, invoked by the engine whenever an instance is created."] # [doc = r""] # [doc = r" Overriding it is an alternative to `#[class(init)]`."] fn init (base : crate :: obj :: Base < Self :: Base >) -> Self where Self : Sized , { unimplemented ! () } # [doc = " Called during the processing step of the main loop."] # [doc = ""] # [doc = " Engine virtual `_process`, declared by `Node`."] fn process (& mut self , delta : f64) { unimplemented ! () } # [doc = " Engine virtual `_physics_process`, declared by `Node`."] fn physics_process (& mut self , delta : f64) { unimplemented ! () } # [doc = " Engine virtual `_enter_tree`, declared by `Node`."] fn enter_tree (& mut self ,) { unimplemented ! () } # [doc = " Engine virtual `_exit_tree`, declared by `Node`."] fn exit_tree (& mut self ,) { unimplemented ! () } # [doc = " Called when the node is \"ready\", i.e. when both the node and its children have entered the scene tree."] # [doc = ""] # [doc = " Engine virtual `_ready`, declared by `Node`."] fn ready (& mut self ,) { unimplemented ! () } # [doc = " Called when there is an input event. The input event propagates up through the node tree until a node consumes it."] # [doc = ""] # [doc = " Engine virtual `_input`, declared by `Node`."] fn input (& mut self , event : Option < crate :: obj :: Gd < crate :: classes :: InputEvent >>) { unimplemented ! () } # [doc = " Engine virtual `_draw`, declared by `CanvasItem`."] fn draw (& mut self ,) { unimplemented ! () } # [doc = r" Trampoline for the engine virtual `name`, if `Self` overrides it."] # [doc (hidden)] fn __godot_virtual_call (name : & str) -> sys :: GDExtensionClassCallVirtual where Self : Sized + crate :: private :: ImplementsVirtuals , { let overridden = < Self as crate :: private :: ImplementsVirtuals > :: OVERRIDDEN ; match name { "_process" if overridden . contains (& "process") => Some (super :: virtuals :: process :: < Self >) , "_physics_process" if overridden . contains (& "physics_process") => Some (super :: virtuals :: physics_process :: < Self >) , "_enter_tree" if overridden . contains (& "enter_tree") => Some (super :: virtuals :: enter_tree :: < Self >) , "_exit_tree" if overridden . contains (& "exit_tree") => Some (super :: virtuals :: exit_tree :: < Self >) , "_ready" if overridden . contains (& "ready") => Some (super :: virtuals :: ready :: < Self >) , "_input" if overridden . contains (& "input") => Some (super :: virtuals :: input :: < Self >) , "_draw" if overridden . contains (& "draw") => Some (super :: virtuals :: draw :: < Self >) , _ => None , } } } impl Node2D { pub fn set_position (& mut self , position : crate :: builtin :: Vector2) { self . advanced () . set_position (position) ; } pub fn get_position (& self ,) -> crate :: builtin :: Vector2 { self . advanced () . get_position () } pub fn set_rotation (& mut self , radians : f32) { self . advanced () . set_rotation (radians as f64) ; } pub fn get_rotation (& self ,) -> f32 { let ret = self . advanced () . get_rotation () ; ret as f32 } pub fn set_scale (& mut self , scale : crate :: builtin :: Vector2) { self . advanced () . set_scale (scale) ; } pub fn get_scale (& self ,) -> crate :: builtin :: Vector2 { self . advanced () . get_scale () } pub fn rotate (& mut self , radians : f32) { self . advanced () . rotate (radians as f64) ; } pub fn translate (& mut self , offset : crate :: builtin :: Vector2) { self . advanced () . translate (offset) ; } pub fn look_at (& mut self , point : crate :: builtin :: Vector2) { self . advanced () . look_at (point) ; } # [doc = " Signals declared by `Node2D` itself (not inherited ones):"] pub const SIGNALS : & 'static [& 'static str] = & [] ; # [doc = r" Engine names of all virtual methods that a user class extending this one can override."] pub const VIRTUAL_METHODS : & 'static [& 'static str] = & ["_process" , "_physics_process" , "_enter_tree" , "_exit_tree" , "_ready" , "_input" , "_draw"] ; # [doc = r" Low-level API with wire-level signatures."] pub fn advanced (& self) -> Advanced < '_ > { Advanced :: from_instance (self) } } impl crate :: obj :: GodotClass for Node2D { type Base = crate :: classes :: CanvasItem ; fn class_name () -> crate :: meta :: ClassName { crate :: meta :: ClassName :: new_static ("Node2D") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for Node2D { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; type Declarer = crate :: obj :: bounds :: DeclEngine ; } impl crate :: obj :: EngineClass for Node2D { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } fn cached_instance_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: Inherits < crate :: classes :: CanvasItem > for Node2D { } impl crate :: obj :: Inherits < crate :: classes :: Node > for Node2D { } impl crate :: obj :: Inherits < crate :: classes :: Object > for Node2D { } impl std :: ops :: Deref for Node2D { type Target = crate :: classes :: CanvasItem ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Node2D { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } impl crate :: obj :: cap :: GodotDefault for Node2D { } # [macro_export] # [doc (hidden)] # [allow (non_snake_case)] macro_rules ! inherits_transitive_Node2D { ($ Class : ident) => { impl $ crate :: obj :: Inherits < $ crate :: classes :: Node2D > for $ Class { } impl $ crate :: obj :: Inherits < $ crate :: classes :: CanvasItem > for $ Class { } impl $ crate :: obj :: Inherits < $ crate :: classes :: Node > for $ Class { } impl $ crate :: obj :: Inherits < $ crate :: classes :: Object > for $ Class { } } } } # [doc = "Low-level methods of [`Node2D`][crate::classes::Node2D], with wire-level signatures.\n\nIntegers are `i64`, floats `f64`, enums their ordinal as `i64`, objects tagged raw pointers. Returned objects carry the ownership tag the caller must honor."] # [derive (Copy , Clone)] pub struct Advanced < 'a > { object_ptr : sys :: GDExtensionObjectPtr , _instance : std :: marker :: PhantomData < & 'a re_export :: Node2D > , } impl < 'a > Advanced < 'a > { # [doc = r" Low-level API of `instance`."] # [doc = r""] # [doc = r" # Panics"] # [doc = r" If `instance` tracks its instance ID and the object has been freed."] pub fn from_instance (instance : & 'a re_export :: Node2D) -> Self { let object_ptr = crate :: obj :: EngineClass :: __checked_object_ptr (instance) ; Self { object_ptr , _instance : std :: marker :: PhantomData , } } # [doc = r" Low-level API of a raw object."] # [doc = r""] # [doc = r" # Safety"] # [doc = r" `object_ptr` must point to a live object of this class (or a subclass) for `'a`."] pub unsafe fn from_object_ptr (object_ptr : sys :: GDExtensionObjectPtr) -> Self { Self { object_ptr , _instance : std :: marker :: PhantomData , } } pub fn object_ptr (self) -> sys :: GDExtensionObjectPtr { self . object_ptr } # [doc = "Wire-level `set_position`."] pub fn set_position (self , position : crate :: builtin :: Vector2) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < crate :: builtin :: Vector2 > (position) ; unsafe { frame . call_void (method_table () . set_position , self . object_ptr) } } # [doc = "Wire-level `get_position`."] pub fn get_position (self ,) -> crate :: builtin :: Vector2 { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < crate :: builtin :: Vector2 > (method_table () . get_position , self . object_ptr) } } # [doc = "Wire-level `set_rotation`."] pub fn set_rotation (self , radians : f64) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < f64 > (radians) ; unsafe { frame . call_void (method_table () . set_rotation , self . object_ptr) } } # [doc = "Wire-level `get_rotation`."] pub fn get_rotation (self ,) -> f64 { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < f64 > (method_table () . get_rotation , self . object_ptr) } } # [doc = "Wire-level `set_scale`."] pub fn set_scale (self , scale : crate :: builtin :: Vector2) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < crate :: builtin :: Vector2 > (scale) ; unsafe { frame . call_void (method_table () . set_scale , self . object_ptr) } } # [doc = "Wire-level `get_scale`."] pub fn get_scale (self ,) -> crate :: builtin :: Vector2 { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < crate :: builtin :: Vector2 > (method_table () . get_scale , self . object_ptr) } } # [doc = "Wire-level `rotate`."] pub fn rotate (self , radians : f64) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < f64 > (radians) ; unsafe { frame . call_void (method_table () . rotate , self . object_ptr) } } # [doc = "Wire-level `translate`."] pub fn translate (self , offset : crate :: builtin :: Vector2) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < crate :: builtin :: Vector2 > (offset) ; unsafe { frame . call_void (method_table () . translate , self . object_ptr) } } # [doc = "Wire-level `look_at`."] pub fn look_at (self , point : crate :: builtin :: Vector2) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < crate :: builtin :: Vector2 > (point) ; unsafe { frame . call_void (method_table () . look_at , self . object_ptr) } } } struct MethodTable { set_position : sys :: GDExtensionMethodBindPtr , get_position : sys :: GDExtensionMethodBindPtr , set_rotation : sys :: GDExtensionMethodBindPtr , get_rotation : sys :: GDExtensionMethodBindPtr , set_scale : sys :: GDExtensionMethodBindPtr , get_scale : sys :: GDExtensionMethodBindPtr , rotate : sys :: GDExtensionMethodBindPtr , translate : sys :: GDExtensionMethodBindPtr , look_at : sys :: GDExtensionMethodBindPtr , } unsafe impl Sync for MethodTable { } unsafe impl Send for MethodTable { } impl MethodTable { fn load () -> Self { sys :: out ! ("Load method table of {}" , "Node2D") ; let class_name = crate :: builtin :: StringName :: from ("Node2D") ; Self { set_position : crate :: meta :: load_method_bind (& class_name , "set_position" , 743155724i64) , get_position : crate :: meta :: load_method_bind (& class_name , "get_position" , 3341600327i64) , set_rotation : crate :: meta :: load_method_bind (& class_name , "set_rotation" , 373806689i64) , get_rotation : crate :: meta :: load_method_bind (& class_name , "get_rotation" , 1740695150i64) , set_scale : crate :: meta :: load_method_bind (& class_name , "set_scale" , 743155724i64) , get_scale : crate :: meta :: load_method_bind (& class_name , "get_scale" , 3341600327i64) , rotate : crate :: meta :: load_method_bind (& class_name , "rotate" , 373806689i64) , translate : crate :: meta :: load_method_bind (& class_name , "translate" , 743155724i64) , look_at : crate :: meta :: load_method_bind (& class_name , "look_at" , 743155724i64) , } } } fn method_table () -> & 'static MethodTable { static TABLE : std :: sync :: OnceLock < MethodTable > = std :: sync :: OnceLock :: new () ; TABLE . get_or_init (MethodTable :: load) } mod virtuals { use super :: re_export :: INode2D ; use crate :: sys ; pub (super) unsafe extern "C" fn process < T : INode2D > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "INode2D::process" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let arg0 = sys :: callframe :: read_arg :: < f64 > (args , 0usize) ; let mut guard = storage . get_mut () ; let result = < T as INode2D > :: process (& mut * guard , arg0) ; drop (guard) ; let () = result ; } } ,) ; } pub (super) unsafe extern "C" fn physics_process < T : INode2D > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "INode2D::physics_process" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let arg0 = sys :: callframe :: read_arg :: < f64 > (args , 0usize) ; let mut guard = storage . get_mut () ; let result = < T as INode2D > :: physics_process (& mut * guard , arg0) ; drop (guard) ; let () = result ; } } ,) ; } pub (super) unsafe extern "C" fn enter_tree < T : INode2D > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "INode2D::enter_tree" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let mut guard = storage . get_mut () ; let result = < T as INode2D > :: enter_tree (& mut * guard ,) ; drop (guard) ; let () = result ; } } ,) ; } pub (super) unsafe extern "C" fn exit_tree < T : INode2D > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "INode2D::exit_tree" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let mut guard = storage . get_mut () ; let result = < T as INode2D > :: exit_tree (& mut * guard ,) ; drop (guard) ; let () = result ; } } ,) ; } pub (super) unsafe extern "C" fn ready < T : INode2D > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "INode2D::ready" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let mut guard = storage . get_mut () ; let result = < T as INode2D > :: ready (& mut * guard ,) ; drop (guard) ; let () = result ; } } ,) ; } pub (super) unsafe extern "C" fn input < T : INode2D > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "INode2D::input" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let arg0 = crate :: obj :: Gd :: from_tagged (crate :: obj :: virtual_arg_tagged (* args . add (0usize) , true)) ; let mut guard = storage . get_mut () ; let result = < T as INode2D > :: input (& mut * guard , arg0) ; drop (guard) ; let () = result ; } } ,) ; } pub (super) unsafe extern "C" fn draw < T : INode2D > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "INode2D::draw" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let mut guard = storage . get_mut () ; let result = < T as INode2D > :: draw (& mut * guard ,) ; drop (guard) ; let () = result ; } } ,) ; } }
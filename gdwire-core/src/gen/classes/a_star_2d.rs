# ! [doc = "Sidecar module for class [`AStar2D`][crate::classes::AStar2D].\n\nDefines related flag and enum types, and the low-level [`Advanced`] API with wire-level signatures."] use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `AStar2D`.\n\nAn implementation of A* for finding the shortest path between two vertices on a connected graph in 2D space.\n\nInherits [`RefCounted`][crate::classes::RefCounted].\n\nRelated symbols:\n\n* [`a_star_2d`][crate::classes::a_star_2d]: sidecar module with enums and the low-level `Advanced` API\n* [`IAStar2D`][crate::classes::IAStar2D]: virtual methods\n\nMethods without a binding, since their signatures use unsupported types: `get_point_path`.\n"] # [derive (Debug)] # [repr (C)] pub struct AStar2D { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } # [doc = "Virtual methods for class [`AStar2D`][crate::classes::AStar2D].\n\nThese methods represent constructors (`init`) or callbacks invoked by the engine. Only methods that an implementation overrides are reported to the engine; for all others, the engine's default behavior applies."] # [allow (unused_variables)] pub trait IAStar2D : crate :: obj :: GodotClass + crate :: private :: You_forgot_the_attribute__godot_api { # [doc = r" Constructor of the user struct, invoked by the engine whenever an instance is created."] # [doc = r""] # [doc = r" Overriding it is an alternative to `#[class(init)]`."] fn init (base : crate :: obj :: Base < Self :: Base >) -> Self where Self : Sized , { unimplemented ! () } # [doc = " Called when estimating the cost between a point and the path's ending point."] # [doc = ""] # [doc = " Engine virtual `_estimate_cost`, declared by `AStar2D`."] fn estimate_cost (& self , from_id : i64 , to_id : i64) -> f64 { unimplemented ! () } # [doc = " Engine virtual `_compute_cost`, declared by `AStar2D`."] fn compute_cost (& self , from_id : i64 , to_id : i64) -> f64 { unimplemented ! () } # [doc = r" Trampoline for the engine virtual `name`, if `Self` overrides it."] # [doc (hidden)] fn __godot_virtual_call (name : & str) -> sys :: GDExtensionClassCallVirtual where Self : Sized + crate :: private :: ImplementsVirtuals , { let overridden = < Self as crate :: private :: ImplementsVirtuals > :: OVERRIDDEN ; match name { "_estimate_cost" if overridden . contains (& "estimate_cost") => Some (super :: virtuals :: estimate_cost :: < Self >) , "_compute_cost" if overridden . contains (& "compute_cost") => Some (super :: virtuals :: compute_cost :: < Self >) , _ => None , } } } impl AStar2D { pub fn get_available_point_id (& self ,) -> i64 { self . advanced () . get_available_point_id () } # [doc = " Default values in Godot:"] # [doc = " * `weight_scale`: `1.0`"] pub fn add_point (& mut self , id : i64 , position : crate :: builtin :: Vector2 , weight_scale : f32) { self . advanced () . add_point (id , position , weight_scale as f64) ; } pub fn get_point_position (& self , id : i64) -> crate :: builtin :: Vector2 { self . advanced () . get_point_position (id) } pub fn set_point_position (& mut self , id : i64 , position : crate :: builtin :: Vector2) { self . advanced () . set_point_position (id , position) ; } pub fn get_point_weight_scale (& self , id : i64) -> f32 { let ret = self . advanced () . get_point_weight_scale (id) ; ret as f32 } pub fn set_point_weight_scale (& mut self , id : i64 , weight_scale : f32) { self . advanced () . set_point_weight_scale (id , weight_scale as f64) ; } pub fn remove_point (& mut self , id : i64) { self . advanced () . remove_point (id) ; } pub fn has_point (& self , id : i64) -> bool { self . advanced () . has_point (id) } # [doc = " Default values in Godot:"] # [doc = " * `disabled`: `true`"] pub fn set_point_disabled (& mut self , id : i64 , disabled : bool) { self . advanced () . set_point_disabled (id , disabled) ; } pub fn is_point_disabled (& self , id : i64) -> bool { self . advanced () . is_point_disabled (id) } # [doc = " Default values in Godot:"] # [doc = " * `bidirectional`: `true`"] pub fn connect_points (& mut self , id : i64 , to_id : i64 , bidirectional : bool) { self . advanced () . connect_points (id , to_id , bidirectional) ; } # [doc = " Default values in Godot:"] # [doc = " * `bidirectional`: `true`"] pub fn disconnect_points (& mut self , id : i64 , to_id : i64 , bidirectional : bool) { self . advanced () . disconnect_points (id , to_id , bidirectional) ; } # [doc = " Default values in Godot:"] # [doc = " * `bidirectional`: `true`"] pub fn are_points_connected (& self , id : i64 , to_id : i64 , bidirectional : bool) -> bool { self . advanced () . are_points_connected (id , to_id , bidirectional) } pub fn get_point_count (& self ,) -> i64 { self . advanced () . get_point_count () } pub fn clear (& mut self ,) { self . advanced () . clear () ; } # [doc = " Default values in Godot:"] # [doc = " * `include_disabled`: `false`"] pub fn get_closest_point (& self , to_position : crate :: builtin :: Vector2 , include_disabled : bool) -> i64 { self . advanced () . get_closest_point (to_position , include_disabled) } # [doc = " Signals declared by `AStar2D` itself (not inherited ones):"] pub const SIGNALS : & 'static [& 'static str] = & [] ; # [doc = r" Engine names of all virtual methods that a user class extending this one can override."] pub const VIRTUAL_METHODS : & 'static [& 'static str] = & ["_estimate_cost" , "_compute_cost"] ; # [doc = r" Low-level API with wire-level signatures."] pub fn advanced (& self) -> Advanced < '_ > { Advanced :: from_instance (self) } } impl crate :: obj :: GodotClass for AStar2D { type Base = crate :: classes :: RefCounted ; fn class_name () -> crate :: meta :: ClassName { crate :: meta :: ClassName :: new_static ("AStar2D") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for AStar2D { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; type Declarer = crate :: obj :: bounds :: DeclEngine ; } impl crate :: obj :: EngineClass for AStar2D { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } fn cached_instance_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for AStar2D { } impl crate :: obj :: Inherits < crate :: classes :: Object > for AStar2D { } impl std :: ops :: Deref for AStar2D { type Target = crate :: classes :: RefCounted ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for AStar2D { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } impl crate :: obj :: cap :: GodotDefault for AStar2D { } # [macro_export] # [doc (hidden)] # [allow (non_snake_case)] macro_rules ! inherits_transitive_AStar2D { ($ Class : ident) => { impl $ crate :: obj :: Inherits < $ crate :: classes :: AStar2D > for $ Class { } impl $ crate :: obj :: Inherits < $ crate :: classes :: RefCounted > for $ Class { } impl $ crate :: obj :: Inherits < $ crate :: classes :: Object > for $ Class { } } } } # [doc = "Low-level methods of [`AStar2D`][crate::classes::AStar2D], with wire-level signatures.\n\nIntegers are `i64`, floats `f64`, enums their ordinal as `i64`, objects tagged raw pointers. Returned objects carry the ownership tag the caller must honor."] # [derive (Copy , Clone)] pub struct Advanced < 'a > { object_ptr : sys :: GDExtensionObjectPtr , _instance : std :: marker :: PhantomData < & 'a re_export :: AStar2D > , } impl < 'a > Advanced < 'a > { # [doc = r" Low-level API of `instance`."] # [doc = r""] # [doc = r" # Panics"] # [doc = r" If `instance` tracks its instance ID and the object has been freed."] pub fn from_instance (instance : & 'a re_export :: AStar2D) -> Self { let object_ptr = crate :: obj :: EngineClass :: __checked_object_ptr (instance) ; Self { object_ptr , _instance : std :: marker :: PhantomData , } } # [doc = r" Low-level API of a raw object."] # [doc = r""] # [doc = r" # Safety"] # [doc = r" `object_ptr` must point to a live object of this class (or a subclass) for `'a`."] pub unsafe fn from_object_ptr (object_ptr : sys :: GDExtensionObjectPtr) -> Self { Self { object_ptr , _instance : std :: marker :: PhantomData , } } pub fn object_ptr (self) -> sys :: GDExtensionObjectPtr { self . object_ptr } # [doc = "Wire-level `get_available_point_id`."] pub fn get_available_point_id (self ,) -> i64 { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < i64 > (method_table () . get_available_point_id , self . object_ptr) } } # [doc = "Wire-level `add_point`."] pub fn add_point (self , id : i64 , position : crate :: builtin :: Vector2 , weight_scale : f64) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < i64 > (id) ; frame . arg :: < crate :: builtin :: Vector2 > (position) ; frame . arg :: < f64 > (weight_scale) ; unsafe { frame . call_void (method_table () . add_point , self . object_ptr) } } # [doc = "Wire-level `get_point_position`."] pub fn get_point_position (self , id : i64) -> crate :: builtin :: Vector2 { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < i64 > (id) ; unsafe { frame . call :: < crate :: builtin :: Vector2 > (method_table () . get_point_position , self . object_ptr) } } # [doc = "Wire-level `set_point_position`."] pub fn set_point_position (self , id : i64 , position : crate :: builtin :: Vector2) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < i64 > (id) ; frame . arg :: < crate :: builtin :: Vector2 > (position) ; unsafe { frame . call_void (method_table () . set_point_position , self . object_ptr) } } # [doc = "Wire-level `get_point_weight_scale`."] pub fn get_point_weight_scale (self , id : i64) -> f64 { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < i64 > (id) ; unsafe { frame . call :: < f64 > (method_table () . get_point_weight_scale , self . object_ptr) } } # [doc = "Wire-level `set_point_weight_scale`."] pub fn set_point_weight_scale (self , id : i64 , weight_scale : f64) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < i64 > (id) ; frame . arg :: < f64 > (weight_scale) ; unsafe { frame . call_void (method_table () . set_point_weight_scale , self . object_ptr) } } # [doc = "Wire-level `remove_point`."] pub fn remove_point (self , id : i64) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < i64 > (id) ; unsafe { frame . call_void (method_table () . remove_point , self . object_ptr) } } # [doc = "Wire-level `has_point`."] pub fn has_point (self , id : i64) -> bool { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < i64 > (id) ; unsafe { frame . call :: < bool > (method_table () . has_point , self . object_ptr) } } # [doc = "Wire-level `set_point_disabled`."] pub fn set_point_disabled (self , id : i64 , disabled : bool) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < i64 > (id) ; frame . arg :: < bool > (disabled) ; unsafe { frame . call_void (method_table () . set_point_disabled , self . object_ptr) } } # [doc = "Wire-level `is_point_disabled`."] pub fn is_point_disabled (self , id : i64) -> bool { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < i64 > (id) ; unsafe { frame . call :: < bool > (method_table () . is_point_disabled , self . object_ptr) } } # [doc = "Wire-level `connect_points`."] pub fn connect_points (self , id : i64 , to_id : i64 , bidirectional : bool) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < i64 > (id) ; frame . arg :: < i64 > (to_id) ; frame . arg :: < bool > (bidirectional) ; unsafe { frame . call_void (method_table () . connect_points , self . object_ptr) } } # [doc = "Wire-level `disconnect_points`."] pub fn disconnect_points (self , id : i64 , to_id : i64 , bidirectional : bool) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < i64 > (id) ; frame . arg :: < i64 > (to_id) ; frame . arg :: < bool > (bidirectional) ; unsafe { frame . call_void (method_table () . disconnect_points , self . object_ptr) } } # [doc = "Wire-level `are_points_connected`."] pub fn are_points_connected (self , id : i64 , to_id : i64 , bidirectional : bool) -> bool { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < i64 > (id) ; frame . arg :: < i64 > (to_id) ; frame . arg :: < bool > (bidirectional) ; unsafe { frame . call :: < bool > (method_table () . are_points_connected , self . object_ptr) } } # [doc = "Wire-level `get_point_count`."] pub fn get_point_count (self ,) -> i64 { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < i64 > (method_table () . get_point_count , self . object_ptr) } } # [doc = "Wire-level `clear`."] pub fn clear (self ,) { let frame = sys :: CallFrame :: new () ; unsafe { frame . call_void (method_table () . clear , self . object_ptr) } } # [doc = "Wire-level `get_closest_point`."] pub fn get_closest_point (self , to_position : crate :: builtin :: Vector2 , include_disabled : bool) -> i64 { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < crate :: builtin :: Vector2 > (to_position) ; frame . arg :: < bool > (include_disabled) ; unsafe { frame . call :: < i64 > (method_table () . get_closest_point , self . object_ptr) } } } struct MethodTable { get_available_point_id : sys :: GDExtensionMethodBindPtr , add_point : sys :: GDExtensionMethodBindPtr , get_point_position : sys :: GDExtensionMethodBindPtr , set_point_position : sys :: GDExtensionMethodBindPtr , get_point_weight_scale : sys :: GDExtensionMethodBindPtr , set_point_weight_scale : sys :: GDExtensionMethodBindPtr , remove_point : sys :: GDExtensionMethodBindPtr , has_point : sys :: GDExtensionMethodBindPtr , set_point_disabled : sys :: GDExtensionMethodBindPtr , is_point_disabled : sys :: GDExtensionMethodBindPtr , connect_points : sys :: GDExtensionMethodBindPtr , disconnect_points : sys :: GDExtensionMethodBindPtr , are_points_connected : sys :: GDExtensionMethodBindPtr , get_point_count : sys :: GDExtensionMethodBindPtr , clear : sys :: GDExtensionMethodBindPtr , get_closest_point : sys :: GDExtensionMethodBindPtr , } unsafe impl Sync for MethodTable { } unsafe impl Send for MethodTable { } impl MethodTable { fn load () -> Self { sys :: out ! ("Load method table of {}" , "AStar2D") ; let class_name = crate :: builtin :: StringName :: from ("AStar2D") ; Self { get_available_point_id : crate :: meta :: load_method_bind (& class_name , "get_available_point_id" , 3905245786i64) , add_point : crate :: meta :: load_method_bind (& class_name , "add_point" , 4074201818i64) , get_point_position : crate :: meta :: load_method_bind (& class_name , "get_point_position" , 2299179447i64) , set_point_position : crate :: meta :: load_method_bind (& class_name , "set_point_position" , 163021252i64) , get_point_weight_scale : crate :: meta :: load_method_bind (& class_name , "get_point_weight_scale" , 2339986948i64) , set_point_weight_scale : crate :: meta :: load_method_bind (& class_name , "set_point_weight_scale" , 1602489585i64) , remove_point : crate :: meta :: load_method_bind (& class_name , "remove_point" , 1286410249i64) , has_point : crate :: meta :: load_method_bind (& class_name , "has_point" , 1116898809i64) , set_point_disabled : crate :: meta :: load_method_bind (& class_name , "set_point_disabled" , 972357352i64) , is_point_disabled : crate :: meta :: load_method_bind (& class_name , "is_point_disabled" , 1116898809i64) , connect_points : crate :: meta :: load_method_bind (& class_name , "connect_points" , 3710494224i64) , disconnect_points : crate :: meta :: load_method_bind (& class_name , "disconnect_points" , 3710494224i64) , are_points_connected : crate :: meta :: load_method_bind (& class_name , "are_points_connected" , 2288175859i64) , get_point_count : crate :: meta :: load_method_bind (& class_name , "get_point_count" , 3905245786i64) , clear : crate :: meta :: load_method_bind (& class_name , "clear" , 3218959716i64) , get_closest_point : crate :: meta :: load_method_bind (& class_name , "get_closest_point" , 2300324924i64) , } } } fn method_table () -> & 'static MethodTable { static TABLE : std :: sync :: OnceLock < MethodTable > = std :: sync :: OnceLock :: new () ; TABLE . get_or_init (MethodTable :: load) } mod virtuals { use super :: re_export :: IAStar2D ; use crate :: sys ; pub (super) unsafe extern "C" fn estimate_cost < T : IAStar2D > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "IAStar2D::estimate_cost" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let arg0 = sys :: callframe :: read_arg :: < i64 > (args , 0usize) ; let arg1 = sys :: callframe :: read_arg :: < i64 > (args , 1usize) ; let guard = storage . get () ; let result = < T as IAStar2D > :: estimate_cost (& * guard , arg0 , arg1) ; drop (guard) ; sys :: callframe :: write_return :: < f64 > (ret , result) ; } } ,) ; } pub (super) unsafe extern "C" fn compute_cost < T : IAStar2D > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "IAStar2D::compute_cost" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let arg0 = sys :: callframe :: read_arg :: < i64 > (args , 0usize) ; let arg1 = sys :: callframe :: read_arg :: < i64 > (args , 1usize) ; let guard = storage . get () ; let result = < T as IAStar2D > :: compute_cost (& * guard , arg0 , arg1) ; drop (guard) ; sys :: callframe :: write_return :: < f64 > (ret , result) ; } } ,) ; } }
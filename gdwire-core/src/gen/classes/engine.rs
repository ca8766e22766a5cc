# ! [doc = "Sidecar module for class [`Engine`][crate::classes::Engine].\n\nDefines related flag and enum types, and the low-level [`Advanced`] API with wire-level signatures."] use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Engine`.\n\nProvides access to engine properties.\n\nInherits [`Object`][crate::classes::Object].\n\nRelated symbols:\n\n* [`engine`][crate::classes::engine]: sidecar module with enums and the low-level `Advanced` API\n* [`IEngine`][crate::classes::IEngine]: virtual methods\n\nThis class is a singleton; access it through [`Engine::singleton()`].\n\nMethods without a binding, since their signatures use unsupported types: `get_main_loop`, `get_version_info`.\n"] # [derive (Debug)] # [repr (C)] pub struct Engine { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } # [doc = "Virtual methods for class [`Engine`][crate::classes::Engine].\n\nThese methods represent constructors (`init`) or callbacks invoked by the engine. Only methods that an implementation overrides are reported to the engine; for all others, the engine's default behavior applies."] # [allow (unused_variables)] pub trait IEngine : crate :: obj :: GodotClass + crate :: private :: You_forgot_the_attribute__godot_api { # [doc = r" Constructor of the user struct, invoked by the engine whenever an instance is created."] # [doc = r""] # [doc = r" Overriding it is an alternative to `#[class(init)]`."] fn init (base : crate :: obj :: Base < Self :: Base >) -> Self where Self : Sized , { unimplemented ! () } # [doc = r" Trampoline for the engine virtual `name`, if `Self` overrides it."] # [doc (hidden)] fn __godot_virtual_call (name : & str) -> sys :: GDExtensionClassCallVirtual where Self : Sized + crate :: private :: ImplementsVirtuals , { let overridden = < Self as crate :: private :: ImplementsVirtuals > :: OVERRIDDEN ; match name { _ => None , } } } impl Engine { # [doc = r" The engine-wide instance of this class."] # [doc = r""] # [doc = r" Looked up once; later calls return a handle to the same object."] pub fn singleton () -> crate :: obj :: Gd < Self > { static CACHE : crate :: obj :: SingletonCache = crate :: obj :: SingletonCache :: new () ; CACHE . get :: < Self > () } pub fn set_physics_ticks_per_second (& mut self , physics_ticks_per_second : i32) { self . advanced () . set_physics_ticks_per_second (physics_ticks_per_second as i64) ; } pub fn get_physics_ticks_per_second (& self ,) -> i32 { let ret = self . advanced () . get_physics_ticks_per_second () ; ret as i32 } pub fn set_max_fps (& mut self , max_fps : i32) { self . advanced () . set_max_fps (max_fps as i64) ; } pub fn get_max_fps (& self ,) -> i32 { let ret = self . advanced () . get_max_fps () ; ret as i32 } pub fn set_time_scale (& mut self , time_scale : f64) { self . advanced () . set_time_scale (time_scale) ; } pub fn get_time_scale (& mut self ,) -> f64 { self . advanced () . get_time_scale () } pub fn get_frames_drawn (& mut self ,) -> i32 { let ret = self . advanced () . get_frames_drawn () ; ret as i32 } pub fn get_frames_per_second (& self ,) -> f64 { self . advanced () . get_frames_per_second () } pub fn get_process_frames (& self ,) -> u64 { let ret = self . advanced () . get_process_frames () ; ret as u64 } pub fn has_singleton (& self , name : & str) -> bool { let name = crate :: builtin :: StringName :: from (name) ; self . advanced () . has_singleton (& name) } pub fn get_singleton (& self , name : & str) -> Option < crate :: obj :: Gd < crate :: classes :: Object >> { let name = crate :: builtin :: StringName :: from (name) ; let ret = self . advanced () . get_singleton (& name) ; unsafe { crate :: obj :: Gd :: from_tagged (ret) } } pub fn is_editor_hint (& self ,) -> bool { self . advanced () . is_editor_hint () } # [doc = " Signals declared by `Engine` itself (not inherited ones):"] pub const SIGNALS : & 'static [& 'static str] = & [] ; # [doc = r" Engine names of all virtual methods that a user class extending this one can override."] pub const VIRTUAL_METHODS : & 'static [& 'static str] = & [] ; # [doc = r" Low-level API with wire-level signatures."] pub fn advanced (& self) -> Advanced < '_ > { Advanced :: from_instance (self) } } impl crate :: obj :: GodotClass for Engine { type Base = crate :: classes :: Object ; fn class_name () -> crate :: meta :: ClassName { crate :: meta :: ClassName :: new_static ("Engine") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for Engine { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; type Declarer = crate :: obj :: bounds :: DeclEngine ; } impl crate :: obj :: EngineClass for Engine { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } fn cached_instance_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: Inherits < crate :: classes :: Object > for Engine { } impl std :: ops :: Deref for Engine { type Target = crate :: classes :: Object ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Engine { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } # [macro_export] # [doc (hidden)] # [allow (non_snake_case)] macro_rules ! inherits_transitive_Engine { ($ Class : ident) => { impl $ crate :: obj :: Inherits < $ crate :: classes :: Engine > for $ Class { } impl $ crate :: obj :: Inherits < $ crate :: classes :: Object > for $ Class { } } } } # [doc = "Low-level methods of [`Engine`][crate::classes::Engine], with wire-level signatures.\n\nIntegers are `i64`, floats `f64`, enums their ordinal as `i64`, objects tagged raw pointers. Returned objects carry the ownership tag the caller must honor."] # [derive (Copy , Clone)] pub struct Advanced < 'a > { object_ptr : sys :: GDExtensionObjectPtr , _instance : std :: marker :: PhantomData < & 'a re_export :: Engine > , } impl < 'a > Advanced < 'a > { # [doc = r" Low-level API of `instance`."] # [doc = r""] # [doc = r" # Panics"] # [doc = r" If `instance` tracks its instance ID and the object has been freed."] pub fn from_instance (instance : & 'a re_export :: Engine) -> Self { let object_ptr = crate :: obj :: EngineClass :: __checked_object_ptr (instance) ; Self { object_ptr , _instance : std :: marker :: PhantomData , } } # [doc = r" Low-level API of a raw object."] # [doc = r""] # [doc = r" # Safety"] # [doc = r" `object_ptr` must point to a live object of this class (or a subclass) for `'a`."] pub unsafe fn from_object_ptr (object_ptr : sys :: GDExtensionObjectPtr) -> Self { Self { object_ptr , _instance : std :: marker :: PhantomData , } } pub fn object_ptr (self) -> sys :: GDExtensionObjectPtr { self . object_ptr } # [doc = "Wire-level `set_physics_ticks_per_second`."] pub fn set_physics_ticks_per_second (self , physics_ticks_per_second : i64) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < i64 > (physics_ticks_per_second) ; unsafe { frame . call_void (method_table () . set_physics_ticks_per_second , self . object_ptr) } } # [doc = "Wire-level `get_physics_ticks_per_second`."] pub fn get_physics_ticks_per_second (self ,) -> i64 { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < i64 > (method_table () . get_physics_ticks_per_second , self . object_ptr) } } # [doc = "Wire-level `set_max_fps`."] pub fn set_max_fps (self , max_fps : i64) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < i64 > (max_fps) ; unsafe { frame . call_void (method_table () . set_max_fps , self . object_ptr) } } # [doc = "Wire-level `get_max_fps`."] pub fn get_max_fps (self ,) -> i64 { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < i64 > (method_table () . get_max_fps , self . object_ptr) } } # [doc = "Wire-level `set_time_scale`."] pub fn set_time_scale (self , time_scale : f64) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < f64 > (time_scale) ; unsafe { frame . call_void (method_table () . set_time_scale , self . object_ptr) } } # [doc = "Wire-level `get_time_scale`."] pub fn get_time_scale (self ,) -> f64 { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < f64 > (method_table () . get_time_scale , self . object_ptr) } } # [doc = "Wire-level `get_frames_drawn`."] pub fn get_frames_drawn (self ,) -> i64 { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < i64 > (method_table () . get_frames_drawn , self . object_ptr) } } # [doc = "Wire-level `get_frames_per_second`."] pub fn get_frames_per_second (self ,) -> f64 { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < f64 > (method_table () . get_frames_per_second , self . object_ptr) } } # [doc = "Wire-level `get_process_frames`."] pub fn get_process_frames (self ,) -> i64 { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < i64 > (method_table () . get_process_frames , self . object_ptr) } } # [doc = "Wire-level `has_singleton`."] pub fn has_singleton (self , name : & crate :: builtin :: StringName) -> bool { let mut frame = sys :: CallFrame :: new () ; unsafe { frame . arg_ptr (name . sys ()) } ; unsafe { frame . call :: < bool > (method_table () . has_singleton , self . object_ptr) } } # [doc = "Wire-level `get_singleton`."] pub fn get_singleton (self , name : & crate :: builtin :: StringName) -> sys :: Tagged { let mut frame = sys :: CallFrame :: new () ; unsafe { frame . arg_ptr (name . sys ()) } ; let ptr = unsafe { frame . call :: < sys :: GDExtensionObjectPtr > (method_table () . get_singleton , self . object_ptr) } ; sys :: Tagged :: new (ptr , sys :: PointerTag :: MustAssertInstanceId) } # [doc = "Wire-level `is_editor_hint`."] pub fn is_editor_hint (self ,) -> bool { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < bool > (method_table () . is_editor_hint , self . object_ptr) } } } struct MethodTable { set_physics_ticks_per_second : sys :: GDExtensionMethodBindPtr , get_physics_ticks_per_second : sys :: GDExtensionMethodBindPtr , set_max_fps : sys :: GDExtensionMethodBindPtr , get_max_fps : sys :: GDExtensionMethodBindPtr , set_time_scale : sys :: GDExtensionMethodBindPtr , get_time_scale : sys :: GDExtensionMethodBindPtr , get_frames_drawn : sys :: GDExtensionMethodBindPtr , get_frames_per_second : sys :: GDExtensionMethodBindPtr , get_process_frames : sys :: GDExtensionMethodBindPtr , has_singleton : sys :: GDExtensionMethodBindPtr , get_singleton : sys :: GDExtensionMethodBindPtr , is_editor_hint : sys :: GDExtensionMethodBindPtr , } unsafe impl Sync for MethodTable { } unsafe impl Send for MethodTable { } impl MethodTable { fn load () -> Self { sys :: out ! ("Load method table of {}" , "Engine") ; let class_name = crate :: builtin :: StringName :: from ("Engine") ; Self { set_physics_ticks_per_second : crate :: meta :: load_method_bind (& class_name , "set_physics_ticks_per_second" , 1286410249i64) , get_physics_ticks_per_second : crate :: meta :: load_method_bind (& class_name , "get_physics_ticks_per_second" , 3905245786i64) , set_max_fps : crate :: meta :: load_method_bind (& class_name , "set_max_fps" , 1286410249i64) , get_max_fps : crate :: meta :: load_method_bind (& class_name , "get_max_fps" , 3905245786i64) , set_time_scale : crate :: meta :: load_method_bind (& class_name , "set_time_scale" , 373806689i64) , get_time_scale : crate :: meta :: load_method_bind (& class_name , "get_time_scale" , 191475506i64) , get_frames_drawn : crate :: meta :: load_method_bind (& class_name , "get_frames_drawn" , 2455072627i64) , get_frames_per_second : crate :: meta :: load_method_bind (& class_name , "get_frames_per_second" , 1740695150i64) , get_process_frames : crate :: meta :: load_method_bind (& class_name , "get_process_frames" , 3905245786i64) , has_singleton : crate :: meta :: load_method_bind (& class_name , "has_singleton" , 2619796661i64) , get_singleton : crate :: meta :: load_method_bind (& class_name , "get_singleton" , 1371597918i64) , is_editor_hint : crate :: meta :: load_method_bind (& class_name , "is_editor_hint" , 36873697i64) , } } } fn method_table () -> & 'static MethodTable { static TABLE : std :: sync :: OnceLock < MethodTable > = std :: sync :: OnceLock :: new () ; TABLE . get_or_init (MethodTable :: load) } mod virtuals { use super :: re_export :: IEngine ; use crate :: sys ; }
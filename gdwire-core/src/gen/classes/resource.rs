# ! [doc = "Sidecar module for class [`Resource`][crate::classes::Resource].\n\nDefines related flag and enum types, and the low-level [`Advanced`] API with wire-level signatures."] use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Resource`.\n\nBase class for serializable objects.\n\nInherits [`RefCounted`][crate::classes::RefCounted].\n\nRelated symbols:\n\n* [`resource`][crate::classes::resource]: sidecar module with enums and the low-level `Advanced` API\n* [`IResource`][crate::classes::IResource]: virtual methods\n"] # [derive (Debug)] # [repr (C)] pub struct Resource { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } # [doc = "Virtual methods for class [`Resource`][crate::classes::Resource].\n\nThese methods represent constructors (`init`) or callbacks invoked by the engine. Only methods that an implementation overrides are reported to the engine; for all others, the engine's default behavior applies."] # [allow (unused_variables)] pub trait IResource : crate :: obj :: GodotClass + crate :: private :: You_forgot_the_attribute__godot_api { # [doc = r" Constructor of the user struct, invoked by the engine whenever an instance is created."] # [doc = r""] # [doc = r" Overriding it is an alternative to `#[class(init)]`."] fn init (base : crate :: obj :: Base < Self :: Base >) -> Self where Self : Sized , { unimplemented ! () } # [doc = " Engine virtual `_setup_local_to_scene`, declared by `Resource`."] fn setup_local_to_scene (& mut self ,) { unimplemented ! () } # [doc = r" Trampoline for the engine virtual `name`, if `Self` overrides it."] # [doc (hidden)] fn __godot_virtual_call (name : & str) -> sys :: GDExtensionClassCallVirtual where Self : Sized + crate :: private :: ImplementsVirtuals , { let overridden = < Self as crate :: private :: ImplementsVirtuals > :: OVERRIDDEN ; match name { "_setup_local_to_scene" if overridden . contains (& "setup_local_to_scene") => Some (super :: virtuals :: setup_local_to_scene :: < Self >) , _ => None , } } } impl Resource { pub fn set_path (& mut self , path : & str) { let path = crate :: builtin :: GString :: from (path) ; self . advanced () . set_path (& path) ; } pub fn get_path (& self ,) -> crate :: builtin :: GString { self . advanced () . get_path () } pub fn set_name (& mut self , name : & str) { let name = crate :: builtin :: GString :: from (name) ; self . advanced () . set_name (& name) ; } pub fn get_name (& self ,) -> crate :: builtin :: GString { self . advanced () . get_name () } pub fn set_local_to_scene (& mut self , enable : bool) { self . advanced () . set_local_to_scene (enable) ; } pub fn is_local_to_scene (& self ,) -> bool { self . advanced () . is_local_to_scene () } pub fn emit_changed (& mut self ,) { self . advanced () . emit_changed () ; } # [doc = " Default values in Godot:"] # [doc = " * `subresources`: `false`"] pub fn duplicate (& self , subresources : bool) -> Option < crate :: obj :: Gd < crate :: classes :: Resource >> { let ret = self . advanced () . duplicate (subresources) ; unsafe { crate :: obj :: Gd :: from_tagged (ret) } } # [doc = " Signals declared by `Resource` itself (not inherited ones):"] # [doc = ""] # [doc = " * `changed()`"] # [doc = " * `setup_local_to_scene_requested()`"] pub const SIGNALS : & 'static [& 'static str] = & ["changed" , "setup_local_to_scene_requested"] ; # [doc = "Connects `handler` to signal `changed`; it runs each time the signal is emitted."] pub fn connect_changed (& mut self , handler : impl FnMut () + 'static) -> crate :: global :: Error { let callable = crate :: builtin :: Callable :: from_fn ("changed" , handler) ; self . connect ("changed" , & callable , 0) } # [doc = "Connects `handler` to signal `setup_local_to_scene_requested`; it runs each time the signal is emitted."] pub fn connect_setup_local_to_scene_requested (& mut self , handler : impl FnMut () + 'static) -> crate :: global :: Error { let callable = crate :: builtin :: Callable :: from_fn ("setup_local_to_scene_requested" , handler) ; self . connect ("setup_local_to_scene_requested" , & callable , 0) } # [doc = r" Engine names of all virtual methods that a user class extending this one can override."] pub const VIRTUAL_METHODS : & 'static [& 'static str] = & ["_setup_local_to_scene"] ; # [doc = r" Low-level API with wire-level signatures."] pub fn advanced (& self) -> Advanced < '_ > { Advanced :: from_instance (self) } } impl crate :: obj :: GodotClass for Resource { type Base = crate :: classes :: RefCounted ; fn class_name () -> crate :: meta :: ClassName { crate :: meta :: ClassName :: new_static ("Resource") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for Resource { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; type Declarer = crate :: obj :: bounds :: DeclEngine ; } impl crate :: obj :: EngineClass for Resource { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } fn cached_instance_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for Resource { } impl crate :: obj :: Inherits < crate :: classes :: Object > for Resource { } impl std :: ops :: Deref for Resource { type Target = crate :: classes :: RefCounted ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for Resource { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } impl crate :: obj :: cap :: GodotDefault for Resource { } # [macro_export] # [doc (hidden)] # [allow (non_snake_case)] macro_rules ! inherits_transitive_Resource { ($ Class : ident) => { impl $ crate :: obj :: Inherits < $ crate :: classes :: Resource > for $ Class { } impl $ crate :: obj :: Inherits < $ crate :: classes :: RefCounted > for $ Class { } impl $ crate :: obj :: Inherits < $ crate :: classes :: Object > for $ Class { } } } } # [doc = "Low-level methods of [`Resource`][crate::classes::Resource], with wire-level signatures.\n\nIntegers are `i64`, floats `f64`, enums their ordinal as `i64`, objects tagged raw pointers. Returned objects carry the ownership tag the caller must honor."] # [derive (Copy , Clone)] pub struct Advanced < 'a > { object_ptr : sys :: GDExtensionObjectPtr , _instance : std :: marker :: PhantomData < & 'a re_export :: Resource > , } impl < 'a > Advanced < 'a > { # [doc = r" Low-level API of `instance`."] # [doc = r""] # [doc = r" # Panics"] # [doc = r" If `instance` tracks its instance ID and the object has been freed."] pub fn from_instance (instance : & 'a re_export :: Resource) -> Self { let object_ptr = crate :: obj :: EngineClass :: __checked_object_ptr (instance) ; Self { object_ptr , _instance : std :: marker :: PhantomData , } } # [doc = r" Low-level API of a raw object."] # [doc = r""] # [doc = r" # Safety"] # [doc = r" `object_ptr` must point to a live object of this class (or a subclass) for `'a`."] pub unsafe fn from_object_ptr (object_ptr : sys :: GDExtensionObjectPtr) -> Self { Self { object_ptr , _instance : std :: marker :: PhantomData , } } pub fn object_ptr (self) -> sys :: GDExtensionObjectPtr { self . object_ptr } # [doc = "Wire-level `set_path`."] pub fn set_path (self , path : & crate :: builtin :: GString) { let mut frame = sys :: CallFrame :: new () ; unsafe { frame . arg_ptr (path . sys ()) } ; unsafe { frame . call_void (method_table () . set_path , self . object_ptr) } } # [doc = "Wire-level `get_path`."] pub fn get_path (self ,) -> crate :: builtin :: GString { let frame = sys :: CallFrame :: new () ; unsafe { crate :: builtin :: GString :: new_with_init (| ret | frame . call_into (method_table () . get_path , self . object_ptr , ret)) } } # [doc = "Wire-level `set_name`."] pub fn set_name (self , name : & crate :: builtin :: GString) { let mut frame = sys :: CallFrame :: new () ; unsafe { frame . arg_ptr (name . sys ()) } ; unsafe { frame . call_void (method_table () . set_name , self . object_ptr) } } # [doc = "Wire-level `get_name`."] pub fn get_name (self ,) -> crate :: builtin :: GString { let frame = sys :: CallFrame :: new () ; unsafe { crate :: builtin :: GString :: new_with_init (| ret | frame . call_into (method_table () . get_name , self . object_ptr , ret)) } } # [doc = "Wire-level `set_local_to_scene`."] pub fn set_local_to_scene (self , enable : bool) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < bool > (enable) ; unsafe { frame . call_void (method_table () . set_local_to_scene , self . object_ptr) } } # [doc = "Wire-level `is_local_to_scene`."] pub fn is_local_to_scene (self ,) -> bool { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < bool > (method_table () . is_local_to_scene , self . object_ptr) } } # [doc = "Wire-level `emit_changed`."] pub fn emit_changed (self ,) { let frame = sys :: CallFrame :: new () ; unsafe { frame . call_void (method_table () . emit_changed , self . object_ptr) } } # [doc = "Wire-level `duplicate`."] pub fn duplicate (self , subresources : bool) -> sys :: Tagged { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < bool > (subresources) ; let ptr = unsafe { frame . call :: < sys :: GDExtensionObjectPtr > (method_table () . duplicate , self . object_ptr) } ; sys :: Tagged :: new (ptr , sys :: PointerTag :: TransferredToHost) } } struct MethodTable { set_path : sys :: GDExtensionMethodBindPtr , get_path : sys :: GDExtensionMethodBindPtr , set_name : sys :: GDExtensionMethodBindPtr , get_name : sys :: GDExtensionMethodBindPtr , set_local_to_scene : sys :: GDExtensionMethodBindPtr , is_local_to_scene : sys :: GDExtensionMethodBindPtr , emit_changed : sys :: GDExtensionMethodBindPtr , duplicate : sys :: GDExtensionMethodBindPtr , } unsafe impl Sync for MethodTable { } unsafe impl Send for MethodTable { } impl MethodTable { fn load () -> Self { sys :: out ! ("Load method table of {}" , "Resource") ; let class_name = crate :: builtin :: StringName :: from ("Resource") ; Self { set_path : crate :: meta :: load_method_bind (& class_name , "set_path" , 83702148i64) , get_path : crate :: meta :: load_method_bind (& class_name , "get_path" , 201670096i64) , set_name : crate :: meta :: load_method_bind (& class_name , "set_name" , 83702148i64) , get_name : crate :: meta :: load_method_bind (& class_name , "get_name" , 201670096i64) , set_local_to_scene : crate :: meta :: load_method_bind (& class_name , "set_local_to_scene" , 2586408642i64) , is_local_to_scene : crate :: meta :: load_method_bind (& class_name , "is_local_to_scene" , 36873697i64) , emit_changed : crate :: meta :: load_method_bind (& class_name , "emit_changed" , 3218959716i64) , duplicate : crate :: meta :: load_method_bind (& class_name , "duplicate" , 482882304i64) , } } } fn method_table () -> & 'static MethodTable { static TABLE : std :: sync :: OnceLock < MethodTable > = std :: sync :: OnceLock :: new () ; TABLE . get_or_init (MethodTable :: load) } mod virtuals { use super :: re_export :: IResource ; use crate :: sys ; pub (super) unsafe extern "C" fn setup_local_to_scene < T : IResource > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "IResource::setup_local_to_scene" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let mut guard = storage . get_mut () ; let result = < T as IResource > :: setup_local_to_scene (& mut * guard ,) ; drop (guard) ; let () = result ; } } ,) ; } }
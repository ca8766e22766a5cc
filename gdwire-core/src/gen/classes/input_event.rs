# ! [doc = "Sidecar module for class [`InputEvent`][crate::classes::InputEvent].\n\nDefines related flag and enum types, and the low-level [`Advanced`] API with wire-level signatures."] use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `InputEvent`.\n\nAbstract base class for input events.\n\nInherits [`Resource`][crate::classes::Resource].\n\nRelated symbols:\n\n* [`input_event`][crate::classes::input_event]: sidecar module with enums and the low-level `Advanced` API\n* [`IInputEvent`][crate::classes::IInputEvent]: virtual methods\n"] # [derive (Debug)] # [repr (C)] pub struct InputEvent { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } # [doc = "Virtual methods for class [`InputEvent`][crate::classes::InputEvent].\n\nThese methods represent constructors (`init`) or callbacks invoked by the engine. Only methods that an implementation overrides are reported to the engine; for all others, the engine's default behavior applies."] # [allow (unused_variables)] pub trait IInputEvent : crate :: obj :: GodotClass + crate :: private :: You_forgot_the_attribute__godot_api { # [doc = r" Constructor of the user struct, invoked by the engine whenever an instance is created."] # [doc = r""] # [doc = r" Overriding it is an alternative to `#[class(init)]`."] fn init (base : crate :: obj :: Base < Self :: Base >) -> Self where Self : Sized , { unimplemented ! () } # [doc = " Engine virtual `_setup_local_to_scene`, declared by `Resource`."] fn setup_local_to_scene (& mut self ,) { unimplemented ! () } # [doc = r" Trampoline for the engine virtual `name`, if `Self` overrides it."] # [doc (hidden)] fn __godot_virtual_call (name : & str) -> sys :: GDExtensionClassCallVirtual where Self : Sized + crate :: private :: ImplementsVirtuals , { let overridden = < Self as crate :: private :: ImplementsVirtuals > :: OVERRIDDEN ; match name { "_setup_local_to_scene" if overridden . contains (& "setup_local_to_scene") => Some (super :: virtuals :: setup_local_to_scene :: < Self >) , _ => None , } } } impl InputEvent { # [doc = " Sets the device identifier of this event."] pub fn set_device (& mut self , device : i32) { self . advanced () . set_device (device as i64) ; } # [doc = " Returns the device identifier of this event."] pub fn get_device (& self ,) -> i32 { let ret = self . advanced () . get_device () ; ret as i32 } # [doc = " Signals declared by `InputEvent` itself (not inherited ones):"] pub const SIGNALS : & 'static [& 'static str] = & [] ; # [doc = r" Engine names of all virtual methods that a user class extending this one can override."] pub const VIRTUAL_METHODS : & 'static [& 'static str] = & ["_setup_local_to_scene"] ; # [doc = r" Low-level API with wire-level signatures."] pub fn advanced (& self) -> Advanced < '_ > { Advanced :: from_instance (self) } } impl crate :: obj :: GodotClass for InputEvent { type Base = crate :: classes :: Resource ; fn class_name () -> crate :: meta :: ClassName { crate :: meta :: ClassName :: new_static ("InputEvent") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for InputEvent { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; type Declarer = crate :: obj :: bounds :: DeclEngine ; } impl crate :: obj :: EngineClass for InputEvent { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } fn cached_instance_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: Inherits < crate :: classes :: Resource > for InputEvent { } impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for InputEvent { } impl crate :: obj :: Inherits < crate :: classes :: Object > for InputEvent { } impl std :: ops :: Deref for InputEvent { type Target = crate :: classes :: Resource ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for InputEvent { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } # [macro_export] # [doc (hidden)] # [allow (non_snake_case)] macro_rules ! inherits_transitive_InputEvent { ($ Class : ident) => { impl $ crate :: obj :: Inherits < $ crate :: classes :: InputEvent > for $ Class { } impl $ crate :: obj :: Inherits < $ crate :: classes :: Resource > for $ Class { } impl $ crate :: obj :: Inherits < $ crate :: classes :: RefCounted > for $ Class { } impl $ crate :: obj :: Inherits < $ crate :: classes :: Object > for $ Class { } } } } # [doc = "Low-level methods of [`InputEvent`][crate::classes::InputEvent], with wire-level signatures.\n\nIntegers are `i64`, floats `f64`, enums their ordinal as `i64`, objects tagged raw pointers. Returned objects carry the ownership tag the caller must honor."] # [derive (Copy , Clone)] pub struct Advanced < 'a > { object_ptr : sys :: GDExtensionObjectPtr , _instance : std :: marker :: PhantomData < & 'a re_export :: InputEvent > , } impl < 'a > Advanced < 'a > { # [doc = r" Low-level API of `instance`."] # [doc = r""] # [doc = r" # Panics"] # [doc = r" If `instance` tracks its instance ID and the object has been freed."] pub fn from_instance (instance : & 'a re_export :: InputEvent) -> Self { let object_ptr = crate :: obj :: EngineClass :: __checked_object_ptr (instance) ; Self { object_ptr , _instance : std :: marker :: PhantomData , } } # [doc = r" Low-level API of a raw object."] # [doc = r""] # [doc = r" # Safety"] # [doc = r" `object_ptr` must point to a live object of this class (or a subclass) for `'a`."] pub unsafe fn from_object_ptr (object_ptr : sys :: GDExtensionObjectPtr) -> Self { Self { object_ptr , _instance : std :: marker :: PhantomData , } } pub fn object_ptr (self) -> sys :: GDExtensionObjectPtr { self . object_ptr } # [doc = "Wire-level `set_device`."] pub fn set_device (self , device : i64) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < i64 > (device) ; unsafe { frame . call_void (method_table () . set_device , self . object_ptr) } } # [doc = "Wire-level `get_device`."] pub fn get_device (self ,) -> i64 { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < i64 > (method_table () . get_device , self . object_ptr) } } } struct MethodTable { set_device : sys :: GDExtensionMethodBindPtr , get_device : sys :: GDExtensionMethodBindPtr , } unsafe impl Sync for MethodTable { } unsafe impl Send for MethodTable { } impl MethodTable { fn load () -> Self { sys :: out ! ("Load method table of {}" , "InputEvent") ; let class_name = crate :: builtin :: StringName :: from ("InputEvent") ; Self { set_device : crate :: meta :: load_method_bind (& class_name , "set_device" , 1286410249i64) , get_device : crate :: meta :: load_method_bind (& class_name , "get_device" , 3905245786i64) , } } } fn method_table () -> & 'static MethodTable { static TABLE : std :: sync :: OnceLock < MethodTable > = std :: sync :: OnceLock :: new () ; TABLE . get_or_init (MethodTable :: load) } mod virtuals { use super :: re_export :: IInputEvent ; use crate :: sys ; pub (super) unsafe extern "C" fn setup_local_to_scene < T : IInputEvent > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "IInputEvent::setup_local_to_scene" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let mut guard = storage . get_mut () ; let result = < T as IInputEvent > :: setup_local_to_scene (& mut * guard ,) ; drop (guard) ; let () = result ; } } ,) ; } }
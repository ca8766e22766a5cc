# ! [doc = "Sidecar module for class [`Object`][crate::classes::Object].\n\nDefines related flag and enum types, and the low-level [`Advanced`] API with wire-level signatures."] use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `Object`.\n\nBase class for all other classes in the engine.\n\nThis is the base class for all other classes at the root of the hierarchy. Every instance of `Object` can be stored in a [`Gd`][crate::obj::Gd] smart pointer.\n\nRelated symbols:\n\n* [`object`][crate::classes::object]: sidecar module with enums and the low-level `Advanced` API\n* [`IObject`][crate::classes::IObject]: virtual methods\n\n# Description\n\nAn advanced `Variant` type. All classes in the engine inherit from Object. Use `connect()` to subscribe to a [signal].\n\nMethods without a binding, since their signatures use unsupported types: `emit_signal`, `get_meta`.\n"] # [derive (Debug)] # [repr (C)] pub struct Object { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } # [doc = "Virtual methods for class [`Object`][crate::classes::Object].\n\nThese methods represent constructors (`init`) or callbacks invoked by the engine. Only methods that an implementation overrides are reported to the engine; for all others, the engine's default behavior applies."] # [allow (unused_variables)] pub trait IObject : crate :: obj :: GodotClass + crate :: private :: You_forgot_the_attribute__godot_api { # [doc = r" Constructor of the user struct, invoked by the engine whenever an instance is created."] # [doc = r""] # [doc = r" Overriding it is an alternative to `#[class(init)]`."] fn init (base : crate :: obj :: Base < Self :: Base >) -> Self where Self : Sized , { unimplemented ! () } # [doc = r" Trampoline for the engine virtual `name`, if `Self` overrides it."] # [doc (hidden)] fn __godot_virtual_call (name : & str) -> sys :: GDExtensionClassCallVirtual where Self : Sized + crate :: private :: ImplementsVirtuals , { let overridden = < Self as crate :: private :: ImplementsVirtuals > :: OVERRIDDEN ; match name { _ => None , } } } impl Object { pub const NOTIFICATION_POSTINITIALIZE : i32 = 0 ; pub const NOTIFICATION_PREDELETE : i32 = 1 ; # [doc = " Returns the object's built-in class name, as a `String`."] pub fn get_class (& self ,) -> crate :: builtin :: GString { self . advanced () . get_class () } pub fn is_class (& self , class : & str) -> bool { let class = crate :: builtin :: GString :: from (class) ; self . advanced () . is_class (& class) } pub fn get_instance_id (& self ,) -> u64 { let ret = self . advanced () . get_instance_id () ; ret as u64 } pub fn set_block_signals (& mut self , enable : bool) { self . advanced () . set_block_signals (enable) ; } pub fn is_blocking_signals (& self ,) -> bool { self . advanced () . is_blocking_signals () } # [doc = " Default values in Godot:"] # [doc = " * `reversed`: `false`"] pub fn notification (& mut self , what : i32 , reversed : bool) { self . advanced () . notification (what as i64 , reversed) ; } pub fn has_signal (& self , signal : & str) -> bool { let signal = crate :: builtin :: StringName :: from (signal) ; self . advanced () . has_signal (& signal) } # [doc = " Connects a `signal` by name to a `callable`. Returns `OK` on success."] # [doc = ""] # [doc = " Default values in Godot:"] # [doc = " * `flags`: `0`"] pub fn connect (& mut self , signal : & str , callable : & crate :: builtin :: Callable , flags : u32) -> crate :: global :: Error { let signal = crate :: builtin :: StringName :: from (signal) ; let ret = self . advanced () . connect (& signal , callable , flags as i64) ; < crate :: global :: Error as crate :: obj :: EngineEnum > :: from_ord (ret as i32) } pub fn disconnect (& mut self , signal : & str , callable : & crate :: builtin :: Callable) { let signal = crate :: builtin :: StringName :: from (signal) ; self . advanced () . disconnect (& signal , callable) ; } pub fn is_connected (& self , signal : & str , callable : & crate :: builtin :: Callable) -> bool { let signal = crate :: builtin :: StringName :: from (signal) ; self . advanced () . is_connected (& signal , callable) } # [doc = " Signals declared by `Object` itself (not inherited ones):"] # [doc = ""] # [doc = " * `script_changed()`"] # [doc = " * `property_list_changed()`"] pub const SIGNALS : & 'static [& 'static str] = & ["script_changed" , "property_list_changed"] ; # [doc = "Connects `handler` to signal `script_changed`; it runs each time the signal is emitted."] pub fn connect_script_changed (& mut self , handler : impl FnMut () + 'static) -> crate :: global :: Error { let callable = crate :: builtin :: Callable :: from_fn ("script_changed" , handler) ; self . connect ("script_changed" , & callable , 0) } # [doc = "Connects `handler` to signal `property_list_changed`; it runs each time the signal is emitted."] pub fn connect_property_list_changed (& mut self , handler : impl FnMut () + 'static) -> crate :: global :: Error { let callable = crate :: builtin :: Callable :: from_fn ("property_list_changed" , handler) ; self . connect ("property_list_changed" , & callable , 0) } # [doc = r" Engine names of all virtual methods that a user class extending this one can override."] pub const VIRTUAL_METHODS : & 'static [& 'static str] = & [] ; # [doc = r" Low-level API with wire-level signatures."] pub fn advanced (& self) -> Advanced < '_ > { Advanced :: from_instance (self) } } impl crate :: obj :: GodotClass for Object { type Base = crate :: obj :: NoBase ; fn class_name () -> crate :: meta :: ClassName { crate :: meta :: ClassName :: new_static ("Object") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for Object { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemDynamic ; type Declarer = crate :: obj :: bounds :: DeclEngine ; } impl crate :: obj :: EngineClass for Object { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } fn cached_instance_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: cap :: GodotDefault for Object { } # [macro_export] # [doc (hidden)] # [allow (non_snake_case)] macro_rules ! inherits_transitive_Object { ($ Class : ident) => { impl $ crate :: obj :: Inherits < $ crate :: classes :: Object > for $ Class { } } } } # [doc = "Godot enum `ConnectFlags`."] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [repr (transparent)] pub struct ConnectFlags { ord : i32 } impl ConnectFlags { # [doc (alias = "CONNECT_DEFERRED")] # [doc = "Godot enumerator name: `CONNECT_DEFERRED`"] pub const DEFERRED : Self = Self { ord : 1 } ; # [doc (alias = "CONNECT_PERSIST")] # [doc = "Godot enumerator name: `CONNECT_PERSIST`"] pub const PERSIST : Self = Self { ord : 2 } ; # [doc (alias = "CONNECT_ONE_SHOT")] # [doc = "Godot enumerator name: `CONNECT_ONE_SHOT`"] pub const ONE_SHOT : Self = Self { ord : 4 } ; # [doc (alias = "CONNECT_REFERENCE_COUNTED")] # [doc = "Godot enumerator name: `CONNECT_REFERENCE_COUNTED`"] pub const REFERENCE_COUNTED : Self = Self { ord : 8 } ; } impl crate :: obj :: EngineEnum for ConnectFlags { fn from_ord (ord : i32) -> Self { Self { ord } } fn try_from_ord (ord : i32) -> Option < Self > { match ord { 1 | 2 | 4 | 8 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 1 => "DEFERRED" , 2 => "PERSIST" , 4 => "ONE_SHOT" , 8 => "REFERENCE_COUNTED" , _ => "" , } } } impl std :: fmt :: Debug for ConnectFlags { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = crate :: obj :: EngineEnum :: as_str (self) ; if enumerator . is_empty () { f . debug_struct ("ConnectFlags") . field ("ord" , & self . ord) . finish () } else { f . write_str (enumerator) } } } # [doc = "Low-level methods of [`Object`][crate::classes::Object], with wire-level signatures.\n\nIntegers are `i64`, floats `f64`, enums their ordinal as `i64`, objects tagged raw pointers. Returned objects carry the ownership tag the caller must honor."] # [derive (Copy , Clone)] pub struct Advanced < 'a > { object_ptr : sys :: GDExtensionObjectPtr , _instance : std :: marker :: PhantomData < & 'a re_export :: Object > , } impl < 'a > Advanced < 'a > { # [doc = r" Low-level API of `instance`."] # [doc = r""] # [doc = r" # Panics"] # [doc = r" If `instance` tracks its instance ID and the object has been freed."] pub fn from_instance (instance : & 'a re_export :: Object) -> Self { let object_ptr = crate :: obj :: EngineClass :: __checked_object_ptr (instance) ; Self { object_ptr , _instance : std :: marker :: PhantomData , } } # [doc = r" Low-level API of a raw object."] # [doc = r""] # [doc = r" # Safety"] # [doc = r" `object_ptr` must point to a live object of this class (or a subclass) for `'a`."] pub unsafe fn from_object_ptr (object_ptr : sys :: GDExtensionObjectPtr) -> Self { Self { object_ptr , _instance : std :: marker :: PhantomData , } } pub fn object_ptr (self) -> sys :: GDExtensionObjectPtr { self . object_ptr } # [doc = "Wire-level `get_class`."] pub fn get_class (self ,) -> crate :: builtin :: GString { let frame = sys :: CallFrame :: new () ; unsafe { crate :: builtin :: GString :: new_with_init (| ret | frame . call_into (method_table () . get_class , self . object_ptr , ret)) } } # [doc = "Wire-level `is_class`."] pub fn is_class (self , class : & crate :: builtin :: GString) -> bool { let mut frame = sys :: CallFrame :: new () ; unsafe { frame . arg_ptr (class . sys ()) } ; unsafe { frame . call :: < bool > (method_table () . is_class , self . object_ptr) } } # [doc = "Wire-level `get_instance_id`."] pub fn get_instance_id (self ,) -> i64 { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < i64 > (method_table () . get_instance_id , self . object_ptr) } } # [doc = "Wire-level `set_block_signals`."] pub fn set_block_signals (self , enable : bool) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < bool > (enable) ; unsafe { frame . call_void (method_table () . set_block_signals , self . object_ptr) } } # [doc = "Wire-level `is_blocking_signals`."] pub fn is_blocking_signals (self ,) -> bool { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < bool > (method_table () . is_blocking_signals , self . object_ptr) } } # [doc = "Wire-level `notification`."] pub fn notification (self , what : i64 , reversed : bool) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < i64 > (what) ; frame . arg :: < bool > (reversed) ; unsafe { frame . call_void (method_table () . notification , self . object_ptr) } } # [doc = "Wire-level `has_signal`."] pub fn has_signal (self , signal : & crate :: builtin :: StringName) -> bool { let mut frame = sys :: CallFrame :: new () ; unsafe { frame . arg_ptr (signal . sys ()) } ; unsafe { frame . call :: < bool > (method_table () . has_signal , self . object_ptr) } } # [doc = "Wire-level `connect`."] pub fn connect (self , signal : & crate :: builtin :: StringName , callable : & crate :: builtin :: Callable , flags : i64) -> i64 { let mut frame = sys :: CallFrame :: new () ; unsafe { frame . arg_ptr (signal . sys ()) } ; unsafe { frame . arg_ptr (callable . sys ()) } ; frame . arg :: < i64 > (flags) ; unsafe { frame . call :: < i64 > (method_table () . connect , self . object_ptr) } } # [doc = "Wire-level `disconnect`."] pub fn disconnect (self , signal : & crate :: builtin :: StringName , callable : & crate :: builtin :: Callable) { let mut frame = sys :: CallFrame :: new () ; unsafe { frame . arg_ptr (signal . sys ()) } ; unsafe { frame . arg_ptr (callable . sys ()) } ; unsafe { frame . call_void (method_table () . disconnect , self . object_ptr) } } # [doc = "Wire-level `is_connected`."] pub fn is_connected (self , signal : & crate :: builtin :: StringName , callable : & crate :: builtin :: Callable) -> bool { let mut frame = sys :: CallFrame :: new () ; unsafe { frame . arg_ptr (signal . sys ()) } ; unsafe { frame . arg_ptr (callable . sys ()) } ; unsafe { frame . call :: < bool > (method_table () . is_connected , self . object_ptr) } } } struct MethodTable { get_class : sys :: GDExtensionMethodBindPtr , is_class : sys :: GDExtensionMethodBindPtr , get_instance_id : sys :: GDExtensionMethodBindPtr , set_block_signals : sys :: GDExtensionMethodBindPtr , is_blocking_signals : sys :: GDExtensionMethodBindPtr , notification : sys :: GDExtensionMethodBindPtr , has_signal : sys :: GDExtensionMethodBindPtr , connect : sys :: GDExtensionMethodBindPtr , disconnect : sys :: GDExtensionMethodBindPtr , is_connected : sys :: GDExtensionMethodBindPtr , } unsafe impl Sync for MethodTable { } unsafe impl Send for MethodTable { } impl MethodTable { fn load () -> Self { sys :: out ! ("Load method table of {}" , "Object") ; let class_name = crate :: builtin :: StringName :: from ("Object") ; Self { get_class : crate :: meta :: load_method_bind (& class_name , "get_class" , 201670096i64) , is_class : crate :: meta :: load_method_bind (& class_name , "is_class" , 3927539163i64) , get_instance_id : crate :: meta :: load_method_bind (& class_name , "get_instance_id" , 3905245786i64) , set_block_signals : crate :: meta :: load_method_bind (& class_name , "set_block_signals" , 2586408642i64) , is_blocking_signals : crate :: meta :: load_method_bind (& class_name , "is_blocking_signals" , 36873697i64) , notification : crate :: meta :: load_method_bind (& class_name , "notification" , 4023243586i64) , has_signal : crate :: meta :: load_method_bind (& class_name , "has_signal" , 2619796661i64) , connect : crate :: meta :: load_method_bind (& class_name , "connect" , 1518946055i64) , disconnect : crate :: meta :: load_method_bind (& class_name , "disconnect" , 1874754934i64) , is_connected : crate :: meta :: load_method_bind (& class_name , "is_connected" , 768136979i64) , } } } fn method_table () -> & 'static MethodTable { static TABLE : std :: sync :: OnceLock < MethodTable > = std :: sync :: OnceLock :: new () ; TABLE . get_or_init (MethodTable :: load) } mod virtuals { use super :: re_export :: IObject ; use crate :: sys ; }
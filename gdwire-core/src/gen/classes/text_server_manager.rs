# ! [doc = "Sidecar module for class [`TextServerManager`][crate::classes::TextServerManager].\n\nDefines related flag and enum types, and the low-level [`Advanced`] API with wire-level signatures."] use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `TextServerManager`.\n\nA singleton for managing [`TextServer`][crate::classes::TextServer] implementations.\n\nInherits [`Object`][crate::classes::Object].\n\nRelated symbols:\n\n* [`text_server_manager`][crate::classes::text_server_manager]: sidecar module with enums and the low-level `Advanced` API\n* [`ITextServerManager`][crate::classes::ITextServerManager]: virtual methods\n\nThis class is a singleton; access it through [`TextServerManager::singleton()`].\n"] # [derive (Debug)] # [repr (C)] pub struct TextServerManager { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } # [doc = "Virtual methods for class [`TextServerManager`][crate::classes::TextServerManager].\n\nThese methods represent constructors (`init`) or callbacks invoked by the engine. Only methods that an implementation overrides are reported to the engine; for all others, the engine's default behavior applies."] # [allow (unused_variables)] pub trait ITextServerManager : crate :: obj :: GodotClass + crate :: private :: You_forgot_the_attribute__godot_api { # [doc = r" Constructor of the user struct, invoked by the engine whenever an instance is created."] # [doc = r""] # [doc = r" Overriding it is an alternative to `#[class(init)]`."] fn init (base : crate :: obj :: Base < Self :: Base >) -> Self where Self : Sized , { unimplemented ! () } # [doc = r" Trampoline for the engine virtual `name`, if `Self` overrides it."] # [doc (hidden)] fn __godot_virtual_call (name : & str) -> sys :: GDExtensionClassCallVirtual where Self : Sized + crate :: private :: ImplementsVirtuals , { let overridden = < Self as crate :: private :: ImplementsVirtuals > :: OVERRIDDEN ; match name { _ => None , } } } impl TextServerManager { # [doc = r" The engine-wide instance of this class."] # [doc = r""] # [doc = r" Looked up once; later calls return a handle to the same object."] pub fn singleton () -> crate :: obj :: Gd < Self > { static CACHE : crate :: obj :: SingletonCache = crate :: obj :: SingletonCache :: new () ; CACHE . get :: < Self > () } pub fn add_interface (& mut self , interface : & crate :: obj :: Gd < impl crate :: obj :: Inherits < crate :: classes :: TextServer >>) { self . advanced () . add_interface (interface . to_borrowed_arg ()) ; } pub fn get_interface_count (& self ,) -> i32 { let ret = self . advanced () . get_interface_count () ; ret as i32 } pub fn remove_interface (& mut self , interface : & crate :: obj :: Gd < impl crate :: obj :: Inherits < crate :: classes :: TextServer >>) { self . advanced () . remove_interface (interface . to_borrowed_arg ()) ; } pub fn get_interface (& self , idx : i32) -> Option < crate :: obj :: Gd < crate :: classes :: TextServer >> { let ret = self . advanced () . get_interface (idx as i64) ; unsafe { crate :: obj :: Gd :: from_tagged (ret) } } pub fn find_interface (& self , name : & str) -> Option < crate :: obj :: Gd < crate :: classes :: TextServer >> { let name = crate :: builtin :: GString :: from (name) ; let ret = self . advanced () . find_interface (& name) ; unsafe { crate :: obj :: Gd :: from_tagged (ret) } } pub fn set_primary_interface (& mut self , index : & crate :: obj :: Gd < impl crate :: obj :: Inherits < crate :: classes :: TextServer >>) { self . advanced () . set_primary_interface (index . to_borrowed_arg ()) ; } pub fn get_primary_interface (& self ,) -> Option < crate :: obj :: Gd < crate :: classes :: TextServer >> { let ret = self . advanced () . get_primary_interface () ; unsafe { crate :: obj :: Gd :: from_tagged (ret) } } # [doc = " Signals declared by `TextServerManager` itself (not inherited ones):"] # [doc = ""] # [doc = " * `interface_added(interface_name: StringName)`"] # [doc = " * `interface_removed(interface_name: StringName)`"] pub const SIGNALS : & 'static [& 'static str] = & ["interface_added" , "interface_removed"] ; # [doc = r" Engine names of all virtual methods that a user class extending this one can override."] pub const VIRTUAL_METHODS : & 'static [& 'static str] = & [] ; # [doc = r" Low-level API with wire-level signatures."] pub fn advanced (& self) -> Advanced < '_ > { Advanced :: from_instance (self) } } impl crate :: obj :: GodotClass for TextServerManager { type Base = crate :: classes :: Object ; fn class_name () -> crate :: meta :: ClassName { crate :: meta :: ClassName :: new_static ("TextServerManager") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Servers ; } unsafe impl crate :: obj :: Bounds for TextServerManager { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; type Declarer = crate :: obj :: bounds :: DeclEngine ; } impl crate :: obj :: EngineClass for TextServerManager { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } fn cached_instance_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: Inherits < crate :: classes :: Object > for TextServerManager { } impl std :: ops :: Deref for TextServerManager { type Target = crate :: classes :: Object ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for TextServerManager { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } # [macro_export] # [doc (hidden)] # [allow (non_snake_case)] macro_rules ! inherits_transitive_TextServerManager { ($ Class : ident) => { impl $ crate :: obj :: Inherits < $ crate :: classes :: TextServerManager > for $ Class { } impl $ crate :: obj :: Inherits < $ crate :: classes :: Object > for $ Class { } } } } # [doc = "Low-level methods of [`TextServerManager`][crate::classes::TextServerManager], with wire-level signatures.\n\nIntegers are `i64`, floats `f64`, enums their ordinal as `i64`, objects tagged raw pointers. Returned objects carry the ownership tag the caller must honor."] # [derive (Copy , Clone)] pub struct Advanced < 'a > { object_ptr : sys :: GDExtensionObjectPtr , _instance : std :: marker :: PhantomData < & 'a re_export :: TextServerManager > , } impl < 'a > Advanced < 'a > { # [doc = r" Low-level API of `instance`."] # [doc = r""] # [doc = r" # Panics"] # [doc = r" If `instance` tracks its instance ID and the object has been freed."] pub fn from_instance (instance : & 'a re_export :: TextServerManager) -> Self { let object_ptr = crate :: obj :: EngineClass :: __checked_object_ptr (instance) ; Self { object_ptr , _instance : std :: marker :: PhantomData , } } # [doc = r" Low-level API of a raw object."] # [doc = r""] # [doc = r" # Safety"] # [doc = r" `object_ptr` must point to a live object of this class (or a subclass) for `'a`."] pub unsafe fn from_object_ptr (object_ptr : sys :: GDExtensionObjectPtr) -> Self { Self { object_ptr , _instance : std :: marker :: PhantomData , } } pub fn object_ptr (self) -> sys :: GDExtensionObjectPtr { self . object_ptr } # [doc = "Wire-level `add_interface`."] pub fn add_interface (self , interface : sys :: Tagged) { let mut frame = sys :: CallFrame :: new () ; frame . arg (interface . ptr ()) ; unsafe { frame . call_void (method_table () . add_interface , self . object_ptr) } } # [doc = "Wire-level `get_interface_count`."] pub fn get_interface_count (self ,) -> i64 { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < i64 > (method_table () . get_interface_count , self . object_ptr) } } # [doc = "Wire-level `remove_interface`."] pub fn remove_interface (self , interface : sys :: Tagged) { let mut frame = sys :: CallFrame :: new () ; frame . arg (interface . ptr ()) ; unsafe { frame . call_void (method_table () . remove_interface , self . object_ptr) } } # [doc = "Wire-level `get_interface`."] pub fn get_interface (self , idx : i64) -> sys :: Tagged { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < i64 > (idx) ; let ptr = unsafe { frame . call :: < sys :: GDExtensionObjectPtr > (method_table () . get_interface , self . object_ptr) } ; sys :: Tagged :: new (ptr , sys :: PointerTag :: TransferredToHost) } # [doc = "Wire-level `find_interface`."] pub fn find_interface (self , name : & crate :: builtin :: GString) -> sys :: Tagged { let mut frame = sys :: CallFrame :: new () ; unsafe { frame . arg_ptr (name . sys ()) } ; let ptr = unsafe { frame . call :: < sys :: GDExtensionObjectPtr > (method_table () . find_interface , self . object_ptr) } ; sys :: Tagged :: new (ptr , sys :: PointerTag :: TransferredToHost) } # [doc = "Wire-level `set_primary_interface`."] pub fn set_primary_interface (self , index : sys :: Tagged) { let mut frame = sys :: CallFrame :: new () ; frame . arg (index . ptr ()) ; unsafe { frame . call_void (method_table () . set_primary_interface , self . object_ptr) } } # [doc = "Wire-level `get_primary_interface`."] pub fn get_primary_interface (self ,) -> sys :: Tagged { let frame = sys :: CallFrame :: new () ; let ptr = unsafe { frame . call :: < sys :: GDExtensionObjectPtr > (method_table () . get_primary_interface , self . object_ptr) } ; sys :: Tagged :: new (ptr , sys :: PointerTag :: TransferredToHost) } } struct MethodTable { add_interface : sys :: GDExtensionMethodBindPtr , get_interface_count : sys :: GDExtensionMethodBindPtr , remove_interface : sys :: GDExtensionMethodBindPtr , get_interface : sys :: GDExtensionMethodBindPtr , find_interface : sys :: GDExtensionMethodBindPtr , set_primary_interface : sys :: GDExtensionMethodBindPtr , get_primary_interface : sys :: GDExtensionMethodBindPtr , } unsafe impl Sync for MethodTable { } unsafe impl Send for MethodTable { } impl MethodTable { fn load () -> Self { sys :: out ! ("Load method table of {}" , "TextServerManager") ; let class_name = crate :: builtin :: StringName :: from ("TextServerManager") ; Self { add_interface : crate :: meta :: load_method_bind (& class_name , "add_interface" , 1799689403i64) , get_interface_count : crate :: meta :: load_method_bind (& class_name , "get_interface_count" , 3905245786i64) , remove_interface : crate :: meta :: load_method_bind (& class_name , "remove_interface" , 1799689403i64) , get_interface : crate :: meta :: load_method_bind (& class_name , "get_interface" , 1672475555i64) , find_interface : crate :: meta :: load_method_bind (& class_name , "find_interface" , 2240905781i64) , set_primary_interface : crate :: meta :: load_method_bind (& class_name , "set_primary_interface" , 1799689403i64) , get_primary_interface : crate :: meta :: load_method_bind (& class_name , "get_primary_interface" , 905850878i64) , } } } fn method_table () -> & 'static MethodTable { static TABLE : std :: sync :: OnceLock < MethodTable > = std :: sync :: OnceLock :: new () ; TABLE . get_or_init (MethodTable :: load) } mod virtuals { use super :: re_export :: ITextServerManager ; use crate :: sys ; }
# ! [doc = "Sidecar module for class [`RefCounted`][crate::classes::RefCounted].\n\nDefines related flag and enum types, and the low-level [`Advanced`] API with wire-level signatures."] use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `RefCounted`.\n\nBase class for reference-counted objects.\n\nInherits [`Object`][crate::classes::Object].\n\nRelated symbols:\n\n* [`ref_counted`][crate::classes::ref_counted]: sidecar module with enums and the low-level `Advanced` API\n* [`IRefCounted`][crate::classes::IRefCounted]: virtual methods\n"] # [derive (Debug)] # [repr (C)] pub struct RefCounted { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } # [doc = "Virtual methods for class [`RefCounted`][crate::classes::RefCounted].\n\nThese methods represent constructors (`init`) or callbacks invoked by the engine. Only methods that an implementation overrides are reported to the engine; for all others, the engine's default behavior applies."] # [allow (unused_variables)] pub trait IRefCounted : crate :: obj :: GodotClass + crate :: private :: You_forgot_the_attribute__godot_api { # [doc = r" Constructor of the user struct, invoked by the engine whenever an instance is created."] # [doc = r""] # [doc = r" Overriding it is an alternative to `#[class(init)]`."] fn init (base : crate :: obj :: Base < Self :: Base >) -> Self where Self : Sized , { unimplemented ! () } # [doc = r" Trampoline for the engine virtual `name`, if `Self` overrides it."] # [doc (hidden)] fn __godot_virtual_call (name : & str) -> sys :: GDExtensionClassCallVirtual where Self : Sized + crate :: private :: ImplementsVirtuals , { let overridden = < Self as crate :: private :: ImplementsVirtuals > :: OVERRIDDEN ; match name { _ => None , } } } impl RefCounted { pub fn get_reference_count (& self ,) -> i32 { let ret = self . advanced () . get_reference_count () ; ret as i32 } # [doc = " Signals declared by `RefCounted` itself (not inherited ones):"] pub const SIGNALS : & 'static [& 'static str] = & [] ; # [doc = r" Engine names of all virtual methods that a user class extending this one can override."] pub const VIRTUAL_METHODS : & 'static [& 'static str] = & [] ; # [doc = r" Low-level API with wire-level signatures."] pub fn advanced (& self) -> Advanced < '_ > { Advanced :: from_instance (self) } } impl crate :: obj :: GodotClass for RefCounted { type Base = crate :: classes :: Object ; fn class_name () -> crate :: meta :: ClassName { crate :: meta :: ClassName :: new_static ("RefCounted") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for RefCounted { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; type Declarer = crate :: obj :: bounds :: DeclEngine ; } impl crate :: obj :: EngineClass for RefCounted { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } fn cached_instance_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: Inherits < crate :: classes :: Object > for RefCounted { } impl std :: ops :: Deref for RefCounted { type Target = crate :: classes :: Object ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for RefCounted { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } impl crate :: obj :: cap :: GodotDefault for RefCounted { } # [macro_export] # [doc (hidden)] # [allow (non_snake_case)] macro_rules ! inherits_transitive_RefCounted { ($ Class : ident) => { impl $ crate :: obj :: Inherits < $ crate :: classes :: RefCounted > for $ Class { } impl $ crate :: obj :: Inherits < $ crate :: classes :: Object > for $ Class { } } } } # [doc = "Low-level methods of [`RefCounted`][crate::classes::RefCounted], with wire-level signatures.\n\nIntegers are `i64`, floats `f64`, enums their ordinal as `i64`, objects tagged raw pointers. Returned objects carry the ownership tag the caller must honor."] # [derive (Copy , Clone)] pub struct Advanced < 'a > { object_ptr : sys :: GDExtensionObjectPtr , _instance : std :: marker :: PhantomData < & 'a re_export :: RefCounted > , } impl < 'a > Advanced < 'a > { # [doc = r" Low-level API of `instance`."] # [doc = r""] # [doc = r" # Panics"] # [doc = r" If `instance` tracks its instance ID and the object has been freed."] pub fn from_instance (instance : & 'a re_export :: RefCounted) -> Self { let object_ptr = crate :: obj :: EngineClass :: __checked_object_ptr (instance) ; Self { object_ptr , _instance : std :: marker :: PhantomData , } } # [doc = r" Low-level API of a raw object."] # [doc = r""] # [doc = r" # Safety"] # [doc = r" `object_ptr` must point to a live object of this class (or a subclass) for `'a`."] pub unsafe fn from_object_ptr (object_ptr : sys :: GDExtensionObjectPtr) -> Self { Self { object_ptr , _instance : std :: marker :: PhantomData , } } pub fn object_ptr (self) -> sys :: GDExtensionObjectPtr { self . object_ptr } # [doc = "Wire-level `init_ref`."] pub fn init_ref (self ,) -> bool { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < bool > (method_table () . init_ref , self . object_ptr) } } # [doc = "Wire-level `reference`."] pub fn reference (self ,) -> bool { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < bool > (method_table () . reference , self . object_ptr) } } # [doc = "Wire-level `unreference`."] pub fn unreference (self ,) -> bool { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < bool > (method_table () . unreference , self . object_ptr) } } # [doc = "Wire-level `get_reference_count`."] pub fn get_reference_count (self ,) -> i64 { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < i64 > (method_table () . get_reference_count , self . object_ptr) } } } struct MethodTable { init_ref : sys :: GDExtensionMethodBindPtr , reference : sys :: GDExtensionMethodBindPtr , unreference : sys :: GDExtensionMethodBindPtr , get_reference_count : sys :: GDExtensionMethodBindPtr , } unsafe impl Sync for MethodTable { } unsafe impl Send for MethodTable { } impl MethodTable { fn load () -> Self { sys :: out ! ("Load method table of {}" , "RefCounted") ; let class_name = crate :: builtin :: StringName :: from ("RefCounted") ; Self { init_ref : crate :: meta :: load_method_bind (& class_name , "init_ref" , 2240911060i64) , reference : crate :: meta :: load_method_bind (& class_name , "reference" , 2240911060i64) , unreference : crate :: meta :: load_method_bind (& class_name , "unreference" , 2240911060i64) , get_reference_count : crate :: meta :: load_method_bind (& class_name , "get_reference_count" , 3905245786i64) , } } } fn method_table () -> & 'static MethodTable { static TABLE : std :: sync :: OnceLock < MethodTable > = std :: sync :: OnceLock :: new () ; TABLE . get_or_init (MethodTable :: load) } mod virtuals { use super :: re_export :: IRefCounted ; use crate :: sys ; }
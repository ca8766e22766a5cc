# ! [doc = "Sidecar module for class [`TextServer`][crate::classes::TextServer].\n\nDefines related flag and enum types, and the low-level [`Advanced`] API with wire-level signatures."] use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `TextServer`.\n\nA server interface for font management and text rendering.\n\nInherits [`RefCounted`][crate::classes::RefCounted].\n\nRelated symbols:\n\n* [`text_server`][crate::classes::text_server]: sidecar module with enums and the low-level `Advanced` API\n* [`ITextServer`][crate::classes::ITextServer]: virtual methods\n"] # [derive (Debug)] # [repr (C)] pub struct TextServer { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } # [doc = "Virtual methods for class [`TextServer`][crate::classes::TextServer].\n\nThese methods represent constructors (`init`) or callbacks invoked by the engine. Only methods that an implementation overrides are reported to the engine; for all others, the engine's default behavior applies."] # [allow (unused_variables)] pub trait ITextServer : crate :: obj :: GodotClass + crate :: private :: You_forgot_the_attribute__godot_api { # [doc = r" Constructor of the user struct, invoked by the engine whenever an instance is created."] # [doc = r""] # [doc = r" Overriding it is an alternative to `#[class(init)]`."] fn init (base : crate :: obj :: Base < Self :: Base >) -> Self where Self : Sized , { unimplemented ! () } # [doc = r" Trampoline for the engine virtual `name`, if `Self` overrides it."] # [doc (hidden)] fn __godot_virtual_call (name : & str) -> sys :: GDExtensionClassCallVirtual where Self : Sized + crate :: private :: ImplementsVirtuals , { let overridden = < Self as crate :: private :: ImplementsVirtuals > :: OVERRIDDEN ; match name { _ => None , } } } impl TextServer { pub fn has_feature (& self , feature : crate :: classes :: text_server :: Feature) -> bool { self . advanced () . has_feature (crate :: obj :: EngineBitfield :: ord (feature) as i64) } pub fn get_name (& self ,) -> crate :: builtin :: GString { self . advanced () . get_name () } pub fn get_features (& self ,) -> i64 { self . advanced () . get_features () } # [doc = " Signals declared by `TextServer` itself (not inherited ones):"] pub const SIGNALS : & 'static [& 'static str] = & [] ; # [doc = r" Engine names of all virtual methods that a user class extending this one can override."] pub const VIRTUAL_METHODS : & 'static [& 'static str] = & [] ; # [doc = r" Low-level API with wire-level signatures."] pub fn advanced (& self) -> Advanced < '_ > { Advanced :: from_instance (self) } } impl crate :: obj :: GodotClass for TextServer { type Base = crate :: classes :: RefCounted ; fn class_name () -> crate :: meta :: ClassName { crate :: meta :: ClassName :: new_static ("TextServer") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Servers ; } unsafe impl crate :: obj :: Bounds for TextServer { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; type Declarer = crate :: obj :: bounds :: DeclEngine ; } impl crate :: obj :: EngineClass for TextServer { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } fn cached_instance_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for TextServer { } impl crate :: obj :: Inherits < crate :: classes :: Object > for TextServer { } impl std :: ops :: Deref for TextServer { type Target = crate :: classes :: RefCounted ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for TextServer { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } # [macro_export] # [doc (hidden)] # [allow (non_snake_case)] macro_rules ! inherits_transitive_TextServer { ($ Class : ident) => { impl $ crate :: obj :: Inherits < $ crate :: classes :: TextServer > for $ Class { } impl $ crate :: obj :: Inherits < $ crate :: classes :: RefCounted > for $ Class { } impl $ crate :: obj :: Inherits < $ crate :: classes :: Object > for $ Class { } } } } # [doc = "Godot enum `Direction`."] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [repr (transparent)] pub struct Direction { ord : i32 } impl Direction { # [doc (alias = "DIRECTION_AUTO")] # [doc = "Godot enumerator name: `DIRECTION_AUTO`"] pub const AUTO : Self = Self { ord : 0 } ; # [doc (alias = "DIRECTION_LTR")] # [doc = "Godot enumerator name: `DIRECTION_LTR`"] pub const LTR : Self = Self { ord : 1 } ; # [doc (alias = "DIRECTION_RTL")] # [doc = "Godot enumerator name: `DIRECTION_RTL`"] pub const RTL : Self = Self { ord : 2 } ; # [doc (alias = "DIRECTION_INHERITED")] # [doc = "Godot enumerator name: `DIRECTION_INHERITED`"] pub const INHERITED : Self = Self { ord : 3 } ; } impl crate :: obj :: EngineEnum for Direction { fn from_ord (ord : i32) -> Self { Self { ord } } fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "AUTO" , 1 => "LTR" , 2 => "RTL" , 3 => "INHERITED" , _ => "" , } } } impl std :: fmt :: Debug for Direction { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = crate :: obj :: EngineEnum :: as_str (self) ; if enumerator . is_empty () { f . debug_struct ("Direction") . field ("ord" , & self . ord) . finish () } else { f . write_str (enumerator) } } } # [doc = "Godot bitfield `Feature`."] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [repr (transparent)] pub struct Feature { ord : u64 } impl Feature { # [doc (alias = "FEATURE_SIMPLE_LAYOUT")] # [doc = "Godot enumerator name: `FEATURE_SIMPLE_LAYOUT`"] pub const SIMPLE_LAYOUT : Self = Self { ord : 1 } ; # [doc (alias = "FEATURE_BIDI_LAYOUT")] # [doc = "Godot enumerator name: `FEATURE_BIDI_LAYOUT`"] pub const BIDI_LAYOUT : Self = Self { ord : 2 } ; # [doc (alias = "FEATURE_VERTICAL_LAYOUT")] # [doc = "Godot enumerator name: `FEATURE_VERTICAL_LAYOUT`"] pub const VERTICAL_LAYOUT : Self = Self { ord : 4 } ; # [doc (alias = "FEATURE_SHAPING")] # [doc = "Godot enumerator name: `FEATURE_SHAPING`"] pub const SHAPING : Self = Self { ord : 8 } ; # [doc (alias = "FEATURE_KASHIDA_JUSTIFICATION")] # [doc = "Godot enumerator name: `FEATURE_KASHIDA_JUSTIFICATION`"] pub const KASHIDA_JUSTIFICATION : Self = Self { ord : 16 } ; # [doc (alias = "FEATURE_BREAK_ITERATORS")] # [doc = "Godot enumerator name: `FEATURE_BREAK_ITERATORS`"] pub const BREAK_ITERATORS : Self = Self { ord : 32 } ; # [doc (alias = "FEATURE_FONT_BITMAP")] # [doc = "Godot enumerator name: `FEATURE_FONT_BITMAP`"] pub const FONT_BITMAP : Self = Self { ord : 64 } ; # [doc (alias = "FEATURE_FONT_DYNAMIC")] # [doc = "Godot enumerator name: `FEATURE_FONT_DYNAMIC`"] pub const FONT_DYNAMIC : Self = Self { ord : 128 } ; # [doc (alias = "FEATURE_FONT_MSDF")] # [doc = "Godot enumerator name: `FEATURE_FONT_MSDF`"] pub const FONT_MSDF : Self = Self { ord : 256 } ; # [doc (alias = "FEATURE_FONT_SYSTEM")] # [doc = "Godot enumerator name: `FEATURE_FONT_SYSTEM`"] pub const FONT_SYSTEM : Self = Self { ord : 512 } ; # [doc (alias = "FEATURE_FONT_VARIABLE")] # [doc = "Godot enumerator name: `FEATURE_FONT_VARIABLE`"] pub const FONT_VARIABLE : Self = Self { ord : 1024 } ; # [doc (alias = "FEATURE_CONTEXT_SENSITIVE_CASE_CONVERSION")] # [doc = "Godot enumerator name: `FEATURE_CONTEXT_SENSITIVE_CASE_CONVERSION`"] pub const CONTEXT_SENSITIVE_CASE_CONVERSION : Self = Self { ord : 2048 } ; # [doc (alias = "FEATURE_USE_SUPPORT_DATA")] # [doc = "Godot enumerator name: `FEATURE_USE_SUPPORT_DATA`"] pub const USE_SUPPORT_DATA : Self = Self { ord : 4096 } ; # [doc (alias = "FEATURE_UNICODE_IDENTIFIERS")] # [doc = "Godot enumerator name: `FEATURE_UNICODE_IDENTIFIERS`"] pub const UNICODE_IDENTIFIERS : Self = Self { ord : 8192 } ; # [doc (alias = "FEATURE_UNICODE_SECURITY")] # [doc = "Godot enumerator name: `FEATURE_UNICODE_SECURITY`"] pub const UNICODE_SECURITY : Self = Self { ord : 16384 } ; } impl crate :: obj :: EngineBitfield for Feature { fn from_ord (ord : u64) -> Self { Self { ord } } fn ord (self) -> u64 { self . ord } } impl std :: fmt :: Debug for Feature { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let flags : & [(u64 , & str)] = & [(1 , "SIMPLE_LAYOUT") , (2 , "BIDI_LAYOUT") , (4 , "VERTICAL_LAYOUT") , (8 , "SHAPING") , (16 , "KASHIDA_JUSTIFICATION") , (32 , "BREAK_ITERATORS") , (64 , "FONT_BITMAP") , (128 , "FONT_DYNAMIC") , (256 , "FONT_MSDF") , (512 , "FONT_SYSTEM") , (1024 , "FONT_VARIABLE") , (2048 , "CONTEXT_SENSITIVE_CASE_CONVERSION") , (4096 , "USE_SUPPORT_DATA") , (8192 , "UNICODE_IDENTIFIERS") , (16384 , "UNICODE_SECURITY")] ; let mut remaining = self . ord ; let mut parts : Vec < String > = Vec :: new () ; for & (bit , flag_name) in flags { if remaining & bit != 0 { parts . push (flag_name . to_string ()) ; remaining &= ! bit ; } } if remaining != 0 || parts . is_empty () { parts . push (format ! ("{remaining:#x}")) ; } write ! (f , "{}({})" , "Feature" , parts . join (" | ")) } } impl std :: ops :: BitOr for Feature { type Output = Self ; fn bitor (self , rhs : Self) -> Self :: Output { Self { ord : self . ord | rhs . ord } } } impl std :: ops :: BitOrAssign for Feature { fn bitor_assign (& mut self , rhs : Self) { * self = * self | rhs ; } } # [doc = "Low-level methods of [`TextServer`][crate::classes::TextServer], with wire-level signatures.\n\nIntegers are `i64`, floats `f64`, enums their ordinal as `i64`, objects tagged raw pointers. Returned objects carry the ownership tag the caller must honor."] # [derive (Copy , Clone)] pub struct Advanced < 'a > { object_ptr : sys :: GDExtensionObjectPtr , _instance : std :: marker :: PhantomData < & 'a re_export :: TextServer > , } impl < 'a > Advanced < 'a > { # [doc = r" Low-level API of `instance`."] # [doc = r""] # [doc = r" # Panics"] # [doc = r" If `instance` tracks its instance ID and the object has been freed."] pub fn from_instance (instance : & 'a re_export :: TextServer) -> Self { let object_ptr = crate :: obj :: EngineClass :: __checked_object_ptr (instance) ; Self { object_ptr , _instance : std :: marker :: PhantomData , } } # [doc = r" Low-level API of a raw object."] # [doc = r""] # [doc = r" # Safety"] # [doc = r" `object_ptr` must point to a live object of this class (or a subclass) for `'a`."] pub unsafe fn from_object_ptr (object_ptr : sys :: GDExtensionObjectPtr) -> Self { Self { object_ptr , _instance : std :: marker :: PhantomData , } } pub fn object_ptr (self) -> sys :: GDExtensionObjectPtr { self . object_ptr } # [doc = "Wire-level `has_feature`."] pub fn has_feature (self , feature : i64) -> bool { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < i64 > (feature) ; unsafe { frame . call :: < bool > (method_table () . has_feature , self . object_ptr) } } # [doc = "Wire-level `get_name`."] pub fn get_name (self ,) -> crate :: builtin :: GString { let frame = sys :: CallFrame :: new () ; unsafe { crate :: builtin :: GString :: new_with_init (| ret | frame . call_into (method_table () . get_name , self . object_ptr , ret)) } } # [doc = "Wire-level `get_features`."] pub fn get_features (self ,) -> i64 { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < i64 > (method_table () . get_features , self . object_ptr) } } } struct MethodTable { has_feature : sys :: GDExtensionMethodBindPtr , get_name : sys :: GDExtensionMethodBindPtr , get_features : sys :: GDExtensionMethodBindPtr , } unsafe impl Sync for MethodTable { } unsafe impl Send for MethodTable { } impl MethodTable { fn load () -> Self { sys :: out ! ("Load method table of {}" , "TextServer") ; let class_name = crate :: builtin :: StringName :: from ("TextServer") ; Self { has_feature : crate :: meta :: load_method_bind (& class_name , "has_feature" , 3967367083i64) , get_name : crate :: meta :: load_method_bind (& class_name , "get_name" , 201670096i64) , get_features : crate :: meta :: load_method_bind (& class_name , "get_features" , 3905245786i64) , } } } fn method_table () -> & 'static MethodTable { static TABLE : std :: sync :: OnceLock < MethodTable > = std :: sync :: OnceLock :: new () ; TABLE . get_or_init (MethodTable :: load) } mod virtuals { use super :: re_export :: ITextServer ; use crate :: sys ; }
# ! [doc = "Sidecar module for class [`FileAccess`][crate::classes::FileAccess].\n\nDefines related flag and enum types, and the low-level [`Advanced`] API with wire-level signatures."] use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `FileAccess`.\n\nProvides methods for file reading and writing operations.\n\nInherits [`RefCounted`][crate::classes::RefCounted].\n\nRelated symbols:\n\n* [`file_access`][crate::classes::file_access]: sidecar module with enums and the low-level `Advanced` API\n* [`IFileAccess`][crate::classes::IFileAccess]: virtual methods\n"] # [derive (Debug)] # [repr (C)] pub struct FileAccess { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } # [doc = "Virtual methods for class [`FileAccess`][crate::classes::FileAccess].\n\nThese methods represent constructors (`init`) or callbacks invoked by the engine. Only methods that an implementation overrides are reported to the engine; for all others, the engine's default behavior applies."] # [allow (unused_variables)] pub trait IFileAccess : crate :: obj :: GodotClass + crate :: private :: You_forgot_the_attribute__godot_api { # [doc = r" Constructor of the user struct, invoked by the engine whenever an instance is created."] # [doc = r""] # [doc = r" Overriding it is an alternative to `#[class(init)]`."] fn init (base : crate :: obj :: Base < Self :: Base >) -> Self where Self : Sized , { unimplemented ! () } # [doc = r" Trampoline for the engine virtual `name`, if `Self` overrides it."] # [doc (hidden)] fn __godot_virtual_call (name : & str) -> sys :: GDExtensionClassCallVirtual where Self : Sized + crate :: private :: ImplementsVirtuals , { let overridden = < Self as crate :: private :: ImplementsVirtuals > :: OVERRIDDEN ; match name { _ => None , } } } impl FileAccess { pub fn open (path : & str , flags : crate :: classes :: file_access :: ModeFlags) -> Option < crate :: obj :: Gd < crate :: classes :: FileAccess >> { let path = crate :: builtin :: GString :: from (path) ; let ret = Advanced :: open (& path , crate :: obj :: EngineEnum :: ord (flags) as i64) ; unsafe { crate :: obj :: Gd :: from_tagged (ret) } } # [doc = " Default values in Godot:"] # [doc = " * `compression_mode`: `0`"] pub fn open_compressed (path : & str , mode_flags : crate :: classes :: file_access :: ModeFlags , compression_mode : crate :: classes :: file_access :: CompressionMode) -> Option < crate :: obj :: Gd < crate :: classes :: FileAccess >> { let path = crate :: builtin :: GString :: from (path) ; let ret = Advanced :: open_compressed (& path , crate :: obj :: EngineEnum :: ord (mode_flags) as i64 , crate :: obj :: EngineEnum :: ord (compression_mode) as i64) ; unsafe { crate :: obj :: Gd :: from_tagged (ret) } } pub fn get_open_error () -> crate :: global :: Error { let ret = Advanced :: get_open_error () ; < crate :: global :: Error as crate :: obj :: EngineEnum > :: from_ord (ret as i32) } pub fn file_exists (path : & str) -> bool { let path = crate :: builtin :: GString :: from (path) ; Advanced :: file_exists (& path) } pub fn flush (& mut self ,) { self . advanced () . flush () ; } pub fn get_path (& self ,) -> crate :: builtin :: GString { self . advanced () . get_path () } pub fn is_open (& self ,) -> bool { self . advanced () . is_open () } pub fn seek (& mut self , position : u64) { self . advanced () . seek (position as i64) ; } pub fn get_position (& self ,) -> u64 { let ret = self . advanced () . get_position () ; ret as u64 } pub fn get_length (& self ,) -> u64 { let ret = self . advanced () . get_length () ; ret as u64 } pub fn eof_reached (& self ,) -> bool { self . advanced () . eof_reached () } pub fn get_8 (& self ,) -> u8 { let ret = self . advanced () . get_8 () ; ret as u8 } # [doc = " Default values in Godot:"] # [doc = " * `skip_cr`: `false`"] pub fn get_as_text (& self , skip_cr : bool) -> crate :: builtin :: GString { self . advanced () . get_as_text (skip_cr) } pub fn get_error (& self ,) -> crate :: global :: Error { let ret = self . advanced () . get_error () ; < crate :: global :: Error as crate :: obj :: EngineEnum > :: from_ord (ret as i32) } pub fn store_8 (& mut self , value : u8) { self . advanced () . store_8 (value as i64) ; } pub fn store_string (& mut self , string : & str) { let string = crate :: builtin :: GString :: from (string) ; self . advanced () . store_string (& string) ; } pub fn close (& mut self ,) { self . advanced () . close () ; } # [doc = " Signals declared by `FileAccess` itself (not inherited ones):"] pub const SIGNALS : & 'static [& 'static str] = & [] ; # [doc = r" Engine names of all virtual methods that a user class extending this one can override."] pub const VIRTUAL_METHODS : & 'static [& 'static str] = & [] ; # [doc = r" Low-level API with wire-level signatures."] pub fn advanced (& self) -> Advanced < '_ > { Advanced :: from_instance (self) } } impl crate :: obj :: GodotClass for FileAccess { type Base = crate :: classes :: RefCounted ; fn class_name () -> crate :: meta :: ClassName { crate :: meta :: ClassName :: new_static ("FileAccess") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for FileAccess { type Memory = crate :: obj :: bounds :: MemRefCounted ; type DynMemory = crate :: obj :: bounds :: MemRefCounted ; type Declarer = crate :: obj :: bounds :: DeclEngine ; } impl crate :: obj :: EngineClass for FileAccess { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } fn cached_instance_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: Inherits < crate :: classes :: RefCounted > for FileAccess { } impl crate :: obj :: Inherits < crate :: classes :: Object > for FileAccess { } impl std :: ops :: Deref for FileAccess { type Target = crate :: classes :: RefCounted ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for FileAccess { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } # [macro_export] # [doc (hidden)] # [allow (non_snake_case)] macro_rules ! inherits_transitive_FileAccess { ($ Class : ident) => { impl $ crate :: obj :: Inherits < $ crate :: classes :: FileAccess > for $ Class { } impl $ crate :: obj :: Inherits < $ crate :: classes :: RefCounted > for $ Class { } impl $ crate :: obj :: Inherits < $ crate :: classes :: Object > for $ Class { } } } } # [doc = "Godot enum `ModeFlags`."] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [repr (transparent)] pub struct ModeFlags { ord : i32 } impl ModeFlags { pub const READ : Self = Self { ord : 1 } ; pub const WRITE : Self = Self { ord : 2 } ; pub const READ_WRITE : Self = Self { ord : 3 } ; pub const WRITE_READ : Self = Self { ord : 7 } ; } impl crate :: obj :: EngineEnum for ModeFlags { fn from_ord (ord : i32) -> Self { Self { ord } } fn try_from_ord (ord : i32) -> Option < Self > { match ord { 1 | 2 | 3 | 7 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 1 => "READ" , 2 => "WRITE" , 3 => "READ_WRITE" , 7 => "WRITE_READ" , _ => "" , } } } impl std :: fmt :: Debug for ModeFlags { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = crate :: obj :: EngineEnum :: as_str (self) ; if enumerator . is_empty () { f . debug_struct ("ModeFlags") . field ("ord" , & self . ord) . finish () } else { f . write_str (enumerator) } } } # [doc = "Godot enum `CompressionMode`."] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [repr (transparent)] pub struct CompressionMode { ord : i32 } impl CompressionMode { # [doc (alias = "COMPRESSION_FASTLZ")] # [doc = "Godot enumerator name: `COMPRESSION_FASTLZ`"] pub const FASTLZ : Self = Self { ord : 0 } ; # [doc (alias = "COMPRESSION_DEFLATE")] # [doc = "Godot enumerator name: `COMPRESSION_DEFLATE`"] pub const DEFLATE : Self = Self { ord : 1 } ; # [doc (alias = "COMPRESSION_ZSTD")] # [doc = "Godot enumerator name: `COMPRESSION_ZSTD`"] pub const ZSTD : Self = Self { ord : 2 } ; # [doc (alias = "COMPRESSION_GZIP")] # [doc = "Godot enumerator name: `COMPRESSION_GZIP`"] pub const GZIP : Self = Self { ord : 3 } ; # [doc (alias = "COMPRESSION_BROTLI")] # [doc = "Godot enumerator name: `COMPRESSION_BROTLI`"] pub const BROTLI : Self = Self { ord : 4 } ; } impl crate :: obj :: EngineEnum for CompressionMode { fn from_ord (ord : i32) -> Self { Self { ord } } fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "FASTLZ" , 1 => "DEFLATE" , 2 => "ZSTD" , 3 => "GZIP" , 4 => "BROTLI" , _ => "" , } } } impl std :: fmt :: Debug for CompressionMode { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = crate :: obj :: EngineEnum :: as_str (self) ; if enumerator . is_empty () { f . debug_struct ("CompressionMode") . field ("ord" , & self . ord) . finish () } else { f . write_str (enumerator) } } } # [doc = "Low-level methods of [`FileAccess`][crate::classes::FileAccess], with wire-level signatures.\n\nIntegers are `i64`, floats `f64`, enums their ordinal as `i64`, objects tagged raw pointers. Returned objects carry the ownership tag the caller must honor."] # [derive (Copy , Clone)] pub struct Advanced < 'a > { object_ptr : sys :: GDExtensionObjectPtr , _instance : std :: marker :: PhantomData < & 'a re_export :: FileAccess > , } impl < 'a > Advanced < 'a > { # [doc = r" Low-level API of `instance`."] # [doc = r""] # [doc = r" # Panics"] # [doc = r" If `instance` tracks its instance ID and the object has been freed."] pub fn from_instance (instance : & 'a re_export :: FileAccess) -> Self { let object_ptr = crate :: obj :: EngineClass :: __checked_object_ptr (instance) ; Self { object_ptr , _instance : std :: marker :: PhantomData , } } # [doc = r" Low-level API of a raw object."] # [doc = r""] # [doc = r" # Safety"] # [doc = r" `object_ptr` must point to a live object of this class (or a subclass) for `'a`."] pub unsafe fn from_object_ptr (object_ptr : sys :: GDExtensionObjectPtr) -> Self { Self { object_ptr , _instance : std :: marker :: PhantomData , } } pub fn object_ptr (self) -> sys :: GDExtensionObjectPtr { self . object_ptr } # [doc = "Wire-level `open`."] pub fn open (path : & crate :: builtin :: GString , flags : i64) -> sys :: Tagged { let mut frame = sys :: CallFrame :: new () ; unsafe { frame . arg_ptr (path . sys ()) } ; frame . arg :: < i64 > (flags) ; let ptr = unsafe { frame . call :: < sys :: GDExtensionObjectPtr > (method_table () . open , std :: ptr :: null_mut ()) } ; sys :: Tagged :: new (ptr , sys :: PointerTag :: TransferredToHost) } # [doc = "Wire-level `open_compressed`."] pub fn open_compressed (path : & crate :: builtin :: GString , mode_flags : i64 , compression_mode : i64) -> sys :: Tagged { let mut frame = sys :: CallFrame :: new () ; unsafe { frame . arg_ptr (path . sys ()) } ; frame . arg :: < i64 > (mode_flags) ; frame . arg :: < i64 > (compression_mode) ; let ptr = unsafe { frame . call :: < sys :: GDExtensionObjectPtr > (method_table () . open_compressed , std :: ptr :: null_mut ()) } ; sys :: Tagged :: new (ptr , sys :: PointerTag :: TransferredToHost) } # [doc = "Wire-level `get_open_error`."] pub fn get_open_error () -> i64 { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < i64 > (method_table () . get_open_error , std :: ptr :: null_mut ()) } } # [doc = "Wire-level `file_exists`."] pub fn file_exists (path : & crate :: builtin :: GString) -> bool { let mut frame = sys :: CallFrame :: new () ; unsafe { frame . arg_ptr (path . sys ()) } ; unsafe { frame . call :: < bool > (method_table () . file_exists , std :: ptr :: null_mut ()) } } # [doc = "Wire-level `flush`."] pub fn flush (self ,) { let frame = sys :: CallFrame :: new () ; unsafe { frame . call_void (method_table () . flush , self . object_ptr) } } # [doc = "Wire-level `get_path`."] pub fn get_path (self ,) -> crate :: builtin :: GString { let frame = sys :: CallFrame :: new () ; unsafe { crate :: builtin :: GString :: new_with_init (| ret | frame . call_into (method_table () . get_path , self . object_ptr , ret)) } } # [doc = "Wire-level `is_open`."] pub fn is_open (self ,) -> bool { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < bool > (method_table () . is_open , self . object_ptr) } } # [doc = "Wire-level `seek`."] pub fn seek (self , position : i64) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < i64 > (position) ; unsafe { frame . call_void (method_table () . seek , self . object_ptr) } } # [doc = "Wire-level `get_position`."] pub fn get_position (self ,) -> i64 { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < i64 > (method_table () . get_position , self . object_ptr) } } # [doc = "Wire-level `get_length`."] pub fn get_length (self ,) -> i64 { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < i64 > (method_table () . get_length , self . object_ptr) } } # [doc = "Wire-level `eof_reached`."] pub fn eof_reached (self ,) -> bool { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < bool > (method_table () . eof_reached , self . object_ptr) } } # [doc = "Wire-level `get_8`."] pub fn get_8 (self ,) -> i64 { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < i64 > (method_table () . get_8 , self . object_ptr) } } # [doc = "Wire-level `get_as_text`."] pub fn get_as_text (self , skip_cr : bool) -> crate :: builtin :: GString { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < bool > (skip_cr) ; unsafe { crate :: builtin :: GString :: new_with_init (| ret | frame . call_into (method_table () . get_as_text , self . object_ptr , ret)) } } # [doc = "Wire-level `get_error`."] pub fn get_error (self ,) -> i64 { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < i64 > (method_table () . get_error , self . object_ptr) } } # [doc = "Wire-level `store_8`."] pub fn store_8 (self , value : i64) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < i64 > (value) ; unsafe { frame . call_void (method_table () . store_8 , self . object_ptr) } } # [doc = "Wire-level `store_string`."] pub fn store_string (self , string : & crate :: builtin :: GString) { let mut frame = sys :: CallFrame :: new () ; unsafe { frame . arg_ptr (string . sys ()) } ; unsafe { frame . call_void (method_table () . store_string , self . object_ptr) } } # [doc = "Wire-level `close`."] pub fn close (self ,) { let frame = sys :: CallFrame :: new () ; unsafe { frame . call_void (method_table () . close , self . object_ptr) } } } struct MethodTable { open : sys :: GDExtensionMethodBindPtr , open_compressed : sys :: GDExtensionMethodBindPtr , get_open_error : sys :: GDExtensionMethodBindPtr , file_exists : sys :: GDExtensionMethodBindPtr , flush : sys :: GDExtensionMethodBindPtr , get_path : sys :: GDExtensionMethodBindPtr , is_open : sys :: GDExtensionMethodBindPtr , seek : sys :: GDExtensionMethodBindPtr , get_position : sys :: GDExtensionMethodBindPtr , get_length : sys :: GDExtensionMethodBindPtr , eof_reached : sys :: GDExtensionMethodBindPtr , get_8 : sys :: GDExtensionMethodBindPtr , get_as_text : sys :: GDExtensionMethodBindPtr , get_error : sys :: GDExtensionMethodBindPtr , store_8 : sys :: GDExtensionMethodBindPtr , store_string : sys :: GDExtensionMethodBindPtr , close : sys :: GDExtensionMethodBindPtr , } unsafe impl Sync for MethodTable { } unsafe impl Send for MethodTable { } impl MethodTable { fn load () -> Self { sys :: out ! ("Load method table of {}" , "FileAccess") ; let class_name = crate :: builtin :: StringName :: from ("FileAccess") ; Self { open : crate :: meta :: load_method_bind (& class_name , "open" , 1247358404i64) , open_compressed : crate :: meta :: load_method_bind (& class_name , "open_compressed" , 3686439335i64) , get_open_error : crate :: meta :: load_method_bind (& class_name , "get_open_error" , 166280745i64) , file_exists : crate :: meta :: load_method_bind (& class_name , "file_exists" , 2323990056i64) , flush : crate :: meta :: load_method_bind (& class_name , "flush" , 3218959716i64) , get_path : crate :: meta :: load_method_bind (& class_name , "get_path" , 201670096i64) , is_open : crate :: meta :: load_method_bind (& class_name , "is_open" , 36873697i64) , seek : crate :: meta :: load_method_bind (& class_name , "seek" , 1286410249i64) , get_position : crate :: meta :: load_method_bind (& class_name , "get_position" , 3905245786i64) , get_length : crate :: meta :: load_method_bind (& class_name , "get_length" , 3905245786i64) , eof_reached : crate :: meta :: load_method_bind (& class_name , "eof_reached" , 36873697i64) , get_8 : crate :: meta :: load_method_bind (& class_name , "get_8" , 3905245786i64) , get_as_text : crate :: meta :: load_method_bind (& class_name , "get_as_text" , 1162154673i64) , get_error : crate :: meta :: load_method_bind (& class_name , "get_error" , 3185525595i64) , store_8 : crate :: meta :: load_method_bind (& class_name , "store_8" , 1286410249i64) , store_string : crate :: meta :: load_method_bind (& class_name , "store_string" , 83702148i64) , close : crate :: meta :: load_method_bind (& class_name , "close" , 3218959716i64) , } } } fn method_table () -> & 'static MethodTable { static TABLE : std :: sync :: OnceLock < MethodTable > = std :: sync :: OnceLock :: new () ; TABLE . get_or_init (MethodTable :: load) } mod virtuals { use super :: re_export :: IFileAccess ; use crate :: sys ; }
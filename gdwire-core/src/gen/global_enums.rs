# [doc = "Godot enum `Side`."] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [repr (transparent)] pub struct Side { ord : i32 } impl Side { # [doc (alias = "SIDE_LEFT")] # [doc = "Godot enumerator name: `SIDE_LEFT`"] pub const LEFT : Self = Self { ord : 0 } ; # [doc (alias = "SIDE_TOP")] # [doc = "Godot enumerator name: `SIDE_TOP`"] pub const TOP : Self = Self { ord : 1 } ; # [doc (alias = "SIDE_RIGHT")] # [doc = "Godot enumerator name: `SIDE_RIGHT`"] pub const RIGHT : Self = Self { ord : 2 } ; # [doc (alias = "SIDE_BOTTOM")] # [doc = "Godot enumerator name: `SIDE_BOTTOM`"] pub const BOTTOM : Self = Self { ord : 3 } ; } impl crate :: obj :: EngineEnum for Side { fn from_ord (ord : i32) -> Self { Self { ord } } fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "LEFT" , 1 => "TOP" , 2 => "RIGHT" , 3 => "BOTTOM" , _ => "" , } } } impl std :: fmt :: Debug for Side { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = crate :: obj :: EngineEnum :: as_str (self) ; if enumerator . is_empty () { f . debug_struct ("Side") . field ("ord" , & self . ord) . finish () } else { f . write_str (enumerator) } } } # [doc = "Godot enum `Error`."] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [repr (transparent)] pub struct Error { ord : i32 } impl Error { pub const OK : Self = Self { ord : 0 } ; pub const FAILED : Self = Self { ord : 1 } ; pub const ERR_UNAVAILABLE : Self = Self { ord : 2 } ; pub const ERR_UNCONFIGURED : Self = Self { ord : 3 } ; pub const ERR_UNAUTHORIZED : Self = Self { ord : 4 } ; pub const ERR_PARAMETER_RANGE_ERROR : Self = Self { ord : 5 } ; pub const ERR_OUT_OF_MEMORY : Self = Self { ord : 6 } ; pub const ERR_FILE_NOT_FOUND : Self = Self { ord : 7 } ; pub const ERR_FILE_BAD_DRIVE : Self = Self { ord : 8 } ; pub const ERR_FILE_BAD_PATH : Self = Self { ord : 9 } ; pub const ERR_FILE_NO_PERMISSION : Self = Self { ord : 10 } ; pub const ERR_FILE_ALREADY_IN_USE : Self = Self { ord : 11 } ; pub const ERR_FILE_CANT_OPEN : Self = Self { ord : 12 } ; pub const ERR_FILE_CANT_WRITE : Self = Self { ord : 13 } ; pub const ERR_FILE_CANT_READ : Self = Self { ord : 14 } ; pub const ERR_FILE_UNRECOGNIZED : Self = Self { ord : 15 } ; pub const ERR_FILE_CORRUPT : Self = Self { ord : 16 } ; pub const ERR_FILE_MISSING_DEPENDENCIES : Self = Self { ord : 17 } ; pub const ERR_FILE_EOF : Self = Self { ord : 18 } ; pub const ERR_CANT_OPEN : Self = Self { ord : 19 } ; pub const ERR_CANT_CREATE : Self = Self { ord : 20 } ; pub const ERR_QUERY_FAILED : Self = Self { ord : 21 } ; pub const ERR_ALREADY_IN_USE : Self = Self { ord : 22 } ; pub const ERR_LOCKED : Self = Self { ord : 23 } ; pub const ERR_TIMEOUT : Self = Self { ord : 24 } ; pub const ERR_CANT_CONNECT : Self = Self { ord : 25 } ; pub const ERR_CANT_RESOLVE : Self = Self { ord : 26 } ; pub const ERR_CONNECTION_ERROR : Self = Self { ord : 27 } ; pub const ERR_CANT_ACQUIRE_RESOURCE : Self = Self { ord : 28 } ; pub const ERR_CANT_FORK : Self = Self { ord : 29 } ; pub const ERR_INVALID_DATA : Self = Self { ord : 30 } ; pub const ERR_INVALID_PARAMETER : Self = Self { ord : 31 } ; pub const ERR_ALREADY_EXISTS : Self = Self { ord : 32 } ; pub const ERR_DOES_NOT_EXIST : Self = Self { ord : 33 } ; pub const ERR_DATABASE_CANT_READ : Self = Self { ord : 34 } ; pub const ERR_DATABASE_CANT_WRITE : Self = Self { ord : 35 } ; pub const ERR_COMPILATION_FAILED : Self = Self { ord : 36 } ; pub const ERR_METHOD_NOT_FOUND : Self = Self { ord : 37 } ; pub const ERR_LINK_FAILED : Self = Self { ord : 38 } ; pub const ERR_SCRIPT_FAILED : Self = Self { ord : 39 } ; pub const ERR_CYCLIC_LINK : Self = Self { ord : 40 } ; pub const ERR_INVALID_DECLARATION : Self = Self { ord : 41 } ; pub const ERR_DUPLICATE_SYMBOL : Self = Self { ord : 42 } ; pub const ERR_PARSE_ERROR : Self = Self { ord : 43 } ; pub const ERR_BUSY : Self = Self { ord : 44 } ; pub const ERR_SKIP : Self = Self { ord : 45 } ; pub const ERR_HELP : Self = Self { ord : 46 } ; pub const ERR_BUG : Self = Self { ord : 47 } ; pub const ERR_PRINTER_ON_FIRE : Self = Self { ord : 48 } ; } impl crate :: obj :: EngineEnum for Error { fn from_ord (ord : i32) -> Self { Self { ord } } fn try_from_ord (ord : i32) -> Option < Self > { match ord { 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 | 10 | 11 | 12 | 13 | 14 | 15 | 16 | 17 | 18 | 19 | 20 | 21 | 22 | 23 | 24 | 25 | 26 | 27 | 28 | 29 | 30 | 31 | 32 | 33 | 34 | 35 | 36 | 37 | 38 | 39 | 40 | 41 | 42 | 43 | 44 | 45 | 46 | 47 | 48 => Some (Self { ord }) , _ => None , } } fn ord (self) -> i32 { self . ord } fn as_str (& self) -> & 'static str { match self . ord { 0 => "OK" , 1 => "FAILED" , 2 => "ERR_UNAVAILABLE" , 3 => "ERR_UNCONFIGURED" , 4 => "ERR_UNAUTHORIZED" , 5 => "ERR_PARAMETER_RANGE_ERROR" , 6 => "ERR_OUT_OF_MEMORY" , 7 => "ERR_FILE_NOT_FOUND" , 8 => "ERR_FILE_BAD_DRIVE" , 9 => "ERR_FILE_BAD_PATH" , 10 => "ERR_FILE_NO_PERMISSION" , 11 => "ERR_FILE_ALREADY_IN_USE" , 12 => "ERR_FILE_CANT_OPEN" , 13 => "ERR_FILE_CANT_WRITE" , 14 => "ERR_FILE_CANT_READ" , 15 => "ERR_FILE_UNRECOGNIZED" , 16 => "ERR_FILE_CORRUPT" , 17 => "ERR_FILE_MISSING_DEPENDENCIES" , 18 => "ERR_FILE_EOF" , 19 => "ERR_CANT_OPEN" , 20 => "ERR_CANT_CREATE" , 21 => "ERR_QUERY_FAILED" , 22 => "ERR_ALREADY_IN_USE" , 23 => "ERR_LOCKED" , 24 => "ERR_TIMEOUT" , 25 => "ERR_CANT_CONNECT" , 26 => "ERR_CANT_RESOLVE" , 27 => "ERR_CONNECTION_ERROR" , 28 => "ERR_CANT_ACQUIRE_RESOURCE" , 29 => "ERR_CANT_FORK" , 30 => "ERR_INVALID_DATA" , 31 => "ERR_INVALID_PARAMETER" , 32 => "ERR_ALREADY_EXISTS" , 33 => "ERR_DOES_NOT_EXIST" , 34 => "ERR_DATABASE_CANT_READ" , 35 => "ERR_DATABASE_CANT_WRITE" , 36 => "ERR_COMPILATION_FAILED" , 37 => "ERR_METHOD_NOT_FOUND" , 38 => "ERR_LINK_FAILED" , 39 => "ERR_SCRIPT_FAILED" , 40 => "ERR_CYCLIC_LINK" , 41 => "ERR_INVALID_DECLARATION" , 42 => "ERR_DUPLICATE_SYMBOL" , 43 => "ERR_PARSE_ERROR" , 44 => "ERR_BUSY" , 45 => "ERR_SKIP" , 46 => "ERR_HELP" , 47 => "ERR_BUG" , 48 => "ERR_PRINTER_ON_FIRE" , _ => "" , } } } impl std :: fmt :: Debug for Error { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let enumerator = crate :: obj :: EngineEnum :: as_str (self) ; if enumerator . is_empty () { f . debug_struct ("Error") . field ("ord" , & self . ord) . finish () } else { f . write_str (enumerator) } } } # [doc = "Godot bitfield `MethodFlags`."] # [derive (Copy , Clone , Eq , PartialEq , Hash)] # [repr (transparent)] pub struct MethodFlags { ord : u64 } impl MethodFlags { # [doc (alias = "METHOD_FLAG_NORMAL")] # [doc = "Godot enumerator name: `METHOD_FLAG_NORMAL`"] pub const FLAG_NORMAL : Self = Self { ord : 1 } ; # [doc (alias = "METHOD_FLAG_EDITOR")] # [doc = "Godot enumerator name: `METHOD_FLAG_EDITOR`"] pub const FLAG_EDITOR : Self = Self { ord : 2 } ; # [doc (alias = "METHOD_FLAG_CONST")] # [doc = "Godot enumerator name: `METHOD_FLAG_CONST`"] pub const FLAG_CONST : Self = Self { ord : 4 } ; # [doc (alias = "METHOD_FLAG_VIRTUAL")] # [doc = "Godot enumerator name: `METHOD_FLAG_VIRTUAL`"] pub const FLAG_VIRTUAL : Self = Self { ord : 8 } ; # [doc (alias = "METHOD_FLAG_VARARG")] # [doc = "Godot enumerator name: `METHOD_FLAG_VARARG`"] pub const FLAG_VARARG : Self = Self { ord : 16 } ; # [doc (alias = "METHOD_FLAG_STATIC")] # [doc = "Godot enumerator name: `METHOD_FLAG_STATIC`"] pub const FLAG_STATIC : Self = Self { ord : 32 } ; # [doc (alias = "METHOD_FLAG_OBJECT_CORE")] # [doc = "Godot enumerator name: `METHOD_FLAG_OBJECT_CORE`"] pub const FLAG_OBJECT_CORE : Self = Self { ord : 64 } ; # [doc (alias = "METHOD_FLAGS_DEFAULT")] # [doc = "Godot enumerator name: `METHOD_FLAGS_DEFAULT`"] pub const FLAGS_DEFAULT : Self = Self { ord : 1 } ; } impl crate :: obj :: EngineBitfield for MethodFlags { fn from_ord (ord : u64) -> Self { Self { ord } } fn ord (self) -> u64 { self . ord } } impl std :: fmt :: Debug for MethodFlags { fn fmt (& self , f : & mut std :: fmt :: Formatter < '_ >) -> std :: fmt :: Result { let flags : & [(u64 , & str)] = & [(1 , "FLAG_NORMAL") , (2 , "FLAG_EDITOR") , (4 , "FLAG_CONST") , (8 , "FLAG_VIRTUAL") , (16 , "FLAG_VARARG") , (32 , "FLAG_STATIC") , (64 , "FLAG_OBJECT_CORE")] ; let mut remaining = self . ord ; let mut parts : Vec < String > = Vec :: new () ; for & (bit , flag_name) in flags { if remaining & bit != 0 { parts . push (flag_name . to_string ()) ; remaining &= ! bit ; } } if remaining != 0 || parts . is_empty () { parts . push (format ! ("{remaining:#x}")) ; } write ! (f , "{}({})" , "MethodFlags" , parts . join (" | ")) } } impl std :: ops :: BitOr for MethodFlags { type Output = Self ; fn bitor (self , rhs : Self) -> Self :: Output { Self { ord : self . ord | rhs . ord } } } impl std :: ops :: BitOrAssign for MethodFlags { fn bitor_assign (& mut self , rhs : Self) { * self = * self | rhs ; } }
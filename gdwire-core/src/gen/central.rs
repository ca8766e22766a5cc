# [doc = r" Engine version of the class database used for code generation, as `(major, minor, patch)`."] pub const GENERATED_API_VERSION : (u8 , u8 , u8) = (4 , 2 , 1) ; # [doc = r" Full version string of the class database used for code generation."] pub const GENERATED_API_VERSION_STRING : & str = "Godot Engine v4.2.1.stable.official" ; # [doc = r" Number of engine classes with generated bindings."] pub const GENERATED_CLASS_COUNT : usize = 13usize ;
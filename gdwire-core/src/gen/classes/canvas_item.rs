# ! [doc = "Sidecar module for class [`CanvasItem`][crate::classes::CanvasItem].\n\nDefines related flag and enum types, and the low-level [`Advanced`] API with wire-level signatures."] use crate :: sys ; pub (super) mod re_export { use super :: * ; # [doc = "Godot class `CanvasItem`.\n\nAbstract base class for everything in 2D space.\n\nInherits [`Node`][crate::classes::Node].\n\nRelated symbols:\n\n* [`canvas_item`][crate::classes::canvas_item]: sidecar module with enums and the low-level `Advanced` API\n* [`ICanvasItem`][crate::classes::ICanvasItem]: virtual methods\n"] # [derive (Debug)] # [repr (C)] pub struct CanvasItem { object_ptr : sys :: GDExtensionObjectPtr , instance_id : Option < crate :: obj :: InstanceId > , } # [doc = "Virtual methods for class [`CanvasItem`][crate::classes::CanvasItem].\n\nThese methods represent constructors (`init`) or callbacks invoked by the engine. Only methods that an implementation overrides are reported to the engine; for all others, the engine's default behavior applies."] # [allow (unused_variables)] pub trait ICanvasItem : crate :: obj :: GodotClass + crate :: private :: You_forgot_the_attribute__godot_api { # [doc = r" Constructor of the user struct, invoked by the engine whenever an instance is created."] # [doc = r""] # [doc = r" Overriding it is an alternative to `#[class(init)]`."] fn init (base : crate :: obj :: Base < Self :: Base >) -> Self where Self : Sized , { unimplemented ! () } # [doc = " Called during the processing step of the main loop."] # [doc = ""] # [doc = " Engine virtual `_process`, declared by `Node`."] fn process (& mut self , delta : f64) { unimplemented ! () } # [doc = " Engine virtual `_physics_process`, declared by `Node`."] fn physics_process (& mut self , delta : f64) { unimplemented ! () } # [doc = " Engine virtual `_enter_tree`, declared by `Node`."] fn enter_tree (& mut self ,) { unimplemented ! () } # [doc = " Engine virtual `_exit_tree`, declared by `Node`."] fn exit_tree (& mut self ,) { unimplemented ! () } # [doc = " Called when the node is \"ready\", i.e. when both the node and its children have entered the scene tree."] # [doc = ""] # [doc = " Engine virtual `_ready`, declared by `Node`."] fn ready (& mut self ,) { unimplemented ! () } # [doc = " Called when there is an input event. The input event propagates up through the node tree until a node consumes it."] # [doc = ""] # [doc = " Engine virtual `_input`, declared by `Node`."] fn input (& mut self , event : Option < crate :: obj :: Gd < crate :: classes :: InputEvent >>) { unimplemented ! () } # [doc = " Engine virtual `_draw`, declared by `CanvasItem`."] fn draw (& mut self ,) { unimplemented ! () } # [doc = r" Trampoline for the engine virtual `name`, if `Self` overrides it."] # [doc (hidden)] fn __godot_virtual_call (name : & str) -> sys :: GDExtensionClassCallVirtual where Self : Sized + crate :: private :: ImplementsVirtuals , { let overridden = < Self as crate :: private :: ImplementsVirtuals > :: OVERRIDDEN ; match name { "_process" if overridden . contains (& "process") => Some (super :: virtuals :: process :: < Self >) , "_physics_process" if overridden . contains (& "physics_process") => Some (super :: virtuals :: physics_process :: < Self >) , "_enter_tree" if overridden . contains (& "enter_tree") => Some (super :: virtuals :: enter_tree :: < Self >) , "_exit_tree" if overridden . contains (& "exit_tree") => Some (super :: virtuals :: exit_tree :: < Self >) , "_ready" if overridden . contains (& "ready") => Some (super :: virtuals :: ready :: < Self >) , "_input" if overridden . contains (& "input") => Some (super :: virtuals :: input :: < Self >) , "_draw" if overridden . contains (& "draw") => Some (super :: virtuals :: draw :: < Self >) , _ => None , } } } impl CanvasItem { pub fn set_visible (& mut self , visible : bool) { self . advanced () . set_visible (visible) ; } pub fn is_visible (& self ,) -> bool { self . advanced () . is_visible () } pub fn show (& mut self ,) { self . advanced () . show () ; } pub fn hide (& mut self ,) { self . advanced () . hide () ; } pub fn queue_redraw (& mut self ,) { self . advanced () . queue_redraw () ; } pub fn set_modulate (& mut self , modulate : crate :: builtin :: Color) { self . advanced () . set_modulate (modulate) ; } pub fn get_modulate (& self ,) -> crate :: builtin :: Color { self . advanced () . get_modulate () } # [doc = " Signals declared by `CanvasItem` itself (not inherited ones):"] # [doc = ""] # [doc = " * `draw()`"] # [doc = " * `visibility_changed()`"] # [doc = " * `hidden()`"] pub const SIGNALS : & 'static [& 'static str] = & ["draw" , "visibility_changed" , "hidden"] ; # [doc = "Connects `handler` to signal `draw`; it runs each time the signal is emitted."] pub fn connect_draw (& mut self , handler : impl FnMut () + 'static) -> crate :: global :: Error { let callable = crate :: builtin :: Callable :: from_fn ("draw" , handler) ; self . connect ("draw" , & callable , 0) } # [doc = "Connects `handler` to signal `visibility_changed`; it runs each time the signal is emitted."] pub fn connect_visibility_changed (& mut self , handler : impl FnMut () + 'static) -> crate :: global :: Error { let callable = crate :: builtin :: Callable :: from_fn ("visibility_changed" , handler) ; self . connect ("visibility_changed" , & callable , 0) } # [doc = "Connects `handler` to signal `hidden`; it runs each time the signal is emitted."] pub fn connect_hidden (& mut self , handler : impl FnMut () + 'static) -> crate :: global :: Error { let callable = crate :: builtin :: Callable :: from_fn ("hidden" , handler) ; self . connect ("hidden" , & callable , 0) } # [doc = r" Engine names of all virtual methods that a user class extending this one can override."] pub const VIRTUAL_METHODS : & 'static [& 'static str] = & ["_process" , "_physics_process" , "_enter_tree" , "_exit_tree" , "_ready" , "_input" , "_draw"] ; # [doc = r" Low-level API with wire-level signatures."] pub fn advanced (& self) -> Advanced < '_ > { Advanced :: from_instance (self) } } impl crate :: obj :: GodotClass for CanvasItem { type Base = crate :: classes :: Node ; fn class_name () -> crate :: meta :: ClassName { crate :: meta :: ClassName :: new_static ("CanvasItem") } const INIT_LEVEL : crate :: init :: InitLevel = crate :: init :: InitLevel :: Scene ; } unsafe impl crate :: obj :: Bounds for CanvasItem { type Memory = crate :: obj :: bounds :: MemManual ; type DynMemory = crate :: obj :: bounds :: MemManual ; type Declarer = crate :: obj :: bounds :: DeclEngine ; } impl crate :: obj :: EngineClass for CanvasItem { fn as_object_ptr (& self) -> sys :: GDExtensionObjectPtr { self . object_ptr } fn cached_instance_id (& self) -> Option < crate :: obj :: InstanceId > { self . instance_id } } impl crate :: obj :: Inherits < crate :: classes :: Node > for CanvasItem { } impl crate :: obj :: Inherits < crate :: classes :: Object > for CanvasItem { } impl std :: ops :: Deref for CanvasItem { type Target = crate :: classes :: Node ; fn deref (& self) -> & Self :: Target { unsafe { std :: mem :: transmute :: < & Self , & Self :: Target > (self) } } } impl std :: ops :: DerefMut for CanvasItem { fn deref_mut (& mut self) -> & mut Self :: Target { unsafe { std :: mem :: transmute :: < & mut Self , & mut Self :: Target > (self) } } } # [macro_export] # [doc (hidden)] # [allow (non_snake_case)] macro_rules ! inherits_transitive_CanvasItem { ($ Class : ident) => { impl $ crate :: obj :: Inherits < $ crate :: classes :: CanvasItem > for $ Class { } impl $ crate :: obj :: Inherits < $ crate :: classes :: Node > for $ Class { } impl $ crate :: obj :: Inherits < $ crate :: classes :: Object > for $ Class { } } } } # [doc = "Low-level methods of [`CanvasItem`][crate::classes::CanvasItem], with wire-level signatures.\n\nIntegers are `i64`, floats `f64`, enums their ordinal as `i64`, objects tagged raw pointers. Returned objects carry the ownership tag the caller must honor."] # [derive (Copy , Clone)] pub struct Advanced < 'a > { object_ptr : sys :: GDExtensionObjectPtr , _instance : std :: marker :: PhantomData < & 'a re_export :: CanvasItem > , } impl < 'a > Advanced < 'a > { # [doc = r" Low-level API of `instance`."] # [doc = r""] # [doc = r" # Panics"] # [doc = r" If `instance` tracks its instance ID and the object has been freed."] pub fn from_instance (instance : & 'a re_export :: CanvasItem) -> Self { let object_ptr = crate :: obj :: EngineClass :: __checked_object_ptr (instance) ; Self { object_ptr , _instance : std :: marker :: PhantomData , } } # [doc = r" Low-level API of a raw object."] # [doc = r""] # [doc = r" # Safety"] # [doc = r" `object_ptr` must point to a live object of this class (or a subclass) for `'a`."] pub unsafe fn from_object_ptr (object_ptr : sys :: GDExtensionObjectPtr) -> Self { Self { object_ptr , _instance : std :: marker :: PhantomData , } } pub fn object_ptr (self) -> sys :: GDExtensionObjectPtr { self . object_ptr } # [doc = "Wire-level `set_visible`."] pub fn set_visible (self , visible : bool) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < bool > (visible) ; unsafe { frame . call_void (method_table () . set_visible , self . object_ptr) } } # [doc = "Wire-level `is_visible`."] pub fn is_visible (self ,) -> bool { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < bool > (method_table () . is_visible , self . object_ptr) } } # [doc = "Wire-level `show`."] pub fn show (self ,) { let frame = sys :: CallFrame :: new () ; unsafe { frame . call_void (method_table () . show , self . object_ptr) } } # [doc = "Wire-level `hide`."] pub fn hide (self ,) { let frame = sys :: CallFrame :: new () ; unsafe { frame . call_void (method_table () . hide , self . object_ptr) } } # [doc = "Wire-level `queue_redraw`."] pub fn queue_redraw (self ,) { let frame = sys :: CallFrame :: new () ; unsafe { frame . call_void (method_table () . queue_redraw , self . object_ptr) } } # [doc = "Wire-level `set_modulate`."] pub fn set_modulate (self , modulate : crate :: builtin :: Color) { let mut frame = sys :: CallFrame :: new () ; frame . arg :: < crate :: builtin :: Color > (modulate) ; unsafe { frame . call_void (method_table () . set_modulate , self . object_ptr) } } # [doc = "Wire-level `get_modulate`."] pub fn get_modulate (self ,) -> crate :: builtin :: Color { let frame = sys :: CallFrame :: new () ; unsafe { frame . call :: < crate :: builtin :: Color > (method_table () . get_modulate , self . object_ptr) } } } struct MethodTable { set_visible : sys :: GDExtensionMethodBindPtr , is_visible : sys :: GDExtensionMethodBindPtr , show : sys :: GDExtensionMethodBindPtr , hide : sys :: GDExtensionMethodBindPtr , queue_redraw : sys :: GDExtensionMethodBindPtr , set_modulate : sys :: GDExtensionMethodBindPtr , get_modulate : sys :: GDExtensionMethodBindPtr , } unsafe impl Sync for MethodTable { } unsafe impl Send for MethodTable { } impl MethodTable { fn load () -> Self { sys :: out ! ("Load method table of {}" , "CanvasItem") ; let class_name = crate :: builtin :: StringName :: from ("CanvasItem") ; Self { set_visible : crate :: meta :: load_method_bind (& class_name , "set_visible" , 2586408642i64) , is_visible : crate :: meta :: load_method_bind (& class_name , "is_visible" , 36873697i64) , show : crate :: meta :: load_method_bind (& class_name , "show" , 3218959716i64) , hide : crate :: meta :: load_method_bind (& class_name , "hide" , 3218959716i64) , queue_redraw : crate :: meta :: load_method_bind (& class_name , "queue_redraw" , 3218959716i64) , set_modulate : crate :: meta :: load_method_bind (& class_name , "set_modulate" , 2920490490i64) , get_modulate : crate :: meta :: load_method_bind (& class_name , "get_modulate" , 3444240500i64) , } } } fn method_table () -> & 'static MethodTable { static TABLE : std :: sync :: OnceLock < MethodTable > = std :: sync :: OnceLock :: new () ; TABLE . get_or_init (MethodTable :: load) } mod virtuals { use super :: re_export :: ICanvasItem ; use crate :: sys ; pub (super) unsafe extern "C" fn process < T : ICanvasItem > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "ICanvasItem::process" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let arg0 = sys :: callframe :: read_arg :: < f64 > (args , 0usize) ; let mut guard = storage . get_mut () ; let result = < T as ICanvasItem > :: process (& mut * guard , arg0) ; drop (guard) ; let () = result ; } } ,) ; } pub (super) unsafe extern "C" fn physics_process < T : ICanvasItem > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "ICanvasItem::physics_process" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let arg0 = sys :: callframe :: read_arg :: < f64 > (args , 0usize) ; let mut guard = storage . get_mut () ; let result = < T as ICanvasItem > :: physics_process (& mut * guard , arg0) ; drop (guard) ; let () = result ; } } ,) ; } pub (super) unsafe extern "C" fn enter_tree < T : ICanvasItem > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "ICanvasItem::enter_tree" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let mut guard = storage . get_mut () ; let result = < T as ICanvasItem > :: enter_tree (& mut * guard ,) ; drop (guard) ; let () = result ; } } ,) ; } pub (super) unsafe extern "C" fn exit_tree < T : ICanvasItem > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "ICanvasItem::exit_tree" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let mut guard = storage . get_mut () ; let result = < T as ICanvasItem > :: exit_tree (& mut * guard ,) ; drop (guard) ; let () = result ; } } ,) ; } pub (super) unsafe extern "C" fn ready < T : ICanvasItem > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "ICanvasItem::ready" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let mut guard = storage . get_mut () ; let result = < T as ICanvasItem > :: ready (& mut * guard ,) ; drop (guard) ; let () = result ; } } ,) ; } pub (super) unsafe extern "C" fn input < T : ICanvasItem > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "ICanvasItem::input" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let arg0 = crate :: obj :: Gd :: from_tagged (crate :: obj :: virtual_arg_tagged (* args . add (0usize) , true)) ; let mut guard = storage . get_mut () ; let result = < T as ICanvasItem > :: input (& mut * guard , arg0) ; drop (guard) ; let () = result ; } } ,) ; } pub (super) unsafe extern "C" fn draw < T : ICanvasItem > (instance : sys :: GDExtensionClassInstancePtr , args : * const sys :: GDExtensionConstTypePtr , ret : sys :: GDExtensionTypePtr ,) { let _ = crate :: private :: handle_panic (|| "ICanvasItem::draw" , || { unsafe { let storage = crate :: storage :: as_storage :: < T > (instance) ; let mut guard = storage . get_mut () ; let result = < T as ICanvasItem > :: draw (& mut * guard ,) ; drop (guard) ; let () = result ; } } ,) ; } }
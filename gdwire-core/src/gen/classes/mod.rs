pub mod a_star_2d ; pub use a_star_2d :: re_export :: { AStar2D , IAStar2D } ; pub mod canvas_item ; pub use canvas_item :: re_export :: { CanvasItem , ICanvasItem } ; pub mod engine ; pub use engine :: re_export :: { Engine , IEngine } ; pub mod file_access ; pub use file_access :: re_export :: { FileAccess , IFileAccess } ; pub mod input_event ; pub use input_event :: re_export :: { InputEvent , IInputEvent } ; pub mod node ; pub use node :: re_export :: { Node , INode } ; pub mod node_2d ; pub use node_2d :: re_export :: { Node2D , INode2D } ; pub mod object ; pub use object :: re_export :: { Object , IObject } ; pub mod ref_counted ; pub use ref_counted :: re_export :: { RefCounted , IRefCounted } ; pub mod resource ; pub use resource :: re_export :: { Resource , IResource } ; pub mod text_server ; pub use text_server :: re_export :: { TextServer , ITextServer } ; pub mod text_server_manager ; pub use text_server_manager :: re_export :: { TextServerManager , ITextServerManager } ; pub mod timer ; pub use timer :: re_export :: { Timer , ITimer } ; # [doc (hidden)] pub mod class_macros { pub use crate :: * ; pub use inherits_transitive_AStar2D ; pub use inherits_transitive_CanvasItem ; pub use inherits_transitive_Engine ; pub use inherits_transitive_FileAccess ; pub use inherits_transitive_InputEvent ; pub use inherits_transitive_Node ; pub use inherits_transitive_Node2D ; pub use inherits_transitive_Object ; pub use inherits_transitive_RefCounted ; pub use inherits_transitive_Resource ; pub use inherits_transitive_TextServer ; pub use inherits_transitive_TextServerManager ; pub use inherits_transitive_Timer ; }
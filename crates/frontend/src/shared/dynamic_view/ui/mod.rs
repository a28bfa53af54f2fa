pub mod filter_editor;
pub mod node_view;
pub mod page;
pub mod table;

pub use filter_editor::FilterEditor;
pub use page::DynamicViewPage;

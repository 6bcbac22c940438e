pub mod category;
pub mod tool;

pub use category::Category;
pub use tool::{Tool, ToolWithCategory};

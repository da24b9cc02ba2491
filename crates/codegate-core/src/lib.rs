pub mod page_index;
pub mod window;

pub use page_index::*;
pub use window::*;

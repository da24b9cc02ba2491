mod code_detail;
mod code_list;
mod console;

pub use code_detail::present_code_detail;
pub use code_list::present_code_list;
pub use console::build_screen_view_model;

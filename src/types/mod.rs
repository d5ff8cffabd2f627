pub mod icon;
pub mod list_input;

pub use icon::Icon;

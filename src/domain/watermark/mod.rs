pub mod font;
pub mod spec;
pub mod stamp;

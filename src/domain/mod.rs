pub mod input_source;
pub mod watermark;

pub mod notice;
pub mod text_input;

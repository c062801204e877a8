pub mod date;
pub mod parse;
pub mod validate;

pub mod date_line;
pub mod errors;

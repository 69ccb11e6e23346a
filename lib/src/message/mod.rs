pub mod headers;
pub mod parser;

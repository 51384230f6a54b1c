pub mod error;
pub mod exports;
pub mod lexer;
pub mod parser;
pub mod value;

pub use error::LiteralError;
pub use exports::{ExportedObject, exported_objects};
pub use lexer::{Token, tokenize};
pub use parser::{parse_literal, parser};
pub use value::Literal;

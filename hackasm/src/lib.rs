pub mod assemble;
pub mod error;
pub mod parser;
pub mod symbol;

pub use assemble::assemble;
pub use error::{Diagnostic, Error};
pub use parser::{Line, Stmt, Target};
pub use symbol::SymbolTable;

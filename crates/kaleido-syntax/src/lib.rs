pub mod ast;
pub mod error;
pub mod position;
pub mod token;

pub use ast::*;
pub use error::*;
pub use position::*;
pub use token::*;

pub use num_bigint::BigInt;

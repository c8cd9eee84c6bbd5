mod error;

mod macros;

pub mod bit_field;
pub mod demo;
pub mod ternary;

pub use bit_field::{BitField, BitOp};
pub use error::{Error, Result};

#[doc(hidden)]
pub use log as __log;

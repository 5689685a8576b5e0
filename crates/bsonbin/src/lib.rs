#![doc = include_str!("../README.md")]

mod binary;
pub mod error;
#[cfg(feature = "serde")]
mod extended;
mod format;
mod input;
pub mod legacy;
mod subtype;

pub use binary::*;
pub use error::*;
pub use format::*;
pub use input::*;
pub use subtype::*;

/// Capacity of an empty value, and the step by which `put` grows a full one.
pub const BUFFER_SIZE: usize = 256;

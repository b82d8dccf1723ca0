mod catalog;
mod collection;
mod loader;
mod records;

pub use crate::catalog::*;
pub use crate::collection::*;
pub use crate::loader::*;
pub use crate::records::*;

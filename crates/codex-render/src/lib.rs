mod linker;
pub mod pages;
mod slug;

pub use crate::linker::*;
pub use crate::slug::*;

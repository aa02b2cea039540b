mod common;
mod event;

pub use common::*;
pub use event::*;

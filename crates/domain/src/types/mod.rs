//! Domain types and models

pub mod reference;
pub mod results;
pub mod search;

pub use reference::*;
pub use results::*;
pub use search::*;

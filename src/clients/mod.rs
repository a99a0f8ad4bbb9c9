pub mod mock;
pub mod openrouter;

pub use mock::*;
pub use openrouter::*;

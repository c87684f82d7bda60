#![allow(dead_code)]
pub mod builders;
pub mod mock_writers;

pub use builders::*;
pub use mock_writers::*;

#![allow(dead_code)]

pub mod failures;
pub mod strategies;

pub use failures::*;
pub use strategies::*;

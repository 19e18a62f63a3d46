#![allow(dead_code)]

mod assertions;
mod fixtures;
mod test_app;

// Re-export
pub use assertions::{assert_same_direction, assert_state_valid};
pub use fixtures::*;
pub use test_app::{StatusLog, TestApp};

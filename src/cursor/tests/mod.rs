//! Unit tests for the cursor measurement core

mod test_utils;
mod scaling_tests;

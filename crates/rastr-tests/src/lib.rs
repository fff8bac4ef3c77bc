//! Integration tests for the rastr crates.
//!
//! End-to-end coverage of the codec -> registry -> transformation -> codec
//! data flow that the unit tests in each crate only exercise piecewise.

//! Test modules for the InvestWise core
//!
//! Cross-module tests live here; unit tests sit next to the code they
//! cover in per-module `#[cfg(test)]` blocks.
//!
//! - `table_test` - table view invariants (filtering, sorting, selection)
//! - `integration_test` - full screen flows over the mock collections

#[cfg(test)]
pub mod table_test;

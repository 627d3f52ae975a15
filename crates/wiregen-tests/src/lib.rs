//! Scenario tests for the wiregen pipeline.
//!
//! Each test module feeds a JSON manifest through the full stack and
//! checks the resolved declarations, the accumulated errors, or the
//! rendered source. Shared manifests live in [`fixtures`].

pub mod fixtures;

#[cfg(test)]
mod test;

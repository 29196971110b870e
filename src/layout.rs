//! Layout module for tracking dropdown regions
//!
//! `DropdownRegions` records where each part of a dropdown was drawn in the last
//! render pass, and `region_at()` resolves a screen position to the part under it.

mod layout_hit_test;
mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{DropdownRegions, Region};

#[cfg(test)]
#[path = "layout/layout_regions_tests.rs"]
mod layout_regions_tests;

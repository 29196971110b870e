//! Option list module
//!
//! Holds the caller-owned, ordered list of labeled options a dropdown indexes into.

mod option_list;

pub use option_list::{OptionList, SelectOption};

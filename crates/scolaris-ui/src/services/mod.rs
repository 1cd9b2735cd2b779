//! Browser-side implementations of core capabilities.

pub(crate) mod api;
pub(crate) mod reset;

//! Read-only projections over task collections.

pub mod view_filter;

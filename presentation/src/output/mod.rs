//! Output formatting

pub mod summary;

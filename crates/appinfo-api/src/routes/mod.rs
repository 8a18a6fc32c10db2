//! Route handlers

pub mod index;

pub use index::app_details;

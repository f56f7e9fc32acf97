// Core modules implementing the filter pipeline, serialization, and error modeling.
pub mod error;
pub mod filter;
pub mod format;

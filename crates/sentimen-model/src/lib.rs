pub mod artifact;
pub mod error;
pub mod pipeline;

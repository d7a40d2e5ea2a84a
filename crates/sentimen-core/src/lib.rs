pub mod classify;
pub mod error;
pub mod flow;
pub mod language;
pub mod normalize;

pub mod analysis;
pub mod digits;
pub mod engine;
pub mod normalizer;
pub mod script;
pub mod search;
pub mod types;

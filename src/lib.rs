// src/lib.rs

pub mod c_api;
pub mod charts;
pub mod config;
pub mod core;
pub mod correction;
pub mod dom;
pub mod error;
pub mod keyboard;
pub mod lexicon;
pub mod locale;
pub mod logging;
pub mod persistence;

pub use crate::config::EngineConfig;
pub use crate::core::engine::ArabicEngine;
pub use crate::core::types::{Script, TextAnalysis, TextDirection};
pub use crate::error::{ArabicError, Result};

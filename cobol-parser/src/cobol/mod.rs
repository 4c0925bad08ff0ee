//! Main module for cobol library functionality

pub mod formats;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod preprocessing;
pub mod token;
pub mod transforms;

//! Main module for artefact library functionality

pub mod ast;
pub mod config;
pub mod diagnostics;
pub mod formats;
pub mod interpreter;
pub mod lexing;
pub mod parsing;
pub mod pipeline;
pub mod testing;
pub mod token;
pub mod validation;

//! Parses single-line, Java-like method signatures such as
//! `private void log(String value)` into a `model::MethodSignature`.

#[macro_use]
extern crate log;

pub mod model;
pub mod parser;
pub mod logging;

pub use crate::model::{AccessModifier, Argument, MethodSignature};
pub use crate::parser::{parse, Error};

//! Structures for a parsed method signature of the form
//! `[accessModifier] returnType methodName(argType argName, ...)`.

pub mod signature;

pub use self::signature::{AccessModifier, Argument, MethodSignature};

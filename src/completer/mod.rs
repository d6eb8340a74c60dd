//! Expansion followed by per-query solving

mod core;

pub use self::core::{Completer, Completion};

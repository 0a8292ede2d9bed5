//! Argument bundles for hand-written mock objects
//!
//! A mock records the arguments of each call as a fixed-arity bundle and
//! compares it against an expected bundle. This crate provides:
//!
//! - `Arg` tagged wrapper for one argument (object / value / list / nil)
//! - `Args0` .. `Args11` bundles with slot-by-slot equality
//! - `loose_eq` value-shape-aware comparison of object references
//! - `ObjRef`, `Selector`, `TypeToken` carriers for reference arguments
//!
//! # Example
//! ```
//! use mock_args::prelude::*;
//!
//! let expected = args!(arg::value(42), arg::object(ObjRef::new(7i64)));
//! let recorded = args!(arg::value(42), arg::object(ObjRef::new(7i64)));
//! assert_eq!(expected, recorded);
//! ```

pub mod arg;
pub mod args;
pub mod error;
pub mod loose_eq;
pub mod object;

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::arg::{self, Arg, ArgKind, NeverEq};
    pub use super::args::{
        ArgBundle, Args0, Args1, Args10, Args11, Args2, Args3, Args4, Args5, Args6, Args7, Args8,
        Args9,
    };
    pub use super::error::{ArgsError, ArgsResult};
    pub use super::loose_eq::{loose_eq, loose_shape};
    pub use super::object::{ObjRef, Selector, TypeToken};
    pub use crate::args;
}

pub use prelude::*;

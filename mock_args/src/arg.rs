//! Tagged argument wrapper
//!
//! This module provides the `Arg` enum that represents one call argument
//! for comparison, plus one construction helper per source value shape.
//!
//! # Example
//! ```
//! use mock_args::arg;
//!
//! assert_eq!(arg::value(42), arg::value(42));
//! assert_ne!(arg::list(vec![1, 2]), arg::list(vec![2, 1]));
//! assert_eq!(arg::optional::<i32>(None), arg::optional(None));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::loose_eq::loose_eq;
use crate::object::{ObjRef, TypeToken};

/// Value-type placeholder for arguments that only hold object references
///
/// Any two instances are unequal, so a `Value` or `List` carrying this type
/// can never produce a match on content.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverEq;

impl PartialEq for NeverEq {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

/// One wrapped call argument
#[derive(Clone)]
pub enum Arg<T = NeverEq> {
    /// Opaque object reference, compared with `loose_eq`
    Object(ObjRef),
    /// Value-comparable scalar or struct
    Value(T),
    /// Ordered list of values
    List(Vec<T>),
    /// Missing argument
    Nil,
}

/// Variant tag of an `Arg`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    /// `Arg::Object`
    Object,
    /// `Arg::Value`
    Value,
    /// `Arg::List`
    List,
    /// `Arg::Nil`
    Nil,
}

impl ArgKind {
    /// Lowercase variant name used in mismatch messages
    pub fn as_str(&self) -> &'static str {
        match self {
            ArgKind::Object => "object",
            ArgKind::Value => "value",
            ArgKind::List => "list",
            ArgKind::Nil => "nil",
        }
    }
}

impl<T> Arg<T> {
    /// Variant tag of this argument
    pub fn kind(&self) -> ArgKind {
        match self {
            Arg::Object(_) => ArgKind::Object,
            Arg::Value(_) => ArgKind::Value,
            Arg::List(_) => ArgKind::List,
            Arg::Nil => ArgKind::Nil,
        }
    }

    /// Check if this argument is nil
    pub fn is_nil(&self) -> bool {
        matches!(self, Arg::Nil)
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ========== Construction helpers ==========

/// Wrap an object reference
pub fn object(obj: ObjRef) -> Arg {
    Arg::Object(obj)
}

/// Wrap a list of object references as a single object
///
/// The list is compared element-wise with `loose_eq`.
pub fn object_list(objs: Vec<ObjRef>) -> Arg {
    Arg::Object(ObjRef::new(objs))
}

/// Wrap an optional list of object references
///
/// A missing list is treated as empty, not as `Nil`.
pub fn optional_object_list(objs: Option<Vec<ObjRef>>) -> Arg {
    object_list(objs.unwrap_or_default())
}

/// Wrap the class identity of `C`
pub fn class<C: ?Sized + 'static>() -> Arg {
    type_token(TypeToken::of::<C>())
}

/// Wrap a class identity token
pub fn type_token(token: TypeToken) -> Arg {
    Arg::Object(ObjRef::new(token))
}

/// Wrap an equatable value
pub fn value<T: PartialEq>(value: T) -> Arg<T> {
    Arg::Value(value)
}

/// Wrap a sequence of equatable values, keeping its order
pub fn list<T: PartialEq>(items: impl IntoIterator<Item = T>) -> Arg<T> {
    Arg::List(items.into_iter().collect())
}

/// Flatten a mapping into `"key:value"` entries
///
/// Entries follow the mapping's iteration order. Use an ordered map when the
/// expectation is built from a different map instance with several entries.
pub fn dict<K, V, M>(map: M) -> Arg<String>
where
    K: fmt::Display,
    V: fmt::Display,
    M: IntoIterator<Item = (K, V)>,
{
    Arg::List(
        map.into_iter()
            .map(|(k, v)| format!("{}:{}", k, v))
            .collect(),
    )
}

/// Flatten an optional mapping; a missing mapping is treated as empty
pub fn optional_dict<K, V, M>(map: Option<M>) -> Arg<String>
where
    K: fmt::Display,
    V: fmt::Display,
    M: IntoIterator<Item = (K, V)>,
{
    match map {
        Some(map) => dict(map),
        None => Arg::List(Vec::new()),
    }
}

/// Wrap an optional value: `Value` if present, `Nil` otherwise
pub fn optional<T: PartialEq>(value: Option<T>) -> Arg<T> {
    match value {
        Some(value) => Arg::Value(value),
        None => Arg::Nil,
    }
}

// ========== From implementations ==========

impl<T> From<Option<T>> for Arg<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Arg::Value(value),
            None => Arg::Nil,
        }
    }
}

impl<T> From<ObjRef> for Arg<T> {
    fn from(obj: ObjRef) -> Self {
        Arg::Object(obj)
    }
}

impl<T, U: std::any::Any + Send + Sync> From<Arc<U>> for Arg<T> {
    fn from(arc: Arc<U>) -> Self {
        Arg::Object(ObjRef::from_arc(arc))
    }
}

// ========== PartialEq implementation ==========

impl<T: PartialEq> PartialEq for Arg<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Arg::Object(a), Arg::Object(b)) => loose_eq(a, b),
            (Arg::Value(a), Arg::Value(b)) => a == b,
            (Arg::List(a), Arg::List(b)) => a == b,
            (Arg::Nil, Arg::Nil) => true,
            _ => false,
        }
    }
}

// ========== Debug / Display ==========

impl<T: fmt::Debug> fmt::Debug for Arg<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Object(obj) => f.debug_tuple("Object").field(obj).finish(),
            Arg::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Arg::List(items) => f.debug_tuple("List").field(items).finish(),
            Arg::Nil => f.write_str("Nil"),
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Arg<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Object(obj) => write!(f, "{}", obj),
            Arg::Value(v) => write!(f, "{:?}", v),
            Arg::List(items) => {
                write!(f, "[")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", v)?;
                }
                write!(f, "]")
            }
            Arg::Nil => write!(f, "nil"),
        }
    }
}

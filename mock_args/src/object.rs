//! Opaque object references for identity-compared arguments
//!
//! This module provides `ObjRef`, the handle stored by `Arg::Object`, along
//! with the two token types that loose equality understands natively:
//! `Selector` (a method name) and `TypeToken` (a class identity).

use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Value-equality hook recorded by `ObjRef::equatable`
pub(crate) type EqHook = fn(&(dyn Any + Send + Sync), &(dyn Any + Send + Sync)) -> bool;

/// Shared, identity-bearing reference to an arbitrary object
///
/// Cloning an `ObjRef` keeps the same identity; two `ObjRef::new` calls on
/// equal values produce two distinct identities.
#[derive(Clone)]
pub struct ObjRef {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
    eq_hook: Option<EqHook>,
}

impl ObjRef {
    /// Wrap a value in a fresh identity
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Reuse the identity of an existing `Arc`
    pub fn from_arc<T: Any + Send + Sync>(arc: Arc<T>) -> Self {
        ObjRef {
            inner: arc,
            type_name: std::any::type_name::<T>(),
            eq_hook: None,
        }
    }

    /// Wrap a value that carries its own equality
    ///
    /// Two references built this way compare with `T::eq` when they hold the
    /// same concrete type, instead of by identity.
    pub fn equatable<T: Any + Send + Sync + PartialEq>(value: T) -> Self {
        ObjRef {
            eq_hook: Some(hook_eq::<T>),
            ..Self::new(value)
        }
    }

    /// Name of the concrete type behind this reference
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// `TypeId` of the concrete type behind this reference
    pub fn type_id(&self) -> TypeId {
        Any::type_id(&*self.inner)
    }

    /// Check whether the referenced object is a `T`
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Borrow the referenced object as a `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    /// Borrow the referenced object as text
    ///
    /// Recognises `String`, `&'static str`, `Box<str>` and `Cow<'static, str>`.
    pub fn as_text(&self) -> Option<&str> {
        if let Some(s) = self.downcast_ref::<String>() {
            return Some(s.as_str());
        }
        if let Some(s) = self.downcast_ref::<&'static str>() {
            return Some(*s);
        }
        if let Some(s) = self.downcast_ref::<Box<str>>() {
            return Some(&**s);
        }
        self.downcast_ref::<Cow<'static, str>>().map(|s| &**s)
    }

    /// Borrow the referenced object as `dyn Any`
    pub fn as_any(&self) -> &(dyn Any + Send + Sync) {
        &*self.inner
    }

    /// Identity comparison: true when both handles point at the same object
    pub fn ptr_eq(&self, other: &ObjRef) -> bool {
        Arc::as_ptr(&self.inner) as *const () == Arc::as_ptr(&other.inner) as *const ()
    }

    pub(crate) fn eq_hook(&self) -> Option<EqHook> {
        self.eq_hook
    }
}

fn hook_eq<T: Any + PartialEq>(lhs: &(dyn Any + Send + Sync), rhs: &(dyn Any + Send + Sync)) -> bool {
    match (lhs.downcast_ref::<T>(), rhs.downcast_ref::<T>()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

impl fmt::Debug for ObjRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ObjRef({} @ {:p})",
            self.type_name,
            Arc::as_ptr(&self.inner) as *const ()
        )
    }
}

impl fmt::Display for ObjRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(s) = self.as_text() {
            return write!(f, "{:?}", s);
        }
        if let Some(sel) = self.downcast_ref::<Selector>() {
            return write!(f, "#selector({})", sel);
        }
        if let Some(token) = self.downcast_ref::<TypeToken>() {
            return write!(f, "{}.self", token.name());
        }
        if let Some(list) = self.downcast_ref::<Vec<ObjRef>>() {
            write!(f, "[")?;
            for (i, obj) in list.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", obj)?;
            }
            return write!(f, "]");
        }
        write!(f, "<{}>", self.type_name)
    }
}

// ========== Selector ==========

/// Method selector token, compared by name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector(Cow<'static, str>);

impl Selector {
    /// Create a selector for the given method name
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Selector(name.into())
    }

    /// The selector's textual name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ========== TypeToken ==========

/// Class identity token
///
/// Two tokens are equal iff they were taken from the same type.
#[derive(Debug, Clone, Copy)]
pub struct TypeToken {
    id: TypeId,
    name: &'static str,
}

impl TypeToken {
    /// Token for the type `T`
    pub fn of<T: ?Sized + Any>() -> Self {
        TypeToken {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeToken {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeToken {}

impl Hash for TypeToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_clone_keeps_identity() {
        let obj = ObjRef::new(Point { x: 1, y: 2 });
        let copy = obj.clone();
        assert!(obj.ptr_eq(&copy));

        let other = ObjRef::new(Point { x: 1, y: 2 });
        assert!(!obj.ptr_eq(&other));
    }

    #[test]
    fn test_from_arc_shares_identity() {
        let shared = Arc::new(Point { x: 0, y: 0 });
        let a = ObjRef::from_arc(Arc::clone(&shared));
        let b = ObjRef::from_arc(shared);
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn test_downcast() {
        let obj = ObjRef::new(42i64);
        assert!(obj.is::<i64>());
        assert!(!obj.is::<i32>());
        assert_eq!(obj.downcast_ref::<i64>(), Some(&42));
        assert_eq!(obj.type_id(), TypeId::of::<i64>());
        assert_eq!(obj.type_name(), "i64");
    }

    #[test]
    fn test_equatable_hook() {
        let a = ObjRef::equatable(Point { x: 1, y: 2 });
        let b = ObjRef::equatable(Point { x: 1, y: 2 });
        let hook = a.eq_hook().unwrap();
        assert!(hook(a.as_any(), b.as_any()));
        assert!(ObjRef::new(Point { x: 1, y: 2 }).eq_hook().is_none());
    }

    #[test]
    fn test_as_text() {
        assert_eq!(ObjRef::new(String::from("a")).as_text(), Some("a"));
        assert_eq!(ObjRef::new("b").as_text(), Some("b"));
        assert_eq!(ObjRef::new(Box::<str>::from("c")).as_text(), Some("c"));
        assert_eq!(ObjRef::new(Cow::<'static, str>::Owned("d".into())).as_text(), Some("d"));
        assert_eq!(ObjRef::new(1u8).as_text(), None);
    }

    #[test]
    fn test_selector_and_type_token() {
        assert_eq!(Selector::new("viewDidLoad"), Selector::new(String::from("viewDidLoad")));
        assert_eq!(Selector::new("tap:").name(), "tap:");

        assert_eq!(TypeToken::of::<Point>(), TypeToken::of::<Point>());
        assert_ne!(TypeToken::of::<Point>(), TypeToken::of::<String>());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ObjRef::new(String::from("hi"))), "\"hi\"");
        assert_eq!(format!("{}", ObjRef::new(Box::<str>::from("boxed"))), "\"boxed\"");
        assert_eq!(
            format!("{}", ObjRef::new(Cow::<'static, str>::Borrowed("cow"))),
            "\"cow\""
        );
        assert_eq!(format!("{}", ObjRef::new(Selector::new("reload"))), "#selector(reload)");
        let list = ObjRef::new(vec![ObjRef::new("a"), ObjRef::new(Point { x: 0, y: 0 })]);
        assert!(format!("{}", list).starts_with("[\"a\", <"));
    }
}

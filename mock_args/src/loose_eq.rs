//! Loose equality for object references
//!
//! Callers frequently pass plain values (strings, numbers, selectors) as
//! opaque object references and still expect them to match by value. This
//! module compares two `ObjRef`s through an ordered table of recognised value
//! shapes; the first shape both sides belong to decides the result. References
//! with no shared shape are compared by identity.

use crate::object::{ObjRef, Selector, TypeToken};

/// Comparator for one value shape
///
/// Returns `None` when either side does not belong to the shape.
type ShapeEq = fn(&ObjRef, &ObjRef) -> Option<bool>;

struct Shape {
    name: &'static str,
    eq: ShapeEq,
}

/// Dispatch table, in priority order
const SHAPES: &[Shape] = &[
    Shape {
        name: "text",
        eq: text_eq,
    },
    Shape {
        name: "integer",
        eq: integer_eq,
    },
    Shape {
        name: "float",
        eq: float_eq,
    },
    Shape {
        name: "bool",
        eq: bool_eq,
    },
    Shape {
        name: "selector",
        eq: selector_eq,
    },
    Shape {
        name: "type",
        eq: type_token_eq,
    },
    Shape {
        name: "object list",
        eq: object_list_eq,
    },
    Shape {
        name: "equatable",
        eq: equatable_eq,
    },
];

/// Compare two object references
///
/// Dispatches on the recognised value shape of both operands and falls back
/// to identity (`ObjRef::ptr_eq`) when they share none.
pub fn loose_eq(lhs: &ObjRef, rhs: &ObjRef) -> bool {
    for shape in SHAPES {
        if let Some(equal) = (shape.eq)(lhs, rhs) {
            return equal;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(
        lhs = lhs.type_name(),
        rhs = rhs.type_name(),
        "no shared value shape, comparing by identity"
    );
    lhs.ptr_eq(rhs)
}

/// Name of the value shape `obj` is recognised as, if any
pub fn loose_shape(obj: &ObjRef) -> Option<&'static str> {
    SHAPES
        .iter()
        .find(|shape| (shape.eq)(obj, obj).is_some())
        .map(|shape| shape.name)
}

// ========== Shape extraction ==========

/// Width-independent integer key
///
/// Non-negative values are always `NonNegative`, so each number has exactly
/// one key whatever type it was boxed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntKey {
    Negative(i128),
    NonNegative(u128),
}

impl IntKey {
    fn signed(v: i128) -> Self {
        match u128::try_from(v) {
            Ok(v) => IntKey::NonNegative(v),
            Err(_) => IntKey::Negative(v),
        }
    }
}

macro_rules! try_integers {
    ($obj:expr; signed: $($ity:ty),+; unsigned: $($uty:ty),+) => {
        $(
            if let Some(v) = $obj.downcast_ref::<$ity>() {
                return Some(IntKey::signed(*v as i128));
            }
        )+
        $(
            if let Some(v) = $obj.downcast_ref::<$uty>() {
                return Some(IntKey::NonNegative(*v as u128));
            }
        )+
    };
}

fn as_integer(obj: &ObjRef) -> Option<IntKey> {
    try_integers!(obj;
        signed: i64, i32, isize, i16, i8, i128;
        unsigned: u64, u32, usize, u16, u8, u128);
    None
}

fn as_float(obj: &ObjRef) -> Option<f64> {
    if let Some(v) = obj.downcast_ref::<f64>() {
        return Some(*v);
    }
    obj.downcast_ref::<f32>().map(|v| f64::from(*v))
}

// ========== Shape comparators ==========

fn text_eq(lhs: &ObjRef, rhs: &ObjRef) -> Option<bool> {
    Some(lhs.as_text()? == rhs.as_text()?)
}

fn integer_eq(lhs: &ObjRef, rhs: &ObjRef) -> Option<bool> {
    Some(as_integer(lhs)? == as_integer(rhs)?)
}

fn float_eq(lhs: &ObjRef, rhs: &ObjRef) -> Option<bool> {
    Some(as_float(lhs)? == as_float(rhs)?)
}

fn bool_eq(lhs: &ObjRef, rhs: &ObjRef) -> Option<bool> {
    Some(lhs.downcast_ref::<bool>()? == rhs.downcast_ref::<bool>()?)
}

fn selector_eq(lhs: &ObjRef, rhs: &ObjRef) -> Option<bool> {
    let (a, b) = (lhs.downcast_ref::<Selector>()?, rhs.downcast_ref::<Selector>()?);
    Some(a.name() == b.name())
}

fn type_token_eq(lhs: &ObjRef, rhs: &ObjRef) -> Option<bool> {
    Some(lhs.downcast_ref::<TypeToken>()? == rhs.downcast_ref::<TypeToken>()?)
}

fn object_list_eq(lhs: &ObjRef, rhs: &ObjRef) -> Option<bool> {
    let (a, b) = (
        lhs.downcast_ref::<Vec<ObjRef>>()?,
        rhs.downcast_ref::<Vec<ObjRef>>()?,
    );
    Some(a.len() == b.len() && a.iter().zip(b).all(|(x, y)| loose_eq(x, y)))
}

fn equatable_eq(lhs: &ObjRef, rhs: &ObjRef) -> Option<bool> {
    let hook = lhs.eq_hook()?;
    rhs.eq_hook()?;
    if lhs.type_id() != rhs.type_id() {
        return Some(false);
    }
    Some(hook(lhs.as_any(), rhs.as_any()))
}

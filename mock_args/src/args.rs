//! Fixed-arity argument bundles
//!
//! `Args0` through `Args11` hold the wrapped parameter list of one call. Two
//! bundles are equal iff every pair of corresponding slots is equal. Arity
//! and per-slot value types are part of the bundle's type, so bundles of a
//! different shape cannot be compared at all.
//!
//! # Example
//! ```
//! use mock_args::{arg, args};
//!
//! let recorded = args!(arg::value(42), arg::value("x"));
//! assert_eq!(recorded, args!(arg::value(42), arg::value("x")));
//! assert_ne!(recorded, args!(arg::value(42), arg::value("y")));
//! ```

use std::fmt;

use crate::arg::Arg;
use crate::error::{ArgsError, ArgsResult};

/// Common interface of the bundle family
pub trait ArgBundle {
    /// Number of argument slots
    const ARITY: usize;

    fn arity(&self) -> usize {
        Self::ARITY
    }
}

/// Bundle for a call without arguments; all instances are equal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Args0;

impl Args0 {
    pub fn new() -> Self {
        Args0
    }
}

impl ArgBundle for Args0 {
    const ARITY: usize = 0;
}

impl fmt::Display for Args0 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Args0()")
    }
}

impl<T> TryFrom<Vec<Arg<T>>> for Args0 {
    type Error = ArgsError;

    fn try_from(args: Vec<Arg<T>>) -> ArgsResult<Self> {
        check_arity("Args0", 0, args.len())?;
        Ok(Args0)
    }
}

fn check_arity(bundle: &'static str, expected: usize, actual: usize) -> ArgsResult<()> {
    if expected == actual {
        return Ok(());
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(bundle, expected, actual, "rejecting argument list");
    Err(ArgsError::arity_mismatch(bundle, expected, actual))
}

fn next_slot<T>(
    slots: &mut std::vec::IntoIter<Arg<T>>,
    bundle: &'static str,
    expected: usize,
    actual: usize,
) -> ArgsResult<Arg<T>> {
    slots
        .next()
        .ok_or_else(|| ArgsError::arity_mismatch(bundle, expected, actual))
}

/// Substitute one type for each repetition of a type parameter
macro_rules! replace_ty {
    ($_t:tt => $sub:ty) => {
        $sub
    };
}

macro_rules! define_args {
    ($($name:ident($arity:literal) { $($field:ident: $ty:ident),+ })+) => {
        $(
            #[doc = concat!("Bundle of ", stringify!($arity), " wrapped argument(s), compared slot by slot")]
            #[derive(Clone)]
            pub struct $name<$($ty),+> {
                $($field: Arg<$ty>),+
            }

            impl<$($ty),+> $name<$($ty),+> {
                #[allow(clippy::too_many_arguments)]
                pub fn new($($field: Arg<$ty>),+) -> Self {
                    $name { $($field),+ }
                }
            }

            impl<$($ty),+> ArgBundle for $name<$($ty),+> {
                const ARITY: usize = $arity;
            }

            impl<$($ty: PartialEq),+> PartialEq for $name<$($ty),+> {
                fn eq(&self, other: &Self) -> bool {
                    true $(&& self.$field == other.$field)+
                }
            }

            impl<$($ty),+> From<($(Arg<$ty>,)+)> for $name<$($ty),+> {
                fn from(($($field,)+): ($(Arg<$ty>,)+)) -> Self {
                    $name { $($field),+ }
                }
            }

            impl<T> TryFrom<Vec<Arg<T>>> for $name<$(replace_ty!($ty => T)),+> {
                type Error = ArgsError;

                fn try_from(args: Vec<Arg<T>>) -> ArgsResult<Self> {
                    let actual = args.len();
                    check_arity(stringify!($name), $arity, actual)?;
                    let mut slots = args.into_iter();
                    Ok($name {
                        $($field: next_slot(&mut slots, stringify!($name), $arity, actual)?),+
                    })
                }
            }

            impl<$($ty: fmt::Debug),+> fmt::Debug for $name<$($ty),+> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_tuple(stringify!($name))
                        $(.field(&self.$field))+
                        .finish()
                }
            }

            impl<$($ty: fmt::Debug),+> fmt::Display for $name<$($ty),+> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let slots: [&dyn fmt::Display; $arity] = [$(&self.$field),+];
                    write!(f, "{}(", stringify!($name))?;
                    for (i, slot) in slots.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", slot)?;
                    }
                    write!(f, ")")
                }
            }
        )+
    };
}

define_args! {
    Args1(1) { arg1: A1 }
    Args2(2) { arg1: A1, arg2: A2 }
    Args3(3) { arg1: A1, arg2: A2, arg3: A3 }
    Args4(4) { arg1: A1, arg2: A2, arg3: A3, arg4: A4 }
    Args5(5) { arg1: A1, arg2: A2, arg3: A3, arg4: A4, arg5: A5 }
    Args6(6) { arg1: A1, arg2: A2, arg3: A3, arg4: A4, arg5: A5, arg6: A6 }
    Args7(7) { arg1: A1, arg2: A2, arg3: A3, arg4: A4, arg5: A5, arg6: A6, arg7: A7 }
    Args8(8) {
        arg1: A1, arg2: A2, arg3: A3, arg4: A4, arg5: A5, arg6: A6, arg7: A7, arg8: A8
    }
    Args9(9) {
        arg1: A1, arg2: A2, arg3: A3, arg4: A4, arg5: A5, arg6: A6, arg7: A7, arg8: A8,
        arg9: A9
    }
    Args10(10) {
        arg1: A1, arg2: A2, arg3: A3, arg4: A4, arg5: A5, arg6: A6, arg7: A7, arg8: A8,
        arg9: A9, arg10: A10
    }
    Args11(11) {
        arg1: A1, arg2: A2, arg3: A3, arg4: A4, arg5: A5, arg6: A6, arg7: A7, arg8: A8,
        arg9: A9, arg10: A10, arg11: A11
    }
}

/// Build the bundle whose arity matches the number of arguments
///
/// # Example
/// ```
/// use mock_args::{arg, args, ArgBundle};
///
/// let bundle = args!(arg::value(1), arg::optional::<&str>(None), arg::list(vec![1.5]));
/// assert_eq!(bundle.arity(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::args::Args0::new()
    };
    ($a1:expr $(,)?) => {
        $crate::args::Args1::new($a1)
    };
    ($a1:expr, $a2:expr $(,)?) => {
        $crate::args::Args2::new($a1, $a2)
    };
    ($a1:expr, $a2:expr, $a3:expr $(,)?) => {
        $crate::args::Args3::new($a1, $a2, $a3)
    };
    ($a1:expr, $a2:expr, $a3:expr, $a4:expr $(,)?) => {
        $crate::args::Args4::new($a1, $a2, $a3, $a4)
    };
    ($a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr $(,)?) => {
        $crate::args::Args5::new($a1, $a2, $a3, $a4, $a5)
    };
    ($a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr $(,)?) => {
        $crate::args::Args6::new($a1, $a2, $a3, $a4, $a5, $a6)
    };
    ($a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr, $a7:expr $(,)?) => {
        $crate::args::Args7::new($a1, $a2, $a3, $a4, $a5, $a6, $a7)
    };
    ($a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr, $a7:expr, $a8:expr $(,)?) => {
        $crate::args::Args8::new($a1, $a2, $a3, $a4, $a5, $a6, $a7, $a8)
    };
    ($a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr, $a7:expr, $a8:expr,
     $a9:expr $(,)?) => {
        $crate::args::Args9::new($a1, $a2, $a3, $a4, $a5, $a6, $a7, $a8, $a9)
    };
    ($a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr, $a7:expr, $a8:expr,
     $a9:expr, $a10:expr $(,)?) => {
        $crate::args::Args10::new($a1, $a2, $a3, $a4, $a5, $a6, $a7, $a8, $a9, $a10)
    };
    ($a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr, $a7:expr, $a8:expr,
     $a9:expr, $a10:expr, $a11:expr $(,)?) => {
        $crate::args::Args11::new($a1, $a2, $a3, $a4, $a5, $a6, $a7, $a8, $a9, $a10, $a11)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arg::{self, NeverEq};
    use crate::object::ObjRef;

    #[test]
    fn test_args0_always_equal() {
        assert_eq!(Args0::new(), Args0);
        assert_eq!(args!(), Args0::default());
        assert_eq!(Args0::ARITY, 0);
    }

    #[test]
    fn test_args2_scenario() {
        let recorded = Args2::new(arg::value(42), arg::value("x"));
        assert_eq!(recorded, Args2::new(arg::value(42), arg::value("x")));
        assert_ne!(recorded, Args2::new(arg::value(42), arg::value("y")));
        assert_ne!(recorded, Args2::new(arg::value(41), arg::value("x")));
    }

    #[test]
    fn test_mixed_slot_kinds() {
        let bundle = || {
            Args4::new(
                arg::object(ObjRef::new(7i64)),
                arg::list(vec![1u8, 2]),
                arg::optional::<f64>(None),
                arg::dict(std::collections::BTreeMap::from([("k", "v")])),
            )
        };
        assert_eq!(bundle(), bundle());
        assert_eq!(bundle().arity(), 4);
    }

    #[test]
    fn test_identity_object_slot() {
        struct Delegate;
        let delegate = ObjRef::new(Delegate);
        let a: Args1<NeverEq> = Args1::new(arg::object(delegate.clone()));
        assert_eq!(a, Args1::new(arg::object(delegate)));
        assert_ne!(a, Args1::new(arg::object(ObjRef::new(Delegate))));
    }

    #[test]
    fn test_args11_every_slot_counts() {
        let base = || args!(
            arg::value(1), arg::value(2), arg::value(3), arg::value(4),
            arg::value(5), arg::value(6), arg::value(7), arg::value(8),
            arg::value(9), arg::value(10), arg::value(11),
        );
        assert_eq!(base(), base());
        assert_eq!(Args11::<i32, i32, i32, i32, i32, i32, i32, i32, i32, i32, i32>::ARITY, 11);

        let mut changed = base();
        changed.arg11 = arg::value(0);
        assert_ne!(base(), changed);

        let mut changed = base();
        changed.arg1 = Arg::Nil;
        assert_ne!(base(), changed);
    }

    #[test]
    fn test_from_tuple() {
        let bundle: Args3<i32, &str, bool> =
            (arg::value(1), arg::value("a"), arg::value(true)).into();
        assert_eq!(bundle, args!(arg::value(1), arg::value("a"), arg::value(true)));
    }

    #[test]
    fn test_try_from_vec() {
        let bundle = Args3::try_from(vec![arg::value(1), arg::value(2), arg::value(3)]).unwrap();
        assert_eq!(bundle, args!(arg::value(1), arg::value(2), arg::value(3)));

        let err = Args2::<i32, i32>::try_from(vec![arg::value(1)]).unwrap_err();
        assert_eq!(err, ArgsError::arity_mismatch("Args2", 2, 1));

        let err = Args0::try_from(vec![arg::value(1)]).unwrap_err();
        assert_eq!(err, ArgsError::arity_mismatch("Args0", 0, 1));
    }

    #[test]
    fn test_display_and_debug() {
        let bundle = args!(arg::value(42), arg::value("x"), arg::optional::<i32>(None));
        assert_eq!(format!("{}", bundle), "Args3(42, \"x\", nil)");
        assert_eq!(format!("{:?}", args!(arg::value(1))), "Args1(Value(1))");
    }
}

//! Binary operators.
//!
//! Four flavours of addition, covering both typing styles with and without
//! self-declared members:
//!
//! ```text
//!                     | declares identity | declares nothing
//! --------------------+-------------------+-----------------
//! strongly typed      | PlusMonoid<T>     | Plus<T>
//! generic argument    | PlusGeneric       | PlusDeduced
//! ```

use core::fmt;
use core::marker::PhantomData;
use core::ops::Add;

use num_traits::Zero;

use crate::members::IdentityFor;

/// A callable taking two operands and producing a result.
pub trait BinaryOp<L, R = L> {
    type Output;

    fn apply(&self, lhs: L, rhs: R) -> Self::Output;
}

// =============================================================================
// Strongly typed
// =============================================================================

// Marker traits without bounds on the phantom operand type.
macro_rules! impl_marker_traits {
    ($Op:ident) => {
        impl<T> $Op<T> {
            pub const fn new() -> Self {
                $Op(PhantomData)
            }
        }

        impl<T> Clone for $Op<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $Op<T> {}

        impl<T> Default for $Op<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T> fmt::Debug for $Op<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}<{}>", stringify!($Op), core::any::type_name::<T>())
            }
        }
    };
}

/// Addition over `T` that declares its own identity and operand type.
#[derive(macros::Monoid)]
#[monoid(operand = T, identity = T::zero(), bound = "T: Zero")]
pub struct PlusMonoid<T>(PhantomData<fn() -> T>);

impl_marker_traits!(PlusMonoid);

impl<T: Add<Output = T>> BinaryOp<T> for PlusMonoid<T> {
    type Output = T;

    #[inline]
    fn apply(&self, lhs: T, rhs: T) -> T {
        lhs + rhs
    }
}

/// Addition over `T` with no declared members.
///
/// Monoid behaviour is attached from outside, see [`crate::traits`].
pub struct Plus<T>(PhantomData<fn() -> T>);

impl_marker_traits!(Plus);

impl<T: Add<Output = T>> BinaryOp<T> for Plus<T> {
    type Output = T;

    #[inline]
    fn apply(&self, lhs: T, rhs: T) -> T {
        lhs + rhs
    }
}

// =============================================================================
// Generic argument
// =============================================================================

/// Addition accepting any addable operands, declaring an identity for every
/// type that has a zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlusGeneric;

impl<L: Add<R>, R> BinaryOp<L, R> for PlusGeneric {
    type Output = L::Output;

    #[inline]
    fn apply(&self, lhs: L, rhs: R) -> L::Output {
        lhs + rhs
    }
}

impl<T: Zero> IdentityFor<T> for PlusGeneric {
    #[inline]
    fn identity() -> T {
        T::zero()
    }
}

/// Addition accepting any addable operands, with the result type deduced
/// per call and no declared members.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlusDeduced;

impl<L: Add<R>, R> BinaryOp<L, R> for PlusDeduced {
    type Output = L::Output;

    #[inline]
    fn apply(&self, lhs: L, rhs: R) -> L::Output {
        lhs + rhs
    }
}

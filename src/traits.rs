//! Monoid trait adapters.
//!
//! Uniform access to the identity element of a binary operator, whether the
//! operator declares it itself or it is attached from outside:
//!
//! ```text
//! MonoidTraits          (operator)            MonoidTraitsFor<T>    (operator, operand)
//!   auto:   TypedIdentity                       auto:   IdentityFor<T>
//!   manual: Plus<T>, register_monoid!           manual: Plus<N>/PlusDeduced over numbers,
//!                                                       register_monoid_for!
//! ```
//!
//! The automatic and manual impls are disjoint. An operator that would match
//! both is rejected by coherence rather than resolved by priority.

use num_traits::Zero;

use crate::members::{DeclaredType, IdentityFor, TypedIdentity};
use crate::ops::{Plus, PlusDeduced};

/// Identity element and operand type of a strongly-typed operator.
///
/// Operators without declared members and without a registration do not
/// implement this trait:
///
/// ```compile_fail
/// use monoid_traits::MonoidTraits;
/// use monoid_traits::ops::PlusDeduced;
///
/// let _ = <PlusDeduced as MonoidTraits>::identity();
/// ```
///
/// Neither does an operator over an operand without a zero:
///
/// ```compile_fail
/// use monoid_traits::MonoidTraits;
/// use monoid_traits::ops::Plus;
///
/// let _ = <Plus<String> as MonoidTraits>::identity();
/// ```
pub trait MonoidTraits {
    /// Operand type.
    type Type;

    fn identity() -> Self::Type;
}

/// Operand type of a strongly-typed monoid operator.
pub type OperandOf<F> = <F as MonoidTraits>::Type;

impl<T: TypedIdentity> MonoidTraits for T {
    type Type = <T as DeclaredType>::Type;

    #[inline]
    fn identity() -> Self::Type {
        <T as TypedIdentity>::typed_identity()
    }
}

impl<T: Zero> MonoidTraits for Plus<T> {
    type Type = T;

    #[inline]
    fn identity() -> T {
        T::zero()
    }
}

/// Identity element of operator `Self` for operand type `T`.
///
/// The operand type is `T` itself, so there is no associated type.
///
/// ```compile_fail
/// use monoid_traits::MonoidTraitsFor;
/// use monoid_traits::ops::PlusDeduced;
///
/// let _ = <PlusDeduced as MonoidTraitsFor<String>>::identity();
/// ```
///
/// ```compile_fail
/// use monoid_traits::MonoidTraitsFor;
/// use monoid_traits::ops::PlusMonoid;
///
/// // Strongly-typed members do not count for the parameterized adapter.
/// let _ = <PlusMonoid<i32> as MonoidTraitsFor<i32>>::identity();
/// ```
pub trait MonoidTraitsFor<T> {
    fn identity() -> T;
}

impl<F, T> MonoidTraitsFor<T> for F
where
    F: IdentityFor<T>,
{
    #[inline]
    fn identity() -> T {
        <F as IdentityFor<T>>::identity()
    }
}

// =============================================================================
// Registration
// =============================================================================

/// Attach an identity to a strongly-typed operator that does not declare one.
///
/// ```
/// use monoid_traits::{register_monoid, MonoidTraits};
///
/// struct Max;
/// register_monoid!(Max, i32 => i32::MIN);
///
/// assert_eq!(<Max as MonoidTraits>::identity(), i32::MIN);
/// ```
#[macro_export]
macro_rules! register_monoid {
    ($Op:ty, $T:ty => $identity:expr) => {
        impl $crate::MonoidTraits for $Op {
            type Type = $T;

            #[inline]
            fn identity() -> $T {
                $identity
            }
        }
    };
}

/// Attach an identity for operand `T` to an operator that does not declare one.
///
/// ```
/// use monoid_traits::{register_monoid_for, MonoidTraitsFor};
///
/// struct Times;
/// register_monoid_for!(Times, u64 => 1);
///
/// assert_eq!(<Times as MonoidTraitsFor<u64>>::identity(), 1);
/// ```
#[macro_export]
macro_rules! register_monoid_for {
    ($Op:ty, $T:ty => $identity:expr) => {
        impl $crate::MonoidTraitsFor<$T> for $Op {
            #[inline]
            fn identity() -> $T {
                $identity
            }
        }
    };
}

// Per-type rather than blanket over `T: Zero`: a downstream crate may
// implement `IdentityFor<Local>` for these operators.
macro_rules! register_numeric_plus {
    ($($N:ty),* $(,)?) => {
        $(
            register_monoid_for!(Plus<$N>, $N => <$N as Zero>::zero());
            register_monoid_for!(PlusDeduced, $N => <$N as Zero>::zero());
        )*
    };
}

register_numeric_plus!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
);

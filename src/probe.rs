//! Capability probes.
//!
//! `has_identity!(Op)` answers "is `Op` a self-declared monoid?" as a
//! `const bool`. It is the AND of three member checks on `Probe<Op>`:
//!
//! | Constant | Holds when |
//! |----------|------------|
//! | `HAS_IDENTITY_MEMBER` | `Op: DeclaredIdentity` |
//! | `HAS_TYPE_MEMBER` | `Op: DeclaredType` |
//! | `HAS_TYPED_IDENTITY` | the declared identity converts into the declared operand type |
//!
//! The last one is exactly the bound of the automatic `MonoidTraits` impl,
//! so a `true` answer means `<Op as MonoidTraits>::identity()` resolves.
//!
//! `has_identity_for!(Op, T)` answers the same question per operand type
//! with the single constant `ProbeFor::<Op, T>::HAS_IDENTITY_FOR`
//! (`Op: IdentityFor<T>`).
//!
//! Each constant exists twice: as an inherent const on the probe type,
//! only applicable when the member is present, and as a `false` default in a
//! `...Fallback` trait. Path resolution prefers the inherent one.
//!
//! Answers are only meaningful for concrete types. Inside `fn foo<T>()` the
//! inherent consts never apply and every check reads `false`; generic code
//! bounds on the adapters instead.

use core::marker::PhantomData;

use crate::members::{DeclaredIdentity, DeclaredType, IdentityFor, TypedIdentity};

/// Probe wrapper for strongly-typed operators.
#[doc(hidden)]
pub struct Probe<T>(PhantomData<fn() -> T>);

/// Probe wrapper for (operator, operand) pairs.
#[doc(hidden)]
pub struct ProbeFor<F, T>(PhantomData<fn() -> (F, T)>);

/// Generate fallback trait + inherent const for a declared member.
macro_rules! impl_probe {
    ($Member:ident, $Trait:ident) => {
        ::paste::paste! {
            #[doc(hidden)]
            pub trait [<$Member Fallback>] { const [<HAS_ $Member:snake:upper>]: bool = false; }
            impl<T> [<$Member Fallback>] for Probe<T> {}
            impl<T: $Trait> Probe<T> { pub const [<HAS_ $Member:snake:upper>]: bool = true; }
        }
    };
}

impl_probe!(IdentityMember, DeclaredIdentity);
impl_probe!(TypeMember, DeclaredType);
impl_probe!(TypedIdentity, TypedIdentity);

#[doc(hidden)]
pub trait IdentityForFallback {
    const HAS_IDENTITY_FOR: bool = false;
}
impl<F, T> IdentityForFallback for ProbeFor<F, T> {}
impl<F: IdentityFor<T>, T> ProbeFor<F, T> {
    pub const HAS_IDENTITY_FOR: bool = true;
}

/// Check whether a concrete operator declares both an identity and an
/// operand type.
///
/// Evaluates to a `const bool`; a type lacking either member, or whose
/// identity does not convert into its operand type, yields `false` instead
/// of a compile error.
///
/// ```
/// use monoid_traits::has_identity;
/// use monoid_traits::ops::{Plus, PlusMonoid};
///
/// const _: () = assert!(has_identity!(PlusMonoid<i32>));
/// assert!(!has_identity!(Plus<i32>));
/// ```
#[macro_export]
macro_rules! has_identity {
    ($T:ty) => {{
        #[allow(unused_imports)]
        use $crate::probe::{
            IdentityMemberFallback as _, TypeMemberFallback as _, TypedIdentityFallback as _,
        };

        $crate::probe::Probe::<$T>::HAS_IDENTITY_MEMBER
            && $crate::probe::Probe::<$T>::HAS_TYPE_MEMBER
            && $crate::probe::Probe::<$T>::HAS_TYPED_IDENTITY
    }};
}

/// Check whether a concrete operator declares an identity for operand `T`.
///
/// ```
/// use monoid_traits::has_identity_for;
/// use monoid_traits::ops::{PlusDeduced, PlusGeneric};
///
/// assert!(has_identity_for!(PlusGeneric, i32));
/// assert!(!has_identity_for!(PlusGeneric, String));
/// assert!(!has_identity_for!(PlusDeduced, i32));
/// ```
#[macro_export]
macro_rules! has_identity_for {
    ($F:ty, $T:ty) => {{
        #[allow(unused_imports)]
        use $crate::probe::IdentityForFallback as _;

        $crate::probe::ProbeFor::<$F, $T>::HAS_IDENTITY_FOR
    }};
}

#[cfg(test)]
mod tests {
    use super::{IdentityMemberFallback, TypeMemberFallback, TypedIdentityFallback};
    use super::Probe;
    use crate::members::{DeclaredIdentity, DeclaredType};
    use crate::ops::{Plus, PlusGeneric, PlusMonoid};

    struct OnlyIdentity;
    impl DeclaredIdentity for OnlyIdentity {
        type Value = u8;
        fn identity() -> u8 { 0 }
    }

    struct OnlyType;
    impl DeclaredType for OnlyType {
        type Type = u8;
    }

    /// Declares both members, but the identity is not an operand.
    struct MismatchedIdentity;
    impl DeclaredIdentity for MismatchedIdentity {
        type Value = &'static str;
        fn identity() -> &'static str { "" }
    }
    impl DeclaredType for MismatchedIdentity {
        type Type = u8;
    }

    #[test]
    fn test_member_probes_are_independent() {
        assert!(Probe::<OnlyIdentity>::HAS_IDENTITY_MEMBER);
        assert!(!Probe::<OnlyIdentity>::HAS_TYPE_MEMBER);
        assert!(!Probe::<OnlyType>::HAS_IDENTITY_MEMBER);
        assert!(Probe::<OnlyType>::HAS_TYPE_MEMBER);
    }

    #[test]
    fn test_both_members_required() {
        assert!(has_identity!(PlusMonoid<u64>));
        assert!(!has_identity!(OnlyIdentity));
        assert!(!has_identity!(OnlyType));
        assert!(!has_identity!(Plus<u64>));
        assert!(!has_identity!(PlusGeneric));
    }

    #[test]
    fn test_identity_must_convert_to_operand() {
        assert!(Probe::<MismatchedIdentity>::HAS_IDENTITY_MEMBER);
        assert!(Probe::<MismatchedIdentity>::HAS_TYPE_MEMBER);
        assert!(!Probe::<MismatchedIdentity>::HAS_TYPED_IDENTITY);
        assert!(!has_identity!(MismatchedIdentity));

        assert!(Probe::<PlusMonoid<u8>>::HAS_TYPED_IDENTITY);
    }

    #[test]
    fn test_parameterized_probe() {
        assert!(has_identity_for!(PlusGeneric, u8));
        assert!(has_identity_for!(PlusGeneric, f32));
        assert!(!has_identity_for!(PlusGeneric, bool));
        assert!(!has_identity_for!(PlusMonoid<u8>, u8));
    }
}

//! Self-declared members of binary-operator types.
//!
//! An operator opts into automatic monoid detection by implementing these
//! traits. They carry no algebraic meaning on their own: `DeclaredIdentity`
//! says "I can produce a value out of nothing", `DeclaredType` says "my
//! operands have this type". Only the pair makes the operator a monoid for
//! [`MonoidTraits`](crate::MonoidTraits).
//!
//! ```
//! use monoid_traits::{DeclaredIdentity, DeclaredType, MonoidTraits};
//!
//! struct Concat;
//!
//! impl DeclaredIdentity for Concat {
//!     type Value = &'static str;
//!     fn identity() -> &'static str { "" }
//! }
//!
//! impl DeclaredType for Concat {
//!     type Type = String;
//! }
//!
//! // `&str` converts into `String`, so the automatic adapter applies.
//! assert_eq!(<Concat as MonoidTraits>::identity(), String::new());
//! ```

/// Zero-argument identity member of a strongly-typed operator.
pub trait DeclaredIdentity {
    /// Type of the produced value; must convert into the declared operand type.
    type Value;

    fn identity() -> Self::Value;
}

/// Operand type member of a strongly-typed operator.
pub trait DeclaredType {
    type Type;
}

/// Both strongly-typed members, with the identity value converting into the
/// operand type.
///
/// Implemented for every type where that holds; it is the single condition
/// behind both [`has_identity!`](crate::has_identity) and the automatic
/// [`MonoidTraits`](crate::MonoidTraits) impl.
pub trait TypedIdentity: DeclaredIdentity + DeclaredType {
    fn typed_identity() -> <Self as DeclaredType>::Type;
}

impl<T> TypedIdentity for T
where
    T: DeclaredIdentity + DeclaredType,
    <T as DeclaredIdentity>::Value: Into<<T as DeclaredType>::Type>,
{
    #[inline]
    fn typed_identity() -> <T as DeclaredType>::Type {
        <T as DeclaredIdentity>::identity().into()
    }
}

/// Identity member of a generic-argument operator, instantiated per operand type.
///
/// A single operator may implement this for many `T`; whether it does for a
/// particular `T` is what [`has_identity_for!`](crate::has_identity_for)
/// detects.
pub trait IdentityFor<T> {
    fn identity() -> T;
}

//! Monoid law verification.
//!
//! The adapters trust whoever declared or registered an identity. These
//! checks evaluate the laws on caller-supplied samples:
//!
//! - left identity:  `op(e, x) == x`
//! - right identity: `op(x, e) == x`
//! - associativity:  `op(op(a, b), c) == op(a, op(b, c))`
//!
//! Errors carry sample indices only, so the module needs no allocator.

use tracing::{debug, trace};

use crate::ops::BinaryOp;
use crate::traits::{MonoidTraits, MonoidTraitsFor};

/// A monoid law that failed on the given samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LawError {
    #[error("left identity violated at sample {index}")]
    LeftIdentity { index: usize },

    #[error("right identity violated at sample {index}")]
    RightIdentity { index: usize },

    #[error("associativity violated at samples ({a}, {b}, {c})")]
    Associativity { a: usize, b: usize, c: usize },
}

/// Check both identity laws for `identity` against every sample.
///
/// Returns the number of samples checked.
pub fn check_identity<F, T, I>(op: &F, identity: &T, samples: I) -> Result<usize, LawError>
where
    F: BinaryOp<T, Output = T>,
    T: Clone + PartialEq,
    I: IntoIterator<Item = T>,
{
    let mut checked = 0;
    for (index, x) in samples.into_iter().enumerate() {
        trace!(index, "checking identity laws");
        if op.apply(identity.clone(), x.clone()) != x {
            return Err(LawError::LeftIdentity { index });
        }
        if op.apply(x.clone(), identity.clone()) != x {
            return Err(LawError::RightIdentity { index });
        }
        checked += 1;
    }
    Ok(checked)
}

/// Check the identity laws for a strongly-typed monoid operator.
///
/// ```
/// use monoid_traits::law::verify_identity;
/// use monoid_traits::ops::Plus;
///
/// assert_eq!(verify_identity(&Plus::<i32>::new(), [-3, 0, 7]), Ok(3));
/// ```
pub fn verify_identity<F, I>(op: &F, samples: I) -> Result<usize, LawError>
where
    F: MonoidTraits + BinaryOp<<F as MonoidTraits>::Type, Output = <F as MonoidTraits>::Type>,
    F::Type: Clone + PartialEq,
    I: IntoIterator<Item = F::Type>,
{
    let identity = <F as MonoidTraits>::identity();
    let result = check_identity(op, &identity, samples);
    debug!(operator = core::any::type_name::<F>(), ok = result.is_ok(), "verified identity laws");
    result
}

/// Check the identity laws for operator `F` over operand `T`.
pub fn verify_identity_for<F, T, I>(op: &F, samples: I) -> Result<usize, LawError>
where
    F: MonoidTraitsFor<T> + BinaryOp<T, Output = T>,
    T: Clone + PartialEq,
    I: IntoIterator<Item = T>,
{
    let identity = <F as MonoidTraitsFor<T>>::identity();
    let result = check_identity(op, &identity, samples);
    debug!(
        operator = core::any::type_name::<F>(),
        operand = core::any::type_name::<T>(),
        ok = result.is_ok(),
        "verified identity laws"
    );
    result
}

/// Check associativity over every ordered triple of samples.
///
/// Cubic in `samples.len()`; meant for small sample sets.
pub fn verify_associativity<F, T>(op: &F, samples: &[T]) -> Result<usize, LawError>
where
    F: BinaryOp<T, Output = T>,
    T: Clone + PartialEq,
{
    let mut checked = 0;
    for (a, x) in samples.iter().enumerate() {
        for (b, y) in samples.iter().enumerate() {
            let xy = op.apply(x.clone(), y.clone());
            for (c, z) in samples.iter().enumerate() {
                let left = op.apply(xy.clone(), z.clone());
                let right = op.apply(x.clone(), op.apply(y.clone(), z.clone()));
                if left != right {
                    return Err(LawError::Associativity { a, b, c });
                }
                checked += 1;
            }
        }
    }
    debug!(operator = core::any::type_name::<F>(), checked, "verified associativity");
    Ok(checked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{Plus, PlusDeduced, PlusGeneric, PlusMonoid};
    use crate::register_monoid;

    struct OffByOne;

    impl BinaryOp<i32> for OffByOne {
        type Output = i32;
        fn apply(&self, lhs: i32, rhs: i32) -> i32 {
            lhs + rhs
        }
    }

    register_monoid!(OffByOne, i32 => 1);

    struct Minus;

    impl BinaryOp<i32> for Minus {
        type Output = i32;
        fn apply(&self, lhs: i32, rhs: i32) -> i32 {
            lhs - rhs
        }
    }

    /// Returns its right operand: every value is a left identity, none a right one.
    struct Second;

    impl BinaryOp<i32> for Second {
        type Output = i32;
        fn apply(&self, _lhs: i32, rhs: i32) -> i32 {
            rhs
        }
    }

    register_monoid!(Second, i32 => 0);

    #[test]
    fn test_shipped_operators_pass() {
        let samples = [-5, 0, 1, 42];
        assert_eq!(verify_identity(&PlusMonoid::<i32>::new(), samples), Ok(4));
        assert_eq!(verify_identity(&Plus::<i32>::new(), samples), Ok(4));
        assert_eq!(verify_identity_for(&PlusGeneric, samples), Ok(4));
        assert_eq!(verify_identity_for(&PlusDeduced, samples), Ok(4));
    }

    #[test]
    fn test_wrong_identity_reported() {
        assert_eq!(
            verify_identity(&OffByOne, [3, 4]),
            Err(LawError::LeftIdentity { index: 0 })
        );
    }

    #[test]
    fn test_right_identity_only() {
        // 0 is a right identity for subtraction but not a left one.
        assert_eq!(check_identity(&Minus, &0, [0]), Ok(1));
        assert_eq!(
            check_identity(&Minus, &0, [0, 2]),
            Err(LawError::LeftIdentity { index: 1 })
        );
    }

    #[test]
    fn test_left_identity_only() {
        assert_eq!(verify_identity(&Second, [0]), Ok(1));
        assert_eq!(
            verify_identity(&Second, [0, 9]),
            Err(LawError::RightIdentity { index: 1 })
        );
    }

    #[test]
    fn test_associativity() {
        assert_eq!(verify_associativity(&Plus::<i64>::new(), &[1, 2, 3]), Ok(27));
        assert_eq!(
            verify_associativity(&Minus, &[1, 2]),
            Err(LawError::Associativity { a: 0, b: 0, c: 0 })
        );
    }

    #[test]
    fn test_empty_samples() {
        assert_eq!(verify_identity(&Plus::<u8>::new(), []), Ok(0));
        assert_eq!(verify_associativity::<_, u8>(&Plus::<u8>::new(), &[]), Ok(0));
    }

    #[test]
    fn test_error_display() {
        let err = LawError::RightIdentity { index: 2 };
        assert_eq!(err.to_string(), "right identity violated at sample 2");
    }
}

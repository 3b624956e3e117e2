#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std support in dependencies
// - cli: default, builds the demonstration binary

//! # monoid-traits
//!
//! Compile-time identity detection and monoid adapters for binary operators.
//!
//! ## Architecture
//!
//! A binary operator becomes a monoid once an identity element and an
//! operand type are known for it. There are two ways to know them:
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Members                                                 |
//! |  - DeclaredIdentity, DeclaredType, IdentityFor<T>                 |
//! |  - #[derive(Monoid)]                                              |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Probes                                                  |
//! |  - has_identity!(Op), has_identity_for!(Op, T)                    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Adapters                                                |
//! |  - MonoidTraits (auto from members, or registered)                |
//! |  - MonoidTraitsFor<T> (auto from IdentityFor<T>, or registered)   |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use monoid_traits::prelude::*;
//! use monoid_traits::ops::{Plus, PlusGeneric, PlusMonoid};
//!
//! // Self-declared: detected and adapted automatically.
//! const _: () = assert!(has_identity!(PlusMonoid<i32>));
//! assert_eq!(<PlusMonoid<i32> as MonoidTraits>::identity(), 0);
//!
//! // Declares nothing, adapted by registration.
//! assert!(!has_identity!(Plus<i32>));
//! assert_eq!(<Plus<i32> as MonoidTraits>::identity(), 0);
//!
//! // Generic argument: identity per operand type.
//! assert_eq!(<PlusGeneric as MonoidTraitsFor<i64>>::identity(), 0);
//! ```
//!
//! ## Custom operators
//!
//! ```
//! use monoid_traits::prelude::*;
//!
//! #[derive(Monoid)]
//! #[monoid(operand = u64, identity = 1)]
//! struct Times;
//!
//! impl BinaryOp<u64> for Times {
//!     type Output = u64;
//!     fn apply(&self, lhs: u64, rhs: u64) -> u64 { lhs * rhs }
//! }
//!
//! assert!(has_identity!(Times));
//! assert_eq!(monoid_traits::law::verify_identity(&Times, [2, 3, 5]), Ok(3));
//! ```
//!
//! A value type is only meaningful next to an identity:
//!
//! ```compile_fail
//! use monoid_traits::prelude::*;
//!
//! #[derive(Monoid)]
//! #[monoid(operand = u8, value = u8)]
//! struct Unfinished;
//! ```

// Allow `::monoid_traits` paths from the derive to resolve inside the crate itself
extern crate self as monoid_traits;

pub mod members;
pub mod ops;
pub mod probe;
pub mod traits;
pub mod law;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use members::{DeclaredIdentity, DeclaredType, IdentityFor, TypedIdentity};
pub use ops::BinaryOp;
pub use traits::{MonoidTraits, MonoidTraitsFor, OperandOf};
pub use law::LawError;

/// Derive `DeclaredIdentity` and `DeclaredType` from a `#[monoid(...)]` attribute.
pub use macros::Monoid;

/// Common items for defining and querying monoid operators.
pub mod prelude {
    pub use crate::members::{DeclaredIdentity, DeclaredType, IdentityFor};
    pub use crate::ops::BinaryOp;
    pub use crate::traits::{MonoidTraits, MonoidTraitsFor};
    pub use crate::{has_identity, has_identity_for, register_monoid, register_monoid_for};
    pub use macros::Monoid;
}

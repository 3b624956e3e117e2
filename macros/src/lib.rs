//! Procedural macros for the monoid-traits crate
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Monoid)]` | struct/enum | Implement `DeclaredType` / `DeclaredIdentity` |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Monoid)]
//! #[monoid(operand = T, identity = T::zero(), bound = "T: Zero")]
//! struct PlusMonoid<T>(PhantomData<fn() -> T>);
//!
//! assert!(has_identity!(PlusMonoid<i32>));
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations
// =============================================================================

mod common;
mod user;

// =============================================================================
// Derive Macros (user/)
// =============================================================================

/// Derive the self-declared members of a binary operator.
///
/// # Attributes
///
/// - `operand = Ty`: operand type (`DeclaredType`)
/// - `identity = expr`: identity element (`DeclaredIdentity`)
/// - `value = Ty`: identity value type, defaults to `operand`
/// - `bound = "T: Zero, ..."`: extra where predicates for both impls
///
/// Declaring both `operand` and `identity` makes the operator detectable by
/// `has_identity!` and usable through `MonoidTraits`.
#[proc_macro_derive(Monoid, attributes(monoid))]
pub fn derive_monoid(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_monoid(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Monoid)]` | on struct/enum | Declare identity and operand type |

mod monoid;

pub use monoid::expand_derive_monoid;

//! Common parsing utilities
//!
//! Parsing of the `#[monoid(...)]` helper attribute.

use syn::{
    punctuated::Punctuated,
    Attribute, Expr, LitStr, Token, Type, WherePredicate,
};

// =============================================================================
// #[monoid(operand = Ty, identity = expr, value = Ty, bound = "...")]
// =============================================================================

/// Arguments collected from every `#[monoid(...)]` attribute on an item.
#[derive(Default)]
pub struct MonoidArgs {
    /// Operand type, emitted as `DeclaredType::Type`.
    pub operand: Option<Type>,
    /// Identity expression, emitted as `DeclaredIdentity::identity`.
    pub identity: Option<Expr>,
    /// Identity value type when it differs from the operand type.
    pub value: Option<Type>,
    /// Extra where predicates for the generated impls.
    pub bounds: Vec<WherePredicate>,
}

impl MonoidArgs {
    /// Collect arguments from all `#[monoid]` attributes, ignoring others.
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut args = MonoidArgs::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident("monoid")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("operand") {
                    set_once(&mut args.operand, meta.value()?.parse()?, &meta, "operand")
                } else if meta.path.is_ident("identity") {
                    set_once(&mut args.identity, meta.value()?.parse()?, &meta, "identity")
                } else if meta.path.is_ident("value") {
                    set_once(&mut args.value, meta.value()?.parse()?, &meta, "value")
                } else if meta.path.is_ident("bound") {
                    let lit: LitStr = meta.value()?.parse()?;
                    let preds = lit.parse_with(Punctuated::<WherePredicate, Token![,]>::parse_terminated)?;
                    args.bounds.extend(preds);
                    Ok(())
                } else {
                    Err(meta.error("expected `operand`, `identity`, `value` or `bound`"))
                }
            })?;
        }

        Ok(args)
    }
}

fn set_once<T>(
    slot: &mut Option<T>,
    value: T,
    meta: &syn::meta::ParseNestedMeta<'_>,
    name: &str,
) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("duplicate `{}` argument", name)));
    }
    *slot = Some(value);
    Ok(())
}

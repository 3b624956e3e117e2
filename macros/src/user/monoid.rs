use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::DeriveInput;

use crate::common::MonoidArgs;

/// #[derive(Monoid)] emits the self-declared members of an operator.
///
/// - `operand = Ty`  -> `impl DeclaredType { type Type = Ty; }`
/// - `identity = e`  -> `impl DeclaredIdentity { type Value = value-or-operand; fn identity() { e } }`
///
/// Emitting only one of the two is allowed; such an operator is then not
/// detected as a monoid.
pub fn expand_derive_monoid(mut input: DeriveInput) -> syn::Result<TokenStream2> {
    let args = MonoidArgs::from_attrs(&input.attrs)?;

    if args.operand.is_none() && args.identity.is_none() {
        return Err(syn::Error::new(
            Span::call_site(),
            "#[derive(Monoid)] requires `#[monoid(operand = ..)]` and/or `#[monoid(identity = ..)]`",
        ));
    }

    if let (Some(value), None) = (&args.value, &args.identity) {
        return Err(syn::Error::new_spanned(value, "`value` requires `identity`"));
    }

    if !args.bounds.is_empty() {
        input.generics.make_where_clause().predicates.extend(args.bounds.iter().cloned());
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let type_impl = args.operand.as_ref().map(|operand| {
        quote! {
            impl #impl_generics ::monoid_traits::DeclaredType for #ident #ty_generics #where_clause {
                type Type = #operand;
            }
        }
    });

    let identity_impl = match &args.identity {
        Some(identity) => {
            let value = args.value.as_ref().or(args.operand.as_ref()).ok_or_else(|| {
                syn::Error::new_spanned(identity, "`identity` needs `value = ..` when no `operand` is given")
            })?;
            Some(quote! {
                impl #impl_generics ::monoid_traits::DeclaredIdentity for #ident #ty_generics #where_clause {
                    type Value = #value;

                    #[inline]
                    fn identity() -> Self::Value {
                        #identity
                    }
                }
            })
        }
        None => None,
    };

    Ok(quote! {
        #type_impl
        #identity_impl
    })
}

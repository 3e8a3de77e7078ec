use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    spanned::Spanned, AngleBracketedGenericArguments, Fields, GenericArgument, Ident, Path,
    PathArguments, Type, TypePath,
};
use wirebox_core::Scope;

use crate::field_attribute::FieldAttribute;

pub(crate) fn generate_scope(scope: Scope) -> TokenStream {
    match scope {
        Scope::Singleton => quote! {
            Singleton
        },
        Scope::Transient => quote! {
            Transient
        },
    }
}

/// Returns `T` if `ty` is `Rc<T>`, `std::rc::Rc<T>` or `::std::rc::Rc<T>`.
fn extract_rc_type(ty: &Type) -> Option<&Type> {
    let Type::Path(TypePath {
        qself: None,
        path: Path { segments, .. },
    }) = ty
    else {
        return None;
    };

    let segment = segments.last()?;

    if segment.ident != "Rc" {
        return None;
    }

    let PathArguments::AngleBracketed(AngleBracketedGenericArguments { args, .. }) =
        &segment.arguments
    else {
        return None;
    };

    if args.len() != 1 {
        return None;
    }

    match args.first()? {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    }
}

/// The declared parameter and the take expression of one field.
pub(crate) struct FieldResolve {
    pub(crate) parameter: TokenStream,
    pub(crate) take: TokenStream,
}

pub(crate) enum FieldResolves {
    Unit,
    Named(Vec<Ident>, Vec<FieldResolve>),
    Unnamed(Vec<FieldResolve>),
}

fn generate_field_resolve(
    attrs: &mut Vec<syn::Attribute>,
    index: usize,
    ty: &Type,
    wirebox_path: &TokenStream,
) -> syn::Result<FieldResolve> {
    let FieldAttribute { name } = FieldAttribute::from_attrs(attrs)?;

    let Some(inner) = extract_rc_type(ty) else {
        if let Some((span, _)) = name {
            return Err(syn::Error::new(
                span,
                "the `name` attribute only supports fields of type `Rc<T>`",
            ));
        }

        return Ok(FieldResolve {
            parameter: quote! {
                #wirebox_path::Parameter::unresolvable::<#ty>()
            },
            take: quote! {
                return ::core::result::Result::Err(#wirebox_path::ResolveError::UnresolvableDependency {
                    service: ::core::clone::Clone::clone(args.service()),
                    index: #index,
                    ty: ::core::any::type_name::<#ty>(),
                })
            },
        });
    };

    let parameter = match name {
        Some((_, name)) => quote! {
            #wirebox_path::Parameter::named(#name)
        },
        None => quote! {
            #wirebox_path::Parameter::service::<#inner>()
        },
    };

    Ok(FieldResolve {
        parameter,
        take: quote! {
            args.take::<#inner>()?
        },
    })
}

pub(crate) fn generate_field_resolves(
    fields: &mut Fields,
    wirebox_path: &TokenStream,
) -> syn::Result<FieldResolves> {
    let mut errors: Vec<syn::Error> = Vec::new();

    let resolves = match fields {
        Fields::Unit => return Ok(FieldResolves::Unit),
        Fields::Named(fields_named) => {
            let mut idents = Vec::with_capacity(fields_named.named.len());
            let mut resolves = Vec::with_capacity(fields_named.named.len());

            for (index, field) in fields_named.named.iter_mut().enumerate() {
                match generate_field_resolve(&mut field.attrs, index, &field.ty, wirebox_path) {
                    Ok(resolve) => {
                        // named fields always carry an ident
                        if let Some(ident) = &field.ident {
                            idents.push(ident.clone());
                        } else {
                            errors.push(syn::Error::new(field.span(), "expected a named field"));
                        }
                        resolves.push(resolve);
                    }
                    Err(e) => errors.push(e),
                }
            }

            FieldResolves::Named(idents, resolves)
        }
        Fields::Unnamed(fields_unnamed) => {
            let mut resolves = Vec::with_capacity(fields_unnamed.unnamed.len());

            for (index, field) in fields_unnamed.unnamed.iter_mut().enumerate() {
                match generate_field_resolve(&mut field.attrs, index, &field.ty, wirebox_path) {
                    Ok(resolve) => resolves.push(resolve),
                    Err(e) => errors.push(e),
                }
            }

            FieldResolves::Unnamed(resolves)
        }
    };

    if let Some(e) = errors.into_iter().reduce(|mut a, b| {
        a.combine(b);
        a
    }) {
        return Err(e);
    }

    Ok(resolves)
}

#[cfg(feature = "auto-register")]
pub(crate) fn check_auto_register_with_generics(
    auto_register: bool,
    auto_register_span: Option<proc_macro2::Span>,
    generics: &syn::Generics,
    scope: Scope,
) -> syn::Result<()> {
    if auto_register && !generics.params.is_empty() {
        let span = auto_register_span.unwrap_or_else(|| generics.span());

        return Err(syn::Error::new(
            span,
            format!(
                "not support auto register generics struct, \
                please remove generics, or use `#[{:?}(auto_register = false)]` \
                and register it by hand",
                scope
            ),
        ));
    }

    Ok(())
}

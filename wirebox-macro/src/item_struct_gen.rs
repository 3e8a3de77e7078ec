use proc_macro2::TokenStream;
use quote::quote;
use syn::ItemStruct;
use wirebox_core::Scope;

use crate::{
    commons::{self, FieldResolves},
    struct_attributes::{SimpleStructAttributes, StructAttributes},
};

// #[Transient]
// struct A {
//     #[di(name = "b")]
//     b: Rc<B>,
// }

pub(crate) fn generate(
    attrs: StructAttributes,
    mut item_struct: ItemStruct,
    scope: Scope,
) -> syn::Result<TokenStream> {
    let SimpleStructAttributes {
        name,
        auto_register,
        auto_register_span,
        wirebox_path,
    } = attrs.simplify();

    #[cfg(feature = "auto-register")]
    commons::check_auto_register_with_generics(
        auto_register,
        auto_register_span,
        &item_struct.generics,
        scope,
    )?;

    #[cfg(not(feature = "auto-register"))]
    let _ = auto_register_span;

    let resolves = commons::generate_field_resolves(&mut item_struct.fields, &wirebox_path)?;

    let scope = commons::generate_scope(scope);

    let struct_ident = &item_struct.ident;

    let (impl_generics, ty_generics, where_clause) = item_struct.generics.split_for_impl();

    let (parameters, instance) = match resolves {
        FieldResolves::Unit => (Vec::new(), quote! { #struct_ident }),
        FieldResolves::Named(idents, resolves) => {
            let (parameters, takes): (Vec<_>, Vec<_>) = resolves
                .into_iter()
                .map(|resolve| (resolve.parameter, resolve.take))
                .unzip();

            (
                parameters,
                quote! {
                    #struct_ident {
                        #(
                            #idents: #takes,
                        )*
                    }
                },
            )
        }
        FieldResolves::Unnamed(resolves) => {
            let (parameters, takes): (Vec<_>, Vec<_>) = resolves
                .into_iter()
                .map(|resolve| (resolve.parameter, resolve.take))
                .unzip();

            (
                parameters,
                quote! {
                    #struct_ident(
                        #(
                            #takes,
                        )*
                    )
                },
            )
        }
    };

    let auto_register = if auto_register {
        #[cfg(feature = "auto-register")]
        quote! {
            #wirebox_path::register_provider!(<#struct_ident as #wirebox_path::DefaultProvider>::provider());
        }
        #[cfg(not(feature = "auto-register"))]
        quote! {}
    } else {
        quote! {}
    };

    let expand = quote! {
        #item_struct

        impl #impl_generics #wirebox_path::Component for #struct_ident #ty_generics #where_clause {
            fn parameters() -> ::std::vec::Vec<#wirebox_path::Parameter> {
                ::std::vec![
                    #(
                        #parameters,
                    )*
                ]
            }

            #[allow(unused_variables, unreachable_code)]
            fn construct(
                args: &mut #wirebox_path::Arguments,
            ) -> ::core::result::Result<Self, #wirebox_path::ResolveError> {
                ::core::result::Result::Ok(#instance)
            }
        }

        impl #impl_generics #wirebox_path::DefaultProvider for #struct_ident #ty_generics #where_clause {
            fn provider() -> #wirebox_path::Provider {
                #wirebox_path::Provider::class::<Self>(#wirebox_path::Scope::#scope)
                    #name
            }
        }

        #auto_register
    };

    Ok(expand)
}

mod commons;
mod field_attribute;
mod item_struct_gen;
mod struct_attributes;

use proc_macro::TokenStream;
use syn::{parse_macro_input, spanned::Spanned, Item};
use wirebox_core::Scope;

use crate::struct_attributes::StructAttributes;

fn macro_attribute(attr: TokenStream, input: TokenStream, scope: Scope) -> TokenStream {
    let mut attributes = StructAttributes::default();
    let parser = syn::meta::parser(|meta| attributes.parse(meta));
    parse_macro_input!(attr with parser);

    let item = parse_macro_input!(input as Item);

    let result = match item {
        Item::Struct(item_struct) => item_struct_gen::generate(attributes, item_struct, scope),
        _ => Err(syn::Error::new(item.span(), "expected struct")),
    };

    result.unwrap_or_else(|e| e.to_compile_error()).into()
}

/// Define a singleton component.
#[proc_macro_attribute]
#[allow(non_snake_case)]
pub fn Singleton(attr: TokenStream, input: TokenStream) -> TokenStream {
    macro_attribute(attr, input, Scope::Singleton)
}

/// Define a transient component.
#[proc_macro_attribute]
#[allow(non_snake_case)]
pub fn Transient(attr: TokenStream, input: TokenStream) -> TokenStream {
    macro_attribute(attr, input, Scope::Transient)
}

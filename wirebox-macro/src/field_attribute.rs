use proc_macro2::Span;
use syn::{spanned::Spanned, Attribute, Expr};

// #[di(name = "a")]
#[derive(Default)]
pub(crate) struct FieldAttribute {
    pub(crate) name: Option<(Span, Expr)>,
}

impl FieldAttribute {
    /// Parses and removes every `#[di(..)]` attribute of a field.
    pub(crate) fn from_attrs(attrs: &mut Vec<Attribute>) -> syn::Result<FieldAttribute> {
        let mut field_attribute = FieldAttribute::default();
        let mut errors = Vec::new();

        attrs.retain(|attr| {
            if !attr.path().is_ident("di") {
                return true;
            }

            if let Err(err) = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    if field_attribute.name.is_some() {
                        return Err(meta.error("the `name` attribute can only be set once"));
                    }
                    field_attribute.name = Some((meta.path.span(), meta.value()?.parse()?));
                    Ok(())
                } else {
                    Err(meta.error("the attribute must be `name`"))
                }
            }) {
                errors.push(err);
            }

            false
        });

        if let Some(e) = errors.into_iter().reduce(|mut a, b| {
            a.combine(b);
            a
        }) {
            return Err(e);
        }

        Ok(field_attribute)
    }
}

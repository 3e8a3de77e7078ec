use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{meta::ParseNestedMeta, spanned::Spanned, Expr, LitBool, Path, Token};

// #[Singleton(name = "a", auto_register = false, wirebox_path = path::to::wirebox)]
#[derive(Default)]
pub(crate) struct StructAttributes {
    name: Option<(Span, Expr)>,
    auto_register: Option<(Span, bool)>,
    wirebox_path: Option<(Span, Path)>,
}

impl StructAttributes {
    pub(crate) fn parse(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        let meta_path = &meta.path;
        let meta_path_span = meta_path.span();

        macro_rules! check_duplicate {
            ($attribute:tt) => {
                if self.$attribute.is_some() {
                    return Err(meta.error(concat!(
                        "the `",
                        stringify!($attribute),
                        "` attribute can only be set once"
                    )));
                }
            };
        }

        if meta_path.is_ident("name") {
            check_duplicate!(name);
            self.name = Some((meta_path_span, meta.value()?.parse()?));
            return Ok(());
        }

        if meta_path.is_ident("auto_register") {
            check_duplicate!(auto_register);

            let value = if meta.input.is_empty() || meta.input.peek(Token![,]) {
                true
            } else {
                meta.value()?.parse::<LitBool>()?.value
            };

            self.auto_register = Some((meta_path_span, value));
            return Ok(());
        }

        if meta_path.is_ident("wirebox_path") {
            check_duplicate!(wirebox_path);
            self.wirebox_path = Some((meta_path_span, meta.value()?.call(Path::parse_mod_style)?));
            return Ok(());
        }

        Err(meta.error("the attribute must be one of: `name`, `auto_register`, `wirebox_path`"))
    }

    pub(crate) fn simplify(&self) -> SimpleStructAttributes {
        let StructAttributes {
            name,
            auto_register,
            wirebox_path,
        } = self;

        SimpleStructAttributes {
            name: name.as_ref().map(|(_, name)| {
                quote! {
                    .name(#name)
                }
            }),
            auto_register: auto_register
                .map(|(_, auto_register)| auto_register)
                .unwrap_or(true),
            auto_register_span: auto_register.map(|(span, _)| span),
            wirebox_path: wirebox_path
                .as_ref()
                .map(|(_, wirebox_path)| {
                    quote! {
                        #wirebox_path
                    }
                })
                .unwrap_or_else(|| {
                    quote! {
                        ::wirebox
                    }
                }),
        }
    }
}

pub(crate) struct SimpleStructAttributes {
    pub(crate) name: Option<TokenStream>,
    pub(crate) auto_register: bool,
    pub(crate) auto_register_span: Option<Span>,
    pub(crate) wirebox_path: TokenStream,
}

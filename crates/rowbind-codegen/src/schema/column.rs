use rowbind_core::schema::Tag;

/// The contents of a `#[column]` attribute.
#[derive(Debug)]
pub(crate) struct Column {
    /// The annotation string, absent for a bare `#[column]`
    pub(crate) tag: Option<syn::LitStr>,
}

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        match &attr.meta {
            syn::Meta::Path(_) => Ok(Column { tag: None }),
            syn::Meta::List(_) => Ok(Column {
                tag: Some(attr.parse_args()?),
            }),
            syn::Meta::NameValue(meta) => Err(syn::Error::new_spanned(
                meta,
                "expected #[column] or #[column(\"name, FLAGS\")]",
            )),
        }
    }

    pub(crate) fn parse_tag(&self) -> Tag {
        self.tag
            .as_ref()
            .map(|lit| Tag::parse(&lit.value()))
            .unwrap_or_default()
    }
}

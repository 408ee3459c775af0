use super::{Column, ErrorSet};

#[derive(Debug)]
pub(crate) struct Field {
    /// Position of the field among the mapped fields
    pub(crate) id: usize,

    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Resolved database column name
    pub(crate) column_name: String,
}

#[derive(Debug)]
pub(crate) struct FieldAttr {
    pub(crate) column: Column,

    /// `#[key]` shorthand
    pub(crate) key: Option<syn::Attribute>,

    /// `#[auto]` shorthand
    pub(crate) auto: Option<syn::Attribute>,
}

impl Field {
    /// Parses a struct field. Returns `Ok(None)` for fields that are not
    /// mapped to a column.
    pub(super) fn from_ast(field: &syn::Field, id: usize) -> syn::Result<Option<Self>> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut column = None;
        let mut key = None;
        let mut auto = None;

        for attr in &field.attrs {
            if attr.path().is_ident("column") {
                if column.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[column] attribute"));
                } else {
                    match Column::from_ast(attr) {
                        Ok(attr) => column = Some(attr),
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("key") {
                if key.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else {
                    key = Some(attr.clone());
                }
            } else if attr.path().is_ident("auto") {
                if auto.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[auto] attribute"));
                } else {
                    auto = Some(attr.clone());
                }
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let Some(column) = column else {
            if let Some(attr) = key.as_ref().or(auto.as_ref()) {
                return Err(syn::Error::new_spanned(
                    attr,
                    "#[key] and #[auto] require a #[column] attribute on the same field",
                ));
            }

            return Ok(None);
        };

        let ident_str = ident.to_string();
        let column_name = column.parse_tag().column_or(&ident_str).to_string();

        Ok(Some(Field {
            id,
            ident: ident.clone(),
            ty: field.ty.clone(),
            attrs: FieldAttr { column, key, auto },
            column_name,
        }))
    }

    /// The raw annotation string, if any
    pub(crate) fn tag(&self) -> Option<String> {
        self.attrs.column.tag.as_ref().map(syn::LitStr::value)
    }
}

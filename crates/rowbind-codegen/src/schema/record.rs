use super::{ErrorSet, Field};

use std::collections::HashMap;

#[derive(Debug)]
pub(crate) struct Record {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Mapped fields, in declaration order
    pub(crate) fields: Vec<Field>,

    /// True if the struct is annotated with `#[hooks]`
    pub(crate) hooks: bool,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        // Generics are not supported yet
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let mut errs = ErrorSet::new();
        let mut hooks = false;

        for attr in &ast.attrs {
            if attr.path().is_ident("hooks") {
                if hooks {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[hooks] attribute"));
                } else if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else {
                    hooks = true;
                }
            }
        }

        let mut fields = vec![];

        for node in node.named.iter() {
            match Field::from_ast(node, fields.len()) {
                Ok(Some(field)) => fields.push(field),
                Ok(None) => {}
                Err(err) => errs.push(err),
            }
        }

        let mut columns = HashMap::new();

        for field in &fields {
            if let Some(prev) = columns.insert(&field.column_name[..], &field.ident) {
                errs.push(syn::Error::new_spanned(
                    &field.ident,
                    format!(
                        "column `{}` is already mapped by field `{prev}`",
                        field.column_name
                    ),
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Record {
            ident: ast.ident.clone(),
            fields,
            hooks,
        })
    }
}

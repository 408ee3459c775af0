use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let rowbind = &self.rowbind;
        let ident = &self.record.ident;
        let field_defs = self.expand_field_defs();
        let field_body = self.expand_field_body();
        let set_field_body = self.expand_set_field_body();
        let hooks = self.expand_hooks();

        quote! {
            impl #rowbind::Record for #ident {
                const FIELDS: &'static [#rowbind::FieldDef] = &[ #( #field_defs, )* ];

                fn field(&self, index: usize) -> #rowbind::Value {
                    #field_body
                }

                fn set_field(&mut self, index: usize, value: #rowbind::Value) -> #rowbind::Result<()> {
                    #set_field_body
                }

                #hooks
            }
        }
    }

    fn expand_field_defs(&self) -> Vec<TokenStream> {
        let rowbind = &self.rowbind;

        self.record
            .fields
            .iter()
            .map(|field| {
                let name = field.ident.to_string();
                let ty = &field.ty;

                let tag = field.tag().map(|tag| quote!(.tag(#tag)));
                let primary_key = field.attrs.key.as_ref().map(|_| quote!(.primary_key()));
                let auto = field.attrs.auto.as_ref().map(|_| quote!(.auto()));

                quote! {
                    #rowbind::FieldDef::new(#name, <#ty as #rowbind::Primitive>::TYPE)
                        #tag
                        #primary_key
                        #auto
                        .nullable(<#ty as #rowbind::Primitive>::NULLABLE)
                }
            })
            .collect()
    }

    fn expand_field_body(&self) -> TokenStream {
        let rowbind = &self.rowbind;
        let ident = &self.record.ident;

        let arms = self.record.fields.iter().map(|field| {
            let index = util::int(field.id);
            let field_ident = &field.ident;

            quote! {
                #index => #rowbind::Primitive::to_value(&self.#field_ident),
            }
        });

        let unreachable = format!("`{ident}` has no mapped field at index {{}}");

        quote! {
            match index {
                #( #arms )*
                _ => unreachable!(#unreachable, index),
            }
        }
    }

    fn expand_set_field_body(&self) -> TokenStream {
        let rowbind = &self.rowbind;
        let ident = &self.record.ident;

        let arms = self.record.fields.iter().map(|field| {
            let index = util::int(field.id);
            let field_ident = &field.ident;
            let name = field.ident.to_string();

            quote! {
                #index => {
                    self.#field_ident = #rowbind::Primitive::load(value)
                        .map_err(|err| #rowbind::Error::field_assignment(#name, err))?;
                }
            }
        });

        let unreachable = format!("`{ident}` has no mapped field at index {{}}");

        quote! {
            match index {
                #( #arms )*
                _ => unreachable!(#unreachable, index),
            }

            Ok(())
        }
    }

    fn expand_hooks(&self) -> Option<TokenStream> {
        let rowbind = &self.rowbind;

        self.record.hooks.then(|| {
            quote! {
                fn hooks(&mut self) -> Option<&mut dyn #rowbind::Hooks> {
                    Some(self)
                }
            }
        })
    }
}

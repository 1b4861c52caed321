use crate::load::find_attributes;
use crate::model::{DeriveParameter, DeriveParser};
use crate::{ATTRIBUTE, MACRO_DECLARG_PARSER};

impl TryFrom<syn::DeriveInput> for DeriveParser {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let struct_name = &value.ident;

        if !value.generics.params.is_empty() {
            return Err(syn::Error::new(
                struct_name.span(),
                format!("Invalid - {MACRO_DECLARG_PARSER} does not support generic structs."),
            ));
        }

        let settings = match find_attributes(&value.attrs)? {
            Some(attributes) => {
                let unknown = attributes.unknown(&[], &["settings"]);
                if !unknown.is_empty() {
                    return Err(syn::Error::new(
                        struct_name.span(),
                        format!(
                            "Invalid - unknown attribute(s) for #[{ATTRIBUTE}(..)]: {}.",
                            unknown.join(", ")
                        ),
                    ));
                }

                attributes.last("settings").cloned()
            }
            None => None,
        };

        match &value.data {
            syn::Data::Struct(ds) => {
                let parameters = match &ds.fields {
                    syn::Fields::Named(fields) => fields
                        .named
                        .iter()
                        .map(DeriveParameter::load)
                        .filter_map(Result::transpose)
                        .collect::<Result<Vec<_>, _>>()?,
                    syn::Fields::Unnamed(_) | syn::Fields::Unit => Vec::default(),
                };

                Ok(DeriveParser {
                    struct_name: struct_name.clone(),
                    settings,
                    parameters,
                })
            }
            _ => Err(syn::Error::new(
                struct_name.span(),
                format!("Invalid - {MACRO_DECLARG_PARSER} only applies to 'struct' data structures."),
            )),
        }
    }
}

use crate::model::{DeriveParser, DeriveValue};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl DeriveParser {
    pub(crate) fn generate(self) -> TokenStream2 {
        let DeriveParser {
            struct_name,
            settings,
            parameters,
        } = self;

        let clp = if parameters.is_empty() && settings.is_none() {
            quote! {
                let clp = ::declarg::CommandLineParser::new();
            }
        } else {
            let settings = settings.map(|DeriveValue { tokens }| {
                quote! {
                    clp = clp.settings(#tokens());
                }
            });
            let fields: Vec<TokenStream2> = parameters
                .into_iter()
                .map(|parameter| parameter.generate(&struct_name))
                .collect();

            quote! {
                let mut clp = ::declarg::CommandLineParser::new();
                #settings
                #( #fields )*
            }
        };

        quote! {
            impl ::declarg::prelude::Declared for #struct_name {
                fn command_line_parser() -> ::declarg::CommandLineParser<Self> {
                    #clp
                    clp
                }
            }
        }
    }
}

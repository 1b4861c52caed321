use crate::model::DeriveChoices;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;

impl DeriveChoices {
    pub(crate) fn generate(self) -> TokenStream2 {
        let DeriveChoices {
            enum_name,
            variants,
        } = self;
        let enum_name_str = enum_name.to_string();
        let members: Vec<String> = variants.iter().map(|variant| variant.to_string()).collect();
        let indices: Vec<Literal> = (0..variants.len())
            .map(Literal::usize_unsuffixed)
            .collect();

        quote! {
            impl ::declarg::prelude::Coercible for #enum_name {
                fn base_type() -> ::declarg::BaseType {
                    ::declarg::BaseType::Enum { name: #enum_name_str, members: &[#(#members),*] }
                }

                fn from_value(value: ::declarg::Value) -> Option<Self> {
                    match value {
                        #( ::declarg::Value::Enum { index: #indices, .. } => Some(#enum_name::#variants), )*
                        _ => None,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Span;

    #[test]
    fn render_derive_choices_empty() {
        // Setup
        let choices = DeriveChoices {
            enum_name: ident("Values"),
            variants: vec![],
        };

        // Execute
        let token_stream = choices.generate();

        // Verify
        assert_eq!(
            simple_format(token_stream.to_string()),
            r#"impl :: declarg :: prelude :: Coercible for Values {
 fn base_type () -> :: declarg :: BaseType {
 :: declarg :: BaseType :: Enum {
 name : "Values" , members : & [] }
 }
 fn from_value (value : :: declarg :: Value) -> Option < Self > {
 match value {
 _ => None , }
 }
 }
"#,
        );
    }

    #[test]
    fn render_derive_choices() {
        // Setup
        let choices = DeriveChoices {
            enum_name: ident("Values"),
            variants: vec![ident("Abc"), ident("Def")],
        };

        // Execute
        let token_stream = choices.generate();

        // Verify
        assert_eq!(
            simple_format(token_stream.to_string()),
            r#"impl :: declarg :: prelude :: Coercible for Values {
 fn base_type () -> :: declarg :: BaseType {
 :: declarg :: BaseType :: Enum {
 name : "Values" , members : & ["Abc" , "Def"] }
 }
 fn from_value (value : :: declarg :: Value) -> Option < Self > {
 match value {
 :: declarg :: Value :: Enum {
 index : 0 , .. }
 => Some (Values :: Abc) , :: declarg :: Value :: Enum {
 index : 1 , .. }
 => Some (Values :: Def) , _ => None , }
 }
 }
"#,
        );
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }

    fn simple_format(rust_str: String) -> String {
        rust_str
            .replace("{", "{\n")
            .replace("}", "}\n")
            .replace(";", ";\n")
    }
}

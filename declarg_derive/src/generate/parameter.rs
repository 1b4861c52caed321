use crate::model::{DeriveParameter, Modifier, ParameterType};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl DeriveParameter {
    pub(crate) fn generate(self, struct_name: &syn::Ident) -> TokenStream2 {
        let DeriveParameter {
            field_name,
            name,
            verb,
            parameter_type,
            modifiers,
        } = self;
        let name = name.tokens;

        let field = match parameter_type {
            ParameterType::Scalar => quote! {
                ::declarg::Scalar::new(|target: &mut #struct_name| &mut target.#field_name)
            },
            ParameterType::Optional => quote! {
                ::declarg::Optional::new(|target: &mut #struct_name| &mut target.#field_name)
            },
            ParameterType::Collection { element } => {
                let element = element.tokens;
                quote! {
                    ::declarg::Collection::<_, _, #element>::new(|target: &mut #struct_name| &mut target.#field_name)
                }
            }
        };

        let constructor = if verb {
            quote! { verb }
        } else {
            quote! { option }
        };
        let modifiers: Vec<TokenStream2> = modifiers.into_iter().map(Modifier::generate).collect();

        quote! {
            clp = clp.add(::declarg::Parameter::#constructor(#field, #name)#( #modifiers )*);
        }
    }
}

impl Modifier {
    fn generate(self) -> TokenStream2 {
        match self {
            Modifier::Short(value) => {
                let value = value.tokens;
                quote! { .short(#value) }
            }
            Modifier::Section(value) => {
                let value = value.tokens;
                quote! { .section(#value) }
            }
            Modifier::Description(value) => {
                let value = value.tokens;
                quote! { .description(#value) }
            }
            Modifier::Required => quote! { .required() },
            Modifier::ValidValues(value) => {
                let value = value.tokens;
                quote! { .valid_values(#value) }
            }
            Modifier::OnlyForVerbs(value) => {
                let value = value.tokens;
                quote! { .only_for_verbs(#value) }
            }
            Modifier::DefaultValue(value) => {
                let value = value.tokens;
                quote! { .default_value(#value) }
            }
            Modifier::MutuallyExclusive(value) => {
                let value = value.tokens;
                quote! { .mutually_exclusive(#value) }
            }
        }
    }
}

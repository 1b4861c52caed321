use crate::model::DeriveChoices;
use crate::MACRO_DECLARG_CHOICES;

impl TryFrom<syn::DeriveInput> for DeriveChoices {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let enum_name = &value.ident;

        match &value.data {
            syn::Data::Enum(de) => {
                let variants = de
                    .variants
                    .iter()
                    .map(|variant| match variant.fields {
                        syn::Fields::Unit => Ok(variant.ident.clone()),
                        _ => Err(syn::Error::new(
                            variant.ident.span(),
                            format!(
                                "Invalid - {MACRO_DECLARG_CHOICES} only applies to unit variants."
                            ),
                        )),
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                Ok(DeriveChoices {
                    enum_name: enum_name.clone(),
                    variants,
                })
            }
            _ => Err(syn::Error::new(
                enum_name.span(),
                format!("Invalid - {MACRO_DECLARG_CHOICES} only applies to 'enum' data structures."),
            )),
        }
    }
}

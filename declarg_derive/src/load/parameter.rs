use crate::load::{find_attributes, incompatible_error};
use crate::model::{DeriveParameter, DeriveValue, IntermediateAttributes, Modifier, ParameterType};
use crate::{ATTRIBUTE, LIST_SEPARATOR};
use quote::{quote, ToTokens};

const SINGLETONS: [&str; 2] = ["verb", "required"];
const PAIRS: [&str; 8] = [
    "name",
    "short",
    "section",
    "description",
    "valid_values",
    "only_for_verbs",
    "default_value",
    "mutually_exclusive",
];

impl DeriveParameter {
    /// Load the option declared on the `field`, or `None` when the field is not annotated with `#[declarg(..)]`.
    pub(crate) fn load(field: &syn::Field) -> Result<Option<Self>, syn::Error> {
        match find_attributes(&field.attrs)? {
            Some(attributes) => DeriveParameter::try_from((field, attributes)).map(Some),
            None => Ok(None),
        }
    }
}

impl TryFrom<(&syn::Field, IntermediateAttributes)> for DeriveParameter {
    type Error = syn::Error;

    fn try_from(value: (&syn::Field, IntermediateAttributes)) -> Result<Self, Self::Error> {
        let (field, attributes) = value;
        let field_name = field.ident.clone().ok_or_else(|| {
            syn::Error::new_spanned(field, "Invalid - options must be named fields.")
        })?;

        let unknown = attributes.unknown(&SINGLETONS, &PAIRS);
        if !unknown.is_empty() {
            return Err(syn::Error::new(
                field_name.span(),
                format!(
                    "Invalid - unknown attribute(s) for #[{ATTRIBUTE}(..)]: {}.",
                    unknown.join(", ")
                ),
            ));
        }

        let verb = attributes.singletons.contains("verb");
        let name = match attributes.last("name") {
            Some(value) => value.clone(),
            None => DeriveValue {
                tokens: field_name.to_string().into_token_stream(),
            },
        };
        let valid_values = attributes.last("valid_values");
        let only_for_verbs = attributes.last("only_for_verbs");

        if valid_values.is_some() && only_for_verbs.is_some() {
            return Err(incompatible_error(
                "field",
                &field_name,
                "#[declarg(valid_values = ..)]",
                "#[declarg(only_for_verbs = ..)]",
            ));
        }

        if verb && only_for_verbs.is_some() {
            return Err(incompatible_error(
                "field",
                &field_name,
                "#[declarg(verb)]",
                "#[declarg(only_for_verbs = ..)]",
            ));
        }

        let mut modifiers = Vec::default();

        if let Some(value) = attributes.last("short") {
            modifiers.push(Modifier::Short(value.clone()));
        }

        if let Some(value) = attributes.last("section") {
            modifiers.push(Modifier::Section(value.clone()));
        }

        if let Some(value) = attributes.last("description") {
            modifiers.push(Modifier::Description(value.clone()));
        }

        if attributes.singletons.contains("required") {
            modifiers.push(Modifier::Required);
        }

        if let Some(value) = valid_values {
            if let Some(list) = split_list(&field_name, "valid_values", value)? {
                modifiers.push(Modifier::ValidValues(list));
            }
        }

        if let Some(value) = only_for_verbs {
            if let Some(list) = split_list(&field_name, "only_for_verbs", value)? {
                modifiers.push(Modifier::OnlyForVerbs(list));
            }
        }

        if let Some(value) = attributes.last("default_value") {
            modifiers.push(Modifier::DefaultValue(value.clone()));
        }

        if let Some(value) = attributes.last("mutually_exclusive") {
            modifiers.push(Modifier::MutuallyExclusive(value.clone()));
        }

        Ok(DeriveParameter {
            parameter_type: infer_type(&field_name, &field.ty)?,
            field_name,
            name,
            verb,
            modifiers,
        })
    }
}

/// Infer how the field wraps its base type, from the field's declared type.
fn infer_type(field_name: &syn::Ident, ty: &syn::Type) -> Result<ParameterType, syn::Error> {
    let segment = match ty {
        syn::Type::Path(path) => match path.path.segments.last() {
            Some(segment) => segment,
            None => return Ok(ParameterType::Scalar),
        },
        _ => {
            let type_string = ty.to_token_stream().to_string();
            return Err(syn::Error::new(
                field_name.span(),
                format!("Invalid - unsupported option type `{type_string}`."),
            ));
        }
    };

    match segment.ident.to_string().as_str() {
        "Option" => Ok(ParameterType::Optional),
        "Vec" | "VecDeque" | "HashSet" => match generic_type(segment) {
            Some(element) => Ok(ParameterType::Collection {
                element: DeriveValue {
                    tokens: element.to_token_stream(),
                },
            }),
            None => Err(syn::Error::new(
                field_name.span(),
                format!("Invalid - collection `{}` must declare its item type.", segment.ident),
            )),
        },
        "Box" => match generic_type(segment) {
            Some(syn::Type::Slice(slice)) => Ok(ParameterType::Collection {
                element: DeriveValue {
                    tokens: slice.elem.to_token_stream(),
                },
            }),
            _ => Ok(ParameterType::Scalar),
        },
        _ => Ok(ParameterType::Scalar),
    }
}

fn generic_type(segment: &syn::PathSegment) -> Option<&syn::Type> {
    match &segment.arguments {
        syn::PathArguments::AngleBracketed(arguments) => {
            arguments.args.iter().find_map(|argument| match argument {
                syn::GenericArgument::Type(ty) => Some(ty),
                _ => None,
            })
        }
        _ => None,
    }
}

/// Split the `;`-separated string literal into an array of string literals.
/// An empty string literal declares no values.
fn split_list(
    field_name: &syn::Ident,
    key: &str,
    value: &DeriveValue,
) -> Result<Option<DeriveValue>, syn::Error> {
    let literal: syn::LitStr = syn::parse2(value.tokens.clone()).map_err(|_| {
        syn::Error::new(
            field_name.span(),
            format!("Invalid - #[{ATTRIBUTE}({key} = ..)] expects a string literal (ex: \"a{LIST_SEPARATOR}b\")."),
        )
    })?;
    let text = literal.value();

    if text.is_empty() {
        return Ok(None);
    }

    let items: Vec<&str> = text.split(LIST_SEPARATOR).collect();
    Ok(Some(DeriveValue {
        tokens: quote! { [#(#items),*] },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_contains;
    use proc_macro2::{Literal, Span};
    use syn::parse_quote;

    fn field(field: syn::FieldsNamed) -> syn::Field {
        field.named.into_iter().next().unwrap()
    }

    #[test]
    fn load_without_attribute() {
        // Setup
        let input = field(parse_quote! {
            { my_field: usize }
        });

        // Execute
        let parameter = DeriveParameter::load(&input).unwrap();

        // Verify
        assert_eq!(parameter, None);
    }

    #[test]
    fn load_other_attribute() {
        // Setup
        let input = field(parse_quote! {
            { #[serde(default)] my_field: usize }
        });

        // Execute
        let parameter = DeriveParameter::load(&input).unwrap();

        // Verify
        assert_eq!(parameter, None);
    }

    #[test]
    fn load_scalar() {
        // Setup
        let input = field(parse_quote! {
            { #[declarg] my_field: i32 }
        });

        // Execute
        let parameter = DeriveParameter::load(&input).unwrap();

        // Verify
        assert_eq!(
            parameter,
            Some(DeriveParameter {
                field_name: ident("my_field"),
                name: DeriveValue {
                    tokens: Literal::string("my_field").into_token_stream(),
                },
                verb: false,
                parameter_type: ParameterType::Scalar,
                modifiers: vec![],
            })
        );
    }

    #[test]
    fn load_verb() {
        // Setup
        let input = field(parse_quote! {
            { #[declarg(verb, name = "action")] my_field: Option<Verbs> }
        });

        // Execute
        let parameter = DeriveParameter::load(&input).unwrap().unwrap();

        // Verify
        assert!(parameter.verb);
        assert_eq!(
            parameter.name,
            DeriveValue {
                tokens: Literal::string("action").into_token_stream(),
            }
        );
        assert_eq!(parameter.parameter_type, ParameterType::Optional);
    }

    #[test]
    fn load_types() {
        let cases: Vec<(syn::FieldsNamed, ParameterType)> = vec![
            (
                parse_quote! { { #[declarg] f: String } },
                ParameterType::Scalar,
            ),
            (
                parse_quote! { { #[declarg] f: bool } },
                ParameterType::Scalar,
            ),
            (
                parse_quote! { { #[declarg] f: Option<i64> } },
                ParameterType::Optional,
            ),
            (
                parse_quote! { { #[declarg] f: std::option::Option<i64> } },
                ParameterType::Optional,
            ),
            (
                parse_quote! { { #[declarg] f: Vec<i32> } },
                ParameterType::Collection {
                    element: DeriveValue {
                        tokens: quote! { i32 },
                    },
                },
            ),
            (
                parse_quote! { { #[declarg] f: VecDeque<String> } },
                ParameterType::Collection {
                    element: DeriveValue {
                        tokens: quote! { String },
                    },
                },
            ),
            (
                parse_quote! { { #[declarg] f: std::collections::HashSet<u32> } },
                ParameterType::Collection {
                    element: DeriveValue {
                        tokens: quote! { u32 },
                    },
                },
            ),
            (
                parse_quote! { { #[declarg] f: Box<[f64]> } },
                ParameterType::Collection {
                    element: DeriveValue {
                        tokens: quote! { f64 },
                    },
                },
            ),
            (
                parse_quote! { { #[declarg] f: Box<f64> } },
                ParameterType::Scalar,
            ),
        ];

        for (input, expected) in cases {
            let parameter = DeriveParameter::load(&field(input)).unwrap().unwrap();
            assert_eq!(parameter.parameter_type, expected);
        }
    }

    #[test]
    fn load_modifiers() {
        // Setup
        let input = field(parse_quote! {
            {
                #[declarg(
                    mutually_exclusive = "group",
                    default_value = "First",
                    valid_values = "First;Second",
                    required,
                    description = "The choice.",
                    section = "Choosing",
                    short = 'c',
                )]
                choice: Option<String>
            }
        });

        // Execute
        let parameter = DeriveParameter::load(&input).unwrap().unwrap();

        // Verify
        assert_eq!(
            parameter.modifiers,
            vec![
                Modifier::Short(DeriveValue {
                    tokens: Literal::character('c').into_token_stream(),
                }),
                Modifier::Section(DeriveValue {
                    tokens: Literal::string("Choosing").into_token_stream(),
                }),
                Modifier::Description(DeriveValue {
                    tokens: Literal::string("The choice.").into_token_stream(),
                }),
                Modifier::Required,
                Modifier::ValidValues(DeriveValue {
                    tokens: quote! { ["First", "Second"] },
                }),
                Modifier::DefaultValue(DeriveValue {
                    tokens: Literal::string("First").into_token_stream(),
                }),
                Modifier::MutuallyExclusive(DeriveValue {
                    tokens: Literal::string("group").into_token_stream(),
                }),
            ]
        );
    }

    #[test]
    fn load_only_for_verbs() {
        // Setup
        let input = field(parse_quote! {
            { #[declarg(only_for_verbs = "Verb1;Verb3")] my_field: Option<i32> }
        });

        // Execute
        let parameter = DeriveParameter::load(&input).unwrap().unwrap();

        // Verify
        assert_eq!(
            parameter.modifiers,
            vec![Modifier::OnlyForVerbs(DeriveValue {
                tokens: quote! { ["Verb1", "Verb3"] },
            })]
        );
    }

    #[test]
    fn load_empty_list() {
        // Setup
        let input = field(parse_quote! {
            { #[declarg(valid_values = "")] my_field: Option<i32> }
        });

        // Execute
        let parameter = DeriveParameter::load(&input).unwrap().unwrap();

        // Verify
        assert_eq!(parameter.modifiers, vec![]);
    }

    #[test]
    fn load_list_not_literal() {
        // Setup
        let input = field(parse_quote! {
            { #[declarg(valid_values = VALUES)] my_field: Option<i32> }
        });

        // Execute
        let error = DeriveParameter::load(&input).unwrap_err();

        // Verify
        assert_contains!(error.to_string(), "valid_values = ..)] expects a string literal");
    }

    #[test]
    fn load_unknown() {
        // Setup
        let input = field(parse_quote! {
            { #[declarg(hidden, help = "abc")] my_field: Option<i32> }
        });

        // Execute
        let error = DeriveParameter::load(&input).unwrap_err();

        // Verify
        assert_eq!(
            error.to_string(),
            "Invalid - unknown attribute(s) for #[declarg(..)]: help, hidden."
        );
    }

    #[test]
    fn load_incompatible() {
        // Setup
        let input = field(parse_quote! {
            { #[declarg(valid_values = "a", only_for_verbs = "b")] my_field: Option<i32> }
        });

        // Execute
        let error = DeriveParameter::load(&input).unwrap_err();

        // Verify
        assert_eq!(
            error.to_string(),
            "Invalid - field cannot be both `#[declarg(valid_values = ..)]` and `#[declarg(only_for_verbs = ..)]`."
        );
    }

    #[test]
    fn load_verb_incompatible() {
        // Setup
        let input = field(parse_quote! {
            { #[declarg(verb, only_for_verbs = "b")] my_field: Option<i32> }
        });

        // Execute
        let error = DeriveParameter::load(&input).unwrap_err();

        // Verify
        assert_contains!(error.to_string(), "`#[declarg(verb)]`");
    }

    #[test]
    fn load_unsupported_type() {
        // Setup
        let input = field(parse_quote! {
            { #[declarg] my_field: (i32, i32) }
        });

        // Execute
        let error = DeriveParameter::load(&input).unwrap_err();

        // Verify
        assert_eq!(
            error.to_string(),
            "Invalid - unsupported option type `(i32 , i32)`."
        );
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }
}

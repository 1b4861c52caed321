use crate::model::{DeriveValue, IntermediateAttributes};
use quote::ToTokens;
use std::collections::{HashMap, HashSet};

impl TryFrom<&syn::Attribute> for IntermediateAttributes {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        // A bare `#[declarg]` carries no arguments.
        if let syn::Meta::Path(_) = value.meta {
            return Ok(Self::default());
        }

        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
        let expressions = value.parse_args_with(attributes_parser)?;
        let mut singletons = HashSet::default();
        let mut pairs: HashMap<String, Vec<DeriveValue>> = HashMap::default();

        for expression in expressions {
            match expression {
                syn::Expr::Assign(assignment) => {
                    let left = assignment.left.to_token_stream();
                    let values = pairs.entry(left.to_string()).or_default();
                    values.push(DeriveValue {
                        tokens: assignment.right.to_token_stream(),
                    });
                }
                syn::Expr::Path(ref path) if path.path.get_ident().is_some() => {
                    if let Some(ident) = path.path.get_ident() {
                        singletons.insert(ident.to_string());
                    }
                }
                _ => {
                    let expression_string = expression.to_token_stream().to_string();
                    return Err(syn::Error::new_spanned(
                        expression,
                        format!("Invalid - unparseable attribute: `{expression_string}`."),
                    ));
                }
            };
        }

        Ok(Self { singletons, pairs })
    }
}

impl IntermediateAttributes {
    /// The final value of the attribute pair `key`, if any.
    pub(crate) fn last(&self, key: &str) -> Option<&DeriveValue> {
        self.pairs.get(key).and_then(|values| values.last())
    }

    /// Every singleton not amongst the `singletons`, and every pair key not amongst the `pairs`.
    pub(crate) fn unknown(&self, singletons: &[&str], pairs: &[&str]) -> Vec<String> {
        let mut unknown: Vec<String> = self
            .singletons
            .iter()
            .filter(|key| !singletons.contains(&key.as_str()))
            .chain(
                self.pairs
                    .keys()
                    .filter(|key| !pairs.contains(&key.as_str())),
            )
            .cloned()
            .collect();
        unknown.sort();
        unknown
    }
}

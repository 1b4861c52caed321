use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub(crate) struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        let st = &self.tokens.to_string();
        let ot = &other.tokens.to_string();
        st == ot
    }
}

impl Eq for DeriveValue {}

/// The raw contents of a `#[declarg(..)]` attribute.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct IntermediateAttributes {
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, Vec<DeriveValue>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParameterType {
    Scalar,
    Optional,
    Collection { element: DeriveValue },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Modifier {
    Short(DeriveValue),
    Section(DeriveValue),
    Description(DeriveValue),
    Required,
    ValidValues(DeriveValue),
    OnlyForVerbs(DeriveValue),
    DefaultValue(DeriveValue),
    MutuallyExclusive(DeriveValue),
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveParameter {
    pub field_name: syn::Ident,
    pub name: DeriveValue,
    pub verb: bool,
    pub parameter_type: ParameterType,
    pub modifiers: Vec<Modifier>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveParser {
    pub struct_name: syn::Ident,
    pub settings: Option<DeriveValue>,
    pub parameters: Vec<DeriveParameter>,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveChoices {
    pub enum_name: syn::Ident,
    pub variants: Vec<syn::Ident>,
}

mod attribute;
mod choices;
mod parameter;
mod parser;

use crate::model::IntermediateAttributes;
use crate::ATTRIBUTE;

/// Load the (final) `#[declarg(..)]` attribute amongst the `attributes`, if any.
pub(self) fn find_attributes(
    attributes: &[syn::Attribute],
) -> Result<Option<IntermediateAttributes>, syn::Error> {
    let mut found = None;

    for attribute in attributes {
        if attribute.path().is_ident(ATTRIBUTE) {
            found.replace(IntermediateAttributes::try_from(attribute)?);
        }
    }

    Ok(found)
}

pub(self) fn incompatible_error(
    context: &str,
    span_ident: &syn::Ident,
    left: impl Into<String>,
    right: impl Into<String>,
) -> syn::Error {
    syn::Error::new(
        span_ident.span(),
        format!(
            "Invalid - {context} cannot be both `{}` and `{}`.",
            left.into(),
            right.into(),
        ),
    )
}

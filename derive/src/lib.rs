mod group;
mod utils;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Implement `vicar::Container` and `vicar::Group` for a struct with named members.
///
/// Every member is a child of the group and must implement `vicar::Node`, i.e. be a
/// `Field` or any container. Attributes:
///
/// * `#[group(rename_all = "camelCase")]` on the struct: name children in camel case
/// * `#[group(rename = "ICIn")]` on a member: use an explicit child name
/// * `#[group(skip)]` on a member: not part of the schema
#[proc_macro_derive(Group, attributes(group))]
pub fn derive_group(input: TokenStream) -> TokenStream {
    // Parse the input tokens into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);

    group::derive(input)
        .map(Into::into)
        .unwrap_or_else(|e| e.write_errors().into())
}

use super::utils::RenameRule;

use darling::{ast, FromDeriveInput, FromField};
use proc_macro2::TokenStream;
use quote::quote;

#[derive(FromDeriveInput)]
#[darling(attributes(group), supports(struct_named))]
struct GroupInput {
    ident: syn::Ident,
    generics: syn::Generics,
    data: ast::Data<(), GroupMember>,
    #[darling(default)]
    rename_all: RenameRule,
}

#[derive(FromField)]
#[darling(attributes(group))]
struct GroupMember {
    ident: Option<syn::Ident>,
    #[darling(default)]
    rename: Option<String>,
    #[darling(default)]
    skip: bool,
}

pub fn derive(input: syn::DeriveInput) -> darling::Result<TokenStream> {
    let input = GroupInput::from_derive_input(&input)?;

    let members = input
        .data
        .take_struct()
        .ok_or_else(|| darling::Error::unsupported_shape("enum"))?;

    let mut idents = vec![];
    let mut names = vec![];

    for member in members.fields {
        if member.skip {
            continue;
        }

        // `supports(struct_named)` guarantees every member has a name
        let ident = match member.ident {
            Some(ident) => ident,
            None => return Err(darling::Error::unsupported_shape("tuple struct")),
        };

        let name = match member.rename {
            Some(name) => name,
            None => input.rename_all.apply(&ident.to_string()),
        };

        idents.push(ident);
        names.push(name);
    }

    let struct_type = input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics vicar::Container for #struct_type #ty_generics #where_clause {
            fn kind(&self) -> vicar::ContainerKind {
                vicar::ContainerKind::Group
            }

            fn children(&self) -> Vec<(String, vicar::Child<'_>)> {
                vec![
                    #( (#names.to_string(), vicar::Node::as_child(&self.#idents)), )*
                ]
            }
        }

        impl #impl_generics vicar::Group for #struct_type #ty_generics #where_clause {
            fn keys(&self) -> &'static [&'static str] {
                &[#(#names),*]
            }

            fn child(&self, name: &str) -> Option<vicar::Child<'_>> {
                match name {
                    #( #names => Some(vicar::Node::as_child(&self.#idents)), )*
                    _ => None,
                }
            }

            fn child_mut(&mut self, name: &str) -> Option<vicar::ChildMut<'_>> {
                match name {
                    #( #names => Some(vicar::Node::as_child_mut(&mut self.#idents)), )*
                    _ => None,
                }
            }
        }
    };

    Ok(expanded)
}

//! Erzeuge From-Implementierungen für alle Varianten eines Enums, die genau ein Element halten.

use std::collections::HashMap;

use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use syn::{Error, Fields, ItemEnum, Type};

/// Ein Feld, das als Quelle einer [`From`]-Implementierung dient.
fn einzelnes_feld(fields: &Fields) -> Option<(TokenStream, &Type)> {
    match fields {
        Fields::Named(named) if named.named.len() == 1 => named.named.first().map(|feld| {
            let ident = &feld.ident;
            (quote!({ #ident: input }), &feld.ty)
        }),
        Fields::Unnamed(unnamed) if unnamed.unnamed.len() == 1 => {
            unnamed.unnamed.first().map(|feld| (quote!((input)), &feld.ty))
        },
        Fields::Named(_) | Fields::Unnamed(_) | Fields::Unit => None,
    }
}

/// Erzeuge die [`From`]-Implementierungen.
pub(crate) fn impl_from(item: ItemEnum) -> TokenStream {
    let ItemEnum { ident: enum_ident, generics, variants, .. } = &item;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let mut bekannte_typen: HashMap<String, &syn::Ident> = HashMap::new();
    let mut impls = Vec::new();
    for variant in variants {
        let Some((arg_teil, ty)) = einzelnes_feld(&variant.fields) else {
            continue;
        };
        let var_ident = &variant.ident;
        let typ_string = ty.to_token_stream().to_string();
        if let Some(bisher) = bekannte_typen.insert(typ_string.clone(), var_ident) {
            let nachricht = format!(
                "Typ `{typ_string}` kommt in Varianten `{bisher}` und `{var_ident}` vor, From ist nicht eindeutig."
            );
            return Error::new_spanned(ty, nachricht).to_compile_error();
        }
        impls.push(quote!(
            impl #impl_generics From<#ty> for #enum_ident #ty_generics #where_clause {
                fn from(input: #ty) -> Self {
                    Self::#var_ident #arg_teil
                }
            }
        ));
    }

    quote!(#(#impls)*)
}

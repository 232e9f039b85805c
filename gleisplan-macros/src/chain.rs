//! Erzeuge eine Methode, die Method-Chaining für eine `&mut self`-Methode erlaubt.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Error, FnArg, ItemFn, Pat, PatType, Receiver, ReturnType, Signature};

/// Sammle alle Fehler, damit sie gemeinsam gemeldet werden.
fn füge_hinzu(fehler: &mut Option<Error>, neu: Error) {
    match fehler {
        Some(bisher) => bisher.combine(neu),
        None => *fehler = Some(neu),
    }
}

/// Erzeuge die `<name>_chain`-Methode für die übergebene Funktion.
pub(crate) fn erzeuge_chain(args: &TokenStream, ast: &ItemFn) -> TokenStream {
    let mut fehler = None;
    if !args.is_empty() {
        füge_hinzu(&mut fehler, Error::new(args.span(), "Es werden keine Argumente unterstützt."));
    }

    let ItemFn { attrs, vis, sig, .. } = ast;
    let Signature { constness, asyncness, unsafety, abi, ident, generics, inputs, variadic, output, .. } =
        sig;
    if let ReturnType::Type(_pfeil, typ) = output {
        füge_hinzu(&mut fehler, Error::new(typ.span(), "Nur Methoden ohne Rückgabewert werden unterstützt."));
    }
    if let Some(abi) = abi {
        füge_hinzu(&mut fehler, Error::new(abi.span(), "Eine explizite ABI wird nicht unterstützt."));
    }
    if let Some(variadic) = variadic {
        füge_hinzu(&mut fehler, Error::new(variadic.span(), "Variadische Argumente werden nicht unterstützt."));
    }

    let mut inputs_iter = inputs.iter();
    match inputs_iter.next() {
        Some(FnArg::Receiver(Receiver { reference: Some(_), mutability: Some(_), .. })) => {},
        Some(andere) => {
            füge_hinzu(&mut fehler, Error::new(andere.span(), "Erstes Argument muss &mut self sein."));
        },
        None => {
            füge_hinzu(&mut fehler, Error::new(sig.span(), "Erstes Argument muss &mut self sein."));
        },
    }
    let weitere_argumente: Vec<_> = inputs_iter.clone().collect();
    let mut argument_namen = Vec::with_capacity(weitere_argumente.len());
    for argument in &weitere_argumente {
        match argument {
            FnArg::Typed(PatType { pat, .. }) => match pat.as_ref() {
                Pat::Ident(pat_ident) => argument_namen.push(&pat_ident.ident),
                anderes => füge_hinzu(
                    &mut fehler,
                    Error::new(anderes.span(), "Nur einfache Argument-Namen werden unterstützt."),
                ),
            },
            FnArg::Receiver(receiver) => {
                füge_hinzu(&mut fehler, Error::new(receiver.span(), "Unerwartetes self-Argument."));
            },
        }
    }

    if let Some(fehler) = fehler {
        let compile_error = fehler.to_compile_error();
        return quote! {
            #compile_error
            #ast
        };
    }

    let docstrings = attrs.iter().filter(|attr| attr.path().is_ident("doc"));
    let chain_ident = format_ident!("{}_chain", ident);
    let (impl_generics, _ty_generics, where_clause) = generics.split_for_impl();
    quote! {
        #ast

        #(#docstrings)*
        #[must_use]
        #vis #constness #asyncness #unsafety fn #chain_ident #impl_generics(
            mut self,
            #(#weitere_argumente),*
        ) -> Self #where_clause {
            self.#ident(#(#argument_namen),*);
            self
        }
    }
}

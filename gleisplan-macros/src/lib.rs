//! Macros für gleisplan.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod from;
#[proc_macro_derive(From)]
/// Erzeuge [`From`]-Implementierungen für alle Varianten eines Enums, die genau ein Element halten.
///
/// Varianten mit mehreren oder keinen Feldern werden ignoriert.
/// Kommt der selbe Typ in mehreren Varianten vor, wird ein Compile-Fehler erzeugt.
pub fn from_derive(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input);

    from::impl_from(ast).into()
}

mod chain;
#[proc_macro_attribute]
/// Erzeuge zusätzlich eine Methode mit `_chain`-Suffix, die `self` konsumiert und zurückgibt.
///
/// Die ursprüngliche Methode muss `&mut self` als erstes Argument haben und darf keinen Rückgabewert besitzen.
pub fn chain(attr: TokenStream, item: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(item);

    chain::erzeuge_chain(&attr.into(), &ast).into()
}

extern crate proc_macro;

use proc_macro::TokenStream;

/// Marks a struct as a data element spec and expands it into the generated
/// interface, implementation, and (when a collection is given) persistence
/// handler.
#[proc_macro_attribute]
pub fn data_element(args: TokenStream, input: TokenStream) -> TokenStream {
    match dataelement_codegen::generate(args.into(), input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

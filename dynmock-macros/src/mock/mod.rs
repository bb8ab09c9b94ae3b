mod descriptor;
mod identity;
mod mock_method;
mod mocked;
mod parsed;

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::parse2;

use mocked::Mocked;
use parsed::Parsed;

pub(crate) fn exec(input: TokenStream) -> TokenStream {
    let mock = match parse2::<Parsed>(input) {
        Ok(parsed) => parsed,
        Err(err) => return err.to_compile_error(),
    };

    #[allow(clippy::let_and_return)]
    let tokens = Mocked::new(mock).into_token_stream();

    #[cfg(feature = "debug")]
    println!("\nmock!:\n{tokens:#}\n");

    tokens
}

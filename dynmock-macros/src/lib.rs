#![warn(
    unused,
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    rust_2021_compatibility
)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

use proc_macro::TokenStream;

mod misc;
mod mock;

/// Generates a mock type for one or more traits.
///
/// ```ignore
/// mock! {
///     pub struct MockWarehouse;
///
///     impl Warehouse for MockWarehouse {
///         fn has_inventory(&self, product: &str, quantity: u32) -> bool;
///         fn remove(&self, product: &str, quantity: u32);
///     }
/// }
/// ```
///
/// Methods without a body are only handled by the expectations of the
/// mockery. Methods with a body are concrete: transparent mocks call the body
/// if no expectation matches. `&mut` parameters are written back after the
/// call, `#[dynmock(out)]` marks them as output-only.
#[proc_macro]
pub fn mock(input: TokenStream) -> TokenStream {
    mock::exec(input.into()).into()
}

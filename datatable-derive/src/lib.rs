mod macros;

use proc_macro::TokenStream;

/// Derive `DataItem` for a struct with named fields.
///
/// Every field is exposed under its own name. Field attributes:
///
/// - `#[data(id)]` marks the identifier field. Without it, a field named
///   `id` is used.
/// - `#[data(rename = "key")]` exposes the field under another key.
/// - `#[data(skip)]` hides the field from lookups.
#[proc_macro_derive(DataItem, attributes(data))]
pub fn derive_data_item(input: TokenStream) -> TokenStream {
    macros::data_item::expand(input.into()).into()
}

//! Doc comment and deprecation attributes for generated items.

use proc_macro2::TokenStream;
use quote::quote;

/// `#[doc]` attributes for a schema description, one per line.
///
/// Each line gets a leading space so it renders as `/// text`.
pub fn doc_attrs(description: Option<&str>) -> TokenStream {
    let lines: Vec<String> = description
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(|text| text.lines().map(|line| format!(" {}", line.trim_end())).collect())
        .unwrap_or_default();

    quote! { #(#[doc = #lines])* }
}

/// `#[doc]` attributes for a description followed by an extra paragraph.
pub fn doc_attrs_with(description: Option<&str>, extra: &str) -> TokenStream {
    let described = doc_attrs(description);
    let separator = description
        .filter(|text| !text.trim().is_empty())
        .map(|_| quote! { #[doc = ""] });
    let extra = format!(" {extra}");

    quote! {
        #described
        #separator
        #[doc = #extra]
    }
}

/// `#[deprecated]` for a deprecated field or value, with the reason as note.
pub fn deprecated_attr(is_deprecated: bool, reason: Option<&str>) -> TokenStream {
    match (is_deprecated, reason) {
        (false, _) => TokenStream::new(),
        (true, Some(reason)) => quote! { #[deprecated(note = #reason)] },
        (true, None) => quote! { #[deprecated] },
    }
}

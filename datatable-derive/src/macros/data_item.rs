use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, Ident, LitStr, Type, parse2};

/// A struct field as seen by the derive.
struct FieldSpec<'a> {
    ident: &'a Ident,
    ty: &'a Type,
    key: String,
    id: bool,
    skip: bool,
}

/// Derive macro for the DataItem trait.
pub fn expand(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match parse2(input) {
        Ok(i) => i,
        Err(e) => return e.to_compile_error(),
    };

    match expand_struct(&input) {
        Ok(tokens) => tokens,
        Err(e) => e.to_compile_error(),
    }
}

fn expand_struct(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "#[derive(DataItem)] only supports structs",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            input,
            "#[derive(DataItem)] requires named fields",
        ));
    };

    let fields = named
        .named
        .iter()
        .map(parse_field)
        .collect::<syn::Result<Vec<_>>>()?;

    check_unique_keys(&fields)?;
    let id = find_id(input, &fields)?;
    let id_ident = id.ident;
    let id_ty = id.ty;

    let arms = fields.iter().filter(|f| !f.skip).map(|f| {
        let key = &f.key;
        let ident = f.ident;
        quote! {
            #key => ::datatable::ToFieldValue::to_field_value(&self.#ident),
        }
    });

    Ok(quote! {
        impl #impl_generics ::datatable::DataItem for #name #ty_generics #where_clause {
            type Id = #id_ty;

            fn id(&self) -> Self::Id {
                ::core::clone::Clone::clone(&self.#id_ident)
            }

            fn field(&self, key: &str) -> ::datatable::FieldValue {
                match key {
                    #(#arms)*
                    _ => ::datatable::FieldValue::Null,
                }
            }
        }
    })
}

fn parse_field(field: &Field) -> syn::Result<FieldSpec<'_>> {
    let Some(ident) = field.ident.as_ref() else {
        return Err(syn::Error::new_spanned(field, "expected a named field"));
    };
    let mut spec = FieldSpec {
        ident,
        ty: &field.ty,
        key: ident.to_string(),
        id: false,
        skip: false,
    };

    for attr in &field.attrs {
        if !attr.path().is_ident("data") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("id") {
                spec.id = true;
                Ok(())
            } else if meta.path.is_ident("skip") {
                spec.skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                let key: LitStr = meta.value()?.parse()?;
                spec.key = key.value();
                Ok(())
            } else {
                Err(meta.error("expected `id`, `rename = \"...\"` or `skip`"))
            }
        })?;
    }
    Ok(spec)
}

/// Exposed keys must be unique, including renamed ones.
fn check_unique_keys(fields: &[FieldSpec<'_>]) -> syn::Result<()> {
    let mut seen = HashSet::new();
    for field in fields.iter().filter(|f| !f.skip) {
        if !seen.insert(field.key.as_str()) {
            return Err(syn::Error::new_spanned(
                field.ident,
                format!("duplicate data key \"{}\"", field.key),
            ));
        }
    }
    Ok(())
}

fn find_id<'f, 'a>(
    input: &DeriveInput,
    fields: &'f [FieldSpec<'a>],
) -> syn::Result<&'f FieldSpec<'a>> {
    let mut marked = fields.iter().filter(|f| f.id);
    if let Some(first) = marked.next() {
        if let Some(second) = marked.next() {
            return Err(syn::Error::new_spanned(
                second.ident,
                "only one field may be marked #[data(id)]",
            ));
        }
        return Ok(first);
    }

    fields.iter().find(|f| f.ident == "id").ok_or_else(|| {
        syn::Error::new_spanned(
            &input.ident,
            "#[derive(DataItem)] needs a field named `id` or one marked #[data(id)]",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_str(input: TokenStream) -> String {
        expand(input).to_string()
    }

    #[test]
    fn test_expands_impl() {
        let out = expand_str(quote! {
            struct Row {
                id: u32,
                #[data(rename = "label")]
                name: String,
            }
        });
        assert!(out.contains("DataItem for Row"));
        assert!(out.contains("\"label\""));
        assert!(!out.contains("compile_error"));
    }

    #[test]
    fn test_rename_onto_existing_field_is_rejected() {
        let out = expand_str(quote! {
            struct Row {
                id: u32,
                #[data(rename = "name")]
                display: String,
                name: String,
            }
        });
        assert!(out.contains("compile_error"));
        assert!(out.contains("duplicate data key"));
    }

    #[test]
    fn test_rename_onto_id_is_rejected() {
        let out = expand_str(quote! {
            struct Row {
                id: u32,
                #[data(rename = "id")]
                code: String,
            }
        });
        assert!(out.contains("duplicate data key"));
    }

    #[test]
    fn test_skipped_field_may_share_a_key() {
        let out = expand_str(quote! {
            struct Row {
                id: u32,
                #[data(rename = "name")]
                display: String,
                #[data(skip)]
                name: String,
            }
        });
        assert!(!out.contains("compile_error"));
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let out = expand_str(quote! {
            struct Row {
                name: String,
            }
        });
        assert!(out.contains("needs a field named"));
    }
}

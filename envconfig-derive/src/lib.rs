//! Derive macro implementation for envconfig

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields};

mod attrs;

use attrs::FieldAttrs;

const INVALID_SPECIFICATION: &str = "invalid specification must be a struct";

/// `Envconfig` derive macro
///
/// Implements `envconfig::Specification`, describing every field that
/// carries `#[envconfig(key = "...")]`, and `envconfig::Settable`, so the
/// struct can be nested inside another `Envconfig` struct. Only nested
/// structs must implement `Default`.
///
/// # Supported Attributes
///
/// **Field-level**:
/// - `#[envconfig(key = "suffix")]`: Key suffix appended to the prefix
/// - `#[envconfig(default = "value")]`: Fallback when the variable is unset or empty
/// - `#[envconfig(required = "true")]`: Report a missing value (`required` alone also works)
///
/// # Example
///
/// See the `envconfig` crate documentation for usage examples.
#[proc_macro_derive(Envconfig, attributes(envconfig))]
pub fn derive_envconfig(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Only structs with named fields can be described
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => return Err(syn::Error::new_spanned(input, INVALID_SPECIFICATION)),
        },
        _ => return Err(syn::Error::new_spanned(input, INVALID_SPECIFICATION)),
    };

    let mut descriptors = Vec::new();
    for field in fields {
        let attrs = FieldAttrs::from_field(field)?;
        let Some(key) = attrs.key else {
            continue;
        };
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let field_name = field_ident.to_string();
        let field_name = field_name.strip_prefix("r#").unwrap_or(&field_name);

        let default = attrs.default.map(|default| quote! { .default(#default) });
        let required = attrs.required.map(|required| quote! { .required(#required) });

        descriptors.push(quote! {
            ::envconfig::Field::new(#field_name, &mut self.#field_ident)
                .key(#key)
                #default
                #required
        });
    }

    // Nesting rebuilds the field from `Default`. The higher-ranked bound is
    // only checked where the struct is nested, so top-level targets need not
    // implement `Default`.
    let mut nested_generics = input.generics.clone();
    nested_generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(for<'__envconfig> Self: ::core::default::Default));
    let (_, _, nested_where_clause) = nested_generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::envconfig::Specification for #struct_name #ty_generics #where_clause {
            fn fields(&mut self) -> ::std::vec::Vec<::envconfig::Field<'_>> {
                ::std::vec![#(#descriptors),*]
            }
        }

        impl #impl_generics ::envconfig::Settable for #struct_name #ty_generics #nested_where_clause {
            fn slot(&mut self) -> ::envconfig::Slot<'_> {
                ::envconfig::Slot::Struct(self)
            }
        }
    })
}

//! Attribute parsing for `#[envconfig(...)]` annotations.
//!
//! This module extracts configuration attributes from struct fields during
//! macro expansion.

use syn::{Field, Lit};

/// Parsed `#[envconfig(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Key suffix combined with the prefix into the environment variable name.
    ///
    /// If `None`, the field does not take part in processing.
    pub key: Option<String>,

    /// Fallback literal, stored as text.
    pub default: Option<String>,

    /// Required flag as text. Only `"true"` is acted upon at runtime.
    pub required: Option<String>,
}

impl FieldAttrs {
    /// Extract and parse `#[envconfig(...)]` attributes from a struct field.
    ///
    /// Attributes of other macros are ignored.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("envconfig") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // key = "..."
                if meta.path.is_ident("key") {
                    let value = meta.value()?;
                    match value.parse::<Lit>()? {
                        Lit::Str(s) => attrs.key = Some(s.value()),
                        other => return Err(syn::Error::new_spanned(other, "key must be a string")),
                    }
                    return Ok(());
                }

                // default = "..." | 8080 | 0.5 | true
                if meta.path.is_ident("default") {
                    let value = meta.value()?;
                    attrs.default = Some(literal_text(value.parse()?)?);
                    return Ok(());
                }

                // required or required = "true" | true
                if meta.path.is_ident("required") {
                    if meta.input.peek(syn::Token![=]) {
                        let value = meta.value()?;
                        attrs.required = Some(literal_text(value.parse()?)?);
                    } else {
                        attrs.required = Some("true".to_string());
                    }
                    return Ok(());
                }

                Err(meta.error("unsupported envconfig attribute"))
            })?;
        }

        Ok(attrs)
    }
}

/// Render a literal the way it would be written in the environment.
fn literal_text(lit: Lit) -> syn::Result<String> {
    match lit {
        Lit::Str(s) => Ok(s.value()),
        Lit::Int(i) => Ok(i.base10_digits().to_string()),
        Lit::Float(f) => Ok(f.base10_digits().to_string()),
        Lit::Bool(b) => Ok(b.value.to_string()),
        other => Err(syn::Error::new_spanned(
            other,
            "expected a string, number or bool literal",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_parse_key_attribute() {
        let field: Field = parse_quote! {
            #[envconfig(key = "port")]
            pub port: u16
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.key, Some("port".to_string()));
        assert_eq!(attrs.default, None);
        assert_eq!(attrs.required, None);
    }

    #[test]
    fn test_parse_default_string() {
        let field: Field = parse_quote! {
            #[envconfig(key = "host", default = "localhost")]
            pub host: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.default, Some("localhost".to_string()));
    }

    #[test]
    fn test_parse_default_number() {
        let field: Field = parse_quote! {
            #[envconfig(key = "port", default = 8080)]
            pub port: u16
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.default, Some("8080".to_string()));
    }

    #[test]
    fn test_parse_default_float_and_bool() {
        let field: Field = parse_quote! {
            #[envconfig(key = "ratio", default = 0.5)]
            #[envconfig(required = false)]
            pub ratio: f64
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(attrs.default, Some("0.5".to_string()));
        assert_eq!(attrs.required, Some("false".to_string()));
    }

    #[test]
    fn test_parse_required_forms() {
        let bare: Field = parse_quote! {
            #[envconfig(key = "host", required)]
            pub host: String
        };
        let text: Field = parse_quote! {
            #[envconfig(key = "host", required = "yes")]
            pub host: String
        };

        assert_eq!(
            FieldAttrs::from_field(&bare).unwrap().required,
            Some("true".to_string())
        );
        assert_eq!(
            FieldAttrs::from_field(&text).unwrap().required,
            Some("yes".to_string())
        );
    }

    #[test]
    fn test_ignores_other_attributes() {
        let field: Field = parse_quote! {
            #[serde(rename = "x")]
            pub field_name: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert!(attrs.key.is_none());
    }

    #[test]
    fn test_rejects_unknown_option() {
        let field: Field = parse_quote! {
            #[envconfig(key = "host", from_file)]
            pub host: String
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_rejects_non_string_key() {
        let field: Field = parse_quote! {
            #[envconfig(key = 5)]
            pub host: String
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }
}

//! Fallible construction of value objects from raw input.
//!
//! A constructor either returns the value or a [`ValidationError`] with
//! exactly one field entry. The field is named by the caller, or by the
//! camel-cased type name when the caller has none to offer.
//!
//! [`ValidationError`]: railyard_core::ValidationError

use railyard_core::{Error, Outcome};
use std::fmt;

/// Construction contract for value objects.
pub trait TryCreate: Sized {
    /// Raw input the value is built from.
    type Raw: ?Sized;

    /// PascalCase name of the type, used for the default field name.
    const TYPE_NAME: &'static str;

    fn try_create(raw: &Self::Raw, field: Option<&str>) -> Outcome<Self>;

    /// `FirstName` → `firstName`.
    fn default_field_name() -> String {
        camel_case(Self::TYPE_NAME)
    }
}

/// Lower-cases the leading character of a PascalCase identifier.
pub fn camel_case(type_name: &str) -> String {
    let mut chars = type_name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Single-field validation failure for `T`, named by `field` or `T`'s default.
pub fn invalid<T: TryCreate>(field: Option<&str>, detail: impl Into<String>) -> Error {
    let field_name = field.map_or_else(T::default_field_name, str::to_owned);
    Error::validation(field_name, detail)
}

/// Declares a trimmed, non-empty string value object.
///
/// ```
/// use railyard_boundary::{required_string, TryCreate};
///
/// required_string!(
///     /// Display name shown on invoices.
///     pub CustomerName
/// );
///
/// let name = CustomerName::try_create("  Ada  ", None).unwrap();
/// assert_eq!(name.as_str(), "Ada");
///
/// let err = CustomerName::try_create(" ", None).unwrap_err();
/// assert!(err.to_string().ends_with("customerName: must not be empty"));
/// ```
#[macro_export]
macro_rules! required_string {
    ($(#[$meta:meta])* $vis:vis $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl $crate::TryCreate for $name {
            type Raw = str;
            const TYPE_NAME: &'static str = stringify!($name);

            fn try_create(
                raw: &str,
                field: ::std::option::Option<&str>,
            ) -> $crate::__private::Outcome<Self> {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err($crate::construct::invalid::<Self>(field, "must not be empty"));
                }
                Ok(Self(trimmed.to_owned()))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::std::convert::From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Built-in value objects
// ---------------------------------------------------------------------------

/// Lower-cased address with a single `@` and a dotted domain.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn domain(&self) -> &str {
        self.0.rsplit('@').next().unwrap_or_default()
    }
}

impl TryCreate for EmailAddress {
    type Raw = str;
    const TYPE_NAME: &'static str = "EmailAddress";

    fn try_create(raw: &str, field: Option<&str>) -> Outcome<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(invalid::<Self>(field, "must not be empty"));
        }
        let mut parts = trimmed.split('@');
        let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid::<Self>(field, "must contain exactly one '@'"));
        };
        if local.is_empty() {
            return Err(invalid::<Self>(field, "must have a local part before '@'"));
        }
        if !domain.contains('.') || domain.split('.').any(str::is_empty) {
            return Err(invalid::<Self>(field, "must have a dotted domain after '@'"));
        }
        Ok(Self(trimmed.to_lowercase()))
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> String {
        value.0
    }
}

/// Signed 64-bit integer parsed from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Integer(i64);

impl Integer {
    pub fn value(self) -> i64 {
        self.0
    }
}

impl TryCreate for Integer {
    type Raw = str;
    const TYPE_NAME: &'static str = "Integer";

    fn try_create(raw: &str, field: Option<&str>) -> Outcome<Self> {
        raw.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| invalid::<Self>(field, format!("'{}' is not an integer", raw.trim())))
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Integer> for i64 {
    fn from(value: Integer) -> i64 {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railyard_core::ValidationError;

    crate::required_string!(pub FirstName);

    fn single_field(err: Error) -> (String, Vec<String>) {
        let Error::Validation(ValidationError { fields, .. }) = err else {
            panic!("expected validation error, got {err:?}");
        };
        assert_eq!(fields.len(), 1, "exactly one field error");
        let field = fields.into_iter().next().expect("one field");
        (field.field_name, field.details.into_vec())
    }

    #[test]
    fn camel_cases_type_names() {
        assert_eq!(camel_case("FirstName"), "firstName");
        assert_eq!(camel_case("URL"), "uRL");
        assert_eq!(camel_case(""), "");
        assert_eq!(FirstName::default_field_name(), "firstName");
    }

    #[test]
    fn required_string_trims_and_rejects_blank() {
        let name = FirstName::try_create("  Grace ", None).unwrap();
        assert_eq!(name.as_str(), "Grace");
        assert_eq!(name.to_string(), "Grace");
        assert_eq!(String::from(name), "Grace");

        let (field, details) = single_field(FirstName::try_create("   ", None).unwrap_err());
        assert_eq!(field, "firstName");
        assert_eq!(details, ["must not be empty"]);
    }

    #[test]
    fn caller_supplied_field_name_wins() {
        let (field, _) = single_field(FirstName::try_create("", Some("given_name")).unwrap_err());
        assert_eq!(field, "given_name");
    }

    #[test]
    fn required_strings_order_lexically() {
        let a = FirstName::try_create("Ada", None).unwrap();
        let b = FirstName::try_create("Grace", None).unwrap();
        assert!(a < b);
        assert_ne!(a, b);
    }

    #[test]
    fn email_normalizes_case() {
        let email = EmailAddress::try_create(" Ada@Example.COM ", None).unwrap();
        assert_eq!(email.as_str(), "ada@example.com");
        assert_eq!(email.domain(), "example.com");
    }

    #[test]
    fn email_rejections_name_the_problem() {
        let cases = [
            ("", "must not be empty"),
            ("ada.example.com", "must contain exactly one '@'"),
            ("a@b@example.com", "must contain exactly one '@'"),
            ("@example.com", "must have a local part before '@'"),
            ("ada@localhost", "must have a dotted domain after '@'"),
            ("ada@example.", "must have a dotted domain after '@'"),
        ];
        for (raw, expected) in cases {
            let (field, details) = single_field(EmailAddress::try_create(raw, None).unwrap_err());
            assert_eq!(field, "emailAddress", "input {raw:?}");
            assert_eq!(details, [expected], "input {raw:?}");
        }
    }

    #[test]
    fn integer_parses_signed_values() {
        assert_eq!(Integer::try_create(" -42 ", None).map(Integer::value), Ok(-42));
        let (field, details) = single_field(Integer::try_create("4x", Some("age")).unwrap_err());
        assert_eq!(field, "age");
        assert_eq!(details, ["'4x' is not an integer"]);
    }
}

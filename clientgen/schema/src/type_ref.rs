//! The wire type algebra.
//!
//! A GraphQL type reference is either a named type, a non-null wrapper or a
//! list wrapper. Nullability is positional: `[String]!` is a non-null list of
//! nullable strings.

use std::fmt;
use std::str::FromStr;

use crate::errors::TypeReferenceError;

/// A reference to a schema type as it appears on a field or argument.
///
/// ## Invariants
///
/// - `NonNull` never wraps another `NonNull` (use [`TypeReference::non_null`]
///   to construct non-null references)
/// - Every reference terminates in exactly one `Named`
///
/// ## Examples
///
/// ```
/// use clientgen_schema::TypeReference;
///
/// let ids = TypeReference::list(TypeReference::named("ID").non_null()).non_null();
/// assert_eq!(ids.to_wire_string(), "[ID!]!");
/// assert_eq!(ids.base_name(), "ID");
/// assert!(ids.is_non_null());
/// assert!(ids.is_list());
///
/// let parsed: TypeReference = "[ID!]!".parse().unwrap();
/// assert_eq!(parsed, ids);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeReference {
    /// A named type such as `String` or `User`.
    Named(String),
    /// The inner reference is non-null.
    NonNull(Box<TypeReference>),
    /// A list of the inner reference.
    List(Box<TypeReference>),
}

impl TypeReference {
    /// Creates a reference to a named type.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wraps `inner` in a list.
    pub fn list(inner: TypeReference) -> Self {
        Self::List(Box::new(inner))
    }

    /// Marks this reference non-null.
    ///
    /// Returns `self` unchanged when it is already non-null, so the
    /// single-wrapper invariant always holds.
    pub fn non_null(self) -> Self {
        match self {
            Self::NonNull(_) => self,
            other => Self::NonNull(Box::new(other)),
        }
    }

    /// Whether the outermost layer is non-null.
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// Whether this reference denotes a list, looking through a non-null wrapper.
    pub fn is_list(&self) -> bool {
        match self {
            Self::Named(_) => false,
            Self::List(_) => true,
            Self::NonNull(inner) => inner.is_list(),
        }
    }

    /// The innermost type name.
    pub fn base_name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::NonNull(inner) | Self::List(inner) => inner.base_name(),
        }
    }

    /// Renders the reference in GraphQL syntax (`Name`, `Name!`, `[Name!]!`).
    pub fn to_wire_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::NonNull(inner) => write!(f, "{inner}!"),
            Self::List(inner) => write!(f, "[{inner}]"),
        }
    }
}

impl FromStr for TypeReference {
    type Err = TypeReferenceError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parser = WireParser {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        };
        let reference = parser.parse_reference()?;
        if parser.pos != parser.bytes.len() {
            return Err(TypeReferenceError::TrailingInput {
                input: input.to_string(),
                position: parser.pos,
            });
        }
        Ok(reference)
    }
}

/// Recursive-descent parser over the wire syntax.
struct WireParser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl WireParser<'_> {
    fn parse_reference(&mut self) -> Result<TypeReference, TypeReferenceError> {
        let base = if self.peek() == Some(b'[') {
            self.pos += 1;
            let inner = self.parse_reference()?;
            if self.peek() != Some(b']') {
                return Err(TypeReferenceError::UnclosedList {
                    input: self.input.to_string(),
                });
            }
            self.pos += 1;
            TypeReference::list(inner)
        } else {
            let start = self.pos;
            while self
                .peek()
                .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_')
            {
                self.pos += 1;
            }
            if start == self.pos {
                return Err(TypeReferenceError::MissingName {
                    input: self.input.to_string(),
                    position: start,
                });
            }
            TypeReference::named(&self.input[start..self.pos])
        };

        if self.peek() != Some(b'!') {
            return Ok(base);
        }
        self.pos += 1;
        if self.peek() == Some(b'!') {
            return Err(TypeReferenceError::DoubleNonNull {
                input: self.input.to_string(),
            });
        }
        Ok(base.non_null())
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn user_list() -> TypeReference {
        // [User]!
        TypeReference::list(TypeReference::named("User")).non_null()
    }

    #[test]
    fn renders_inside_out() {
        assert_eq!(TypeReference::named("String").to_wire_string(), "String");
        assert_eq!(
            TypeReference::named("String").non_null().to_wire_string(),
            "String!"
        );
        assert_eq!(user_list().to_wire_string(), "[User]!");
        assert_eq!(
            TypeReference::list(TypeReference::list(TypeReference::named("Int").non_null()))
                .to_wire_string(),
            "[[Int!]]"
        );
    }

    #[test]
    fn non_null_is_idempotent() {
        let once = TypeReference::named("ID").non_null();
        let twice = once.clone().non_null();
        assert_eq!(once, twice);
        assert_eq!(twice.to_wire_string(), "ID!");
    }

    #[test]
    fn derived_queries() {
        let reference = user_list();
        assert!(reference.is_non_null());
        assert!(reference.is_list());
        assert_eq!(reference.base_name(), "User");

        let plain = TypeReference::named("User");
        assert!(!plain.is_non_null());
        assert!(!plain.is_list());
    }

    #[test]
    fn parses_nested_lists() {
        let parsed: TypeReference = "[[Int!]]!".parse().unwrap();
        assert_eq!(
            parsed,
            TypeReference::list(TypeReference::list(TypeReference::named("Int").non_null()))
                .non_null()
        );
    }

    #[test]
    fn rejects_double_non_null() {
        let err = "String!!".parse::<TypeReference>().unwrap_err();
        assert!(matches!(err, TypeReferenceError::DoubleNonNull { .. }));
    }

    #[test]
    fn rejects_unclosed_list() {
        let err = "[String".parse::<TypeReference>().unwrap_err();
        assert!(matches!(err, TypeReferenceError::UnclosedList { .. }));
    }

    #[test]
    fn rejects_empty_and_trailing_input() {
        assert!(matches!(
            "".parse::<TypeReference>(),
            Err(TypeReferenceError::MissingName { position: 0, .. })
        ));
        assert!(matches!(
            "[]".parse::<TypeReference>(),
            Err(TypeReferenceError::MissingName { position: 1, .. })
        ));
        assert!(matches!(
            "String]".parse::<TypeReference>(),
            Err(TypeReferenceError::TrailingInput { position: 6, .. })
        ));
    }

    fn arb_reference() -> impl Strategy<Value = TypeReference> {
        let leaf = "[A-Z][A-Za-z0-9_]{0,8}".prop_map(TypeReference::named);
        leaf.prop_recursive(6, 32, 1, |inner| {
            prop_oneof![
                inner.clone().prop_map(TypeReference::list),
                inner.prop_map(TypeReference::non_null),
            ]
        })
    }

    proptest! {
        #[test]
        fn wire_string_round_trips(reference in arb_reference()) {
            let rendered = reference.to_wire_string();
            let parsed: TypeReference = rendered.parse().unwrap();
            prop_assert_eq!(parsed, reference);
        }
    }
}

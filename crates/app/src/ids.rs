//! Typed Identifiers

use std::{
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use uuid::Uuid;

/// Opaque string identifier tagged with the record type it points at.
///
/// Generated identifiers are time-ordered UUIDs rendered as text, but any
/// string is accepted so fixture records can carry stable ids such as
/// `cat-honey`.
pub struct TypedId<T>(String, PhantomData<T>);

impl<T> TypedId<T> {
    /// Generate a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::from_string(Uuid::now_v7().to_string())
    }

    #[must_use]
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into(), PhantomData)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<T> Default for TypedId<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TypedId<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}

impl<T> Debug for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> Display for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedId<T> {}

impl<T> Hash for TypedId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> From<String> for TypedId<T> {
    fn from(value: String) -> Self {
        Self::from_string(value)
    }
}

impl<T> From<&str> for TypedId<T> {
    fn from(value: &str) -> Self {
        Self::from_string(value)
    }
}

impl<T> From<TypedId<T>> for String {
    fn from(value: TypedId<T>) -> Self {
        value.into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    #[test]
    fn generated_ids_are_unique() {
        let a = TypedId::<Marker>::new();
        let b = TypedId::<Marker>::new();

        assert_ne!(a, b, "two generated ids should differ");
    }

    #[test]
    fn fixed_ids_round_trip_through_strings() {
        let id = TypedId::<Marker>::from("cat-honey");

        assert_eq!(id.as_str(), "cat-honey");
        assert_eq!(String::from(id), "cat-honey");
    }
}

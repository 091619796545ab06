//! Validated text types shared across the MediTrack crates.
//!
//! Shape validation happens at the action boundary, so the core wants a cheap
//! way to say "this field must carry real content". [`NonEmptyText`] encodes
//! that guarantee in the type rather than re-checking at every call site.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("text cannot be empty")]
    Empty,
    /// The input text exceeded the permitted length
    #[error("text exceeds maximum length of {0} characters")]
    TooLong(usize),
}

/// A string that is guaranteed to contain at least one non-whitespace character.
///
/// Input is trimmed of leading and trailing whitespace during construction, so
/// the wrapped value is always in its trimmed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the trimmed input has no content.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Like [`NonEmptyText::new`] but additionally bounds the trimmed length.
    pub fn bounded(input: impl AsRef<str>, max_len: usize) -> Result<Self, TextError> {
        let text = Self::new(input)?;
        if text.0.chars().count() > max_len {
            return Err(TextError::TooLong(max_len));
        }
        Ok(text)
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for NonEmptyText {
    type Error = TextError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        NonEmptyText::new(value)
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let text = NonEmptyText::new("  Alice Wonderland  ").expect("valid text");
        assert_eq!(text.as_str(), "Alice Wonderland");
    }

    #[test]
    fn rejects_empty_and_whitespace_only() {
        assert!(matches!(NonEmptyText::new(""), Err(TextError::Empty)));
        assert!(matches!(NonEmptyText::new("   \t\n"), Err(TextError::Empty)));
    }

    #[test]
    fn bounded_rejects_overlong_input() {
        let err = NonEmptyText::bounded("abcdef", 5).expect_err("expected length failure");
        assert!(matches!(err, TextError::TooLong(5)));
        assert!(NonEmptyText::bounded("abcde", 5).is_ok());
    }

    #[test]
    fn serde_round_trip_preserves_content() {
        let text = NonEmptyText::new("Cardiology").expect("valid text");
        let json = serde_json::to_string(&text).expect("serialize");
        assert_eq!(json, "\"Cardiology\"");
        let back: NonEmptyText = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, text);
    }

    #[test]
    fn deserialize_rejects_empty_string() {
        let result: Result<NonEmptyText, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }
}

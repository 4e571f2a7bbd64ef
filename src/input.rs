//! Input validation for the free-function API.
//!
//! Anything implementing [`TextInput`] can be handed to the functions in
//! [`crate::clean`] and to [`Preprocessor::normalize_input`](crate::Preprocessor::normalize_input).
//! Values that are not text (absent values, byte buffers that are not valid
//! UTF-8) are rejected with [`StageError::InvalidInput`] before any stage runs.

use crate::stage::StageError;
use std::borrow::Cow;

/// A value that may or may not hold text.
pub trait TextInput {
    fn as_text(&self) -> Result<Cow<'_, str>, StageError>;
}

impl TextInput for str {
    #[inline]
    fn as_text(&self) -> Result<Cow<'_, str>, StageError> {
        Ok(Cow::Borrowed(self))
    }
}

impl TextInput for String {
    #[inline]
    fn as_text(&self) -> Result<Cow<'_, str>, StageError> {
        Ok(Cow::Borrowed(self.as_str()))
    }
}

impl TextInput for Cow<'_, str> {
    #[inline]
    fn as_text(&self) -> Result<Cow<'_, str>, StageError> {
        Ok(Cow::Borrowed(self.as_ref()))
    }
}

impl TextInput for [u8] {
    fn as_text(&self) -> Result<Cow<'_, str>, StageError> {
        validate_utf8(self).map(Cow::Borrowed)
    }
}

impl TextInput for Vec<u8> {
    #[inline]
    fn as_text(&self) -> Result<Cow<'_, str>, StageError> {
        self.as_slice().as_text()
    }
}

impl<T: TextInput> TextInput for Option<T> {
    fn as_text(&self) -> Result<Cow<'_, str>, StageError> {
        match self {
            Some(inner) => inner.as_text(),
            None => Err(StageError::invalid_input("expected text, got no value")),
        }
    }
}

impl<T: TextInput + ?Sized> TextInput for &T {
    #[inline]
    fn as_text(&self) -> Result<Cow<'_, str>, StageError> {
        (**self).as_text()
    }
}

#[cfg(feature = "simd")]
fn validate_utf8(bytes: &[u8]) -> Result<&str, StageError> {
    simdutf8::compat::from_utf8(bytes)
        .map_err(|e| StageError::invalid_input(format!("expected UTF-8 text: {e}")))
}

#[cfg(not(feature = "simd"))]
fn validate_utf8(bytes: &[u8]) -> Result<&str, StageError> {
    std::str::from_utf8(bytes)
        .map_err(|e| StageError::invalid_input(format!("expected UTF-8 text: {e}")))
}

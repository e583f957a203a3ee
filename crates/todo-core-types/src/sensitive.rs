//! Redacting wrapper for secrets read from configuration

use serde::Deserialize;
use std::fmt;

const REDACTED: &str = "***REDACTED***";

/// A value that never appears in logs or error messages
///
/// The database password and any full connection URL are held in this
/// wrapper from the moment they are deserialized. Reading the value takes
/// an explicit [`Sensitive::expose`].
///
/// ```
/// use todo_core_types::Sensitive;
///
/// let password = Sensitive::new("godemo");
/// assert_eq!(format!("{:?} {}", password, password), "***REDACTED*** ***REDACTED***");
/// assert_eq!(*password.expose(), "godemo");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// The wrapped secret; keep the result out of log fields
    pub fn expose(&self) -> &T {
        &self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Login {
        user: String,
        password: Sensitive<String>,
    }

    #[test]
    fn test_nested_debug_hides_only_the_secret() {
        let login: Login =
            serde_json::from_str(r#"{"user": "godemo", "password": "hunter2"}"#).unwrap();

        let rendered = format!("{:?}", login);

        assert!(rendered.contains("godemo"));
        assert!(rendered.contains(REDACTED));
        assert!(!rendered.contains("hunter2"));
        assert_eq!(login.user, "godemo");
        assert_eq!(login.password.expose(), "hunter2");
    }

    #[test]
    fn test_optional_secret_deserializes() {
        let url: Option<Sensitive<String>> = serde_json::from_str(r#""sqlite::memory:""#).unwrap();
        assert_eq!(url.unwrap().expose(), "sqlite::memory:");

        let absent: Option<Sensitive<String>> = serde_json::from_str("null").unwrap();
        assert!(absent.is_none());
    }
}

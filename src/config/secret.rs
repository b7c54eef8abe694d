//! API key handling using the secrecy crate
//!
//! The platform API key is kept in a [`Secret`] so it is zeroed when the
//! configuration is dropped and never shows up in `Debug` output or logs.
//! Call `expose_secret()` only where the key goes onto the wire.
//!
//! # Example
//!
//! ```rust
//! use margin_report::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let key = secret_string("ApiKey SU-000-000-000:abc".to_string());
//! assert_eq!(key.expose_secret().as_ref(), "ApiKey SU-000-000-000:abc");
//! assert!(!format!("{key:?}").contains("abc"));
//! ```

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::Zeroize;

/// String payload that can live inside a [`Secret`]
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl SecretValue {
    /// True when no key was configured
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for SecretValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretValue)
    }
}

/// Secret string type used for credentials in configuration
pub type SecretString = Secret<SecretValue>;

/// Wrap a plain string as a [`SecretString`]
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_secret_debug_redacted() {
        let secret = secret_string("ApiKey SU-123:very-secret".to_string());
        let debug_output = format!("{secret:?}");

        assert!(!debug_output.contains("very-secret"));
        assert!(debug_output.contains("REDACTED"));
    }

    #[test]
    fn test_secret_deserializes_from_toml() {
        #[derive(Deserialize)]
        struct Section {
            api_key: SecretString,
        }

        let section: Section = toml::from_str(r#"api_key = "ApiKey SU-1:xyz""#).unwrap();
        assert_eq!(section.api_key.expose_secret().as_ref(), "ApiKey SU-1:xyz");
    }

    #[test]
    fn test_is_empty_ignores_whitespace() {
        assert!(secret_string("   ".to_string()).expose_secret().is_empty());
        assert!(!secret_string("k".to_string()).expose_secret().is_empty());
    }
}

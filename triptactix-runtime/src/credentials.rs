use crate::secrets::{SecretKey, resolve_secret};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{env_var} is not set; set it in the environment or the OS keyring")]
    MissingItineraryCredential { env_var: &'static str },
}

/// Provider credentials, read once at startup and handed to the providers explicitly.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub cohere_api_key: String,
    pub huggingface_token: Option<String>,
    pub pexels_api_key: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let present = |v: &Option<String>| if v.is_some() { "[REDACTED]" } else { "None" };
        f.debug_struct("Credentials")
            .field("cohere_api_key", &"[REDACTED]")
            .field("huggingface_token", &present(&self.huggingface_token))
            .field("pexels_api_key", &present(&self.pexels_api_key))
            .finish()
    }
}

impl Credentials {
    pub fn resolve() -> Result<Self, ConfigError> {
        Self::from_parts(
            resolve_secret(SecretKey::CohereApiKey),
            resolve_secret(SecretKey::HuggingFaceToken),
            resolve_secret(SecretKey::PexelsApiKey),
        )
    }

    /// Only the itinerary key is mandatory; image and photo keys are optional per strategy.
    pub fn from_parts(
        cohere_api_key: Option<String>,
        huggingface_token: Option<String>,
        pexels_api_key: Option<String>,
    ) -> Result<Self, ConfigError> {
        let cohere_api_key = cohere_api_key.ok_or(ConfigError::MissingItineraryCredential {
            env_var: SecretKey::CohereApiKey.env_var(),
        })?;

        if huggingface_token.is_none() {
            log::warn!(
                "{} not set; hosted-space and direct-model image strategies will be skipped",
                SecretKey::HuggingFaceToken.env_var()
            );
        }
        if pexels_api_key.is_none() {
            log::warn!(
                "{} not set; activity photos will use the fallback image",
                SecretKey::PexelsApiKey.env_var()
            );
        }

        Ok(Self {
            cohere_api_key,
            huggingface_token,
            pexels_api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_itinerary_key_is_fatal() {
        let err = Credentials::from_parts(None, Some("hf".into()), Some("px".into())).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingItineraryCredential {
                env_var: "COHERE_API_KEY"
            }
        );
        assert!(err.to_string().starts_with("COHERE_API_KEY is not set"));
    }

    #[test]
    fn image_and_photo_keys_are_optional() {
        let creds = Credentials::from_parts(Some("co".into()), None, None).unwrap();
        assert_eq!(creds.cohere_api_key, "co");
        assert_eq!(creds.huggingface_token, None);
    }

    #[test]
    fn debug_never_prints_keys() {
        let creds =
            Credentials::from_parts(Some("co-1".into()), Some("hf-2".into()), None).unwrap();
        let s = format!("{creds:?}");
        assert!(!s.contains("co-1"));
        assert!(!s.contains("hf-2"));
        assert!(s.contains("pexels_api_key: \"None\""));
    }
}

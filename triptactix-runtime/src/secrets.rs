use anyhow::Context;

/// Where we store secrets in the OS keyring.
///
/// This is intentionally constant so upgrades don't orphan secrets.
const SERVICE: &str = "triptactix";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretKey {
    CohereApiKey,
    HuggingFaceToken,
    PexelsApiKey,
}

impl SecretKey {
    fn user(self) -> &'static str {
        match self {
            SecretKey::CohereApiKey => "cohere_api_key",
            SecretKey::HuggingFaceToken => "huggingface_api_token",
            SecretKey::PexelsApiKey => "pexels_api_key",
        }
    }

    pub fn env_var(self) -> &'static str {
        match self {
            SecretKey::CohereApiKey => "COHERE_API_KEY",
            SecretKey::HuggingFaceToken => "HUGGINGFACE_API_TOKEN",
            SecretKey::PexelsApiKey => "PEXELS_API_KEY",
        }
    }
}

pub fn set_secret(key: SecretKey, value: &str) -> anyhow::Result<()> {
    let entry = keyring::Entry::new(SERVICE, key.user()).context("create keyring entry")?;
    entry.set_password(value).context("set secret")
}

pub fn get_secret(key: SecretKey) -> anyhow::Result<Option<String>> {
    let entry = keyring::Entry::new(SERVICE, key.user()).context("create keyring entry")?;

    match entry.get_password() {
        Ok(v) => Ok(Some(v)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(anyhow::Error::new(e)).context("get secret"),
    }
}

pub fn delete_secret(key: SecretKey) -> anyhow::Result<()> {
    let entry = keyring::Entry::new(SERVICE, key.user()).context("create keyring entry")?;
    match entry.delete_credential() {
        Ok(()) => Ok(()),
        Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => Err(anyhow::Error::new(e)).context("delete secret"),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Environment first, then keyring. A broken keyring counts as "not set".
pub fn resolve_secret(key: SecretKey) -> Option<String> {
    resolve_secret_with(key, |name| std::env::var(name).ok(), get_secret)
}

pub(crate) fn resolve_secret_with<E, K>(key: SecretKey, env: E, keyring: K) -> Option<String>
where
    E: Fn(&str) -> Option<String>,
    K: Fn(SecretKey) -> anyhow::Result<Option<String>>,
{
    if let Some(v) = non_blank(env(key.env_var())) {
        return Some(v);
    }

    match keyring(key) {
        Ok(v) => non_blank(v),
        Err(e) => {
            log::warn!("keyring lookup for {} failed: {e:#}", key.env_var());
            None
        }
    }
}

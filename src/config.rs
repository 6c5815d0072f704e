//! Enrolment configuration.

use serde::Deserialize;

/// Configuration for the enrolment workflow.
///
/// Deserialized once at startup from the process environment (after `.env`
/// loading) and passed by reference into each step. Every field is
/// required; a missing variable is a startup-time error.
///
/// Recognized keys: `LOG_LEVEL`, `REGION`, `IMAGE_SOURCE`, `IMAGE_PATH`,
/// `SP_KEY`, `SP_SECRET`, `OAUTH_USERNAME`, `OAUTH_PW`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Tracing filter directive, e.g. `info` or `debug`.
    pub log_level: String,

    /// Service region, e.g. `eu` or `us`.
    pub region: String,

    /// Source label sent with the photo submission.
    pub image_source: String,

    /// Path of the enrolment image on disk.
    pub image_path: String,

    /// Service-provider API key.
    pub sp_key: String,

    /// Service-provider API secret.
    pub sp_secret: String,

    /// OAuth client-credentials username.
    pub oauth_username: String,

    /// OAuth client-credentials password.
    pub oauth_pw: String,
}

impl Config {
    /// Load from the process environment, reading a `.env` file first when
    /// one is present.
    pub fn from_env() -> Result<Self, crate::Error> {
        dotenvy::dotenv().ok();
        Self::from_source(config::Environment::default())
    }

    fn from_source(env: config::Environment) -> Result<Self, crate::Error> {
        config::Config::builder()
            .add_source(env)
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Service base URL for the configured region.
    pub fn base_url(&self) -> String {
        format!("https://{}.secure.iproov.me", self.region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_vars() -> config::Map<String, String> {
        [
            ("LOG_LEVEL", "debug"),
            ("REGION", "eu"),
            ("IMAGE_SOURCE", "oos"),
            ("IMAGE_PATH", "/tmp/face.jpg"),
            ("SP_KEY", "sp-key"),
            ("SP_SECRET", "sp-secret"),
            ("OAUTH_USERNAME", "oauth-user"),
            ("OAUTH_PW", "oauth-pw"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn deserializes_from_full_environment() {
        let env = config::Environment::default().source(Some(full_vars()));
        let config = Config::from_source(env).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.region, "eu");
        assert_eq!(config.image_source, "oos");
        assert_eq!(config.image_path, "/tmp/face.jpg");
        assert_eq!(config.sp_key, "sp-key");
        assert_eq!(config.oauth_pw, "oauth-pw");
    }

    #[test]
    fn missing_key_is_an_error() {
        let mut vars = full_vars();
        vars.remove("SP_SECRET");
        let env = config::Environment::default().source(Some(vars));
        let err = Config::from_source(env).unwrap_err();
        assert!(err.to_string().contains("sp_secret"));
    }

    #[test]
    fn base_url_uses_region() {
        let env = config::Environment::default().source(Some(full_vars()));
        let config = Config::from_source(env).unwrap();
        assert_eq!(config.base_url(), "https://eu.secure.iproov.me");
    }
}

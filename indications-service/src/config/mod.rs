use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Gemini API base URL.
const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for drafting indications.
const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash-preview-05-20";

#[derive(Debug, Clone)]
pub struct IndicationsConfig {
    pub common: core_config::Config,
    pub google: GoogleConfig,
    pub models: ModelConfig,
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub api_key: Secret<String>,
    pub api_base_url: String,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub text_model: String,
}

impl IndicationsConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        // An unset key is tolerated at startup; every drafting request fails
        // with a configuration error until it is provided.
        let api_key = env::var("GOOGLE_API_KEY").unwrap_or_default();
        let api_base_url =
            env::var("GEMINI_API_BASE_URL").unwrap_or_else(|_| GEMINI_API_BASE.to_string());
        let text_model =
            env::var("GEMINI_TEXT_MODEL").unwrap_or_else(|_| DEFAULT_TEXT_MODEL.to_string());

        Ok(IndicationsConfig {
            common,
            google: GoogleConfig {
                api_key: Secret::new(api_key),
                api_base_url,
            },
            models: ModelConfig { text_model },
        })
    }
}

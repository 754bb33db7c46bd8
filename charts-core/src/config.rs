use reqwest::Url;
use thiserror::Error;
use tracing::{info, warn};

const DEFAULT_BASE_URL: &str = "./data";
const DEFAULT_EXTENSION: &str = "json";

const BASE_URL_VAR: &str = "CHARTS_DATA_URL";
const EXTENSION_VAR: &str = "CHARTS_DATA_EXTENSION";

/// Configuration errors
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Where the chart collections are served from
#[derive(Clone, Debug, PartialEq)]
pub struct ChartsConfig {
    /// Prefix for every resource URL, without a trailing slash
    pub base_url: String,
    /// File extension appended to resource names. Empty means none.
    pub extension: String,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl ChartsConfig {
    pub fn new(base_url: impl Into<String>, extension: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        let extension: String = extension.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Load from the environment.
    ///
    /// Native builds read `.env` (if present) and then the process environment.
    /// Wasm builds have no environment at runtime, so the same variables are
    /// captured at compile time instead.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Loaded .env");
            }
            Self::from_vars(
                std::env::var(BASE_URL_VAR).ok(),
                std::env::var(EXTENSION_VAR).ok(),
            )
        }

        #[cfg(target_arch = "wasm32")]
        {
            Self::from_vars(
                option_env!("CHARTS_DATA_URL").map(str::to_string),
                option_env!("CHARTS_DATA_EXTENSION").map(str::to_string),
            )
        }
    }

    fn from_vars(base_url: Option<String>, extension: Option<String>) -> Self {
        let defaults = Self::default();

        let base_url = match base_url {
            Some(url) if !url.trim().is_empty() => url,
            Some(_) => {
                warn!("{BASE_URL_VAR} is empty, using {DEFAULT_BASE_URL}");
                defaults.base_url
            }
            None => defaults.base_url,
        };
        let extension = extension.unwrap_or(defaults.extension);

        let config = Self::new(base_url.trim(), extension.trim());
        info!(
            "Chart data source: {} (extension: {:?})",
            config.base_url, config.extension
        );
        config
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Config("base_url must not be empty".to_string()));
        }
        if self.extension.contains('/') {
            return Err(ConfigError::Config(format!(
                "extension {:?} must not contain '/'",
                self.extension
            )));
        }
        Ok(())
    }

    /// Absolute base URL for the collections, ending in `/`.
    ///
    /// A relative `base_url` such as `./data` is joined onto `page_url`, the
    /// address of the page the app is running on. Without a page URL only an
    /// absolute `base_url` resolves.
    pub fn resolve(&self, page_url: Option<&str>) -> Result<Url, ConfigError> {
        self.validate()?;

        let mut url = match Url::parse(&self.base_url) {
            Ok(url) => url,
            Err(_) => {
                let page_url = page_url.ok_or_else(|| {
                    ConfigError::Config(format!(
                        "base_url {:?} is relative and there is no page to resolve it against",
                        self.base_url
                    ))
                })?;
                let page = Url::parse(page_url).map_err(|e| {
                    ConfigError::Config(format!("invalid page URL {:?}: {}", page_url, e))
                })?;
                page.join(&self.base_url).map_err(|e| {
                    ConfigError::Config(format!("invalid base_url {:?}: {}", self.base_url, e))
                })?
            }
        };

        if url.cannot_be_a_base() {
            return Err(ConfigError::Config(format!(
                "base_url {:?} cannot hold resource paths",
                self.base_url
            )));
        }

        url.set_query(None);
        url.set_fragment(None);
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}

/// Address of the page the app is running on, if any
pub fn page_url() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys_x::window()?;
        window.location().href().ok()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

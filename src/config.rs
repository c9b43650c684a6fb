use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub gemini: GeminiSettings,
    #[serde(default)]
    pub airtable: AirtableSettings,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub cors: CorsSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

/// Gemini model gateway settings
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    pub api_key: Option<String>,
    #[serde(default = "default_gemini_model")]
    pub model: String,
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
    #[serde(default = "default_gemini_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_gemini_model(),
            base_url: default_gemini_base_url(),
            timeout_secs: default_gemini_timeout(),
        }
    }
}

fn default_gemini_model() -> String { "gemini-1.5-flash".to_string() }
fn default_gemini_base_url() -> String { "https://generativelanguage.googleapis.com/v1beta".to_string() }
fn default_gemini_timeout() -> u64 { 60 }

/// Airtable vocabulary store settings
///
/// Both `api_token` and `base_id` are optional; without them the vocabulary
/// lookup is skipped and summaries are generated without a word.
#[derive(Debug, Clone, Deserialize)]
pub struct AirtableSettings {
    pub api_token: Option<String>,
    pub base_id: Option<String>,
    #[serde(default = "default_airtable_base_url")]
    pub base_url: String,
    #[serde(default = "default_airtable_table")]
    pub table: String,
    #[serde(default = "default_age_group_field")]
    pub age_group_field: String,
    #[serde(default = "default_word_field")]
    pub word_field: String,
    #[serde(default = "default_airtable_timeout")]
    pub timeout_secs: u64,
}

impl Default for AirtableSettings {
    fn default() -> Self {
        Self {
            api_token: None,
            base_id: None,
            base_url: default_airtable_base_url(),
            table: default_airtable_table(),
            age_group_field: default_age_group_field(),
            word_field: default_word_field(),
            timeout_secs: default_airtable_timeout(),
        }
    }
}

fn default_airtable_base_url() -> String { "https://api.airtable.com/v0".to_string() }
fn default_airtable_table() -> String { "Vocabulary_Words".to_string() }
fn default_age_group_field() -> String { "age_group".to_string() }
fn default_word_field() -> String { "word".to_string() }
fn default_airtable_timeout() -> u64 { 10 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthSettings {
    pub password: Option<String>,
}

impl AuthSettings {
    /// Configured login password; an empty value counts as not configured
    pub fn secret(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsSettings {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "https://heatheramz.github.io".to_string(),
        // Browsers send `null` for pages opened from file://
        "null".to_string(),
    ]
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml, then config/local.toml)
    /// 3. Environment variables (prefixed with HISTORYBYTES__)
    /// 4. GOOGLE_API_KEY, AIRTABLE_API_TOKEN, AIRTABLE_BASE_ID, LOGIN_PASSWORD
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., HISTORYBYTES__SERVER__PORT -> server.port
            .add_source(environment(None))
            .build()?;

        substitute_env_vars(settings)?.try_deserialize()
    }
}

/// `HISTORYBYTES__*` variables, read from `source` when given instead of the process
fn environment(source: Option<config::Map<String, String>>) -> Environment {
    Environment::with_prefix("HISTORYBYTES")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("cors.allowed_origins")
        .try_parsing(true)
        .source(source)
}

/// Apply the conventional unprefixed variables on top of the layered config
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    substitute_from(settings, |name| std::env::var(name).ok())
}

const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("GOOGLE_API_KEY", "gemini.api_key"),
    ("AIRTABLE_API_TOKEN", "airtable.api_token"),
    ("AIRTABLE_BASE_ID", "airtable.base_id"),
    ("LOGIN_PASSWORD", "auth.password"),
];

fn substitute_from<F>(settings: Config, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = Config::builder().add_source(settings);

    for (var, key) in ENV_OVERRIDES {
        // `LOGIN_PASSWORD=` from a copied .env.example must not become a real secret
        if let Some(value) = lookup(*var).filter(|v| !v.is_empty()) {
            builder = builder.set_override(*key, value)?;
        }
    }

    builder.build()
}

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;
use tracing::debug;

pub mod models;
pub use models::*;

/// Where a configuration is assembled from.
///
/// `load_config` fills this from the process environment; tests build one by hand
/// so they can point at fixture directories and private env prefixes.
#[derive(Debug, Clone)]
pub struct ConfigSources {
    pub config_dir: PathBuf,
    pub run_env: String,
    pub env_prefix: String,
}

impl ConfigSources {
    pub fn from_env() -> Self {
        Self {
            config_dir: env::var("CHECKOUT_CONFIG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("config")),
            run_env: env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string()),
            env_prefix: env::var("CHECKOUT_ENV_PREFIX")
                .unwrap_or_else(|_| "CHECKOUT".to_string()),
        }
    }
}

/// Loads the application configuration.
///
/// Layers, lowest priority first:
/// 1. `config/default.{toml,yaml,json}`
/// 2. `config/{RUN_ENV}.{toml,yaml,json}`
/// 3. `CHECKOUT_*` environment variables, `__` separating nested keys
///    (e.g. `CHECKOUT_BACKEND__BASE_URL`)
///
/// Every file is optional; missing values fall back to the model defaults.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();
    load_config_from(&ConfigSources::from_env())
}

pub fn load_config_from(sources: &ConfigSources) -> Result<AppConfig, ConfigError> {
    let default_path = sources.config_dir.join("default");
    let env_path = sources.config_dir.join(&sources.run_env);

    debug!(
        default_path = %default_path.display(),
        env_path = %env_path.display(),
        prefix = %sources.env_prefix,
        "loading configuration"
    );

    let builder = Config::builder()
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false))
        .add_source(
            Environment::with_prefix(&sources.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    let config: AppConfig = builder.build()?.try_deserialize()?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.backend.base_url.trim().is_empty() {
        return Err(ConfigError::Message("backend.base_url must not be empty".to_string()));
    }
    if config.payment_sheet.merchant_display_name.trim().is_empty() {
        return Err(ConfigError::Message(
            "payment_sheet.merchant_display_name must not be empty".to_string(),
        ));
    }
    Ok(())
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The path is taken from `DOTENV_OVERRIDE`, else from the first command line
/// argument if it starts with `.env`, else `.env`. Loading happens at most once
/// per process; a missing file is not an error.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}

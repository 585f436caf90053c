//! Configuration loading for the navigation shell.
//!
//! Sources, later ones overriding earlier ones:
//! 1. Built-in defaults for the detected environment
//! 2. `config.<environment>.toml` in the working directory, if present
//! 3. `GIG__`-prefixed environment variables, e.g. `GIG__API__BASE_URL`

use config::{Config, ConfigError, Environment as EnvSource, File, FileFormat};

use gig_shared::config::{AppConfig, Environment};

/// Prefix of environment variable overrides
pub const ENV_PREFIX: &str = "GIG";

/// Load the configuration for the environment named by `ENVIRONMENT`
pub fn load() -> Result<AppConfig, ConfigError> {
    load_for(Environment::from_env())
}

/// Load the configuration for an explicit environment
pub fn load_for(environment: Environment) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig::for_environment(environment);

    Config::builder()
        .add_source(Config::try_from(&defaults)?)
        .add_source(File::new(&environment.config_file(), FileFormat::Toml).required(false))
        .add_source(
            EnvSource::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_overrides() {
        let config = load_for(Environment::Staging).unwrap();

        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.routes.login_path, "/login");
        assert_eq!(config.storage.token_key, "token");
        assert_eq!(config.storage.user_id_key, "userId");
    }

    #[test]
    fn test_production_defaults() {
        let config = load_for(Environment::Production).unwrap();
        assert!(config.environment.is_production());
    }
}

use config::{Config, ConfigError, Environment, File};
use domain::{SimplifyOptions, TimeConverter, TimeStrategy};
use serde::{Deserialize, Serialize};

/// Options section of the configuration, in snake_case form.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OptionsConfig {
    #[serde(default)]
    pub keep_rich_values: bool,
    #[serde(default)]
    pub entity_prefix: Option<String>,
    #[serde(default = "default_time_converter")]
    pub time_converter: String,
}

fn default_time_converter() -> String {
    TimeStrategy::Iso.as_str().to_string()
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            keep_rich_values: false,
            entity_prefix: None,
            time_converter: default_time_converter(),
        }
    }
}

impl OptionsConfig {
    /// Simplification options for this configuration.
    ///
    /// The converter key is not validated here; an unknown key surfaces when
    /// the first time value is formatted.
    pub fn to_options(&self) -> SimplifyOptions {
        SimplifyOptions {
            keep_rich_values: self.keep_rich_values,
            entity_prefix: self.entity_prefix.clone().filter(|p| !p.is_empty()),
            time_converter: TimeConverter::named(self.time_converter.clone()),
            ..SimplifyOptions::default()
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct SimplifierConfig {
    #[serde(default)]
    pub options: OptionsConfig,
}

impl SimplifierConfig {
    /// Load from `config_dir`, picking the override file from `RUN_MODE`.
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_with_run_mode(config_dir, &run_mode)
    }

    /// Defaults, then `<dir>/default.*`, then `<dir>/<run_mode>.*`, then
    /// `SNAK__*` environment variables. Later sources win.
    pub fn load_with_run_mode(config_dir: &str, run_mode: &str) -> Result<Self, ConfigError> {
        let s = Config::builder()
            // Start with default settings
            .set_default("options.keep_rich_values", false)?
            .set_default("options.time_converter", TimeStrategy::Iso.as_str())?
            // Shared defaults, e.g. config/default.toml
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
            // Per run mode overrides, e.g. config/development.toml
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
            // Environment variables (e.g. SNAK__OPTIONS__ENTITY_PREFIX=wd)
            .add_source(Environment::with_prefix("SNAK").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Base name of the optional settings file (`wordpick.toml`).
const CONFIG_FILE_NAME: &str = "wordpick";

/// Prefix of the environment overrides (`WORDPICK_PORT=8080`).
const ENV_PREFIX: &str = "WORDPICK";

/// Server configuration.
///
/// Layered, last wins:
/// 1. built-in defaults
/// 2. `wordpick.toml` in the working directory, if present
/// 3. `WORDPICK_*` environment variables
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ServerSettings {
	/// Directory holding `all.txt` and the `<n>.txt` word lists.
	pub dict_dir: PathBuf,
	pub host: String,
	pub port: u16,
	/// Load per-length word lists on worker threads.
	pub parallel_loading: bool,
	/// Accept cross-origin requests from any origin.
	pub permissive_cors: bool,
}

impl ServerSettings {
	/// Reads settings from defaults, `wordpick.toml` and the environment.
	pub fn load() -> Result<Self, ConfigError> {
		let mut settings = Self::defaults()?;
		settings.merge(File::with_name(CONFIG_FILE_NAME).required(false))?;
		settings.merge(Environment::with_prefix(ENV_PREFIX))?;
		settings.try_into()
	}

	/// Reads settings from defaults and the given file only.
	pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
		let mut settings = Self::defaults()?;
		settings.merge(File::from(path))?;
		settings.try_into()
	}

	fn defaults() -> Result<Config, ConfigError> {
		let mut settings = Config::default();
		settings.set_default("dict_dir", "./dict")?;
		settings.set_default("host", "127.0.0.1")?;
		settings.set_default("port", 5000i64)?;
		settings.set_default("parallel_loading", false)?;
		settings.set_default("permissive_cors", false)?;
		Ok(settings)
	}
}

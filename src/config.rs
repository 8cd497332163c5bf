use crate::history::DEFAULT_HISTORY_LIMIT;
use crate::storage::{BackendLocal, StorageManager};
use crate::templates::Region;
use serde::{Deserialize, Serialize};

const CONFIG_KEY: &str = "config.yaml";

const DEFAULT_PLATFORM_DOMAIN: &str = "x.com";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// How many history entries to keep before the oldest are dropped.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Region whose template set `template list` shows by default.
    #[serde(default)]
    pub default_region: Region,

    /// Domain search URLs point at. Kept configurable because the
    /// platform has changed domains before.
    #[serde(default = "default_platform_domain")]
    pub platform_domain: String,

    #[serde(skip_serializing, skip_deserializing)]
    base_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            default_region: Region::default(),
            platform_domain: DEFAULT_PLATFORM_DOMAIN.to_string(),
            base_path: String::new(),
        }
    }
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_platform_domain() -> String {
    DEFAULT_PLATFORM_DOMAIN.to_string()
}

impl Config {
    fn validate(&mut self) {
        if self.history_limit == 0 {
            self.history_limit = DEFAULT_HISTORY_LIMIT;
        }

        // The domain must form a parseable https URL or every search
        // link we print is garbage; fall back rather than fail.
        let domain = self.platform_domain.trim();
        if domain.is_empty() || url::Url::parse(&format!("https://{domain}/search")).is_err() {
            log::warn!(
                "invalid platform_domain {:?}, falling back to {DEFAULT_PLATFORM_DOMAIN}",
                self.platform_domain
            );
            self.platform_domain = DEFAULT_PLATFORM_DOMAIN.to_string();
        } else {
            self.platform_domain = domain.to_string();
        }
    }

    /// Resolve the data directory: `$XQ_DATA_DIR` wins, otherwise
    /// `~/.xq`.
    pub fn default_base_path() -> String {
        if let Ok(dir) = std::env::var("XQ_DATA_DIR") {
            if !dir.trim().is_empty() {
                return dir;
            }
        }

        homedir::my_home()
            .ok()
            .flatten()
            .map(|home| home.join(".xq").to_string_lossy().into_owned())
            .unwrap_or_else(|| ".xq".to_string())
    }

    pub fn load() -> anyhow::Result<Self> {
        Self::load_with(&Self::default_base_path())
    }

    pub fn load_with(base_path: &str) -> anyhow::Result<Self> {
        let store = BackendLocal::new(base_path)?;

        // create new if does not exist
        if !store.exists(CONFIG_KEY) {
            log::info!("creating new config at {base_path}/{CONFIG_KEY}");
            store.set(CONFIG_KEY, serde_yml::to_string(&Self::default())?.as_bytes())?;
        }

        let config_str = String::from_utf8(store.get(CONFIG_KEY)?)?;
        let mut config: Self = serde_yml::from_str(&config_str)?;

        config.base_path = base_path.to_string();
        config.validate();

        // resave in case config version needs an upgrade
        if config_str != serde_yml::to_string(&config)? {
            config.save()?;
        }

        Ok(config)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let store = BackendLocal::new(&self.base_path)?;
        store.set(CONFIG_KEY, serde_yml::to_string(&self)?.as_bytes())?;
        Ok(())
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }
}

use crate::{CONFIG_DIRECTORY, expand_tilde};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "odeon.log";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API bases, the first is used at startup.
    pub servers: Vec<String>,
    pub sites: Vec<String>,
    /// Starting site, defaults to the first of `sites`.
    pub site: Option<String>,
    pub limit: u32,
    pub page_sizes: Vec<u32>,
    pub min_score: f64,
    pub download_dir: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            servers: vec![
                "https://odia-dj.priyabrataghadai383.workers.dev/api".into(),
                "https://odia-dj-music.onrender.com/api".into(),
            ],
            sites: vec!["odiadj".into()],
            site: None,
            limit: 20,
            page_sizes: vec![10, 20, 50, 100],
            min_score: 0.5,
            download_dir: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Reads `path`, or the default location when `None`. A missing default
    /// file yields the defaults; a missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let (path, explicit) = match path {
            Some(p) => (expand_tilde(p)?, true),
            None => match default_config_path() {
                Some(p) => (p, false),
                None => return Ok(Config::default()),
            },
        };

        if !explicit && !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::parse(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Config> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.servers.iter().all(|s| s.trim().is_empty()) {
            bail!("At least one server is required");
        }
        if self.sites.is_empty() && self.site.is_none() {
            bail!("At least one site is required");
        }
        if self.limit == 0 {
            bail!("limit must be greater than 0");
        }
        if !(0.0..=1.0).contains(&self.min_score) {
            bail!("min_score must be between 0 and 1, got {}", self.min_score);
        }
        Ok(())
    }

    /// Sites in cycling order, with `site` included when it is not listed.
    pub fn site_list(&self) -> Vec<String> {
        let mut sites = self.sites.clone();
        if let Some(site) = &self.site {
            if !sites.contains(site) {
                sites.insert(0, site.clone());
            }
        }
        sites
    }

    /// The configured directory if set, else the user's download directory.
    pub fn download_dir(&self) -> Result<PathBuf> {
        match &self.download_dir {
            Some(dir) => expand_tilde(dir),
            None => dirs::download_dir()
                .or_else(dirs::audio_dir)
                .context("Could not determine a download directory"),
        }
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| dirs::data_dir().map(|d| d.join(CONFIG_DIRECTORY).join(LOG_FILE)))
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIRECTORY).join(CONFIG_FILE))
}

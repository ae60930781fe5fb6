use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "odeon")]
#[command(version)]
#[command(about = "Terminal player for a remote music index")]
pub struct Cli {
    /// Path to the config TOML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// API base URL, overrides the configured servers' order
    #[arg(long)]
    pub server: Option<String>,

    /// Site to browse at startup
    #[arg(long)]
    pub site: Option<String>,

    /// Results per page
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Write logs here instead of the data directory
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Applies the flags on top of `config`.
    pub fn apply(&self, mut config: Config) -> anyhow::Result<Config> {
        if let Some(server) = &self.server {
            config.servers.retain(|s| s != server);
            config.servers.insert(0, server.clone());
        }
        if let Some(site) = &self.site {
            config.site = Some(site.clone());
        }
        if let Some(limit) = self.limit {
            config.limit = limit;
        }
        if let Some(log_file) = &self.log_file {
            config.log_file = Some(log_file.clone());
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from([
            "odeon",
            "--server",
            "http://localhost:8787/api",
            "--site",
            "mymp3",
            "-l",
            "50",
        ])?;
        let config = cli.apply(Config::default())?;

        assert_eq!(config.servers[0], "http://localhost:8787/api");
        assert_eq!(config.servers.len(), 3);
        assert_eq!(config.site.as_deref(), Some("mymp3"));
        assert_eq!(config.limit, 50);
        Ok(())
    }

    #[test]
    fn test_known_server_moves_to_front() -> anyhow::Result<()> {
        let second = Config::default().servers[1].clone();
        let cli = Cli::try_parse_from(["odeon", "--server", second.as_str()])?;
        let config = cli.apply(Config::default())?;

        assert_eq!(config.servers[0], second);
        assert_eq!(config.servers.len(), 2);
        Ok(())
    }

    #[test]
    fn test_zero_limit_flag_is_rejected() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from(["odeon", "--limit", "0"])?;
        assert!(cli.apply(Config::default()).is_err());
        Ok(())
    }
}

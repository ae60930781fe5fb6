use crate::config::Config;

const SCORE_STEP: f64 = 0.1;

/// The selectable request parameters shown on the settings line.
pub struct SettingsState {
    servers: Vec<String>,
    server: usize,
    sites: Vec<String>,
    site: usize,
    page_sizes: Vec<u32>,
    pub limit: u32,
    pub min_score: f64,
}

impl SettingsState {
    pub fn from_config(config: &Config) -> Self {
        let sites = config.site_list();
        let site = config
            .site
            .as_ref()
            .and_then(|s| sites.iter().position(|x| x == s))
            .unwrap_or(0);

        let mut page_sizes = config.page_sizes.clone();
        if !page_sizes.contains(&config.limit) {
            page_sizes.push(config.limit);
        }
        page_sizes.sort_unstable();
        page_sizes.dedup();

        SettingsState {
            servers: config.servers.clone(),
            server: 0,
            sites,
            site,
            page_sizes,
            limit: config.limit,
            min_score: config.min_score,
        }
    }

    pub fn server(&self) -> &str {
        self.servers.get(self.server).map(String::as_str).unwrap_or_default()
    }

    pub fn site(&self) -> &str {
        self.sites.get(self.site).map(String::as_str).unwrap_or_default()
    }

    pub fn cycle_server(&mut self) {
        self.server = next_index(self.server, self.servers.len());
    }

    pub fn cycle_site(&mut self) {
        self.site = next_index(self.site, self.sites.len());
    }

    pub fn cycle_limit(&mut self) {
        let current = self.page_sizes.iter().position(|&n| n == self.limit).unwrap_or(0);
        if let Some(&next) = self.page_sizes.get(next_index(current, self.page_sizes.len())) {
            self.limit = next;
        }
    }

    /// Steps the minimum score by tenths, kept within `[0, 1]`.
    pub fn adjust_min_score(&mut self, steps: i32) {
        let score = self.min_score + SCORE_STEP * steps as f64;
        self.min_score = ((score * 10.0).round() / 10.0).clamp(0.0, 1.0);
    }
}

fn next_index(current: usize, len: usize) -> usize {
    match len {
        0 => 0,
        _ => (current + 1) % len,
    }
}

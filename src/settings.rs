use espn_api::Endpoints;
use espn_api::endpoints::{CORE_BASE, SITE_BASE};

const DEFAULT_LOG_FILTER: &str = "warn";

/// Process settings, read from the environment with compiled-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub site_base: String,
    pub core_base: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            site_base: SITE_BASE.to_owned(),
            core_base: CORE_BASE.to_owned(),
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl Settings {
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            site_base: var("ESPN_SITE_BASE").unwrap_or(defaults.site_base),
            core_base: var("ESPN_CORE_BASE").unwrap_or(defaults.core_base),
            log_filter: var("ESPN_MCP_LOG")
                .or_else(|| var("RUST_LOG"))
                .unwrap_or(defaults.log_filter),
        }
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.site_base, &self.core_base)
    }
}

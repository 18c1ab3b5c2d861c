use crate::gate::{Biome, Gate};

/// Variable naming the deployment environment.
pub const ENV_VAR: &str = "ENV";

/// Environment value that switches the galvanic gateway to local HTTP mode.
pub const LOCAL_SENTINEL: &str = "NONE";

/// Environment captured once at cold start and handed to the handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    env: Option<String>,
}

impl Config {
    pub fn new(env: Option<String>) -> Self {
        Self { env }
    }

    /// Reads `ENV` from the process environment. A missing or non-unicode
    /// value is kept as unset.
    pub fn from_env() -> Self {
        Self::new(std::env::var(ENV_VAR).ok())
    }

    pub fn env(&self) -> Option<&str> {
        self.env.as_deref()
    }

    pub fn is_local(&self) -> bool {
        self.env() == Some(LOCAL_SENTINEL)
    }

    pub fn biome(&self) -> Biome {
        Biome::resolve(self.env())
    }

    /// Downstream function name for `gate` in this environment's biome.
    pub fn target(&self, gate: Gate) -> String {
        gate.function_name(self.biome())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_sentinel_is_local() {
        assert!(Config::new(Some("NONE".to_string())).is_local());
        assert!(!Config::new(Some("none".to_string())).is_local());
        assert!(!Config::new(Some("dev".to_string())).is_local());
        assert!(!Config::new(None).is_local());
    }

    #[test]
    fn target_follows_the_environment() {
        let prod = Config::new(Some("prod".to_string()));
        assert_eq!(prod.target(Gate::Jumpgate), "biome-krush-jumpgate");

        let test = Config::new(Some("test".to_string()));
        assert_eq!(test.target(Gate::Jumpgate), "biome-staging-jumpgate");

        let unset = Config::default();
        assert_eq!(unset.target(Gate::Warpgate), "biome-krush-warpgate");
    }
}

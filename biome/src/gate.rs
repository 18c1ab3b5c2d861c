use std::fmt;

/// Deployment group owning the downstream functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Biome {
    Staging,
    Krush,
}

impl Biome {
    /// Maps an environment identifier to its biome.
    ///
    /// `dev` and `test` share the staging biome. Every other value, including
    /// an unset environment, lands on krush.
    pub fn resolve(env: Option<&str>) -> Self {
        match env {
            Some("dev") | Some("test") => Biome::Staging,
            // TODO: give production its own supercollider biome
            _ => Biome::Krush,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Biome::Staging => "biome-staging",
            Biome::Krush => "biome-krush",
        }
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role of the downstream function a gateway talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Jumpgate,
    Warpgate,
}

impl Gate {
    pub fn suffix(self) -> &'static str {
        match self {
            Gate::Jumpgate => "jumpgate",
            Gate::Warpgate => "warpgate",
        }
    }

    /// Name of this gate's function inside `biome`.
    pub fn function_name(self, biome: Biome) -> String {
        format!("{}-{}", biome, self.suffix())
    }
}

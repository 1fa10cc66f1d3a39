//! Runtime configuration.
//!
//! One flat struct configures the whole service. Nothing here is read
//! from disk - the binary assembles a config from CLI flags and the
//! environment, embedders construct one directly.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::deck::{DeckPolicy, DeckRng};

/// Configuration for the deck service.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. `0.0.0.0:5000`.
    pub bind: String,

    /// Directory holding card images and meaning documents.
    pub assets_dir: PathBuf,

    /// Directory holding the dashboard (index.html and friends).
    pub frontend_dir: PathBuf,

    /// Browser origins allowed to call `/api/*`.
    pub allowed_origins: Vec<String>,

    /// Fixed shuffle seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Deck randomization policy.
    pub policy: DeckPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: format!("0.0.0.0:{}", Self::DEFAULT_PORT),
            assets_dir: PathBuf::from("assets"),
            frontend_dir: PathBuf::from("frontend"),
            allowed_origins: vec![format!("http://localhost:{}", Self::DEFAULT_PORT)],
            seed: None,
            policy: DeckPolicy::default(),
        }
    }
}

impl ServerConfig {
    /// Port used when neither `--bind` nor `PORT` says otherwise.
    pub const DEFAULT_PORT: u16 = 5000;

    /// Set the bind address.
    #[must_use]
    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.bind = bind.into();
        self
    }

    /// Set the assets directory.
    #[must_use]
    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    /// Set the dashboard directory.
    #[must_use]
    pub fn with_frontend_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.frontend_dir = dir.into();
        self
    }

    /// Allow an additional browser origin.
    #[must_use]
    pub fn with_allowed_origin(mut self, origin: impl Into<String>) -> Self {
        self.allowed_origins.push(origin.into());
        self
    }

    /// Pin the shuffle seed (reproducible readings).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the deck randomization policy.
    #[must_use]
    pub fn with_policy(mut self, policy: DeckPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// RNG per the configured seed.
    #[must_use]
    pub fn rng(&self) -> DeckRng {
        match self.seed {
            Some(seed) => DeckRng::new(seed),
            None => DeckRng::from_entropy(),
        }
    }
}

//! Routing shared by the gateway functions.
//!
//! Each gateway forwards its inbound event to a downstream function owned by
//! a *biome*, the deployment group selected from the `ENV` variable. The
//! downstream function name is the biome name followed by the gate suffix,
//! e.g. `biome-staging-jumpgate`.

mod config;
mod error;
mod event;
mod gate;
mod invoke;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use config::{Config, ENV_VAR, LOCAL_SENTINEL};
pub use error::{Error, Result};
pub use event::stamp_env;
pub use gate::{Biome, Gate};
pub use invoke::{forward, lambda_client, Invocation, Invoke};

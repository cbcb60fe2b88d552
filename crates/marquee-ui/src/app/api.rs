//! Gateway context for sharing a singleton client instance.
//!
//! # Design
//! - Create exactly one gateway per app boot from build-time configuration.
//! - A missing API key is logged; requests then fail into empty sentinels.

use marquee_gateway::{GatewayConfig, GlooTransport, MovieGateway};
use std::rc::Rc;

/// Shared gateway context for page views.
#[derive(Clone)]
pub(crate) struct GatewayCtx {
    /// Singleton gateway instance.
    pub gateway: Rc<MovieGateway<GlooTransport>>,
}

impl GatewayCtx {
    /// Build the gateway from `MARQUEE_TMDB_*` values captured at compile time.
    pub(crate) fn from_build_env() -> Self {
        let config = GatewayConfig::from_build_env().unwrap_or_else(|err| {
            tracing::error!(error = %err, "movie API is not configured");
            GatewayConfig::default()
        });
        Self {
            gateway: Rc::new(MovieGateway::new(config, GlooTransport)),
        }
    }
}

impl PartialEq for GatewayCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.gateway, &other.gateway)
    }
}

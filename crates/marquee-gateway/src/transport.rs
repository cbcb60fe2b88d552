//! HTTP transport port.

use async_trait::async_trait;

use crate::error::TransportError;

/// Minimal GET transport used by the gateway.
///
/// Implementations return the response body for 2xx responses and a
/// [`TransportError`] otherwise. Futures are not `Send`: the browser runs a
/// single thread.
#[async_trait(?Send)]
pub trait HttpTransport {
    /// Issue a GET request and return the body text.
    async fn get(&self, url: &str) -> Result<String, TransportError>;
}

#[cfg(target_arch = "wasm32")]
pub use browser::GlooTransport;

#[cfg(target_arch = "wasm32")]
mod browser {
    use async_trait::async_trait;
    use gloo_net::http::Request;

    use super::HttpTransport;
    use crate::error::TransportError;

    /// Browser `fetch` transport backed by `gloo-net`.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct GlooTransport;

    #[async_trait(?Send)]
    impl HttpTransport for GlooTransport {
        async fn get(&self, url: &str) -> Result<String, TransportError> {
            let response = Request::get(url)
                .send()
                .await
                .map_err(|err| TransportError::Network {
                    detail: err.to_string(),
                })?;
            if !response.ok() {
                return Err(TransportError::Status {
                    status: response.status(),
                });
            }
            response.text().await.map_err(|err| TransportError::Network {
                detail: err.to_string(),
            })
        }
    }
}

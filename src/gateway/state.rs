use crate::gateway::client::ServerClient;

/// Gateway state shared across handlers.
///
/// `ServerClient` wraps a `reqwest::Client`, which is reference counted, so clones
/// share one connection pool.
#[derive(Clone)]
pub struct GatewayState {
    pub server: ServerClient,
}

impl GatewayState {
    pub fn new(server: ServerClient) -> Self {
        Self { server }
    }
}

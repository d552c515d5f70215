use std::sync::Arc;

use crate::{backend::BackendClient, config::ServerConfig, proxy::PredictionProxy};

pub struct State {
    pub config: ServerConfig,
    pub proxy: PredictionProxy,
    pub backend: Arc<BackendClient>,
}

impl State {
    pub fn new(
        config: ServerConfig,
        backend: Arc<BackendClient>,
    ) -> Result<Arc<Self>, reqwest::Error> {
        let proxy = PredictionProxy::new(&config.predict_url, config.upstream_timeout)?;

        Ok(Arc::new(Self {
            config,
            proxy,
            backend,
        }))
    }
}

use digest_core::{ai::handler::GeminiClient, helpers::config::AppConfig};

#[derive(Clone)]
pub struct ServerState {
    config: AppConfig,
    model: GeminiClient,
}

impl From<(AppConfig, GeminiClient)> for ServerState {
    fn from(states: (AppConfig, GeminiClient)) -> Self {
        let (config, model) = states;
        Self { config, model }
    }
}

impl ServerState {
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn model(&self) -> &GeminiClient {
        &self.model
    }
}

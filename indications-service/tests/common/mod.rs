use indications_service::config::{GoogleConfig, IndicationsConfig, ModelConfig};
use indications_service::startup::Application;
use secrecy::Secret;
use service_core::config::Config as CommonConfig;

pub const TEST_MODEL: &str = "gemini-2.5-flash-preview-05-20";

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawn the service on a random port, pointed at `api_base_url` as the
    /// upstream. An empty `api_key` spawns an unconfigured instance.
    pub async fn spawn(api_key: &str, api_base_url: &str) -> Self {
        let config = IndicationsConfig {
            common: CommonConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port
                log_level: "info".to_string(),
            },
            google: GoogleConfig {
                api_key: Secret::new(api_key.to_string()),
                api_base_url: api_base_url.to_string(),
            },
            models: ModelConfig {
                text_model: TEST_MODEL.to_string(),
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint.
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address }
    }
}

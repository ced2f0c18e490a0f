use greeter_service::config::{ServerConfig, ServiceConfig};
use greeter_service::startup::Application;

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    pub async fn spawn() -> Self {
        // Use random port for testing (port 0)
        let config = ServiceConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
        };

        let app = Application::build(&config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the metrics endpoint,
        // which never touches the request counter.
        let client = reqwest::Client::new();
        let metrics_url = format!("{}/metrics", address);
        for _ in 0..50 {
            if client.get(&metrics_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }

    /// Fetch the current Prometheus text-format snapshot.
    pub async fn metrics(&self, client: &reqwest::Client) -> String {
        client
            .get(format!("{}/metrics", self.address))
            .send()
            .await
            .expect("Failed to fetch metrics")
            .text()
            .await
            .expect("Failed to read metrics body")
    }
}

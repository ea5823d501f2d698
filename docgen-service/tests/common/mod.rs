use docgen_service::config::{DocgenConfig, ProviderBackend};
use docgen_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub spool_path: String,
}

impl TestApp {
    /// Spawn the application with the mock provider on a random port.
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    /// Spawn the application after applying `customize` to the test config.
    pub async fn spawn_with(customize: impl FnOnce(&mut DocgenConfig)) -> Self {
        std::env::set_var("OPENAI_API_KEY", "test-api-key");

        let spool_path = format!("target/test-spool-{}", Uuid::new_v4());

        let mut config = DocgenConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.spool.path = spool_path.clone();
        config.provider.backend = ProviderBackend::Mock;
        config.provider.mock_enabled = true;
        customize(&mut config);

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            spool_path,
        }
    }

    /// Number of files currently sitting in the spool directory.
    pub async fn spool_entries(&self) -> usize {
        let mut dir = match tokio::fs::read_dir(&self.spool_path).await {
            Ok(dir) => dir,
            Err(_) => return 0,
        };
        let mut entries = 0;
        while let Ok(Some(_)) = dir.next_entry().await {
            entries += 1;
        }
        entries
    }

    /// Cleanup test resources (spool directory).
    pub async fn cleanup(&self) {
        let _ = tokio::fs::remove_dir_all(&self.spool_path).await;
    }
}

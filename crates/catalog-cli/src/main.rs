use std::path::Path;

use catalog_server::{CatalogServer, ServerConfig};

/// Optional config file, looked up in the working directory.
const CONFIG_FILE: &str = "catalog.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let config = load_config(Path::new(CONFIG_FILE))?;
    CatalogServer::new(config).serve().await?;
    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<ServerConfig> {
    if !path.exists() {
        return Ok(ServerConfig::default());
    }
    tracing::info!("loading configuration from {}", path.display());
    Ok(ServerConfig::load(path)?)
}

use anyhow::Result;
use pickem_ui::{config::Config, logger, showcase};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    if let Some(path) = logger::init(&config.logging)? {
        eprintln!("Logging to {}", path.display());
    }

    showcase::run_app(&config).await?;

    Ok(())
}

use anyhow::Result;
use monhan_api::{routes, AppState, Config, Server};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;

    monhan_api::init_tracing(&config)?;

    let state = AppState::from_config(config.clone())?;
    let app = routes::router(state);

    Server::new(config).serve(app).await?;

    Ok(())
}

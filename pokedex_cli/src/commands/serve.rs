use anyhow::Result;
use clap::Args;
use pokedex_lib::PokedexService;

use crate::server;

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    pub bind: String,
}

pub async fn run(args: &ServeArgs, service: PokedexService) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, server::router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}

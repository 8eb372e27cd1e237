use tracing::info;

use claimwise_service::{bind_addr, underwriting_router};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt::init();
    let app = underwriting_router();
    let addr = bind_addr(8080)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening" = %addr);
    axum::serve(listener, app).await?;
    Ok(())
}

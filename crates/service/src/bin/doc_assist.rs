use std::sync::Arc;

use tracing::info;

use claimwise_service::{bind_addr, doc_assist_router, AppState};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt::init();
    let state = Arc::new(AppState::new());
    let app = doc_assist_router(state);
    let addr = bind_addr(8081)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening" = %addr);
    axum::serve(listener, app).await?;
    Ok(())
}

use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::{net::TcpListener, sync::Mutex};

use crate::{Res, api, types::PkceToken, warning};

/// Binds the callback listener on `addr`.
///
/// Done before the browser is opened so an unusable address or a port that is
/// already taken fails the auth flow right away.
pub async fn bind_api_server(addr: &str) -> Res<TcpListener> {
    let addr = SocketAddr::from_str(addr)
        .map_err(|e| format!("Failed to parse server address '{}': {}", addr, e))?;

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind callback server to {}: {}", addr, e))?;

    Ok(listener)
}

/// Serves the OAuth callback on an already bound listener until the process
/// exits.
pub async fn start_api_server(listener: TcpListener, state: Arc<Mutex<Option<PkceToken>>>) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)));

    if let Err(e) = axum::serve(listener, app).await {
        warning!("Callback server stopped: {}", e);
    }
}

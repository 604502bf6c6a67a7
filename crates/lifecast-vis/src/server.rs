//! Axum web server with WebSocket streaming of board updates.

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{debug, warn};

use lifecast_grid::{Board, GRID_SIZE};
use lifecast_hub::BroadcastHub;

/// Shared application state.
pub struct AppState {
    hub: Arc<BroadcastHub>,
}

/// Board visualization server.
pub struct VisServer {
    state: Arc<AppState>,
}

impl VisServer {
    /// Create a new server over a hub.
    pub fn new(hub: Arc<BroadcastHub>) -> Self {
        Self {
            state: Arc::new(AppState { hub }),
        }
    }

    /// Build the router for the server.
    pub fn router(&self) -> Router {
        Router::new()
            // Serve the viewer page
            .route("/", get(index_handler))
            // API routes
            .route("/api/grid", get(grid_handler))
            .route("/api/cell", post(toggle_handler))
            .route("/api/reset", post(reset_handler))
            // WebSocket for the live update stream
            .route("/ws", get(ws_handler))
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Run the server on the given port.
    pub async fn serve(self, port: u16) -> Result<(), std::io::Error> {
        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("lifecast server running on http://localhost:{}", port);
        axum::serve(listener, self.router()).await
    }
}

/// Serve the viewer page.
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

async fn grid_handler(State(state): State<Arc<AppState>>) -> Json<Board> {
    Json(state.hub.snapshot().await)
}

#[derive(Debug, Deserialize)]
struct ToggleRequest {
    x: i64,
    y: i64,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(error: String) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error }))
}

/// Map signed wire coordinates into the board's index space. Negative
/// values fail the same way an overflowing one does.
fn parse_coords(x: i64, y: i64) -> Option<(usize, usize)> {
    let x = usize::try_from(x).ok()?;
    let y = usize::try_from(y).ok()?;
    (x < GRID_SIZE && y < GRID_SIZE).then_some((x, y))
}

async fn toggle_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ToggleRequest>,
) -> Result<Json<Board>, ApiError> {
    let Some((x, y)) = parse_coords(req.x, req.y) else {
        return Err(bad_request(format!(
            "coordinates ({}, {}) outside the {size}x{size} board",
            req.x,
            req.y,
            size = GRID_SIZE
        )));
    };
    let board = state
        .hub
        .toggle_cell(x, y)
        .await
        .map_err(|err| bad_request(err.to_string()))?;
    Ok(Json(board))
}

async fn reset_handler(State(state): State<Arc<AppState>>) -> Json<Board> {
    Json(state.hub.reset().await)
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
    let mut stream = state.hub.subscribe().await;
    let id = stream.id();
    debug!("websocket subscriber connected");

    loop {
        tokio::select! {
            update = stream.recv() => {
                let Some(update) = update else { break };
                match serde_json::to_string(&update) {
                    Ok(json) => {
                        if socket.send(Message::Text(json.into())).await.is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        warn!(%err, "failed to encode update");
                        break;
                    }
                }
            }
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    // Mutations go over HTTP; ignore client chatter.
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    state.hub.unsubscribe(id).await;
    debug!("websocket subscriber disconnected");
}

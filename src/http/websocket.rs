//! WebSocket echo handling.
//!
//! # Responsibilities
//! - Complete upgrade handshake with client
//! - Echo every data frame back to the sender
//!
//! # Data Flow
//! ```text
//! Client ──── Text/Binary frame ───→ Server
//! Client ←─── same frame ─────────── Server
//! ```
//!
//! # Design Decisions
//! - Frame-level forwarding (no message buffering)
//! - Ping/pong handled transparently by the protocol layer
//! - Close frame from the client ends the session
//! - One task per socket, no shared session state

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
    routing::get,
    Router,
};
use futures_util::{SinkExt, StreamExt};

use crate::http::server::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/ws", get(ws_handler))
}

async fn ws_handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    let max = state.config.websocket.max_message_bytes;
    ws.max_message_size(max)
        .max_frame_size(max)
        .on_upgrade(echo_socket)
}

async fn echo_socket(socket: WebSocket) {
    tracing::debug!("WebSocket session opened");
    let (mut sender, mut receiver) = socket.split();
    let mut echoed = 0usize;

    while let Some(frame) = receiver.next().await {
        let reply = match frame {
            Ok(Message::Text(text)) => Message::Text(text),
            Ok(Message::Binary(bytes)) => Message::Binary(bytes),
            Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => continue,
            Ok(Message::Close(frame)) => {
                tracing::debug!(?frame, "Client closed WebSocket");
                break;
            }
            Err(e) => {
                tracing::warn!(error = %e, "WebSocket receive failed");
                break;
            }
        };

        if let Err(e) = sender.send(reply).await {
            tracing::warn!(error = %e, "WebSocket send failed");
            break;
        }
        echoed += 1;
    }

    tracing::debug!(frames = echoed, "WebSocket session closed");
}

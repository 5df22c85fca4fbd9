// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! WebSocket server implementation.
//!
//! Every client message gets exactly one reply carrying the same request id.
//! Requests on one connection are handled in order.

use std::net::SocketAddr;

use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, error, info, warn};

use lanes_core::protocol::{ClientMessage, ServerMessage};

use crate::state::ServerState;

/// Run the WebSocket server on the given address.
pub async fn run(addr: SocketAddr, state: ServerState) -> Result<(), Box<dyn std::error::Error>> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on: {}", listener.local_addr()?);
    serve(listener, state).await?;
    Ok(())
}

/// Accept connections from an already bound listener.
pub async fn serve(listener: TcpListener, state: ServerState) -> std::io::Result<()> {
    loop {
        let (stream, peer_addr) = listener.accept().await?;
        let state = state.clone();

        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, peer_addr, state).await {
                error!("Connection error from {}: {}", peer_addr, e);
            }
        });
    }
}

/// Handle a single WebSocket connection.
pub(crate) async fn handle_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: ServerState,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let ws_stream = tokio_tungstenite::accept_async(stream).await?;
    info!("New WebSocket connection from: {}", peer_addr);

    let (mut ws_sink, mut ws_stream) = ws_stream.split();

    while let Some(msg) = ws_stream.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                if let Some(response) = handle_client_message(&text, &state).await {
                    let json = response.to_json()?;
                    ws_sink.send(Message::Text(json.into())).await?;
                }
            }
            Ok(Message::Close(_)) => {
                info!("Client {} disconnected", peer_addr);
                break;
            }
            Ok(Message::Ping(data)) => {
                ws_sink.send(Message::Pong(data)).await?;
            }
            Ok(_) => {
                // Ignore other message types (Binary, Pong, Frame)
            }
            Err(e) => {
                error!("WebSocket error from {}: {}", peer_addr, e);
                break;
            }
        }
    }

    info!("Connection closed: {}", peer_addr);
    Ok(())
}

/// Process a client message and return the reply.
///
/// Unparseable messages have no request id to answer and are dropped.
pub(crate) async fn handle_client_message(text: &str, state: &ServerState) -> Option<ServerMessage> {
    let msg = match ClientMessage::from_json(text) {
        Ok(msg) => msg,
        Err(e) => {
            warn!("Dropping malformed message: {}", e);
            return None;
        }
    };
    debug!("Received message: {:?}", msg);

    let response = match msg {
        ClientMessage::FetchBoard {
            request_id,
            board_id,
        } => match state.fetch_board(&board_id).await {
            Ok(board) => ServerMessage::Board { request_id, board },
            Err(e) => ServerMessage::rejected(request_id, e.to_string()),
        },
        ClientMessage::MoveColumn {
            request_id,
            column_id,
            new_order,
        } => match state.move_column(&column_id, new_order).await {
            Ok(column) => ServerMessage::Column { request_id, column },
            Err(e) => {
                warn!("Rejected move of column {}: {}", column_id, e);
                ServerMessage::rejected(request_id, e.to_string())
            }
        },
        ClientMessage::MoveCard {
            request_id,
            card_id,
            new_column_id,
            new_order,
        } => match state.move_card(&card_id, &new_column_id, new_order).await {
            Ok(card) => ServerMessage::Card { request_id, card },
            Err(e) => {
                warn!("Rejected move of card {}: {}", card_id, e);
                ServerMessage::rejected(request_id, e.to_string())
            }
        },
        ClientMessage::Ping { id } => {
            debug!("Ping received: {}", id);
            ServerMessage::pong(id)
        }
    };
    Some(response)
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! WebSocket protocol messages between a board client and a board store.
//!
//! Every request carries a client-chosen `request_id` that the server
//! echoes in its response, so a client can match replies to requests on a
//! single connection.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Card, Column};
use crate::plan::MoveRequest;

/// Messages sent from client to server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Request the full board tree.
    FetchBoard { request_id: u64, board_id: String },

    /// Move a column to a new position within its board.
    ///
    /// Answered with the updated column.
    MoveColumn {
        request_id: u64,
        column_id: String,
        new_order: usize,
    },

    /// Move a card to a position within a (possibly different) column.
    ///
    /// Answered with the updated card.
    MoveCard {
        request_id: u64,
        card_id: String,
        new_column_id: String,
        new_order: usize,
    },

    /// Ping message for keepalive.
    Ping {
        /// Client-chosen ID echoed in Pong.
        id: u64,
    },
}

/// Messages sent from server to client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Response to FetchBoard.
    Board { request_id: u64, board: Board },

    /// Response to MoveColumn.
    Column { request_id: u64, column: Column },

    /// Response to MoveCard.
    Card { request_id: u64, card: Card },

    /// The request could not be applied.
    Rejected { request_id: u64, reason: String },

    /// Pong response to client Ping.
    Pong {
        /// Echoed from the Ping message.
        id: u64,
    },
}

impl ClientMessage {
    /// Creates a FetchBoard message.
    pub fn fetch_board(request_id: u64, board_id: impl Into<String>) -> Self {
        ClientMessage::FetchBoard {
            request_id,
            board_id: board_id.into(),
        }
    }

    /// Creates the message that persists a planned move.
    pub fn for_move(request_id: u64, request: &MoveRequest) -> Self {
        match request {
            MoveRequest::Column {
                column_id,
                new_order,
            } => ClientMessage::MoveColumn {
                request_id,
                column_id: column_id.clone(),
                new_order: *new_order,
            },
            MoveRequest::Card {
                card_id,
                new_column_id,
                new_order,
                ..
            } => ClientMessage::MoveCard {
                request_id,
                card_id: card_id.clone(),
                new_column_id: new_column_id.clone(),
                new_order: *new_order,
            },
        }
    }

    /// Creates a Ping message.
    pub fn ping(id: u64) -> Self {
        ClientMessage::Ping { id }
    }

    /// The request id, or `None` for Ping.
    pub fn request_id(&self) -> Option<u64> {
        match self {
            ClientMessage::FetchBoard { request_id, .. }
            | ClientMessage::MoveColumn { request_id, .. }
            | ClientMessage::MoveCard { request_id, .. } => Some(*request_id),
            ClientMessage::Ping { .. } => None,
        }
    }

    /// Serializes the message to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes the message from JSON.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

impl ServerMessage {
    /// Creates a Rejected message.
    pub fn rejected(request_id: u64, reason: impl Into<String>) -> Self {
        ServerMessage::Rejected {
            request_id,
            reason: reason.into(),
        }
    }

    /// Creates a Pong message.
    pub fn pong(id: u64) -> Self {
        ServerMessage::Pong { id }
    }

    /// The echoed request id, or `None` for Pong.
    pub fn request_id(&self) -> Option<u64> {
        match self {
            ServerMessage::Board { request_id, .. }
            | ServerMessage::Column { request_id, .. }
            | ServerMessage::Card { request_id, .. }
            | ServerMessage::Rejected { request_id, .. } => Some(*request_id),
            ServerMessage::Pong { .. } => None,
        }
    }

    /// Serializes the message to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes the message from JSON.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;

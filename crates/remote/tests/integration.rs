// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Integration tests for the lanes-remote server binary.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::net::TcpListener;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

/// Helper to spawn a server process and clean it up on drop.
struct ServerProcess {
    child: Child,
    port: u16,
}

impl ServerProcess {
    fn spawn(extra_args: &[&str]) -> Self {
        // Reserve a free port, then release it for the server
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let child = Command::new(env!("CARGO_BIN_EXE_lanes-remote"))
            .arg("--bind")
            .arg(format!("127.0.0.1:{}", port))
            .args(extra_args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("spawn server process");

        ServerProcess { child, port }
    }

    fn ws_url(&self) -> String {
        format!("ws://127.0.0.1:{}", self.port)
    }

    async fn connect(
        &self,
    ) -> tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>
    {
        // CI runners can be slow, so we use generous timeouts
        for _ in 0..20 {
            if let Ok(Ok((stream, _))) =
                tokio::time::timeout(Duration::from_millis(500), connect_async(&self.ws_url()))
                    .await
            {
                return stream;
            }
            tokio::time::sleep(Duration::from_millis(200)).await;
        }
        panic!("should connect to server within retries");
    }
}

impl Drop for ServerProcess {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

async fn roundtrip(
    ws: &mut tokio_tungstenite::WebSocketStream<
        tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>,
    >,
    msg: serde_json::Value,
) -> serde_json::Value {
    ws.send(Message::Text(msg.to_string().into()))
        .await
        .expect("send");
    match tokio::time::timeout(Duration::from_secs(5), ws.next()).await {
        Ok(Some(Ok(Message::Text(text)))) => serde_json::from_str(&text).unwrap(),
        other => panic!("Expected a text reply, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_lifecycle() {
    let server = ServerProcess::spawn(&[]);
    let mut ws = server.connect().await;

    let reply = roundtrip(&mut ws, serde_json::json!({"type": "ping", "id": 12345})).await;
    assert_eq!(reply["type"], "pong");
    assert_eq!(reply["id"], 12345);

    let reply = roundtrip(
        &mut ws,
        serde_json::json!({"type": "fetch_board", "request_id": 1, "board_id": "demo-board"}),
    )
    .await;
    assert_eq!(reply["type"], "board");
    assert_eq!(reply["board"]["columns"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_reject_moves_flag() {
    let server = ServerProcess::spawn(&["--reject-moves"]);
    let mut ws = server.connect().await;

    let reply = roundtrip(
        &mut ws,
        serde_json::json!({
            "type": "move_column",
            "request_id": 5,
            "column_id": "todo",
            "new_order": 1
        }),
    )
    .await;
    assert_eq!(reply["type"], "rejected");
    assert_eq!(reply["request_id"], 5);
}

#[tokio::test]
async fn test_data_file_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("boards.json");
    let data_arg = data.to_str().unwrap();

    {
        let server = ServerProcess::spawn(&["--data", data_arg]);
        let mut ws = server.connect().await;
        let reply = roundtrip(
            &mut ws,
            serde_json::json!({
                "type": "move_card",
                "request_id": 1,
                "card_id": "task-1",
                "new_column_id": "done",
                "new_order": 0
            }),
        )
        .await;
        assert_eq!(reply["type"], "card");
    }
    assert!(Path::new(&data).exists());

    let server = ServerProcess::spawn(&["--data", data_arg]);
    let mut ws = server.connect().await;
    let reply = roundtrip(
        &mut ws,
        serde_json::json!({"type": "fetch_board", "request_id": 2, "board_id": "demo-board"}),
    )
    .await;
    let done = &reply["board"]["columns"][2];
    assert_eq!(done["id"], "done");
    assert_eq!(done["cards"][0]["id"], "task-1");
}

/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use log::trace;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::runtime::Handle;

use super::{GraphiteSendError, GraphiteTransport, SendCompletion};

/// Send each payload over a new tcp connection.
pub struct TcpTransport {
    host: String,
    port: u16,
}

impl TcpTransport {
    pub fn new<T: Into<String>>(host: T, port: u16) -> Self {
        TcpTransport {
            host: host.into(),
            port,
        }
    }

    async fn send_payload(host: &str, port: u16, payload: &[u8]) -> Result<(), GraphiteSendError> {
        let mut stream = TcpStream::connect((host, port))
            .await
            .map_err(|e| GraphiteSendError::ConnectFailed(format!("{host}:{port}"), e))?;
        write_payload(&mut stream, payload).await?;
        trace!("graphite backend: sent {} bytes to {host}:{port}", payload.len());
        Ok(())
    }
}

impl GraphiteTransport for TcpTransport {
    fn send(&self, payload: String, completion: SendCompletion) {
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                completion.complete(Err(GraphiteSendError::NoRuntime(e.to_string())));
                return;
            }
        };

        let host = self.host.clone();
        let port = self.port;
        handle.spawn(async move {
            let r = TcpTransport::send_payload(&host, port, payload.as_bytes()).await;
            completion.complete(r);
        });
    }
}

async fn write_payload<W>(writer: &mut W, payload: &[u8]) -> Result<(), GraphiteSendError>
where
    W: AsyncWrite + Unpin,
{
    writer
        .write_all(payload)
        .await
        .map_err(GraphiteSendError::WriteFailed)?;
    writer
        .shutdown()
        .await
        .map_err(GraphiteSendError::CloseFailed)
}

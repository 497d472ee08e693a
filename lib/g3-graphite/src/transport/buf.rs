/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::sync::Mutex;

use super::{GraphiteSendError, GraphiteTransport, SendCompletion};

/// Keep every payload in memory and complete the send immediately.
#[derive(Default)]
pub(crate) struct BufTransport {
    sent: Mutex<Vec<String>>,
    fail: bool,
}

impl BufTransport {
    pub(crate) fn failing() -> Self {
        BufTransport {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub(crate) fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

impl GraphiteTransport for BufTransport {
    fn send(&self, payload: String, completion: SendCompletion) {
        if self.fail {
            completion.complete(Err(GraphiteSendError::ConnectFailed(
                "buf".to_string(),
                io::Error::from(io::ErrorKind::ConnectionRefused),
            )));
        } else {
            self.sent.lock().unwrap().push(payload);
            completion.complete(Ok(()));
        }
    }
}

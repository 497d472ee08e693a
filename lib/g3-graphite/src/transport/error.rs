/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphiteSendError {
    #[error("no async runtime available: {0}")]
    NoRuntime(String),
    #[error("connect to {0} failed: {1}")]
    ConnectFailed(String, io::Error),
    #[error("write payload failed: {0}")]
    WriteFailed(io::Error),
    #[error("close connection failed: {0}")]
    CloseFailed(io::Error),
}

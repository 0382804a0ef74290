// ABOUTME: Unified error handling re-exported from qtrun-core
// ABOUTME: AppError, ErrorCode and AppResult for configuration and input failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 QT.run

pub use qtrun_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails,
};

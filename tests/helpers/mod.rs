// ABOUTME: Shared test helpers for integration tests
// ABOUTME: Exports the HTTP test harness, scripted providers, and fixture builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Reprover

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod fixtures;
pub mod http;
pub mod scripted_llm;

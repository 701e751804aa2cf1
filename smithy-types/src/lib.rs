/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Protocol-agnostic types for smithy-rs generated model crates.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod date_time;
pub mod display;
pub mod enums;
pub mod error;
pub mod map;

mod blob;

pub use blob::Blob;
pub use date_time::DateTime;

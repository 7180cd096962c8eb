// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

//! Turns finalized sampling trees into pprof-encoded profiles.
//!
//! The sampling engine hands over a call tree whose nodes carry a name, a
//! source location, and per-node measurement contributions. This crate
//! flattens such a tree into the flat relational schema the pprof exchange
//! format requires — deduplicated string, function, and call-site tables
//! plus one sample per contribution — and serializes the result with
//! [treetap_profiling_protobuf].
//!
//! Two tree shapes are supported: wall-clock hit counts ([WallProfile])
//! and sampled heap allocations ([HeapProfile]). Everything runs synchronously on the
//! calling thread; a profile is built once, encoded once, and discarded.

pub mod api;
pub mod collections;
pub mod internal;

mod heap;
mod wall;

pub use heap::*;
pub use wall::*;

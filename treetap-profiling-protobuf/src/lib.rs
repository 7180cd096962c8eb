// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

//! This crate implements a protobuf serializer for the [`profiles`] exchange
//! format without a schema compiler. It provides:
//!
//! - the wire-level primitives (varints, tagged scalars, length-delimited
//!   fields, packed repeated scalars, nested sub-messages), and
//! - self-encoding record types for [Function], [Label], [Location] and
//!   [Line], [Mapping], [Sample], and [ValueType].
//!
//! Everything appends to a single growable byte buffer. Sub-message framing
//! is realized by appending the payload first, then the header, then
//! rotating the header in front of the payload; see [message] for why this
//! is acceptable at this schema's nesting depth.
//!
//! There is no record type for the Profile message itself. The profile
//! aggregate owns all the tables the top-level fields borrow from, so it
//! encodes its own fields with the primitives in this crate.
//!
//! Indices into the string table are represented by [StringOffset], which
//! uses a 32-bit number. ID fields are 64-bit.
//!
//! [`profiles`]: https://github.com/google/pprof/blob/main/proto/profile.proto

mod encode;
mod function;
mod label;
mod location;
mod mapping;
mod sample;
mod string;
mod value_type;

#[cfg(feature = "prost_impls")]
pub mod prost_impls;

pub use encode::*;
pub use function::*;
pub use label::*;
pub use location::*;
pub use mapping::*;
pub use sample::*;
pub use string::*;
pub use value_type::*;

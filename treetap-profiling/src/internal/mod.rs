// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

mod flatten;
mod profile;

pub use flatten::*;
pub use profile::*;

// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::api;
use crate::internal::{flatten, Profile};
use log::debug;

/// A call-tree node produced by the wall-clock sampler.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WallNode {
    /// Function name; possibly empty.
    pub name: String,
    /// Resource name of the script; possibly empty.
    pub filename: String,
    /// Stable per-process id of the script.
    pub script_id: i64,
    /// 1-based line number; 0 when unknown.
    pub line: i64,
    /// 1-based column number; 0 when unknown.
    pub column: i64,
    /// Number of samples that landed in this exact frame.
    pub hit_count: i64,
    pub children: Vec<WallNode>,
}

/// A finalized wall-clock sampling run. The tree must not change while it
/// is being serialized.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WallProfile {
    pub start_time_micros: i64,
    pub end_time_micros: i64,
    /// Synthetic root; it is never sampled, only its descendants are.
    pub root: WallNode,
}

#[derive(Copy, Clone)]
struct WallFrame<'a> {
    node: &'a WallNode,
    interval_micros: i64,
}

impl api::Node for WallFrame<'_> {
    fn name(&self) -> &str {
        &self.node.name
    }

    fn filename(&self) -> &str {
        &self.node.filename
    }

    fn file_id(&self) -> i64 {
        self.node.script_id
    }

    fn line(&self) -> i64 {
        self.node.line
    }

    fn column(&self) -> i64 {
        self.node.column
    }

    fn children(&self) -> Vec<Self> {
        self.node
            .children
            .iter()
            .map(|node| WallFrame {
                node,
                interval_micros: self.interval_micros,
            })
            .collect()
    }

    fn samples(&self) -> Vec<api::Sample<'_>> {
        // Every frame contributes, zero hits included: the sample count
        // must equal the node count.
        let hits = self.node.hit_count;
        vec![api::Sample {
            values: vec![hits, hits * self.interval_micros],
            labels: vec![],
        }]
    }
}

/// Serializes one wall-clock sampling run to pprof bytes.
///
/// Sample types are [("sample", "count"), ("wall", "microseconds")]; the
/// period is the sampling interval. Each node's wall time is its hit count
/// times the interval.
pub fn serialize_wall_profile(
    profile: &WallProfile,
    interval_micros: i64,
    start_time_nanos: i64,
) -> anyhow::Result<Vec<u8>> {
    let duration_nanos = (profile.end_time_micros - profile.start_time_micros) * 1000;
    let mut pprof = Profile::new(
        "wall",
        "microseconds",
        interval_micros,
        start_time_nanos,
        duration_nanos,
    );
    pprof.add_sample_type("sample", "count");
    pprof.add_sample_type("wall", "microseconds");

    flatten(
        &WallFrame {
            node: &profile.root,
            interval_micros,
        },
        &mut pprof,
    )?;

    let buf = pprof.encode();
    debug!(
        "wall profile: {} samples, {} locations, {} functions, {} bytes",
        pprof.samples().len(),
        pprof.locations().len(),
        pprof.functions().len(),
        buf.len()
    );
    Ok(buf)
}

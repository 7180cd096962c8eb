// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::api;
use crate::collections::{FxIndexMap, StringTable};
use std::collections::VecDeque;
use treetap_profiling_protobuf::{
    message, messages, repeated_scalar, scalar, scalar_opt, strings, Function, Label, Line,
    Location, Mapping, Sample, StringOffset, ValueType,
};

/// Dedup key of the function table.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct FunctionKey {
    file_id: i64,
    name: Box<str>,
}

/// Dedup key of the location table. Distinct call columns produce distinct
/// call sites even though the encoded Location only carries the line.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct LocationKey {
    file_id: i64,
    line: i64,
    column: i64,
    name: Box<str>,
}

/// The profile under construction: the string, function, and location
/// interning tables, the flat record lists, and the run's metadata.
///
/// All tables grow monotonically while samples are added; entries are never
/// mutated or removed. Build one profile per run, then [Profile::encode]
/// it and let it go.
pub struct Profile {
    sample_types: Vec<ValueType>,
    samples: Vec<Sample>,
    mappings: Vec<Mapping>,
    locations: Vec<Location>,
    functions: Vec<Function>,
    strings: StringTable,
    functions_by_key: FxIndexMap<FunctionKey, u64>,
    locations_by_key: FxIndexMap<LocationKey, u64>,
    drop_frames: StringOffset,
    keep_frames: StringOffset,
    time_nanos: i64,
    duration_nanos: i64,
    period_type: ValueType,
    period: i64,
    comments: Vec<StringOffset>,
    default_sample_type: StringOffset,
}

impl Profile {
    /// Creates an empty profile carrying the run's period and timing
    /// metadata and no frame filters.
    pub fn new(
        period_type: &str,
        period_unit: &str,
        period: i64,
        time_nanos: i64,
        duration_nanos: i64,
    ) -> Self {
        Self::with_frame_filters(
            period_type,
            period_unit,
            period,
            time_nanos,
            duration_nanos,
            "",
            "",
        )
    }

    /// As [Profile::new], with drop/keep frame-filter expressions for
    /// consumers that post-process frames.
    pub fn with_frame_filters(
        period_type: &str,
        period_unit: &str,
        period: i64,
        time_nanos: i64,
        duration_nanos: i64,
        drop_frames: &str,
        keep_frames: &str,
    ) -> Self {
        // The table starts with "" at offset 0. The unit is interned ahead
        // of the type; the resulting table order is pinned by golden tests.
        let mut strings = StringTable::new();
        let unit = strings.intern(period_unit);
        let r#type = strings.intern(period_type);
        let drop_frames = strings.intern(drop_frames);
        let keep_frames = strings.intern(keep_frames);
        Self {
            sample_types: Vec::new(),
            samples: Vec::new(),
            mappings: Vec::new(),
            locations: Vec::new(),
            functions: Vec::new(),
            strings,
            functions_by_key: FxIndexMap::default(),
            locations_by_key: FxIndexMap::default(),
            drop_frames,
            keep_frames,
            time_nanos,
            duration_nanos,
            period_type: ValueType { r#type, unit },
            period,
            comments: Vec::new(),
            default_sample_type: StringOffset::ZERO,
        }
    }

    /// Declares the meaning and unit of one slot of every sample's value
    /// tuple. All sample types must be declared before samples are added.
    pub fn add_sample_type(&mut self, r#type: &str, unit: &str) {
        let r#type = self.strings.intern(r#type);
        let unit = self.strings.intern(unit);
        self.sample_types.push(ValueType { r#type, unit });
    }

    /// Attaches a free-form comment to the profile.
    pub fn add_comment(&mut self, comment: &str) {
        let offset = self.strings.intern(comment);
        self.comments.push(offset);
    }

    /// Interns a string, returning its stable offset. Idempotent.
    pub fn string_id(&mut self, str: &str) -> StringOffset {
        self.strings.intern(str)
    }

    /// Returns the id of the function record for the node, creating it on
    /// first sight. Functions are deduplicated by (file id, name); the
    /// first-seen line becomes the start line.
    pub fn function_id<N: api::Node>(&mut self, node: &N) -> u64 {
        let key = FunctionKey {
            file_id: node.file_id(),
            name: node.name().into(),
        };
        if let Some(&id) = self.functions_by_key.get(&key) {
            return id;
        }
        let name = self.strings.intern(node.name());
        let filename = self.strings.intern(node.filename());
        let id = self.functions.len() as u64 + 1;
        self.functions.push(Function {
            id,
            name,
            system_name: name,
            filename,
            start_line: node.line(),
        });
        self.functions_by_key.insert(key, id);
        id
    }

    /// Returns the id of the call-site record for the node, creating it on
    /// first sight. Locations are deduplicated by (file id, line, column,
    /// name) and always carry exactly one line.
    pub fn location_id<N: api::Node>(&mut self, node: &N) -> u64 {
        let key = LocationKey {
            file_id: node.file_id(),
            line: node.line(),
            column: node.column(),
            name: node.name().into(),
        };
        if let Some(&id) = self.locations_by_key.get(&key) {
            return id;
        }
        let line = Line {
            function_id: self.function_id(node),
            line: node.line(),
        };
        let id = self.locations.len() as u64 + 1;
        self.locations.push(Location {
            id,
            mapping_id: 0,
            address: 0,
            lines: vec![line],
            is_folded: false,
        });
        self.locations_by_key.insert(key, id);
        id
    }

    /// Records the node's contributions against the given ancestor stack.
    ///
    /// The node's location id is pushed onto the front of `stack`
    /// (innermost frame first) and stays there: unwinding is the caller's
    /// responsibility. Each contribution becomes one sample carrying a
    /// snapshot of the stack.
    ///
    /// Errors if a contribution's value count differs from the number of
    /// declared sample types.
    pub fn add_sample<N: api::Node>(
        &mut self,
        node: &N,
        stack: &mut VecDeque<u64>,
    ) -> anyhow::Result<()> {
        let location_id = self.location_id(node);
        stack.push_front(location_id);
        for api::Sample { values, labels } in node.samples() {
            anyhow::ensure!(
                values.len() == self.sample_types.len(),
                "sample carries {} values but {} sample types are declared",
                values.len(),
                self.sample_types.len(),
            );
            let labels = labels
                .iter()
                .map(|label| self.intern_label(label))
                .collect();
            self.samples.push(Sample {
                location_ids: stack.iter().copied().collect(),
                values,
                labels,
            });
        }
        Ok(())
    }

    fn intern_label(&mut self, label: &api::Label<'_>) -> Label {
        Label {
            key: self.strings.intern(label.key),
            str: label
                .str
                .map_or(StringOffset::ZERO, |str| self.strings.intern(str)),
            num: label.num,
            num_unit: label
                .num_unit
                .map_or(StringOffset::ZERO, |unit| self.strings.intern(unit)),
        }
    }

    /// Serializes the whole profile message.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.encode_into(&mut buf);
        buf
    }

    /// Serializes the whole profile message, appending to `buf`.
    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        messages(1, &self.sample_types, buf);
        messages(2, &self.samples, buf);
        messages(3, &self.mappings, buf);
        messages(4, &self.locations, buf);
        messages(5, &self.functions, buf);
        strings(6, self.strings.iter(), buf);
        scalar_opt(7, self.drop_frames, buf);
        scalar_opt(8, self.keep_frames, buf);
        scalar_opt(9, self.time_nanos, buf);
        scalar_opt(10, self.duration_nanos, buf);
        // Content-conditioned, unlike the scalar fields: a period type
        // whose strings are both empty carries nothing and is dropped
        // whole.
        if !self.period_type.is_empty() {
            message(11, &self.period_type, buf);
        }
        scalar_opt(12, self.period, buf);
        repeated_scalar(13, &self.comments, buf);
        // Always emitted, zero included: consumers read this as a
        // discriminator, not as an omittable default.
        scalar(14, self.default_sample_type, buf);
    }

    pub fn sample_types(&self) -> &[ValueType] {
        &self.sample_types
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    /// Resolves a string offset against the profile's table.
    pub fn string(&self, offset: StringOffset) -> Option<&str> {
        self.strings.get(offset)
    }

    /// The string table in offset order.
    pub fn string_table(&self) -> impl Iterator<Item = &str> {
        self.strings.iter()
    }
}

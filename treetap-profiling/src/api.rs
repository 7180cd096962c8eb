// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! The contract between a sampling engine's call tree and the profile
//! builder. Nodes are read-only snapshots; the tree must not change for
//! the duration of a flattening pass.

/// A node of a finalized sampling tree.
///
/// Implementations are thin adapters over the sampling engine's own node
/// type; they are created per visited node, so they should stay cheap to
/// construct (a reference plus shape constants).
pub trait Node: Sized {
    /// Function name; possibly empty.
    fn name(&self) -> &str;

    /// Source file the function lives in; possibly empty.
    fn filename(&self) -> &str;

    /// Stable per-process id of the source file.
    fn file_id(&self) -> i64;

    /// 1-based line number; 0 when unknown.
    fn line(&self) -> i64;

    /// 1-based column number; 0 when unknown.
    fn column(&self) -> i64;

    /// This node's direct children, in the sampling engine's order.
    fn children(&self) -> Vec<Self>;

    /// The measurements this node itself contributes, excluding
    /// descendants. One [Sample] is recorded per entry.
    fn samples(&self) -> Vec<Sample<'_>>;
}

/// One contribution a node reports for itself: a value tuple plus any
/// labels. Strings are borrowed; the profile interns them when the sample
/// is recorded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sample<'a> {
    /// One value per declared sample type, in declaration order.
    pub values: Vec<i64>,
    pub labels: Vec<Label<'a>>,
}

/// Additional context attached to a contribution.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Label<'a> {
    pub key: &'a str,
    /// String value; mutually exclusive with `num` by convention.
    pub str: Option<&'a str>,
    /// Numeric value; mutually exclusive with `str` by convention.
    pub num: i64,
    /// Units of `num`, e.g. "bytes".
    pub num_unit: Option<&'a str>,
}

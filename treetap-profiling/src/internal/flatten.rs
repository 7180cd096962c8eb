// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::api::Node;
use crate::internal::Profile;
use std::collections::VecDeque;

struct Entry<N> {
    node: N,
    /// Ancestor-stack entries owed once this chain bottoms out: one for
    /// the node itself, plus any its parent deferred onto it.
    pending_pops: usize,
}

/// Walks a sampling tree in pre-order and records every descendant of the
/// root into the profile. The root itself is never sampled, so a childless
/// root produces no samples.
///
/// The walk is iterative: tree depth equals the sampled stack depth, which
/// can exceed what native recursion tolerates. An explicit work list holds
/// the nodes still to visit, and an explicit ancestor stack mirrors the
/// call chain of the node currently being recorded.
///
/// [Profile::add_sample] pushes one location id per visited node and never
/// pops. Unwinding is deferred: when a node has children, its first child
/// inherits the node's own pop obligation (and is deliberately visited
/// last among its siblings, after every other subtree has unwound back to
/// this node's frame); when a node is a leaf, it pops everything owed
/// along its chain in one go. This avoids a pop/push pair per
/// single-child ancestor level.
pub fn flatten<N: Node>(root: &N, profile: &mut Profile) -> anyhow::Result<()> {
    let mut entries: VecDeque<Entry<N>> = root
        .children()
        .into_iter()
        .map(|node| Entry {
            node,
            pending_pops: 1,
        })
        .collect();
    let mut stack = VecDeque::new();

    while let Some(entry) = entries.pop_front() {
        profile.add_sample(&entry.node, &mut stack)?;
        let children = entry.node.children();
        if children.is_empty() {
            for _ in 0..entry.pending_pops {
                stack.pop_front();
            }
            continue;
        }
        for (index, child) in children.into_iter().enumerate() {
            let pending_pops = if index == 0 { 1 + entry.pending_pops } else { 1 };
            entries.push_front(Entry {
                node: child,
                pending_pops,
            });
        }
    }

    debug_assert!(stack.is_empty());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api;

    #[derive(Default)]
    struct TreeNode {
        name: &'static str,
        line: i64,
        values: Option<Vec<i64>>,
        children: Vec<TreeNode>,
    }

    impl TreeNode {
        fn new(name: &'static str, line: i64, children: Vec<TreeNode>) -> Self {
            Self {
                name,
                line,
                values: Some(vec![1, 10]),
                children,
            }
        }
    }

    impl api::Node for &TreeNode {
        fn name(&self) -> &str {
            self.name
        }

        fn filename(&self) -> &str {
            "app.js"
        }

        fn file_id(&self) -> i64 {
            1
        }

        fn line(&self) -> i64 {
            self.line
        }

        fn column(&self) -> i64 {
            1
        }

        fn children(&self) -> Vec<Self> {
            self.children.iter().collect()
        }

        fn samples(&self) -> Vec<api::Sample<'_>> {
            self.values
                .iter()
                .map(|values| api::Sample {
                    values: values.clone(),
                    labels: vec![],
                })
                .collect()
        }
    }

    fn profile() -> Profile {
        let mut profile = Profile::new("wall", "microseconds", 10, 0, 0);
        profile.add_sample_type("sample", "count");
        profile.add_sample_type("wall", "microseconds");
        profile
    }

    /// Resolves a sample's stack to function names, innermost first.
    fn names(profile: &Profile, sample_index: usize) -> Vec<&str> {
        profile.samples()[sample_index]
            .location_ids
            .iter()
            .map(|location_id| {
                let location = &profile.locations()[(location_id - 1) as usize];
                let function = &profile.functions()[(location.lines[0].function_id - 1) as usize];
                profile.string(function.name).unwrap()
            })
            .collect()
    }

    #[test]
    fn childless_root_produces_nothing() {
        let root = TreeNode::new("(root)", 0, vec![]);
        let mut profile = profile();
        flatten(&&root, &mut profile).unwrap();
        assert!(profile.samples().is_empty());
        assert!(profile.locations().is_empty());
    }

    #[test]
    fn one_sample_per_node_with_ancestor_chains() {
        // (root) -> a -> b
        //             -> c -> d
        let root = TreeNode::new(
            "(root)",
            0,
            vec![TreeNode::new(
                "a",
                1,
                vec![
                    TreeNode::new("b", 2, vec![]),
                    TreeNode::new("c", 3, vec![TreeNode::new("d", 4, vec![])]),
                ],
            )],
        );
        let mut profile = profile();
        flatten(&&root, &mut profile).unwrap();

        // Four non-root nodes, one contribution each.
        assert_eq!(4, profile.samples().len());

        // Work-list order: a first, then its children in reverse, with the
        // first child last.
        assert_eq!(vec!["a"], names(&profile, 0));
        assert_eq!(vec!["c", "a"], names(&profile, 1));
        assert_eq!(vec!["d", "c", "a"], names(&profile, 2));
        assert_eq!(vec!["b", "a"], names(&profile, 3));
    }

    #[test]
    fn deep_chains_unwind_once() {
        // A linear chain: each level defers its pop to its only child.
        let mut node = TreeNode::new("leaf", 100, vec![]);
        for depth in (0..100).rev() {
            node = TreeNode::new("frame", depth, vec![node]);
        }
        let root = TreeNode::new("(root)", 0, vec![node]);

        let mut profile = profile();
        flatten(&&root, &mut profile).unwrap();

        assert_eq!(101, profile.samples().len());
        // The deepest sample carries the whole chain.
        assert_eq!(101, names(&profile, 100).len());
        assert_eq!("leaf", names(&profile, 100)[0]);
    }

    #[test]
    fn quiet_nodes_still_keep_the_stack_consistent() {
        // A node with no contributions still occupies a stack frame while
        // its subtree is recorded.
        let mut quiet = TreeNode::new("quiet", 5, vec![TreeNode::new("loud", 6, vec![])]);
        quiet.values = None;
        let root = TreeNode::new("(root)", 0, vec![quiet]);

        let mut profile = profile();
        flatten(&&root, &mut profile).unwrap();

        assert_eq!(1, profile.samples().len());
        assert_eq!(vec!["loud", "quiet"], names(&profile, 0));
        // The quiet node still interned its call site.
        assert_eq!(2, profile.locations().len());
    }

    #[test]
    fn sibling_leaves_share_nothing_but_ancestors() {
        let root = TreeNode::new(
            "(root)",
            0,
            vec![
                TreeNode::new("x", 1, vec![]),
                TreeNode::new("y", 2, vec![]),
            ],
        );
        let mut profile = profile();
        flatten(&&root, &mut profile).unwrap();

        assert_eq!(2, profile.samples().len());
        assert_eq!(vec!["x"], names(&profile, 0));
        assert_eq!(vec!["y"], names(&profile, 1));
    }
}

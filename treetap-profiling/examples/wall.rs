// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;
use std::process::exit;
use treetap_profiling::{serialize_wall_profile, WallNode, WallProfile};

// Writes a small wall-clock profile to stdout; pipe it into `pprof` to
// inspect it.
fn main() {
    let work = WallNode {
        name: "work".into(),
        filename: "app.js".into(),
        script_id: 1,
        line: 14,
        column: 3,
        hit_count: 180,
        children: vec![],
    };
    let main = WallNode {
        name: "main".into(),
        filename: "app.js".into(),
        script_id: 1,
        line: 1,
        column: 1,
        hit_count: 20,
        children: vec![work],
    };
    let profile = WallProfile {
        start_time_micros: 0,
        end_time_micros: 2_000_000,
        root: WallNode {
            children: vec![main],
            ..WallNode::default()
        },
    };

    match serialize_wall_profile(&profile, 10_000, 0) {
        Ok(bytes) => {
            std::io::stdout()
                .write_all(&bytes)
                .expect("write to succeed");
        }
        Err(_) => exit(1),
    }
}

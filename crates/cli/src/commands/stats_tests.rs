// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn test_format_snapshot_rounds_latency() {
    let snapshot = MetricsSnapshot {
        success: 3,
        failures: 1,
        avg_latency_ms: 133.6,
        queued_items: 2,
    };
    assert_eq!(
        format_snapshot(&snapshot),
        "Delivered:    3\nFailed:       1\nAvg latency:  134 ms\nQueued:       2"
    );
}

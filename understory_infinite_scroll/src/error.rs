// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Errors reported by [`WindowedScroller`](crate::WindowedScroller).
///
/// Most anomalies are not errors: out-of-window targets, exhausted edges and
/// stale sentinel crossings all degrade to no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ScrollError {
    /// The scroller was destroyed; only `rebuild_around` may revive it.
    #[error("scroller has been destroyed; rebuild it around an index first")]
    Destroyed,
}

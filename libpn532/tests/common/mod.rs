// Shared helpers for the integration tests. Each aggregator pulls this
// in by path, so keep everything `pub` and allow the unused-item noise
// that comes from per-aggregator compilation.
#![allow(dead_code)]

//! Purpose: Shared core library crate used by the `jcanon` CLI and tests.
//! Exports: `core` (filter pipeline, canonical serializer, errors), `json`.
//! Role: Internal library backing the binary; not yet a stable public SDK.
//! Invariants: Treat the crate API as internal until a dedicated library release.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
pub mod core;
pub mod json;

//! Workspace-level tooling package.
//!
//! This package exists to anchor workspace-wide dev tooling (pre-commit
//! hooks); all functionality lives in the member crates under `crates/`.

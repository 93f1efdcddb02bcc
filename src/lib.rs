//! Workspace-level integration tests for seidel-rs; see `tests/`.

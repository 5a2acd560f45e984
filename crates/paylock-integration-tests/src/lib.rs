//! Cross-crate integration tests for the paylock escrow engine live in
//! `tests/`; this library target is intentionally empty.

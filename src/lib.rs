//! Workspace root package.
//!
//! Holds no code; it exists so the pre-commit hook dev-dependency is installed
//! for the whole workspace. See `crates/skyroute-lib` and `crates/skyroute-cli`.

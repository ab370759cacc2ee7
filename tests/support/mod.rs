// tests/support/mod.rs
// Shared by several integration test binaries; each one uses a different
// subset, so unused items are expected.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(dead_code, unused_imports)]
pub mod log_capture;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use log_capture::*;
#[allow(unused_imports)]
pub use mocks::*;

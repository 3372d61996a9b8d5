// tests/support/mod.rs
// Shared fakes and helpers for the integration test binaries. Not every
// binary uses every symbol, so allow dead_code at the module level.
#[allow(dead_code)]
pub mod builders;

#[allow(dead_code)]
pub mod helpers;

#[allow(dead_code)]
pub mod mocks;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use mocks::*;

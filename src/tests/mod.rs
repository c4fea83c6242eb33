//! Integration-style tests living inside the crate so they can pin IVs
//! through the crate-internal sealing entry point.

//! # Tax Token Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── scenarios.rs     # Ledger scenarios end-to-end through TokenService
//!     ├── deployment.rs    # Network resolution + deployment registry
//!     └── concurrency.rs   # Many callers against one token, metrics export
//!
//! tests/benches/
//! └── token_benchmarks.rs  # Transfer throughput
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p tax-token-tests
//! cargo test -p tax-token-tests integration::scenarios::
//! cargo bench -p tax-token-tests
//! ```

#![allow(unused_variables)]
#![allow(unused_imports)]
#![allow(dead_code)]

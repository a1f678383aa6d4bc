//! Embedded seed list
//!
//! Seed entries compiled into the binary at build time.

// Include generated seed list from build script
include!(concat!(env!("OUT_DIR"), "/seed_words.rs"));

//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/common.rs"));
include!(concat!(env!("OUT_DIR"), "/sight_pre_primer.rs"));
include!(concat!(env!("OUT_DIR"), "/sight_primer.rs"));
include!(concat!(env!("OUT_DIR"), "/sight_first.rs"));
include!(concat!(env!("OUT_DIR"), "/sight_second.rs"));
include!(concat!(env!("OUT_DIR"), "/sight_third.rs"));

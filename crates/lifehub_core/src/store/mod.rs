//! In-memory entity stores.
//!
//! # Responsibility
//! - Hold each feature's ordered entity collection in process memory.
//! - Express every mutation as a tagged command consumed by one reduction
//!   function.
//!
//! # Invariants
//! - All operations are synchronous and total; lookup misses are silent
//!   no-ops.
//! - The same (state, command) pair always yields the same next state.

pub mod memory;

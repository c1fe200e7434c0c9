//! Shared data contracts between the fetch layer and the page components.
//!
//! These mirror the JSON payloads served by the static data endpoints. The
//! frontend never constructs them except in tests; they arrive deserialized.

pub mod athlete;
pub mod community;

pub use athlete::{Athlete, AthleteFilter, AthleteStats};
pub use community::{BreakdownSlice, CommunityBreakdown};

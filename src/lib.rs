//! Shared plumbing for the two curvescope viewers.
//!
//! * `lut-validate` – stacked panels for a lookup-table validation trace
//!   (`lt_vf.txt`): reference vs. estimate plus absolute/relative error.
//! * `weighting-curves` – the A/B/C/D auditory weighting curves overlaid
//!   on a log-frequency axis.
//!
//! The viewers share nothing at runtime; they only draw from the same
//! data / weighting / ui modules below.

pub mod color;
pub mod data;
pub mod state;
pub mod ui;
pub mod weighting;

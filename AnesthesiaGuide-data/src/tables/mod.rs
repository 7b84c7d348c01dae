// Reference tables
// Everything in here is immutable and indexed by enumerated keys.

pub mod dose_rule;
pub mod emergency;
pub mod fluids;
pub mod palette;
pub mod recovery;

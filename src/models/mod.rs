pub mod estimate;
pub mod estimates;
pub mod metadata;
pub mod range;
pub mod ranges;
pub mod timer;
pub mod timers;

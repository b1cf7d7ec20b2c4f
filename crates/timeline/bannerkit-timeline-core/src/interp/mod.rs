//! Interpolation and easing helpers shared by the sampler and capture planner.

pub mod functions;

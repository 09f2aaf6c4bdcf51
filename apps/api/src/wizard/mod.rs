//! The wizard: a linear five-step session that accumulates the resume
//! aggregate. `machine` owns the step/commit rules, `forms` the staged
//! per-step inputs, `store` the in-memory session map, `handlers` the
//! HTTP surface.

pub mod forms;
pub mod handlers;
pub mod machine;
pub mod store;

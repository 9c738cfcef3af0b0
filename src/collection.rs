pub mod queue;
pub mod set;

pub mod engine_state;
pub mod optimization_result;
pub mod session;

pub use engine_state::EngineState;
pub use optimization_result::OptimizationResult;
pub use session::SessionSnapshot;

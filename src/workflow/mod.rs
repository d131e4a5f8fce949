pub mod round_ctx;
pub mod round_flow;

pub use round_ctx::RoundCtx;
pub use round_flow::RoundFlow;

pub mod compress;
pub mod pipeline;
pub mod staleness;

pub use compress::Minifier;
pub use staleness::Decision;

pub mod compare;
pub mod object;
pub mod ranker;

pub use object::DetectedObject;
pub use ranker::ObjectRanker;

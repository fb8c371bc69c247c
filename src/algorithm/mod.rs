pub mod traits;
pub mod distance;
pub mod array_scan;
pub mod lazy_queue;
pub mod eager_queue;

pub use traits::{RunStatistics, ShortestPathStrategy, Strategy, StrategyRun, UnknownStrategy};
pub use distance::Distance;
pub use array_scan::run_array_scan;
pub use lazy_queue::run_lazy_queue;
pub use eager_queue::run_eager_queue;

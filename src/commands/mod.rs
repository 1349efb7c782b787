//! Command implementations

pub mod benchmark;
pub mod jump;
pub mod lookup;
pub mod neighbors;
pub mod search;
pub mod space;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use jump::{JumpResult, jump_to_text};
pub use lookup::{LookupResult, lookup_index, lookup_word};
pub use neighbors::{NeighborsResult, list_neighbors};
pub use search::{SearchOutcome, SearchRequest, run_search};
pub use space::{BucketRow, SpaceSummary, summarize_space};

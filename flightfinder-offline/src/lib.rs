pub mod shim;

pub use shim::{FetchDisposition, OfflineShim, ShimError, WorkerState};

pub mod pool;
pub mod registry;

pub use pool::Pool;
pub use registry::PoolRegistry;

//! In-memory adapters
//!
//! Repository implementations backed by process memory. There is no
//! database yet; these are what the server runs on.

pub mod component_repo;
pub mod item_repo;
pub mod system_repo;

pub use component_repo::InMemoryComponentRepository;
pub use item_repo::InMemoryItemRepository;
pub use system_repo::InMemorySystemRepository;

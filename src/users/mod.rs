pub mod memory;
pub mod model;
pub mod repo;
pub mod schema;

pub use memory::MemoryUserStore;
pub use model::{NewUser, ProfileUpdate, User};
pub use repo::{PgUserStore, StoreError, UserStore};

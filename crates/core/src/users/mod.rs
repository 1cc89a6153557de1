//! User accounts and the per-user asset breakdown served to
//! administrators.

pub mod model;
pub mod service;
pub mod store;

pub use model::{AssetHolding, User, UserAssets};
pub use service::{UserService, UserServiceTrait};
pub use store::UserStore;

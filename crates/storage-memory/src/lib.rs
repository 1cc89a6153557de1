//! In-memory storage implementation for FortuneOK.
//!
//! Implements the store traits defined in `fortuneok-core` on top of
//! `tokio::sync::RwLock`-guarded maps. This is the only storage
//! backend the server ships with; data lives for the lifetime of the
//! process and the seeding helpers exist so a fresh instance starts
//! with usable accounts and sessions.
//!
//! ```text
//! core (domain traits)
//!         │
//!         ▼
//! storage-memory (this crate)
//!         │
//!         ▼
//!   process memory
//! ```

pub mod investments;
pub mod logs;
pub mod sessions;
pub mod users;

pub use investments::MemoryInvestmentStore;
pub use logs::MemoryLogStore;
pub use sessions::MemorySessionStore;
pub use users::MemoryUserStore;

pub mod clock;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod quiz;
pub mod scheduler;

pub use clock::{Clock, SimulatedClock, SystemClock};
pub use config::{SchedulerConfig, SelectionMode};
pub use database::{InMemoryWordStore, SqliteWordStore, WordStore};
pub use error::{ConfigError, SchedulerError, StoreError};
pub use models::{Grade, ItemId, MasteryLevel, StudySession, VocabularyItem, WordStatus};

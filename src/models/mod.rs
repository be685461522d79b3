pub mod grade;
pub mod mastery;
pub mod review_update;
pub mod study_session;
pub mod vocabulary_item;

pub use grade::Grade;
pub use mastery::{MasteryLevel, WordStatus};
pub use review_update::ReviewUpdate;
pub use study_session::{GradeOutcome, SessionPhase, SessionTally, StudySession};
pub use vocabulary_item::{ItemId, NewWord, VocabularyItem};

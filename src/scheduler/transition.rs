//! Mastery transition for one review event.

use crate::models::{Grade, MasteryLevel, WordStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub mastery_level: MasteryLevel,
    pub status: WordStatus,
}

/// difficult steps down, ok steps up, easy jumps straight to mastered.
/// The status is always recomputed from the new level.
pub fn transition(level: MasteryLevel, grade: Grade) -> Transition {
    let mastery_level = match grade {
        Grade::Difficult => level.lowered(),
        Grade::Ok => level.raised(),
        Grade::Easy => MasteryLevel::MAX,
    };

    Transition {
        mastery_level,
        status: mastery_level.status(),
    }
}

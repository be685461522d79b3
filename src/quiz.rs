//! Multiple-choice quiz over words the user has started learning.
//!
//! Each question shows a word with its meaning hidden among meanings of other
//! words. Answers feed back into the scheduler as grades: a correct pick is
//! `ok`, a wrong one `difficult`.

use crate::config::SchedulerConfig;
use crate::error::{Result, SchedulerError};
use crate::models::{Grade, ItemId, VocabularyItem, WordStatus};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq)]
pub struct QuizQuestion {
    pub item_id: ItemId,
    pub word: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

impl QuizQuestion {
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_index
    }

    /// Grade to record for the chosen option.
    pub fn answer(&self, choice: usize) -> Grade {
        if self.is_correct(choice) {
            Grade::Ok
        } else {
            Grade::Difficult
        }
    }
}

pub fn generate_quiz<R: Rng + ?Sized>(
    pool: &[VocabularyItem],
    config: &SchedulerConfig,
    rng: &mut R,
) -> Result<Vec<QuizQuestion>> {
    let mut testable: Vec<&VocabularyItem> = pool
        .iter()
        .filter(|item| item.status() != WordStatus::New)
        .collect();

    // Words sharing a meaning cannot serve as each other's distractors.
    let meanings: HashSet<&str> = testable.iter().map(|item| item.meaning.as_str()).collect();
    if meanings.len() < config.quiz_choices {
        return Err(SchedulerError::NotEnoughWords {
            required: config.quiz_choices,
            found: meanings.len(),
        });
    }

    testable.shuffle(rng);

    let questions: Vec<QuizQuestion> = testable
        .iter()
        .take(config.quiz_length)
        .filter_map(|item| question_for(item, &testable, config.quiz_choices, rng))
        .collect();

    tracing::debug!(questions = questions.len(), pool = pool.len(), "generated quiz");
    Ok(questions)
}

fn question_for<R: Rng + ?Sized>(
    item: &VocabularyItem,
    testable: &[&VocabularyItem],
    choices: usize,
    rng: &mut R,
) -> Option<QuizQuestion> {
    let mut distractors: Vec<&str> = testable
        .iter()
        .filter(|other| other.id != item.id && other.meaning != item.meaning)
        .map(|other| other.meaning.as_str())
        .collect();
    distractors.sort_unstable();
    distractors.dedup();
    if distractors.len() + 1 < choices {
        tracing::warn!(item = %item.id, "not enough distinct meanings for a question");
        return None;
    }
    distractors.shuffle(rng);
    distractors.truncate(choices.saturating_sub(1));

    let mut options: Vec<String> = distractors.into_iter().map(str::to_string).collect();
    options.push(item.meaning.clone());
    options.shuffle(rng);

    let correct_index = options
        .iter()
        .position(|option| *option == item.meaning)
        .unwrap_or_default();

    Some(QuizQuestion {
        item_id: item.id,
        word: item.word.clone(),
        options,
        correct_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MasteryLevel, NewWord};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn item(word: &str, meaning: &str, level: i64) -> VocabularyItem {
        let mut item = VocabularyItem::new(NewWord {
            word: word.to_string(),
            meaning: meaning.to_string(),
            ..Default::default()
        });
        item.mastery_level = MasteryLevel::clamped(level);
        item
    }

    fn pool(studied: usize) -> Vec<VocabularyItem> {
        let mut pool: Vec<_> = (0..studied)
            .map(|i| item(&format!("word-{i}"), &format!("meaning-{i}"), 1 + (i as i64 % 5)))
            .collect();
        pool.push(item("unseen", "never studied", 0));
        pool
    }

    #[test]
    fn test_requires_enough_studied_words() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = generate_quiz(&pool(3), &SchedulerConfig::default(), &mut rng);
        assert!(matches!(
            result,
            Err(SchedulerError::NotEnoughWords {
                required: 4,
                found: 3
            })
        ));
    }

    #[test]
    fn test_questions_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(2);
        let pool = pool(15);
        let quiz = generate_quiz(&pool, &SchedulerConfig::default(), &mut rng).unwrap();

        assert_eq!(quiz.len(), 10);
        let ids: HashSet<_> = quiz.iter().map(|q| q.item_id).collect();
        assert_eq!(ids.len(), 10);

        for question in &quiz {
            let item = pool.iter().find(|i| i.id == question.item_id).unwrap();
            assert_ne!(item.status(), WordStatus::New);
            assert_eq!(question.options.len(), 4);
            assert_eq!(question.options[question.correct_index], item.meaning);

            let unique: HashSet<_> = question.options.iter().collect();
            assert_eq!(unique.len(), 4);
        }
    }

    #[test]
    fn test_short_pool_gives_shorter_quiz() {
        let mut rng = StdRng::seed_from_u64(3);
        let quiz = generate_quiz(&pool(5), &SchedulerConfig::default(), &mut rng).unwrap();
        assert_eq!(quiz.len(), 5);
    }

    #[test]
    fn test_shared_meanings_do_not_count_as_choices() {
        let pool = vec![
            item("big", "large", 1),
            item("huge", "large", 2),
            item("small", "tiny", 1),
            item("little", "tiny", 3),
        ];
        let mut rng = StdRng::seed_from_u64(5);

        let result = generate_quiz(&pool, &SchedulerConfig::default(), &mut rng);
        assert!(matches!(
            result,
            Err(SchedulerError::NotEnoughWords {
                required: 4,
                found: 2
            })
        ));
    }

    #[test]
    fn test_duplicate_meanings_still_give_full_options() {
        let pool = vec![
            item("big", "large", 1),
            item("huge", "large", 2),
            item("small", "tiny", 1),
            item("little", "tiny", 3),
            item("fast", "quick", 2),
            item("slow", "unhurried", 4),
        ];
        let mut rng = StdRng::seed_from_u64(6);

        let quiz = generate_quiz(&pool, &SchedulerConfig::default(), &mut rng).unwrap();
        assert_eq!(quiz.len(), pool.len());
        for question in &quiz {
            let item = pool.iter().find(|i| i.id == question.item_id).unwrap();
            assert_eq!(question.options.len(), 4);
            assert_eq!(question.options[question.correct_index], item.meaning);
            let unique: HashSet<_> = question.options.iter().collect();
            assert_eq!(unique.len(), 4);
        }
    }

    #[test]
    fn test_answer_maps_to_grade() {
        let mut rng = StdRng::seed_from_u64(4);
        let quiz = generate_quiz(&pool(4), &SchedulerConfig::default(), &mut rng).unwrap();
        let question = &quiz[0];
        let wrong = (question.correct_index + 1) % question.options.len();

        assert!(question.is_correct(question.correct_index));
        assert_eq!(question.answer(question.correct_index), Grade::Ok);
        assert_eq!(question.answer(wrong), Grade::Difficult);
    }
}

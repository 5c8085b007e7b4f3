//! Quiz question selection.
//!
//! A quiz turn picks one question uniformly at random from the candidate set:
//! the questions inside the requested category scope whose ids the player has
//! not seen yet. An empty candidate set means the quiz is exhausted.

use std::collections::HashSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::types::DbId;

/// Category id the web client sends to mean "questions from every category".
pub const ANY_CATEGORY_ID: DbId = 0;

/// Which categories a quiz draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryScope {
    Any,
    Category(DbId),
}

impl CategoryScope {
    /// Interpret the client's category id, treating [`ANY_CATEGORY_ID`] as a wildcard.
    pub fn from_id(id: DbId) -> Self {
        if id == ANY_CATEGORY_ID {
            CategoryScope::Any
        } else {
            CategoryScope::Category(id)
        }
    }

    /// The concrete category filter, if any.
    pub fn category_id(self) -> Option<DbId> {
        match self {
            CategoryScope::Any => None,
            CategoryScope::Category(id) => Some(id),
        }
    }

    pub fn contains(self, category: DbId) -> bool {
        match self {
            CategoryScope::Any => true,
            CategoryScope::Category(id) => id == category,
        }
    }
}

/// Anything that can be served as a quiz question.
pub trait QuizCandidate {
    fn id(&self) -> DbId;
    fn category_id(&self) -> DbId;
}

/// Pick a random question in `scope` whose id is not in `previous`.
///
/// Returns `None` once every question in scope has been seen.
pub fn select_question<'a, T, R>(
    questions: &'a [T],
    scope: CategoryScope,
    previous: &HashSet<DbId>,
    rng: &mut R,
) -> Option<&'a T>
where
    T: QuizCandidate,
    R: Rng + ?Sized,
{
    let remaining: Vec<&T> = questions
        .iter()
        .filter(|q| scope.contains(q.category_id()) && !previous.contains(&q.id()))
        .collect();

    remaining.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        id: DbId,
        category: DbId,
    }

    impl QuizCandidate for Item {
        fn id(&self) -> DbId {
            self.id
        }

        fn category_id(&self) -> DbId {
            self.category
        }
    }

    fn pool() -> Vec<Item> {
        vec![
            Item { id: 5, category: 1 },
            Item { id: 7, category: 2 },
            Item { id: 9, category: 2 },
            Item { id: 16, category: 2 },
            Item { id: 20, category: 3 },
        ]
    }

    #[test]
    fn scope_zero_means_any_category() {
        assert_eq!(CategoryScope::from_id(0), CategoryScope::Any);
        assert_eq!(CategoryScope::from_id(4), CategoryScope::Category(4));
        assert_eq!(CategoryScope::Any.category_id(), None);
        assert_eq!(CategoryScope::Category(4).category_id(), Some(4));
    }

    #[test]
    fn only_unseen_question_in_category_is_chosen() {
        let questions = pool();
        let previous: HashSet<DbId> = [16, 7].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let picked = select_question(&questions, CategoryScope::Category(2), &previous, &mut rng)
                .expect("one candidate remains");
            assert_eq!(picked.id, 9);
        }
    }

    #[test]
    fn never_returns_a_previous_question() {
        let questions = pool();
        let previous: HashSet<DbId> = [5, 20].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let picked = select_question(&questions, CategoryScope::Any, &previous, &mut rng)
                .expect("candidates remain");
            assert!(!previous.contains(&picked.id));
        }
    }

    #[test]
    fn any_scope_reaches_every_category() {
        let questions = pool();
        let previous = HashSet::new();
        let mut rng = StdRng::seed_from_u64(1);

        let mut seen = HashSet::new();
        for _ in 0..500 {
            if let Some(q) = select_question(&questions, CategoryScope::Any, &previous, &mut rng) {
                seen.insert(q.category);
            }
        }
        assert_eq!(seen, [1, 2, 3].into_iter().collect());
    }

    #[test]
    fn exhausted_when_everything_seen() {
        let questions = pool();
        let previous: HashSet<DbId> = questions.iter().map(|q| q.id).collect();
        let mut rng = StdRng::seed_from_u64(3);

        assert!(select_question(&questions, CategoryScope::Any, &previous, &mut rng).is_none());
        assert!(
            select_question(&questions, CategoryScope::Category(2), &previous, &mut rng).is_none()
        );
    }

    #[test]
    fn unknown_category_is_exhausted() {
        let questions = pool();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(
            select_question(&questions, CategoryScope::Category(99), &HashSet::new(), &mut rng)
                .is_none()
        );
    }
}

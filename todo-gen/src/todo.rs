use log::debug;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};
use uuid::{Builder, Uuid};

use crate::catalog::QUOTES;

pub const DEFAULT_TODO_COUNT: usize = 200;

/// Column names, in the order [`TodoRecord`] serializes its fields.
pub const HEADER: [&str; 5] = ["id", "title", "description", "completed", "userId"];

#[allow(clippy::module_name_repetitions)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TodoRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub completed: bool,
    #[serde(rename = "userId")]
    pub user_id: String,
}

impl TodoRecord {
    #[must_use]
    pub fn new(
        id: Uuid,
        title: String,
        description: String,
        completed: bool,
        user_id: String,
    ) -> Self {
        TodoRecord {
            id,
            title,
            description,
            completed,
            user_id,
        }
    }

    /// Builds the `position`-th record (1-based) of a run with random id,
    /// description and completion flag.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R, position: usize, user_id: &str) -> Self {
        let id = Builder::from_random_bytes(rng.gen()).into_uuid();
        let description = QUOTES.choose(rng).copied().unwrap_or_default();
        TodoRecord::new(
            id,
            format!("Todo {position}"),
            description.to_owned(),
            rng.gen_bool(0.5),
            user_id.to_owned(),
        )
    }
}

/// Generates `count` todos for `user_id` using the thread-local RNG.
#[must_use]
pub fn generate_todos(user_id: &str, count: usize) -> Vec<TodoRecord> {
    generate_todos_with_rng(&mut thread_rng(), user_id, count)
}

#[must_use]
pub fn generate_todos_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    user_id: &str,
    count: usize,
) -> Vec<TodoRecord> {
    let todos: Vec<TodoRecord> = (1..=count)
        .map(|position| TodoRecord::random(rng, position, user_id))
        .collect();
    debug!("Generated {} todos for user {user_id:?}", todos.len());
    todos
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use uuid::Version;

    use super::*;

    #[test]
    fn test_generate_zero_todos() {
        assert!(generate_todos("nobody", 0).is_empty());
    }

    #[test]
    fn test_generate_todos_fields() {
        let todos = generate_todos("user-42", 3);
        assert_eq!(todos.len(), 3);

        let titles: Vec<&str> = todos.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Todo 1", "Todo 2", "Todo 3"]);
        for todo in &todos {
            assert_eq!(todo.user_id, "user-42");
            assert!(QUOTES.contains(&todo.description.as_str()));
            assert_eq!(todo.id.get_version(), Some(Version::Random));
        }
    }

    #[test]
    fn test_generate_todos_accepts_empty_user_id() {
        let todos = generate_todos("", 5);
        assert!(todos.iter().all(|t| t.user_id.is_empty()));
    }

    #[test]
    fn test_ids_are_unique() {
        let todos = generate_todos("user", 10_000);
        let ids: HashSet<Uuid> = todos.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), todos.len());
    }

    #[test]
    fn test_completed_is_roughly_fair() {
        let mut rng = StdRng::seed_from_u64(7);
        let todos = generate_todos_with_rng(&mut rng, "user", 10_000);
        let completed = todos.iter().filter(|t| t.completed).count();
        // 10 standard deviations either side of 5000
        assert!((4_500..=5_500).contains(&completed), "{completed} completed");
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let first = generate_todos_with_rng(&mut StdRng::seed_from_u64(42), "user", 20);
        let second = generate_todos_with_rng(&mut StdRng::seed_from_u64(42), "user", 20);
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_quote_is_reachable() {
        let mut rng = StdRng::seed_from_u64(1);
        let todos = generate_todos_with_rng(&mut rng, "user", 20_000);
        let used: HashSet<&str> = todos.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(used.len(), QUOTES.len());
    }
}

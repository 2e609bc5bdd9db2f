use super::storage::Storage;
use super::tasks::{read_stored_tasks, write_tasks, StoredTasks};
use crate::domain::{Task, TaskDate};
use anyhow::Result;

/// (id, due date, text, completed date)
const DEMO_TASKS: [(u64, &str, &str, Option<&str>); 5] = [
    (1, "2026-02-29", "Design the brutalist task board", Some("2026-02-28")),
    (2, "2026-03-01", "Build the interface", Some("2026-03-01")),
    (3, "2026-03-02", "Add task saving", Some("2026-03-02")),
    (4, "2026-03-03", "Add a read-only view mode for clients", None),
    (5, "2026-03-04", "Deploy the board", None),
];

/// The demo board shown on first run
pub fn demo_tasks() -> Vec<Task> {
    DEMO_TASKS
        .iter()
        .filter_map(|(id, date, text, completed_date)| {
            let date: TaskDate = date.parse().ok()?;
            let completed_date = match completed_date {
                Some(d) => Some(d.parse::<TaskDate>().ok()?),
                None => None,
            };
            Some(Task {
                id: *id,
                date,
                text: text.to_string(),
                completed: completed_date.is_some(),
                completed_date,
            })
        })
        .collect()
}

/// Store the demo board if storage holds nothing or an empty list.
///
/// Returns true when the demo tasks were written. Malformed content is left
/// in place.
pub fn seed_demo_tasks<S: Storage + ?Sized>(storage: &mut S, key: &str) -> Result<bool> {
    match read_stored_tasks(storage, key)? {
        StoredTasks::Missing => {}
        StoredTasks::Tasks(tasks) if tasks.is_empty() => {}
        StoredTasks::Tasks(_) => return Ok(false),
        StoredTasks::Malformed(reason) => {
            tracing::warn!(key, %reason, "Stored tasks are malformed, not seeding demo tasks");
            return Ok(false);
        }
    }

    write_tasks(storage, key, &demo_tasks())?;
    tracing::info!(key, "Seeded demo tasks");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::storage::MemoryStorage;
    use crate::persistence::tasks::parse_tasks;
    use pretty_assertions::assert_eq;

    fn stored(storage: &MemoryStorage) -> Vec<Task> {
        parse_tasks(storage.items.get("brutalTasks").unwrap()).unwrap()
    }

    #[test]
    fn test_demo_tasks_literal_dataset() {
        let tasks = demo_tasks();
        assert_eq!(tasks.len(), 5);
        assert_eq!(tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);

        let dates: Vec<String> = tasks.iter().map(|t| t.date.to_string()).collect();
        assert_eq!(dates, vec!["2026-02-29", "2026-03-01", "2026-03-02", "2026-03-03", "2026-03-04"]);

        let completed: Vec<Option<String>> = tasks
            .iter()
            .map(|t| t.completed_date.map(|d| d.to_string()))
            .collect();
        assert_eq!(
            completed,
            vec![
                Some("2026-02-28".to_string()),
                Some("2026-03-01".to_string()),
                Some("2026-03-02".to_string()),
                None,
                None,
            ]
        );
        assert!(tasks.iter().all(|t| t.completed == t.completed_date.is_some()));
    }

    #[test]
    fn test_seed_empty_storage() {
        let mut storage = MemoryStorage::default();
        assert!(seed_demo_tasks(&mut storage, "brutalTasks").unwrap());
        assert_eq!(stored(&storage), demo_tasks());
    }

    #[test]
    fn test_seed_empty_list() {
        let mut storage = MemoryStorage::default();
        storage.set_item("brutalTasks", "[]").unwrap();

        assert!(seed_demo_tasks(&mut storage, "brutalTasks").unwrap());
        assert_eq!(stored(&storage).len(), 5);
    }

    #[test]
    fn test_seed_keeps_existing_tasks() {
        let mut storage = MemoryStorage::default();
        let existing = vec![Task::new(9, "2026-05-01".parse().unwrap(), "Mine".to_string())];
        write_tasks(&mut storage, "brutalTasks", &existing).unwrap();

        assert!(!seed_demo_tasks(&mut storage, "brutalTasks").unwrap());
        assert_eq!(stored(&storage), existing);
    }

    #[test]
    fn test_seed_leaves_malformed_content() {
        let mut storage = MemoryStorage::default();
        storage.set_item("brutalTasks", "oops").unwrap();

        assert!(!seed_demo_tasks(&mut storage, "brutalTasks").unwrap());
        assert_eq!(storage.items.get("brutalTasks").map(String::as_str), Some("oops"));
    }
}

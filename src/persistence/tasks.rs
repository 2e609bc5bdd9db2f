use super::storage::Storage;
use crate::domain::Task;
use anyhow::{Context, Result};

/// What the storage currently holds under the task key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredTasks {
    /// Nothing was ever saved
    Missing,
    /// A readable list (possibly empty)
    Tasks(Vec<Task>),
    /// Content that does not parse as a task list
    Malformed(String),
}

/// Serialize the whole list the way it is stored
pub fn serialize_tasks(tasks: &[Task]) -> Result<String> {
    serde_json::to_string(tasks).context("Failed to serialize tasks")
}

/// Parse a stored task list
pub fn parse_tasks(content: &str) -> Result<Vec<Task>> {
    serde_json::from_str(content).context("Stored tasks are not a valid task list")
}

/// Read and classify the stored task list
pub fn read_stored_tasks<S: Storage + ?Sized>(storage: &S, key: &str) -> Result<StoredTasks> {
    let Some(content) = storage.get_item(key)? else {
        return Ok(StoredTasks::Missing);
    };

    Ok(match parse_tasks(&content) {
        Ok(tasks) => StoredTasks::Tasks(tasks),
        Err(e) => StoredTasks::Malformed(format!("{:#}", e)),
    })
}

/// Write the whole list under `key`
pub fn write_tasks<S: Storage + ?Sized>(storage: &mut S, key: &str, tasks: &[Task]) -> Result<()> {
    let content = serialize_tasks(tasks)?;
    storage.set_item(key, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskDate;
    use crate::persistence::storage::MemoryStorage;
    use pretty_assertions::assert_eq;

    fn sample_tasks() -> Vec<Task> {
        let mut done = Task::new(2, "2026-03-01".parse::<TaskDate>().unwrap(), "Done one".to_string());
        done.toggle("2026-03-02".parse().unwrap());
        vec![
            Task::new(3, "2026-03-05".parse().unwrap(), "Open one".to_string()),
            done,
        ]
    }

    #[test]
    fn test_write_then_read_reproduces_list() {
        let mut storage = MemoryStorage::default();
        let tasks = sample_tasks();

        write_tasks(&mut storage, "brutalTasks", &tasks).unwrap();
        let loaded = read_stored_tasks(&storage, "brutalTasks").unwrap();

        assert_eq!(loaded, StoredTasks::Tasks(tasks));
    }

    #[test]
    fn test_read_missing() {
        let storage = MemoryStorage::default();
        assert_eq!(read_stored_tasks(&storage, "brutalTasks").unwrap(), StoredTasks::Missing);
    }

    #[test]
    fn test_read_malformed() {
        let mut storage = MemoryStorage::default();
        storage.set_item("brutalTasks", "{not json").unwrap();

        let loaded = read_stored_tasks(&storage, "brutalTasks").unwrap();
        assert!(matches!(loaded, StoredTasks::Malformed(_)));
    }

    #[test]
    fn test_parse_original_layout() {
        let content = r#"[{"id":1772000000000,"date":"2026-03-10","text":"Call","completed":true,"completedDate":"2026-03-09"}]"#;
        let tasks = parse_tasks(content).unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, 1_772_000_000_000);
        assert!(tasks[0].completed);
        assert_eq!(tasks[0].completed_date.map(|d| d.to_string()).as_deref(), Some("2026-03-09"));
        assert_eq!(serialize_tasks(&tasks).unwrap(), content);
    }
}

//! Free-text task search

use super::model::Task;

impl Task {
    /// Case-insensitive substring match on title or description.
    ///
    /// `needle` must already be lowercased.
    fn contains_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.description.to_lowercase().contains(needle)
    }
}

/// Filter tasks by a search query, preserving order.
///
/// A blank query matches everything. Otherwise the trimmed query is matched
/// case-insensitively against title and description.
pub fn filter_by_query(tasks: &[Task], query: &str) -> Vec<Task> {
    let query = query.trim();
    if query.is_empty() {
        return tasks.to_vec();
    }

    let needle = query.to_lowercase();
    tasks
        .iter()
        .filter(|t| t.contains_lowercase(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Task> {
        vec![
            Task::new("Buy milk", "2% from the corner shop").with_id(1),
            Task::new("Write report", "Quarterly numbers").with_id(2),
            Task::new("Call mom", "Ask about the MILKshake recipe").with_id(3),
        ]
    }

    #[test]
    fn test_blank_query_returns_all() {
        let tasks = sample();
        assert_eq!(filter_by_query(&tasks, ""), tasks);
        assert_eq!(filter_by_query(&tasks, "   "), tasks);
    }

    #[test]
    fn test_matches_title_and_description_case_insensitively() {
        let found = filter_by_query(&sample(), "  Milk ");
        let ids: Vec<i64> = found.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_no_match() {
        assert!(filter_by_query(&sample(), "vacation").is_empty());
    }
}

//! In-memory query evaluator: filter then paginate, in insertion order.

use chrono::NaiveDate;

use crate::model::{Priority, Task};

/// Optional filters plus paging. Absent (or blank-title) filters match
/// everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub page: i64,
    pub size: i64,
}

impl Default for SearchQuery {
    fn default() -> Self {
        SearchQuery {
            title: None,
            date: None,
            priority: None,
            page: 0,
            size: 20,
        }
    }
}

/// Pure and total: never fails, never mutates. Title matching is a
/// case-insensitive substring test; date and priority are exact. `size`
/// is coerced to at least 1, `page` to at least 0; a page past the end
/// just comes back empty.
pub fn search<'a>(tasks: &'a [Task], query: &SearchQuery) -> Vec<&'a Task> {
    let size = query.size.max(1) as usize;
    let skip = query.page.max(0) as usize * size;
    let needle = query
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase);

    tasks
        .iter()
        .filter(|t| match &needle {
            Some(n) => t.title.to_lowercase().contains(n.as_str()),
            None => true,
        })
        .filter(|t| query.date.map_or(true, |d| t.date == d))
        .filter(|t| query.priority.map_or(true, |p| t.priority == p))
        .skip(skip)
        .take(size)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64, title: &str, date: (i32, u32, u32), priority: Priority) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            end_date: None,
            priority,
        }
    }

    fn fixture() -> Vec<Task> {
        // Urgent-important at insertion indices 0, 2 and 4
        vec![
            task(1, "Write report", (2025, 8, 1), Priority::UrgentImportant),
            task(2, "Water plants", (2025, 8, 1), Priority::NotUrgentNotImportant),
            task(3, "Pay taxes", (2025, 8, 2), Priority::UrgentImportant),
            task(4, "Read a book", (2025, 8, 3), Priority::NotUrgentImportant),
            task(5, "Fix the leak", (2025, 8, 3), Priority::UrgentImportant),
        ]
    }

    #[test]
    fn test_no_filters_returns_page_of_everything() {
        let tasks = fixture();
        let found = search(&tasks, &SearchQuery::default());
        assert_eq!(found.len(), 5);
        // Insertion order preserved
        assert_eq!(found[0].id, 1);
        assert_eq!(found[4].id, 5);
    }

    #[test]
    fn test_priority_filter_with_paging() {
        let tasks = fixture();
        let query = SearchQuery {
            priority: Some(Priority::UrgentImportant),
            page: 1,
            size: 2,
            ..Default::default()
        };
        // Three matches; page 1 of size 2 holds exactly the third
        let found = search(&tasks, &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 5);
    }

    #[test]
    fn test_title_filter_is_case_insensitive_substring() {
        let tasks = fixture();
        let query = SearchQuery {
            title: Some("WATER".to_string()),
            ..Default::default()
        };
        let found = search(&tasks, &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);

        let query = SearchQuery {
            title: Some("a".to_string()),
            ..Default::default()
        };
        assert_eq!(search(&tasks, &query).len(), 5);
    }

    #[test]
    fn test_blank_title_filter_is_skipped() {
        let tasks = fixture();
        let query = SearchQuery {
            title: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(search(&tasks, &query).len(), 5);
    }

    #[test]
    fn test_date_filter_is_exact() {
        let tasks = fixture();
        let query = SearchQuery {
            date: NaiveDate::from_ymd_opt(2025, 8, 1),
            ..Default::default()
        };
        let found = search(&tasks, &query);
        assert_eq!(found.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_filters_combine() {
        let tasks = fixture();
        let query = SearchQuery {
            title: Some("t".to_string()),
            date: NaiveDate::from_ymd_opt(2025, 8, 1),
            priority: Some(Priority::UrgentImportant),
            ..Default::default()
        };
        let found = search(&tasks, &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn test_size_and_page_are_coerced() {
        let tasks = fixture();
        let query = SearchQuery {
            page: -3,
            size: 0,
            ..Default::default()
        };
        // size 0 becomes 1, page -3 becomes 0
        let found = search(&tasks, &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 1);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let tasks = fixture();
        let query = SearchQuery {
            page: 99,
            size: 10,
            ..Default::default()
        };
        assert!(search(&tasks, &query).is_empty());
    }
}

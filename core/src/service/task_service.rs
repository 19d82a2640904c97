use chrono::NaiveDate;

use crate::error::TaskError;
use crate::input;
use crate::model::Task;
use crate::query::{self, SearchQuery};
use crate::repository::TaskRepository;
use crate::time;

/// Workflow layer over a repository: raw input in, persisted tasks out.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Parse `title|description|date-or-range|priority`, fill the
    /// defaults (today's date, empty text, the default quadrant) and
    /// persist. A bad date rejects the input; nothing is stored.
    pub fn insert(&self, raw: &str) -> Result<Task, TaskError> {
        let draft = input::parse_input(raw)?;
        let task = draft.into_task(time::today());
        Ok(self.repo.create(task)?)
    }

    /// Parse the same grammar and merge it over an existing task: blank
    /// segments keep the old values. The input is parsed before the task
    /// is looked up, so a bad date never touches the store.
    pub fn edit(&self, id: u64, raw: &str) -> Result<Task, TaskError> {
        let draft = input::parse_input(raw)?;
        let existing = self.repo.get(id)?;
        let updated = draft.merge_into(&existing);
        self.repo.update(&updated)?;
        Ok(updated)
    }

    pub fn delete(&self, id: u64) -> Result<Task, TaskError> {
        Ok(self.repo.delete(id)?)
    }

    pub fn delete_by_date(&self, date: NaiveDate) -> Result<Vec<Task>, TaskError> {
        Ok(self.repo.delete_by_date(date)?)
    }

    pub fn list(&self) -> Result<Vec<Task>, TaskError> {
        Ok(self.repo.list()?)
    }

    pub fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Task>, TaskError> {
        Ok(self.repo.find_by_date(date)?)
    }

    /// Load everything and run the pure evaluator over it.
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<Task>, TaskError> {
        let tasks = self.repo.list()?;
        Ok(query::search(&tasks, query).into_iter().cloned().collect())
    }
}

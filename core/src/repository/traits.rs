use chrono::NaiveDate;

use crate::error::StoreError;
use crate::model::Task;

pub trait TaskRepository {
    /// Persist a new task. The repository assigns the id; whatever id the
    /// incoming task carries is ignored.
    fn create(&self, task: Task) -> Result<Task, StoreError>;
    fn get(&self, id: u64) -> Result<Task, StoreError>;
    fn list(&self) -> Result<Vec<Task>, StoreError>;
    fn update(&self, task: &Task) -> Result<(), StoreError>;
    /// Delete by id and return the removed task.
    fn delete(&self, id: u64) -> Result<Task, StoreError>;
    /// Delete every task whose primary date matches and return them.
    /// Matching nothing is an error, not a silent success.
    fn delete_by_date(&self, date: NaiveDate) -> Result<Vec<Task>, StoreError>;
    fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Task>, StoreError>;
}

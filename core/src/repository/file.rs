use std::cell::Cell;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::codec;
use crate::error::StoreError;
use crate::model::Task;
use crate::repository::traits::TaskRepository;

const DEFAULT_FILE_NAME: &str = "tasks.db";

/// Flat-file store: one encoded line per task, whole-file rewrite on
/// every mutation. Single-threaded by design; a host with concurrent
/// callers must serialize access around each read-modify-write cycle.
pub struct FileTaskRepository {
    file_path: PathBuf,
    // Next id to hand out. Seeded from the store on open and only ever
    // incremented, so ids are not reused after deletes.
    next_id: Cell<u64>,
}

impl FileTaskRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".quadrant")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(DEFAULT_FILE_NAME);
        if !path.exists() {
            File::create(&path)?;
        }

        let repo = FileTaskRepository {
            file_path: path,
            next_id: Cell::new(1),
        };
        let max_seen = repo.read_tasks()?.iter().map(|t| t.id).max().unwrap_or(0);
        repo.next_id.set(max_seen + 1);
        Ok(repo)
    }

    fn read_tasks(&self) -> Result<Vec<Task>, StoreError> {
        let content = fs::read_to_string(&self.file_path)?;
        let mut tasks = Vec::new();
        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            // Undecodable lines are dropped; the rest of the store still loads.
            if let Ok(task) = codec::decode_line(line) {
                tasks.push(task);
            }
        }
        Ok(tasks)
    }

    fn write_tasks(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        for task in tasks {
            writeln!(writer, "{}", codec::encode_line(task))?;
        }
        writer.flush()?;
        Ok(())
    }

    fn allocate_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }
}

impl TaskRepository for FileTaskRepository {
    fn create(&self, mut task: Task) -> Result<Task, StoreError> {
        let mut tasks = self.read_tasks()?;
        task.id = self.allocate_id();
        tasks.push(task.clone());
        self.write_tasks(&tasks)?;
        Ok(task)
    }

    fn get(&self, id: u64) -> Result<Task, StoreError> {
        self.read_tasks()?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    fn list(&self) -> Result<Vec<Task>, StoreError> {
        self.read_tasks()
    }

    fn update(&self, task: &Task) -> Result<(), StoreError> {
        let mut tasks = self.read_tasks()?;
        let pos = tasks
            .iter()
            .position(|t| t.id == task.id)
            .ok_or(StoreError::NotFound(task.id))?;
        tasks[pos] = task.clone();
        self.write_tasks(&tasks)
    }

    fn delete(&self, id: u64) -> Result<Task, StoreError> {
        let mut tasks = self.read_tasks()?;
        let pos = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let removed = tasks.remove(pos);
        self.write_tasks(&tasks)?;
        Ok(removed)
    }

    fn delete_by_date(&self, date: NaiveDate) -> Result<Vec<Task>, StoreError> {
        let tasks = self.read_tasks()?;
        let (removed, kept): (Vec<Task>, Vec<Task>) =
            tasks.into_iter().partition(|t| t.date == date);
        if removed.is_empty() {
            return Err(StoreError::NoTasksOnDate(date));
        }
        self.write_tasks(&kept)?;
        Ok(removed)
    }

    fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Task>, StoreError> {
        Ok(self
            .read_tasks()?
            .into_iter()
            .filter(|t| t.date == date)
            .collect())
    }
}

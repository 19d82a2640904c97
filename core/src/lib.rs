pub mod codec;
pub mod error;
pub mod input;
pub mod model;
pub mod query;
pub mod repository;
pub mod service;
pub mod time;

pub use error::{DecodeError, ParseError, StoreError, TaskError};
pub use input::{parse_input, TaskDraft};
pub use model::{DateRange, Priority, Task, FOREVER};
pub use query::{search, SearchQuery};
pub use repository::{FileTaskRepository, TaskRepository};
pub use service::TaskService;
pub use time::{parse_date, today};

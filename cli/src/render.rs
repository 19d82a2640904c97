use anyhow::Result;
use quadrant_core::{codec, Task};
use tabled::settings::Style;
use tabled::{Table, Tabled};

// Helper struct for Table Row
#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl TaskRow {
    fn from_task(task: &Task) -> Self {
        let date = match task.end_date {
            Some(end) => format!("{} > {}", task.date, end),
            None => task.date.to_string(),
        };
        TaskRow {
            id: task.id,
            title: task.title.clone(),
            date,
            priority: task.priority.to_string(),
            description: task.description.clone(),
        }
    }
}

pub fn print_task(task: &Task, json: bool) -> Result<()> {
    if json {
        println!("{}", codec::to_json(task)?);
        return Ok(());
    }
    print_table(std::slice::from_ref(task));
    Ok(())
}

pub fn print_tasks(tasks: &[Task], json: bool) -> Result<()> {
    if json {
        println!("{}", codec::to_json_array(tasks)?);
        return Ok(());
    }
    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }
    print_table(tasks);
    Ok(())
}

fn print_table(tasks: &[Task]) {
    let rows: Vec<TaskRow> = tasks.iter().map(TaskRow::from_task).collect();
    let mut table = Table::new(rows);
    table.with(Style::modern());
    println!("{}", table);
}

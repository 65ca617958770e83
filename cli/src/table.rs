use tabled::settings::Style;
use tabled::{Table, Tabled};
use taskboard_core::{format_date_info, RecurrenceSet, Task};

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Repeats")]
    repeats: String,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Flags")]
    flags: String,
}

impl TaskRow {
    fn from_task(task: &Task) -> Self {
        let due = task
            .due_date
            .map(format_date_info)
            .unwrap_or_else(|| "-".to_string());

        let repeats = if task.repeating_days.is_repeating() {
            task.repeating_days
                .active_days()
                .iter()
                .map(|d| RecurrenceSet::day_key(*d))
                .collect::<Vec<_>>()
                .join(" ")
        } else {
            "-".to_string()
        };

        let mut flags = Vec::new();
        if task.is_favorite {
            flags.push("fav");
        }
        if task.is_archived {
            flags.push("arch");
        }

        Self {
            id: short_id(&task.id).to_string(),
            description: task.description.clone(),
            due,
            repeats,
            color: task.color.as_str().to_string(),
            flags: flags.join(","),
        }
    }
}

pub fn render(tasks: &[Task]) -> String {
    let rows: Vec<TaskRow> = tasks.iter().map(TaskRow::from_task).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

fn short_id(id: &str) -> &str {
    if id.len() > 8 {
        &id[..8]
    } else {
        id
    }
}

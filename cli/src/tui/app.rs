use chrono::NaiveDate;
use ratatui::widgets::TableState;
use taskboard_core::{
    derive_view, today, BoardService, Category, CategoryCounts, HttpTaskStore, SortOrder, Task,
    TaskDraft,
};

pub enum InputMode {
    Normal,
    /// One-line prompt for a new task.
    Adding,
    /// One-line prompt applying deltas to the task with this id.
    Editing(String),
}

pub struct App {
    pub service: BoardService<HttpTaskStore>,
    /// Last successfully fetched snapshot; survives failed refreshes.
    pub tasks: Vec<Task>,
    /// The calendar day the current view was derived for.
    pub today: NaiveDate,
    pub category: Category,
    pub order: SortOrder,
    /// Sorted-then-filtered slice of the snapshot, what the table renders.
    pub visible: Vec<Task>,
    pub counts: CategoryCounts,
    pub state: TableState,
    pub input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub status: Option<String>,
}

impl App {
    pub fn new(service: BoardService<HttpTaskStore>) -> App {
        let mut app = App {
            service,
            tasks: Vec::new(),
            today: today(),
            category: Category::All,
            order: SortOrder::default(),
            visible: Vec::new(),
            counts: CategoryCounts::default(),
            state: TableState::default(),
            input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            status: None,
        };
        app.refresh();
        app
    }

    /// Re-fetches the snapshot. On a transport failure the old snapshot
    /// stays on screen and the failure shows up as a notification.
    pub fn refresh(&mut self) {
        match self.service.fetch() {
            Ok(tasks) => self.tasks = tasks,
            Err(err) => self.status = Some(format!("Something went wrong: {:#}", err)),
        }
        self.rebuild();
    }

    /// Rederives the visible list and badge counts from the snapshot,
    /// against a fresh "today".
    pub fn rebuild(&mut self) {
        self.today = today();
        self.visible = derive_view(&self.tasks, Some(self.category), self.order, self.today);
        self.counts = CategoryCounts::tally(&self.tasks, self.today);

        // Adjust selection to the new list
        if self.visible.is_empty() {
            self.state.select(None);
        } else {
            let i = self.state.selected().unwrap_or(0);
            self.state.select(Some(i.min(self.visible.len() - 1)));
        }
    }

    /// Poll-loop tick: reclassify when the calendar day rolls over.
    pub fn tick(&mut self) {
        if today() != self.today {
            self.rebuild();
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.state.selected().and_then(|i| self.visible.get(i))
    }

    pub fn next(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= self.visible.len() - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.visible.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    /// Moves the category selection left/right along the tab row, skipping
    /// tabs whose badge count is zero (they are disabled, like greyed-out
    /// navigation buttons).
    pub fn cycle_category(&mut self, forward: bool) {
        let tabs = Category::ALL;
        let len = tabs.len();
        let current = tabs.iter().position(|c| *c == self.category).unwrap_or(0);

        let mut i = current;
        for _ in 0..len {
            i = if forward { (i + 1) % len } else { (i + len - 1) % len };
            if !self.counts.is_empty(tabs[i]) {
                self.category = tabs[i];
                self.state.select(Some(0));
                self.rebuild();
                return;
            }
        }
    }

    pub fn toggle_sort(&mut self) {
        self.order = self.order.toggled();
        self.rebuild();
    }

    pub fn toggle_favorite(&mut self) {
        if let Some(task) = self.selected_task().cloned() {
            match self.service.toggle_favorite(&task) {
                Ok(updated) => {
                    self.status = Some(if updated.is_favorite {
                        "Task added to favorites".to_string()
                    } else {
                        "Task removed from favorites".to_string()
                    });
                    self.refresh();
                }
                Err(err) => self.status = Some(format!("Something went wrong: {:#}", err)),
            }
        }
    }

    pub fn toggle_archived(&mut self) {
        if let Some(task) = self.selected_task().cloned() {
            match self.service.toggle_archived(&task) {
                Ok(updated) => {
                    self.status = Some(if updated.is_archived {
                        "Task archived".to_string()
                    } else {
                        "Task unarchived".to_string()
                    });
                    self.refresh();
                }
                Err(err) => self.status = Some(format!("Something went wrong: {:#}", err)),
            }
        }
    }

    pub fn delete_task(&mut self) {
        if let Some(task) = self.selected_task().cloned() {
            match self.service.delete_task(&task.id) {
                Ok(ack) => {
                    self.status = Some(ack.message);
                    self.refresh();
                }
                Err(err) => self.status = Some(format!("Something went wrong: {:#}", err)),
            }
        }
    }

    pub fn enter_add_mode(&mut self) {
        self.input_mode = InputMode::Adding;
        self.input.clear();
        self.cursor_position = 0;
        self.status = None;
    }

    pub fn enter_edit_mode(&mut self) {
        if let Some(task) = self.selected_task() {
            self.input_mode = InputMode::Editing(task.id.clone());
            self.input.clear();
            self.cursor_position = 0;
            self.status = None;
        }
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn submit_command(&mut self) {
        if self.input.trim().is_empty() {
            self.exit_input_mode();
            return;
        }

        let args: Vec<String> = self
            .input
            .split_whitespace()
            .map(|s| s.to_string())
            .collect();

        match std::mem::replace(&mut self.input_mode, InputMode::Normal) {
            InputMode::Adding => self.submit_add(&args),
            InputMode::Editing(id) => self.submit_edit(&id, &args),
            InputMode::Normal => {}
        }

        self.input.clear();
        self.cursor_position = 0;
    }

    fn submit_add(&mut self, args: &[String]) {
        let draft = match TaskDraft::from_tokens(args, today()) {
            Ok(draft) => draft,
            Err(err) => {
                self.status = Some(format!("{:#}", err));
                return;
            }
        };
        match self.service.create_task(&draft, today()) {
            Ok(_) => {
                self.status = Some("Task added".to_string());
                self.refresh();
                if !self.visible.is_empty() {
                    self.state.select(Some(0));
                }
            }
            Err(err) => self.status = Some(format!("{:#}", err)),
        }
    }

    fn submit_edit(&mut self, id: &str, args: &[String]) {
        let Some(task) = self.tasks.iter().find(|t| t.id == id) else {
            self.status = Some("Task is gone; refresh and retry".to_string());
            return;
        };

        let mut draft = TaskDraft::from_task(task);
        if let Err(err) = draft.apply_tokens(args, today()) {
            self.status = Some(format!("{:#}", err));
            return;
        }
        match self.service.apply_edit(id, &draft, today()) {
            Ok(_) => {
                self.status = Some("Task updated".to_string());
                self.refresh();
            }
            Err(err) => self.status = Some(format!("{:#}", err)),
        }
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self
            .input
            .chars()
            .take(self.cursor_position)
            .map(|c| c.len_utf8())
            .sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self
                .input
                .chars()
                .take(self.cursor_position - 1)
                .map(|c| c.len_utf8())
                .sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }
}

//! Console logger with dry-run awareness and summary collection.

/// Task execution result for summary reporting.
#[derive(Debug, Clone)]
pub struct TaskEntry {
    /// Human-readable task name.
    pub name: String,
    /// Final status of the task.
    pub status: TaskStatus,
    /// Optional context message (skip reason, error text).
    pub message: Option<String>,
}

/// Status of a completed task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    /// Task ran and succeeded.
    Ok,
    /// Task was not applicable to this run.
    NotApplicable,
    /// Task was skipped with a reason.
    Skipped,
    /// Task previewed its changes without applying them.
    DryRun,
    /// Task failed.
    Failed,
}

/// Structured logger with dry-run awareness and summary collection.
///
/// Writes ANSI-colored output to the terminal and records per-task results
/// for an end-of-run summary.
#[derive(Debug)]
pub struct Logger {
    verbose: bool,
    tasks: std::cell::RefCell<Vec<TaskEntry>>,
}

impl Logger {
    /// Create a logger; `verbose` enables debug-channel output.
    #[must_use]
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            tasks: std::cell::RefCell::new(Vec::new()),
        }
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        eprintln!("\x1b[31mERROR\x1b[0m {msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        eprintln!("\x1b[33mWARN\x1b[0m  {msg}");
    }

    /// Log a stage heading.
    pub fn stage(&self, msg: &str) {
        println!("\x1b[1;34m==>\x1b[0m \x1b[1m{msg}\x1b[0m");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        println!("  {msg}");
    }

    /// Log a debug message (only shown when verbose).
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            println!("  \x1b[2m{msg}\x1b[0m");
        }
    }

    /// Log a dry-run preview message.
    pub fn dry_run(&self, msg: &str) {
        println!("  \x1b[33m[DRY RUN]\x1b[0m {msg}");
    }

    /// Record a task result for the summary.
    pub fn record_task(&self, name: &str, status: TaskStatus, message: Option<&str>) {
        self.tasks.borrow_mut().push(TaskEntry {
            name: name.to_string(),
            status,
            message: message.map(String::from),
        });
    }

    /// Number of recorded tasks that failed.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.tasks
            .borrow()
            .iter()
            .filter(|t| t.status == TaskStatus::Failed)
            .count()
    }

    /// Whether any recorded task failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }

    /// Print the summary of all recorded tasks.
    pub fn print_summary(&self) {
        let tasks = self.tasks.borrow();
        if tasks.is_empty() {
            return;
        }

        println!();
        self.stage("Summary");

        let mut ok = 0u32;
        let mut not_applicable = 0u32;
        let mut skipped = 0u32;
        let mut dry_run = 0u32;
        let mut failed = 0u32;

        for task in tasks.iter() {
            let (icon, color) = match task.status {
                TaskStatus::Ok => {
                    ok += 1;
                    ("✓", "\x1b[32m")
                }
                TaskStatus::NotApplicable => {
                    not_applicable += 1;
                    ("·", "\x1b[2m")
                }
                TaskStatus::Skipped => {
                    skipped += 1;
                    ("○", "\x1b[33m")
                }
                TaskStatus::DryRun => {
                    dry_run += 1;
                    ("~", "\x1b[33m")
                }
                TaskStatus::Failed => {
                    failed += 1;
                    ("✗", "\x1b[31m")
                }
            };

            let suffix = match &task.message {
                Some(msg) => format!(" ({msg})"),
                None => String::new(),
            };

            println!("  {color}{icon} {}{suffix}\x1b[0m", task.name);
        }

        println!();
        let total = ok + not_applicable + skipped + dry_run + failed;
        println!(
            "  {total} tasks: \x1b[32m{ok} ok\x1b[0m, {not_applicable} n/a, \x1b[33m{skipped} skipped\x1b[0m, {dry_run} dry-run, \x1b[31m{failed} failed\x1b[0m"
        );
    }
}

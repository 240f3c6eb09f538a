//! Utility module running batches of theme generation tasks.
//!
//! A [`Task`] generates the theme for one palette [`Variant`] from one
//! [`BaseTheme`] document. [`TASKS`] is the fixed list of all tasks, and
//! [`run`] executes the tasks selected by some [`Options`]. Tasks share
//! nothing but the output directory, so a failing task does not stop the
//! others. The resulting [`BatchReport`] collects successes and failures
//! alike.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ThemeError, ThemeErrorKind};
use crate::opt::Options;
use crate::palette::{PaletteData, Variant};
use crate::transform::transform;

/// A base theme, i.e., a source document with the editor's default colors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BaseTheme {
    Dark,
    Light,
}

impl BaseTheme {
    /// Get the base theme's name, which doubles as file stem.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

impl std::fmt::Display for BaseTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A theme generation task.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Task {
    variant: Variant,
    source: BaseTheme,
}

/// All theme generation tasks. Light variants derive from the light base
/// theme, dark variants from the dark one.
pub const TASKS: [Task; 4] = [
    Task::new(Variant::Mocha, BaseTheme::Dark),
    Task::new(Variant::Macchiato, BaseTheme::Dark),
    Task::new(Variant::Frappe, BaseTheme::Dark),
    Task::new(Variant::Latte, BaseTheme::Light),
];

impl Task {
    /// Create a new task.
    pub const fn new(variant: Variant, source: BaseTheme) -> Self {
        Self { variant, source }
    }

    /// Get the palette variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Get the base theme.
    pub fn source(&self) -> BaseTheme {
        self.source
    }

    /// Get the path of the source document in the input directory.
    pub fn source_path(&self, input_dir: &Path) -> PathBuf {
        input_dir.join(format!("{}.xml", self.source.name()))
    }

    /// Get the path of the generated theme in the output directory.
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("Catppuccin_{}.xml", self.variant.name()))
    }

    /// Run this task.
    ///
    /// This method reads the source document, remaps its colors onto the
    /// variant's palette, and writes the result. The output directory must
    /// exist. Upon success, this method returns the path of the generated
    /// theme. Upon failure, it does not write anything.
    pub fn run(&self, data: &PaletteData, options: &Options) -> Result<PathBuf, ThemeError> {
        let palette = data.palette(self.variant)?;

        let source = self.source_path(options.input_dir());
        debug!(path = %source.display(), "reading source document");
        let document = std::fs::read_to_string(&source)
            .map_err(|e| ThemeError::new(ThemeErrorKind::ReadSource, Box::new(e)))?;

        let theme = transform(&document, &palette, options.format())?;

        let output = self.output_path(options.output_dir());
        debug!(path = %output.display(), "writing generated theme");
        std::fs::write(&output, theme)
            .map_err(|e| ThemeError::new(ThemeErrorKind::WriteOutput, Box::new(e)))?;

        Ok(output)
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} from {}", self.variant, self.source)
    }
}

// ====================================================================================================================

/// A failed task and its error.
#[derive(Debug)]
pub struct TaskFailure {
    task: Task,
    error: ThemeError,
}

impl TaskFailure {
    /// Get the task.
    pub fn task(&self) -> Task {
        self.task
    }

    /// Get the error.
    pub fn error(&self) -> &ThemeError {
        &self.error
    }
}

impl std::fmt::Display for TaskFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.task, self.error)?;

        let mut source = std::error::Error::source(&self.error);
        while let Some(error) = source {
            write!(f, ": {}", error)?;
            source = error.source();
        }
        Ok(())
    }
}

/// The outcome of a batch of tasks.
#[derive(Debug, Default)]
pub struct BatchReport {
    completed: Vec<(Task, PathBuf)>,
    failed: Vec<TaskFailure>,
}

impl BatchReport {
    fn record(&mut self, task: Task, result: Result<PathBuf, ThemeError>) {
        match result {
            Ok(path) => {
                info!(%task, path = %path.display(), "generated theme");
                self.completed.push((task, path));
            }
            Err(error) => {
                let failure = TaskFailure { task, error };
                warn!("{}", failure);
                self.failed.push(failure);
            }
        }
    }

    /// Get the completed tasks with the paths of their generated themes.
    pub fn completed(&self) -> &[(Task, PathBuf)] {
        &self.completed
    }

    /// Get the failed tasks.
    pub fn failed(&self) -> &[TaskFailure] {
        &self.failed
    }

    /// Determine whether all tasks completed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run the tasks selected by the options.
///
/// This function loads the palette data and creates the output directory
/// before running any task. Failing either is fatal for the entire batch.
/// After that, every selected task runs, sequentially or in parallel, and the
/// report records its outcome. Reports list tasks in [`TASKS`] order, no
/// matter the order of completion.
pub fn run(options: &Options) -> Result<BatchReport, ThemeError> {
    let data = match options.palette_file() {
        Some(path) => PaletteData::from_path(path)?,
        None => PaletteData::builtin(),
    };

    let output_dir = options.output_dir();
    std::fs::create_dir_all(output_dir)
        .map_err(|e| ThemeError::new(ThemeErrorKind::CreateOutput, Box::new(e)))?;

    let tasks: Vec<Task> = TASKS
        .iter()
        .filter(|task| options.includes(task.variant))
        .copied()
        .collect();
    info!(
        tasks = tasks.len(),
        parallel = options.parallel(),
        output = %output_dir.display(),
        "running theme generation"
    );

    let mut report = BatchReport::default();
    if options.parallel() {
        let data = &data;
        let results: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = tasks
                .iter()
                .map(|task| {
                    scope.spawn(move || {
                        info!(%task, "generating theme");
                        task.run(data, options)
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
                })
                .collect()
        });

        for (task, result) in tasks.into_iter().zip(results) {
            report.record(task, result);
        }
    } else {
        for task in tasks {
            info!(%task, "generating theme");
            let result = task.run(&data, options);
            report.record(task, result);
        }
    }

    Ok(report)
}

// ====================================================================================================================

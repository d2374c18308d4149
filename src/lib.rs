//! # Logscribe
//!
//! Logscribe is a pluggable file sink for structured log events. Each event
//! carries a category, a severity, a message, and an optional error, and is
//! appended to a file on disk. Output can be organized into per-category
//! directory trees and per-severity files, rotated by size, and written safely
//! from any number of concurrent logger instances: writers targeting the same
//! file serialize through a per-path lock, so entries are never interleaved or
//! lost. **Logscribe also plugs into the `log` facade**, so `log::info!` and
//! friends can be routed straight to categorized files.
//!
//!
//! ## Example
//!
//! ```rust
//! use logscribe::{FileLoggerBuilder, Severity};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = FileLoggerBuilder::new("./logs")
//!         .min_severity(Severity::Debug)
//!         .separate_by_severity(true) // One file per severity, e.g. Warning.log
//!         .max_file_size(10 * 1024 * 1024) // Roll files over at 10 MB
//!         .build()?;
//!
//!     let logger = provider.create_logger("Services.UserService");
//!     logger.log_message(Severity::Information, "user 42 signed in")?;
//!     logger.log_message(Severity::Warning, "session cache is cold")?;
//!
//!     provider.close();
//!     # std::fs::remove_dir_all("./logs").ok();
//!     Ok(())
//! }
//! ```
use {
    chrono::{format::StrftimeItems, DateTime, Local},
    std::{
        collections::HashMap,
        error::Error as StdError,
        fmt,
        fs::{self, OpenOptions},
        io::Write as _,
        path::{Path, PathBuf},
        sync::{Arc, Mutex, PoisonError},
    },
};

/// The highest rolled-file counter tried before rotation gives up.
const MAX_ROLL_ATTEMPTS: u32 = 999;

/// Severity of a log event, ordered from least to most severe.
///
/// The ordering is total: `Trace < Debug < Information < Warning < Error <
/// Critical < None`. A logger is enabled for a severity when it is at or above
/// the configured [`FileLoggerConfig::min_severity`]. `None` sits above every
/// real severity and exists purely as a filter bound; setting it as the
/// minimum disables the logger entirely.
///
/// # Examples
/// ```
/// use logscribe::Severity;
///
/// assert!(Severity::Warning > Severity::Information);
/// assert!(Severity::Trace < Severity::Critical);
/// assert_eq!(Severity::Warning.as_str(), "Warning");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Most detailed diagnostics, usually only enabled while debugging.
    Trace,
    /// Developer-facing diagnostics.
    Debug,
    /// Normal application flow. The default minimum severity.
    Information,
    /// Something unexpected that did not stop the current operation.
    Warning,
    /// The current operation failed.
    Error,
    /// The application cannot continue.
    Critical,
    /// Not a writable severity; used as a minimum to disable all output.
    None,
}

impl Severity {
    /// The capitalized severity name as used in file names
    /// (e.g. `Information.log`).
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Trace => "Trace",
            Severity::Debug => "Debug",
            Severity::Information => "Information",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Critical => "Critical",
            Severity::None => "None",
        }
    }

    /// Map onto the `log` facade's level filter when installing a provider as
    /// the global logger. `Critical` collapses onto `Error` since the facade
    /// has no level above it.
    fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Severity::Trace => log::LevelFilter::Trace,
            Severity::Debug => log::LevelFilter::Debug,
            Severity::Information => log::LevelFilter::Info,
            Severity::Warning => log::LevelFilter::Warn,
            Severity::Error | Severity::Critical => log::LevelFilter::Error,
            Severity::None => log::LevelFilter::Off,
        }
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Severity::Error,
            log::Level::Warn => Severity::Warning,
            log::Level::Info => Severity::Information,
            log::Level::Debug => Severity::Debug,
            log::Level::Trace => Severity::Trace,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A custom file naming rule: `(category, severity, timestamp) -> file name`.
///
/// When set on a [`FileLoggerConfig`], the rule's result is used verbatim as
/// the file name, overriding both severity-based and date-based naming. The
/// rule must be pure; it is called on every log write.
pub type FileNameRule = Arc<dyn Fn(&str, Severity, DateTime<Local>) -> String + Send + Sync>;

/// Configuration for the file logger.
///
/// Built once at startup, validated eagerly, then shared read-only by every
/// logger the provider hands out. Prefer [`FileLoggerBuilder`] over filling
/// the fields by hand.
///
/// # Examples
/// ```
/// use logscribe::{FileLoggerConfig, Severity};
///
/// let config = FileLoggerConfig {
///     root_path: "./logs".into(),
///     min_severity: Severity::Warning,
///     ..FileLoggerConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone)]
pub struct FileLoggerConfig {
    /// The directory under which all log files are created.
    pub root_path: PathBuf,
    /// strftime format for date-based file names (e.g. `"%Y-%m-%d"`).
    /// Must render the current timestamp successfully; checked by
    /// [`validate`](Self::validate).
    pub date_format: String,
    /// Size threshold in bytes at which a file stops receiving entries and a
    /// rolled sibling (`{stem}_001{ext}`, `{stem}_002{ext}`, …) takes over.
    /// `None` disables rotation.
    pub max_file_size: Option<u64>,
    /// Custom file naming rule, overriding severity- and date-based naming.
    pub file_name_rule: Option<FileNameRule>,
    /// Map dotted categories (`Services.UserService`) onto nested
    /// subdirectories (`Services/UserService/`).
    pub create_category_directories: bool,
    /// Events below this severity are dropped before any formatting or I/O.
    pub min_severity: Severity,
    /// Name files after the event severity (`Information.log`, `Warning.log`)
    /// instead of the date.
    pub separate_by_severity: bool,
}

impl Default for FileLoggerConfig {
    fn default() -> Self {
        FileLoggerConfig {
            root_path: PathBuf::from("logs"),
            date_format: String::from("%Y-%m-%d"),
            max_file_size: None,
            file_name_rule: None,
            create_category_directories: true,
            min_severity: Severity::Information,
            separate_by_severity: false,
        }
    }
}

impl FileLoggerConfig {
    /// Validate the configuration.
    ///
    /// Checks that the root path is non-empty, that the date format is
    /// non-empty and renders the current local timestamp without error, and
    /// that the size threshold, if set, is positive. Called by
    /// [`FileLoggerProvider::new`] before any logger is constructed, so a bad
    /// configuration fails at startup rather than on the first write.
    pub fn validate(&self) -> Result<(), FileLoggerError> {
        if self.root_path.as_os_str().is_empty() {
            return Err(FileLoggerError::EmptyRootPath);
        }
        if self.date_format.trim().is_empty() {
            return Err(FileLoggerError::EmptyDateFormat);
        }
        if !Self::date_format_renders(&self.date_format) {
            return Err(FileLoggerError::InvalidDateFormat(self.date_format.clone()));
        }
        if self.max_file_size == Some(0) {
            return Err(FileLoggerError::ZeroMaxFileSize);
        }
        Ok(())
    }

    /// Try to render the current timestamp with the given strftime format.
    /// An unknown specifier only fails once the delayed format is driven, so
    /// the check renders eagerly into a throwaway string.
    fn date_format_renders(date_format: &str) -> bool {
        use std::fmt::Write as _;
        let mut rendered = String::new();
        write!(
            rendered,
            "{}",
            Local::now().format_with_items(StrftimeItems::new(date_format))
        )
        .is_ok()
    }
}

/// Compute the file path an event will be appended to, before any rotation
/// check.
///
/// Starting from `config.root_path`, dotted category segments become nested
/// subdirectories when `create_category_directories` is set (empty segments
/// are dropped, so `"A..B"` maps to `A/B`). The file name comes from the
/// custom naming rule if one is set, else `{Severity}.log` when
/// `separate_by_severity` is set, else `{date}.log` using `date_format`.
///
/// Pure and deterministic: no I/O, and identical inputs always yield an
/// identical path.
///
/// # Examples
/// ```
/// use logscribe::{resolve_log_path, FileLoggerConfig, Severity};
/// use chrono::Local;
///
/// let config = FileLoggerConfig {
///     root_path: "logs".into(),
///     separate_by_severity: true,
///     ..FileLoggerConfig::default()
/// };
/// let path = resolve_log_path("Services.UserService", Severity::Warning, Local::now(), &config);
/// assert!(path.ends_with("Services/UserService/Warning.log"));
/// ```
pub fn resolve_log_path(
    category: &str,
    severity: Severity,
    timestamp: DateTime<Local>,
    config: &FileLoggerConfig,
) -> PathBuf {
    let mut path = config.root_path.clone();

    if config.create_category_directories {
        for segment in category.split('.').filter(|segment| !segment.is_empty()) {
            path.push(segment);
        }
    }

    let file_name = if let Some(rule) = &config.file_name_rule {
        rule(category, severity, timestamp)
    } else if config.separate_by_severity {
        format!("{severity}.log")
    } else {
        format!("{}.log", timestamp.format(&config.date_format))
    };

    path.join(file_name)
}

/// Serializes appends and rotation decisions per target file.
///
/// The engine keeps one mutex per nominal path, created lazily on first write
/// and kept for the life of the process. Every append runs entirely under its
/// path's mutex: parent directory creation, the size check, rolled-path
/// selection, and the write itself. Keying the mutex by the nominal
/// (pre-rotation) path rather than the rolled path is what keeps two writers
/// from racing on the same rotation decision and rolling independently.
///
/// File handles are opened and closed per append, never cached, so the engine
/// holds no state that can go stale when files are rotated or deleted
/// externally.
pub struct AppendEngine {
    locks: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
}

impl Default for AppendEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AppendEngine {
    /// Create an engine with an empty lock registry.
    pub fn new() -> Self {
        AppendEngine {
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Get or lazily create the mutex for a nominal path.
    /// Locks are never removed from the registry; it grows monotonically with
    /// the set of distinct paths written during the process lifetime.
    fn path_lock(&self, nominal_path: &Path) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(
            locks
                .entry(nominal_path.to_path_buf())
                .or_insert_with(|| Arc::new(Mutex::new(()))),
        )
    }

    /// Append one formatted entry to the file at `nominal_path`, rotating to a
    /// rolled sibling first if the file is at or over the size threshold.
    ///
    /// The entry is written as a single UTF-8 byte sequence and flushed before
    /// the file is closed. The parent directory is created if missing;
    /// creation is idempotent, so races between categories sharing a parent
    /// are benign. On any failure the error is returned to the caller with no
    /// retry, and the dropped guard releases the path lock either way.
    pub fn append(
        &self,
        nominal_path: &Path,
        entry: &str,
        config: &FileLoggerConfig,
    ) -> Result<(), FileLoggerError> {
        let path_lock = self.path_lock(nominal_path);
        let _guard = path_lock.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(parent) = nominal_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| {
                    FileLoggerError::CreateDirectoryFailed(parent.to_path_buf(), err.to_string())
                })?;
            }
        }

        let target_path = match config.max_file_size {
            Some(max_file_size) if Self::file_size(nominal_path) >= max_file_size => {
                Self::rolled_path(nominal_path, max_file_size)?
            }
            _ => nominal_path.to_path_buf(),
        };

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&target_path)
            .map_err(|err| FileLoggerError::CreateFileFailed(target_path.clone(), err.to_string()))?;
        file.write_all(entry.as_bytes())?;
        file.flush()?;

        Ok(())
    }

    /// Size of the file in bytes, or 0 if it does not exist.
    fn file_size(path: &Path) -> u64 {
        fs::metadata(path).map_or(0, |metadata| metadata.len())
    }

    /// Find the rolled sibling that should receive the next entry once the
    /// nominal path is full.
    ///
    /// Candidates are `{stem}_001{ext}`, `{stem}_002{ext}`, … and the first
    /// one that either does not exist or still has spare capacity wins, so a
    /// partially-filled rolled file is reused rather than skipped. The search
    /// restarts from 001 on every call instead of remembering the last index;
    /// that costs repeated existence checks under sustained load but heals
    /// itself when rolled files are deleted externally.
    fn rolled_path(nominal_path: &Path, max_file_size: u64) -> Result<PathBuf, FileLoggerError> {
        let directory = nominal_path.parent().unwrap_or_else(|| Path::new(""));
        let stem = nominal_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = nominal_path
            .extension()
            .map(|extension| format!(".{}", extension.to_string_lossy()))
            .unwrap_or_default();

        for counter in 1..=MAX_ROLL_ATTEMPTS {
            let candidate = directory.join(format!("{stem}_{counter:03}{extension}"));
            match fs::metadata(&candidate) {
                Ok(metadata) if metadata.len() >= max_file_size => continue,
                _ => return Ok(candidate),
            }
        }

        Err(FileLoggerError::RollAttemptsExhausted(
            nominal_path.to_path_buf(),
        ))
    }
}

/// Render one log entry as a self-contained, newline-terminated record.
/// Multi-line messages are written as-is; no further escaping.
fn format_entry(
    category: &str,
    severity: Severity,
    timestamp: DateTime<Local>,
    message: &str,
    error: Option<&(dyn StdError + 'static)>,
) -> String {
    let timestamp = timestamp.format("%Y-%m-%d %H:%M:%S%.3f %:z");
    let level = severity.as_str().to_uppercase();

    let mut entry = format!("[{timestamp}] [{level}] [{category}] {message}\n");
    if let Some(error) = error {
        entry.push_str(&format!("Exception: {}\n", error_detail(error)));
    }
    entry
}

/// Flatten an error and its source chain into one line.
fn error_detail(error: &(dyn StdError + 'static)) -> String {
    let mut detail = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        detail.push_str(&format!(": {cause}"));
        source = cause.source();
    }
    detail
}

/// A logger bound to one category, writing through a shared [`AppendEngine`].
///
/// Cheap to share: every method takes `&self`, and instances handed out by
/// [`FileLoggerProvider::create_logger`] are `Arc`-wrapped and safe to use
/// from any number of threads concurrently.
pub struct FileLogger {
    category: String,
    config: FileLoggerConfig,
    engine: Arc<AppendEngine>,
}

impl FileLogger {
    /// The category this logger writes under.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Whether events at `severity` would be written.
    ///
    /// Disabled severities short-circuit inside [`log`](Self::log) before the
    /// formatter runs, so callers only need this check to skip building
    /// expensive `state` values.
    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity >= self.config.min_severity
    }

    /// Write one log event.
    ///
    /// `formatter` renders `state` and the optional error into the message
    /// text; the logger never inspects `state` itself. Events below the
    /// configured minimum severity, and events whose formatted message is
    /// empty, are dropped without touching the filesystem.
    ///
    /// # Arguments
    /// * `severity` - The severity to record the event at.
    /// * `state` - Caller-defined payload handed to `formatter`.
    /// * `error` - Optional error appended as an `Exception:` line.
    /// * `formatter` - Renders `state` and `error` into the message string.
    pub fn log<S, F>(
        &self,
        severity: Severity,
        state: S,
        error: Option<&(dyn StdError + 'static)>,
        formatter: F,
    ) -> Result<(), FileLoggerError>
    where
        F: FnOnce(&S, Option<&(dyn StdError + 'static)>) -> String,
    {
        if !self.is_enabled(severity) {
            return Ok(());
        }

        let message = formatter(&state, error);
        if message.is_empty() {
            return Ok(());
        }

        let now = Local::now();
        let nominal_path = resolve_log_path(&self.category, severity, now, &self.config);
        let entry = format_entry(&self.category, severity, now, &message, error);
        self.engine.append(&nominal_path, &entry, &self.config)
    }

    /// Write a plain message with no payload or error.
    pub fn log_message(&self, severity: Severity, message: &str) -> Result<(), FileLoggerError> {
        self.log(severity, message, None, |message, _| (*message).to_owned())
    }
}

/// Hands out per-category loggers that share one configuration and one
/// [`AppendEngine`].
///
/// Loggers are cached by category, so repeated `create_logger` calls with the
/// same name return the same instance. The provider can also be installed as
/// the global sink for the `log` facade via [`install`](Self::install).
///
/// # Examples
/// ```
/// use logscribe::{FileLoggerBuilder, Severity};
///
/// let provider = FileLoggerBuilder::new("./example-logs").build().unwrap();
/// let logger = provider.create_logger("App.Startup");
/// assert!(logger.is_enabled(Severity::Warning));
/// assert!(!logger.is_enabled(Severity::Debug));
/// provider.close();
/// ```
pub struct FileLoggerProvider {
    config: FileLoggerConfig,
    engine: Arc<AppendEngine>,
    loggers: Mutex<HashMap<String, Arc<FileLogger>>>,
}

impl FileLoggerProvider {
    /// Create a provider from a validated configuration.
    ///
    /// Validation happens here, eagerly: an empty root path, a bad date
    /// format, or a zero size threshold fails startup instead of the first
    /// log call.
    pub fn new(config: FileLoggerConfig) -> Result<Self, FileLoggerError> {
        config.validate()?;
        Ok(FileLoggerProvider {
            config,
            engine: Arc::new(AppendEngine::new()),
            loggers: Mutex::new(HashMap::new()),
        })
    }

    /// The provider's configuration.
    pub fn config(&self) -> &FileLoggerConfig {
        &self.config
    }

    /// Get or create the logger for a category.
    pub fn create_logger(&self, category: &str) -> Arc<FileLogger> {
        let mut loggers = self.loggers.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(loggers.entry(category.to_owned()).or_insert_with(|| {
            Arc::new(FileLogger {
                category: category.to_owned(),
                config: self.config.clone(),
                engine: Arc::clone(&self.engine),
            })
        }))
    }

    /// Release the per-category logger cache.
    ///
    /// No file handles are held between appends, so there is nothing to flush
    /// or close; loggers already handed out keep working. Safe to call more
    /// than once.
    pub fn close(&self) {
        self.loggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Install this provider as the global logger for the `log` facade.
    ///
    /// Events arriving through `log::info!` and friends use the record target
    /// as the category. The facade has no error channel, so append failures
    /// are dropped at this boundary; call [`FileLogger::log`] directly when
    /// write errors must reach the application.
    ///
    /// ```no_run
    /// use logscribe::FileLoggerBuilder;
    ///
    /// FileLoggerBuilder::new("./logs").build()?.install()?;
    /// log::info!(target: "App.Main", "started");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        log::set_max_level(self.config.min_severity.to_level_filter());
        log::set_boxed_logger(Box::new(self))
    }
}

impl log::Log for FileLoggerProvider {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        Severity::from(metadata.level()) >= self.config.min_severity
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let logger = self.create_logger(record.target());
        // The facade offers no way to surface the error to the caller.
        let _ = logger.log_message(Severity::from(record.level()), &record.args().to_string());
    }

    fn flush(&self) {}
}

/// Errors that can occur when configuring or writing logs.
#[derive(Debug, thiserror::Error)]
pub enum FileLoggerError {
    #[error("Root path cannot be empty")]
    EmptyRootPath,
    #[error("Date format cannot be empty")]
    EmptyDateFormat,
    #[error("Invalid date format '{0}'")]
    InvalidDateFormat(String),
    #[error("Max file size must be greater than 0")]
    ZeroMaxFileSize,
    #[error("Failed to create directory '{0}': {1}")]
    CreateDirectoryFailed(PathBuf, String),
    #[error("Failed to create file '{0}': {1}")]
    CreateFileFailed(PathBuf, String),
    #[error("Unable to roll file for '{0}' after {MAX_ROLL_ATTEMPTS} attempts. Check disk space and permissions.")]
    RollAttemptsExhausted(PathBuf),
    #[error("File IO error: {0}")]
    FileIOError(#[from] std::io::Error),
}

/// Provides a fluent interface for configuring a [`FileLoggerProvider`].
///
/// Configuration options include:
///
/// * Root path - Where the log tree is created
/// * Severity filtering - Drop events below a minimum severity
/// * File naming - Date-based, severity-based, or a custom rule
/// * Rotation - Roll files over at a size threshold
/// * Category directories - Map dotted categories to nested folders
///
/// # Default Configuration
///
/// If not explicitly configured, the provider uses these defaults:
/// * Root path `"logs"`
/// * Date format `"%Y-%m-%d"`
/// * No size-based rotation
/// * Category directories enabled
/// * Minimum severity `Information`
/// * One date-named file per category (no per-severity split)
///
/// # Examples
///
/// Basic per-category logging under `./logs`:
/// ```rust
/// use logscribe::FileLoggerBuilder;
///
/// let provider = FileLoggerBuilder::new("./logs").build().unwrap();
/// ```
///
/// Per-severity files with 5 MB rotation:
/// ```rust
/// use logscribe::{FileLoggerBuilder, Severity};
///
/// let provider = FileLoggerBuilder::new("./logs")
///     .separate_by_severity(true)
///     .max_file_size(5 * 1024 * 1024)
///     .min_severity(Severity::Debug)
///     .build()
///     .unwrap();
/// ```
///
/// A custom naming rule overriding both date- and severity-based names:
/// ```rust
/// use logscribe::FileLoggerBuilder;
///
/// let provider = FileLoggerBuilder::new("./logs")
///     .file_name_rule(|category, severity, _now| format!("{category}.{severity}.log"))
///     .build()
///     .unwrap();
/// ```
pub struct FileLoggerBuilder {
    config: FileLoggerConfig,
}

impl FileLoggerBuilder {
    /// Create a builder rooted at `root_path`.
    pub fn new<P: AsRef<Path>>(root_path: P) -> Self {
        FileLoggerBuilder {
            config: FileLoggerConfig {
                root_path: root_path.as_ref().to_path_buf(),
                ..FileLoggerConfig::default()
            },
        }
    }

    /// Set the strftime format used for date-based file names.
    pub fn date_format<S: Into<String>>(self, date_format: S) -> Self {
        Self {
            config: FileLoggerConfig {
                date_format: date_format.into(),
                ..self.config
            },
        }
    }

    /// Set the size threshold in bytes at which files roll over.
    pub fn max_file_size(self, max_file_size: u64) -> Self {
        Self {
            config: FileLoggerConfig {
                max_file_size: Some(max_file_size),
                ..self.config
            },
        }
    }

    /// Set a custom file naming rule.
    pub fn file_name_rule<F>(self, rule: F) -> Self
    where
        F: Fn(&str, Severity, DateTime<Local>) -> String + Send + Sync + 'static,
    {
        Self {
            config: FileLoggerConfig {
                file_name_rule: Some(Arc::new(rule)),
                ..self.config
            },
        }
    }

    /// Map dotted category names to nested subdirectories. On by default.
    pub fn create_category_directories(self, create_category_directories: bool) -> Self {
        Self {
            config: FileLoggerConfig {
                create_category_directories,
                ..self.config
            },
        }
    }

    /// Set the minimum severity; events below it are dropped.
    pub fn min_severity(self, min_severity: Severity) -> Self {
        Self {
            config: FileLoggerConfig {
                min_severity,
                ..self.config
            },
        }
    }

    /// Name files after the event severity instead of the date.
    pub fn separate_by_severity(self, separate_by_severity: bool) -> Self {
        Self {
            config: FileLoggerConfig {
                separate_by_severity,
                ..self.config
            },
        }
    }

    /// Validate the configuration and build the provider.
    pub fn build(self) -> Result<FileLoggerProvider, FileLoggerError> {
        FileLoggerProvider::new(self.config)
    }
}

use {
    logscribe::{FileLoggerBuilder, Severity},
    std::{
        fs,
        sync::{
            atomic::{AtomicBool, Ordering},
            Arc,
        },
        thread,
    },
    tempfile::TempDir,
};

#[test]
fn is_enabled_respects_minimum_severity() {
    let dir = TempDir::new().unwrap();
    let provider = FileLoggerBuilder::new(dir.path()).build().unwrap();
    let logger = provider.create_logger("TestCategory");

    assert!(logger.is_enabled(Severity::Information));
    assert!(logger.is_enabled(Severity::Critical));
    assert!(!logger.is_enabled(Severity::Debug));
    assert!(!logger.is_enabled(Severity::Trace));
}

#[test]
fn log_creates_category_directory_structure() {
    let dir = TempDir::new().unwrap();
    let provider = FileLoggerBuilder::new(dir.path()).build().unwrap();
    let logger = provider.create_logger("Services.UserService");

    logger.log_message(Severity::Information, "Test message").unwrap();

    assert!(dir.path().join("Services").join("UserService").is_dir());
}

#[test]
fn log_writes_retrievable_entry_content() {
    let dir = TempDir::new().unwrap();
    let provider = FileLoggerBuilder::new(dir.path()).build().unwrap();
    let logger = provider.create_logger("TestCategory");

    logger
        .log_message(Severity::Information, "This is a test message")
        .unwrap();

    let category_dir = dir.path().join("TestCategory");
    let log_file = fs::read_dir(&category_dir)
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();
    let content = fs::read_to_string(log_file).unwrap();

    assert!(content.contains("This is a test message"));
    assert!(content.contains("[INFORMATION]"));
    assert!(content.contains("[TestCategory]"));
    assert!(content.ends_with('\n'));
}

#[test]
fn separate_by_severity_creates_one_file_per_severity() {
    let dir = TempDir::new().unwrap();
    let provider = FileLoggerBuilder::new(dir.path())
        .separate_by_severity(true)
        .build()
        .unwrap();
    let logger = provider.create_logger("TestCategory");

    logger.log_message(Severity::Information, "Info message").unwrap();
    logger.log_message(Severity::Warning, "Warning message").unwrap();
    logger.log_message(Severity::Error, "Error message").unwrap();

    let category_dir = dir.path().join("TestCategory");
    assert!(category_dir.join("Information.log").is_file());
    assert!(category_dir.join("Warning.log").is_file());
    assert!(category_dir.join("Error.log").is_file());
    assert_eq!(fs::read_dir(&category_dir).unwrap().count(), 3);
}

#[test]
fn disabled_severity_touches_nothing_on_disk() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("logs");
    let provider = FileLoggerBuilder::new(&root).build().unwrap();
    let logger = provider.create_logger("TestCategory");

    let formatted = AtomicBool::new(false);
    logger
        .log(Severity::Debug, "payload", None, |state, _| {
            formatted.store(true, Ordering::SeqCst);
            (*state).to_owned()
        })
        .unwrap();

    // Below the minimum severity: no formatting work, no directory, no file.
    assert!(!formatted.load(Ordering::SeqCst));
    assert!(!root.exists());
}

#[test]
fn empty_formatted_message_is_dropped() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("logs");
    let provider = FileLoggerBuilder::new(&root).build().unwrap();
    let logger = provider.create_logger("TestCategory");

    logger
        .log(Severity::Error, (), None, |_, _| String::new())
        .unwrap();

    assert!(!root.exists());
}

#[test]
fn custom_file_name_rule_is_used_verbatim() {
    let dir = TempDir::new().unwrap();
    let provider = FileLoggerBuilder::new(dir.path())
        .file_name_rule(|_, _, _| String::from("custom.log"))
        .build()
        .unwrap();
    let logger = provider.create_logger("TestCategory");

    logger.log_message(Severity::Information, "routed by rule").unwrap();

    let content = fs::read_to_string(dir.path().join("TestCategory").join("custom.log")).unwrap();
    assert!(content.contains("routed by rule"));
}

#[test]
fn error_events_carry_an_exception_line() {
    #[derive(Debug, thiserror::Error)]
    #[error("connection refused")]
    struct ConnectionRefused;

    #[derive(Debug, thiserror::Error)]
    #[error("query failed")]
    struct QueryFailed(#[source] ConnectionRefused);

    let dir = TempDir::new().unwrap();
    let provider = FileLoggerBuilder::new(dir.path())
        .separate_by_severity(true)
        .build()
        .unwrap();
    let logger = provider.create_logger("Db");

    let error = QueryFailed(ConnectionRefused);
    logger
        .log(Severity::Error, "saving user", Some(&error), |state, _| {
            (*state).to_owned()
        })
        .unwrap();

    let content = fs::read_to_string(dir.path().join("Db").join("Error.log")).unwrap();
    assert!(content.contains("[ERROR] [Db] saving user"));
    assert!(content.contains("Exception: query failed: connection refused\n"));
}

#[test]
fn full_file_rolls_to_numbered_siblings_in_order() {
    let dir = TempDir::new().unwrap();
    let provider = FileLoggerBuilder::new(dir.path())
        .separate_by_severity(true)
        .max_file_size(1)
        .build()
        .unwrap();
    let logger = provider.create_logger("Rolling");

    // Every entry exceeds one byte, so each write fills its file and the
    // next one moves on to the following rolled sibling.
    logger.log_message(Severity::Information, "first entry").unwrap();
    logger.log_message(Severity::Information, "second entry").unwrap();
    logger.log_message(Severity::Information, "third entry").unwrap();

    let category_dir = dir.path().join("Rolling");
    let nominal = fs::read_to_string(category_dir.join("Information.log")).unwrap();
    let rolled_first = fs::read_to_string(category_dir.join("Information_001.log")).unwrap();
    let rolled_second = fs::read_to_string(category_dir.join("Information_002.log")).unwrap();

    assert!(nominal.contains("first entry"));
    assert!(!nominal.contains("second entry"));
    assert!(rolled_first.contains("second entry"));
    assert!(rolled_second.contains("third entry"));
}

#[test]
fn rotation_reuses_a_rolled_file_with_spare_capacity() {
    let dir = TempDir::new().unwrap();
    let category_dir = dir.path().join("Rolling");
    fs::create_dir_all(&category_dir).unwrap();
    // Nominal file and the first rolled sibling are already full; the second
    // sibling has spare capacity and should receive the entry.
    fs::write(category_dir.join("Information.log"), vec![b'x'; 64]).unwrap();
    fs::write(category_dir.join("Information_001.log"), vec![b'x'; 64]).unwrap();
    fs::write(category_dir.join("Information_002.log"), b"x").unwrap();

    let provider = FileLoggerBuilder::new(dir.path())
        .separate_by_severity(true)
        .max_file_size(64)
        .build()
        .unwrap();
    let logger = provider.create_logger("Rolling");

    logger.log_message(Severity::Information, "landed in 002").unwrap();

    let reused = fs::read_to_string(category_dir.join("Information_002.log")).unwrap();
    assert!(reused.starts_with('x'));
    assert!(reused.contains("landed in 002"));
    assert!(!category_dir.join("Information_003.log").exists());
}

#[test]
fn repeated_logging_into_one_category_is_idempotent_on_directories() {
    let dir = TempDir::new().unwrap();
    let provider = FileLoggerBuilder::new(dir.path()).build().unwrap();
    let logger = provider.create_logger("Services.OrderService");

    for entry_id in 0..5 {
        logger
            .log_message(Severity::Information, &format!("entry {entry_id}"))
            .unwrap();
    }
    // A sibling category sharing the parent directory is also fine.
    provider
        .create_logger("Services.UserService")
        .log_message(Severity::Information, "sibling entry")
        .unwrap();

    assert!(dir.path().join("Services").join("OrderService").is_dir());
    assert!(dir.path().join("Services").join("UserService").is_dir());
}

#[test]
fn concurrent_appends_produce_complete_untorn_entries() {
    const THREADS: usize = 8;
    const ENTRIES_PER_THREAD: usize = 25;

    let dir = TempDir::new().unwrap();
    let provider = FileLoggerBuilder::new(dir.path())
        .separate_by_severity(true)
        .build()
        .unwrap();
    let logger = provider.create_logger("Concurrent");

    let mut handles = Vec::new();
    for thread_id in 0..THREADS {
        let logger = Arc::clone(&logger);
        handles.push(thread::spawn(move || {
            for entry_id in 0..ENTRIES_PER_THREAD {
                logger
                    .log_message(
                        Severity::Information,
                        &format!("thread {thread_id} entry {entry_id}"),
                    )
                    .unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let content =
        fs::read_to_string(dir.path().join("Concurrent").join("Information.log")).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), THREADS * ENTRIES_PER_THREAD);
    for line in &lines {
        assert!(line.contains("[INFORMATION] [Concurrent] thread"));
    }
    for thread_id in 0..THREADS {
        for entry_id in 0..ENTRIES_PER_THREAD {
            assert!(content.contains(&format!("thread {thread_id} entry {entry_id}\n")));
        }
    }
}

#[test]
fn provider_caches_loggers_per_category() {
    let dir = TempDir::new().unwrap();
    let provider = FileLoggerBuilder::new(dir.path()).build().unwrap();

    let first = provider.create_logger("App.Main");
    let second = provider.create_logger("App.Main");
    let other = provider.create_logger("App.Worker");

    assert!(Arc::ptr_eq(&first, &second));
    assert!(!Arc::ptr_eq(&first, &other));
}

#[test]
fn close_releases_the_logger_cache_and_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let provider = FileLoggerBuilder::new(dir.path()).build().unwrap();

    let before = provider.create_logger("App.Main");
    provider.close();
    provider.close();
    let after = provider.create_logger("App.Main");

    assert!(!Arc::ptr_eq(&before, &after));
    // A logger handed out before the cache was released keeps working.
    before.log_message(Severity::Information, "still alive").unwrap();
}

#[test]
fn builder_rejects_invalid_configuration_eagerly() {
    assert!(FileLoggerBuilder::new("").build().is_err());
    assert!(FileLoggerBuilder::new("logs").date_format("").build().is_err());
    assert!(FileLoggerBuilder::new("logs").date_format("%Q").build().is_err());
    assert!(FileLoggerBuilder::new("logs").max_file_size(0).build().is_err());
}

use logscribe::{FileLoggerBuilder, Severity};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let provider = FileLoggerBuilder::new("./logs")
        .separate_by_severity(true)
        .max_file_size(4 * 1024) // Roll over at 4 KB so rotation triggers quickly
        .build()?;

    let logger = provider.create_logger("Demo.Rotation");

    // Simulate writing logs that will fill the nominal file and spill into
    // rolled siblings (Information_001.log, Information_002.log, ...).
    for i in 1..=1000 {
        logger.log_message(
            Severity::Information,
            &format!("Log entry #{i}: This is a sample log message that will contribute to file size"),
        )?;
    }

    Ok(())
}

use logscribe::{FileLoggerBuilder, Severity};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let provider = FileLoggerBuilder::new("./logs")
        .min_severity(Severity::Debug)
        .build()?;

    let logger = provider.create_logger("Demo.Main");
    logger.log_message(Severity::Debug, "This is a debug message")?;
    logger.log_message(Severity::Information, "This is an info message")?;
    logger.log_message(Severity::Warning, "This is a warning message")?;
    logger.log_message(Severity::Error, "This is an error message")?;

    provider.close();
    Ok(())
}

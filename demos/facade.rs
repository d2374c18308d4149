use logscribe::{FileLoggerBuilder, Severity};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    FileLoggerBuilder::new("./logs")
        .min_severity(Severity::Debug)
        .separate_by_severity(true)
        .build()?
        .install()?;

    // Records arriving through the log facade use the target as the category.
    log::info!(target: "Demo.Facade", "This is an info message");
    log::warn!(target: "Demo.Facade", "This is a warning message");
    log::error!(target: "Demo.Facade", "This is an error message");

    Ok(())
}

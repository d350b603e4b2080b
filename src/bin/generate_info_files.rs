use sales_reports::{generate::SampleData, logging};
use std::path::Path;

fn main() {
    logging::init();
    if let Err(e) = SampleData::default().write_to(Path::new(".")) {
        tracing::error!("Error generating files: {e:#}");
        std::process::exit(1);
    }
    println!("Files generated successfully.");
}

use sales_reports::{config::Config, logging, pipeline};

fn main() {
    logging::init();
    if let Err(e) = pipeline::run(&Config::default()) {
        tracing::error!("Error processing files: {e:#}");
        std::process::exit(1);
    }
    println!("Reports generated successfully.");
}

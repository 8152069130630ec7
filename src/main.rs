/// tempo-demo entry point: replay the default script on the system clock
fn main() {
    use tempo::demo;
    use tempo::{AppConfig, LogLevel, logging};
    use tempo_ui::SystemClock;

    logging::init(LogLevel::Info);

    let config = AppConfig::load_from_default_path().unwrap_or_default();
    logging::set_level(config.log_level);

    let report = demo::run(
        &config,
        &demo::default_script(),
        SystemClock,
        std::thread::sleep,
    );

    log::info!(
        "Demo finished: {} value changes, final value {} (shown as \"{}\")",
        report.values.len(),
        report.final_value,
        report.final_text
    );
    if !report.rejected.is_empty() {
        log::info!("Rejected input: {:?}", report.rejected);
    }
}

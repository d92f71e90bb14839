use isomer_logger::{LevelFilter, Logger, Rotation};
use tracing::info;

// A single test: the subscriber is global to the process, so install once,
// exercise the file layer, then verify a second install is refused.
#[test]
fn init_writes_to_file_and_refuses_double_install() {
    let dir = tempfile::tempdir().expect("tempdir");

    let guard = Logger::builder()
        .name("test-logger")
        .console(false)
        .level(LevelFilter::DEBUG)
        .path(dir.path())
        .rotation(Rotation::NEVER)
        .init()
        .expect("first init succeeds");

    info!("logger smoke message");
    drop(guard);

    let log_file = dir.path().join("test-logger.log");
    let contents = std::fs::read_to_string(&log_file).expect("log file written");
    assert!(contents.contains("logger smoke message"));

    let second = Logger::builder().name("test-logger-2").console(false).init();
    assert!(second.is_err());
}

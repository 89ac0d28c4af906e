//! Logging Tests
//!
//! Installs a capturing logger for this test binary only. Everything lives
//! in one test because `log::set_logger` can be called once per process.

use log::{Level, LevelFilter, Log, Metadata, Record};
use mlp_rng_core_rs::SeededRng;
use std::sync::Mutex;

struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

fn warnings() -> Vec<String> {
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _)| *level == Level::Warn)
        .map(|(_, msg)| msg.clone())
        .collect()
}

#[test]
fn test_zero_seed_warning() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    SeededRng::new(42);
    assert!(warnings().is_empty(), "non-zero seed should not warn");

    SeededRng::new(0);
    let warned = warnings();
    assert_eq!(warned.len(), 1);
    assert!(warned[0].contains("seeded with 0"), "unexpected message: {}", warned[0]);
}

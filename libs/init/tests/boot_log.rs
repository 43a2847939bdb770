//! The boot log line emitted by `vendor_load_properties`
//!
//! Installs a recording logger for this test binary. Tests run in parallel,
//! so each one looks only for records mentioning its own bootloader.

use std::sync::{Mutex, OnceLock};

use ks01lte_init::vendor_load_properties;
use ks01lte_sysprop::MemoryStore;
use log::{Level, Log, Metadata, Record};

struct RecordingLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for RecordingLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let line = record.args().to_string();
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), line));
        }
    }

    fn flush(&self) {}
}

fn logger() -> &'static RecordingLogger {
    static LOGGER: OnceLock<RecordingLogger> = OnceLock::new();
    let logger = LOGGER.get_or_init(|| RecordingLogger {
        records: Mutex::new(Vec::new()),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
    logger
}

/// Info records containing `needle`
fn info_lines(needle: &str) -> Vec<String> {
    logger()
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, line)| *level == Level::Info && line.contains(needle))
        .map(|(_, line)| line.clone())
        .collect()
}

#[test]
fn test_log_line_for_recognised_variant() {
    logger();
    let mut store: MemoryStore = [
        ("ro.bootloader", "E330SKSUDPI2"),
        ("ro.product.device", "ks01lte"),
    ]
    .into_iter()
    .collect();

    vendor_load_properties(&mut store);

    assert_eq!(
        info_lines("E330SKSUDPI2"),
        ["Found bootloader E330SKSUDPI2. Setting build properties for ks01lteskt."]
    );
}

#[test]
fn test_log_line_for_unrecognised_bootloader() {
    logger();
    let mut store: MemoryStore = [
        ("ro.bootloader", "UNKNOWN123"),
        ("ro.product.device", "generic"),
    ]
    .into_iter()
    .collect();

    vendor_load_properties(&mut store);

    assert_eq!(
        info_lines("UNKNOWN123"),
        ["Found bootloader UNKNOWN123. Setting build properties for generic."]
    );
}

#[test]
fn test_log_line_with_nothing_set() {
    logger();
    let mut store = MemoryStore::new();

    vendor_load_properties(&mut store);

    let lines = info_lines("Found bootloader . ");
    assert!(!lines.is_empty());
    assert!(
        lines
            .iter()
            .all(|line| line == "Found bootloader . Setting build properties for .")
    );
}

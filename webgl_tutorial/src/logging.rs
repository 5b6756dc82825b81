use std::fmt;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

static INIT: Once = Once::new();

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = JsValue::from_str(&format_record(
            record.level(),
            record.target(),
            record.args(),
        ));

        match record.level() {
            Level::Error => console::error_1(&message),
            Level::Warn => console::warn_1(&message),
            Level::Info => console::info_1(&message),
            Level::Debug | Level::Trace => console::debug_1(&message),
        }
    }

    fn flush(&self) {}
}

fn format_record(level: Level, target: &str, args: &fmt::Arguments) -> String {
    format!("[{}] {}: {}", level, target, args)
}

/// Routes `log` records up to `level` to the browser console and installs a panic hook that
/// reports panics there as well.
///
/// Only the first call has an effect.
pub fn init(level: LevelFilter) {
    INIT.call_once(|| {
        console_error_panic_hook::set_once();

        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(level);
        }

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record() {
        assert_eq!(
            format_record(
                Level::Warn,
                "webgl_tutorial::shader",
                &format_args!("no active uniform `{}`", "u_color")
            ),
            "[WARN] webgl_tutorial::shader: no active uniform `u_color`"
        );
    }
}

//! ブラウザコンソールへのログ出力

use image_dashboard_common::Logger;

const PREFIX: &str = "[image-dashboard]";

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn info(&self, message: &str) {
        gloo::console::info!(format!("{} {}", PREFIX, message));
    }

    fn warn(&self, message: &str) {
        gloo::console::warn!(format!("{} {}", PREFIX, message));
    }

    fn error(&self, message: &str) {
        gloo::console::error!(format!("{} {}", PREFIX, message));
    }

    fn debug(&self, message: &str) {
        gloo::console::debug!(format!("{} {}", PREFIX, message));
    }
}

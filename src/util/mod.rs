pub mod sys;

use chrono::offset::Local;

pub fn timestamp(format: &str) -> String {
    Local::now().format(format).to_string()
}

use kitbag_core::config::AppConfig;

use crate::commands::{bag, CommandResult};

pub fn run(config: &AppConfig, json: bool) -> CommandResult {
    bag::render_after_selections("catalog", config, &[], json)
}

use kitbag_core::config::AppConfig;
use kitbag_core::ProductId;
use tracing::{info, warn};

use crate::commands::{open_storefront, CommandResult};
use crate::render;

pub fn run(config: &AppConfig, selections: &[ProductId], json: bool) -> CommandResult {
    render_after_selections("bag", config, selections, json)
}

/// Opens the seeded shop, replays each selection in order, and renders the
/// resulting storefront.
pub(crate) fn render_after_selections(
    command: &str,
    config: &AppConfig,
    selections: &[ProductId],
    json: bool,
) -> CommandResult {
    let mut storefront = match open_storefront(command) {
        Ok(storefront) => storefront,
        Err(result) => return result,
    };

    for product_id in selections {
        let outcome = storefront.select(*product_id);
        if !outcome.changed {
            warn!(
                event_name = "cli.bag.unknown_product",
                product_id = product_id.0,
                "no jersey with this id; selection ignored"
            );
        }
    }

    let view = storefront.view(&config.display);
    info!(
        event_name = "cli.storefront.rendered",
        command,
        version = view.version,
        bag_size = storefront.catalog().in_bag().len(),
        "storefront rendered"
    );

    if json {
        match render::render_json(&view) {
            Ok(output) => CommandResult::rendered(output),
            Err(error) => CommandResult::failure(
                command,
                "serialization",
                format!("failed to serialize storefront view: {error}"),
                1,
            ),
        }
    } else {
        CommandResult::rendered(render::render_text(&view))
    }
}

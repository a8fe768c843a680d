use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use kitbag_core::config::AppConfig;
use kitbag_core::{ProductId, Storefront};
use tracing::{debug, info};

use crate::commands::{open_storefront, CommandResult};
use crate::render;

const PROMPT: &str = "select a jersey by id (blank to redraw, q to quit)> ";

/// Interactive session: every id read from `input` toggles that jersey and
/// the storefront is redrawn whenever its version moves.
pub fn run(config: &AppConfig, input: impl BufRead, mut output: impl Write) -> CommandResult {
    let mut storefront = match open_storefront("shop") {
        Ok(storefront) => storefront,
        Err(result) => return result,
    };

    match session_loop(config, &mut storefront, input, &mut output) {
        Ok(selections) => {
            let bag_size = storefront.catalog().in_bag().len();
            info!(
                event_name = "cli.shop.closed",
                selections,
                bag_size,
                "shop session closed"
            );
            CommandResult::success(
                "shop",
                format!(
                    "session closed after {selections} selection(s) with {bag_size} jersey(s) in the bag"
                ),
            )
        }
        Err(error) => CommandResult::io_failure("shop", &error),
    }
}

fn session_loop(
    config: &AppConfig,
    storefront: &mut Storefront,
    input: impl BufRead,
    output: &mut impl Write,
) -> Result<u64> {
    let mut selections = 0;
    draw(config, storefront, output)?;

    for line in input.lines() {
        let line = line.context("failed to read from input")?;
        let command = line.trim();

        match command {
            "q" | "quit" | "exit" => break,
            "" => draw(config, storefront, output)?,
            other => match other.parse::<ProductId>() {
                Ok(product_id) => {
                    let outcome = storefront.select(product_id);
                    debug!(
                        event_name = "cli.shop.selection",
                        product_id = product_id.0,
                        changed = outcome.changed,
                        version = outcome.version,
                        "selection handled"
                    );
                    if outcome.changed {
                        selections += 1;
                        draw(config, storefront, output)?;
                    } else {
                        writeln!(output, "no jersey with id {product_id}")
                            .context("failed to write to output")?;
                        prompt(output)?;
                    }
                }
                Err(_) => {
                    writeln!(output, "unrecognized input `{other}`; enter a jersey id or q")
                        .context("failed to write to output")?;
                    prompt(output)?;
                }
            },
        }
    }

    writeln!(output).context("failed to write to output")?;
    output.flush().context("failed to flush output")?;
    Ok(selections)
}

fn draw(config: &AppConfig, storefront: &Storefront, output: &mut impl Write) -> Result<()> {
    let view = storefront.view(&config.display);
    writeln!(output, "{}\n", render::render_text(&view)).context("failed to write to output")?;
    prompt(output)
}

fn prompt(output: &mut impl Write) -> Result<()> {
    write!(output, "{PROMPT}").context("failed to write to output")?;
    output.flush().context("failed to flush output")
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use kitbag_core::config::AppConfig;

    use super::run;

    fn transcript(input: &str) -> (u8, String, String) {
        let mut output = Vec::new();
        let result = run(&AppConfig::default(), Cursor::new(input.to_owned()), &mut output);
        (result.exit_code, result.output, String::from_utf8(output).expect("utf-8 output"))
    }

    #[test]
    fn quitting_immediately_draws_catalog_once() {
        let (exit_code, outcome, screen) = transcript("q\n");

        assert_eq!(exit_code, 0);
        assert_eq!(screen.matches("Jersey Shop").count(), 1);
        assert!(outcome.contains("after 0 selection(s)"));
    }

    #[test]
    fn selections_redraw_and_show_summary() {
        let (_, outcome, screen) = transcript("1\n2\nq\n");

        assert_eq!(screen.matches("Jersey Shop").count(), 3);
        assert!(screen.contains("$459.96"));
        assert!(outcome.contains("with 2 jersey(s) in the bag"));
    }

    #[test]
    fn unknown_and_garbage_input_do_not_redraw() {
        let (_, outcome, screen) = transcript("42\nsweater\n");

        assert_eq!(screen.matches("Jersey Shop").count(), 1);
        assert!(screen.contains("no jersey with id 42"));
        assert!(screen.contains("unrecognized input `sweater`"));
        assert!(outcome.contains("after 0 selection(s)"));
    }

    #[test]
    fn deselecting_hides_the_summary_again() {
        let (_, _, screen) = transcript("1\n1\n");
        let last_frame = screen.rsplit("Jersey Shop").next().expect("at least one frame");

        assert!(!last_frame.contains("Order Details"));
    }
}

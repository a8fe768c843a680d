pub mod bag;
pub mod catalog;
pub mod config;
pub mod shop;

use kitbag_core::{ApplicationError, Storefront};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
}

impl CommandResult {
    /// A command whose output is the rendered storefront rather than a payload.
    pub fn rendered(output: impl Into<String>) -> Self {
        Self { exit_code: 0, output: output.into() }
    }

    pub fn success(command: &str, message: impl Into<String>) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    pub fn application_failure(command: &str, error: &ApplicationError) -> Self {
        let exit_code = match error.error_class() {
            "config_validation" => 2,
            "catalog_validation" => 3,
            _ => 1,
        };
        Self::failure(
            command,
            error.error_class(),
            format!("{} ({error})", error.user_message()),
            exit_code,
        )
    }

    pub fn io_failure(command: &str, error: &anyhow::Error) -> Self {
        Self::failure(command, "io", format!("terminal i/o failed: {error:#}"), 4)
    }
}

/// Opens the seeded storefront, mapping a catalog failure to the command's
/// outcome payload.
pub(crate) fn open_storefront(command: &str) -> Result<Storefront, CommandResult> {
    Storefront::open().map_err(|error| {
        CommandResult::application_failure(command, &ApplicationError::from(error))
    })
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

#[cfg(test)]
mod tests {
    use kitbag_core::{ApplicationError, DomainError, ProductId};
    use serde_json::Value;

    use super::CommandResult;

    fn payload(result: &CommandResult) -> Value {
        serde_json::from_str(&result.output).expect("outcome payload is json")
    }

    #[test]
    fn configuration_failure_exits_with_code_two() {
        let error = ApplicationError::Configuration("logging.level must be one of".to_owned());
        let result = CommandResult::application_failure("startup", &error);

        assert_eq!(result.exit_code, 2);
        assert_eq!(payload(&result)["error_class"], "config_validation");
        assert_eq!(payload(&result)["command"], "startup");
    }

    #[test]
    fn catalog_failure_exits_with_code_three() {
        let error = ApplicationError::from(DomainError::InvalidCatalog(
            "product `9` has zero quantity".to_owned(),
        ));
        let result = CommandResult::application_failure("catalog", &error);

        assert_eq!(result.exit_code, 3);
        assert_eq!(payload(&result)["error_class"], "catalog_validation");
    }

    #[test]
    fn other_domain_failures_exit_with_code_one() {
        let error = ApplicationError::from(DomainError::UnknownProduct(ProductId(12)));

        assert_eq!(CommandResult::application_failure("bag", &error).exit_code, 1);
    }
}

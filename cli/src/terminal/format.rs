use std::path::Path;

use colored::*;
use hmap_core::{HostRecord, Status, ValidationContext};

use crate::terminal::colors;

/// `ip <- host1,host2` with the IP and hostnames colored.
pub fn record(record: &HostRecord) -> String {
    let arrow: ColoredString = "<-".color(colors::SEPARATOR);
    let comma: String = ",".color(colors::SEPARATOR).to_string();
    let hosts: String = record
        .hostnames()
        .iter()
        .map(|h| h.color(colors::HOSTNAME).to_string())
        .collect::<Vec<String>>()
        .join(&comma);

    format!("{} {} {}", record.ip().color(colors::IP_ADDR), arrow, hosts)
}

/// `path:line:column: error: message`, colored by severity.
pub fn location(path: &Path, ctx: &ValidationContext) -> String {
    let (label, color): (&str, Color) = match ctx.status {
        Status::Warning => ("warning:", colors::WARNING),
        _ => ("error:", colors::ERROR),
    };
    let message: String = ctx.kind.map(|k| k.to_string()).unwrap_or_default();

    format!(
        "{}:{}:{}: {} {}",
        path.display(),
        ctx.line_number,
        ctx.column,
        label.color(color).bold(),
        message
    )
}

/// A caret under `column`.
pub fn caret(column: usize, status: Status) -> String {
    let color: Color = match status {
        Status::Warning => colors::WARNING,
        _ => colors::ERROR,
    };
    format!("{}{}", " ".repeat(column), "^".color(color).bold())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hmap_core::ValidationKind;

    #[test]
    fn location_and_caret() {
        colored::control::set_override(false);

        let ctx = ValidationContext {
            status: Status::Error,
            kind: Some(ValidationKind::UnexpectedChar),
            line_number: 3,
            column: 4,
            line: "1.1.@".to_string(),
        };

        assert_eq!(
            location(Path::new("/etc/hosts"), &ctx),
            "/etc/hosts:3:4: error: Unexpected character"
        );
        assert_eq!(caret(ctx.column, ctx.status), "    ^");
    }

    #[test]
    fn record_as_map_string() {
        colored::control::set_override(false);

        let r = HostRecord::new("10.0.0.1", ["a", "b"]).unwrap();
        assert_eq!(record(&r), "10.0.0.1 <- a,b");
    }
}

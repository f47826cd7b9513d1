use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::registry::LookupSpan;

/// Events on this target are printed verbatim, without a severity symbol.
pub const PRINT_TARGET: &str = "hmap::print";
pub const SUCCESS_TARGET: &str = "hmap::success";

const LOG_ENV_VAR: &str = "HMAP_LOG";

pub struct HmapFormatter;

impl<S, N> FormatEvent<S, N> for HmapFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() != PRINT_TARGET {
            let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
                if meta.target() == SUCCESS_TARGET {
                    ("[*]", |s| s.green().bold())
                } else {
                    match *meta.level() {
                        Level::TRACE => ("[ ]", |s| s.dimmed()),
                        Level::DEBUG => ("[?]", |s| s.dimmed()),
                        Level::INFO => ("[*]", |s| s.blue().bold()),
                        Level::WARN => ("[!]", |s| s.yellow().bold()),
                        Level::ERROR => ("[!]", |s| s.red().bold()),
                    }
                };

            write!(writer, "{} ", color_func(symbol.into()))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Installs the global subscriber.
///
/// The level comes from `HMAP_LOG` when set, otherwise from the quiet level.
/// Plain output on the print target is never filtered. Warnings and errors
/// go to stderr, everything else to stdout.
pub fn init_logging(q_level: u8) {
    let env: Option<String> = std::env::var(LOG_ENV_VAR).ok();
    let filter: EnvFilter = EnvFilter::try_new(filter_directives(env.as_deref(), q_level))
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(None, q_level)));

    let writer = std::io::stderr
        .with_max_level(Level::WARN)
        .or_else(std::io::stdout);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .event_format(HmapFormatter)
        .init();
}

/// Builds the filter directives, always letting the print target through.
fn filter_directives(env: Option<&str>, q_level: u8) -> String {
    let base: &str = match env.map(str::trim) {
        Some(directives) if !directives.is_empty() => directives,
        _ => match q_level {
            0 => "info",
            1 => "warn",
            _ => "error",
        },
    };

    format!("{base},{PRINT_TARGET}=trace")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_levels() {
        assert_eq!(filter_directives(None, 0), "info,hmap::print=trace");
        assert_eq!(filter_directives(None, 1), "warn,hmap::print=trace");
        assert_eq!(filter_directives(None, 5), "error,hmap::print=trace");
    }

    #[test]
    fn env_keeps_print_target() {
        assert_eq!(filter_directives(Some("warn"), 0), "warn,hmap::print=trace");
        assert_eq!(
            filter_directives(Some("hmap_core=debug"), 2),
            "hmap_core=debug,hmap::print=trace"
        );
        assert_eq!(filter_directives(Some("  "), 1), "warn,hmap::print=trace");
        assert!(EnvFilter::try_new(filter_directives(Some("warn"), 0)).is_ok());
    }
}

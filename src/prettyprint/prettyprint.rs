use tracing::{Event, Subscriber};
use tracing_subscriber::{
    fmt::{
        self,
        format::{Format, FormatEvent, FormatFields, Writer},
        FmtContext,
    },
    registry::LookupSpan,
};

/// Event format for request logs: each line is indented by span depth and
/// tagged with the innermost span, e.g.
/// `  └─[fetch_tickers] INFO CoinDCX: ☁️  Fetched 512 tickers`.
pub struct PrettyFormatter {
    inner: Format,
}

impl PrettyFormatter {
    pub fn new(ansi: bool) -> Self {
        Self {
            inner: fmt::format()
                .with_ansi(ansi)
                .with_target(false)
                .with_file(false)
                .with_line_number(false)
                .with_level(true)
                .with_source_location(false),
        }
    }
}

/// `Type::method` span names are shortened to `method`.
fn prefix(depth: usize, span_name: Option<&str>) -> String {
    let mut prefix = "  ".repeat(depth.saturating_sub(1));
    if depth > 0 {
        prefix.push_str("└─");
    }
    if let Some(name) = span_name {
        let short = name.rsplit("::").next().unwrap_or(name);
        prefix.push('[');
        prefix.push_str(short);
        prefix.push_str("] ");
    }
    prefix
}

impl<S, N> FormatEvent<S, N> for PrettyFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let (depth, span_name) = match ctx.event_scope() {
            Some(scope) => {
                let spans: Vec<_> = scope.collect();
                (spans.len(), spans.first().map(|span| span.name()))
            }
            None => (0, None),
        };

        write!(writer, "{}", prefix(depth, span_name))?;
        self.inner.format_event(ctx, writer, event)
    }
}

//! `richwx alerts`.

use anyhow::Context;
use chrono::{DateTime, FixedOffset, Utc};
use richwx_render::escape;
use richwx_render::table::{Column, Table, Width};
use richwx_styles::{render, title, Emphasis, PresentationRegistry};
use serde::Serialize;

use super::CommandContext;
use crate::api::{Alert, AlertSource};
use crate::states::resolve_area;

/// Prefix shared by every NWS alert identifier.
pub const ID_PREFIX: &str = "urn:oid:2.49.0.1.840.0.";

const DETAIL_WIDTH: usize = 130;

#[derive(Serialize)]
struct Attention {
    message: String,
}

/// Active alerts for a state, as a table.
///
/// Area input that can't be resolved produces an attention message, not an
/// error.
pub fn state(
    ctx: &CommandContext,
    source: &dyn AlertSource,
    input: &str,
    show_id: bool,
) -> anyhow::Result<String> {
    log::info!("Validating input...");
    let area = match resolve_area(input) {
        Ok(area) => area,
        Err(err) => {
            log::info!("Unsuccessful data validation: {err}");
            return Ok(ctx.renderer.render(
                "attention",
                &Attention {
                    message: err.to_string(),
                },
            )?);
        }
    };

    log::info!("Getting alerts for {area}...");
    let alerts = source
        .active_alerts(&area)
        .with_context(|| format!("failed to get alerts for {area}"))?;

    if ctx.mode().is_structured() {
        return Ok(serde_json::to_string_pretty(&alerts)?);
    }

    log::info!("Creating table...");
    let table = alerts_table(&area, &alerts, show_id, Utc::now());
    let mut output = table.render(ctx.styler(), ctx.width);
    if table.is_empty() {
        output.push('\n');
        output.push_str(&ctx.renderer.render("no_alerts", &serde_json::json!({ "area": area }))?);
    }
    Ok(output)
}

/// One alert, as a two-column detail table.
pub fn by_id(ctx: &CommandContext, source: &dyn AlertSource, id: &str) -> anyhow::Result<String> {
    let full_id = full_id(id);
    let alert = source
        .alert(&full_id)
        .with_context(|| format!("failed to get alert {full_id}"))?;

    if ctx.mode().is_structured() {
        return Ok(serde_json::to_string_pretty(&alert)?);
    }
    Ok(detail_table(&alert, &full_id).render(ctx.styler(), ctx.width))
}

/// Adds [`ID_PREFIX`] unless the ID already has it.
pub fn full_id(id: &str) -> String {
    if id.starts_with(ID_PREFIX) {
        id.to_string()
    } else {
        format!("{}{}", ID_PREFIX, id)
    }
}

/// Strips [`ID_PREFIX`] for display.
pub fn short_id(id: &str) -> &str {
    id.strip_prefix(ID_PREFIX).unwrap_or(id)
}

fn timestamp(time: Option<&DateTime<FixedOffset>>, color: &str) -> String {
    match time {
        Some(time) => format!("[{}]{}[/]", color, time.format("%Y-%m-%d\n%H:%M:%S%:z")),
        None => format!("[{}]N/A[/]", color),
    }
}

/// Cell markup for an alert's category: colored label, icons on the next
/// line, bold when the alert is extreme.
pub fn alert_type(alert: &Alert) -> String {
    let emphasis = Emphasis::new().newline_after_icons();
    let emphasis = if alert.severity.is_extreme() {
        emphasis.bold()
    } else {
        emphasis
    };
    render(&alert.event, emphasis)
}

/// One row per alert, titled with the area and request time.
pub fn alerts_table(area: &str, alerts: &[Alert], show_id: bool, requested: DateTime<Utc>) -> Table {
    let mut table = Table::new()
        .title(format!(
            "Alerts for {}, requested: {} UTC",
            area,
            requested.format("%Y-%m-%d %H:%M:%S")
        ))
        .show_lines(true);

    if show_id {
        table = table.column(Column::named("Alert ID").center().min_width(46));
    }
    table = table
        .column(Column::named("Alert Type").center())
        .column(Column::named("Location").center().max_width(80))
        .column(Column::named("Issued").center())
        .column(Column::named("Expires").center())
        .column(Column::named("Sender").center());

    for alert in alerts {
        let mut row = Vec::with_capacity(6);
        if show_id {
            row.push(escape(short_id(&alert.id)));
        }
        row.push(alert_type(alert));
        row.push(escape(&alert.area_desc.replace(';', ",")));
        row.push(timestamp(Some(&alert.sent), "magenta"));
        row.push(timestamp(alert.expires.as_ref(), "yellow"));
        row.push(escape(&alert.sender_name));
        table.push_row(row);
    }
    table
}

/// Headline, details, location, instruction, sender, severity and ID of
/// one alert, in the alert's color.
pub fn detail_table(alert: &Alert, full_id: &str) -> Table {
    let record = PresentationRegistry::global().resolve(&alert.event);
    let or_na = |text: &Option<String>| escape(text.as_deref().unwrap_or("N/A"));

    let mut table = Table::new()
        .title(title(&alert.event))
        .show_lines(true)
        .style(record.color)
        .width(DETAIL_WIDTH)
        .column(Column::named("Information"))
        .column(Column::named("Details").width(Width::Fill));
    if alert.severity.is_extreme() {
        table = table.border_style("bold");
    }

    table
        .row(["Headline".to_string(), or_na(&alert.headline)])
        .row(["Details".to_string(), or_na(&alert.description)])
        .row(["Location".to_string(), escape(&alert.area_desc)])
        .row(["Instruction".to_string(), or_na(&alert.instruction)])
        .row(["Sender".to_string(), escape(&alert.sender_name)])
        .row(["Severity".to_string(), alert.severity.to_string()])
        .row(["Full ID".to_string(), escape(full_id)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Severity;
    use chrono::TimeZone;
    use richwx_render::{OutputMode, Styler};

    fn alert(event: &str, severity: Severity) -> Alert {
        Alert {
            id: format!("{}abc.1", ID_PREFIX),
            area_desc: "Barnstable, MA; Dukes, MA".to_string(),
            sent: DateTime::parse_from_rfc3339("2024-01-09T15:20:00-05:00").unwrap(),
            expires: None,
            severity,
            event: event.to_string(),
            sender_name: "NWS Boston/Norton MA".to_string(),
            headline: Some("Headline [sic]".to_string()),
            description: None,
            instruction: None,
        }
    }

    #[test]
    fn test_full_id() {
        assert_eq!(full_id("abc"), "urn:oid:2.49.0.1.840.0.abc");
        assert_eq!(full_id("urn:oid:2.49.0.1.840.0.abc"), "urn:oid:2.49.0.1.840.0.abc");
        assert_eq!(short_id("urn:oid:2.49.0.1.840.0.abc"), "abc");
    }

    #[test]
    fn test_alert_type_extreme_is_bold() {
        assert_eq!(
            alert_type(&alert("Tornado Warning", Severity::Extreme)),
            "[red bold]Tornado Warning[/]\n:exclamation_mark: :tornado: "
        );
        assert_eq!(
            alert_type(&alert("Tornado Warning", Severity::Severe)),
            "[red]Tornado Warning[/]\n:exclamation_mark: :tornado: "
        );
    }

    #[test]
    fn test_timestamp_splits_date_and_time() {
        let sent = DateTime::parse_from_rfc3339("2024-01-09T15:20:00-05:00").unwrap();
        assert_eq!(
            timestamp(Some(&sent), "magenta"),
            "[magenta]2024-01-09\n15:20:00-05:00[/]"
        );
        assert_eq!(timestamp(None, "yellow"), "[yellow]N/A[/]");
    }

    #[test]
    fn test_alerts_table_text() {
        let requested = Utc.with_ymd_and_hms(2024, 1, 9, 20, 30, 0).unwrap();
        let alerts = [alert("High Wind Warning", Severity::Severe)];
        let out = alerts_table("MA", &alerts, true, requested).render(&Styler::new(OutputMode::Text), 200);

        assert!(out.contains("Alerts for MA, requested: 2024-01-09 20:30:00 UTC"));
        assert!(out.contains("abc.1"));
        assert!(!out.contains(ID_PREFIX));
        assert!(out.contains("Barnstable, MA, Dukes, MA"));
        assert!(out.contains("2024-01-09"));
        assert!(out.contains("15:20:00-05:00"));
        assert!(out.contains("N/A"));
        assert!(out.contains("NWS Boston/Norton MA"));
    }

    #[test]
    fn test_detail_table() {
        let out = detail_table(&alert("Made-Up Category", Severity::Minor), "urn:x")
            .render(&Styler::new(OutputMode::Text), 200);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0].trim(), "Made-Up Category");
        assert!(out.contains("Headline [sic]"));
        assert!(out.contains("│ Instruction │ N/A"));
        assert!(out.contains("│ Severity    │ Minor"));
        assert!(lines[1..].iter().all(|l| l.chars().count() == DETAIL_WIDTH));
    }

    #[test]
    fn test_bracketed_event_is_shown_verbatim() {
        let event = "Special [bold] Statement [/] X";
        let styler = Styler::new(OutputMode::Text);
        assert_eq!(styler.apply(&alert_type(&alert(event, Severity::Minor))), event);

        let out = detail_table(&alert(event, Severity::Minor), "urn:x").render(&styler, 200);
        assert_eq!(out.lines().next().unwrap_or_default().trim(), event);
    }

    #[test]
    fn test_detail_table_extreme_border() {
        let out = detail_table(&alert("Tornado Warning", Severity::Extreme), "urn:x")
            .render(&Styler::new(OutputMode::Term), 200);
        let body = out.lines().nth(4).unwrap_or_default();
        assert!(body.starts_with("\x1b[31m\x1b[1m│") || body.starts_with("\x1b[1m\x1b[31m│"), "{:?}", body);
    }
}

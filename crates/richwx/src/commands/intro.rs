//! `richwx intro`: a banner and a sample alert table.

use richwx_render::rule;
use richwx_render::table::{Column, Table};
use richwx_styles::{render, Emphasis};
use serde::Serialize;

use super::CommandContext;

const BANNER: &str = ":tornado: :high_voltage::snowflake: [bold italic][red]Welcome[/] [green]to[/] \
[blue]RichWx[/][/] :wind_blowing_face: :sun_behind_rain_cloud: :thermometer:";

#[derive(Serialize)]
struct SampleIntro {
    command: &'static str,
}

/// Banner, intro text and the sample table.
pub fn run(ctx: &CommandContext) -> anyhow::Result<String> {
    let styler = ctx.styler();
    let lines = [
        String::new(),
        rule(styler, Some(BANNER), ctx.width),
        ctx.renderer.render("intro", &())?,
        rule(styler, Some("Sample Alert Table"), ctx.width),
        ctx.renderer.render(
            "intro_sample",
            &SampleIntro {
                command: "richwx alerts state",
            },
        )?,
        sample_table().render(styler, ctx.width),
    ];
    Ok(lines.join("\n"))
}

/// Made-up alerts showing how categories are drawn, including one the
/// registry has never heard of.
pub fn sample_table() -> Table {
    let emphasis = Emphasis::new().newline_after_icons();
    Table::new()
        .title("== SAMPLE ALERTS, NOT REAL ==\n")
        .show_lines(true)
        .show_edge(false)
        .column(Column::named("Alert Type").center())
        .column(Column::named("Location").center())
        .column(Column::named("Issued").center())
        .column(Column::named("Expires").center())
        .column(Column::named("Sender").center())
        .row([
            render("Flood Warning", emphasis),
            "Jefferson, Cliff".to_string(),
            "1/1/2021 11:19AM EST".to_string(),
            "1/1/2021 5:30PM EST".to_string(),
            "It's a mystery...".to_string(),
        ])
        .row([
            render("Tornado Warning", emphasis.bold()),
            "Alachua".to_string(),
            "1/1/2021 11:19AM EST".to_string(),
            "1/1/2021 5:30PM EST".to_string(),
            "Another mystery.".to_string(),
        ])
        .row([
            format!(":hamburger: {}", render("Intern Roy missed slider happy hour", emphasis)),
            "Nearby Arby's".to_string(),
            "12/16/2021 4:00PM".to_string(),
            "When he doesn't miss slider happy hour".to_string(),
            "NWS Podunk".to_string(),
        ])
}

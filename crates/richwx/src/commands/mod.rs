//! Command handlers.
//!
//! Each handler returns its rendered output; `main` prints it. Handlers that
//! fetch data take an [`AlertSource`] so they can run against canned data.

pub mod alerts;
pub mod auth;
pub mod intro;

use anyhow::Context;
use richwx_render::{OutputMode, RenderError, Renderer, Styler};

use crate::api::NwsClient;
use crate::cli::{AlertsCommand, AuthCommand, Cli, Command};
use crate::settings::{SettingsStore, UserAgent};

const TEMPLATES: &[(&str, &str)] = &[
    ("intro", include_str!("../../templates/intro.jinja")),
    ("intro_sample", include_str!("../../templates/intro_sample.jinja")),
    ("attention", include_str!("../../templates/attention.jinja")),
    ("contact_missing", include_str!("../../templates/contact_missing.jinja")),
    ("no_alerts", include_str!("../../templates/no_alerts.jinja")),
    ("auth_set", include_str!("../../templates/auth_set.jinja")),
    ("auth_purge", include_str!("../../templates/auth_purge.jinja")),
    ("auth_check", include_str!("../../templates/auth_check.jinja")),
];

/// What every handler gets: a renderer for the chosen output mode and the
/// width to lay tables out in.
pub struct CommandContext {
    pub renderer: Renderer,
    pub width: usize,
}

impl CommandContext {
    /// Loads the embedded templates for `mode`.
    pub fn new(mode: OutputMode, width: usize) -> Result<Self, RenderError> {
        let mut renderer = Renderer::new(mode);
        for (name, source) in TEMPLATES {
            renderer.add_template(name, source)?;
        }
        Ok(Self { renderer, width })
    }

    pub fn styler(&self) -> &Styler {
        self.renderer.styler()
    }

    pub fn mode(&self) -> OutputMode {
        self.renderer.mode()
    }
}

/// Runs the parsed command line.
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let ctx = CommandContext::new(cli.output, richwx_render::terminal_width())
        .context("failed to load templates")?;
    let store = match &cli.settings {
        Some(path) => SettingsStore::at(path),
        None => SettingsStore::at(SettingsStore::default_path()?),
    };

    match &cli.command {
        Command::Intro => intro::run(&ctx),
        Command::Alerts(command) => {
            let user_agent = store.load().context("failed to load user agent settings")?;
            let client = NwsClient::new(&cli.api_base, &user_agent)
                .context("failed to build the HTTP client")?;
            let output = match command {
                AlertsCommand::State { state, show_id } => {
                    alerts::state(&ctx, &client, state, *show_id)?
                }
                AlertsCommand::Id { id } => alerts::by_id(&ctx, &client, id)?,
            };
            with_contact_warning(&ctx, &user_agent, output)
        }
        Command::Auth(command) => match command {
            AuthCommand::Set { contact } => auth::set(&ctx, &store, contact),
            AuthCommand::Purge => auth::purge(&ctx, &store),
            AuthCommand::Check => auth::check(&ctx, &store),
        },
    }
}

/// Prefixes output with a reminder when no contact details are configured.
///
/// Structured output stays parseable; the reminder goes to the log instead.
pub fn with_contact_warning(
    ctx: &CommandContext,
    user_agent: &UserAgent,
    output: String,
) -> anyhow::Result<String> {
    if user_agent.contact_is_set() {
        return Ok(output);
    }
    if ctx.mode().is_structured() {
        log::warn!("no contact information set; use `richwx auth set`");
        return Ok(output);
    }
    let warning = ctx.renderer.render("contact_missing", &())?;
    Ok(format!("{}\n{}", warning, output))
}

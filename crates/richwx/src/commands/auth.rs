//! `richwx auth`.

use anyhow::Context;
use serde::Serialize;

use super::CommandContext;
use crate::settings::SettingsStore;

#[derive(Serialize)]
struct ContactView<'a> {
    contact: &'a str,
    is_set: bool,
}

/// Stores contact details; multiple words are joined with spaces.
pub fn set(ctx: &CommandContext, store: &SettingsStore, words: &[String]) -> anyhow::Result<String> {
    let contact = words.join(" ");
    let user_agent = store
        .set_contact(&contact)
        .context("failed to save contact information")?;
    Ok(ctx.renderer.render_or_serialize(
        "auth_set",
        &ContactView {
            contact: &user_agent.contact,
            is_set: user_agent.contact_is_set(),
        },
    )?)
}

/// `richwx auth purge`: back to the default user agent.
pub fn purge(ctx: &CommandContext, store: &SettingsStore) -> anyhow::Result<String> {
    let user_agent = store.purge().context("failed to purge contact information")?;
    Ok(ctx.renderer.render_or_serialize("auth_purge", &user_agent)?)
}

/// `richwx auth check`: shows the stored contact.
pub fn check(ctx: &CommandContext, store: &SettingsStore) -> anyhow::Result<String> {
    let user_agent = store.load().context("failed to load user agent settings")?;
    Ok(ctx.renderer.render_or_serialize(
        "auth_check",
        &ContactView {
            contact: &user_agent.contact,
            is_set: user_agent.contact_is_set(),
        },
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use richwx_render::OutputMode;

    fn setup(mode: OutputMode) -> (tempfile::TempDir, SettingsStore, CommandContext) {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::at(dir.path().join("useragent.toml"));
        let ctx = CommandContext::new(mode, 80).unwrap();
        (dir, store, ctx)
    }

    #[test]
    fn test_set_then_check() {
        let (_dir, store, ctx) = setup(OutputMode::Text);
        let words = vec!["wx".to_string(), "fan".to_string()];

        let out = set(&ctx, &store, &words).unwrap();
        assert!(out.contains("User agent contact info now set to: wx fan"));
        assert!(out.contains("Reminder"));

        let out = check(&ctx, &store).unwrap();
        assert_eq!(out, "\n=> Contact information to be sent to the API as metadata: wx fan\n");
    }

    #[test]
    fn test_check_unset() {
        let (_dir, store, ctx) = setup(OutputMode::Text);
        let out = check(&ctx, &store).unwrap();
        assert_eq!(
            out,
            "\n=> Contact information has not been set. Set it using richwx auth set\n"
        );
    }

    #[test]
    fn test_purge() {
        let (_dir, store, ctx) = setup(OutputMode::Text);
        store.set_contact("me@example.com").unwrap();
        let out = purge(&ctx, &store).unwrap();
        assert_eq!(out, "\n=> PURGED user agent information locally.\n");
        assert!(!store.load().unwrap().contact_is_set());
    }

    #[test]
    fn test_contact_with_brackets_is_literal() {
        let (_dir, store, ctx) = setup(OutputMode::Term);
        let words = vec!["[red]me[/]".to_string()];
        let out = set(&ctx, &store, &words).unwrap();
        assert!(out.contains("[red]me[/]"));
    }

    #[test]
    fn test_check_json() {
        let (_dir, store, ctx) = setup(OutputMode::Json);
        let value: serde_json::Value = serde_json::from_str(&check(&ctx, &store).unwrap()).unwrap();
        assert_eq!(value["contact"], "NoneSet");
        assert_eq!(value["is_set"], false);
    }
}

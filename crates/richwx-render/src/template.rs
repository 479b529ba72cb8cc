//! Pre-compiled template renderer.

use minijinja::{Environment, Value};
use serde::Serialize;

use crate::error::RenderError;
use crate::markup::Styler;
use crate::output::OutputMode;

/// Registers richwx's filters on a minijinja environment.
///
/// - `escape_markup`: makes a value safe to embed in markup, so API text
///   like `[NWS Boston]` can't open a tag
/// - `nl`: appends a newline; `{{ "" | nl }}` is a blank line
pub fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("escape_markup", |value: Value| -> String {
        richwx_bbparser::escape(&value.to_string())
    });
    env.add_filter("nl", |value: Value| -> String { format!("{}\n", value) });
}

/// A renderer with pre-registered templates.
///
/// Templates produce markup, which [`Renderer::render`] then styles for the
/// renderer's output mode.
///
/// # Example
///
/// ```rust
/// use richwx_render::{OutputMode, Renderer};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Contact { contact: String }
///
/// let mut renderer = Renderer::new(OutputMode::Text);
/// renderer
///     .add_template("set", "Contact: [blue]{{ contact | escape_markup }}[/]")
///     .unwrap();
///
/// let out = renderer.render("set", &Contact { contact: "me [at] example.com".into() }).unwrap();
/// assert_eq!(out, "Contact: me [at] example.com");
/// ```
pub struct Renderer {
    env: Environment<'static>,
    styler: Styler,
}

impl Renderer {
    /// A renderer with the markup filters registered and no templates.
    pub fn new(mode: OutputMode) -> Self {
        let mut env = Environment::new();
        register_filters(&mut env);
        Self {
            env,
            styler: Styler::new(mode),
        }
    }

    /// The styler output goes through.
    pub fn styler(&self) -> &Styler {
        &self.styler
    }

    pub fn mode(&self) -> OutputMode {
        self.styler.mode()
    }

    /// Registers a named template.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    /// Renders a registered template to markup, without styling it.
    pub fn render_markup<T: Serialize>(&self, name: &str, data: &T) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(data)?)
    }

    /// Renders a registered template and styles the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found or rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, RenderError> {
        let markup = self.render_markup(name, data)?;
        Ok(self.styler.apply(&markup))
    }

    /// Renders a template, or serializes the data as JSON in structured mode.
    pub fn render_or_serialize<T: Serialize>(&self, name: &str, data: &T) -> Result<String, RenderError> {
        if self.mode().is_structured() {
            Ok(serde_json::to_string_pretty(data)?)
        } else {
            self.render(name, data)
        }
    }
}

//! The registry facade: maps a template id to a backend and renders it.

use crate::error::PipelineError;
use crate::template::Template;
use folio_render_browser::{BrowserLauncher, BrowserOptions, BrowserRenderer, ChromeLauncher};
use folio_render_core::{Backend, RenderError, RenderOptions, RenderResult};
use folio_render_pdf::VectorRenderer;
use folio_types::PdfConfig;
use serde_json::Value;
use std::collections::HashMap;

type LauncherFactory<L> = Box<dyn Fn(&BrowserOptions) -> Result<L, RenderError> + Send + Sync>;

/// Holds default page configuration and a set of templates keyed by id.
///
/// Each render merges the generator's configuration with the template's own
/// (the template wins field by field) and picks a backend from the render
/// options. The browser is only launched when a browser render is requested
/// and the template can compose markup.
pub struct PdfGenerator<L = ChromeLauncher> {
    config: PdfConfig,
    templates: HashMap<String, Template>,
    browser: BrowserOptions,
    launcher: LauncherFactory<L>,
}

impl PdfGenerator<ChromeLauncher> {
    /// A generator whose browser backend discovers Chrome when first needed.
    pub fn new(config: PdfConfig) -> Self {
        Self::with_launcher_factory(config, ChromeLauncher::from_options)
    }
}

impl Default for PdfGenerator<ChromeLauncher> {
    fn default() -> Self {
        Self::new(PdfConfig::default())
    }
}

impl<L: BrowserLauncher + Clone + 'static> PdfGenerator<L> {
    /// A generator whose browser renders all go through `launcher`.
    pub fn with_launcher(config: PdfConfig, launcher: L) -> Self {
        Self::with_launcher_factory(config, move |_: &BrowserOptions| Ok(launcher.clone()))
    }
}

impl<L: BrowserLauncher> PdfGenerator<L> {
    fn with_launcher_factory<F>(config: PdfConfig, factory: F) -> Self
    where
        F: Fn(&BrowserOptions) -> Result<L, RenderError> + Send + Sync + 'static,
    {
        Self {
            config,
            templates: HashMap::new(),
            browser: BrowserOptions::default(),
            launcher: Box::new(factory),
        }
    }

    pub fn with_browser_options(mut self, options: BrowserOptions) -> Self {
        self.browser = options;
        self
    }

    pub fn config(&self) -> &PdfConfig {
        &self.config
    }

    /// Adds a template, replacing any earlier one with the same id.
    pub fn register(&mut self, template: Template) -> &mut Self {
        log::debug!("Registering template '{}'", template.id());
        self.templates.insert(template.id().to_string(), template);
        self
    }

    pub fn template(&self, id: &str) -> Option<&Template> {
        self.templates.get(id)
    }

    pub fn template_ids(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    /// Renders a registered template by id.
    pub async fn render(
        &self,
        id: &str,
        data: &Value,
        options: &RenderOptions,
    ) -> Result<RenderResult, PipelineError> {
        let template = self
            .templates
            .get(id)
            .ok_or_else(|| PipelineError::TemplateNotFound(id.to_string()))?;
        self.generate(template, data, options).await
    }

    /// Renders a template without registering it.
    pub async fn generate(
        &self,
        template: &Template,
        data: &Value,
        options: &RenderOptions,
    ) -> Result<RenderResult, PipelineError> {
        let config = self.config.merged_with(template.config());

        if options.backend == Backend::Browser {
            match template.compose(data) {
                Some(markup) => {
                    let fragment = markup?;
                    log::debug!("Rendering '{}' on the browser backend", template.id());
                    let launcher = (self.launcher)(&self.browser)?;
                    let renderer =
                        BrowserRenderer::with_launcher(&config, launcher, self.browser.clone());
                    return Ok(renderer.render_html(&fragment, options).await?);
                }
                None => log::info!(
                    "Template '{}' has no markup strategy; falling back to the vector backend",
                    template.id()
                ),
            }
        }

        log::debug!("Rendering '{}' on the vector backend", template.id());
        let renderer = VectorRenderer::new(&config).with_title(template.name());
        Ok(renderer.render(template, data, options)?)
    }
}

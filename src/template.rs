//! Type-erased content producers for the generator's registry.
//!
//! A [`Template`] wraps a typed producer behind JSON data. The markup strategy
//! is only captured when the producer implements [`ComposeMarkup`], so a
//! template can never claim browser support without a way to compose HTML.

use folio_render_core::{ComposeMarkup, CursorContext, DrawContent, RenderError};
use folio_types::PdfConfig;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

type DrawFn = Box<dyn Fn(&Value, &mut CursorContext<'_>) -> Result<(), RenderError> + Send + Sync>;
type ComposeFn = Box<dyn Fn(&Value) -> Result<String, RenderError> + Send + Sync>;

pub struct Template {
    id: String,
    name: String,
    config: PdfConfig,
    draw: DrawFn,
    compose: Option<ComposeFn>,
}

fn decode<D: DeserializeOwned>(id: &str, data: &Value) -> Result<D, RenderError> {
    D::deserialize(data)
        .map_err(|e| RenderError::InvalidData(format!("template '{}': {}", id, e)))
}

impl Template {
    /// A template that can only be drawn on the vector backend.
    pub fn vector<P>(id: impl Into<String>, name: impl Into<String>, producer: P) -> Self
    where
        P: DrawContent + Send + Sync + 'static,
        P::Data: DeserializeOwned,
    {
        let id = id.into();
        let producer = Arc::new(producer);
        Self {
            draw: Self::draw_fn(id.clone(), producer),
            id,
            name: name.into(),
            config: PdfConfig::default(),
            compose: None,
        }
    }

    /// A template that can be drawn on the vector backend or composed to HTML
    /// for the browser-print backend.
    pub fn dual<P>(id: impl Into<String>, name: impl Into<String>, producer: P) -> Self
    where
        P: ComposeMarkup + Send + Sync + 'static,
        P::Data: DeserializeOwned,
    {
        let id = id.into();
        let producer = Arc::new(producer);
        let compose_id = id.clone();
        let composer = Arc::clone(&producer);
        let compose: ComposeFn = Box::new(move |data| {
            let data: P::Data = decode(&compose_id, data)?;
            composer.compose(&data)
        });
        Self {
            draw: Self::draw_fn(id.clone(), producer),
            id,
            name: name.into(),
            config: PdfConfig::default(),
            compose: Some(compose),
        }
    }

    fn draw_fn<P>(id: String, producer: Arc<P>) -> DrawFn
    where
        P: DrawContent + Send + Sync + 'static,
        P::Data: DeserializeOwned,
    {
        Box::new(move |data, ctx| {
            let data: P::Data = decode(&id, data)?;
            producer.draw(&data, ctx)
        })
    }

    /// Configuration layered over the generator's defaults for this template.
    pub fn with_config(mut self, config: PdfConfig) -> Self {
        self.config = config;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &PdfConfig {
        &self.config
    }

    pub fn supports_markup(&self) -> bool {
        self.compose.is_some()
    }

    /// Composes the HTML fragment, or `None` when the template has no markup
    /// strategy.
    pub fn compose(&self, data: &Value) -> Option<Result<String, RenderError>> {
        self.compose.as_ref().map(|compose| compose(data))
    }
}

impl DrawContent for Template {
    type Data = Value;

    fn draw(&self, data: &Value, ctx: &mut CursorContext<'_>) -> Result<(), RenderError> {
        (self.draw)(data, ctx)
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("config", &self.config)
            .field("supports_markup", &self.supports_markup())
            .finish()
    }
}

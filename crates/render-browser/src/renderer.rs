use crate::chrome::ChromeLauncher;
use crate::compose::compose_document;
use crate::page_count::{PageCountStrategy, count_pages};
use crate::session::{BrowserLauncher, BrowserSession, PrintOptions};
use folio_render_core::{ComposeMarkup, OutputFormat, RenderError, RenderOptions, RenderResult, encode_output};
use folio_types::{PdfConfig, ResolvedConfig};
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_READY_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_PRINT_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_VIRTUAL_TIME_BUDGET: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq)]
pub struct BrowserOptions {
    /// Chrome executable. `None` means discover it.
    pub chrome_path: Option<PathBuf>,
    /// Bound on launch, content load and font readiness, each.
    pub ready_timeout: Duration,
    pub print_timeout: Duration,
    /// How long Chrome may let the page settle before its DOM is read or it
    /// is printed.
    pub virtual_time_budget: Duration,
    pub page_count: PageCountStrategy,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            chrome_path: None,
            ready_timeout: DEFAULT_READY_TIMEOUT,
            print_timeout: DEFAULT_PRINT_TIMEOUT,
            virtual_time_budget: DEFAULT_VIRTUAL_TIME_BUDGET,
            page_count: PageCountStrategy::default(),
        }
    }
}

/// Renders composed HTML by printing it in an isolated browser session.
///
/// Each render launches its own session and closes it before returning,
/// whether or not printing succeeded.
pub struct BrowserRenderer<L = ChromeLauncher> {
    config: ResolvedConfig,
    launcher: L,
    options: BrowserOptions,
}

impl BrowserRenderer<ChromeLauncher> {
    /// A renderer backed by a discovered (or configured) Chrome.
    pub fn new(config: &PdfConfig, options: BrowserOptions) -> Result<Self, RenderError> {
        let launcher = ChromeLauncher::from_options(&options)?;
        Ok(Self::with_launcher(config, launcher, options))
    }
}

impl<L: BrowserLauncher> BrowserRenderer<L> {
    pub fn with_launcher(config: &PdfConfig, launcher: L, options: BrowserOptions) -> Self {
        Self {
            config: config.resolve(),
            launcher,
            options,
        }
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Composes markup with the producer, then prints it.
    pub async fn render<P>(
        &self,
        producer: &P,
        data: &P::Data,
        options: &RenderOptions,
    ) -> Result<RenderResult, RenderError>
    where
        P: ComposeMarkup + ?Sized,
    {
        let fragment = producer.compose(data)?;
        self.render_html(&fragment, options).await
    }

    pub async fn render_html(
        &self,
        fragment: &str,
        options: &RenderOptions,
    ) -> Result<RenderResult, RenderError> {
        let document = compose_document(&self.config, fragment);
        let print = PrintOptions::from_config(&self.config);

        log::debug!("Launching browser session");
        let mut session = bounded("browser launch", self.options.ready_timeout, self.launcher.launch()).await?;
        let printed = self.print_in(&mut session, &document, &print).await;
        log::debug!("Closing browser session");
        let closed = session.close().await;

        let bytes = match (printed, closed) {
            (Ok(bytes), Ok(())) => bytes,
            (Ok(_), Err(close_err)) => return Err(close_err),
            (Err(err), Ok(())) => return Err(err),
            (Err(err), Err(close_err)) => {
                log::warn!("Browser close failed after an earlier failure: {}", close_err);
                return Err(err);
            }
        };

        let pages = count_pages(&bytes, self.options.page_count);
        log::info!(
            "Browser backend rendered {} page(s), {} bytes",
            pages,
            bytes.len()
        );
        let format = match options.format.clone() {
            Some(OutputFormat::Save { .. }) => {
                log::warn!("The browser backend cannot save to disk; returning a buffer");
                OutputFormat::Buffer
            }
            Some(format) => format,
            None => OutputFormat::Buffer,
        };
        encode_output(bytes, pages, &format)
    }

    async fn print_in(
        &self,
        session: &mut L::Session,
        document: &str,
        print: &PrintOptions,
    ) -> Result<Vec<u8>, RenderError> {
        bounded("content load", self.options.ready_timeout, session.load_html(document)).await?;
        bounded("fonts ready", self.options.ready_timeout, session.fonts_ready()).await?;
        bounded("print", self.options.print_timeout, session.print_pdf(print)).await
    }
}

async fn bounded<T>(
    stage: &'static str,
    after: Duration,
    future: impl Future<Output = Result<T, RenderError>>,
) -> Result<T, RenderError> {
    tokio::time::timeout(after, future)
        .await
        .map_err(|_| RenderError::Timeout { stage, after })?
}

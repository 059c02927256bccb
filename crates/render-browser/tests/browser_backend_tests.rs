use folio_render_browser::{
    BrowserLauncher, BrowserOptions, BrowserRenderer, BrowserSession, PageCountStrategy,
    PrintOptions,
};
use folio_render_core::{
    ComposeMarkup, CursorContext, DrawContent, OutputFormat, Payload, RenderError, RenderOptions,
    TextOptions,
};
use folio_types::PdfConfig;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const TWO_PAGE_BYTES: &[u8] =
    b"%PDF-1.4\n1 0 obj << /Type /Pages /Kids [2 0 R 3 0 R] >>\n2 0 obj << /Type /Page >>\n3 0 obj << /Type /Page >>\n%%EOF";

#[derive(Clone, Copy)]
enum Behavior {
    Succeed,
    FailPrint,
    HangOnLoad,
    FailPrintAndClose,
}

#[derive(Clone)]
struct FakeLauncher {
    behavior: Behavior,
    launches: Arc<AtomicUsize>,
    closes: Arc<AtomicUsize>,
    loaded: Arc<Mutex<Option<String>>>,
    printed: Arc<Mutex<Option<PrintOptions>>>,
}

impl FakeLauncher {
    fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            launches: Arc::new(AtomicUsize::new(0)),
            closes: Arc::new(AtomicUsize::new(0)),
            loaded: Arc::new(Mutex::new(None)),
            printed: Arc::new(Mutex::new(None)),
        }
    }
}

struct FakeSession {
    launcher: FakeLauncher,
}

impl BrowserLauncher for FakeLauncher {
    type Session = FakeSession;

    async fn launch(&self) -> Result<FakeSession, RenderError> {
        self.launches.fetch_add(1, Ordering::SeqCst);
        Ok(FakeSession {
            launcher: self.clone(),
        })
    }
}

impl BrowserSession for FakeSession {
    async fn load_html(&mut self, html: &str) -> Result<(), RenderError> {
        if let Behavior::HangOnLoad = self.launcher.behavior {
            std::future::pending::<()>().await;
        }
        *self.launcher.loaded.lock().unwrap() = Some(html.to_string());
        Ok(())
    }

    async fn fonts_ready(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    async fn print_pdf(&mut self, options: &PrintOptions) -> Result<Vec<u8>, RenderError> {
        *self.launcher.printed.lock().unwrap() = Some(options.clone());
        match self.launcher.behavior {
            Behavior::Succeed | Behavior::HangOnLoad => Ok(TWO_PAGE_BYTES.to_vec()),
            Behavior::FailPrint | Behavior::FailPrintAndClose => {
                Err(RenderError::Browser("printer on fire".into()))
            }
        }
    }

    async fn close(self) -> Result<(), RenderError> {
        self.launcher.closes.fetch_add(1, Ordering::SeqCst);
        match self.launcher.behavior {
            Behavior::FailPrintAndClose => Err(RenderError::Browser("close failed".into())),
            _ => Ok(()),
        }
    }
}

fn renderer(launcher: FakeLauncher) -> BrowserRenderer<FakeLauncher> {
    BrowserRenderer::with_launcher(&PdfConfig::default(), launcher, BrowserOptions::default())
}

#[tokio::test]
async fn paragraph_prints_with_pages_and_payload() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let launcher = FakeLauncher::new(Behavior::Succeed);
    let result = renderer(launcher.clone())
        .render_html("<p>x</p>", &RenderOptions::default())
        .await?;

    assert!(result.pages >= 1);
    assert_eq!(result.pages, 2);
    match &result.payload {
        Payload::Buffer(bytes) => assert!(!bytes.is_empty()),
        other => panic!("expected the default buffer payload, got {:?}", other),
    }
    assert_eq!(launcher.launches.load(Ordering::SeqCst), 1);
    assert_eq!(launcher.closes.load(Ordering::SeqCst), 1);

    let loaded = launcher.loaded.lock().unwrap().clone().ok_or("document loaded")?;
    assert!(loaded.contains("<p>x</p>"));
    assert!(loaded.contains("size: letter portrait;"));

    let printed = launcher.printed.lock().unwrap().clone().ok_or("printed")?;
    assert!(!printed.landscape);
    assert!(printed.print_background);
    assert_eq!(printed.margins.top, "0.5in");
    assert_eq!(printed.margins.right, "0.5in");
    Ok(())
}

#[tokio::test]
async fn print_failure_still_closes_exactly_once() {
    let _ = env_logger::builder().is_test(true).try_init();

    let launcher = FakeLauncher::new(Behavior::FailPrint);
    let err = renderer(launcher.clone())
        .render_html("<p>x</p>", &RenderOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, RenderError::Browser(ref msg) if msg == "printer on fire"));
    assert_eq!(launcher.closes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn close_failure_does_not_mask_print_failure() {
    let _ = env_logger::builder().is_test(true).try_init();

    let launcher = FakeLauncher::new(Behavior::FailPrintAndClose);
    let err = renderer(launcher.clone())
        .render_html("<p>x</p>", &RenderOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, RenderError::Browser(ref msg) if msg == "printer on fire"));
    assert_eq!(launcher.closes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn hung_content_load_times_out_and_closes() {
    let _ = env_logger::builder().is_test(true).try_init();

    let launcher = FakeLauncher::new(Behavior::HangOnLoad);
    let options = BrowserOptions {
        ready_timeout: Duration::from_millis(50),
        ..Default::default()
    };
    let err = BrowserRenderer::with_launcher(&PdfConfig::default(), launcher.clone(), options)
        .render_html("<p>x</p>", &RenderOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, RenderError::Timeout { stage: "content load", .. }));
    assert_eq!(launcher.closes.load(Ordering::SeqCst), 1);
    assert!(launcher.printed.lock().unwrap().is_none());
}

#[tokio::test]
async fn save_request_returns_a_buffer() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let launcher = FakeLauncher::new(Behavior::Succeed);
    let result = renderer(launcher)
        .render_html(
            "<p>x</p>",
            &RenderOptions::with_format(OutputFormat::save_to("never-written.pdf")),
        )
        .await?;
    assert!(matches!(result.payload, Payload::Buffer(_)));
    assert!(!std::path::Path::new("never-written.pdf").exists());
    Ok(())
}

#[tokio::test]
async fn base64_and_marker_scan() -> TestResult {
    let launcher = FakeLauncher::new(Behavior::Succeed);
    let options = BrowserOptions {
        page_count: PageCountStrategy::MarkerScan,
        ..Default::default()
    };
    let result = BrowserRenderer::with_launcher(&PdfConfig::default(), launcher, options)
        .render_html("<p>x</p>", &RenderOptions::with_format(OutputFormat::Base64))
        .await?;
    assert_eq!(result.pages, 2);
    assert!(result.base64().ok_or("base64 payload")?.starts_with("JVBER"));
    Ok(())
}

struct Greeting;

impl DrawContent for Greeting {
    type Data = str;

    fn draw(&self, name: &str, ctx: &mut CursorContext<'_>) -> Result<(), RenderError> {
        ctx.text(&format!("Hello, {}", name), &TextOptions::default())
    }
}

impl ComposeMarkup for Greeting {
    fn compose(&self, name: &str) -> Result<String, RenderError> {
        Ok(format!("<h1>Hello, {}</h1>", name))
    }
}

#[tokio::test]
async fn producer_markup_is_composed() -> TestResult {
    let launcher = FakeLauncher::new(Behavior::Succeed);
    renderer(launcher.clone())
        .render(&Greeting, "Ada", &RenderOptions::default())
        .await?;
    let loaded = launcher.loaded.lock().unwrap().clone().ok_or("document loaded")?;
    assert!(loaded.contains("<h1>Hello, Ada</h1>"));
    Ok(())
}

#[tokio::test]
#[ignore = "requires a local Chrome or Chromium"]
async fn real_chrome_prints_a_page() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let renderer = BrowserRenderer::new(&PdfConfig::default(), BrowserOptions::default())?;
    let result = renderer
        .render_html("<p>x</p>", &RenderOptions::default())
        .await?;
    assert!(result.pages >= 1);
    assert!(result.bytes().map(|b| b.starts_with(b"%PDF")).unwrap_or(false));
    Ok(())
}

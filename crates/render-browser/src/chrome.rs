//! A browser delegate that drives a locally installed Chrome or Chromium
//! through its command-line print mode.
//!
//! Every session gets its own temporary profile directory. Loading runs
//! Chrome once in `--dump-dom` mode: virtual time only advances while no
//! network fetch is pending, so the dump is taken after the network settles or
//! the virtual time budget runs out. A script added to the document marks the
//! root element once `document.fonts.ready` resolves, and font readiness is
//! the presence of that mark in the dump. The print margins and orientation
//! are applied through an `@page` rule injected just before printing.

use crate::renderer::BrowserOptions;
use crate::session::{BrowserLauncher, BrowserSession, PrintOptions};
use folio_render_core::RenderError;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tempfile::TempDir;
use tokio::process::Command;

/// Environment variable naming the Chrome executable.
pub const CHROME_ENV: &str = "FOLIO_CHROME";
const DEFAULT_VIRTUAL_TIME_BUDGET_MS: u64 = 10_000;
const DOCUMENT_FILE: &str = "document.html";
const OUTPUT_FILE: &str = "output.pdf";

/// Attribute set on `<html>` once the document's font faces have loaded.
const FONTS_READY_MARK: &str = "data-folio-fonts=\"ready\"";
const FONTS_READY_SCRIPT: &str = "<script>document.fonts.ready.then(function () { \
document.documentElement.setAttribute('data-folio-fonts', 'ready'); });</script>";

const PATH_CANDIDATES: &[&str] = &[
    "google-chrome",
    "google-chrome-stable",
    "chromium",
    "chromium-browser",
    "chrome",
];

const WELL_KNOWN_LOCATIONS: &[&str] = &[
    "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
    "/Applications/Chromium.app/Contents/MacOS/Chromium",
    "/usr/bin/google-chrome",
    "/usr/bin/chromium",
    "/snap/bin/chromium",
    r"C:\Program Files\Google\Chrome\Application\chrome.exe",
    r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
];

#[derive(Debug, Clone)]
pub struct ChromeLauncher {
    executable: PathBuf,
    virtual_time_budget_ms: u64,
}

impl ChromeLauncher {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            virtual_time_budget_ms: DEFAULT_VIRTUAL_TIME_BUDGET_MS,
        }
    }

    /// Uses `explicit` when given, then `FOLIO_CHROME`, then the first Chrome
    /// or Chromium found on `PATH` or in a well-known install location.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, RenderError> {
        if let Some(path) = explicit {
            return Ok(Self::new(path));
        }
        if let Some(path) = std::env::var_os(CHROME_ENV) {
            return Ok(Self::new(path));
        }
        find_on_path()
            .or_else(|| {
                WELL_KNOWN_LOCATIONS
                    .iter()
                    .map(PathBuf::from)
                    .find(|candidate| candidate.is_file())
            })
            .map(|path| {
                log::debug!("Discovered browser at {}", path.display());
                Self::new(path)
            })
            .ok_or_else(|| {
                RenderError::Browser(format!(
                    "no Chrome or Chromium executable found; set {} or pass a path",
                    CHROME_ENV
                ))
            })
    }

    /// Discovers Chrome from `options.chrome_path` and applies its virtual
    /// time budget.
    pub fn from_options(options: &BrowserOptions) -> Result<Self, RenderError> {
        let millis = u64::try_from(options.virtual_time_budget.as_millis()).unwrap_or(u64::MAX);
        Ok(Self::discover(options.chrome_path.as_deref())?.with_virtual_time_budget(millis))
    }

    pub fn with_virtual_time_budget(mut self, millis: u64) -> Self {
        self.virtual_time_budget_ms = millis;
        self
    }

    pub fn virtual_time_budget_ms(&self) -> u64 {
        self.virtual_time_budget_ms
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }
}

fn find_on_path() -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths).find_map(|dir| {
        PATH_CANDIDATES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

impl BrowserLauncher for ChromeLauncher {
    type Session = ChromeSession;

    async fn launch(&self) -> Result<ChromeSession, RenderError> {
        let profile = tempfile::Builder::new()
            .prefix("folio-chrome-")
            .tempdir()?;
        log::debug!("Chrome session profile at {}", profile.path().display());
        Ok(ChromeSession {
            executable: self.executable.clone(),
            virtual_time_budget_ms: self.virtual_time_budget_ms,
            profile,
            document: None,
            loaded_dom: None,
        })
    }
}

pub struct ChromeSession {
    executable: PathBuf,
    virtual_time_budget_ms: u64,
    profile: TempDir,
    document: Option<String>,
    /// Serialized DOM after the load pass settled.
    loaded_dom: Option<String>,
}

impl ChromeSession {
    fn document_path(&self) -> PathBuf {
        self.profile.path().join(DOCUMENT_FILE)
    }

    /// Headless Chrome against the session document, with the session profile
    /// and budget. `mode` selects what Chrome produces.
    fn command(&self, mode: &[String]) -> Command {
        let mut command = Command::new(&self.executable);
        command
            .arg("--headless")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--disable-setuid-sandbox")
            .arg("--no-first-run")
            .arg(format!("--user-data-dir={}", self.profile.path().display()))
            .arg(format!("--virtual-time-budget={}", self.virtual_time_budget_ms))
            .args(mode)
            .arg(format!("file://{}", self.document_path().display()))
            .stdin(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }

    async fn run(&self, mut command: Command) -> Result<std::process::Output, RenderError> {
        let output = command.output().await.map_err(|e| {
            RenderError::Browser(format!(
                "failed to start {}: {}",
                self.executable.display(),
                e
            ))
        })?;
        if !output.status.success() {
            return Err(RenderError::Browser(format!(
                "Chrome exited with {}: {}",
                output.status,
                stderr_tail(&output.stderr)
            )));
        }
        Ok(output)
    }
}

/// Inserts `block` just before `</head>`, or at the very start when the
/// document has no head.
fn inject_head(html: &str, block: &str) -> String {
    match html.find("</head>") {
        Some(idx) => format!("{}{}{}", &html[..idx], block, &html[idx..]),
        None => format!("{}{}", block, html),
    }
}

fn inject_style(html: &str, css: &str) -> String {
    inject_head(html, &format!("<style>{}</style>\n", css))
}

fn with_fonts_ready_script(html: &str) -> String {
    inject_head(html, &format!("{}\n", FONTS_READY_SCRIPT))
}

fn fonts_marked_ready(dom: &str) -> bool {
    dom.contains(FONTS_READY_MARK)
}

fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = text.lines().rev().take(5).collect();
    lines.into_iter().rev().collect::<Vec<_>>().join("\n")
}

impl BrowserSession for ChromeSession {
    async fn load_html(&mut self, html: &str) -> Result<(), RenderError> {
        let document = with_fonts_ready_script(html);
        tokio::fs::write(self.document_path(), &document).await?;
        self.document = Some(document);
        self.loaded_dom = None;

        let mut command = self.command(&["--dump-dom".to_string()]);
        command.stdout(Stdio::piped());
        let output = self.run(command).await?;
        let dom = String::from_utf8_lossy(&output.stdout).into_owned();
        log::debug!("Document settled, {} bytes of DOM", dom.len());
        self.loaded_dom = Some(dom);
        Ok(())
    }

    async fn fonts_ready(&mut self) -> Result<(), RenderError> {
        let dom = self
            .loaded_dom
            .as_deref()
            .ok_or_else(|| RenderError::Browser("font check requested before content was loaded".into()))?;
        if !fonts_marked_ready(dom) {
            return Err(RenderError::Browser(format!(
                "fonts did not finish loading within the {}ms virtual time budget",
                self.virtual_time_budget_ms
            )));
        }
        log::debug!("Document fonts are ready");
        Ok(())
    }

    async fn print_pdf(&mut self, options: &PrintOptions) -> Result<Vec<u8>, RenderError> {
        let document = self
            .document
            .as_deref()
            .ok_or_else(|| RenderError::Browser("print requested before content was loaded".into()))?;
        let mut css = options.page_rule();
        if options.print_background {
            css.push_str(" html { -webkit-print-color-adjust: exact; print-color-adjust: exact; }");
        }
        tokio::fs::write(self.document_path(), inject_style(document, &css)).await?;

        let output_path = self.profile.path().join(OUTPUT_FILE);
        let mut command = self.command(&[
            "--no-pdf-header-footer".to_string(),
            "--print-to-pdf-no-header".to_string(),
            format!("--print-to-pdf={}", output_path.display()),
        ]);
        command.stdout(Stdio::null());
        self.run(command).await?;

        let bytes = tokio::fs::read(&output_path).await.map_err(|e| {
            RenderError::Browser(format!("Chrome produced no PDF output: {}", e))
        })?;
        if bytes.is_empty() {
            return Err(RenderError::Browser("Chrome produced an empty PDF".into()));
        }
        Ok(bytes)
    }

    async fn close(self) -> Result<(), RenderError> {
        let path = self.profile.path().to_path_buf();
        self.profile.close()?;
        log::debug!("Removed Chrome session profile {}", path.display());
        Ok(())
    }
}

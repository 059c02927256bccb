use clap::Parser;
use folio::templates::builtin_templates;
use folio::{
    BrowserOptions, OutputFormat, PdfConfig, PdfGenerator, PipelineError, RenderOptions,
};
use serde_json::{Value, from_str};
use std::fs;
use std::path::PathBuf;

/// Renders a built-in document template from JSON data to a PDF file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Template id, e.g. `invoice`
    template: String,

    /// JSON file holding the document data
    data: PathBuf,

    /// Where to write the PDF
    output: PathBuf,

    /// JSON file with page configuration (pageSize, orientation, margins, colors, fonts)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print through headless Chrome instead of drawing vectors
    #[arg(long, default_value_t = false)]
    browser: bool,

    /// Chrome or Chromium executable for --browser
    #[arg(long)]
    chrome: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), PipelineError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("folio=info"))
        .init();

    let args = Args::parse();

    let config: PdfConfig = match &args.config {
        Some(path) => from_str(&fs::read_to_string(path)?)?,
        None => PdfConfig::default(),
    };
    let data: Value = from_str(&fs::read_to_string(&args.data)?)?;

    let mut generator = PdfGenerator::new(config).with_browser_options(BrowserOptions {
        chrome_path: args.chrome.clone(),
        ..Default::default()
    });
    for template in builtin_templates() {
        generator.register(template);
    }

    let mut options = RenderOptions::with_format(OutputFormat::Buffer);
    if args.browser {
        options = RenderOptions::browser().format(OutputFormat::Buffer);
    }

    let result = generator.render(&args.template, &data, &options).await?;
    let bytes = result
        .bytes()
        .ok_or_else(|| PipelineError::Render("renderer returned no bytes".into()))?;
    fs::write(&args.output, bytes)?;

    println!(
        "Generated {} ({} page{})",
        args.output.display(),
        result.pages,
        if result.pages == 1 { "" } else { "s" }
    );
    Ok(())
}

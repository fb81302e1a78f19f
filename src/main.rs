//! cvault CLI
//!
//! Usage:
//!   cvault [--quiet|--verbose] <COMMAND>
//!
//! Commands:
//!   html   Generate an HTML resume from a YAML file
//!   pdf    Export an HTML resume to PDF
//!   build  Generate HTML and export it to PDF in one step
//!   batch  Build every YAML resume in a directory

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

use cvault::pdf::export_pdf;
use cvault::{
    generate_html_with_registry, load_resume, resolved_style_for, ChromeRasterizer, Error,
    GenerateOptions, PaperFormat, PdfOptions, Template, TemplateRegistry,
};

#[derive(Parser)]
#[command(name = "cvault")]
#[command(about = "Create resumes from YAML files", version)]
struct Cli {
    /// Suppress non-error output
    #[arg(long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Enable verbose logging for debugging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate an HTML resume from a YAML file
    Html {
        /// Path to the input YAML file
        input: PathBuf,

        /// Path to the output HTML file
        #[arg(short, long, default_value = "resume.html")]
        output: PathBuf,

        #[command(flatten)]
        template: TemplateArgs,
    },

    /// Export an HTML resume to PDF
    Pdf {
        /// Path to the HTML file to convert
        input: PathBuf,

        /// Path to the output PDF file
        #[arg(short, long, default_value = "resume.pdf")]
        output: PathBuf,

        #[command(flatten)]
        pdf: PdfArgs,
    },

    /// Generate HTML and export to PDF from a YAML file
    Build {
        /// Path to the input YAML file
        input: PathBuf,

        /// Path to the output HTML file
        #[arg(long, default_value = "resume.html")]
        html: PathBuf,

        /// Path to the output PDF file
        #[arg(long, default_value = "resume.pdf")]
        pdf: PathBuf,

        #[command(flatten)]
        pdf_args: PdfArgs,

        #[command(flatten)]
        template: TemplateArgs,
    },

    /// Build every *.yaml resume in a directory, one at a time
    Batch {
        /// Directory holding the YAML resumes
        dir: PathBuf,

        /// Output directory (defaults to <DIR>/rendered)
        #[arg(long)]
        out_dir: Option<PathBuf>,

        /// Only write HTML
        #[arg(long, conflicts_with = "pdf_only")]
        html_only: bool,

        /// Only keep the PDF
        #[arg(long)]
        pdf_only: bool,

        /// Browser binary used for PDF export
        #[arg(long)]
        browser: Option<PathBuf>,
    },
}

#[derive(Args)]
struct TemplateArgs {
    /// Template identifier to use
    #[arg(short, long)]
    template: Option<String>,

    /// Load an extra template definition (TOML)
    #[arg(long)]
    template_file: Option<PathBuf>,
}

#[derive(Args)]
struct PdfArgs {
    /// Paper format: A4 or Letter
    #[arg(short, long, default_value = "A4")]
    format: String,

    /// Disable printing background colors and images
    #[arg(long)]
    no_background: bool,

    /// Browser binary used for PDF export
    #[arg(long)]
    browser: Option<PathBuf>,
}

impl TemplateArgs {
    /// Registry plus generation options. A loaded template file is selected
    /// unless `--template` names another one.
    fn resolve(&self) -> Result<(TemplateRegistry, GenerateOptions), Error> {
        let mut registry = TemplateRegistry::new();
        let mut options = GenerateOptions::new();

        if let Some(path) = &self.template_file {
            let template = Template::from_file(path)?;
            log::debug!("Loaded template '{}' from {}", template.id, path.display());
            options = options.with_template(template.id.clone());
            registry.register(template)?;
        }
        if let Some(id) = &self.template {
            options = options.with_template(id.clone());
        }

        Ok((registry, options))
    }
}

impl PdfArgs {
    fn options(&self) -> PdfOptions {
        PdfOptions::new()
            .with_format(PaperFormat::parse_lenient(&self.format))
            .with_background(!self.no_background)
    }
}

fn rasterizer(browser: Option<&Path>) -> ChromeRasterizer {
    match browser {
        Some(path) => ChromeRasterizer::new().with_browser(path),
        None => ChromeRasterizer::new(),
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), Error> {
    fs::write(path, content).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn run_html(input: &Path, output: &Path, template: &TemplateArgs) -> Result<(), Error> {
    log::debug!("Input file: {}", input.display());
    let (registry, options) = template.resolve()?;
    let resume = load_resume(input)?;
    write_file(output, &generate_html_with_registry(&resume, &registry, &options))?;

    log::info!("Resume generated successfully.");
    log::info!("  HTML: {}", output.display());
    Ok(())
}

fn run_pdf(input: &Path, output: &Path, pdf: &PdfArgs) -> Result<(), Error> {
    let options = pdf.options();
    export_pdf(input, output, &options, &rasterizer(pdf.browser.as_deref()))?;

    log::info!("Resume PDF created successfully.");
    log::info!("  PDF:        {}", output.display());
    log::info!("  Format:     {}", options.format);
    log::info!(
        "  Background: {}",
        if options.print_background { "Enabled" } else { "Disabled" }
    );
    Ok(())
}

fn run_build(
    input: &Path,
    html: &Path,
    pdf: &Path,
    pdf_args: &PdfArgs,
    template: &TemplateArgs,
) -> Result<(), Error> {
    let (registry, options) = template.resolve()?;
    let resume = load_resume(input)?;
    write_file(html, &generate_html_with_registry(&resume, &registry, &options))?;
    log::info!("HTML written to {}", html.display());

    let margins = resolved_style_for(&resume, &registry, &options).page_margins;
    log::debug!("Page margins: {:?}", margins);
    let pdf_options = pdf_args.options().with_margins(margins);
    export_pdf(html, pdf, &pdf_options, &rasterizer(pdf_args.browser.as_deref()))?;

    log::info!("Resume HTML and PDF created successfully.");
    log::info!("  HTML: {}", html.display());
    log::info!("  PDF:  {}", pdf.display());
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum BatchMode {
    Both,
    HtmlOnly,
    PdfOnly,
}

fn remove_if_exists(path: &Path) -> Result<(), Error> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(Error::Write {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn list_yaml(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let entries = fs::read_dir(dir).map_err(|source| cvault::LoadError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "yaml"))
        .collect();
    files.sort();
    Ok(files)
}

fn build_one(
    yaml: &Path,
    out_dir: &Path,
    mode: BatchMode,
    rasterizer: &ChromeRasterizer,
) -> Result<(), Error> {
    let stem = yaml
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let html = out_dir.join(format!("{stem}.html"));
    let pdf = out_dir.join(format!("{stem}.pdf"));

    remove_if_exists(&html)?;
    remove_if_exists(&pdf)?;

    let registry = TemplateRegistry::new();
    let options = GenerateOptions::new();
    let resume = load_resume(yaml)?;
    write_file(&html, &generate_html_with_registry(&resume, &registry, &options))?;

    if mode == BatchMode::HtmlOnly {
        log::info!("  HTML: {}", html.display());
        return Ok(());
    }

    let margins = resolved_style_for(&resume, &registry, &options).page_margins;
    export_pdf(&html, &pdf, &PdfOptions::new().with_margins(margins), rasterizer)?;

    if mode == BatchMode::PdfOnly {
        remove_if_exists(&html)?;
    } else {
        log::info!("  HTML: {}", html.display());
    }
    log::info!("  PDF:  {}", pdf.display());
    Ok(())
}

/// Returns true when every document was built
fn run_batch(
    dir: &Path,
    out_dir: Option<&Path>,
    mode: BatchMode,
    browser: Option<&Path>,
) -> Result<bool, Error> {
    let out_dir = out_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.join("rendered"));
    fs::create_dir_all(&out_dir).map_err(|source| Error::Write {
        path: out_dir.clone(),
        source,
    })?;

    let files = list_yaml(dir)?;
    if files.is_empty() {
        log::warn!("No YAML files found in {}", dir.display());
        return Ok(true);
    }

    let rasterizer = rasterizer(browser);
    let total = files.len();
    let mut failed = Vec::new();

    for (index, yaml) in files.iter().enumerate() {
        log::info!("[{}/{}] Processing: {}", index + 1, total, yaml.display());
        if let Err(e) = build_one(yaml, &out_dir, mode, &rasterizer) {
            log::error!("  Failed: {}", e);
            failed.push(yaml.clone());
        }
    }

    log::info!(
        "Done: {} succeeded, {} failed, output in {}",
        total - failed.len(),
        failed.len(),
        out_dir.display()
    );
    for path in &failed {
        log::info!("  failed: {}", path.display());
    }

    Ok(failed.is_empty())
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        LevelFilter::Error
    } else if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level.as_str().to_lowercase()),
    )
    .format_timestamp(None)
    .format_target(false)
    .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let result = match &cli.command {
        Command::Html {
            input,
            output,
            template,
        } => run_html(input, output, template),
        Command::Pdf { input, output, pdf } => run_pdf(input, output, pdf),
        Command::Build {
            input,
            html,
            pdf,
            pdf_args,
            template,
        } => run_build(input, html, pdf, pdf_args, template),
        Command::Batch {
            dir,
            out_dir,
            html_only,
            pdf_only,
            browser,
        } => {
            let mode = match (*html_only, *pdf_only) {
                (true, _) => BatchMode::HtmlOnly,
                (_, true) => BatchMode::PdfOnly,
                _ => BatchMode::Both,
            };
            match run_batch(dir, out_dir.as_deref(), mode, browser.as_deref()) {
                Ok(true) => Ok(()),
                Ok(false) => std::process::exit(1),
                Err(e) => Err(e),
            }
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

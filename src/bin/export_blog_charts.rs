use blog_charts::api::BlogChartsConfig;
use blog_charts::catalog::{ChartCatalog, ExportFormat};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const USAGE: &str = "usage: export_blog_charts <js|json|html> --output <dir> [--config <path>] [--post <slug>] [--drafts]";

#[derive(Debug)]
struct CliArgs {
    format: ExportFormat,
    output: PathBuf,
    config: Option<PathBuf>,
    post: Option<String>,
    drafts: bool,
}

fn main() {
    let _ = blog_charts::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            BlogChartsConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => BlogChartsConfig::default(),
    };
    config.include_drafts |= args.drafts;

    let catalog = ChartCatalog::blog(&config).map_err(|err| err.to_string())?;
    let assets = catalog
        .export(args.format, &config, args.post.as_deref())
        .map_err(|err| err.to_string())?;

    fs::create_dir_all(&args.output)
        .map_err(|err| format!("failed to create `{}`: {err}", args.output.display()))?;
    for asset in &assets {
        write_file(&args.output.join(&asset.file_name), &asset.contents)?;
    }

    info!(
        files = assets.len(),
        output = %args.output.display(),
        "exported blog charts"
    );
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), String> {
    fs::write(path, contents).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let format = args
        .next()
        .as_deref()
        .and_then(ExportFormat::from_name)
        .ok_or_else(|| USAGE.to_owned())?;

    let mut output = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut post = None::<String>;
    let mut drafts = false;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--post" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --post".to_owned())?;
                post = Some(value);
            }
            "--drafts" => drafts = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    let output = output.ok_or_else(|| format!("missing --output\n{USAGE}"))?;
    Ok(CliArgs {
        format,
        output,
        config,
        post,
        drafts,
    })
}

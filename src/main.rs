//! Redflag CLI - run one creative audit from the terminal
//!
//! Example:
//!   redflag --country 대한민국 --sector 화장품 --caption "신제품 출시!" \
//!       --image kv1.png --image kv2.png --json report.json --html report.html
//!
//! The report JSON goes to stdout unless --json names a file; --html
//! additionally writes the standalone report page.

use std::path::PathBuf;

use redflag::models::{AuditRequest, ImageInput, MAX_KEY_VISUALS};
use redflag::{render_report_html, Auditor, GeminiClient};

const USAGE: &str = "\
redflag - controversy risk audit for marketing creative

USAGE:
    redflag --country <market> [OPTIONS]

OPTIONS:
    --country <market>    Target country/region (required)
    --sector <sector>     Industry or category hint
    --caption <text>      Ad caption to audit
    --image <path>        Key visual png/jpg/webp (repeatable, first 3 are assessed)
    --json <path>         Write report JSON to a file instead of stdout
    --html <path>         Also write the rendered HTML report
    -h, --help            Show this help
";

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> anyhow::Result<String> {
    args.next()
        .ok_or_else(|| anyhow::anyhow!("missing value for {flag}\n\n{USAGE}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env so GEMINI_API_KEY is available
    redflag::utils::load_env().ok();

    let mut request = AuditRequest::default();
    let mut image_paths: Vec<PathBuf> = Vec::new();
    let mut json_path: Option<PathBuf> = None;
    let mut html_path: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--country" => request.country = next_value(&mut args, "--country")?,
            "--sector" => request.sector = next_value(&mut args, "--sector")?,
            "--caption" => request.caption = next_value(&mut args, "--caption")?,
            "--image" => image_paths.push(PathBuf::from(next_value(&mut args, "--image")?)),
            "--json" => json_path = Some(PathBuf::from(next_value(&mut args, "--json")?)),
            "--html" => html_path = Some(PathBuf::from(next_value(&mut args, "--html")?)),
            "-h" | "--help" => {
                print!("{USAGE}");
                return Ok(());
            }
            other => anyhow::bail!("unknown argument: {other}\n\n{USAGE}"),
        }
    }

    if image_paths.len() > MAX_KEY_VISUALS {
        eprintln!(
            "note: {} images given, only the first {} are assessed",
            image_paths.len(),
            MAX_KEY_VISUALS
        );
        image_paths.truncate(MAX_KEY_VISUALS);
    }
    for path in &image_paths {
        request.images.push(ImageInput::from_path(path)?);
    }

    // Input validation happens before any key or network use.
    if let Err(e) = redflag::validate_request(&request) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let api_key = redflag::utils::get_and_validate_api_key()?;
    let client = GeminiClient::with_key(api_key)?;
    let auditor = Auditor::new(&client);

    let report = match auditor.run(&request).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{e}");
            if let Some(raw) = e.raw_output() {
                eprintln!("--- 모델 원문 ---");
                eprintln!("{raw}");
            }
            std::process::exit(1);
        }
    };

    let json = serde_json::to_string_pretty(&report)?;
    match &json_path {
        Some(path) => {
            std::fs::write(path, &json)?;
            println!(
                "report written to {} | level={} | worst_axis={} | src={} | score={}",
                path.display(),
                report.overall.level.as_str(),
                report.overall.worst_axis,
                report.overall.worst_src.as_str(),
                report.overall.worst_score
            );
        }
        None => println!("{json}"),
    }

    if let Some(path) = &html_path {
        let html = render_report_html(&report, &request)?;
        std::fs::write(path, html)?;
        eprintln!("report HTML written to {}", path.display());
    }

    Ok(())
}

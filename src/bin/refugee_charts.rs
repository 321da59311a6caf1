use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use refugee_charts::api::{self, Client, FetchPolicy};
use refugee_charts::models::YearDomain;
use refugee_charts::page::{self, NoopNotifier, PageSpec};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "refugee-charts",
    version,
    about = "Render refugee-population column charts as SVG"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one chart per country plus the aggregate total.
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Dataset JSON file (mapping country -> yearly counts, plus "total").
    #[arg(long, conflicts_with = "url")]
    data: Option<PathBuf>,
    /// Fetch the dataset JSON from a URL instead of a file.
    #[arg(long)]
    url: Option<String>,
    /// Container width in pixels; drives layout and the mobile breakpoint.
    #[arg(long, default_value_t = 1000.0)]
    width: f64,
    /// Year domain as YYYY:YYYY (defaults to the preset's domain).
    #[arg(long)]
    years: Option<String>,
    /// Use the 1990-2015 layout (squarer charts, download links).
    #[arg(long, default_value_t = false)]
    recent: bool,
    /// Attach a download link per chart and write downloads.json.
    #[arg(long, default_value_t = false)]
    download_links: bool,
    /// Render with an empty dataset when the fetch fails, instead of erroring.
    #[arg(long, default_value_t = false)]
    ignore_fetch_errors: bool,
    /// Directory the SVG files are written to.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn parse_years(s: &str) -> Option<YearDomain> {
    let (a, b) = s.split_once(':')?;
    let first = a.parse::<i32>().ok()?;
    let last = b.parse::<i32>().ok()?;
    Some(YearDomain::new(first, last))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let loaded = match (&args.data, &args.url) {
        (Some(path), None) => api::load_dataset(path),
        (None, Some(url)) => Client::default().fetch_dataset(url),
        _ => anyhow::bail!("exactly one of --data or --url is required"),
    };
    let policy = if args.ignore_fetch_errors {
        FetchPolicy::EmptyDataset
    } else {
        FetchPolicy::Fail
    };
    let dataset = api::dataset_or_policy(loaded, policy)?;

    let mut spec = if args.recent {
        PageSpec::since_1990()
    } else {
        PageSpec::since_1975()
    };
    if let Some(s) = args.years.as_deref() {
        spec.years =
            parse_years(s).ok_or_else(|| anyhow::anyhow!("invalid --years, expected YYYY:YYYY"))?;
    }
    if args.download_links {
        spec.download_links = true;
    }

    let render = page::render_page(&dataset, args.width, &spec, &mut NoopNotifier)?;

    std::fs::create_dir_all(&args.out_dir)?;
    let mut links = Vec::new();
    for chart in render.charts.iter().chain(std::iter::once(&render.total)) {
        let path = args.out_dir.join(format!("{}.svg", chart.slug));
        std::fs::write(&path, &chart.svg)?;
        if let Some(link) = &chart.download {
            links.push(serde_json::json!({
                "anchor_id": link.anchor_id,
                "file_name": link.file_name,
                "href": link.href,
            }));
        }
    }
    if spec.download_links {
        let manifest = args.out_dir.join("downloads.json");
        std::fs::write(&manifest, serde_json::to_string_pretty(&links)?)?;
        eprintln!("Wrote {} download links to {}", links.len(), manifest.display());
    }

    eprintln!(
        "Wrote {} charts ({:?} layout, {:.0}px wide) to {}",
        render.charts.len() + 1,
        render.breakpoint,
        args.width,
        args.out_dir.display()
    );
    Ok(())
}

// src/cli.rs
use std::io::Write;
use std::sync::LazyLock;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, bail, eyre};
use regex::Regex;

use crate::config::options::FetchOptions;
use crate::dataset::DatasetKind;
use crate::progress::Progress;
use crate::render::render_text;
use crate::report::DeliveryReporter;
use crate::scrape::fetch_report_with;

static TRACE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]+").expect("trace id pattern compiles"));

/// Track a Kaspi order through the shop logistics portal.
#[derive(Debug, Parser)]
#[command(name = "kaspi_track", version, about)]
pub struct Args {
    /// Order number, or any text containing it (the first digit run is used)
    pub query: String,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Give up after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Log progress and debug detail to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Portal origin to use instead of https://shop.kaspi.kz
    #[arg(long, value_name = "URL", hide = true)]
    pub base_url: Option<String>,
}

/// First run of ASCII digits in `text`.
pub fn extract_trace_id(text: &str) -> Option<&str> {
    TRACE_ID_RE.find(text).map(|m| m.as_str())
}

/// Status lines on stderr.
struct StderrProgress;

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("Session ready, fetching {total} worksheets…");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn dataset_done(&mut self, dataset: DatasetKind) {
        eprintln!("  {dataset}: ok");
    }
    fn dataset_failed(&mut self, dataset: DatasetKind, reason: &str) {
        eprintln!("  {dataset}: no data ({reason})");
    }
}

pub fn run() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    crate::log::init(args.verbose);

    let Some(trace_id) = extract_trace_id(&args.query) else {
        bail!("no order number in {:?}", args.query);
    };
    let opts = match &args.base_url {
        Some(base) => FetchOptions::with_base_url(base),
        None => FetchOptions::default(),
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .wrap_err("could not start async runtime")?;

    let report = runtime.block_on(async {
        let mut sink = StderrProgress;
        let progress: Option<&mut (dyn Progress + Send)> =
            if args.verbose { Some(&mut sink) } else { None };
        let fetch = fetch_report_with(&opts, trace_id, progress);

        match args.timeout {
            Some(secs) => tokio::time::timeout(Duration::from_secs(secs), fetch)
                .await
                .map_err(|_| eyre!("order {trace_id}: no answer within {secs}s")),
            None => Ok(fetch.await),
        }
    })?;

    let full = report.full();
    let mut stdout = std::io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &full)?;
        writeln!(stdout)?;
    } else {
        write!(stdout, "{}", render_text(trace_id, &full))?;
    }
    Ok(())
}

mod cli;

use anyhow::{Result, bail};
use clap::Parser;
use mosaic_effect::{ErrorKind, process_file};
use std::io::Write;

fn main() -> Result<()> {
    init_logger();

    let args = cli::Args::parse();
    let config = args.transform_config();

    log::info!(
        "processing {} with {} transform(s), block size {}",
        args.input.display(),
        config.selected().len(),
        config.block_size
    );

    let report = match process_file(&args.input, args.output_dir.as_deref(), &config) {
        Ok(report) => report,
        Err(e) => match e.kind() {
            ErrorKind::InvalidInput => bail!("Input error: {e}"),
            ErrorKind::Encoding => bail!("Image error: {e}"),
        },
    };

    let saved = report.succeeded().count();
    let failed = report.failed().count();

    for (kind, path) in report.succeeded() {
        println!("{kind}: {}", path.display());
    }

    if failed > 0 {
        bail!("{failed} of {} transforms failed", saved + failed);
    }

    Ok(())
}

/// Log lines look like `[12:34:56 INFO batch.rs 80] message`. The default
/// level is `info`, overridable through `RUST_LOG`.
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

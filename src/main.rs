mod archive;
mod args;
mod context;
mod error;
mod manifest;
mod result;
mod tpl;
mod utils;

use archive::{BuildReport, Progress};
use args::Args;
use context::Context;

fn main() {
    if let Err(e) = run() {
        if e.is_missing_manifest() {
            let _ = cliclack::log::remark("A skill directory needs SKILL.md at its top level");
        }
        let _ = cliclack::outro_cancel(format!("❌ Error: {}", e));
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    let Args {
        verbose,
        source,
        output,
    } = Args::parse();

    let ctx = Context::new(source, &output, verbose)?;

    cliclack::intro(format!(
        "📦 Building skill from {}/",
        ctx.source_dir.display()
    ))?;

    let mut reporter = Reporter {
        verbose: ctx.verbose,
        error: None,
    };
    let report = archive::build(&ctx, &mut reporter)?;
    if let Some(err) = reporter.error {
        return Err(err.into());
    }

    if ctx.verbose {
        cliclack::log::info(format!("Manifest: {}", report.manifest_path.display()))?;
        cliclack::log::info(format!(
            "{} entries, {} bytes{}",
            report.entries.len(),
            report.bytes,
            if report.replaced { ", replaced previous build" } else { "" }
        ))?;
    }

    cliclack::outro(format!("✅ Built {}", report.archive_path.display()))?;
    Ok(())
}

/// Prints one line per archived entry; the first console failure is kept for `run`
struct Reporter {
    verbose: bool,
    error: Option<std::io::Error>,
}

impl Reporter {
    fn emit(&mut self, result: std::io::Result<()>) {
        if let Err(err) = result {
            self.error.get_or_insert(err);
        }
    }
}

impl Progress for Reporter {
    fn on_entry_added(&mut self, name: &str, bytes: u64) {
        let line = if self.verbose {
            format!("Added: {} ({} bytes)", name, bytes)
        } else {
            format!("Added: {}", name)
        };
        self.emit(cliclack::log::step(line));
    }

    fn on_complete(&mut self, report: &BuildReport) {
        if self.verbose {
            self.emit(cliclack::log::remark(format!(
                "Finished {}",
                report.archive_path.display()
            )));
        }
    }
}

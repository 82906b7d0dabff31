//! insv2gpx
//!
//! Prompts for an .insv video and an output directory, then writes the
//! video's GPS track as `<output directory>/<video name>.gpx`.

use anyhow::Result;
use insv_adapters::{DumpFileSource, ExifToolSource};
use insv_cli::{config::Config, pipeline, prompt, sinks::GpxFileSink};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr, prompts own stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;

    let paths = {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        prompt::prompt_paths(&mut stdin.lock(), &mut stdout)?
    };

    let sink = GpxFileSink::new(&paths.output_dir);

    let written = match &config.metadata_dump {
        Some(dump) => {
            let source = DumpFileSource::new(dump);
            pipeline::run(&source, &paths.input, &sink, &config).await?
        }
        None => {
            let source = ExifToolSource::with_program(&config.exiftool_path);
            pipeline::run(&source, &paths.input, &sink, &config).await?
        }
    };

    info!("Done: {}", written.display());

    Ok(())
}

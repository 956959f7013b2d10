use clap::Parser;
use sandmatic::alert::Alert;
use sandmatic::convert::convert;
use sandmatic::logger::{log, LogSeverity::Info};
use sandmatic::schematic::Litematic;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Converts litematica schematics to sandmatic schematics.
#[derive(Parser)]
#[command(name = "sandmatic", version)]
struct Args {
    /// Path to the source .litematic file
    input: PathBuf,

    /// Write the payload to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let file_name = match args.input.file_name().and_then(|name| name.to_str()) {
        Some(name) => name.to_owned(),
        None => {
            Alert::error("Input path has no file name").emit();
            return ExitCode::FAILURE;
        }
    };
    if !file_name.ends_with(".litematic") {
        Alert::error("File must be a .litematic file").emit();
        return ExitCode::FAILURE;
    }

    // The only suspension point: everything after the read is synchronous
    let bytes = match tokio::fs::read(&args.input).await {
        Ok(bytes) => bytes,
        Err(err) => {
            Alert::error(format!("Failed to read {}: {}", args.input.display(), err)).emit();
            return ExitCode::FAILURE;
        }
    };

    let schematic = match Litematic::read(&bytes) {
        Ok(schematic) => schematic,
        Err(err) => {
            Alert::error(format!("{}", err)).emit();
            return ExitCode::FAILURE;
        }
    };

    match convert(&schematic, &file_name) {
        Ok(conversion) => {
            for alert in &conversion.alerts {
                alert.emit();
            }
            if let Err(err) = write_payload(args.output.as_deref(), &conversion.payload) {
                Alert::error(format!("Failed to write output: {}", err)).emit();
                return ExitCode::FAILURE;
            }
            log(
                format!("Converted {} ({} characters)", file_name, conversion.payload.len()),
                Info,
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            Alert::error(format!("{}", err)).emit();
            ExitCode::FAILURE
        }
    }
}

fn write_payload(output: Option<&Path>, payload: &str) -> std::io::Result<()> {
    match output {
        Some(path) => std::fs::write(path, payload),
        None => {
            println!("{}", payload);
            Ok(())
        }
    }
}

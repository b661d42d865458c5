use asciify::{AsciifyError, convert_image_to_ascii, render_ascii};
use clap::{ArgAction, CommandFactory, Parser};
use std::error::Error;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE_NOTES: &str = "This will convert IMAGE (a .png or .jpg) to ascii, then save the \
results to a new file with the same name as the original but with .txt appended to it.";

/// Convert an image to ASCII art
#[derive(Parser, Debug)]
#[command(name = "asciify")]
#[command(version, about, long_about = None, after_help = USAGE_NOTES)]
struct Cli {
    /// Image file to convert (PNG or JPEG)
    image: Option<PathBuf>,

    /// Print the ASCII art to standard output instead of writing IMAGE.txt
    #[arg(long)]
    stdout: bool,

    /// More log output (-v for progress, -vv for details)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Configure logging; RUST_LOG still takes precedence
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    let Some(path) = cli.image.as_deref() else {
        // No image is not an error: show usage and leave
        if let Err(e) = Cli::command().print_help() {
            log::error!("Failed to print usage: {e}");
        }
        return ExitCode::SUCCESS;
    };

    let result = if cli.stdout {
        print_ascii(path)
    } else {
        save_ascii(path)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(AsciifyError::NotFound { source, .. }) => {
            log::error!("{source}");
            eprintln!("Could not find image file to read in.");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Failed to process and convert image");
            eprintln!("error: {}", error_chain(&e));
            ExitCode::FAILURE
        }
    }
}

fn save_ascii(path: &Path) -> Result<(), AsciifyError> {
    println!("Processing file: {}", path.display());
    let output = convert_image_to_ascii(path)?;
    println!("Output saved to file: {}", output.display());
    Ok(())
}

fn print_ascii(path: &Path) -> Result<(), AsciifyError> {
    let glyphs = render_ascii(path)?;

    let mut stdout = io::stdout().lock();
    for row in glyphs.rows() {
        if let Err(e) = stdout.write_all(row) {
            // Closed pipe (e.g. `| head`) is not worth a failure exit
            log::debug!("Stopped writing to stdout: {e}");
            break;
        }
    }
    Ok(())
}

/// Join an error and its sources into one line
fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_image_is_optional() {
        let cli = Cli::try_parse_from(["asciify"]).unwrap();
        assert!(cli.image.is_none());
    }

    #[test]
    fn test_parse_image_and_flags() {
        let cli = Cli::try_parse_from(["asciify", "--stdout", "-vv", "cat.png"]).unwrap();
        assert_eq!(cli.image, Some(PathBuf::from("cat.png")));
        assert!(cli.stdout);
        assert_eq!(cli.log_level(), "debug");
    }

    #[test]
    fn test_default_log_level() {
        let cli = Cli::try_parse_from(["asciify", "cat.png"]).unwrap();
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["asciify", "-q", "-v", "cat.png"]).is_err());
        let cli = Cli::try_parse_from(["asciify", "-q", "cat.png"]).unwrap();
        assert_eq!(cli.log_level(), "error");
    }

    #[test]
    fn test_error_chain_includes_source() {
        let err = AsciifyError::Io {
            path: PathBuf::from("out.png.txt"),
            source: io::Error::other("disk full"),
        };
        let chain = error_chain(&err);
        assert!(chain.starts_with("failed to write output file out.png.txt"));
        assert!(chain.ends_with(": disk full"));
    }
}

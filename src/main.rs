use std::io::Write;

use clap::{Parser, ValueEnum};
use resource_fs::{embed_resources, from_buffer, BufferEncoding, EmbeddedFile, ResourceError, ResourceFilesystem};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

embed_resources! {
    /// Resources shipped with the CLI.
    mod bundled {
        "hello.txt" => include_bytes!("../assets/hello.txt"),
        "empty.txt" => b"",
        "pixel.bin" => b"\x89PNG\xff",
    }

    /// A set with no resources; every open misses.
    mod enoent {}
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ResourceSet {
    Bundled,
    Enoent,
}

impl ResourceSet {
    fn filesystem(self) -> &'static ResourceFilesystem {
        match self {
            ResourceSet::Bundled => bundled::get_filesystem(),
            ResourceSet::Enoent => enoent::get_filesystem(),
        }
    }
}

#[derive(Parser)]
#[command(name = "resource-fs")]
#[command(about = "Read a resource embedded in this binary")]
#[command(version)]
struct Cli {
    /// Resource set to open the path in
    #[arg(long = "set", value_enum, default_value = "bundled")]
    set: ResourceSet,

    /// Output encoding: utf8, base64 or hex
    #[arg(long = "encoding", default_value = "utf8", value_parser = parse_encoding)]
    encoding: BufferEncoding,

    /// Output results as JSON (set, path, found, size, content)
    #[arg(long = "json")]
    json: bool,

    /// Log lookups to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Resource path to open
    #[arg()]
    path: String,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    set: &'a str,
    path: &'a str,
    found: bool,
    size: Option<usize>,
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn parse_encoding(s: &str) -> Result<BufferEncoding, String> {
    BufferEncoding::from_str(s).ok_or_else(|| format!("unsupported encoding '{}'", s))
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Content rendered in the requested encoding. `utf8` refuses bytes that
/// are not valid UTF-8 rather than replacing them.
fn encode_content(file: &EmbeddedFile<'_>, encoding: BufferEncoding) -> Result<String, ResourceError> {
    match encoding {
        BufferEncoding::Utf8 => file.to_str().map(str::to_owned),
        _ => Ok(from_buffer(file.as_bytes(), encoding)),
    }
}

/// Open the requested path and decide the report and exit code.
fn run(cli: &Cli) -> (Report<'_>, i32) {
    let fs = cli.set.filesystem();
    let mut report = Report {
        set: fs.name(),
        path: &cli.path,
        found: false,
        size: None,
        content: None,
        error: None,
    };

    let outcome = fs
        .open_file(&cli.path)
        .and_then(|file| {
            report.found = true;
            report.size = Some(file.len());
            encode_content(&file, cli.encoding)
        });

    match outcome {
        Ok(content) => {
            report.content = Some(content);
            (report, 0)
        }
        Err(e) => {
            report.error = Some(e.to_string());
            (report, 1)
        }
    }
}

fn write_content(content: &str, encoding: BufferEncoding) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    match encoding {
        BufferEncoding::Utf8 => stdout.write_all(content.as_bytes())?,
        _ => writeln!(stdout, "{}", content)?,
    }
    stdout.flush()
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (report, exit_code) = run(&cli);

    if cli.json {
        match serde_json::to_string(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: Cannot serialize report: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        if let Some(content) = &report.content {
            if let Err(e) = write_content(content, cli.encoding) {
                eprintln!("Error: Cannot write resource: {}", e);
                std::process::exit(1);
            }
        }
        if let Some(error) = &report.error {
            eprintln!("{}", error);
        }
    }

    std::process::exit(exit_code);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("resource-fs").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_enoent_set_reports_missing() {
        let cli = parse(&["--set", "enoent", "hello.txt"]);
        let (report, exit_code) = run(&cli);
        assert_eq!(exit_code, 1);
        assert!(!report.found);
        assert_eq!(report.set, "enoent");
        assert_eq!(report.size, None);
        assert_eq!(report.content, None);
        assert_eq!(
            report.error.as_deref(),
            Some("ENOENT: no such embedded resource, open 'hello.txt'")
        );
    }

    #[test]
    fn test_bundled_hello() {
        let cli = parse(&["hello.txt"]);
        let (report, exit_code) = run(&cli);
        assert_eq!(exit_code, 0);
        assert!(report.found);
        assert_eq!(report.set, "bundled");
        assert_eq!(report.size, Some(2));
        assert_eq!(report.content.as_deref(), Some("hi"));
        assert_eq!(report.error, None);
    }

    #[test]
    fn test_json_empty_resource_hex() {
        let cli = parse(&["--json", "--encoding", "hex", "empty.txt"]);
        let (report, exit_code) = run(&cli);
        assert_eq!(exit_code, 0);
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"set":"bundled","path":"empty.txt","found":true,"size":0,"content":""}"#
        );
    }

    #[test]
    fn test_json_missing_resource_shape() {
        let cli = parse(&["--json", "nope"]);
        let (report, exit_code) = run(&cli);
        assert_eq!(exit_code, 1);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["found"], serde_json::json!(false));
        assert!(value["size"].is_null());
        assert!(value["content"].is_null());
        assert_eq!(value["path"], serde_json::json!("nope"));
    }

    #[test]
    fn test_binary_resource_rejected_as_utf8() {
        let cli = parse(&["--json", "pixel.bin"]);
        let (report, exit_code) = run(&cli);
        assert_eq!(exit_code, 1);
        assert!(report.found);
        assert_eq!(report.size, Some(5));
        assert_eq!(report.content, None);
        assert_eq!(
            report.error.as_deref(),
            Some("EILSEQ: embedded resource is not valid UTF-8 'pixel.bin'")
        );
    }

    #[test]
    fn test_binary_resource_as_base64() {
        let cli = parse(&["--encoding", "base64", "pixel.bin"]);
        let (report, exit_code) = run(&cli);
        assert_eq!(exit_code, 0);
        assert_eq!(report.content.as_deref(), Some("iVBOR/8="));
    }

    #[test]
    fn test_unknown_encoding_rejected() {
        let result = Cli::try_parse_from(["resource-fs", "--encoding", "latin1", "hello.txt"]);
        assert!(result.is_err());
    }
}

use std::path::PathBuf;
use umbra::Annotator;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Umbra(umbra::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Umbra(err) => write!(f, "{err}"),
        }
    }
}

impl From<umbra::Error> for CliError {
    fn from(value: umbra::Error) -> Self {
        Self::Umbra(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    source: PathBuf,
    dest: PathBuf,
    verbose: bool,
}

fn usage() -> &'static str {
    "umbra-cli\n\
\n\
USAGE:\n\
  umbra-cli [--verbose] <source-dir> <dest-dir>\n\
\n\
NOTES:\n\
  - Every .svg file in <source-dir> (non-recursive) is rewritten into\n\
    <dest-dir> with a fill-dark companion on each fill attribute.\n\
  - <dest-dir> is created if it does not exist.\n\
  - --verbose enables debug-level tracing on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut verbose = false;
    let mut positional: Vec<&String> = Vec::new();

    for a in argv.iter().skip(1) {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--verbose" => verbose = true,
            _ => positional.push(a),
        }
    }
    let [source, dest] = positional.as_slice() else {
        return Err(CliError::Usage(usage()));
    };

    Ok(Args {
        source: PathBuf::from(source.as_str()),
        dest: PathBuf::from(dest.as_str()),
        verbose,
    })
}

fn run(args: Args) -> Result<(), CliError> {
    let annotator = Annotator::default();
    umbra::batch::process_dir(&annotator, &args.source, &args.dest)?;
    Ok(())
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    match run(args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

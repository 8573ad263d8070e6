use beluga::graph::{GeneratorOptions, random_eulerian, text};
use beluga::{
    CircuitOptions, Predecessors, Successors, Swip, check_balanced, find_circuit, partition_cycles,
};
use serde::Serialize;
use std::io::Read;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Graph(beluga::graph::Error),
    Circuit(beluga::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Graph(err) => write!(f, "{err}"),
            CliError::Circuit(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<beluga::graph::Error> for CliError {
    fn from(value: beluga::graph::Error) -> Self {
        Self::Graph(value)
    }
}

impl From<beluga::Error> for CliError {
    fn from(value: beluga::Error) -> Self {
        Self::Circuit(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Circuit,
    Partition,
    Generate,
}

#[derive(Debug, Clone, Copy, Default)]
enum OutputFormat {
    #[default]
    Walk,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "walk" => Ok(Self::Walk),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    config: Option<String>,
    format: OutputFormat,
    pretty: bool,
    generator: GeneratorOptions,
}

#[derive(Serialize)]
struct CircuitOut<'a> {
    vertices: usize,
    edges: usize,
    cycles: usize,
    swips: &'a [Swip],
    walk: Vec<&'a str>,
}

fn usage() -> &'static str {
    "beluga-cli\n\
\n\
USAGE:\n\
  beluga-cli [circuit] [--config <json>] [--format walk|json] [--pretty] [<path>|-]\n\
  beluga-cli partition [--config <json>] [<path>|-]\n\
  beluga-cli generate --vertices <n> --max-degree <k> [--seed <s>] [--open-path]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Input lines have the form `label -> label1,label2,...`.\n\
  - circuit prints the closed vertex walk by default; --format json adds swips and counts.\n\
  - partition prints the number of cycles in the canonical successor permutation.\n\
  - Set RUST_LOG=debug to trace pipeline stages on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "circuit" => args.command = Command::Circuit,
            "partition" => args.command = Command::Partition,
            "generate" => args.command = Command::Generate,
            "--pretty" => args.pretty = true,
            "--open-path" => args.generator.open_path = true,
            "--format" => {
                let Some(fmt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.format = fmt
                    .parse::<OutputFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--vertices" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.generator.vertices = n.parse::<usize>().map_err(|_| CliError::Usage(usage()))?;
            }
            "--max-degree" => {
                let Some(k) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.generator.max_out_degree =
                    k.parse::<usize>().map_err(|_| CliError::Usage(usage()))?;
            }
            "--seed" => {
                let Some(seed) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.generator.seed =
                    Some(seed.parse::<u64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn load_options(path: Option<&str>) -> Result<CircuitOptions, CliError> {
    let Some(path) = path else {
        return Ok(CircuitOptions::default());
    };
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn run(args: Args) -> Result<(), CliError> {
    match args.command {
        Command::Generate => {
            let g = random_eulerian(&args.generator)?;
            print!("{}", text::to_text(&g));
            Ok(())
        }
        Command::Partition => {
            let options = load_options(args.config.as_deref())?;
            let g = text::parse(&read_input(args.input.as_deref())?)?;
            check_balanced(&g)?;
            let succ =
                Successors::from_graph(&g, &Predecessors::build(&g), options.min_parallel_size)?;
            let partition = partition_cycles(&succ, options.partition, options.min_parallel_size);
            println!("{}", partition.count());
            Ok(())
        }
        Command::Circuit => {
            let options = load_options(args.config.as_deref())?;
            let g = text::parse(&read_input(args.input.as_deref())?)?;
            let circuit = find_circuit(g, &options)?;
            match args.format {
                OutputFormat::Walk => {
                    println!("{}", circuit.vertex_labels().join(" -> "));
                    Ok(())
                }
                OutputFormat::Json => write_json(
                    &CircuitOut {
                        vertices: circuit.graph().vertex_count(),
                        edges: circuit.graph().edge_count(),
                        cycles: circuit.input_cycles(),
                        swips: circuit.swips(),
                        walk: circuit.vertex_labels(),
                    },
                    args.pretty,
                ),
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = run(args) {
        tracing::debug!(?err, "command failed");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

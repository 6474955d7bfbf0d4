//! Command line surface of the `cidr-calc` binary.

use crate::config::{Config, OutputFormat};
use crate::error::CidrError;
use crate::models::CidrBlock;
use crate::output::{render_blocks, render_prefix};
use crate::processing;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

/// IPv4 CIDR block arithmetic: aggregate, summarize, exclude, split and plan blocks.
#[derive(Parser, Debug)]
#[command(name = "cidr-calc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value_t, env = "CIDR_CALC_FORMAT", global = true)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, env = "CIDR_CALC_NO_COLOR", global = true)]
    pub no_color: bool,

    /// log4rs configuration file
    #[arg(long, default_value = "log4rs.yml", env = "CIDR_CALC_LOG_CONFIG", global = true)]
    pub log_config: PathBuf,

    /// Log level used when the log4rs file is missing
    #[arg(long, default_value = "warn", env = "CIDR_CALC_LOG_LEVEL", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn config(&self) -> Result<Config, Box<dyn Error>> {
        Config::new(self.format, self.no_color, &self.log_config, &self.log_level)
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Merge blocks into the fewest blocks covering the same addresses
    Aggregate {
        #[arg(required = true)]
        blocks: Vec<CidrBlock>,
    },
    /// Smallest single block covering all blocks (may include gaps)
    Summarize {
        #[arg(required = true)]
        blocks: Vec<CidrBlock>,
    },
    /// Remove blocks from a base block
    Exclude {
        base: CidrBlock,
        #[arg(required = true)]
        excluded: Vec<CidrBlock>,
    },
    /// Split a block into blocks of a longer prefix
    Split { block: CidrBlock, prefix: u8 },
    /// The next block of the same size
    Next { block: CidrBlock },
    /// The previous block of the same size
    Previous { block: CidrBlock },
    /// Blocks of the same size after (positive count) or before (negative count)
    Adjacent {
        block: CidrBlock,
        #[arg(allow_negative_numbers = true)]
        count: i64,
    },
    /// Smallest prefix with room for a number of hosts
    Optimal { hosts: u64 },
    /// Unused space inside a parent block
    Free {
        parent: CidrBlock,
        allocated: Vec<CidrBlock>,
    },
    /// First free block inside a parent that fits a number of hosts
    Fit {
        parent: CidrBlock,
        hosts: u64,
        allocated: Vec<CidrBlock>,
    },
    /// Details of each block
    Info {
        #[arg(required = true)]
        blocks: Vec<CidrBlock>,
    },
}

/// Result of a command, before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Blocks(Vec<CidrBlock>),
    Prefix(u8),
}

/// Run the block arithmetic for a command.
pub fn execute(command: &Commands) -> Result<Outcome, CidrError> {
    let outcome = match command {
        Commands::Aggregate { blocks } => Outcome::Blocks(processing::aggregate(blocks)),
        Commands::Summarize { blocks } => Outcome::Blocks(vec![processing::summarize(blocks)?]),
        Commands::Exclude { base, excluded } => {
            Outcome::Blocks(processing::exclude_all(base, excluded))
        }
        Commands::Split { block, prefix } => Outcome::Blocks(processing::split(block, *prefix)?),
        Commands::Next { block } => Outcome::Blocks(vec![processing::next(block)?]),
        Commands::Previous { block } => Outcome::Blocks(vec![processing::previous(block)?]),
        Commands::Adjacent { block, count } => {
            Outcome::Blocks(processing::adjacent(block, *count)?)
        }
        Commands::Optimal { hosts } => Outcome::Prefix(processing::optimal_prefix(*hosts)?),
        Commands::Free { parent, allocated } => {
            Outcome::Blocks(processing::free_blocks(parent, allocated))
        }
        Commands::Fit {
            parent,
            hosts,
            allocated,
        } => Outcome::Blocks(vec![processing::first_fit(parent, allocated, *hosts)?]),
        Commands::Info { blocks } => Outcome::Blocks(blocks.clone()),
    };
    Ok(outcome)
}

/// Execute `command` and render its outcome to `out`.
pub fn run<W: Write>(
    command: &Commands,
    config: &Config,
    out: &mut W,
) -> Result<(), Box<dyn Error>> {
    log::info!("#Start run() {command:?}");
    match execute(command)? {
        Outcome::Blocks(blocks) => {
            log::info!("# Got block count = {}", blocks.len());
            render_blocks(out, &blocks, config)
        }
        Outcome::Prefix(prefix) => render_prefix(out, prefix, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cidr-calc").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    fn block(s: &str) -> CidrBlock {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_aggregate() {
        let cli = parse(&["aggregate", "10.0.0.0/24", "10.0.1.0/24"]);
        assert_eq!(
            execute(&cli.command).unwrap(),
            Outcome::Blocks(vec![block("10.0.0.0/23")])
        );
    }

    #[test]
    fn test_parse_rejects_unaligned_block() {
        let res = Cli::try_parse_from(["cidr-calc", "aggregate", "10.0.0.1/24"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_parse_adjacent_negative() {
        let cli = parse(&["adjacent", "10.0.2.0/24", "-1"]);
        assert_eq!(
            execute(&cli.command).unwrap(),
            Outcome::Blocks(vec![block("10.0.1.0/24")])
        );
    }

    #[test]
    fn test_execute_errors_are_typed() {
        let cli = parse(&["next", "255.255.255.0/24"]);
        assert!(matches!(
            execute(&cli.command),
            Err(CidrError::OutOfRange(_))
        ));
        let cli = parse(&["optimal", "0"]);
        assert!(matches!(
            execute(&cli.command),
            Err(CidrError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse_global_format() {
        let cli = parse(&["summarize", "192.168.0.0/24", "192.168.2.0/24", "--format", "json"]);
        assert_eq!(cli.format, OutputFormat::Json);
        let config = cli.config().unwrap();
        let mut buf = Vec::new();
        run(&cli.command, &config, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["cidr"], "192.168.0.0/22");
    }

    #[test]
    fn test_run_fit_csv() {
        let cli = parse(&["-f", "csv", "fit", "10.0.0.0/24", "10", "10.0.0.0/26", "10.0.0.64/28"]);
        let mut buf = Vec::new();
        run(&cli.command, &cli.config().unwrap(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\"10.0.0.80/28\""));
    }
}

//! acl-search: find router ACL entries that reference given IP addresses.

use acl_searcher::{parse_targets, AddressSet, Direction, Mode, Scanner, SearchOptions};
use clap::{ArgGroup, Parser};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "acl-search")]
#[command(version = "0.1.0")]
#[command(about = "Search router ACL configuration for entries matching IP addresses", long_about = None)]
#[command(group(ArgGroup::new("mode").args(["invalid", "any", "quiet"])))]
struct Cli {
    /// Input file to parse ("-" reads standard input)
    infile: PathBuf,

    /// Device IP address(es) or CIDR networks [ignored if -i or -a specified]
    ip: Vec<String>,

    /// Include 'any's as matches
    #[arg(short, long)]
    verbose: bool,

    /// Search by source rather than destination IP
    #[arg(short, long)]
    source: bool,

    /// Include commented out entries
    #[arg(short, long)]
    comments: bool,

    /// Display only invalid lines
    #[arg(short, long)]
    invalid: bool,

    /// Display only lines with an 'any'
    #[arg(short, long)]
    any: bool,

    /// Suppress invalid lines output
    #[arg(short, long)]
    quiet: bool,

    /// Stop searching until the reenable flag is hit
    #[arg(long, value_name = "FLAG")]
    disable_flag: Option<String>,

    /// Reenable searching when this flag is seen
    #[arg(long, value_name = "FLAG")]
    reenable_flag: Option<String>,
}

impl Cli {
    fn options(&self) -> SearchOptions {
        // clap's group already rejects more than one mode switch
        let mode = Mode::from_flags(self.invalid, self.any, self.quiet).unwrap_or_default();
        let direction = if self.source {
            Direction::Source
        } else {
            Direction::Destination
        };

        SearchOptions::new()
            .with_direction(direction)
            .with_verbose(self.verbose)
            .with_comments(self.comments)
            .with_mode(mode)
            .with_section_flags(self.disable_flag.clone(), self.reenable_flag.clone())
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let options = cli.options();

    let targets = if options.mode.uses_targets() {
        match parse_targets(&cli.ip) {
            Ok(targets) => targets,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(2);
            }
        }
    } else {
        AddressSet::empty()
    };
    log::debug!("searching {} for {}", options.direction, targets);

    if let Err(e) = search(&cli.infile, targets, options) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn open_input(path: &PathBuf) -> io::Result<Box<dyn BufRead>> {
    if path.as_os_str() == "-" {
        Ok(Box::new(io::stdin().lock()))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

fn search(infile: &PathBuf, targets: AddressSet, options: SearchOptions) -> acl_searcher::Result<()> {
    let reader = open_input(infile)?;
    let stdout = io::stdout();
    let mut scanner = Scanner::new(targets, options, stdout.lock());
    scanner.scan(reader)?;
    scanner.finish()?;
    Ok(())
}

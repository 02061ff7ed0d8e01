use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "posture-report",
    version,
    about = "Summarize Prowler v3 results as charts and an HTML report",
    long_about = "posture-report aggregates a ';'-delimited Prowler v3 results file into pass/fail/info, severity, service and account counts, then writes charts, an HTML report and a JSON snapshot into a timestamped directory."
)]
pub struct ReportCli {
    /// Results file to process (defaults to report.default_input from config)
    pub input: Option<PathBuf>,

    /// Also print row bookkeeping in the console summary
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "naa-export",
    version,
    about = "Flatten Network Access Analyzer findings into CSV rows",
    long_about = "naa-export reads a Network Access Analyzer JSON export, extracts one 14-column record per finding, drops records listed in the exclusion file and appends the rest to a CSV file.",
    arg_required_else_help = true
)]
pub struct ExportCli {
    /// Network Access Analyzer JSON export
    #[arg(short, long, value_name = "INPUT")]
    pub input: PathBuf,

    /// CSV file to create or append to
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Exclusion list: resource id, security group id, cidr, port range
    #[arg(short, long, value_name = "EXCLUSIONFILE")]
    pub exclusions: PathBuf,
}

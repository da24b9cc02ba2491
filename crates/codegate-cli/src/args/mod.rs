// NOTE: Command Organization
//
// Namespaced subcommands (auth, code) rather than flat commands: the auth
// lifecycle and the code operations are separate surfaces, and `code list`
// vs `auth status` reads better than `list-codes` and `auth-status`.

mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "codegate")]
#[command(about = "Administer activation codes and their provisioned accounts", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory (default: $CODEGATE_PATH, else the platform data dir)"
    )]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

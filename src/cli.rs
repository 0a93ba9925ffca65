use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::parse_num_dumps;
use crate::configurator::RemoteAction;
use crate::constants::{CONFIG_DB_PATH, KDUMP_TOOLS_PATH};

/// Command-line arguments for the kdump-config tool.
///
/// Global options select the configuration database and kdump-tools file
/// locations; the subcommand selects the configuration transition.
#[derive(Parser, Debug)]
#[clap(name = "kdump-config", about = "Kdump crash-dump configuration CLI")]
pub struct Args {
    /// Path to the JSON configuration database
    #[clap(long, default_value = CONFIG_DB_PATH)]
    pub config_db: PathBuf,

    /// Path to the kdump-tools defaults file patched in remote mode
    #[clap(long, default_value = KDUMP_TOOLS_PATH)]
    pub kdump_tools: PathBuf,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Configuration transition to apply
    #[clap(subcommand)]
    pub command: Command,
}

/// Available kdump configuration subcommands.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Enable crash dump collection
    Enable,

    /// Disable crash dump collection
    Disable,

    /// Set the reserved crash-kernel memory (e.g. 256MB)
    Memory {
        /// Memory size token: positive integer followed by KB, MB or GB
        size: String,
    },

    /// Set how many dumps are retained on the device
    #[clap(name = "num_dumps")]
    NumDumps {
        /// Non-negative number of dumps to keep
        #[clap(value_parser = parse_num_dumps)]
        count: u32,
    },

    /// Enable or disable remote dump offload over SSH
    Remote {
        /// Requested remote-mode state
        #[clap(value_enum)]
        action: RemoteModeArg,
    },

    /// Show the current kdump configuration
    Status,
}

/// Remote-mode argument as typed on the command line.
#[derive(Clone, Copy, Debug, ValueEnum, PartialEq)]
pub enum RemoteModeArg {
    /// Offload crash dumps over SSH
    Enable,
    /// Store crash dumps locally
    Disable,
}

impl From<RemoteModeArg> for RemoteAction {
    fn from(arg: RemoteModeArg) -> Self {
        match arg {
            RemoteModeArg::Enable => RemoteAction::Enable,
            RemoteModeArg::Disable => RemoteAction::Disable,
        }
    }
}

//! Maps CLI subcommands to configurator operations, user-facing text and
//! exit codes.
//!
//! Output goes through an injected writer so command-level tests can assert
//! on the exact text operators (and their scripts) see. Exit code 0 means
//! the transition was applied; 1 means it was refused or failed.

use std::io::Write;

use anyhow::Result;

use crate::cli::Command;
use crate::configurator::KdumpConfigurator;
use crate::constants::REBOOT_ADVISORY;
use crate::store::ConfigStore;
use crate::system_file::KdumpToolsFile;

/// Execute one subcommand against the given store and kdump-tools file.
///
/// Returns the process exit code. The outer `Result` only fails when the
/// output writer itself does.
pub fn run<S, W>(
    command: &Command,
    store: &mut S,
    kdump_tools: KdumpToolsFile,
    out: &mut W,
) -> Result<i32>
where
    S: ConfigStore + ?Sized,
    W: Write,
{
    let mut configurator = KdumpConfigurator::new(store, kdump_tools);

    let result = match command {
        Command::Enable => configurator.enable(),
        Command::Disable => configurator.disable(),
        Command::Memory { size } => configurator.set_memory(size),
        Command::NumDumps { count } => configurator.set_num_dumps(*count),
        Command::Remote { action } => configurator.set_remote((*action).into()),
        Command::Status => {
            return match configurator.current() {
                Ok(config) => {
                    writeln!(out, "{}", config)?;
                    Ok(0)
                }
                Err(err) => {
                    writeln!(out, "Error: {}", err)?;
                    Ok(1)
                }
            };
        }
    };

    match result {
        Ok(()) => {
            writeln!(out, "{}", REBOOT_ADVISORY)?;
            Ok(0)
        }
        Err(err) => {
            writeln!(out, "Error: {}", err)?;
            Ok(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::RemoteModeArg;
    use crate::constants::{KDUMP_CONFIG_KEY, KDUMP_TABLE};
    use crate::store::{EntryMap, MockConfigStore, Table};
    use std::io::Write as _;
    use std::path::Path;
    use tempfile::NamedTempFile;

    fn config_table(pairs: &[(&str, &str)]) -> Table {
        let attrs: EntryMap = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Table::from([(KDUMP_CONFIG_KEY.to_string(), attrs)])
    }

    fn dummy_tools() -> KdumpToolsFile {
        KdumpToolsFile::new(Path::new("/nonexistent/kdump-tools"))
    }

    fn run_with(store: &mut MockConfigStore, tools: KdumpToolsFile, command: Command) -> (i32, String) {
        let mut out = Vec::new();
        let code = run(&command, store, tools, &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_enable_succeeds_and_prints_advisory() {
        let mut store = MockConfigStore::new();
        store
            .expect_get_table()
            .returning(|_| Ok(Some(config_table(&[("enabled", "false")]))));
        store.expect_mod_entry().times(1).returning(|_, _, _| Ok(()));

        let (code, output) = run_with(&mut store, dummy_tools(), Command::Enable);
        assert_eq!(code, 0);
        assert!(output.contains(REBOOT_ADVISORY));
    }

    #[test]
    fn test_enable_fails_after_table_deleted() {
        let mut store = MockConfigStore::new();
        store.expect_get_table().returning(|_| Ok(None));
        store.expect_mod_entry().times(0);

        let (code, output) = run_with(&mut store, dummy_tools(), Command::Enable);
        assert_eq!(code, 1);
        assert!(output.contains("Error: Unable to retrieve 'KDUMP' table from Config DB."));
    }

    #[test]
    fn test_memory_rejects_malformed_size() {
        let mut store = MockConfigStore::new();
        store.expect_mod_entry().times(0);

        let (code, output) = run_with(
            &mut store,
            dummy_tools(),
            Command::Memory { size: "huge".to_string() },
        );
        assert_eq!(code, 1);
        assert!(output.contains("Error: Invalid memory size 'huge'"));
    }

    #[test]
    fn test_remote_enable_prints_advisory_and_writes_once() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "#SSH=original_value\n#SSH_KEY=original_value\n").unwrap();

        let mut store = MockConfigStore::new();
        store
            .expect_get_table()
            .returning(|_| Ok(Some(config_table(&[("remote", "false")]))));
        store
            .expect_mod_entry()
            .withf(|table, key, attrs| {
                table == KDUMP_TABLE
                    && key == KDUMP_CONFIG_KEY
                    && *attrs == EntryMap::from([("remote".to_string(), "true".to_string())])
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let (code, output) = run_with(
            &mut store,
            KdumpToolsFile::new(file.path()),
            Command::Remote { action: RemoteModeArg::Enable },
        );
        assert_eq!(code, 0);
        assert!(output.contains(REBOOT_ADVISORY));
        assert!(!output.contains("commented out"));
    }

    #[test]
    fn test_remote_enable_already_enabled() {
        let mut store = MockConfigStore::new();
        store
            .expect_get_table()
            .returning(|_| Ok(Some(config_table(&[("remote", "true")]))));
        store.expect_mod_entry().times(0);

        let (code, output) = run_with(
            &mut store,
            dummy_tools(),
            Command::Remote { action: RemoteModeArg::Enable },
        );
        assert_eq!(code, 1);
        assert!(output.contains("Error: Kdump Remote Mode is already enabled."));
    }

    #[test]
    fn test_remote_disable_prints_advisory_and_writes_once() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "SSH=\"your_ssh_value\"\nSSH_KEY=\"your_ssh_key_value\"\n").unwrap();

        let mut store = MockConfigStore::new();
        store
            .expect_get_table()
            .returning(|_| Ok(Some(config_table(&[("remote", "true")]))));
        store
            .expect_mod_entry()
            .withf(|_, _, attrs| {
                *attrs == EntryMap::from([("remote".to_string(), "false".to_string())])
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let (code, output) = run_with(
            &mut store,
            KdumpToolsFile::new(file.path()),
            Command::Remote { action: RemoteModeArg::Disable },
        );
        assert_eq!(code, 0);
        assert!(output.contains(REBOOT_ADVISORY));
    }

    #[test]
    fn test_remote_disable_already_disabled() {
        let mut store = MockConfigStore::new();
        store
            .expect_get_table()
            .returning(|_| Ok(Some(config_table(&[("remote", "false")]))));
        store.expect_mod_entry().times(0);

        let (code, output) = run_with(
            &mut store,
            dummy_tools(),
            Command::Remote { action: RemoteModeArg::Disable },
        );
        assert_eq!(code, 1);
        assert!(output.contains("Error: Kdump Remote Mode is already disabled."));
    }

    #[test]
    fn test_remote_disable_with_ssh_values() {
        let mut store = MockConfigStore::new();
        store.expect_get_table().returning(|_| {
            Ok(Some(config_table(&[
                ("remote", "true"),
                ("ssh_string", "some_ssh_string"),
                ("ssh_key", "some_ssh_key"),
            ])))
        });
        store.expect_mod_entry().times(0);

        let (code, output) = run_with(
            &mut store,
            dummy_tools(),
            Command::Remote { action: RemoteModeArg::Disable },
        );
        assert_eq!(code, 1);
        assert!(output.contains(
            "Error: Remove SSH_string and SSH_key from Config DB before disabling Kdump Remote Mode."
        ));
    }

    #[test]
    fn test_status_prints_current_record() {
        let mut store = MockConfigStore::new();
        store.expect_get_table().returning(|_| {
            Ok(Some(config_table(&[
                ("enabled", "true"),
                ("memory", "256MB"),
                ("num_dumps", "3"),
                ("remote", "false"),
            ])))
        });

        let (code, output) = run_with(&mut store, dummy_tools(), Command::Status);
        assert_eq!(code, 0);
        assert!(output.contains("Kdump administrative mode: enabled"));
        assert!(output.contains("Kdump memory reservation: 256MB"));
        assert!(!output.contains(REBOOT_ADVISORY));
    }

    #[test]
    fn test_status_fails_after_table_deleted() {
        let mut store = MockConfigStore::new();
        store.expect_get_table().returning(|_| Ok(None));

        let (code, output) = run_with(&mut store, dummy_tools(), Command::Status);
        assert_eq!(code, 1);
        assert!(output.contains("Error: Unable to retrieve 'KDUMP' table from Config DB."));
    }
}

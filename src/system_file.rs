//! Editor for the kdump-tools defaults file.
//!
//! Remote mode needs the `SSH` and `SSH_KEY` variables in
//! `/etc/default/kdump-tools` uncommented (enable) or commented out
//! (disable). Only those two lines are touched; everything else passes
//! through byte for byte, in order.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::{SSH_KEY_PLACEHOLDER_LINE, SSH_PLACEHOLDER_LINE};
use crate::errors::KdumpError;

/// Rewrites the SSH variable lines of a kdump-tools defaults file.
#[derive(Debug, Clone)]
pub struct KdumpToolsFile {
    path: PathBuf,
}

impl KdumpToolsFile {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Toggle the SSH variable lines to match the requested remote state.
    ///
    /// One read, one whole-file write. The new contents are assembled in
    /// memory first and written with a single `fs::write`, so a failed open
    /// leaves the original file intact.
    pub fn apply(&self, enable: bool) -> Result<(), KdumpError> {
        let content = fs::read_to_string(&self.path).map_err(|source| KdumpError::FileUpdate {
            path: self.path.clone(),
            source,
        })?;

        let lines: Vec<String> = content
            .split_inclusive('\n')
            .map(str::to_string)
            .collect();
        let rewritten = rewrite_lines(&lines, enable);

        fs::write(&self.path, rewritten.concat()).map_err(|source| KdumpError::FileUpdate {
            path: self.path.clone(),
            source,
        })?;

        debug!(
            "Rewrote {} with SSH lines {}",
            self.path.display(),
            if enable { "uncommented" } else { "commented out" }
        );
        Ok(())
    }
}

/// Compute the rewritten line sequence.
///
/// Lines carrying the `SSH` or `SSH_KEY` variable (commented or not) are
/// replaced with the uncommented placeholder assignment on enable, or
/// re-commented with their current value preserved on disable. All other
/// lines are returned unchanged.
pub fn rewrite_lines(lines: &[String], enable: bool) -> Vec<String> {
    lines
        .iter()
        .map(|line| rewrite_line(line, enable))
        .collect()
}

fn rewrite_line(line: &str, enable: bool) -> String {
    let variable = match ssh_variable(line) {
        Some(v) => v,
        None => return line.to_string(),
    };

    if enable {
        let placeholder = match variable {
            SshVariable::Ssh => SSH_PLACEHOLDER_LINE,
            SshVariable::SshKey => SSH_KEY_PLACEHOLDER_LINE,
        };
        format!("{}{}", placeholder, line_terminator(line))
    } else if line.trim_start().starts_with('#') {
        // Already commented out, keep as is.
        line.to_string()
    } else {
        format!("#{}", line)
    }
}

#[derive(Debug, Clone, Copy)]
enum SshVariable {
    Ssh,
    SshKey,
}

/// Identify which SSH variable a line assigns, ignoring a leading comment
/// marker and surrounding whitespace.
fn ssh_variable(line: &str) -> Option<SshVariable> {
    let trimmed = line.trim_start();
    let uncommented = trimmed
        .strip_prefix('#')
        .map(str::trim_start)
        .unwrap_or(trimmed);

    if uncommented.starts_with("SSH_KEY=") {
        Some(SshVariable::SshKey)
    } else if uncommented.starts_with("SSH=") {
        Some(SshVariable::Ssh)
    } else {
        None
    }
}

fn line_terminator(line: &str) -> &str {
    if line.ends_with('\n') {
        "\n"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_enable_uncomments_and_writes_placeholders() {
        let input = lines(&["#SSH=original_value\n", "#SSH_KEY=original_value\n"]);
        assert_eq!(
            rewrite_lines(&input, true),
            lines(&["SSH=\"your_ssh_value\"\n", "SSH_KEY=\"your_ssh_key_value\"\n"])
        );
    }

    #[test]
    fn test_disable_comments_out_preserving_values() {
        let input = lines(&["SSH=\"your_ssh_value\"\n", "SSH_KEY=\"your_ssh_key_value\"\n"]);
        assert_eq!(
            rewrite_lines(&input, false),
            lines(&["#SSH=\"your_ssh_value\"\n", "#SSH_KEY=\"your_ssh_key_value\"\n"])
        );
    }

    #[test]
    fn test_disable_keeps_already_commented_lines() {
        let input = lines(&["#SSH=old\n", "#SSH_KEY=old\n"]);
        assert_eq!(rewrite_lines(&input, false), input);
    }

    #[test]
    fn test_enable_replaces_existing_values_with_placeholders() {
        let input = lines(&["SSH=user@host\n", "SSH_KEY=/root/.ssh/id_rsa\n"]);
        assert_eq!(
            rewrite_lines(&input, true),
            lines(&["SSH=\"your_ssh_value\"\n", "SSH_KEY=\"your_ssh_key_value\"\n"])
        );
    }

    #[test]
    fn test_unrelated_lines_pass_through_in_order() {
        let input = lines(&[
            "# kdump-tools configuration\n",
            "USE_KDUMP=1\n",
            "#SSH=original_value\n",
            "KDUMP_COREDIR=/var/crash\n",
            "#SSH_KEY=original_value\n",
            "\n",
        ]);
        let output = rewrite_lines(&input, true);

        assert_eq!(output[0], "# kdump-tools configuration\n");
        assert_eq!(output[1], "USE_KDUMP=1\n");
        assert_eq!(output[2], "SSH=\"your_ssh_value\"\n");
        assert_eq!(output[3], "KDUMP_COREDIR=/var/crash\n");
        assert_eq!(output[4], "SSH_KEY=\"your_ssh_key_value\"\n");
        assert_eq!(output[5], "\n");
    }

    #[test]
    fn test_last_line_without_newline_keeps_no_newline() {
        let input = lines(&["#SSH_KEY=original_value"]);
        assert_eq!(rewrite_lines(&input, true), lines(&["SSH_KEY=\"your_ssh_key_value\""]));
    }

    #[test]
    fn test_apply_round_trip_on_real_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "USE_KDUMP=1\n#SSH=original_value\n#SSH_KEY=original_value\n").unwrap();

        let editor = KdumpToolsFile::new(file.path());
        editor.apply(true).unwrap();
        assert_eq!(
            std::fs::read_to_string(file.path()).unwrap(),
            "USE_KDUMP=1\nSSH=\"your_ssh_value\"\nSSH_KEY=\"your_ssh_key_value\"\n"
        );

        editor.apply(false).unwrap();
        assert_eq!(
            std::fs::read_to_string(file.path()).unwrap(),
            "USE_KDUMP=1\n#SSH=\"your_ssh_value\"\n#SSH_KEY=\"your_ssh_key_value\"\n"
        );
    }

    #[test]
    fn test_apply_missing_file_reports_file_update_error() {
        let editor = KdumpToolsFile::new(Path::new("/nonexistent/kdump-tools"));
        let err = editor.apply(true).unwrap_err();
        assert!(matches!(err, KdumpError::FileUpdate { .. }));
    }
}

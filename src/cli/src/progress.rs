use account_recovery_core::{SignupStepOperation, SignupStepOutput};
use anyhow::{Context, Result};
use log::{error, info};
use std::{fs::OpenOptions, io::Write, path::PathBuf};

/// Receives the save and submit requests of signup steps
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait StepTracker {
    fn track(&self, operation: &SignupStepOperation) -> SignupStepOutput;
}

/// Step tracker writing every request to the log and, if configured, to a
/// JSON lines file
#[derive(Clone, Debug, Default)]
pub struct FileStepTracker {
    file: Option<PathBuf>,
}

impl FileStepTracker {
    pub fn new(file: Option<PathBuf>) -> Self {
        Self { file }
    }

    fn append(&self, operation: &SignupStepOperation) -> Result<()> {
        let Some(path) = &self.file else {
            return Ok(());
        };

        let line = serde_json::to_string(operation).context("failed to serialize step")?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        writeln!(file, "{line}").with_context(|| format!("failed to write {}", path.display()))
    }
}

impl StepTracker for FileStepTracker {
    fn track(&self, operation: &SignupStepOperation) -> SignupStepOutput {
        match operation {
            SignupStepOperation::Save { step_name, form } => {
                info!("save step {step_name} ({} fields)", form.len())
            }
            SignupStepOperation::Submit { step_name, .. } => info!("submit step {step_name}"),
        }

        match self.append(operation) {
            Ok(()) => SignupStepOutput::Accepted,
            Err(e) => {
                error!("failed to record signup step: {e:#}");
                SignupStepOutput::Rejected {
                    message: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn submit(code: &str) -> SignupStepOperation {
        SignupStepOperation::Submit {
            step_name: "verify".to_string(),
            code: code.to_string(),
        }
    }

    #[test]
    fn records_one_line_per_operation() {
        let temp_dir = TempDir::new().expect("failed to create temp directory");
        let path = temp_dir.path().join("progress.jsonl");
        let tracker = FileStepTracker::new(Some(path.clone()));

        assert_eq!(tracker.track(&submit("1")), SignupStepOutput::Accepted);
        assert_eq!(tracker.track(&submit("2")), SignupStepOutput::Accepted);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<SignupStepOperation> = content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines, vec![submit("1"), submit("2")]);
    }

    #[test]
    fn unwritable_file_rejects_the_step() {
        let temp_dir = TempDir::new().expect("failed to create temp directory");
        let tracker = FileStepTracker::new(Some(temp_dir.path().join("missing/progress.jsonl")));

        assert!(matches!(
            tracker.track(&submit("1")),
            SignupStepOutput::Rejected { .. }
        ));
    }

    #[test]
    fn without_file_every_step_is_accepted() {
        assert_eq!(
            FileStepTracker::default().track(&submit("1")),
            SignupStepOutput::Accepted
        );
    }
}

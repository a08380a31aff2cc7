use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::debug;

use crate::error::Result;

/// Yes/no question asked before an existing model file is replaced.
pub trait Confirm {
    fn confirm(&self, message: &str) -> Result<bool>;
}

/// Prompts on stdout and reads the answer from stdin.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, message: &str) -> Result<bool> {
        let mut stdout = io::stdout();
        write!(stdout, "{} [y/N] ", message)?;
        stdout.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;

        Ok(is_yes(&answer))
    }
}

/// Answers yes to everything, for `--yes`.
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _message: &str) -> Result<bool> {
        Ok(true)
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

pub trait FileWriter {
    /// Writes `content` to `path`, asking first when the file exists.
    /// Returns false when the overwrite was declined.
    fn write_if_confirmed(&self, model_name: &str, path: &Path, content: &str) -> Result<bool>;
}

pub struct FsModelWriter<C: Confirm> {
    confirm: C,
}

impl<C: Confirm> FsModelWriter<C> {
    pub fn new(confirm: C) -> Self {
        Self { confirm }
    }
}

impl<C: Confirm> FileWriter for FsModelWriter<C> {
    fn write_if_confirmed(&self, model_name: &str, path: &Path, content: &str) -> Result<bool> {
        if path.exists() {
            let message = format!("{} model already exists, overwrite?", model_name);
            if !self.confirm.confirm(&message)? {
                debug!(path = %path.display(), "overwrite declined");
                return Ok(false);
            }
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;

        Ok(true)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every question and answers with a fixed value.
    pub(crate) struct ScriptedConfirm {
        pub answer: bool,
        pub asked: RefCell<Vec<String>>,
    }

    impl ScriptedConfirm {
        pub(crate) fn new(answer: bool) -> Self {
            Self {
                answer,
                asked: RefCell::new(Vec::new()),
            }
        }
    }

    impl Confirm for &ScriptedConfirm {
        fn confirm(&self, message: &str) -> Result<bool> {
            self.asked.borrow_mut().push(message.to_string());
            Ok(self.answer)
        }
    }

    #[test]
    fn writes_new_file_without_asking() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app/models/users.go");
        let confirm = ScriptedConfirm::new(false);

        let written = FsModelWriter::new(&confirm)
            .write_if_confirmed("users", &path, "package models\n")
            .unwrap();

        assert!(written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "package models\n");
        assert!(confirm.asked.borrow().is_empty());
    }

    #[test]
    fn declined_overwrite_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("order_items.go");
        fs::write(&path, "old").unwrap();
        let confirm = ScriptedConfirm::new(false);

        let written = FsModelWriter::new(&confirm)
            .write_if_confirmed("OrderItems", &path, "new")
            .unwrap();

        assert!(!written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");
        assert_eq!(*confirm.asked.borrow(), vec!["OrderItems model already exists, overwrite?"]);
    }

    #[test]
    fn confirmed_overwrite_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.go");
        fs::write(&path, "old").unwrap();

        let written = FsModelWriter::new(AssumeYes)
            .write_if_confirmed("users", &path, "new")
            .unwrap();

        assert!(written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn parses_answers() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("nope"));
    }
}

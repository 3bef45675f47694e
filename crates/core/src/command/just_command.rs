use serde::Serialize;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// A runnable invocation of the task runner for a single target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JustCommand {
    pub program: String,
    pub args: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<(String, String)>,
}

impl JustCommand {
    pub fn new(program: impl Into<String>, target: &str) -> Self {
        Self {
            program: program.into(),
            args: vec![target.to_string()],
            working_dir: None,
            env: Vec::new(),
        }
    }

    /// Pin the manifest explicitly so the runner does not search for one
    pub fn with_justfile(mut self, justfile: &Path) -> Self {
        let mut args = vec![
            "--justfile".to_string(),
            justfile.to_string_lossy().into_owned(),
        ];
        args.append(&mut self.args);
        self.args = args;
        self
    }

    pub fn with_working_dir(mut self, dir: String) -> Self {
        self.working_dir = Some(dir);
        self
    }

    pub fn with_env(mut self, key: String, value: String) -> Self {
        self.env.push((key, value));
        self
    }

    /// The target this command runs (always the last argument)
    pub fn target(&self) -> Option<&str> {
        self.args.last().map(String::as_str)
    }

    pub fn to_shell_command(&self) -> String {
        let mut cmd = self.program.clone();
        for arg in &self.args {
            cmd.push(' ');
            if arg.contains(' ') {
                cmd.push_str(&format!("'{arg}'"));
            } else {
                cmd.push_str(arg);
            }
        }
        cmd
    }

    pub fn execute(&self) -> io::Result<ExitStatus> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }

        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        cmd.status()
    }
}

use simbridge_device::{CommandOutput, CommandRunner};
use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

/// Runner that replays canned outputs and records every invocation.
#[derive(Default)]
pub struct ScriptedRunner {
    responses: Mutex<VecDeque<io::Result<CommandOutput>>>,
    invocations: Mutex<Vec<(String, Vec<String>)>>,
}

#[allow(dead_code)]
impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_ok(self, stdout: &str) -> Self {
        self.push(Ok(CommandOutput {
            success: true,
            code: Some(0),
            stdout: stdout.as_bytes().to_vec(),
            stderr: Vec::new(),
        }))
    }

    pub fn respond_exit(self, code: i32, stdout: &str, stderr: &str) -> Self {
        self.push(Ok(CommandOutput {
            success: false,
            code: Some(code),
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
        }))
    }

    pub fn respond_spawn_error(self) -> Self {
        self.push(Err(io::Error::new(io::ErrorKind::NotFound, "No such file or directory")))
    }

    fn push(self, response: io::Result<CommandOutput>) -> Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    pub fn invocations(&self) -> Vec<(String, Vec<String>)> {
        self.invocations.lock().unwrap().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        self.invocations
            .lock()
            .unwrap()
            .push((program.to_string(), args.to_vec()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left")
    }
}

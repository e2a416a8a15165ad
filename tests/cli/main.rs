use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
    process::Command,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
};

use anyhow::{Context, Ok, Result};
use insta::Settings;
use insta_cmd::get_cargo_bin;
use serde_json::{Map, Value, json};
use tempfile::TempDir;
use tiny_http::{Response, Server};

mod init;
mod render;
mod translate;

const BIN_NAME: &str = "glossa";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // stop config lookup at the project root
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn translate_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("translate");
        cmd
    }

    /// Snapshot settings that hide the temp project path and stub server port.
    pub fn snapshot_settings(&self) -> Settings {
        let mut settings = Settings::clone_current();
        settings.add_filter(
            &regex::escape(&self.project_dir.display().to_string()),
            "[PROJECT]",
        );
        settings.add_filter(r"127\.0\.0\.1:\d+", "[SERVER]");
        settings
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    /// Point the project at a stub translation service.
    pub fn use_service(&self, service: &StubService) -> Result<()> {
        self.write_file(
            ".glossarc.json",
            &json!({
                "apiBaseUrl": service.base_url,
                "batchCount": 2,
                "locales": [
                    { "code": "frFR", "name": "French" },
                    { "code": "deDE", "name": "German" }
                ],
                "preamble": "-- generated\n\n"
            })
            .to_string(),
        )
    }
}

/// OpenAI-compatible stub that "translates" every line of the user message
/// into `fr:<line>` and `de:<line>`.
pub struct StubService {
    pub base_url: String,
    chat_requests: Arc<AtomicUsize>,
}

impl StubService {
    pub fn start() -> Result<Self> {
        let server = Server::http("127.0.0.1:0")
            .map_err(|e| anyhow::anyhow!("failed to start stub server: {}", e))?;
        let addr = server
            .server_addr()
            .to_ip()
            .context("stub server has no IP address")?;
        let chat_requests = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&chat_requests);

        thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);

                let reply = if request.url().ends_with("/models") {
                    json!({ "data": [] })
                } else {
                    counter.fetch_add(1, Ordering::SeqCst);
                    completion_for(&body)
                };
                let _ = request.respond(Response::from_string(reply.to_string()));
            }
        });

        Ok(Self {
            base_url: format!("http://{}/v1", addr),
            chat_requests,
        })
    }

    pub fn chat_requests(&self) -> usize {
        self.chat_requests.load(Ordering::SeqCst)
    }
}

fn completion_for(body: &str) -> Value {
    let request: Value = serde_json::from_str(body).unwrap_or(Value::Null);
    let block = request["messages"][1]["content"].as_str().unwrap_or("");

    let mut translations = Map::new();
    for line in block.lines().filter(|l| !l.is_empty()) {
        translations.insert(
            line.to_string(),
            json!({ "frFR": format!("fr:{}", line), "deDE": format!("de:{}", line) }),
        );
    }

    json!({
        "choices": [{
            "message": { "role": "assistant", "content": Value::Object(translations).to_string() }
        }]
    })
}

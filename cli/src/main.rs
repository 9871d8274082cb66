use std::fmt::Write as _;
use std::time::Duration;

use clap::{Parser, Subcommand};
use pads::{Axis, ControllerKind, GamepadInfo, GamepadState};


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status} for {path}")]
    ServerError { status: u16, path: String },
    #[error("no {kind} controller with id {id}")]
    NotFound { kind: ControllerKind, id: usize },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "padscope-cli", about = "Query a running padscope server")]
struct Cli {
    #[arg(long, env = "PADSCOPE_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server is up.
    Ping,
    /// List connected controllers.
    List,
    /// Print one controller's state as JSON.
    State { kind: ControllerKind, id: usize },
    /// Print a line every time a controller's state changes.
    Watch {
        kind: ControllerKind,
        id: usize,
        #[arg(long, default_value_t = 100)]
        interval_ms: u64,
        #[arg(long, help = "Stop after this many printed changes")]
        count: Option<usize>,
    },
}

struct Api {
    client: reqwest::Client,
    base_url: String,
}

impl Api {
    fn new(base_url: &str) -> Self {
        Self { client: reqwest::Client::new(), base_url: base_url.trim_end_matches('/').to_owned() }
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response, CliError> {
        let response = self.client.get(format!("{}{path}", self.base_url)).send().await?;
        Ok(response)
    }

    async fn gamepads(&self) -> Result<Vec<GamepadInfo>, CliError> {
        let path = "/api/gamepads";
        let response = self.get(path).await?;
        if !response.status().is_success() {
            return Err(CliError::ServerError { status: response.status().as_u16(), path: path.to_owned() });
        }
        Ok(response.json().await?)
    }

    async fn state(&self, kind: ControllerKind, id: usize) -> Result<GamepadState, CliError> {
        let path = state_path(kind, id);
        let response = self.get(&path).await?;
        match response.status() {
            reqwest::StatusCode::NOT_FOUND => Err(CliError::NotFound { kind, id }),
            status if !status.is_success() => Err(CliError::ServerError { status: status.as_u16(), path }),
            _ => Ok(response.json().await?),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let api = Api::new(&cli.base_url);

    match cli.command {
        Command::Ping => run_ping(&api).await,
        Command::List => run_list(&api).await,
        Command::State { kind, id } => run_state(&api, kind, id).await,
        Command::Watch { kind, id, interval_ms, count } => {
            run_watch(&api, kind, id, Duration::from_millis(interval_ms.max(1)), count).await
        }
    }
}

async fn run_ping(api: &Api) -> Result<(), CliError> {
    let response = api.get("/healthz").await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), path: "/healthz".to_owned() });
    }
    println!("ok");
    Ok(())
}

async fn run_list(api: &Api) -> Result<(), CliError> {
    let pads = api.gamepads().await?;
    print!("{}", format_table(&pads));
    Ok(())
}

async fn run_state(api: &Api, kind: ControllerKind, id: usize) -> Result<(), CliError> {
    let state = api.state(kind, id).await?;
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

async fn run_watch(
    api: &Api,
    kind: ControllerKind,
    id: usize,
    interval: Duration,
    count: Option<usize>,
) -> Result<(), CliError> {
    let mut last: Option<String> = None;
    let mut printed = 0usize;
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    while count.is_none_or(|limit| printed < limit) {
        ticker.tick().await;
        let line = format_state_line(&api.state(kind, id).await?);
        if last.as_deref() == Some(line.as_str()) {
            continue;
        }
        println!("{line}");
        last = Some(line);
        printed += 1;
    }
    Ok(())
}

fn state_path(kind: ControllerKind, id: usize) -> String {
    format!("/api/gamepads/{kind}/{id}")
}

fn format_vid_pid(info: &GamepadInfo) -> String {
    match (info.vendor_id, info.product_id) {
        (Some(vid), Some(pid)) => format!("{vid:04x}:{pid:04x}"),
        _ => "-".to_owned(),
    }
}

fn format_table(pads: &[GamepadInfo]) -> String {
    if pads.is_empty() {
        return "no controllers connected\n".to_owned();
    }
    let mut out = format!("{:<4} {:<7} {:<10} {}\n", "ID", "KIND", "VID:PID", "NAME");
    for info in pads {
        let _ = writeln!(
            out,
            "{:<4} {:<7} {:<10} {}",
            info.id,
            info.controller_type,
            format_vid_pid(info),
            info.name
        );
    }
    out
}

/// One-line summary: held buttons by label, then every axis to two decimals.
fn format_state_line(state: &GamepadState) -> String {
    let pressed: Vec<&str> = state.pressed().iter().map(|b| b.label()).collect();
    let axes: Vec<String> = Axis::ALL
        .iter()
        .map(|axis| {
            let value = state.axes.get(axis.index()).copied().unwrap_or(0.0);
            format!("{}={value:.2}", axis.label())
        })
        .collect();
    format!("[{}] {}", pressed.join(", "), axes.join(", "))
}

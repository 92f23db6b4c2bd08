use axum::{extract::State, Json};
use chrono::Utc;
use serde_json::{json, Value};
use sysinfo::{Pid, System};

use crate::AppState;

/// Operational snapshot: uptime, process memory, pid, timestamp.
/// Read fresh from the host on every call — the service itself holds no
/// cross-request counters.
pub async fn runtime_metrics(State(state): State<AppState>) -> Json<Value> {
    let pid = Pid::from_u32(std::process::id());

    let mut system = System::new();
    system.refresh_process(pid);

    let memory = match system.process(pid) {
        Some(process) => json!({
            "rss": process.memory(),
            "virtual": process.virtual_memory(),
        }),
        None => json!({ "rss": 0, "virtual": 0 }),
    };

    Json(json!({
        "uptime": state.started_at.elapsed().as_secs_f64(),
        "memory": memory,
        "pid": std::process::id(),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Crates of this repository compiled into the frontend bundle.
const LOCAL_CRATES: [&str; 2] = ["vida-memoria-wasm", "dto"];

#[derive(Debug, PartialEq)]
pub enum WasmBuildFailure {
    /// The toolchain can't build for `wasm32-unknown-unknown`.
    ToolchainMissing(String),
    /// The frontend code itself is wrong.
    CompilationFailed(String),
}

/// Tell why the frontend compilation failed, from what cargo wrote to stderr.
pub fn classify_failure(stderr: &str) -> WasmBuildFailure {
    let local_crate_failed = LOCAL_CRATES
        .iter()
        .any(|name| stderr.contains(&format!("could not compile `{name}`")));
    let last_line = stderr.lines().last().unwrap_or_default().to_owned();
    if local_crate_failed {
        WasmBuildFailure::CompilationFailed(stderr.to_owned())
    } else {
        WasmBuildFailure::ToolchainMissing(last_line)
    }
}

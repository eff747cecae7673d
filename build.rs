use std::fs;
use std::path::Path;
use std::process::Command;
use wasm_build::{WasmBuildFailure, classify_failure};

#[path = "build/wasm_build.rs"]
mod wasm_build;

const WASM_CRATE_PATH: &str = "./wasm";
const WASM_FILE_NAME: &str = "vida_memoria_wasm.wasm";
const COMPILATION_PATH: &str = "target-wasm";
const PKG_PATH: &str = "public/static/pkg";
/// Set to `0` to serve whatever has already been generated into `public/static/pkg`.
const BUILD_WASM_ENV_VAR: &str = "VIDA_MEMORIA_BUILD_WASM";

fn main() {
    println!("cargo::rerun-if-changed={WASM_CRATE_PATH}/src");
    println!("cargo::rerun-if-changed={WASM_CRATE_PATH}/Cargo.toml");
    println!("cargo::rerun-if-changed=dto/src");
    println!("cargo::rerun-if-changed=build");
    println!("cargo::rerun-if-env-changed={BUILD_WASM_ENV_VAR}");

    if std::env::var(BUILD_WASM_ENV_VAR).is_ok_and(|value| value == "0") {
        return;
    }

    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "debug".to_owned());
    let profile = profile.as_str();
    let wasm_file_path =
        format!("{COMPILATION_PATH}/wasm32-unknown-unknown/{profile}/{WASM_FILE_NAME}");

    match compile_wasm(profile) {
        Ok(()) => {}
        Err(WasmBuildFailure::ToolchainMissing(reason)) => {
            println!("cargo::warning=Frontend not compiled: {reason}");
            return;
        }
        Err(WasmBuildFailure::CompilationFailed(stderr)) => {
            panic!("Are you sure your WASM lib is correct?\n{stderr}");
        }
    }
    if let Err(error) = generate_bindings(&wasm_file_path) {
        println!("cargo::warning=Frontend bindings not generated: {error}");
    }
}

fn compile_wasm(profile: &str) -> Result<(), WasmBuildFailure> {
    delete_entity(COMPILATION_PATH).map_err(WasmBuildFailure::ToolchainMissing)?;
    let target_dir = format!("--target-dir={COMPILATION_PATH}");
    let manifest_path = format!("--manifest-path={WASM_CRATE_PATH}/Cargo.toml");
    let mut build_args = vec![
        "build",
        "--lib",
        "--target=wasm32-unknown-unknown",
        target_dir.as_str(),
        manifest_path.as_str(),
    ];
    if profile == "release" {
        build_args.push("--release");
    }
    let output = Command::new(std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_owned()))
        .args(build_args)
        .output()
        .map_err(|error| WasmBuildFailure::ToolchainMissing(format!("can't run cargo: {error}")))?;

    if output.status.success() {
        Ok(())
    } else {
        Err(classify_failure(&String::from_utf8_lossy(&output.stderr)))
    }
}

/// Generate JS & TS bindings
fn generate_bindings(wasm_file_path: &str) -> Result<(), String> {
    delete_entity(PKG_PATH)?;
    let out_dir_param = format!("--out-dir={PKG_PATH}");
    let wasm_bindgen_args = ["--target=web", out_dir_param.as_str(), wasm_file_path];
    let output = Command::new("wasm-bindgen")
        .args(wasm_bindgen_args)
        .output()
        .map_err(|error| format!("is wasm-bindgen-cli installed? ({error})"))?;

    if output.status.success() {
        Ok(())
    } else {
        Err(String::from_utf8_lossy(&output.stderr).into_owned())
    }
}

fn delete_entity(path: &str) -> Result<(), String> {
    let path = Path::new(path);
    let result = match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(_) => Ok(()),
    };
    result.map_err(|error| format!("couldn't delete {}: {error}", path.display()))
}

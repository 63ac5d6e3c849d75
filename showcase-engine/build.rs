// build.rs
use std::{env, fs, path::PathBuf};

/// Catalog shared with the page server; the engine loads a copy of it natively.
const SHARED_CATALOG: &str = "../showcase-server/data/get_data.json";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed={}", SHARED_CATALOG);

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let source = manifest_dir.join(SHARED_CATALOG);

    let Ok(content) = fs::read_to_string(&source) else {
        println!(
            "cargo:warning=No shared catalog at {}; native runs need assets/data/projects.json",
            source.display()
        );
        return;
    };

    // Fail the build early rather than at load time.
    let catalog: serde_json::Value =
        serde_json::from_str(&content).expect("Shared catalog is not valid JSON");
    let project_count = catalog
        .get("projects")
        .and_then(|projects| projects.as_array())
        .map(Vec::len)
        .expect("Shared catalog has no `projects` array");

    let data_dir = manifest_dir.join("assets").join("data");
    fs::create_dir_all(&data_dir).ok(); // Create assets/data if it doesn't exist

    let json_content = serde_json::to_string_pretty(&catalog).unwrap();
    fs::write(data_dir.join("projects.json"), &json_content)
        .expect("Failed to write projects.json to assets");

    println!(
        "cargo:warning=Copied {} projects to assets/data/projects.json",
        project_count
    );
}

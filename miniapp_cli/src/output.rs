use miniapp_api::types::{ManifestEntity, MiniAppInfo};
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled, Serialize)]
struct MiniAppRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Version")]
    #[serde(rename = "Version")]
    version: String,
    #[tabled(rename = "Version ID")]
    #[serde(rename = "Version ID")]
    version_id: String,
}

#[derive(Tabled, Serialize)]
struct ManifestRow {
    #[tabled(rename = "File")]
    #[serde(rename = "File")]
    file: String,
}

// -- Row builders --

fn build_mini_app_rows(apps: &[MiniAppInfo]) -> Vec<MiniAppRow> {
    apps.iter()
        .map(|app| MiniAppRow {
            id: app.id.clone(),
            name: app.display_name.clone(),
            version: app.version.version_tag.clone(),
            version_id: app.version.version_id.clone(),
        })
        .collect()
}

fn build_manifest_rows(manifest: &ManifestEntity) -> Vec<ManifestRow> {
    manifest
        .files
        .iter()
        .map(|file| ManifestRow { file: file.clone() })
        .collect()
}

// -- Table output --

pub fn print_mini_apps_table(apps: &[MiniAppInfo]) {
    println!("{}", Table::new(build_mini_app_rows(apps)));
}

pub fn print_manifest_table(manifest: &ManifestEntity) {
    println!("{}", Table::new(build_manifest_rows(manifest)));
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

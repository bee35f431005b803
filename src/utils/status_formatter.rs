/// Human label for a webapp instance status reported by the API
pub fn format_status(status: &str) -> String {
    match status.trim().to_lowercase().as_str() {
        "" | "pending" => "Pending".to_string(),
        "provisioning" => "Provisioning".to_string(),
        "building" => "Building".to_string(),
        "running" | "active" | "live" | "deployed" => "Live".to_string(),
        "failed" | "error" => "Failed".to_string(),
        _ => status.to_string(),
    }
}

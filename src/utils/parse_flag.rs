/// Reads a checkbox-style form value. Anything but an explicit yes is false.
pub fn parse_flag(value: Option<&str>) -> bool {
    value
        .map(|v| v.trim().to_ascii_lowercase())
        .is_some_and(|v| matches!(v.as_str(), "1" | "true" | "yes" | "on"))
}

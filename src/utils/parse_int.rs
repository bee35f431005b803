/// Parse an optional non-negative index from a string
pub fn parse_optional_index(value: Option<&str>) -> Option<usize> {
    value.and_then(|v| {
        let t = v.trim();
        if t.is_empty() {
            None
        } else {
            t.parse::<usize>().ok()
        }
    })
}

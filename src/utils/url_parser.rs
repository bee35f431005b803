/// Host (and port) of a base URL, shown in the page header.
pub fn hostname_from_url(u: &str) -> String {
    let s = u.trim();
    let rest = s.split_once("://").map_or(s, |(_, rest)| rest);
    rest.split(['/', '?', '#']).next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::hostname_from_url;

    #[test]
    fn strips_scheme_and_path() {
        assert_eq!(hostname_from_url("https://api.kuberns.com/v1"), "api.kuberns.com");
        assert_eq!(hostname_from_url("http://localhost:5000"), "localhost:5000");
        assert_eq!(hostname_from_url("api.local?x=1"), "api.local");
        assert_eq!(hostname_from_url("  "), "");
    }
}

use std::collections::HashMap;

/// Parse URL-encoded form body into a HashMap, keeping repeated keys in order
pub fn parse_urlencoded_body(body: &[u8]) -> HashMap<String, Vec<String>> {
    let mut map: HashMap<String, Vec<String>> = HashMap::new();
    let raw = String::from_utf8_lossy(body);
    for pair in raw.split('&') {
        if pair.is_empty() { continue; }
        let mut parts = pair.splitn(2, '=');
        let key_enc = parts.next().unwrap_or("").replace('+', " ");
        let val_enc = parts.next().unwrap_or("").replace('+', " ");
        let key = urlencoding::decode(&key_enc).map(|s| s.into_owned()).unwrap_or_else(|_| key_enc.clone());
        let val = urlencoding::decode(&val_enc).map(|s| s.into_owned()).unwrap_or_else(|_| val_enc.clone());
        map.entry(key).or_default().push(val);
    }
    map
}

/// Collapse a multi-valued form map to its first value per key
pub fn first_values(map: &HashMap<String, Vec<String>>) -> HashMap<String, String> {
    map.iter()
        .filter_map(|(k, v)| v.first().map(|first| (k.clone(), first.clone())))
        .collect()
}

use rand::RngCore;

/// 128-bit random token, hex encoded. Used for session cookies, submission
/// tokens and deployment tracking ids.
pub fn random_token() -> String {
    let mut b = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut b);
    hex::encode(b)
}

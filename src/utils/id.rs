const SESSION_ID_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const SESSION_ID_LENGTH: usize = 30;

/// Generates a client-side identifier for a relay session.
///
/// The relay scopes order book state to a session named by the client, so
/// each fetch mints a fresh 30-character identifier over `A-Z0-9` with
/// `nanoid`. Collisions between concurrent sessions are effectively
/// impossible at this length.
#[must_use]
pub fn session_id() -> String {
    let alphabet: Vec<char> = SESSION_ID_ALPHABET.chars().collect();
    nanoid::nanoid!(SESSION_ID_LENGTH, &alphabet)
}

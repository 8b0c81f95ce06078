use rand::{distributions::Alphanumeric, thread_rng, Rng};

const TEMP_ID_LENGTH: usize = 9;

pub fn random_alphanumeric(length: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Identifier for a stage that exists only locally. Never contains a hyphen,
/// which keeps it distinguishable from server-issued UUIDs.
pub fn generate_temp_id() -> String {
    random_alphanumeric(TEMP_ID_LENGTH)
}

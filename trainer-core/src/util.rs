use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

/// Random alphanumeric identifier, used for open game ids.
pub fn random_string(count: usize) -> String {
    let rng = thread_rng();
    rng.sample_iter(Alphanumeric)
        .map(char::from)
        .take(count)
        .collect()
}

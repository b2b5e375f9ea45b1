//! World seed resolution.
//!
//! Priority: explicit `--seed` argument, then the `HEXROAM_SEED`
//! environment variable, then a random seed. Whatever wins, the engine
//! only ever sees one integer.

use rand::Rng;

pub const SEED_ENV_VAR: &str = "HEXROAM_SEED";

/// Resolve the seed for a new world.
pub fn resolve(cli_seed: Option<i64>) -> i64 {
    if let Some(seed) = cli_seed {
        tracing::info!(seed, "using seed from command line");
        return seed;
    }

    if let Ok(raw) = std::env::var(SEED_ENV_VAR) {
        match raw.parse::<i64>() {
            Ok(seed) => {
                tracing::info!(seed, "using seed from {SEED_ENV_VAR}");
                return seed;
            }
            Err(_) => {
                tracing::warn!(value = raw.as_str(), "ignoring unparseable {SEED_ENV_VAR}");
            }
        }
    }

    let seed = rand::thread_rng().gen_range(0..=1_000_000);
    tracing::info!(seed, "using random seed");
    seed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_seed_wins() {
        assert_eq!(resolve(Some(77)), 77);
    }

    #[test]
    fn random_seed_is_in_range() {
        // Env-var behavior is not tested here: process environment is
        // shared across the test harness's threads.
        let seed = resolve(None);
        assert!((0..=1_000_000).contains(&seed));
    }
}

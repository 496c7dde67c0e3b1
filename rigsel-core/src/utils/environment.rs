use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// Specifies a logger type which takes a reference to the message.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on a random generator.
    pub random: Arc<dyn Random + Send + Sync>,
    /// A logger which prints information messages.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(random: Arc<dyn Random + Send + Sync>, logger: InfoLogger) -> Self {
        Self { random, logger }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(DefaultRandom::default()), Arc::new(|msg: &str| println!("{msg}")))
    }
}

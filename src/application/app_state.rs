use crate::domain::Engine;

/// AppState owns the engine plus the state the engine itself does not track:
/// the generation counter lives with the UI and is reset exactly once, at
/// construction.
pub struct AppState<E: Engine> {
    pub engine: E,
    pub generation: u64,
}

impl<E: Engine> AppState<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            generation: 0,
        }
    }

    /// Advance exactly one generation and bump the counter.
    /// The whole step runs to completion before the caller regains control.
    pub fn step(mut self) -> Self {
        self.engine.tick();
        self.generation += 1;
        self
    }
}

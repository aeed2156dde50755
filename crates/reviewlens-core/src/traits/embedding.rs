/// Read-only token to vector lookup.
pub trait IEmbeddingLookup: Send + Sync {
    /// Vector for `token`, `None` when out of vocabulary.
    fn lookup(&self, token: &str) -> Option<&[f32]>;

    /// Width `k` of every vector.
    fn dimensions(&self) -> usize;

    fn vocab_size(&self) -> usize;

    /// Element-wise mean of the vectors of in-vocabulary tokens, and the
    /// number of tokens that matched. With no match the mean is the zero
    /// vector of width `dimensions()`.
    fn average(&self, tokens: &[&str]) -> (Vec<f32>, usize) {
        let k = self.dimensions();
        let mut sum = vec![0.0f64; k];
        let mut matched = 0usize;
        for token in tokens {
            if let Some(vector) = self.lookup(token) {
                for (acc, &v) in sum.iter_mut().zip(vector) {
                    *acc += f64::from(v);
                }
                matched += 1;
            }
        }
        if matched == 0 {
            return (vec![0.0; k], 0);
        }
        let n = matched as f64;
        (sum.into_iter().map(|s| (s / n) as f32).collect(), matched)
    }
}

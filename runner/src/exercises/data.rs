use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::workflow::config::ExerciseConfig;

/// Deterministic operand generation for the exercises.
///
/// Each operand gets its own salt so problems that need several independent
/// buffers still replay exactly for a fixed config seed.
fn rng_for(config: &ExerciseConfig, salt: u64) -> StdRng {
    StdRng::seed_from_u64(config.seed.wrapping_add(salt))
}

fn fill(rng: &mut StdRng, len: usize) -> Vec<f32> {
    (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

/// Vector of `width` values.
pub fn build_vector(config: &ExerciseConfig, salt: u64) -> Vec<f32> {
    let mut rng = rng_for(config, salt);
    fill(&mut rng, config.width)
}

/// Flat row-major `width x height` matrix buffer.
pub fn build_flat_matrix(config: &ExerciseConfig, salt: u64) -> Vec<f32> {
    let mut rng = rng_for(config, salt);
    fill(&mut rng, config.width * config.height)
}

/// Flat row-major square buffer of order `height`.
pub fn build_square_flat(config: &ExerciseConfig, salt: u64) -> Vec<f32> {
    let mut rng = rng_for(config, salt);
    fill(&mut rng, config.height * config.height)
}

/// `height` rows of `width` values.
pub fn build_rows(config: &ExerciseConfig, salt: u64) -> Vec<Vec<f32>> {
    let mut rng = rng_for(config, salt);
    (0..config.height).map(|_| fill(&mut rng, config.width)).collect()
}

/// Square nested matrix of order `height`.
pub fn build_square_rows(config: &ExerciseConfig, salt: u64) -> Vec<Vec<f32>> {
    let mut rng = rng_for(config, salt);
    (0..config.height)
        .map(|_| fill(&mut rng, config.height))
        .collect()
}

/// Root-mean-square summary used as each problem's scalar result.
pub fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f32 = samples.iter().map(|&v| v * v).sum();
    (sum_sq / samples.len() as f32).sqrt()
}

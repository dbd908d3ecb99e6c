use densecore::math::{DenseMatrix, ElementwiseHelper, SaxpyHelper};
use log::info;

use crate::catalog::{GroupManager, Problem, ProblemGroup};
use crate::workflow::config::ExerciseConfig;

pub mod data;

/// Builds the full problem catalog backed by the shared exercise config.
pub fn build_catalog(config: &ExerciseConfig) -> GroupManager {
    let mut manager = GroupManager::new("Dense arithmetic problems");
    manager.register(elementwise_group(config));
    manager.register(saxpy_group(config));
    manager
}

fn elementwise_group(config: &ExerciseConfig) -> ProblemGroup {
    let mut group = ProblemGroup::new(1, "Sequential element-wise add");

    let cfg = config.clone();
    group.register(Problem::new(
        "vector add over checked containers",
        move || {
            let a = data::build_vector(&cfg, 1);
            let b = data::build_vector(&cfg, 2);
            let mut out = vec![0.0f32; a.len()];
            ElementwiseHelper::add(&a, &b, &mut out)?;
            info!("checked add over {} elements", out.len());
            Ok(data::rms(&out))
        },
    ));

    let cfg = config.clone();
    group.register(Problem::new("matrix add over raw buffers", move || {
        let a = data::build_flat_matrix(&cfg, 3);
        let b = data::build_flat_matrix(&cfg, 4);
        let mut out = vec![0.0f32; a.len()];
        ElementwiseHelper::add_raw(&a, &b, &mut out, cfg.width, cfg.height);
        info!("raw add over {}x{} buffer", cfg.width, cfg.height);
        Ok(data::rms(&out))
    }));

    let cfg = config.clone();
    group.register(Problem::new("add verification oracle", move || {
        let a = data::build_flat_matrix(&cfg, 5);
        let b = data::build_flat_matrix(&cfg, 6);
        let mut sum = vec![0.0f32; a.len()];
        ElementwiseHelper::add_raw(&a, &b, &mut sum, cfg.width, cfg.height);
        let verified = ElementwiseHelper::verify_add(&a, &b, &sum, cfg.width, cfg.height);
        info!("verification oracle passed: {}", verified);
        Ok(if verified { 1.0 } else { 0.0 })
    }));

    group
}

fn saxpy_group(config: &ExerciseConfig) -> ProblemGroup {
    let mut group = ProblemGroup::new(2, "SAXPY scale-and-add");

    let cfg = config.clone();
    group.register(Problem::new(
        "vector saxpy over checked containers",
        move || {
            let x = data::build_vector(&cfg, 7);
            let y = data::build_vector(&cfg, 8);
            let mut out = vec![0.0f32; x.len()];
            SaxpyHelper::saxpy(cfg.scalar, &x, &y, &mut out)?;
            info!("checked saxpy with scalar {}", cfg.scalar);
            Ok(data::rms(&out))
        },
    ));

    let cfg = config.clone();
    group.register(Problem::new("vector saxpy over raw buffers", move || {
        let x = data::build_vector(&cfg, 9);
        let y = data::build_vector(&cfg, 10);
        let mut out = vec![0.0f32; x.len()];
        SaxpyHelper::saxpy_raw(cfg.scalar, &x, &y, &mut out, cfg.width);
        Ok(data::rms(&out))
    }));

    let cfg = config.clone();
    group.register(Problem::new("matrix saxpy over nested rows", move || {
        let a = data::build_square_rows(&cfg, 11);
        let x = data::build_rows(&cfg, 12);
        let y = data::build_rows(&cfg, 13);
        // Multiply-accumulate needs a zeroed output for a plain A*X + Y.
        let mut out = vec![vec![0.0f32; cfg.width]; cfg.height];
        SaxpyHelper::saxpy_matrix(&a, &x, &y, &mut out)?;
        let flat: Vec<f32> = out.into_iter().flatten().collect();
        Ok(data::rms(&flat))
    }));

    let cfg = config.clone();
    group.register(Problem::new("matrix saxpy over flat buffers", move || {
        let a = data::build_square_flat(&cfg, 11);
        let x = data::build_flat_matrix(&cfg, 12);
        let y = data::build_flat_matrix(&cfg, 13);
        let mut out = DenseMatrix::zeros(cfg.width, cfg.height);
        SaxpyHelper::saxpy_matrix_raw(&a, &x, &y, out.as_mut_slice(), cfg.height, cfg.width);
        Ok(data::rms(out.as_slice()))
    }));

    group
}

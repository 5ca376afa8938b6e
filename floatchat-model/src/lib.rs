//! Supervised temperature predictor over {latitude, longitude, pressure}.
//!
//! This is the optional external-predictor capability: the chat pipeline
//! never calls it while answering queries, but the CLI can fit it against
//! the loaded dataset and snapshot it to disk. The fit is an ordinary
//! least-squares regression solved by normal equations, with a
//! deterministic 80/20 train/evaluation split so reported scores are
//! reproducible across runs.

use floatchat_argo::Dataset;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Training requires at least this many records.
pub const MIN_TRAIN_RECORDS: usize = 100;

/// Fixed shuffle seed for the reproducible evaluation split.
const SPLIT_SEED: u64 = 42;

/// Held-out fraction of the dataset used for the goodness-of-fit score.
const TEST_FRACTION: f64 = 0.2;

/// A fitted linear temperature model.
///
/// `temperature ≈ intercept + w·[latitude, longitude, pressure]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TempModel {
    pub weights: [f64; 3],
    pub intercept: f64,
}

/// Goodness-of-fit report for one training run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainReport {
    /// Coefficient of determination on the held-out split, three decimals.
    pub r2_score: f64,
    /// Number of training rows (the held-out rows excluded).
    pub samples: usize,
}

impl TempModel {
    /// Predict temperature for a position and depth, rounded to 2 dp.
    pub fn predict(&self, latitude: f64, longitude: f64, pressure: f64) -> f64 {
        let raw = self.intercept
            + self.weights[0] * latitude
            + self.weights[1] * longitude
            + self.weights[2] * pressure;
        (raw * 100.0).round() / 100.0
    }

    /// Snapshot the model to a JSON file.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        log::info!("model: snapshot written to {}", path.display());
        Ok(())
    }

    /// Load a model snapshot written by [`TempModel::save`].
    pub fn load(path: &Path) -> anyhow::Result<TempModel> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}

/// Fit a temperature model against the full dataset.
///
/// Returns `None` (never an error) when there are fewer than
/// [`MIN_TRAIN_RECORDS`] records or the normal-equation system is
/// singular. The shuffle seed is fixed, so the split and the reported
/// score are identical across runs on the same data.
pub fn train(dataset: &Dataset) -> Option<(TempModel, TrainReport)> {
    let n = dataset.len();
    if n < MIN_TRAIN_RECORDS {
        log::warn!("model: {} records is below the {} required for training", n, MIN_TRAIN_RECORDS);
        return None;
    }

    let mut order: Vec<usize> = (0..n).collect();
    shuffle(&mut order, SPLIT_SEED);
    let n_test = ((n as f64) * TEST_FRACTION).ceil() as usize;
    let (test_idx, train_idx) = order.split_at(n_test);

    let records = dataset.records();
    let rows = |idx: &[usize]| -> (Vec<[f64; 3]>, Vec<f64>) {
        let x = idx
            .iter()
            .map(|&i| [records[i].latitude, records[i].longitude, records[i].pressure])
            .collect();
        let y = idx.iter().map(|&i| records[i].temperature).collect();
        (x, y)
    };
    let (x_train, y_train) = rows(train_idx);
    let (x_test, y_test) = rows(test_idx);

    let model = fit_ols(&x_train, &y_train)?;
    let r2 = r_squared(&model, &x_test, &y_test);

    log::info!(
        "model: trained on {} rows, r2 = {:.3} on {} held-out rows",
        x_train.len(),
        r2,
        x_test.len()
    );
    Some((
        model,
        TrainReport {
            r2_score: (r2 * 1000.0).round() / 1000.0,
            samples: x_train.len(),
        },
    ))
}

/// Fisher-Yates shuffle driven by a seeded xorshift generator.
fn shuffle(indices: &mut [usize], seed: u64) {
    let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    for i in (1..indices.len()).rev() {
        let j = (next() % (i as u64 + 1)) as usize;
        indices.swap(i, j);
    }
}

/// Ordinary least squares via the 4×4 normal-equation system
/// (three features plus intercept), solved by Gaussian elimination with
/// partial pivoting. Returns `None` for a singular system.
fn fit_ols(x: &[[f64; 3]], y: &[f64]) -> Option<TempModel> {
    const DIM: usize = 4;
    let mut xtx = [[0.0f64; DIM]; DIM];
    let mut xty = [0.0f64; DIM];

    for (features, &target) in x.iter().zip(y) {
        let row = [1.0, features[0], features[1], features[2]];
        for i in 0..DIM {
            for j in 0..DIM {
                xtx[i][j] += row[i] * row[j];
            }
            xty[i] += row[i] * target;
        }
    }

    let beta = solve(&mut xtx, &mut xty)?;
    Some(TempModel {
        intercept: beta[0],
        weights: [beta[1], beta[2], beta[3]],
    })
}

fn solve(a: &mut [[f64; 4]; 4], b: &mut [f64; 4]) -> Option<[f64; 4]> {
    const DIM: usize = 4;
    for col in 0..DIM {
        let pivot = (col..DIM).max_by(|&i, &j| {
            a[i][col]
                .abs()
                .partial_cmp(&a[j][col].abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;
        if a[pivot][col].abs() < 1e-12 {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in (col + 1)..DIM {
            let factor = a[row][col] / a[col][col];
            for k in col..DIM {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = [0.0f64; DIM];
    for row in (0..DIM).rev() {
        let mut sum = b[row];
        for k in (row + 1)..DIM {
            sum -= a[row][k] * x[k];
        }
        x[row] = sum / a[row][row];
    }
    Some(x)
}

fn r_squared(model: &TempModel, x: &[[f64; 3]], y: &[f64]) -> f64 {
    if y.is_empty() {
        return 0.0;
    }
    let mean = y.iter().sum::<f64>() / y.len() as f64;
    let ss_tot: f64 = y.iter().map(|v| (v - mean) * (v - mean)).sum();
    if ss_tot == 0.0 {
        return 0.0;
    }
    let ss_res: f64 = x
        .iter()
        .zip(y)
        .map(|(f, &target)| {
            let pred = model.intercept
                + model.weights[0] * f[0]
                + model.weights[1] * f[1]
                + model.weights[2] * f[2];
            (target - pred) * (target - pred)
        })
        .sum();
    1.0 - ss_res / ss_tot
}

//! SVM cross-validation scoring
//!
//! Pure delegation to the `smartcore` numerical library: the classifier is
//! fitted inside a k-fold cross-validation loop and the mean held-out
//! accuracy is returned. No training algorithm lives here; this module only
//! loads the dataset, standardizes features, and forwards to the library.

use crate::error::{BenchError, Result};
use crate::metrics::mean;
use smartcore::linalg::naive::dense_matrix::DenseMatrix;
use smartcore::metrics::accuracy;
use smartcore::model_selection::{cross_validate, KFold};
use smartcore::svm::svc::{SVCParameters, SVC};
use smartcore::svm::Kernels;
use std::collections::BTreeSet;
use std::path::Path;

/// Kernel functions the underlying classifier accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvmKernel {
    Linear,
    Rbf,
    Poly,
    Sigmoid,
}

/// A labeled dataset: one row per sample, class label in column 0 of the
/// source CSV, features in the remaining columns.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub features: Vec<Vec<f64>>,
    pub labels: Vec<f64>,
}

impl Dataset {
    /// Load a headered CSV file. Every field must parse as a float; rows
    /// must all have the same width.
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(|e| BenchError::Csv {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut features = Vec::new();
        let mut labels = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|e| BenchError::Csv {
                path: path.to_path_buf(),
                source: e,
            })?;
            let mut values = Vec::with_capacity(record.len());
            for field in record.iter() {
                let value: f64 = field.trim().parse().map_err(|_| {
                    BenchError::Validation(format!(
                        "non-numeric field '{}' in row {} of '{}'",
                        field,
                        row + 1,
                        path.display()
                    ))
                })?;
                values.push(value);
            }
            if values.len() < 2 {
                return Err(BenchError::Validation(format!(
                    "row {} has no feature columns",
                    row + 1
                )));
            }
            labels.push(values[0]);
            features.push(values[1..].to_vec());
        }

        if features.is_empty() {
            return Err(BenchError::Validation(format!(
                "dataset '{}' is empty",
                path.display()
            )));
        }
        let width = features[0].len();
        if features.iter().any(|row| row.len() != width) {
            return Err(BenchError::Validation("inconsistent row widths".into()));
        }
        Ok(Self { features, labels })
    }

    pub fn n_samples(&self) -> usize {
        self.features.len()
    }
}

/// Center each feature column to zero mean and scale to unit variance
/// (population standard deviation). Zero-variance columns are centered only.
pub fn standardize(features: &mut [Vec<f64>]) {
    if features.is_empty() {
        return;
    }
    let n = features.len() as f64;
    let cols = features[0].len();
    for col in 0..cols {
        let mean = features.iter().map(|row| row[col]).sum::<f64>() / n;
        let variance = features
            .iter()
            .map(|row| (row[col] - mean).powi(2))
            .sum::<f64>()
            / n;
        let std = variance.sqrt();
        for row in features.iter_mut() {
            row[col] -= mean;
            if std > 0.0 {
                row[col] /= std;
            }
        }
    }
}

fn validate_inputs(dataset: &Dataset, folds: usize, c: f64, gamma: f64) -> Result<()> {
    if folds < 2 {
        return Err(BenchError::Validation(
            "fold count must be at least 2".into(),
        ));
    }
    if dataset.n_samples() < folds {
        return Err(BenchError::Validation(format!(
            "dataset has {} samples, fewer than {} folds",
            dataset.n_samples(),
            folds
        )));
    }
    if !c.is_finite() || c <= 0.0 {
        return Err(BenchError::Validation(
            "regularization strength C must be positive".into(),
        ));
    }
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(BenchError::Validation(
            "kernel coefficient gamma must be positive".into(),
        ));
    }
    let classes: BTreeSet<u64> = dataset.labels.iter().map(|l| l.to_bits()).collect();
    if classes.len() != 2 {
        return Err(BenchError::Validation(format!(
            "classifier requires exactly 2 classes, found {}",
            classes.len()
        )));
    }
    Ok(())
}

/// Fit the support-vector classifier under k-fold cross-validation and
/// return the average held-out accuracy across folds.
pub fn score_svm(
    dataset: &Dataset,
    folds: usize,
    kernel: SvmKernel,
    c: f64,
    gamma: f64,
) -> Result<f64> {
    validate_inputs(dataset, folds, c, gamma)?;

    let mut features = dataset.features.clone();
    standardize(&mut features);
    let x = DenseMatrix::from_2d_vec(&features);
    let y = dataset.labels.clone();

    let result = match kernel {
        SvmKernel::Linear => cross_validate(
            SVC::fit,
            &x,
            &y,
            SVCParameters::default()
                .with_c(c)
                .with_kernel(Kernels::linear()),
            KFold::default().with_n_splits(folds),
            &accuracy,
        ),
        SvmKernel::Rbf => cross_validate(
            SVC::fit,
            &x,
            &y,
            SVCParameters::default()
                .with_c(c)
                .with_kernel(Kernels::rbf(gamma)),
            KFold::default().with_n_splits(folds),
            &accuracy,
        ),
        SvmKernel::Poly => cross_validate(
            SVC::fit,
            &x,
            &y,
            SVCParameters::default()
                .with_c(c)
                .with_kernel(Kernels::polynomial(3.0, gamma, 0.0)),
            KFold::default().with_n_splits(folds),
            &accuracy,
        ),
        SvmKernel::Sigmoid => cross_validate(
            SVC::fit,
            &x,
            &y,
            SVCParameters::default()
                .with_c(c)
                .with_kernel(Kernels::sigmoid(gamma, 0.0)),
            KFold::default().with_n_splits(folds),
            &accuracy,
        ),
    }
    .map_err(|e| BenchError::Svm(e.to_string()))?;

    Ok(mean(&result.test_score))
}

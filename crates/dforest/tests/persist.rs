//! Persistence round-trip tests: in-memory and reloaded models must agree.

use std::fs;

use ndarray::array;

use dforest::data::Dataset;
use dforest::model::{ForestConfig, ForestModel, TreeConfig, TreeModel};
use dforest::persist::{self, ReadError};
use dforest::testing::synthetic_quadrants;
use dforest::{Error, PredictError};

fn trained_model(seed: u64) -> TreeModel {
    let (x, y) = synthetic_quadrants(400, 3, seed);
    let ds = Dataset::new(x.view(), y.view()).unwrap();
    let config = TreeConfig::builder()
        .max_depth(6)
        .n_candidates(30)
        .seed(seed)
        .build()
        .unwrap();
    TreeModel::train(&ds, &config)
}

#[test]
fn tree_save_load_predicts_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tree.txt");
    let model = trained_model(1);
    model.save(&path).unwrap();

    let loaded = TreeModel::load(&path).unwrap();
    assert_eq!(loaded.n_features(), model.n_features());
    assert_eq!(loaded.n_classes(), model.n_classes());
    assert_eq!(loaded.tree().max_depth(), model.tree().max_depth());

    let (x_test, _) = synthetic_quadrants(300, 3, 77);
    let before = model.predict(x_test.view()).unwrap();
    let after = loaded.predict(x_test.view()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn reload_preserves_insertion_order_and_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tree.txt");
    let model = trained_model(2);
    model.save(&path).unwrap();

    let loaded = TreeModel::load(&path).unwrap();
    let keys = |m: &TreeModel| m.tree().nodes().iter().map(|(k, _)| k).collect::<Vec<_>>();
    assert_eq!(keys(&model), keys(&loaded));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        persist::tree_to_string(loaded.tree())
    );
}

#[test]
fn entry_points_train_and_infer() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.txt");
    let (x, y) = synthetic_quadrants(300, 2, 4);

    let model = dforest::train(x.view(), y.view(), 4, 50, &path).unwrap();
    assert!(path.exists());

    let from_file = dforest::infer(x.view(), &path).unwrap();
    assert_eq!(from_file, model.predict(x.view()).unwrap());
    assert_eq!(from_file.labels.len(), 300);
    assert_eq!(from_file.probabilities.ncols(), 3);
}

#[test]
fn entry_points_report_typed_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.txt");
    let x = array![[0.0, 1.0, 2.0]];

    let err = dforest::train(x.view(), array![1, -1, 2].view(), 3, 5, &path).unwrap_err();
    assert!(matches!(err, Error::Dataset(_)));

    let err = dforest::train(x.view(), array![1, 1, 2].view(), 0, 5, &path).unwrap_err();
    assert!(matches!(err, Error::Config(_)));

    let err = dforest::train(x.view(), array![1, 1, 2].view(), 3, 0, &path).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(!path.exists());

    let err = dforest::infer(x.view(), &path).unwrap_err();
    assert!(matches!(err, Error::Read(ReadError::Io(_))));

    dforest::train(x.view(), array![1, 1, 2].view(), 3, 5, &path).unwrap();
    let wide = array![[0.0], [1.0]];
    let err = dforest::infer(wide.view(), &path).unwrap_err();
    assert!(matches!(
        err,
        Error::Predict(PredictError::FeatureMismatch { expected: 1, got: 2 })
    ));
}

#[test]
fn col_major_buffers_match_views() {
    let (x, y) = synthetic_quadrants(50, 3, 6);
    // A standard-layout [n_features, n_samples] array is the column-major n x d buffer.
    let flat: Vec<f64> = x.iter().copied().collect();
    let labels: Vec<i64> = y.to_vec();

    let from_buffer = Dataset::from_col_major(&flat, 50, 3, &labels).unwrap();
    let from_view = Dataset::new(x.view(), y.view()).unwrap();
    for i in 0..50 {
        for j in 0..3 {
            assert_eq!(from_buffer.feature(i, j), from_view.feature(i, j));
        }
    }
}

#[test]
fn forest_save_load_predicts_identically() {
    let dir = tempfile::tempdir().unwrap();
    let (x, y) = synthetic_quadrants(300, 3, 9);
    let ds = Dataset::new(x.view(), y.view()).unwrap();
    let config = ForestConfig::builder().n_trees(4).build().unwrap();
    let forest = ForestModel::train(&ds, &config);

    forest.save(dir.path().join("forest")).unwrap();
    let loaded = ForestModel::load(dir.path().join("forest")).unwrap();
    assert_eq!(loaded.n_trees(), 4);

    let (x_test, _) = synthetic_quadrants(100, 3, 10);
    assert_eq!(
        forest.predict(x_test.view()).unwrap(),
        loaded.predict(x_test.view()).unwrap()
    );
}

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

// ---------------------------------------------------------------------------
// Regressor capability
// ---------------------------------------------------------------------------

/// A pre-fit multi-output regression model.
pub trait Regressor {
    /// Width of the input row.
    fn n_features(&self) -> usize;

    /// Width of the output row.
    fn n_outputs(&self) -> usize;

    /// Predict one row. `row.len()` must equal [`Regressor::n_features`].
    fn predict_row(&self, row: &[f64]) -> Result<Vec<f64>, ModelError>;
}

fn check_width(expected: usize, row: &[f64]) -> Result<(), ModelError> {
    if row.len() != expected {
        return Err(ModelError::FeatureWidth {
            expected,
            got: row.len(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Serialized model artifact
// ---------------------------------------------------------------------------

/// The on-disk model, tagged by `"kind"`:
///
/// ```json
/// { "kind": "linear", "coefficients": [[...], ...], "intercepts": [...] }
/// { "kind": "forest", "n_features": 3, "n_outputs": 6, "trees": [{ "nodes": [...] }] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    Linear(LinearModel),
    Forest(ForestModel),
}

impl ModelArtifact {
    /// Structural checks run once after deserialisation.
    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            ModelArtifact::Linear(m) => m.validate(),
            ModelArtifact::Forest(m) => m.validate(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ModelArtifact::Linear(_) => "linear",
            ModelArtifact::Forest(_) => "forest",
        }
    }
}

impl Regressor for ModelArtifact {
    fn n_features(&self) -> usize {
        match self {
            ModelArtifact::Linear(m) => m.n_features(),
            ModelArtifact::Forest(m) => m.n_features(),
        }
    }

    fn n_outputs(&self) -> usize {
        match self {
            ModelArtifact::Linear(m) => m.n_outputs(),
            ModelArtifact::Forest(m) => m.n_outputs(),
        }
    }

    fn predict_row(&self, row: &[f64]) -> Result<Vec<f64>, ModelError> {
        match self {
            ModelArtifact::Linear(m) => m.predict_row(row),
            ModelArtifact::Forest(m) => m.predict_row(row),
        }
    }
}

// ---------------------------------------------------------------------------
// Linear model
// ---------------------------------------------------------------------------

/// One linear equation per output: `y[k] = intercepts[k] + coefficients[k] · x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// Shape `n_outputs × n_features`.
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

impl LinearModel {
    fn validate(&self) -> Result<(), ModelError> {
        if self.coefficients.is_empty() {
            return Err(ModelError::Empty("coefficients"));
        }
        if self.intercepts.len() != self.coefficients.len() {
            return Err(ModelError::OutputWidth {
                expected: self.coefficients.len(),
                got: self.intercepts.len(),
            });
        }
        let width = self.n_features();
        for row in &self.coefficients {
            check_width(width, row)?;
        }
        Ok(())
    }
}

impl Regressor for LinearModel {
    fn n_features(&self) -> usize {
        self.coefficients.first().map_or(0, Vec::len)
    }

    fn n_outputs(&self) -> usize {
        self.intercepts.len()
    }

    fn predict_row(&self, row: &[f64]) -> Result<Vec<f64>, ModelError> {
        check_width(self.n_features(), row)?;
        Ok(self
            .coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(coef, b)| b + coef.iter().zip(row).map(|(w, x)| w * x).sum::<f64>())
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Random forest
// ---------------------------------------------------------------------------

/// A node of a flattened regression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Rows with `x[feature] <= threshold` go `left`, others `right`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf { value: Vec<f64> },
}

/// A regression tree stored as a node array, root at index 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<TreeNode>,
}

impl Tree {
    fn leaf_for(&self, row: &[f64]) -> &[f64] {
        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                TreeNode::Leaf { value } => return value,
            }
        }
    }
}

/// Averaging ensemble of multi-output regression trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestModel {
    pub n_features: usize,
    pub n_outputs: usize,
    pub trees: Vec<Tree>,
}

impl ForestModel {
    /// Children must point forward, so traversal always reaches a leaf.
    fn validate(&self) -> Result<(), ModelError> {
        if self.trees.is_empty() {
            return Err(ModelError::Empty("trees"));
        }
        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(ModelError::Empty("tree nodes"));
            }
            let n = tree.nodes.len();
            for (i, node) in tree.nodes.iter().enumerate() {
                let invalid = |reason: String| ModelError::InvalidTree {
                    tree: t,
                    node: i,
                    reason,
                };
                match node {
                    TreeNode::Split {
                        feature,
                        left,
                        right,
                        ..
                    } => {
                        if *feature >= self.n_features {
                            return Err(invalid(format!(
                                "feature {feature} out of range ({} features)",
                                self.n_features
                            )));
                        }
                        for child in [*left, *right] {
                            if child <= i || child >= n {
                                return Err(invalid(format!("child index {child} is invalid")));
                            }
                        }
                    }
                    TreeNode::Leaf { value } => {
                        if value.len() != self.n_outputs {
                            return Err(invalid(format!(
                                "leaf has {} outputs, expected {}",
                                value.len(),
                                self.n_outputs
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

impl Regressor for ForestModel {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn n_outputs(&self) -> usize {
        self.n_outputs
    }

    fn predict_row(&self, row: &[f64]) -> Result<Vec<f64>, ModelError> {
        check_width(self.n_features, row)?;
        let mut sum = vec![0.0; self.n_outputs];
        for tree in &self.trees {
            for (acc, v) in sum.iter_mut().zip(tree.leaf_for(row)) {
                *acc += v;
            }
        }
        let n = self.trees.len() as f64;
        Ok(sum.into_iter().map(|s| s / n).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stump(threshold: f64, low: f64, high: f64) -> Tree {
        Tree {
            nodes: vec![
                TreeNode::Split {
                    feature: 1,
                    threshold,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf {
                    value: vec![low, low * 2.0],
                },
                TreeNode::Leaf {
                    value: vec![high, high * 2.0],
                },
            ],
        }
    }

    #[test]
    fn linear_predicts_each_output() {
        let m = LinearModel {
            coefficients: vec![vec![0.5, 1.0], vec![0.0, -2.0]],
            intercepts: vec![1.0, 10.0],
        };
        m.validate().unwrap();
        assert_eq!(m.predict_row(&[2.0, 3.0]).unwrap(), vec![5.0, 4.0]);
    }

    #[test]
    fn linear_rejects_wrong_width() {
        let m = LinearModel {
            coefficients: vec![vec![1.0, 1.0]],
            intercepts: vec![0.0],
        };
        let err = m.predict_row(&[1.0]).unwrap_err();
        assert!(matches!(err, ModelError::FeatureWidth { expected: 2, got: 1 }));
    }

    #[test]
    fn forest_averages_tree_leaves() {
        let forest = ForestModel {
            n_features: 2,
            n_outputs: 2,
            trees: vec![stump(0.5, 1.0, 3.0), stump(1.5, 5.0, 7.0)],
        };
        forest.validate().unwrap();
        // x[1] = 1.0: first tree goes right (3), second goes left (5).
        assert_eq!(forest.predict_row(&[0.0, 1.0]).unwrap(), vec![4.0, 8.0]);
        // threshold is inclusive on the left
        assert_eq!(forest.predict_row(&[0.0, 0.5]).unwrap(), vec![3.0, 6.0]);
    }

    #[test]
    fn forest_rejects_backward_children() {
        let mut tree = stump(0.5, 1.0, 2.0);
        tree.nodes[0] = TreeNode::Split {
            feature: 0,
            threshold: 0.0,
            left: 0,
            right: 2,
        };
        let forest = ForestModel {
            n_features: 2,
            n_outputs: 2,
            trees: vec![tree],
        };
        assert!(matches!(
            forest.validate(),
            Err(ModelError::InvalidTree { tree: 0, node: 0, .. })
        ));
    }

    #[test]
    fn forest_rejects_short_leaf() {
        let mut tree = stump(0.5, 1.0, 2.0);
        tree.nodes[2] = TreeNode::Leaf { value: vec![1.0] };
        let forest = ForestModel {
            n_features: 2,
            n_outputs: 2,
            trees: vec![tree],
        };
        assert!(forest.validate().is_err());
    }

    #[test]
    fn artifact_json_is_tagged_by_kind() {
        let json = r#"{
            "kind": "forest",
            "n_features": 2,
            "n_outputs": 2,
            "trees": [{ "nodes": [
                { "feature": 1, "threshold": 0.5, "left": 1, "right": 2 },
                { "value": [1.0, 2.0] },
                { "value": [3.0, 6.0] }
            ]}]
        }"#;
        let artifact: ModelArtifact = serde_json::from_str(json).unwrap();
        assert_eq!(artifact.kind(), "forest");
        artifact.validate().unwrap();
        assert_eq!(artifact.n_features(), 2);
        assert_eq!(artifact.predict_row(&[0.0, 1.0]).unwrap(), vec![3.0, 6.0]);
    }
}

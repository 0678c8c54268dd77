//! Random-forest predictor
//!
//! Trees use the usual binary-split layout: each split sends a row left when
//! `x[feature] <= threshold`, otherwise right. Leaves carry per-class weights
//! `[negative, positive]`; a tree's probability is the positive share of its
//! leaf, and the forest averages over trees.

use crate::predictor::Predictor;
use biosync_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// A node in a decision tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Internal split on one feature
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },

    /// Terminal node with per-class weights
    Leaf { value: Vec<f64> },
}

/// A single validated decision tree
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    nodes: Vec<Node>,
}

impl DecisionTree {
    /// Build a tree, checking that it is well formed for `n_features` inputs.
    ///
    /// Children must point strictly forward in `nodes`, which guarantees that
    /// every traversal terminates.
    pub fn new(nodes: Vec<Node>, n_features: usize) -> Result<Self> {
        let tree = Self { nodes };
        tree.validate(n_features)?;
        Ok(tree)
    }

    /// Nodes in traversal order, root first
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn validate(&self, n_features: usize) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(Error::artifact("tree has no nodes"));
        }

        for (idx, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= n_features {
                        return Err(Error::artifact(format!(
                            "node {} splits on feature {} but the model has {} features",
                            idx, feature, n_features
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(Error::artifact(format!(
                            "node {} has a non-finite threshold",
                            idx
                        )));
                    }
                    for child in [*left, *right] {
                        if child <= idx || child >= self.nodes.len() {
                            return Err(Error::artifact(format!(
                                "node {} has invalid child index {}",
                                idx, child
                            )));
                        }
                    }
                }
                Node::Leaf { value } => {
                    let total: f64 = value.iter().sum();
                    let valid = value.len() == 2
                        && value.iter().all(|w| w.is_finite() && *w >= 0.0)
                        && total.is_finite()
                        && total > 0.0;
                    if !valid {
                        return Err(Error::artifact(format!(
                            "leaf {} must carry two non-negative class weights with a finite positive sum",
                            idx
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Positive-class probability of the leaf this row lands in
    pub fn predict_positive(&self, features: &[f64]) -> Result<f64> {
        let mut idx = 0;

        loop {
            match self.nodes.get(idx) {
                Some(Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let x = features.get(*feature).copied().ok_or_else(|| {
                        Error::internal(format!("feature index {} out of range", feature))
                    })?;
                    let next = if x <= *threshold { *left } else { *right };
                    if next <= idx {
                        return Err(Error::internal(format!(
                            "tree traversal did not advance at node {}",
                            idx
                        )));
                    }
                    idx = next;
                }
                Some(Node::Leaf { value }) => {
                    let total: f64 = value.iter().sum();
                    return Ok(value[1] / total);
                }
                None => {
                    return Err(Error::internal(format!("node index {} out of range", idx)));
                }
            }
        }
    }
}

/// Ensemble of decision trees with averaged leaf probabilities
#[derive(Debug, Clone, PartialEq)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
    n_features: usize,
}

impl RandomForest {
    /// Build a forest over `n_features` inputs
    pub fn new(trees: Vec<DecisionTree>, n_features: usize) -> Result<Self> {
        if trees.is_empty() {
            return Err(Error::artifact("forest has no trees"));
        }
        for tree in &trees {
            tree.validate(n_features)?;
        }

        Ok(Self { trees, n_features })
    }

    /// Number of trees in the ensemble
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

impl Predictor for RandomForest {
    fn probability_of_positive(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.n_features {
            return Err(Error::internal(format!(
                "expected {} features, got {}",
                self.n_features,
                features.len()
            )));
        }

        let mut total = 0.0;
        for tree in &self.trees {
            total += tree.predict_positive(features)?;
        }

        Ok(total / self.trees.len() as f64)
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn kind(&self) -> &'static str {
        "random_forest"
    }
}

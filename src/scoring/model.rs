//! Model-backed scorer
//!
//! Loads a pretrained linear sentiment head (vocabulary, weights, bias)
//! from the model directory and scores lemma-normalized text.

use crate::error::{AppError, Result};
use crate::nlp::{NormalizeMode, TextNormalizer};
use crate::scoring::{KeywordScorer, Scorer};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// On-disk model artifact
///
/// `vocabulary` maps normalized tokens to indices into `weights`.
#[derive(Debug, Deserialize)]
pub struct ModelArtifact {
    pub vocabulary: HashMap<String, usize>,
    pub weights: Vec<f64>,
    pub bias: f64,
}

/// Scorer backed by a loaded model artifact
pub struct ModelScorer {
    artifact: ModelArtifact,
    normalizer: TextNormalizer,
    fallback: KeywordScorer,
}

impl ModelScorer {
    /// Load the artifact from `<dir>/model.json`
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join("model.json");
        let raw = std::fs::read_to_string(&path)
            .map_err(|e| AppError::Model(format!("cannot read {}: {e}", path.display())))?;
        let artifact: ModelArtifact = serde_json::from_str(&raw)
            .map_err(|e| AppError::Model(format!("malformed artifact {}: {e}", path.display())))?;
        Self::from_artifact(artifact)
    }

    /// Build a scorer from an already-parsed artifact
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        for (token, &index) in &artifact.vocabulary {
            if index >= artifact.weights.len() {
                return Err(AppError::Model(format!(
                    "vocabulary entry '{token}' points past the weight vector ({index} >= {})",
                    artifact.weights.len()
                )));
            }
        }

        Ok(Self {
            artifact,
            normalizer: TextNormalizer::new(),
            fallback: KeywordScorer::new(),
        })
    }

    fn infer(&self, text: &str) -> f64 {
        let normalized = self.normalizer.normalize(text, NormalizeMode::Lemma);

        let mut logit = self.artifact.bias;
        for token in normalized.split_whitespace() {
            if let Some(&index) = self.artifact.vocabulary.get(token) {
                logit += self.artifact.weights[index];
            }
        }

        sigmoid(logit)
    }
}

impl Scorer for ModelScorer {
    fn score(&self, text: &str) -> f64 {
        let probability = self.infer(text);
        if probability.is_finite() {
            probability.clamp(0.0, 1.0)
        } else {
            // corrupt weights are non-fatal to the caller
            self.fallback.score(text)
        }
    }

    fn backend(&self) -> &'static str {
        "model"
    }
}

fn sigmoid(logit: f64) -> f64 {
    1.0 / (1.0 + (-logit).exp())
}

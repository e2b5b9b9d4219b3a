//! Tests for embedding value objects

use cine_domain::value_objects::{Embedding, InferenceOutcome};

#[test]
fn test_embedding_new_derives_dimensions() {
    let embedding = Embedding::new(vec![0.5; 384], "msmarco-minilm");
    assert_eq!(embedding.dimensions, 384);
    assert_eq!(embedding.vector.len(), 384);
    assert_eq!(embedding.model, "msmarco-minilm");
}

#[test]
fn test_inference_outcome_empty() {
    let outcome = InferenceOutcome::Empty;
    assert!(outcome.is_empty());
    assert!(outcome.embedding().is_none());
}

#[test]
fn test_inference_outcome_embedded() {
    let embedding = Embedding::new(vec![0.1, 0.2], "model");
    let outcome = InferenceOutcome::Embedded(embedding.clone());
    assert!(!outcome.is_empty());
    assert_eq!(outcome.embedding(), Some(&embedding));
}

#[test]
fn test_inference_outcome_from_option() {
    assert_eq!(InferenceOutcome::from(None), InferenceOutcome::Empty);

    let embedding = Embedding::new(vec![1.0], "model");
    assert_eq!(
        InferenceOutcome::from(Some(embedding.clone())),
        InferenceOutcome::Embedded(embedding)
    );
}

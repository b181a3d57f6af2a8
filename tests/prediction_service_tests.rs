// Integration tests for the prediction pipeline
//
// Exercises the public crate API end to end: normalization, keyword
// fallback scoring, label derivation, and feedback acknowledgment.

use std::sync::Arc;

use polarity::nlp::{NormalizeMode, TextNormalizer};
use polarity::scoring::{KeywordScorer, Scorer, Sentiment};
use polarity::services::feedback::{Feedback, FeedbackService, FeedbackServiceImpl};
use polarity::services::prediction::{PredictionService, PredictionServiceImpl};

fn fallback_service() -> PredictionServiceImpl {
    let scorer: Arc<dyn Scorer> = Arc::new(KeywordScorer::new());
    PredictionServiceImpl::new(scorer, "dev".into())
}

#[tokio::test]
async fn positive_keyword_text_predicts_positive() {
    let service = fallback_service();
    let prediction = service
        .predict("I love this product, amazing!")
        .await
        .unwrap();

    assert_eq!(prediction.sentiment, Sentiment::Positive);
    assert!((0.0..=1.0).contains(&prediction.score));
    assert!(prediction.latency_ms >= 0.0);
    assert_eq!(prediction.model_version, "dev");
}

#[tokio::test]
async fn negative_keyword_text_predicts_negative() {
    let service = fallback_service();
    let prediction = service.predict("I hate this, awful!").await.unwrap();

    assert_eq!(prediction.sentiment, Sentiment::Negative);
    assert!(prediction.score < 0.5);
}

#[tokio::test]
async fn label_matches_score_threshold_across_inputs() {
    let service = fallback_service();
    let inputs = [
        "great and good and cool",
        "terrible horrible awful",
        "nothing to report",
        "good but bad",
    ];

    for text in inputs {
        let prediction = service.predict(text).await.unwrap();
        let expected = if prediction.score >= 0.5 {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        };
        assert_eq!(prediction.sentiment, expected, "input: {text}");
    }
}

#[tokio::test]
async fn score_stays_clamped_under_heavy_keyword_load() {
    let service = fallback_service();
    let prediction = service
        .predict("good great love amazing excellent super cool merci")
        .await
        .unwrap();

    assert!(prediction.score <= 1.0);
    assert_eq!(prediction.sentiment, Sentiment::Positive);
}

#[tokio::test]
async fn feedback_round_trip_acknowledges_both_judgments() {
    let service = FeedbackServiceImpl::new("dev".into());

    for is_valid in [true, false] {
        let result = service
            .record(Feedback {
                text: "Great flight".into(),
                predicted: Sentiment::Positive,
                score: 0.9,
                is_valid,
                model_version: None,
            })
            .await;
        assert!(result.is_ok());
    }
}

#[test]
fn normalizing_stopwords_and_short_tokens_yields_empty() {
    let normalizer = TextNormalizer::new();
    for mode in [NormalizeMode::Lemma, NormalizeMode::Stem] {
        assert_eq!(normalizer.normalize("it is a an to of up", mode), "");
    }
}

#[test]
fn normalization_is_deterministic() {
    let normalizer = TextNormalizer::new();
    let first = normalizer.normalize("The flights were delayed badly", NormalizeMode::Lemma);
    let second = normalizer.normalize("The flights were delayed badly", NormalizeMode::Lemma);
    assert_eq!(first, second);
}

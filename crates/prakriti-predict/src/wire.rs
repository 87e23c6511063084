//! Request and response bodies exchanged with the classifier service.
//!
//! The service has shipped two response shapes: a flat
//! `{predicted, confidence, probabilities}` object and the same fields
//! nested under `prakriti`. Both decode into [`PredictResponse`] here, and
//! nothing past this module looks at the raw JSON.

use std::collections::BTreeMap;

use prakriti_core::models::answer::Answer;
use prakriti_core::models::dosha::Dosha;
use prakriti_core::models::prediction::PredictionResult;
use serde::{Deserialize, Serialize};

use crate::error::PredictError;

/// Longest slice of a response body quoted in an error message.
const BODY_EXCERPT_LEN: usize = 200;

/// `POST /predict` body.
#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub answers: Vec<WireAnswer<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireAnswer<'a> {
    pub question_id: &'a str,
    #[serde(rename = "trait")]
    pub dosha: Option<Dosha>,
    pub weight: f64,
}

impl<'a> PredictRequest<'a> {
    pub fn from_answers(answers: &'a [Answer]) -> Self {
        Self {
            answers: answers
                .iter()
                .map(|a| WireAnswer {
                    question_id: &a.question_id,
                    dosha: a.dosha,
                    weight: a.weight,
                })
                .collect(),
        }
    }
}

/// `POST /predict` response, in either supported shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PredictResponse {
    Nested {
        prakriti: PredictionBody,
        #[serde(default)]
        confidence: Option<f64>,
    },
    Flat(PredictionBody),
}

#[derive(Debug, Deserialize)]
pub struct PredictionBody {
    pub predicted: String,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub probabilities: BTreeMap<String, f64>,
}

impl PredictResponse {
    /// Check the decoded body and convert it to the domain type.
    ///
    /// Probability entries for classes other than the three categories are
    /// ignored.
    pub fn into_result(self) -> Result<PredictionResult, PredictError> {
        let (body, outer_confidence) = match self {
            PredictResponse::Nested {
                prakriti,
                confidence,
            } => (prakriti, confidence),
            PredictResponse::Flat(body) => (body, None),
        };

        let predicted = body.predicted.parse::<Dosha>().map_err(|_| {
            PredictError::BadResponse(format!("unknown predicted class '{}'", body.predicted))
        })?;

        let confidence = body
            .confidence
            .or(outer_confidence)
            .ok_or_else(|| PredictError::BadResponse("missing confidence".to_string()))?;
        if !(0.0..=1.0).contains(&confidence) {
            return Err(PredictError::BadResponse(format!(
                "confidence {confidence} outside [0, 1]"
            )));
        }

        let mut probabilities = BTreeMap::new();
        for (class, p) in body.probabilities {
            let Ok(dosha) = class.parse::<Dosha>() else {
                continue;
            };
            if !(0.0..=1.0).contains(&p) {
                return Err(PredictError::BadResponse(format!(
                    "probability {p} for {dosha} outside [0, 1]"
                )));
            }
            probabilities.insert(dosha, p);
        }

        Ok(PredictionResult {
            predicted,
            confidence,
            probabilities,
            fallback: false,
        })
    }
}

/// Decode a `/predict` response body.
pub fn decode_prediction(body: &[u8]) -> Result<PredictionResult, PredictError> {
    let response: PredictResponse = serde_json::from_slice(body).map_err(|e| {
        PredictError::BadResponse(format!("{e}. Body: {}", excerpt(body)))
    })?;
    response.into_result()
}

/// `GET /health` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierHealth {
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub model_loaded: bool,
}

impl ClassifierHealth {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy" && self.model_loaded
    }
}

pub(crate) fn excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    match text.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.into_owned(),
    }
}

//! Wire shape of the `/predict` endpoint and response interpretation
//!
//! ```text
//! POST /predict            {"email": "<raw text>"}
//! 200 OK                   {"prediction": 0 | 1, "probability": 0.0..=1.0}
//! ```

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use phishguard_core::Verdict;

use crate::error::ClientError;

/// Request body
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest<'a> {
    pub email: &'a str,
}

/// Response body as sent by the service.
///
/// Both fields are kept as raw JSON so every shape can be matched explicitly
/// in [`interpret_response`].
#[derive(Debug, Clone, Default)]
pub struct PredictResponse {
    pub prediction: Option<Value>,
    pub probability: Option<Value>,
}

/// Parse a 2xx body into a [`Verdict`]
pub fn parse_predict_body(body: &[u8]) -> Result<Verdict, ClientError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ClientError::Malformed(format!("invalid JSON body: {e}")))?;

    // A derived struct would also accept `[prediction, probability]` arrays
    let mut fields = match value {
        Value::Object(fields) => fields,
        other => {
            return Err(ClientError::Malformed(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            )))
        }
    };

    let response = PredictResponse {
        prediction: fields.remove("prediction"),
        probability: fields.remove("probability"),
    };
    interpret_response(&response)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Map a decoded response onto a verdict.
///
/// `prediction` must be the integer `0` or `1`; anything else (absent, null,
/// a string, another integer) is reported as malformed rather than read as
/// "safe". A missing or unusable `probability` yields a verdict without a
/// confidence readout.
pub fn interpret_response(response: &PredictResponse) -> Result<Verdict, ClientError> {
    let probability = interpret_probability(response.probability.as_ref());

    match response.prediction.as_ref().map(Value::as_i64) {
        Some(Some(1)) => Ok(Verdict::phishing(probability)),
        Some(Some(0)) => Ok(Verdict::legitimate(probability)),
        Some(Some(other)) => Err(ClientError::Malformed(format!(
            "prediction out of range: {other}"
        ))),
        Some(None) => Err(ClientError::Malformed(format!(
            "prediction is not an integer: {}",
            response.prediction.as_ref().unwrap_or(&Value::Null)
        ))),
        None => Err(ClientError::Malformed("missing prediction".to_string())),
    }
}

fn interpret_probability(value: Option<&Value>) -> Option<f64> {
    match value {
        None | Some(Value::Null) => None,
        Some(v) => match v.as_f64() {
            Some(p) if p.is_finite() && (0.0..=1.0).contains(&p) => Some(p),
            _ => {
                warn!("Ignoring unusable probability in response: {}", v);
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phishguard_core::Label;
    use serde_json::json;

    fn body(value: Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[test]
    fn test_request_serializes_email_field() {
        let req = PredictRequest {
            email: "Subject: hi\n\nbody",
        };
        let encoded = serde_json::to_value(&req).unwrap();
        assert_eq!(encoded, json!({"email": "Subject: hi\n\nbody"}));
    }

    #[test]
    fn test_phishing_prediction() {
        let verdict =
            parse_predict_body(&body(json!({"prediction": 1, "probability": 0.873}))).unwrap();
        assert_eq!(verdict.label, Label::Phishing);
        assert_eq!(verdict.confidence().unwrap().to_string(), "87.3%");
    }

    #[test]
    fn test_legitimate_prediction() {
        let verdict =
            parse_predict_body(&body(json!({"prediction": 0, "probability": 0.12}))).unwrap();
        assert_eq!(verdict.label, Label::Legitimate);
        assert_eq!(verdict.confidence().unwrap().to_string(), "88.0%");
    }

    #[test]
    fn test_missing_probability_keeps_verdict() {
        let verdict = parse_predict_body(&body(json!({"prediction": 1}))).unwrap();
        assert!(verdict.is_phishing());
        assert!(verdict.probability.is_none());
    }

    #[test]
    fn test_out_of_range_probability_is_dropped() {
        let verdict =
            parse_predict_body(&body(json!({"prediction": 0, "probability": 1.7}))).unwrap();
        assert!(verdict.probability.is_none());

        let verdict =
            parse_predict_body(&body(json!({"prediction": 0, "probability": "high"}))).unwrap();
        assert!(verdict.probability.is_none());
    }

    #[test]
    fn test_missing_prediction_is_malformed() {
        let err = parse_predict_body(&body(json!({"probability": 0.4}))).unwrap_err();
        assert!(matches!(err, ClientError::Malformed(_)));
    }

    #[test]
    fn test_unknown_prediction_values_are_malformed() {
        for prediction in [json!(2), json!(-1), json!("1"), json!(null), json!(true)] {
            let err = parse_predict_body(&body(json!({"prediction": prediction})))
                .expect_err("should reject");
            assert!(matches!(err, ClientError::Malformed(_)));
        }
    }

    #[test]
    fn test_non_json_body_is_malformed() {
        let err = parse_predict_body(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ClientError::Malformed(_)));
    }

    #[test]
    fn test_non_object_body_is_malformed() {
        let err = parse_predict_body(b"[1, 0.9]").unwrap_err();
        assert!(matches!(err, ClientError::Malformed(_)));

        let err = parse_predict_body(b"[0]").unwrap_err();
        assert!(matches!(err, ClientError::Malformed(_)));

        let err = parse_predict_body(b"1").unwrap_err();
        assert!(matches!(err, ClientError::Malformed(_)));
    }

    #[test]
    fn test_null_prediction_field_is_malformed() {
        let err = parse_predict_body(br#"{"prediction": null, "probability": 0.2}"#).unwrap_err();
        assert!(matches!(err, ClientError::Malformed(_)));
    }
}

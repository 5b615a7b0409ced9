//! Lenient numeric fields for request bodies.
//!
//! Clients may send numbers either as JSON numbers or as numeric strings
//! (`80` and `"80"` are equivalent). Nothing beyond that conversion is
//! applied.

use serde::de::Error;
use serde::Deserialize;
use serde::Deserializer;

#[derive(Deserialize)]
#[serde(untagged)]
enum Numeric {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Numeric {
    fn into_f64(self) -> Option<f64> {
        match self {
            Numeric::Integer(value) => Some(value as f64),
            Numeric::Float(value) => Some(value),
            Numeric::Text(text) => text.trim().parse::<f64>().ok(),
        }
        .filter(|value| value.is_finite())
    }

    fn into_i64(self) -> Option<i64> {
        match &self {
            Numeric::Integer(value) => return Some(*value),
            Numeric::Text(text) => {
                if let Ok(value) = text.trim().parse::<i64>() {
                    return Some(value);
                }
            }
            Numeric::Float(_) => {}
        }

        self.into_f64()
            .filter(|value| value.fract() == 0.0 && value.abs() < i64::MAX as f64)
            .map(|value| value as i64)
    }
}

/// Deserialize an integer roll number.
pub fn roll_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Numeric::deserialize(deserializer)?
        .into_i64()
        .ok_or_else(|| D::Error::custom("rollno must be an integer"))
}

/// Deserialize a required score.
pub fn score<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Numeric::deserialize(deserializer)?
        .into_f64()
        .ok_or_else(|| D::Error::custom("score must be a number"))
}

/// Deserialize an optional score; `null` counts as absent.
pub fn optional_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Numeric>::deserialize(deserializer)?
        .map(|value| {
            value
                .into_f64()
                .ok_or_else(|| D::Error::custom("score must be a number"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(deserialize_with = "super::roll_number")]
        rollno: i64,
        #[serde(deserialize_with = "super::score")]
        tamil: f64,
        #[serde(default, deserialize_with = "super::optional_score")]
        maths: Option<f64>,
    }

    fn parse(json: &str) -> Result<Body, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_accepts_numbers_and_numeric_strings() {
        let body = parse(r#"{"rollno": "12", "tamil": "80.5", "maths": 90}"#).unwrap();
        assert_eq!(body.rollno, 12);
        assert_eq!(body.tamil, 80.5);
        assert_eq!(body.maths, Some(90.0));

        let body = parse(r#"{"rollno": 12.0, "tamil": 80}"#).unwrap();
        assert_eq!(body.rollno, 12);
        assert_eq!(body.maths, None);
    }

    #[test]
    fn test_null_optional_score_is_absent() {
        let body = parse(r#"{"rollno": 1, "tamil": 1, "maths": null}"#).unwrap();
        assert_eq!(body.maths, None);
    }

    #[test]
    fn test_rejects_non_numeric_values() {
        let err = parse(r#"{"rollno": "abc", "tamil": 1}"#).unwrap_err();
        assert!(err.to_string().contains("rollno must be an integer"));

        let err = parse(r#"{"rollno": 1.5, "tamil": 1}"#).unwrap_err();
        assert!(err.to_string().contains("rollno must be an integer"));

        let err = parse(r#"{"rollno": 1, "tamil": "high"}"#).unwrap_err();
        assert!(err.to_string().contains("score must be a number"));

        assert!(parse(r#"{"rollno": 1, "tamil": true}"#).is_err());
    }
}

use anyhow::bail;
use folio_models::contact::{ContactField, FieldErrors, RawContactSubmission};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const FIELD_NOT_TEXT: &str = "Must be a string";

/// Request body of the contact endpoint.
///
/// Every field is optional here so that missing fields can be reported as
/// such instead of failing to parse.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiContactSubmission {
    pub name: Option<ApiField>,
    pub email: Option<ApiField>,
    pub phone: Option<ApiField>,
    pub message: Option<ApiField>,
    pub budget: Option<ApiField>,
    pub timeline: Option<ApiField>,
    pub subject: Option<ApiField>,
}

/// A field value as sent by the client. Values of any other JSON type are
/// kept so that they can be reported as invalid fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ApiField {
    Text(String),
    Other(Value),
}

impl ApiContactSubmission {
    /// Parse a request body.
    ///
    /// Fails only for malformed JSON and for `null`. Any other value that is
    /// not an object carries no fields.
    pub fn from_json(body: &[u8]) -> anyhow::Result<Self> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Null => bail!("The request body is null"),
            object @ Value::Object(_) => serde_json::from_value(object).map_err(Into::into),
            _ => Ok(Self::default()),
        }
    }
}

impl TryFrom<ApiContactSubmission> for RawContactSubmission {
    type Error = FieldErrors;

    fn try_from(value: ApiContactSubmission) -> Result<Self, Self::Error> {
        let fields = [
            (ContactField::Name, value.name),
            (ContactField::Email, value.email),
            (ContactField::Phone, value.phone),
            (ContactField::Message, value.message),
            (ContactField::Budget, value.budget),
            (ContactField::Timeline, value.timeline),
            (ContactField::Subject, value.subject),
        ];

        let mut raw = RawContactSubmission::default();
        let mut errors = FieldErrors::new();
        for (field, value) in fields {
            match value {
                Some(ApiField::Text(text)) => raw.set(field, text),
                Some(ApiField::Other(_)) => {
                    errors.insert(field, FIELD_NOT_TEXT);
                }
                None => {}
            }
        }

        if errors.is_empty() {
            Ok(raw)
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiContactSuccess<'a> {
    pub message: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ApiInvalidFields {
    pub error: &'static str,
    pub fields: FieldErrors,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn from_json() {
        let result = ApiContactSubmission::from_json(
            br#"{"name":"Jo","email":null,"phone":5,"budget":["<5k"],"extra":true}"#,
        )
        .unwrap();

        assert_eq!(result.name, Some(ApiField::Text("Jo".into())));
        assert_eq!(result.email, None);
        assert_eq!(result.phone, Some(ApiField::Other(5.into())));
        assert_eq!(result.budget, Some(ApiField::Other(serde_json::json!(["<5k"]))));
    }

    #[test]
    fn from_json_not_an_object() {
        for body in ["[]", "42", r#""Jo""#, "true"] {
            let result = ApiContactSubmission::from_json(body.as_bytes()).unwrap();
            assert_eq!(
                RawContactSubmission::try_from(result).unwrap(),
                RawContactSubmission::default()
            );
        }
    }

    #[test]
    fn from_json_malformed() {
        for body in ["null", "{not json", r#"{"name":"#, ""] {
            assert!(ApiContactSubmission::from_json(body.as_bytes()).is_err(), "{body:?}");
        }
    }

    #[test]
    fn non_text_fields_are_invalid() {
        let submission = ApiContactSubmission::from_json(
            br#"{"name":42,"email":"jo@x.com","message":{"text":"hi"},"subject":"Hi"}"#,
        )
        .unwrap();

        let result = RawContactSubmission::try_from(submission);

        assert_eq!(
            result,
            Err(FieldErrors::from([
                (ContactField::Name, FIELD_NOT_TEXT),
                (ContactField::Message, FIELD_NOT_TEXT),
            ]))
        );
    }
}

use serde::Deserialize;

/// Response body that is either the value itself or `{ "data": value }`.
///
/// The backend is not consistent about wrapping, so both forms are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Payload<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Payload<T> {
    pub fn into_inner(self) -> T {
        match self {
            Payload::Wrapped { data } => data,
            Payload::Bare(value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_overview::CountResponse;

    #[test]
    fn test_wrapped_and_bare_lists() {
        let wrapped: Payload<Vec<i32>> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        let bare: Payload<Vec<i32>> = serde_json::from_str("[1,2]").unwrap();
        assert_eq!(wrapped.into_inner(), bare.into_inner());
    }

    #[test]
    fn test_bare_object() {
        let p: Payload<CountResponse> = serde_json::from_str(r#"{"count":3}"#).unwrap();
        assert_eq!(p.into_inner().count, 3);
    }
}

use serde_json::{Map, Value};

/// Pull the outermost JSON object out of a raw model reply. Models wrap
/// answers in prose or code fences often enough that plain parsing is not
/// an option, so this slices from the first `{` to the last `}` and
/// parses that. Anything that is not a non-empty object counts as a
/// failed extraction.
pub fn extract_json_object(raw: &str) -> Option<Map<String, Value>> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    let parsed: Value = serde_json::from_str(&raw[start..=end]).ok()?;
    match parsed {
        Value::Object(map) if !map.is_empty() => Some(map),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_object() {
        let map = extract_json_object(r#"{"country":"KR"}"#).unwrap();
        assert_eq!(map["country"], "KR");
    }

    #[test]
    fn test_object_inside_code_fence() {
        let raw = "```json\n{\"score\": 12}\n```";
        let map = extract_json_object(raw).unwrap();
        assert_eq!(map["score"], 12);
    }

    #[test]
    fn test_object_with_surrounding_prose() {
        let raw = "분석 결과는 다음과 같습니다: {\"a\": {\"b\": 1}} 이상입니다.";
        let map = extract_json_object(raw).unwrap();
        assert_eq!(map["a"]["b"], 1);
    }

    #[test]
    fn test_empty_object_is_a_failure() {
        assert!(extract_json_object("{}").is_none());
    }

    #[test]
    fn test_no_braces() {
        assert!(extract_json_object("JSON이 아닙니다").is_none());
        assert!(extract_json_object("").is_none());
    }

    #[test]
    fn test_reversed_braces() {
        assert!(extract_json_object("} 깨진 출력 {").is_none());
    }

    #[test]
    fn test_invalid_json_between_braces() {
        assert!(extract_json_object("{not json at all}").is_none());
    }

    #[test]
    fn test_truncated_object() {
        assert!(extract_json_object("{\"a\": [1, 2").is_none());
    }
}

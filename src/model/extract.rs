use crate::model::JsonMap;

pub fn extract_json(raw: &str) -> JsonMap {
    let cleaned = raw.trim();

    let slice = match (cleaned.find('{'), cleaned.rfind('}')) {
        (Some(start), Some(end)) if start <= end => &cleaned[start..=end],
        _ => {
            tracing::warn!("no JSON object found in model response");
            return JsonMap::new();
        }
    };

    match serde_json::from_str::<serde_json::Value>(slice) {
        Ok(serde_json::Value::Object(map)) => map,
        Ok(other) => {
            tracing::warn!("model response parsed to non-object JSON: {}", other);
            JsonMap::new()
        }
        Err(e) => {
            tracing::warn!("failed to decode model response: {} (raw: {})", e, slice);
            JsonMap::new()
        }
    }
}

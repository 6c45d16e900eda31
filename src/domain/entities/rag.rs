use serde::{Deserialize, Serialize};

/// A RAG answer request over a set of selected chunks. `request_id` is a
/// caller-supplied correlation token echoed back in the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RagRequest {
    pub request_id: i64,
    pub query: String,
    pub chunks: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RagResponseDto {
    pub request_id: i64,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rag_request_wire_format() {
        let req = RagRequest {
            request_id: 42,
            query: "what is this about".into(),
            chunks: vec![1, 5, 9],
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["requestId"], 42);
        assert_eq!(json["chunks"], serde_json::json!([1, 5, 9]));
    }
}

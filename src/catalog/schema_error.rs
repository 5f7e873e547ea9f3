#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Could not read schema descriptor: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid schema descriptor: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Index '{index}' on '{collection}' references unknown property '{property}'")]
    UnknownIndexProperty { collection: String, index: String, property: String },
}

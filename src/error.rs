use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("malformed payload in `{element_id}`: {detail}")]
    MalformedPayload { element_id: String, detail: String },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("backend failed to create chart on `{canvas_id}`: {detail}")]
    BackendCreate { canvas_id: String, detail: String },
}

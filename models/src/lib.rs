//! Data structures exchanged with the Build-a-BOT backend and held by the views.
//!
//! Models carry no behavior beyond construction-time validation; the
//! client and the view flows in `client-core` operate on them.

pub mod answer;
pub mod error;
pub mod upload;

pub use answer::{AnswerRecord, ErrorBody, ProcessRequest};
pub use error::model_error::ModelError;
pub use upload::UploadedFile;

#[cfg(test)]
mod tests;

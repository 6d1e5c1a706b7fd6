//! View orchestration shared by the primary and secondary views.
//!
//! Both views compose the same [`flow::AskFlow`] and [`upload::UploadFlow`],
//! differing only in their [`flow::FlowOptions`] and upload notices. View
//! state lives in a [`state::ViewStore`] so renderers can observe loading
//! while a flow is in flight.

pub mod flow;
pub mod primary;
pub mod secondary;
pub mod state;
pub mod upload;

pub use flow::{AskFlow, FlowOptions, RenderMode, SubmitOutcome};
pub use primary::PrimaryView;
pub use secondary::SecondaryView;
pub use state::{ViewState, ViewStore};
pub use upload::{Notice, UploadFlow, UploadNotices};

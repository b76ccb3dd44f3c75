//! Service layer - lookup orchestration
//!
//! The four parts of the lookup form: input/session state, the request
//! dispatcher, the response normalizer and the presentation model.

pub mod logging;
pub mod lookup;
pub mod normalize;
pub mod presentation;
pub mod session;

pub use logging::LookupEvent;
pub use lookup::{endpoint_url, LookupService};
pub use normalize::normalize;
pub use presentation::{render, Panel, Phase, ResultBlock, Row};
pub use session::{LookupForm, LookupSession, Settled, Submission};

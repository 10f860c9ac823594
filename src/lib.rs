// Library root
// -----------
// The binary (`main.rs`) parses the command line and hands an `ApiClient`
// to `ui::run`, which drives the whole workflow.
//
// Module responsibilities:
// - `api`: blocking HTTP calls to the analysis backend (health, upload,
//   export).
// - `args`: splits positional arguments into documents and an industry.
// - `model`: response shapes.
// - `render`: prints an analysis result.
// - `persist`: writes curriculum.json and the exported deck.
// - `prompt`: yes/no input sources.
// - `ui`: the sequential workflow and its console output.
pub mod api;
pub mod args;
pub mod error;
pub mod logger;
pub mod model;
pub mod persist;
pub mod prompt;
pub mod render;
pub mod ui;

pub use api::{ApiClient, Timeouts};
pub use args::Invocation;
pub use error::{ClientError, UsageError};

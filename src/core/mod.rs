pub mod engine;
pub mod generator;
pub mod pipeline;
pub mod validator;

pub use crate::domain::model::{FixtureSet, ScheduledMatch, Team, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
pub use validator::{Violation, ViolationKind};

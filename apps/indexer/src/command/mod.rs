pub mod build;
pub mod clean;
pub mod stats;

use crate::error::Result;

pub use build::BuildCommand;
pub use clean::CleanCommand;
pub use stats::StatsCommand;

#[async_trait::async_trait]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

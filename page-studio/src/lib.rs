//! Page Studio - brand page composition engine
//!
//! # Overview
//!
//! - **Access model** (`auth`): static role permissions plus the shared
//!   module-visibility override
//! - **Visibility** (`visibility`): lenient reads, elevated read-modify-write
//! - **Pages** (`pages`): template generation, cloning, legacy import, rendering
//! - **Assets** (`assets`): concurrent image resolution with last-page-wins
//! - **Lifecycle** (`lifecycle`): editor workflow and orchestration
//! - **Storage** (`storage`): collaborator traits and an in-memory store
//!
//! # Layout
//!
//! ```text
//! page-studio/src/
//! ├── core/          # config
//! ├── auth/          # permissions, access resolution, navigation, identity
//! ├── visibility/    # module visibility store adapter
//! ├── pages/         # template, clone, import, render
//! ├── assets/        # classifier, fan-out, session
//! ├── lifecycle/     # workflow state machine, orchestrator
//! ├── storage/       # store traits, memory store
//! └── utils/         # logger, error re-exports
//! ```

pub mod assets;
pub mod auth;
pub mod core;
pub mod lifecycle;
pub mod pages;
pub mod storage;
pub mod utils;
pub mod visibility;

// Re-export public types
pub use assets::{AssetResolver, AssetSession, BaseUrlResolver, ResolvedAssets};
pub use auth::{IdentityProvider, StaticIdentity};
pub use crate::core::Config;
pub use lifecycle::{PageLifecycle, WorkflowState};
pub use pages::{TemplateLevel, clone_page, generate};
pub use storage::{MemoryStore, PageStore, VisibilityDocumentStore};
pub use visibility::VisibilityService;

// Re-export unified error types from shared
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

// Security logging macro - supports tracing format specifiers
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load `.env`, read config and install the logger
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(
        &config.log_level,
        config.is_production(),
        config.log_dir.as_deref(),
    )?;
    Ok(config)
}

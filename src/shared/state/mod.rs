// Framework-independent UI state
pub mod session;
pub mod shell;

pub use session::{DashboardPhase, MountGuard, load_current_user, logout, read_token};
pub use shell::{PointerTarget, ShellState};

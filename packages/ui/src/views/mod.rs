mod app_shell;
pub use app_shell::{use_shell, AppShell, ShellControls};

mod page_placeholder;
pub use page_placeholder::PagePlaceholder;

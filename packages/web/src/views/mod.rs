mod shell_layout;
pub use shell_layout::ShellLayout;

mod pages;
pub use pages::{AdminBooks, AdminMembers, AdminRequests, Books, Dashboard, MyBorrows, NotFound};

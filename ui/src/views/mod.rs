mod home;
mod shell;

pub use home::Home;
pub use shell::PageShell;

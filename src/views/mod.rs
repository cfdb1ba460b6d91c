mod footer;
mod header;
mod home;
mod shell;

pub use footer::Footer;
pub use header::Header;
pub use home::Home;
pub use shell::Shell;

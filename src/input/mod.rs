pub mod prompt;
pub mod session;

pub use prompt::Prompter;
pub use session::InteractiveSession;

pub mod notify;
pub mod timer;

pub use notify::alert;
pub use timer::sleep;

mod cli_mode;
mod month_mode;
mod options_mode;
mod parse_mode;

pub use cli_mode::{CliMode, CliModeResult};
pub use month_mode::month_mode;
pub use options_mode::options_mode;
pub use parse_mode::parse_mode;

pub mod generate;
pub mod init;
pub mod plan;
pub mod services;
pub mod util;

pub use generate::*;
pub use init::*;
pub use plan::*;
pub use services::*;
pub use util::*;

mod actions;
pub use actions::*;

mod cors;
pub use cors::*;

mod logging;
pub use logging::*;

mod server;
pub use server::*;

mod solana;
pub use solana::*;

mod amount;
pub use amount::*;

mod base64;
pub use base64::*;

mod url;
pub use url::*;

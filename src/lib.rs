pub mod logging;
pub mod util;
pub mod error;
pub mod tokenize;
pub mod count;
pub mod rank;

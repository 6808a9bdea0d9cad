mod bank;

pub use bank::{builtin_bank, builtin_questions};

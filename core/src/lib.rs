pub mod record;
pub mod scanner;

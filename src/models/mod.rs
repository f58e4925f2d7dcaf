pub mod elapsed;
pub mod row;

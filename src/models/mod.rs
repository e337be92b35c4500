pub mod approval;
pub mod check_type;
pub mod item;
pub mod worktime;

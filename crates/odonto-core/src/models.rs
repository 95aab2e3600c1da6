pub mod chart;
pub mod note;
pub mod patient;
pub mod reminder;
pub mod tooth;

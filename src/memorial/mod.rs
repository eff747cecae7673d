pub mod memorials_state;
pub mod submission;

pub mod file_name;
pub mod presenter;
pub mod protocol;
pub mod timer;
pub mod typewriter;
pub mod view_state;

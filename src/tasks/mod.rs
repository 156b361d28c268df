pub mod refresh;
pub mod watch_loop;

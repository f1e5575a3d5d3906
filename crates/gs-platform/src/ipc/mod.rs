mod messenger;

pub use messenger::InProcessMessenger;

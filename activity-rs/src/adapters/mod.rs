pub mod mock;
pub mod production;

pub use mock::ActivityMock;
pub use production::ActivityHttp;

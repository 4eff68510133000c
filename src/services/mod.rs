pub mod poller;
pub mod printer;
pub mod tasks;

pub use poller::TaskPoller;
pub use printer::print_tasks;
pub use tasks::TasksClient;

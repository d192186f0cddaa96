pub mod series;

pub use series::by_port;

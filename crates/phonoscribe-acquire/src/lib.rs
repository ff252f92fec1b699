pub mod client;
pub mod scan;
pub mod site;

pub use client::build_client;
pub use site::Site;

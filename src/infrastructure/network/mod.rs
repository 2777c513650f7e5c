pub mod http_pinger;

pub use http_pinger::HttpPinger;

pub mod synthesia_client;

pub use synthesia_client::SynthesiaClient;

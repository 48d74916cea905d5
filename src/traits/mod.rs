pub mod llm_transport;
pub mod digest_producer;

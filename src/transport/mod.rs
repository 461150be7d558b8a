/// Session-scoped transport to the peer-to-peer order relay
pub mod relay;

use hickory_proto::rr::rdata::SRV;
use hickory_proto::rr::{Name, RData};

/// Payloads that carry a name of their own, distinct from the owner name.
pub trait EmbeddedTarget {
    fn embedded_target(&self) -> Option<&Name>;

    /// Replaces the embedded name. Returns `false` if the payload has none.
    fn set_embedded_target(&mut self, target: Name) -> bool;
}

impl EmbeddedTarget for RData {
    fn embedded_target(&self) -> Option<&Name> {
        match self {
            RData::SRV(srv) => Some(srv.target()),
            _ => None,
        }
    }

    fn set_embedded_target(&mut self, target: Name) -> bool {
        match self {
            RData::SRV(srv) => {
                *srv = SRV::new(srv.priority(), srv.weight(), srv.port(), target);
                true
            }
            _ => false,
        }
    }
}

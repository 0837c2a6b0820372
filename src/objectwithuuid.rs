use uuid::Uuid;

/// Reports carry a per-run identifier so a host can correlate a report
/// with the request that produced it.
pub trait ObjectWithUUID {
    fn uuid(&self) -> &Uuid;
}

/// Request gate shared by the upload and chat components.
///
/// At most one request per component is outstanding; new submissions are
/// rejected, not queued, while `InFlight`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestPhase {
    #[default]
    Idle,
    InFlight,
}

impl RequestPhase {
    pub fn is_in_flight(self) -> bool {
        self == Self::InFlight
    }
}

use crate::types::Protocol;

/// Get the protocol variant from a scheme string (ASCII case-insensitive).
/// Filters by length first so each name is compared at most once.
pub fn get_protocol(scheme: &str) -> Option<Protocol> {
    let eq = |name: &str| scheme.eq_ignore_ascii_case(name);

    match scheme.len() {
        4 if eq("rtmp") => Some(Protocol::Rtmp),
        5 if eq("rtmpt") => Some(Protocol::Rtmpt),
        5 if eq("rtmps") => Some(Protocol::Rtmps),
        5 if eq("rtmpe") => Some(Protocol::Rtmpe),
        5 if eq("rtmfp") => Some(Protocol::Rtmfp),
        6 if eq("rtmpte") => Some(Protocol::Rtmpte),
        6 if eq("rtmpts") => Some(Protocol::Rtmpts),
        _ => None,
    }
}

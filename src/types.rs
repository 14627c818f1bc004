/// Transport feature bits shared with the connection layer
pub const FEATURE_HTTP: u8 = 0x01;
pub const FEATURE_ENC: u8 = 0x02;
pub const FEATURE_SSL: u8 = 0x04;
pub const FEATURE_MFP: u8 = 0x08;

/// RTMP protocol variants
///
/// The discriminant is the interop code handed to the connection layer:
/// a combination of the `FEATURE_*` bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Protocol {
    #[default]
    Rtmp = 0,
    Rtmpt = FEATURE_HTTP,
    Rtmpe = FEATURE_ENC,
    Rtmpte = FEATURE_HTTP | FEATURE_ENC,
    Rtmps = FEATURE_SSL,
    Rtmpts = FEATURE_HTTP | FEATURE_SSL,
    Rtmfp = FEATURE_MFP,
}

/// Returned by `Protocol::from_str` for names outside the scheme table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownProtocol;

impl core::fmt::Display for UnknownProtocol {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Unknown protocol")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnknownProtocol {}

impl Protocol {
    /// Interop code (feature bit set)
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Rtmp),
            FEATURE_HTTP => Some(Self::Rtmpt),
            FEATURE_ENC => Some(Self::Rtmpe),
            0x03 => Some(Self::Rtmpte),
            FEATURE_SSL => Some(Self::Rtmps),
            0x05 => Some(Self::Rtmpts),
            FEATURE_MFP => Some(Self::Rtmfp),
            _ => None,
        }
    }

    /// Resolve a scheme name (case-insensitive)
    pub fn from_scheme(scheme: &str) -> Option<Self> {
        crate::scheme::get_protocol(scheme)
    }

    /// Canonical lowercase scheme name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rtmp => "rtmp",
            Self::Rtmpt => "rtmpt",
            Self::Rtmpe => "rtmpe",
            Self::Rtmpte => "rtmpte",
            Self::Rtmps => "rtmps",
            Self::Rtmpts => "rtmpts",
            Self::Rtmfp => "rtmfp",
        }
    }

    /// Tunneled over HTTP
    pub fn is_tunneled(self) -> bool {
        self.code() & FEATURE_HTTP != 0
    }

    pub fn is_encrypted(self) -> bool {
        self.code() & FEATURE_ENC != 0
    }

    /// Carried over TLS
    pub fn is_secure(self) -> bool {
        self.code() & FEATURE_SSL != 0
    }

    /// Get the default port for this protocol
    pub fn default_port(self) -> u16 {
        if self.is_secure() {
            443
        } else if self.is_tunneled() {
            80
        } else {
            1935
        }
    }
}

impl core::fmt::Display for Protocol {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Protocol {
    type Err = UnknownProtocol;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Self::from_scheme(s).ok_or(UnknownProtocol)
    }
}

use crate::compat::{String, format};
use crate::error::Result;
use crate::types::Protocol;
use crate::url_components::UrlComponents;

/// A parsed RTMP URL that borrows every component from the input string
///
/// Example input: "<rtmp://example.com:1935/live/inst/stream>"
/// Components track spans into the input for zero-copy access; the input
/// must outlive the `ParsedUrl`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedUrl<'a> {
    input: &'a str,
    protocol: Protocol,
    components: UrlComponents,
}

impl<'a> ParsedUrl<'a> {
    pub(crate) fn new(input: &'a str, protocol: Protocol, components: UrlComponents) -> Self {
        Self {
            input,
            protocol,
            components,
        }
    }

    /// Parse an RTMP URL
    ///
    /// # Examples
    ///
    /// ```
    /// use rtmp_url::{ParsedUrl, Protocol};
    ///
    /// let url = ParsedUrl::parse("rtmp://example.com:1935/live/inst/stream").unwrap();
    /// assert_eq!(url.protocol(), Protocol::Rtmp);
    /// assert_eq!(url.host(), "example.com");
    /// assert_eq!(url.port(), 1935);
    /// assert_eq!(url.app(), "live/inst");
    /// assert_eq!(url.playpath(), "stream");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the input has no `://` or no hostname after it.
    pub fn parse(input: &'a str) -> Result<Self> {
        crate::parser::parse(input)
    }

    /// Check if a string parses as an RTMP URL
    ///
    /// ```
    /// use rtmp_url::ParsedUrl;
    ///
    /// assert!(ParsedUrl::can_parse("rtmp://example.com/live"));
    /// assert!(ParsedUrl::can_parse("foo://example.com")); // unknown scheme is tolerated
    /// assert!(!ParsedUrl::can_parse("example.com/live"));
    /// ```
    pub fn can_parse(input: &str) -> bool {
        crate::parser::parse(input).is_ok()
    }

    /// The original input string
    pub fn as_str(&self) -> &'a str {
        self.input
    }

    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Hostname, empty when absent or longer than 255 bytes
    pub fn host(&self) -> &'a str {
        self.components.host.slice(self.input)
    }

    /// Explicit port, 0 when unspecified or invalid
    pub fn port(&self) -> u16 {
        self.components.port
    }

    /// Explicit port, or the protocol default when none was given
    pub fn effective_port(&self) -> u16 {
        match self.components.port {
            0 => self.protocol.default_port(),
            port => port,
        }
    }

    /// Application, `app[/appinstance]`
    pub fn app(&self) -> &'a str {
        self.components.app.slice(self.input)
    }

    /// Stream name and arguments, as written in the URL
    pub fn playpath(&self) -> &'a str {
        self.components.playpath.slice(self.input)
    }

    /// Spans of each component within [`as_str`](Self::as_str)
    pub fn components(&self) -> UrlComponents {
        self.components
    }

    /// Connection URL announced to the server: `scheme://host:port/app`
    ///
    /// ```
    /// use rtmp_url::ParsedUrl;
    ///
    /// let url = ParsedUrl::parse("RTMPS://example.com/live/stream").unwrap();
    /// assert_eq!(url.tc_url(), "rtmps://example.com:443/live");
    /// ```
    pub fn tc_url(&self) -> String {
        format!(
            "{}://{}:{}/{}",
            self.protocol,
            self.host(),
            self.effective_port(),
            self.app()
        )
    }
}

impl core::fmt::Display for ParsedUrl<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.input)
    }
}

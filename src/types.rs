/// URL scheme types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemeType {
    Http,
    Https,
    Ws,
    Wss,
    Ftp,
    File,
    /// Any scheme without a well-known default port, or no scheme at all
    #[default]
    Other,
}

impl SchemeType {
    /// Get the default port for this scheme
    pub fn default_port(self) -> Option<u16> {
        match self {
            Self::Http | Self::Ws => Some(80),
            Self::Https | Self::Wss => Some(443),
            Self::Ftp => Some(21),
            Self::File | Self::Other => None,
        }
    }

    /// Port to render, or `None` when `port` is this scheme's default
    pub fn explicit_port(self, port: Option<u16>) -> Option<u16> {
        port.filter(|&port| self.default_port() != Some(port))
    }
}

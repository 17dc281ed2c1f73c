//! protoc release archive naming

use crate::host::{HostInfo, HostOs};

/// Host architecture names and the names protoc publishes release archives under.
/// Names not listed here are used unchanged.
const ARCH_TRANSLATIONS: &[(&str, &str)] = &[
    ("x86_64", "x86_64"),
    ("amd64", "x86_64"),
    ("x86", "x86_32"),
    ("386", "x86_32"),
    ("aarch64", "aarch_64"),
    ("arm64", "aarch_64"),
    ("powerpc64le", "ppcle_64"),
    ("ppc64le", "ppcle_64"),
    ("s390x", "s390_64"),
];

/// Translate a host architecture name into protoc's archive naming
pub fn protoc_arch(arch: &str) -> &str {
    ARCH_TRANSLATIONS
        .iter()
        .find(|(host, _)| *host == arch)
        .map_or(arch, |(_, archive)| archive)
}

/// Identifies one protoc release archive: version plus target platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveDescriptor {
    pub version: String,
    pub os: HostOs,
    pub arch: String,
}

impl ArchiveDescriptor {
    pub fn new(version: impl Into<String>, os: HostOs, arch: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            os,
            arch: arch.into(),
        }
    }

    /// Descriptor for the given host
    pub fn for_host(version: impl Into<String>, host: &HostInfo) -> Self {
        Self::new(version, host.os.clone(), host.arch.clone())
    }

    /// Platform part of the archive name, e.g. `linux-x86_64`, `osx-aarch_64` or `win64`
    pub fn platform(&self) -> String {
        match &self.os {
            HostOs::Windows => {
                if protoc_arch(&self.arch) == "x86_32" {
                    "win32".to_string()
                } else {
                    "win64".to_string()
                }
            }
            HostOs::MacOs => format!("osx-{}", protoc_arch(&self.arch)),
            HostOs::Linux => format!("linux-{}", protoc_arch(&self.arch)),
            HostOs::Other(name) => format!("{}-{}", name, protoc_arch(&self.arch)),
        }
    }

    /// Archive file name, e.g. `protoc-26.1-linux-x86_64.zip`
    pub fn file_name(&self) -> String {
        format!("protoc-{}-{}.zip", self.version, self.platform())
    }

    /// Download URL below `base_url` (the releases download root)
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/v{}/{}",
            base_url.trim_end_matches('/'),
            self.version,
            self.file_name()
        )
    }
}

//! Translating server-side storage paths into locally reachable ones.

/// How an item's server-side path becomes a local path.
///
/// `Identity` assumes the server and this machine mount the media under the
/// same paths. `PrefixSubstitution` rewrites a leading server prefix (e.g.
/// `/data`) into the local mount point (e.g. `/home/user/net`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathMappingPolicy {
    Identity,
    PrefixSubstitution {
        remote_prefix: String,
        local_prefix: String,
    },
}

impl PathMappingPolicy {
    /// Build the policy from the two optional CLI prefixes. Both must be
    /// given for substitution to take effect; otherwise paths pass through
    /// unchanged.
    pub fn from_options(remote_prefix: Option<String>, local_prefix: Option<String>) -> Self {
        match (remote_prefix, local_prefix) {
            (Some(remote), Some(local)) => PathMappingPolicy::PrefixSubstitution {
                remote_prefix: remote,
                local_prefix: local,
            },
            _ => PathMappingPolicy::Identity,
        }
    }

    /// Resolve a server-side path to its local equivalent.
    ///
    /// Substitution is start-anchored and applied at most once: a path that
    /// does not begin with the remote prefix is returned unchanged, and an
    /// occurrence of the prefix elsewhere in the path is never touched.
    pub fn resolve(&self, path: &str) -> String {
        match self {
            PathMappingPolicy::Identity => path.to_string(),
            PathMappingPolicy::PrefixSubstitution {
                remote_prefix,
                local_prefix,
            } => match path.strip_prefix(remote_prefix.as_str()) {
                Some(rest) => format!("{local_prefix}{rest}"),
                None => path.to_string(),
            },
        }
    }
}
